//! Placement legality, word extraction and scoring
//!
//! A placement is an origin square, an axis and the ordered tiles to drop.
//! Tiles fill empty squares only; occupied squares along the axis are
//! absorbed into the word for free. All rejections are sentinel results: a
//! score of 0 means "rejected, no state change" and extraction returns
//! `None` when a walk would leave the board.
//!
//! [`score_placement`] takes `&Board`, so the dry-run evaluation the
//! computer runs thousands of times per turn cannot touch any state.

use crate::board::{Anchor, Board, Cell};
use crate::dictionary::DictionaryIndex;
use crate::tiles::{letter_value, RACK_SIZE};
use serde::{Deserialize, Serialize};

/// Flat bonus for using every rack tile in one move
pub const BINGO_BONUS: u32 = 50;

/// Reading direction of a placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Down,
    Right,
}

impl Axis {
    /// Per-step (row, col) delta
    pub fn delta(self) -> (i32, i32) {
        match self {
            Axis::Down => (1, 0),
            Axis::Right => (0, 1),
        }
    }

    /// The perpendicular axis
    pub fn cross(self) -> Axis {
        match self {
            Axis::Down => Axis::Right,
            Axis::Right => Axis::Down,
        }
    }
}

/// One newly filled square of a committed placement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedTile {
    pub row: usize,
    pub col: usize,
    pub letter: char,
    pub value: u32,
}

/// Sum of the per-letter point values of a word
pub fn word_score(word: &str) -> u32 {
    word.chars().map(letter_value).sum()
}

/// Reconstruct the full contiguous word a placement would form along its
/// axis. Walks backward to the true start of the run, fills empty squares
/// from `tiles` in order, and absorbs any trailing occupied run. `None` if
/// the walk leaves the board before all tiles are used.
pub fn extract_word(board: &Board, row: usize, col: usize, axis: Axis, tiles: &str) -> Option<String> {
    let (dr, dc) = axis.delta();
    let (mut r, mut c) = (row as i32, col as i32);

    while board.cell(r - dr, c - dc).is_some_and(|cell| cell.is_letter()) {
        r -= dr;
        c -= dc;
    }

    let tiles: Vec<char> = tiles.chars().collect();
    let mut word = String::new();
    let mut pos = 0;
    while pos < tiles.len() {
        match board.cell(r, c)? {
            Cell::Letter(letter) => word.push(letter),
            _ => {
                word.push(tiles[pos]);
                pos += 1;
            }
        }
        r += dr;
        c += dc;
    }

    while let Some(Cell::Letter(letter)) = board.cell(r, c) {
        word.push(letter);
        r += dr;
        c += dc;
    }
    Some(word)
}

/// Bounds and adjacency check for a candidate placement. `true` (invalid)
/// when the walk leaves the board before all tiles are used, or when no
/// visited square carries a [`Anchor::Playable`] flag — which also enforces
/// the first-move-through-center rule, since only center starts playable.
pub fn is_invalid_placement(board: &Board, row: usize, col: usize, axis: Axis, tiles: &str) -> bool {
    let (dr, dc) = axis.delta();
    let (mut r, mut c) = (row as i32, col as i32);
    let total = tiles.chars().count();
    let mut pos = 0;
    let mut touching = false;

    while pos < total {
        let Some(cell) = board.cell(r, c) else {
            return true;
        };
        if !cell.is_letter() {
            pos += 1;
        }
        if board.anchor(r, c) == Some(Anchor::Playable) {
            touching = true;
        }
        r += dr;
        c += dc;
    }
    !touching
}

/// Score of the primary word plus every perpendicular word completed by a
/// placed tile. `None` when the primary word (unless it is the sole placed
/// letter) or any cross word of length > 1 is not in the dictionary.
fn cross_word_score(
    board: &Board,
    dict: &DictionaryIndex,
    row: usize,
    col: usize,
    axis: Axis,
    tiles: &str,
) -> Option<u32> {
    let primary = extract_word(board, row, col, axis, tiles)?;
    if primary.chars().count() > 1 && !dict.contains(&primary) {
        return None;
    }
    let mut score = word_score(&primary);

    let (dr, dc) = axis.delta();
    let (mut r, mut c) = (row as i32, col as i32);
    let tiles: Vec<char> = tiles.chars().collect();
    let mut pos = 0;
    while pos < tiles.len() {
        let cell = board.cell(r, c)?;
        if !cell.is_letter() {
            let single = tiles[pos].to_string();
            let cross = extract_word(board, r as usize, c as usize, axis.cross(), &single)?;
            if cross.chars().count() > 1 {
                if !dict.contains(&cross) {
                    return None;
                }
                score += word_score(&cross);
            }
            pos += 1;
        }
        r += dr;
        c += dc;
    }
    Some(score)
}

/// Evaluate a placement without touching the board. Returns the move score,
/// or 0 if the placement is rejected for any reason.
///
/// Word-multiplier squares touched by a newly placed tile multiply an
/// accumulating factor (multiplicative across every such square); letter
/// bonuses add the extra letter value into the running score. The total is
/// multiplied at the end, then the 7-tile bonus is added flat.
pub fn score_placement(
    board: &Board,
    dict: &DictionaryIndex,
    row: usize,
    col: usize,
    axis: Axis,
    tiles: &str,
) -> u32 {
    if is_invalid_placement(board, row, col, axis, tiles) {
        return 0;
    }
    let Some(mut score) = cross_word_score(board, dict, row, col, axis, tiles) else {
        return 0;
    };

    let (dr, dc) = axis.delta();
    let (mut r, mut c) = (row as i32, col as i32);
    let tiles: Vec<char> = tiles.chars().collect();
    let mut pos = 0;
    let mut multiplier = 1;
    while pos < tiles.len() {
        let Some(cell) = board.cell(r, c) else {
            return 0;
        };
        match cell {
            Cell::DoubleWord | Cell::Center => multiplier *= 2,
            Cell::TripleWord => multiplier *= 3,
            Cell::DoubleLetter => score += letter_value(tiles[pos]),
            Cell::TripleLetter => score += 2 * letter_value(tiles[pos]),
            Cell::Empty | Cell::Letter(_) => {}
        }
        if !cell.is_letter() {
            pos += 1;
        }
        r += dr;
        c += dc;
    }

    score *= multiplier;
    if tiles.len() == RACK_SIZE {
        score += BINGO_BONUS;
    }
    score
}

/// Evaluate a placement and, if legal, commit it to the board. Returns the
/// move score and one [`PlacedTile`] per newly filled square, or `None`
/// with the board untouched if the placement is rejected.
pub fn commit_placement(
    board: &mut Board,
    dict: &DictionaryIndex,
    row: usize,
    col: usize,
    axis: Axis,
    tiles: &str,
) -> Option<(u32, Vec<PlacedTile>)> {
    let score = score_placement(board, dict, row, col, axis, tiles);
    if score == 0 {
        return None;
    }

    let (dr, dc) = axis.delta();
    let (mut r, mut c) = (row as i32, col as i32);
    let tiles: Vec<char> = tiles.chars().collect();
    let mut placed = Vec::with_capacity(tiles.len());
    let mut pos = 0;
    while pos < tiles.len() {
        let Some(cell) = board.cell(r, c) else {
            break;
        };
        if !cell.is_letter() {
            let letter = tiles[pos];
            let (ur, uc) = (r as usize, c as usize);
            board.commit(ur, uc, letter);
            placed.push(PlacedTile {
                row: ur,
                col: uc,
                letter,
                value: letter_value(letter),
            });
            pos += 1;
        }
        r += dr;
        c += dc;
    }
    Some((score, placed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> DictionaryIndex {
        DictionaryIndex::from_words(words.iter().copied())
    }

    #[test]
    fn test_extract_plain_word() {
        let board = Board::new();
        assert_eq!(
            extract_word(&board, 4, 2, Axis::Right, "cat"),
            Some("cat".to_string())
        );
    }

    #[test]
    fn test_extract_bridges_existing_runs() {
        let mut board = Board::new();
        board.commit(4, 2, 'c');
        board.commit(4, 3, 'a');
        board.commit(4, 6, 's');

        // dropping tiles at (4,4) and (4,5) joins both runs into one word
        assert_eq!(
            extract_word(&board, 4, 4, Axis::Right, "te"),
            Some("cates".to_string())
        );

        // anchoring inside the leading run walks back to its start first
        assert_eq!(
            extract_word(&board, 4, 3, Axis::Right, "te"),
            Some("cates".to_string())
        );
    }

    #[test]
    fn test_extract_rejects_board_exit() {
        let board = Board::new();
        assert_eq!(extract_word(&board, 4, 7, Axis::Right, "abc"), None);
        assert_eq!(extract_word(&board, 8, 0, Axis::Down, "ab"), None);
    }

    #[test]
    fn test_first_move_must_cover_center() {
        let board = Board::new();
        assert!(is_invalid_placement(&board, 0, 0, Axis::Right, "cat"));
        assert!(is_invalid_placement(&board, 4, 5, Axis::Right, "cat"));
        assert!(!is_invalid_placement(&board, 4, 2, Axis::Right, "cat"));
        assert!(!is_invalid_placement(&board, 4, 4, Axis::Down, "a"));
    }

    #[test]
    fn test_empty_tile_set_is_invalid() {
        let board = Board::new();
        assert!(is_invalid_placement(&board, 4, 4, Axis::Right, ""));
    }

    #[test]
    fn test_placement_must_touch_play() {
        let mut board = Board::new();
        board.commit(4, 4, 'a');
        assert!(!is_invalid_placement(&board, 4, 5, Axis::Right, "t"));
        assert!(is_invalid_placement(&board, 0, 0, Axis::Right, "at"));
    }

    #[test]
    fn test_cat_through_center_scores_ten() {
        let board = Board::new();
        let dict = dict(&["cat"]);
        // c=3 a=1 t=1, doubled by the center square
        assert_eq!(score_placement(&board, &dict, 4, 2, Axis::Right, "cat"), 10);
    }

    #[test]
    fn test_unknown_word_scores_zero() {
        let board = Board::new();
        let dict = dict(&["cat"]);
        assert_eq!(score_placement(&board, &dict, 4, 2, Axis::Right, "tac"), 0);
    }

    #[test]
    fn test_sole_anchor_letter_is_exempt_from_lookup() {
        let board = Board::new();
        let empty = dict(&[]);
        // a single tile on the empty center forms no word to look up
        assert_eq!(score_placement(&board, &empty, 4, 4, Axis::Right, "q"), 20);
    }

    #[test]
    fn test_cross_words_are_validated_and_scored() {
        let mut board = Board::new();
        board.commit(4, 4, 'o');

        // "n" above the "o" completes vertical "no"
        let good = dict(&["no"]);
        // primary is the sole letter "n" (1) plus the cross word "no" (2)
        assert_eq!(score_placement(&board, &good, 3, 4, Axis::Right, "n"), 3);

        // same shape but the cross word is not a word
        let bad = dict(&["nz"]);
        assert_eq!(score_placement(&board, &bad, 3, 4, Axis::Right, "q"), 0);
    }

    #[test]
    fn test_double_word_squares_stack() {
        let mut board = Board::new();
        board.commit(3, 4, 'o');
        let dict = dict(&["money", "no"]);

        // "money" spans (2,2)..(2,6): two double-word squares, plus cross "no"
        // base 3+1+1+1+4 = 10, cross 2, times 2 times 2
        assert_eq!(score_placement(&board, &dict, 2, 2, Axis::Right, "money"), 48);
    }

    #[test]
    fn test_triple_letter_adds_twice_the_value() {
        let mut board = Board::new();
        board.commit(0, 3, 'n');
        let dict = dict(&["no"]);

        // "o" lands on the triple letter at (1,3): 1+1 base, +2 letter bonus
        assert_eq!(score_placement(&board, &dict, 1, 3, Axis::Down, "o"), 4);
    }

    #[test]
    fn test_bingo_added_after_multiplier() {
        let board = Board::new();
        let dict = dict(&["retains"]);

        // seven one-point tiles through the doubling center: 7*2 + 50
        assert_eq!(
            score_placement(&board, &dict, 4, 1, Axis::Right, "retains"),
            64
        );
    }

    #[test]
    fn test_dry_run_leaves_board_unchanged() {
        let mut board = Board::new();
        board.commit(4, 4, 'o');
        let dict = dict(&["no", "on"]);
        let before = board.clone();

        // a legal, an illegal and an out-of-bounds candidate
        score_placement(&board, &dict, 3, 4, Axis::Right, "n");
        score_placement(&board, &dict, 0, 0, Axis::Right, "zz");
        score_placement(&board, &dict, 8, 8, Axis::Right, "no");

        assert_eq!(board, before);
    }

    #[test]
    fn test_commit_reports_new_cells_only() {
        let mut board = Board::new();
        board.commit(4, 2, 'c');
        board.commit(4, 3, 'a');
        let dict = dict(&["cat", "cats"]);

        let (score, placed) = commit_placement(&mut board, &dict, 4, 4, Axis::Right, "t").unwrap();
        assert_eq!(score, 10);
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].row, 4);
        assert_eq!(placed[0].col, 4);
        assert_eq!(placed[0].letter, 't');
        assert_eq!(placed[0].value, 1);
        assert_eq!(board.cell(4, 4), Some(Cell::Letter('t')));
    }

    #[test]
    fn test_commit_rejection_leaves_board_unchanged() {
        let mut board = Board::new();
        let dict = dict(&["cat"]);
        let before = board.clone();

        assert!(commit_placement(&mut board, &dict, 0, 0, Axis::Right, "cat").is_none());
        assert_eq!(board, before);
    }
}
