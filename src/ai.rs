//! Computer opponent: candidate search and move selection
//!
//! The search is brute force: every non-empty tile combination from the
//! rack, in every order, tried at every square on both axes. Each survivor
//! of the validity checks is scored with the dry-run path and recorded; the
//! committed move is picked from the ranked list with a difficulty bias.

use crate::board::{Board, BOARD_SIZE};
use crate::combo::{arrangements, Combinations};
use crate::dictionary::DictionaryIndex;
use crate::play::{is_invalid_placement, score_placement, Axis};
use crate::tiles::{letter_index, Rack};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// High-utility letters worth keeping on the rack between turns
const RETENTION_LETTERS: &str = "starline";

/// Which third of the ranked candidate list the computer draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Worst-scoring third
    Easy,
    /// Middle third
    Normal,
    /// Best-scoring third
    Hard,
}

impl Difficulty {
    fn offset(self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Normal => 1,
            Difficulty::Hard => 2,
        }
    }
}

/// A legal move found during the search, scored without touching the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub score: u32,
    pub consistency: i32,
    pub row: usize,
    pub col: usize,
    pub axis: Axis,
    pub tiles: String,
}

/// Rate the rack that would remain after spending `used`. Each leftover
/// letter in the retention set counts +1; each leftover that repeats a
/// letter already seen counts -1. Higher is better: a diverse rack of
/// common, high-utility letters.
///
/// `used` must be a sorted subsequence of `rack_letters` (which is how
/// [`Combinations`] produces it); spent letters are skipped by a single
/// forward pointer.
pub fn consistency(rack_letters: &str, used: &str) -> i32 {
    let used: Vec<char> = used.chars().collect();
    let mut pos = 0;
    let mut counter = 0;
    let mut seen = 0u32;

    for letter in rack_letters.chars() {
        if pos < used.len() && letter == used[pos] {
            pos += 1;
            continue;
        }
        if RETENTION_LETTERS.contains(letter) {
            counter += 1;
        }
        let bit = 1u32 << letter_index(letter);
        if seen & bit != 0 {
            counter -= 1;
        }
        seen |= bit;
    }
    counter
}

/// Enumerate every legal placement reachable from the rack, dry-run scored,
/// sorted ascending by score with ties broken ascending by consistency.
pub fn find_candidates(board: &Board, dict: &DictionaryIndex, rack: &Rack) -> Vec<Candidate> {
    let rack_letters = rack.letters();
    let mut candidates = Vec::new();

    for combo in Combinations::new(rack) {
        if combo.is_empty() {
            continue;
        }
        let keep = consistency(&rack_letters, &combo);

        for tiles in arrangements(&combo) {
            for row in 0..BOARD_SIZE {
                for col in 0..BOARD_SIZE {
                    for axis in [Axis::Down, Axis::Right] {
                        if is_invalid_placement(board, row, col, axis, &tiles) {
                            continue;
                        }
                        let score = score_placement(board, dict, row, col, axis, &tiles);
                        if score == 0 {
                            continue;
                        }
                        candidates.push(Candidate {
                            score,
                            consistency: keep,
                            row,
                            col,
                            axis,
                            tiles: tiles.clone(),
                        });
                    }
                }
            }
        }
    }

    candidates.sort_by(|a, b| {
        a.score
            .cmp(&b.score)
            .then(a.consistency.cmp(&b.consistency))
    });
    tracing::debug!(count = candidates.len(), "candidate search finished");
    candidates
}

/// Index into a ranked list of `len` candidates: a triangular draw biased
/// toward the middle of the third selected by `offset`. Clamped to the last
/// element, which `floor` can reach when the uniform draw is exactly 0.
fn pick_index(len: usize, offset: usize, uniform: f64) -> usize {
    let third = len / 3;
    let index = (third as f64 * (0.5 + (0.5 - uniform).abs()) + (third * offset) as f64) as usize;
    index.min(len - 1)
}

/// Pick the candidate to commit, or `None` if the list is empty
pub fn choose<'a, R: Rng>(
    candidates: &'a [Candidate],
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<&'a Candidate> {
    if candidates.is_empty() {
        return None;
    }
    let uniform: f64 = rng.random();
    let chosen = &candidates[pick_index(candidates.len(), difficulty.offset(), uniform)];
    tracing::debug!(
        score = chosen.score,
        tiles = %chosen.tiles,
        "candidate chosen"
    );
    Some(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rack(letters: &str) -> Rack {
        let mut rack = Rack::new();
        for letter in letters.chars() {
            rack.add(letter);
        }
        rack
    }

    #[test]
    fn test_consistency_counts_retention_letters() {
        assert_eq!(consistency("arstz", ""), 4);
        assert_eq!(consistency("arstz", "ar"), 2);
        assert_eq!(consistency("arstz", "arstz"), 0);
        assert_eq!(consistency("bz", ""), 0);
    }

    #[test]
    fn test_consistency_penalizes_duplicates() {
        // second 'a' earns +1 for the set but -1 as a repeat
        assert_eq!(consistency("aa", ""), 2 - 1);
        assert_eq!(consistency("aab", "a"), 1);
    }

    #[test]
    fn test_pick_index_stays_in_chosen_third() {
        let len = 9;
        for offset in 0..3 {
            for step in 0..100 {
                let uniform = f64::from(step) / 100.0;
                let index = pick_index(len, offset, uniform);
                assert!(index >= 3 * offset, "index {index} offset {offset}");
                assert!(index <= 3 * (offset + 1), "index {index} offset {offset}");
            }
        }
    }

    #[test]
    fn test_pick_index_clamps_at_list_end() {
        assert_eq!(pick_index(9, 2, 0.0), 8);
        assert_eq!(pick_index(1, 2, 0.0), 0);
        assert_eq!(pick_index(2, 1, 0.9), 0);
    }

    #[test]
    fn test_find_candidates_on_empty_board() {
        let board = Board::new();
        let dict = DictionaryIndex::from_words(["cat", "at", "ta", "act"]);
        let candidates = find_candidates(&board, &dict, &rack("cat"));

        assert!(!candidates.is_empty());
        // every candidate is a real dry-run-legal move through center
        for candidate in &candidates {
            assert!(candidate.score > 0);
            assert!(!candidate.tiles.is_empty());
        }
        // ranked ascending
        for pair in candidates.windows(2) {
            assert!(pair[0].score <= pair[1].score);
        }
        // the full-word play through the doubled center is present
        assert!(candidates
            .iter()
            .any(|c| c.tiles == "cat" && c.score == 10));
    }

    #[test]
    fn test_no_candidates_without_legal_words() {
        // center occupied, so no single-letter exemption applies anywhere
        let mut board = Board::new();
        board.commit(4, 4, 'q');
        let dict = DictionaryIndex::from_words(Vec::<&str>::new());

        assert!(find_candidates(&board, &dict, &rack("cat")).is_empty());
    }

    #[test]
    fn test_choose_is_none_on_empty_list() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(choose(&[], Difficulty::Hard, &mut rng), None);
    }

    #[test]
    fn test_choose_returns_member_of_list() {
        let board = Board::new();
        let dict = DictionaryIndex::from_words(["cat", "at", "ta"]);
        let candidates = find_candidates(&board, &dict, &rack("cat"));
        let mut rng = StdRng::seed_from_u64(17);

        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            let chosen = choose(&candidates, difficulty, &mut rng).unwrap();
            assert!(candidates.contains(chosen));
        }
    }
}
