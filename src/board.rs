//! Board grid, bonus squares and reachability flags
//!
//! The board is a fixed 9×9 grid. Bonus squares are painted in layers at
//! construction (later layers overwrite earlier ones), which is what puts
//! double-letter squares on the four diagonal neighbours of center even
//! though those cells start out triple-letter. A parallel grid of
//! [`Anchor`] flags tracks where a placement may legally touch existing
//! play; only the center square starts out playable.

use std::fmt;

/// Side length of the square board (odd, so a unique center exists)
pub const BOARD_SIZE: usize = 9;

/// Row and column of the center square
pub const CENTER: usize = BOARD_SIZE / 2;

/// One square of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
    /// The center square; scores as a double-word bonus
    Center,
    /// An occupied square; never reverts
    Letter(char),
}

impl Cell {
    pub fn is_letter(self) -> bool {
        matches!(self, Cell::Letter(_))
    }

    pub fn letter(self) -> Option<char> {
        match self {
            Cell::Letter(letter) => Some(letter),
            _ => None,
        }
    }
}

/// Reachability of a square for new placements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Not adjacent to any played tile; placements here do not connect
    Unreachable,
    /// Adjacent to a played tile (or the center square before the first
    /// move); a placement visiting this square connects to existing play
    Playable,
    /// Holds a tile
    Occupied,
}

const NEIGHBOURS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The playing grid plus its adjacency flags
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    anchors: [[Anchor; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        let mut anchors = [[Anchor::Unreachable; BOARD_SIZE]; BOARD_SIZE];

        // Triple words on the corners and the center-row/column interval points
        for row in (0..BOARD_SIZE).step_by(CENTER) {
            for col in (0..BOARD_SIZE).step_by(CENTER) {
                cells[row][col] = Cell::TripleWord;
            }
        }

        // The center replaces the middle triple word and is the one square
        // where the first move may land
        cells[CENTER][CENTER] = Cell::Center;
        anchors[CENTER][CENTER] = Anchor::Playable;

        // Triple letters at every odd (row, col)
        for row in (1..BOARD_SIZE).step_by(2) {
            for col in (1..BOARD_SIZE).step_by(2) {
                cells[row][col] = Cell::TripleLetter;
            }
        }

        // Double words along the diagonals out from center
        for level in 1..CENTER {
            cells[CENTER - level][CENTER - level] = Cell::DoubleWord;
            cells[CENTER - level][CENTER + level] = Cell::DoubleWord;
            cells[CENTER + level][CENTER - level] = Cell::DoubleWord;
            cells[CENTER + level][CENTER + level] = Cell::DoubleWord;
        }

        // Double letters on the four diagonal neighbours of center
        cells[CENTER - 1][CENTER - 1] = Cell::DoubleLetter;
        cells[CENTER - 1][CENTER + 1] = Cell::DoubleLetter;
        cells[CENTER + 1][CENTER - 1] = Cell::DoubleLetter;
        cells[CENTER + 1][CENTER + 1] = Cell::DoubleLetter;

        Self { cells, anchors }
    }
}

impl Board {
    /// Create the starting board
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_bounds(row: i32, col: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
    }

    /// The cell at signed coordinates; `None` outside the board
    pub fn cell(&self, row: i32, col: i32) -> Option<Cell> {
        if Self::in_bounds(row, col) {
            Some(self.cells[row as usize][col as usize])
        } else {
            None
        }
    }

    /// The anchor flag at signed coordinates; `None` outside the board
    pub fn anchor(&self, row: i32, col: i32) -> Option<Anchor> {
        if Self::in_bounds(row, col) {
            Some(self.anchors[row as usize][col as usize])
        } else {
            None
        }
    }

    /// Number of letters committed to the board
    pub fn letters_placed(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_letter())
            .count()
    }

    /// Set a square to a letter. Rejected (`false`, no state change) if the
    /// square already holds a letter. On success the square becomes
    /// [`Anchor::Occupied`] and its unreachable 4-neighbours become
    /// [`Anchor::Playable`].
    pub fn commit(&mut self, row: usize, col: usize, letter: char) -> bool {
        if self.cells[row][col].is_letter() {
            return false;
        }
        self.cells[row][col] = Cell::Letter(letter);
        self.anchors[row][col] = Anchor::Occupied;

        for (dr, dc) in NEIGHBOURS {
            let (nr, nc) = (row as i32 + dr, col as i32 + dc);
            if !Self::in_bounds(nr, nc) {
                continue;
            }
            if self.anchors[nr as usize][nc as usize] == Anchor::Unreachable {
                self.anchors[nr as usize][nc as usize] = Anchor::Playable;
            }
        }
        true
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let mark = match cell {
                    Cell::Letter(letter) => *letter,
                    Cell::Empty => '.',
                    Cell::DoubleLetter | Cell::TripleLetter => '+',
                    Cell::DoubleWord | Cell::TripleWord | Cell::Center => '*',
                };
                write!(f, "{mark}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bonus_layout() {
        let board = Board::new();

        // corners and edge midpoints
        for &(row, col) in &[(0, 0), (0, 8), (8, 0), (8, 8), (0, 4), (4, 0), (4, 8), (8, 4)] {
            assert_eq!(board.cell(row, col), Some(Cell::TripleWord));
        }
        assert_eq!(board.cell(4, 4), Some(Cell::Center));

        // diagonal neighbours of center are double letter, overwriting the
        // odd-odd triple letters
        for &(row, col) in &[(3, 3), (3, 5), (5, 3), (5, 5)] {
            assert_eq!(board.cell(row, col), Some(Cell::DoubleLetter));
        }

        // outer diagonals are double word
        for &(row, col) in &[(2, 2), (2, 6), (6, 2), (6, 6), (1, 1), (1, 7), (7, 1), (7, 7)] {
            assert_eq!(board.cell(row, col), Some(Cell::DoubleWord));
        }

        // odd-odd squares off the diagonals stay triple letter
        for &(row, col) in &[(1, 3), (1, 5), (3, 1), (5, 7), (7, 3)] {
            assert_eq!(board.cell(row, col), Some(Cell::TripleLetter));
        }

        assert_eq!(board.cell(4, 2), Some(Cell::Empty));
        assert_eq!(board.cell(9, 0), None);
        assert_eq!(board.cell(-1, 0), None);
    }

    #[test]
    fn test_only_center_starts_playable() {
        let board = Board::new();
        for row in 0..BOARD_SIZE as i32 {
            for col in 0..BOARD_SIZE as i32 {
                let expected = if (row, col) == (4, 4) {
                    Anchor::Playable
                } else {
                    Anchor::Unreachable
                };
                assert_eq!(board.anchor(row, col), Some(expected));
            }
        }
    }

    #[test]
    fn test_commit_updates_anchors() {
        let mut board = Board::new();
        assert!(board.commit(4, 4, 'x'));

        assert_eq!(board.cell(4, 4), Some(Cell::Letter('x')));
        assert_eq!(board.anchor(4, 4), Some(Anchor::Occupied));
        for &(row, col) in &[(3, 4), (5, 4), (4, 3), (4, 5)] {
            assert_eq!(board.anchor(row, col), Some(Anchor::Playable));
        }
        assert_eq!(board.anchor(3, 3), Some(Anchor::Unreachable));
        assert_eq!(board.letters_placed(), 1);
    }

    #[test]
    fn test_commit_rejected_on_occupied_square() {
        let mut board = Board::new();
        assert!(board.commit(4, 4, 'x'));
        let before = board.clone();

        assert!(!board.commit(4, 4, 'y'));
        assert_eq!(board, before);
    }

    #[test]
    fn test_commit_at_edge_marks_in_bounds_neighbours() {
        let mut board = Board::new();
        assert!(board.commit(0, 0, 'q'));
        assert_eq!(board.anchor(0, 1), Some(Anchor::Playable));
        assert_eq!(board.anchor(1, 0), Some(Anchor::Playable));
    }
}
