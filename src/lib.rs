//! Scrabble-style board engine with a heuristic computer opponent
//!
//! The crate covers the board and word engine — bonus squares, word
//! extraction, dictionary validation, scoring — plus tile bag and rack
//! bookkeeping and the combinatorial search the computer player runs over
//! its rack. Rendering and input belong to the caller: committed moves
//! return a per-cell diff and running totals instead of exposing internals.

pub mod ai;
pub mod board;
pub mod combo;
pub mod dictionary;
pub mod game;
pub mod play;
pub mod tiles;

pub use ai::Difficulty;
pub use board::{Anchor, Board, Cell, BOARD_SIZE, CENTER};
pub use dictionary::DictionaryIndex;
pub use game::{FinalStats, GameState, MoveRequest, MoveReport, Player, Rejection, TurnOutcome};
pub use play::{Axis, PlacedTile};
pub use tiles::{Bag, Rack, RACK_SIZE};
