//! Game aggregate and turn flow
//!
//! [`GameState`] owns the board, both racks, the bag, the dictionary and
//! the RNG, and is the single writer for all of them — turns are strictly
//! sequential. Requests come in through [`place`](GameState::place),
//! [`exchange`](GameState::exchange), [`pass`](GameState::pass) and
//! [`computer_turn`](GameState::computer_turn); every rejection leaves the
//! whole aggregate untouched and is reported through [`Rejection`], so the
//! acting player keeps their turn and may retry.
//!
//! The round and empty-turn counters move only on committed moves, and only
//! on the human side: a run of scoreless computer turns alone never ends
//! the game.

use crate::ai::{choose, find_candidates, Difficulty};
use crate::board::Board;
use crate::dictionary::DictionaryIndex;
use crate::play::{commit_placement, Axis, PlacedTile};
use crate::tiles::{Bag, Rack, RACK_SIZE};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Consecutive scoreless turns that end the game
pub const MAX_EMPTY_TURNS: u32 = 6;

/// The two seats at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Player {
    Human,
    Computer,
}

/// A placement request from the input layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub row: usize,
    pub col: usize,
    pub axis: Axis,
    /// Tiles to drop, in placement order
    pub tiles: String,
}

/// Why a request was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rejection {
    /// No tiles in the request
    EmptyPlacement,
    /// The request uses letters the acting player does not hold
    TilesNotInRack,
    /// Out of bounds, not connected to play, or a formed word is not real
    IllegalPlacement,
    /// Exchanges are disallowed once fewer than 7 tiles remain in the bag
    BagTooSmall,
}

impl Rejection {
    /// User-facing explanation
    pub fn message(&self) -> &'static str {
        match self {
            Rejection::EmptyPlacement => "Illegal move, not enough tiles placed.",
            Rejection::TilesNotInRack => "Illegal move, your input does not match your tileset.",
            Rejection::IllegalPlacement => {
                "Illegal move, make sure all the words formed on the board are real words."
            }
            Rejection::BagTooSmall => {
                "There are less than 7 tiles in the bag, you cannot draw tiles anymore."
            }
        }
    }
}

/// Report of one committed placement: enough for a renderer to update the
/// board and scoreboard without reading internal state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    pub player: Player,
    /// Score earned by this move
    pub score: u32,
    /// The newly filled squares
    pub cells: Vec<PlacedTile>,
    /// The player's running total after this move
    pub total_score: u32,
    /// Tiles the player has placed over the whole game
    pub tiles_placed: u32,
    /// Rounds played so far
    pub rounds: u32,
}

/// Result of one turn request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TurnOutcome {
    /// Tiles were committed to the board
    Placed(MoveReport),
    /// Tiles were exchanged with the bag; no placement
    Exchanged,
    /// Nothing happened; the turn was given up
    Passed,
    /// The request was refused; no state changed
    Rejected(Rejection),
}

/// End-of-game summary for one player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FinalStats {
    pub player: Player,
    pub score: u32,
    pub tiles_placed: u32,
    /// floor(score / rounds played); 0 before the first round
    pub average_per_round: u32,
}

#[derive(Debug, Clone, Default)]
struct Seat {
    rack: Rack,
    score: u32,
    tiles_placed: u32,
}

/// The whole game: board, racks, bag, counters and RNG, with one writer
pub struct GameState {
    board: Board,
    bag: Bag,
    human: Seat,
    computer: Seat,
    dict: DictionaryIndex,
    rng: StdRng,
    difficulty: Difficulty,
    rounds: u32,
    empty_turns: u32,
}

impl GameState {
    /// Start a game with an OS-seeded RNG
    pub fn new(dict: DictionaryIndex, difficulty: Difficulty) -> Self {
        Self::with_rng(dict, difficulty, StdRng::from_os_rng())
    }

    /// Start a game with a caller-supplied RNG, for reproducible play
    pub fn with_rng(dict: DictionaryIndex, difficulty: Difficulty, rng: StdRng) -> Self {
        let mut state = Self {
            board: Board::new(),
            bag: Bag::new(),
            human: Seat::default(),
            computer: Seat::default(),
            dict,
            rng,
            difficulty,
            rounds: 0,
            empty_turns: 0,
        };
        for _ in 0..RACK_SIZE {
            if let Some(letter) = state.bag.draw(&mut state.rng) {
                state.human.rack.add(letter);
            }
            if let Some(letter) = state.bag.draw(&mut state.rng) {
                state.computer.rack.add(letter);
            }
        }
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rack(&self, player: Player) -> &Rack {
        &self.seat(player).rack
    }

    pub fn score(&self, player: Player) -> u32 {
        self.seat(player).score
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn tiles_in_bag(&self) -> usize {
        self.bag.total()
    }

    fn seat(&self, player: Player) -> &Seat {
        match player {
            Player::Human => &self.human,
            Player::Computer => &self.computer,
        }
    }

    /// Commit a human placement. On success the used tiles are replaced
    /// from the bag, the empty-turn counter resets and the round counter
    /// advances.
    pub fn place(&mut self, request: &MoveRequest) -> TurnOutcome {
        if request.tiles.is_empty() {
            return TurnOutcome::Rejected(Rejection::EmptyPlacement);
        }
        if !self.human.rack.covers(&request.tiles) {
            return TurnOutcome::Rejected(Rejection::TilesNotInRack);
        }
        let Some((score, cells)) = commit_placement(
            &mut self.board,
            &self.dict,
            request.row,
            request.col,
            request.axis,
            &request.tiles,
        ) else {
            return TurnOutcome::Rejected(Rejection::IllegalPlacement);
        };

        self.human.score += score;
        self.human.tiles_placed += request.tiles.chars().count() as u32;
        self.bag
            .refill(&request.tiles, &mut self.human.rack, &mut self.rng);
        self.empty_turns = 0;
        self.rounds += 1;
        tracing::debug!(score, tiles = %request.tiles, "human placement committed");

        TurnOutcome::Placed(MoveReport {
            player: Player::Human,
            score,
            cells,
            total_score: self.human.score,
            tiles_placed: self.human.tiles_placed,
            rounds: self.rounds,
        })
    }

    /// Exchange human tiles with the bag. Counts as a scoreless round.
    pub fn exchange(&mut self, letters: &str) -> TurnOutcome {
        if letters.is_empty() {
            return TurnOutcome::Rejected(Rejection::EmptyPlacement);
        }
        if !self.human.rack.covers(letters) {
            return TurnOutcome::Rejected(Rejection::TilesNotInRack);
        }
        if !self.bag.swap(letters, &mut self.human.rack, &mut self.rng) {
            return TurnOutcome::Rejected(Rejection::BagTooSmall);
        }
        self.rounds += 1;
        self.empty_turns += 1;
        tracing::debug!(count = letters.chars().count(), "human exchange committed");
        TurnOutcome::Exchanged
    }

    /// Give up the turn. Counts as a scoreless round.
    pub fn pass(&mut self) -> TurnOutcome {
        self.rounds += 1;
        self.empty_turns += 1;
        TurnOutcome::Passed
    }

    /// Run the computer's turn: search, pick by difficulty, commit. With no
    /// legal candidate the whole rack is exchanged instead, and if the bag
    /// guard blocks that too, the computer passes. Round and empty-turn
    /// counters are not touched either way.
    pub fn computer_turn(&mut self) -> TurnOutcome {
        let candidates = find_candidates(&self.board, &self.dict, &self.computer.rack);
        let Some(candidate) = choose(&candidates, self.difficulty, &mut self.rng) else {
            let letters = self.computer.rack.letters();
            return if self.bag.swap(&letters, &mut self.computer.rack, &mut self.rng) {
                TurnOutcome::Exchanged
            } else {
                TurnOutcome::Passed
            };
        };
        let candidate = candidate.clone();

        // the dry-run search already proved this placement legal
        let Some((score, cells)) = commit_placement(
            &mut self.board,
            &self.dict,
            candidate.row,
            candidate.col,
            candidate.axis,
            &candidate.tiles,
        ) else {
            return TurnOutcome::Rejected(Rejection::IllegalPlacement);
        };

        self.computer.score += score;
        self.computer.tiles_placed += candidate.tiles.chars().count() as u32;
        self.bag
            .refill(&candidate.tiles, &mut self.computer.rack, &mut self.rng);
        tracing::debug!(score, tiles = %candidate.tiles, "computer placement committed");

        TurnOutcome::Placed(MoveReport {
            player: Player::Computer,
            score,
            cells,
            total_score: self.computer.score,
            tiles_placed: self.computer.tiles_placed,
            rounds: self.rounds,
        })
    }

    /// The game ends when either rack runs dry or six consecutive scoreless
    /// turns accumulate
    pub fn is_over(&self) -> bool {
        self.human.rack.is_empty()
            || self.computer.rack.is_empty()
            || self.empty_turns >= MAX_EMPTY_TURNS
    }

    /// End-of-game statistics for both players
    pub fn final_stats(&self) -> [FinalStats; 2] {
        let average = |score: u32| {
            if self.rounds == 0 {
                0
            } else {
                score / self.rounds
            }
        };
        [
            FinalStats {
                player: Player::Human,
                score: self.human.score,
                tiles_placed: self.human.tiles_placed,
                average_per_round: average(self.human.score),
            },
            FinalStats {
                player: Player::Computer,
                score: self.computer.score,
                tiles_placed: self.computer.tiles_placed,
                average_per_round: average(self.computer.score),
            },
        ]
    }
}
