//! Tile bag and rack bookkeeping
//!
//! Both the bag and each rack are count arrays indexed by letter ordinal, so
//! tile conservation (bag + racks + board) can be checked by summing counts
//! per letter. Point values and tile quantities are the fixed 26-entry
//! tables of the game rules.

use rand::Rng;

/// Number of distinct letter tiles
pub const ALPHABET_SIZE: usize = 26;

/// Tiles a player holds at the start of a turn
pub const RACK_SIZE: usize = 7;

/// Starting quantity of each letter tile in the bag (a..z)
pub const TILE_COUNTS: [u8; ALPHABET_SIZE] = [
    4, 2, 2, 3, 5, 2, 3, 2, 5, 1, 1, 3, 2, 3, 5, 2, 1, 4, 2, 4, 2, 2, 1, 1, 1, 1,
];

/// Point value of each letter tile (a..z)
pub const LETTER_VALUES: [u32; ALPHABET_SIZE] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

pub(crate) fn letter_index(letter: char) -> usize {
    debug_assert!(letter.is_ascii_lowercase());
    (letter as u8 - b'a') as usize
}

pub(crate) fn index_letter(index: usize) -> char {
    debug_assert!(index < ALPHABET_SIZE);
    (b'a' + index as u8) as char
}

/// Point value of a single letter tile
pub fn letter_value(letter: char) -> u32 {
    LETTER_VALUES[letter_index(letter)]
}

/// A multiset of letters held by one player
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rack {
    counts: [u8; ALPHABET_SIZE],
}

impl Rack {
    /// Create an empty rack
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one tile to the rack
    pub fn add(&mut self, letter: char) {
        self.counts[letter_index(letter)] += 1;
    }

    /// Remove one tile from the rack; `false` if none of that letter is held
    pub fn remove(&mut self, letter: char) -> bool {
        let index = letter_index(letter);
        if self.counts[index] == 0 {
            return false;
        }
        self.counts[index] -= 1;
        true
    }

    /// Number of tiles held of one letter
    pub fn count(&self, letter: char) -> u8 {
        self.counts[letter_index(letter)]
    }

    /// Total tiles held
    pub fn len(&self) -> usize {
        self.counts.iter().map(|&c| usize::from(c)).sum()
    }

    /// Check if the rack is empty
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// All held letters in alphabetical order, repeats included
    pub fn letters(&self) -> String {
        let mut letters = String::with_capacity(self.len());
        for (index, &count) in self.counts.iter().enumerate() {
            for _ in 0..count {
                letters.push(index_letter(index));
            }
        }
        letters
    }

    /// The distinct letters held, in alphabetical order
    pub fn distinct_letters(&self) -> String {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(index, _)| index_letter(index))
            .collect()
    }

    /// True iff every letter of `letters` occurs there no more often than it
    /// occurs in the rack (counting multiplicities). Anything other than a
    /// lowercase ascii letter is not a tile and is never covered, so
    /// malformed outside input stops here.
    pub fn covers(&self, letters: &str) -> bool {
        let mut needed = [0u8; ALPHABET_SIZE];
        for letter in letters.chars() {
            if !letter.is_ascii_lowercase() {
                return false;
            }
            let index = letter_index(letter);
            needed[index] += 1;
            if needed[index] > self.counts[index] {
                return false;
            }
        }
        true
    }
}

/// The shared pool of undrawn tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bag {
    counts: [u8; ALPHABET_SIZE],
}

impl Default for Bag {
    fn default() -> Self {
        Self {
            counts: TILE_COUNTS,
        }
    }
}

impl Bag {
    /// Create a full bag with the standard tile distribution
    pub fn new() -> Self {
        Self::default()
    }

    /// Total tiles remaining
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| usize::from(c)).sum()
    }

    /// Tiles remaining of one letter
    pub fn count(&self, letter: char) -> u8 {
        self.counts[letter_index(letter)]
    }

    /// Return one tile to the bag
    pub fn put_back(&mut self, letter: char) {
        self.counts[letter_index(letter)] += 1;
    }

    /// Draw one tile uniformly over the remaining multiset, so a letter's
    /// draw probability is proportional to its remaining count. `None` on an
    /// empty bag.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<char> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let mut pick = rng.random_range(0..total);
        for index in 0..ALPHABET_SIZE {
            let count = usize::from(self.counts[index]);
            if pick < count {
                self.counts[index] -= 1;
                return Some(index_letter(index));
            }
            pick -= count;
        }
        None
    }

    /// Exchange tiles between a rack and the bag. Disallowed (`false`, no
    /// state change) once fewer than [`RACK_SIZE`] tiles remain.
    ///
    /// Replacements are drawn before the originals go back in the bag, so an
    /// exchange can never hand back a tile that was just surrendered unless
    /// another copy was already in the bag.
    pub fn swap<R: Rng>(&mut self, letters: &str, rack: &mut Rack, rng: &mut R) -> bool {
        if self.total() < RACK_SIZE {
            return false;
        }
        for _ in letters.chars() {
            if let Some(drawn) = self.draw(rng) {
                rack.add(drawn);
            }
        }
        for letter in letters.chars() {
            rack.remove(letter);
            self.put_back(letter);
        }
        true
    }

    /// Replace tiles spent on a committed placement: the used letters leave
    /// the rack (they now sit on the board) and replacements are drawn while
    /// the bag lasts.
    pub fn refill<R: Rng>(&mut self, letters: &str, rack: &mut Rack, rng: &mut R) {
        for letter in letters.chars() {
            rack.remove(letter);
        }
        for _ in letters.chars() {
            match self.draw(rng) {
                Some(drawn) => rack.add(drawn),
                None => break,
            }
        }
    }
}
