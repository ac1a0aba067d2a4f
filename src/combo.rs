//! Rack combination and arrangement enumeration
//!
//! The computer's search space is every multiset of tiles drawable from its
//! rack, in every order. [`Combinations`] walks the per-letter use counts
//! like a mixed-radix odometer, so it is lazy, finite and restartable;
//! [`arrangements`] expands one combination through a permutation table
//! precomputed for lengths 1..=7. Arrangements of a multiset with repeated
//! letters repeat — callers treat that as wasted evaluation, not an error.

use crate::tiles::{Rack, RACK_SIZE};
use once_cell::sync::Lazy;

/// `PERMUTATIONS[n]` holds every ordering of the positions 1..=n
static PERMUTATIONS: Lazy<Vec<Vec<Vec<u8>>>> = Lazy::new(build_permutations);

/// Build each length's permutations by inserting the new position into
/// every slot of the previous length's permutations
fn build_permutations() -> Vec<Vec<Vec<u8>>> {
    let mut table: Vec<Vec<Vec<u8>>> = vec![Vec::new(), vec![vec![1]]];
    for len in 2..=RACK_SIZE {
        let mut perms = Vec::new();
        for prev in &table[len - 1] {
            for slot in 0..=prev.len() {
                let mut next = prev.clone();
                next.insert(slot, len as u8);
                perms.push(next);
            }
        }
        table.push(perms);
    }
    table
}

/// Iterator over every letter multiset drawable from a rack, the empty
/// multiset included. Combinations come out as alphabetically sorted
/// strings ("aab", never "aba").
pub struct Combinations {
    letters: Vec<char>,
    limits: Vec<u8>,
    counts: Vec<u8>,
    exhausted: bool,
}

impl Combinations {
    pub fn new(rack: &Rack) -> Self {
        let letters: Vec<char> = rack.distinct_letters().chars().collect();
        let limits: Vec<u8> = letters.iter().map(|&l| rack.count(l)).collect();
        let counts = vec![0; letters.len()];
        Self {
            letters,
            limits,
            counts,
            exhausted: false,
        }
    }
}

impl Iterator for Combinations {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }

        let mut combo = String::new();
        for (index, &count) in self.counts.iter().enumerate() {
            for _ in 0..count {
                combo.push(self.letters[index]);
            }
        }

        // odometer step: bump the first count with headroom, zeroing the
        // ones before it
        let mut index = 0;
        loop {
            if index == self.counts.len() {
                self.exhausted = true;
                break;
            }
            if self.counts[index] < self.limits[index] {
                self.counts[index] += 1;
                break;
            }
            self.counts[index] = 0;
            index += 1;
        }
        Some(combo)
    }
}

/// Every ordering of the letters of `combo`. Combinations longer than
/// [`RACK_SIZE`] have no table entry and yield nothing.
pub fn arrangements(combo: &str) -> impl Iterator<Item = String> + '_ {
    let letters: Vec<char> = combo.chars().collect();
    let perms = PERMUTATIONS
        .get(letters.len())
        .map_or(&[][..], Vec::as_slice);
    perms
        .iter()
        .map(move |perm| perm.iter().map(|&pos| letters[usize::from(pos) - 1]).collect())
}
