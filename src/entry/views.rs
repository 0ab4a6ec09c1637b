//! Typed views over an entry's raw value.
//!
//! Views never fail. Malformed or missing values degrade to zero, `false`
//! or empty results, so callers that care about failures must check
//! [`ConfigEntry::is_loaded`] first.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::entry::ConfigEntry;

const TRUTHY: [&str; 3] = ["1", "true", "yes"];

impl ConfigEntry {
    pub fn as_str(&self) -> &str {
        self.raw()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.raw().as_bytes()
    }

    /// Base-10 signed parse; 0 when the value is not an integer.
    pub fn as_i64(&self) -> i64 {
        self.raw().parse().unwrap_or(0)
    }

    /// [`as_i64`](Self::as_i64) truncated to 32 bits.
    pub fn as_int(&self) -> i32 {
        self.as_i64() as i32
    }

    /// [`as_i64`](Self::as_i64) reinterpreted as unsigned; negatives wrap.
    pub fn as_u64(&self) -> u64 {
        self.as_i64() as u64
    }

    /// True only for `"1"`, `"true"` and `"yes"` after trimming (case-sensitive).
    pub fn as_bool(&self) -> bool {
        TRUTHY.contains(&self.raw().trim())
    }

    /// Comma-separated elements. Empty elements are kept, and an empty
    /// value yields `[""]`.
    pub fn as_array(&self) -> Vec<&str> {
        self.raw().split(',').collect()
    }

    /// A uniformly chosen element of [`as_array`](Self::as_array).
    pub fn pick_random(&self) -> &str {
        self.pick_random_with(&mut rand::thread_rng())
    }

    pub fn pick_random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let items = self.as_array();
        match items.len() {
            0 => "",
            1 => items[0],
            len => items[rng.gen_range(0..len)],
        }
    }

    /// A random permutation of [`as_array`](Self::as_array).
    pub fn shuffled(&self) -> Vec<&str> {
        self.shuffled_with(&mut rand::thread_rng())
    }

    pub fn shuffled_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&str> {
        let mut items = self.as_array();
        items.shuffle(rng);
        items
    }

    /// Exact match against any element of [`as_array`](Self::as_array).
    pub fn contains(&self, candidate: &str) -> bool {
        self.as_array().contains(&candidate)
    }
}
