//! Pronounceable names for cached downloads.
//!
//! Names are three consonant-vowel syllables after a fixed prefix, e.g.
//! `img.goski_bakotu`. Collisions are unlikely, not impossible.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

pub const PREFIX: &str = "img.goski_";

const CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwxzy";
const VOWELS: &[u8] = b"aeiou";
const SYLLABLES: usize = 3;

/// xorshift64* generator; good enough for file names, nothing else.
pub struct NameGen {
    state: u64,
}

impl NameGen {
    pub fn with_seed(seed: u64) -> Self {
        // xorshift is stuck at zero
        Self { state: seed.max(1) }
    }

    pub fn from_entropy() -> Self {
        let mut hasher = RandomState::new().build_hasher();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        hasher.write_u128(nanos);
        hasher.write_u32(std::process::id());
        Self::with_seed(hasher.finish())
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_f491_4f6c_dd1d)
    }

    fn pick(&mut self, set: &[u8]) -> char {
        set[(self.next_u64() % set.len() as u64) as usize] as char
    }

    pub fn name(&mut self) -> String {
        let mut name = String::with_capacity(PREFIX.len() + SYLLABLES * 2);
        name.push_str(PREFIX);
        for _ in 0..SYLLABLES {
            name.push(self.pick(CONSONANTS));
            name.push(self.pick(VOWELS));
        }
        name
    }
}

pub fn generate() -> String {
    NameGen::from_entropy().name()
}
