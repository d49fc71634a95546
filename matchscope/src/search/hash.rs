use crate::errors::{MatchError, MatchResult};

/// Radix used when folding character codes into a hash
pub const DEFAULT_BASE: u32 = 256;

/// Kept small on purpose: collisions are frequent, so the verification path
/// gets exercised on ordinary inputs.
pub const DEFAULT_MODULUS: u32 = 101;

/// Parameters of the polynomial rolling hash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
    pub base: u32,
    pub modulus: u32,
}

impl HashParams {
    pub fn new(base: u32, modulus: u32) -> Self {
        Self { base, modulus }
    }

    /// Checks the parameters can drive a rolling hash
    pub fn validate(self) -> MatchResult<Self> {
        if self.modulus == 0 {
            return Err(MatchError::invalid_hash_params("modulus must be at least 1"));
        }
        if self.base == 0 {
            return Err(MatchError::invalid_hash_params("base must be at least 1"));
        }
        Ok(self)
    }
}

impl Default for HashParams {
    fn default() -> Self {
        Self::new(DEFAULT_BASE, DEFAULT_MODULUS)
    }
}

/// Character code fed into the hash
#[inline]
pub fn code(c: char) -> i128 {
    i128::from(u32::from(c))
}

/// Polynomial hash over a fixed-width window, updated one character at a time.
///
/// All arithmetic is carried out in `i128` so no `u32` base/modulus pair can
/// overflow an intermediate value.
#[derive(Debug, Clone, Copy)]
pub struct RollingHash {
    base: i128,
    modulus: i128,
    /// `base^(width - 1) mod modulus`, the weight of the outgoing character
    high_order: i128,
}

impl RollingHash {
    /// Prepares a hash for windows of `width` characters.
    ///
    /// `params` must have passed [`HashParams::validate`].
    pub fn new(params: HashParams, width: usize) -> Self {
        let base = i128::from(params.base);
        let modulus = i128::from(params.modulus);
        Self {
            base,
            modulus,
            high_order: pow_mod(base, width.saturating_sub(1), modulus),
        }
    }

    pub fn high_order_factor(&self) -> u64 {
        self.high_order as u64
    }

    /// Hashes `window` directly by folding its codes left to right
    pub fn of(&self, window: &[char]) -> u64 {
        window
            .iter()
            .fold(0, |acc, &c| (self.base * acc + code(c)) % self.modulus) as u64
    }

    /// Shifts the window one position right: drops `outgoing`, appends `incoming`.
    ///
    /// The remainder is taken with Rust's truncating `%`, which can be
    /// negative here, and is brought back into range by adding the modulus once.
    pub fn roll(&self, hash: u64, outgoing: char, incoming: char) -> u64 {
        let hash = i128::from(hash);
        let mut next =
            (self.base * (hash - code(outgoing) * self.high_order) + code(incoming)) % self.modulus;
        if next < 0 {
            next += self.modulus;
        }
        next as u64
    }
}

fn pow_mod(base: i128, mut exp: usize, modulus: i128) -> i128 {
    let mut result = 1 % modulus;
    let mut factor = base % modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * factor % modulus;
        }
        factor = factor * factor % modulus;
        exp >>= 1;
    }
    result
}
