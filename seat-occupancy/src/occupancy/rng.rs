use super::hashing::FALLBACK_SEED;

const TWO_POW_32: f64 = 4_294_967_296.0;

/// Marsaglia xorshift32 with shifts (13, 17, 5).
///
/// Chosen over a library RNG because its output sequence is fixed by the
/// algorithm itself and can be reproduced in any language.
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { FALLBACK_SEED } else { seed };
        Xorshift32 { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform float in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }

    /// Uniform integer in [0, bound), by multiply-shift rather than modulo.
    pub fn below(&mut self, bound: usize) -> usize {
        ((u64::from(self.next_u32()) * bound as u64) >> 32) as usize
    }
}
