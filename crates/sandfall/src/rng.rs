//! Randomness handed to element rules.
//!
//! Rules never reach for a global generator: the tick driver passes one in,
//! so a seeded `Xoshiro256StarStar` replays a simulation exactly.

/// Random number source for the simulation.
pub trait SimRng {
    /// Uniform integer in `[low, high)`. Returns `low` when the range is empty.
    fn int_in(&mut self, low: i32, high: i32) -> i32;

    /// Uniform real in `[0.0, 1.0)`.
    fn real(&mut self) -> f64;

    /// True with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.real() < p
    }

    /// Fair coin flip.
    fn coin(&mut self) -> bool {
        self.chance(0.5)
    }

    /// Uniform index into a non-empty slice of length `len`.
    fn index(&mut self, len: usize) -> usize {
        self.int_in(0, len as i32) as usize
    }
}

impl<T: rand::Rng> SimRng for T {
    fn int_in(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        rand::Rng::gen_range(self, low..high)
    }

    fn real(&mut self) -> f64 {
        rand::Rng::gen::<f64>(self)
    }
}
