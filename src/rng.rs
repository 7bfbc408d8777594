use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand::SeedableRng;

/// Seeded random number generator for reproducible rounds
#[derive(Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new GameRng with an optional seed
    /// If seed is None, generates a random seed
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            use rand::thread_rng;
            thread_rng().gen()
        });

        let rng = ChaCha8Rng::seed_from_u64(seed);
        GameRng { rng, seed }
    }

    /// Get the seed used for this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent generator, e.g. for cosmetic rendering
    /// that must not disturb the draw order of the round
    pub fn split(&mut self) -> GameRng {
        GameRng::new(Some(self.rng.gen()))
    }

    /// Generate a random number in range [0, 1)
    pub fn random(&mut self) -> f64 {
        self.rng.gen()
    }

    /// Generate a random integer in range [0, max)
    pub fn random_range(&mut self, max: usize) -> usize {
        self.rng.gen_range(0..max)
    }

    /// Fisher-Yates shuffle for a mutable slice
    pub fn shuffle<T>(&mut self, array: &mut [T]) {
        for i in (1..array.len()).rev() {
            let j = self.random_range(i + 1);
            array.swap(i, j);
        }
    }

    /// Pick `amount` distinct elements in random order.
    /// Every combination is equally likely.
    pub fn sample<T: Clone>(&mut self, pool: &[T], amount: usize) -> Vec<T> {
        pool.choose_multiple(&mut self.rng, amount).cloned().collect()
    }
}
