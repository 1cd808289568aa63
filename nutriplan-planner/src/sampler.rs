use rand::{seq::SliceRandom, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Source of the meal picks, the only non-deterministic step of a plan.
#[mockall::automock]
pub trait MealSampler: Send + Sync {
    /// Picks up to `amount` distinct items, or all of them if there are fewer.
    fn sample(&self, items: &[String], amount: usize) -> Vec<String>;
}

impl<T: MealSampler + ?Sized> MealSampler for Box<T> {
    fn sample(&self, items: &[String], amount: usize) -> Vec<String> {
        (**self).sample(items, amount)
    }
}

/// Samples with the calling thread's RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSampler;

impl MealSampler for RandomSampler {
    fn sample(&self, items: &[String], amount: usize) -> Vec<String> {
        items
            .choose_multiple(&mut rand::thread_rng(), amount)
            .cloned()
            .collect()
    }
}

/// Reseeds on every call, so identical inputs always produce identical picks.
#[derive(Debug, Clone, Copy)]
pub struct SeededSampler {
    seed: u64,
}

impl SeededSampler {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MealSampler for SeededSampler {
    fn sample(&self, items: &[String], amount: usize) -> Vec<String> {
        let mut rng = Xoshiro256StarStar::seed_from_u64(self.seed);
        items.choose_multiple(&mut rng, amount).cloned().collect()
    }
}
