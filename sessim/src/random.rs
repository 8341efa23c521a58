use rand::{Rng, RngCore, SeedableRng, distr::Uniform, rngs::StdRng};

pub type Seed = u64;

/// Half-open range `[low, high)` of a uniform real offset.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Perturbation {
    pub low: f64,
    pub high: f64,
}

impl Perturbation {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

/// Random source of the simulator.
///
/// Seeded [`StdRng`] by default; any other generator can be injected through
/// [`Randomizer::from_rng`] to replay an exact sequence.
pub struct Randomizer<R: RngCore = StdRng> {
    rnd: R,
}

impl Randomizer {
    pub fn new(seed: Seed) -> Self {
        Self {
            rnd: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: RngCore> Randomizer<R> {
    pub fn from_rng(rnd: R) -> Self {
        Self { rnd }
    }

    pub fn offset(&mut self, p: Perturbation) -> f64 {
        let distr = Uniform::new(p.low, p.high).expect("Invalid bounds");
        self.rnd.sample(distr)
    }
}
