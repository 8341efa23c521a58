//! Synthetic bandwidth and latency readouts.
//!
//! Download and upload drift: each tick adds a small uniform offset to the
//! previous value. Ping does not drift: it is drawn afresh around
//! [`PING_BASELINE`] on every tick, so a slow reading is never carried over.

use rand::{RngCore, rngs::StdRng};

use crate::{
    metrics::sample::{DOWNLOAD_FLOOR, MetricSample, PING_BASELINE, PING_FLOOR, UPLOAD_FLOOR},
    random::{Perturbation, Randomizer, Seed},
};

pub const DOWNLOAD_DRIFT: Perturbation = Perturbation::new(-0.8, 1.2);
pub const UPLOAD_DRIFT: Perturbation = Perturbation::new(-0.6, 1.0);
pub const PING_JITTER: Perturbation = Perturbation::new(-3.0, 3.0);

pub struct MetricGenerator<R: RngCore = StdRng> {
    randomizer: Randomizer<R>,
}

impl MetricGenerator {
    pub fn new(seed: Seed) -> Self {
        Self::with_randomizer(Randomizer::new(seed))
    }
}

impl<R: RngCore> MetricGenerator<R> {
    pub fn with_randomizer(randomizer: Randomizer<R>) -> Self {
        Self { randomizer }
    }

    pub fn advance(&mut self, previous: MetricSample) -> MetricSample {
        let download = drift(
            previous.download,
            self.randomizer.offset(DOWNLOAD_DRIFT),
            DOWNLOAD_FLOOR,
        );
        let upload = drift(
            previous.upload,
            self.randomizer.offset(UPLOAD_DRIFT),
            UPLOAD_FLOOR,
        );
        let ping = drift(PING_BASELINE, self.randomizer.offset(PING_JITTER), PING_FLOOR);

        MetricSample {
            download,
            upload,
            ping,
        }
    }
}

// Anything that rounds below the floor is clamped, so the sign of a rounded
// half never matters.
fn drift(from: u32, offset: f64, floor: u32) -> u32 {
    let next = (f64::from(from) + offset).round();
    if next < f64::from(floor) {
        floor
    } else {
        next as u32
    }
}
