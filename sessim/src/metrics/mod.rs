mod generator;
mod sample;

pub use generator::{DOWNLOAD_DRIFT, MetricGenerator, PING_JITTER, UPLOAD_DRIFT};
pub use sample::{DOWNLOAD_FLOOR, MetricSample, PING_BASELINE, PING_FLOOR, UPLOAD_FLOOR};
