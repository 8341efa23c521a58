use std::fmt::Display;

pub const DOWNLOAD_FLOOR: u32 = 1;
pub const UPLOAD_FLOOR: u32 = 1;
pub const PING_FLOOR: u32 = 6;

/// Ping every session starts from; also the centre ping jitters around.
pub const PING_BASELINE: u32 = 10;

/// One readout of the dashboard: download and upload in Mbps, ping in ms.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MetricSample {
    pub download: u32,
    pub upload: u32,
    pub ping: u32,
}

impl MetricSample {
    pub fn new(download: u32, upload: u32, ping: u32) -> Self {
        Self {
            download,
            upload,
            ping,
        }
    }

    /// Sample a session starts from: displayed download/upload, baseline ping.
    pub fn seeded(download: u32, upload: u32) -> Self {
        Self::new(download, upload, PING_BASELINE)
    }

    pub fn ping_text(&self) -> String {
        format!("{} ms", self.ping)
    }
}

impl Display for MetricSample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "down {} Mbps, up {} Mbps, ping {} ms",
            self.download, self.upload, self.ping
        )
    }
}
