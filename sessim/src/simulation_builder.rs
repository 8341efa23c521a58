use crate::{
    Simulation,
    metrics::MetricGenerator,
    presentation::{MemoryView, Region},
    random::Seed,
    session::{Clock, DEFAULT_TICK_PERIOD, INITIAL_ELAPSED_SECONDS, SessionSimulator, format_hms},
    time::Jiffies,
};

fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let module_path = record.module_path().unwrap_or("unknown");
            let crate_name = module_path.split("::").next().unwrap_or(module_path);
            use std::io::Write;
            writeln!(buf, "[{}] {}", crate_name, record.args())
        })
        .try_init();
}

pub struct SimulationBuilder {
    seed: Seed,
    time_budget: Jiffies,
    tick_period: Jiffies,
    initial_elapsed: u64,
    download_text: String,
    upload_text: String,
    toggles: Vec<Jiffies>,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        SimulationBuilder {
            seed: 69,
            time_budget: Jiffies::from_secs(60),
            tick_period: DEFAULT_TICK_PERIOD,
            initial_elapsed: INITIAL_ELAPSED_SECONDS,
            download_text: "50".to_string(),
            upload_text: "10".to_string(),
            toggles: Vec::new(),
        }
    }
}

impl SimulationBuilder {
    pub fn seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    pub fn time_budget(mut self, time_budget: Jiffies) -> Self {
        self.time_budget = time_budget;
        self
    }

    pub fn tick_period(mut self, tick_period: Jiffies) -> Self {
        assert!(tick_period > Jiffies::ZERO, "Tick period should be positive");
        self.tick_period = tick_period;
        self
    }

    pub fn initial_elapsed(mut self, seconds: u64) -> Self {
        self.initial_elapsed = seconds;
        self
    }

    // Text initially shown in the download/upload regions; parsed when a
    // session starts.
    pub fn display(mut self, download: &str, upload: &str) -> Self {
        self.download_text = download.to_string();
        self.upload_text = upload.to_string();
        self
    }

    /// Schedules one toggle activation at `at`. May be called repeatedly.
    pub fn toggle_at(mut self, at: Jiffies) -> Self {
        self.toggles.push(at);
        self
    }

    /// Session simulator and its initial view, for drivers that run their own
    /// event loop.
    pub fn build_session(self) -> (SessionSimulator, MemoryView) {
        init_logger();

        let view = MemoryView::new()
            .with_text(Region::Elapsed, &format_hms(self.initial_elapsed))
            .with_text(Region::Download, &self.download_text)
            .with_text(Region::Upload, &self.upload_text);

        let session = SessionSimulator::with_parts(
            Clock::new(self.initial_elapsed),
            MetricGenerator::new(self.seed),
            self.tick_period,
        );

        (session, view)
    }

    pub fn build(mut self) -> Simulation {
        let mut toggles = std::mem::take(&mut self.toggles);
        toggles.sort();
        let time_budget = self.time_budget;

        let (session, view) = self.build_session();
        Simulation::new(session, view, toggles, time_budget)
    }
}
