mod alloc;
mod helpers;
pub mod input;
pub mod metrics;
mod parse;
pub mod presentation;
mod progress;
pub mod random;
pub mod session;
mod simulation;
mod simulation_builder;
pub mod time;

pub use input::Activation;

pub use metrics::{MetricGenerator, MetricSample};

pub use parse::leading_count;

pub use presentation::{MemoryView, Presentation, Region, ToggleVisual};

pub use random::{Perturbation, Randomizer, Seed};

pub use session::{Clock, SessionSimulator, SessionState, ToggleController};

pub use simulation::Simulation;
pub use simulation_builder::SimulationBuilder;

pub use time::Jiffies;
pub use time::{Ticker, TickerHandle, TimerId};
