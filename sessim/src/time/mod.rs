mod clock;
mod jiffy;
mod ticker;

pub use clock::VirtualClock;
pub use jiffy::Jiffies;
pub use ticker::{Ticker, TickerHandle, TimerId};
