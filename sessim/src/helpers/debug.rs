// Session-scoped debug logging
#[macro_export]
macro_rules! debug_session {
    ($sim:expr, $($arg:tt)+) => {
        ::log::debug!("[Now: {} | {}] {}", $sim.now(), $sim.state(), format_args!($($arg)+))
    }
}
