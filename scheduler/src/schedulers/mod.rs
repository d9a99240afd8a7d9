//! Scheduling policies
//!
//! Each policy lives in its own file and is exported here.
//!
mod round_robin;
pub use round_robin::RoundRobin;

mod adaptive;
pub use adaptive::AdaptiveRoundRobin;

pub(crate) use adaptive::run as run_adaptive;
pub(crate) use round_robin::run as run_fixed;
