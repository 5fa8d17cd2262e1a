//! Rollup statistics derived from the archive on every call.

mod polarization;
mod regidors;
mod sessions;
mod tags;

pub use polarization::{average_polarization, rounded_average, rounded_average_1dp};
pub use regidors::{regidor_stats, RegidorStats};
pub use sessions::{session_stats, SessionStats};
pub use tags::{tag_stats, TagStats};
