pub mod format;
pub mod session_id;
pub mod types;

pub use session_id::{derive_session_id, youtube_id, youtube_timestamp};
pub use types::*;
