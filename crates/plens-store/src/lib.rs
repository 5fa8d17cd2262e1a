mod archive;
mod config;
mod error;
mod paths;

pub use archive::{annotated_text_map, Archive, RawSources};
pub use config::{ArchiveConfig, SourceFiles};
pub use error::LoadError;
pub use paths::DataPaths;
