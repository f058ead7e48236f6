//! Resource-loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading locale resources from disk.
///
/// A missing resource file is not an error (see
/// [`Language::from_file`](crate::Language::from_file)); only io failures on
/// paths that do exist surface here.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("failed to read locale resource '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
