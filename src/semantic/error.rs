//! Resolution errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a whole resolution pass.
///
/// Problems with imported files never surface here; they are logged and
/// skipped. Only an unreadable entry document aborts resolution.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Failed to read {}: {source}", .path.display())]
    EntryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type ResolveResult<T> = Result<T, ResolveError>;
