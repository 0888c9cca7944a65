use std::path::PathBuf;
use thiserror::Error;

use crate::materialize::GenerationRequestBuilderError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("stack not recognized: {0}")]
    UnrecognizedStack(String),

    #[error("error creating directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: fs_extra::error::Error,
    },

    #[error("error writing {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Only surfaced as a warning, the generated files are still usable.
    #[error("error starting {program}: {reason}")]
    Start { program: String, reason: String },

    #[error("incomplete generation request: {0}")]
    IncompleteRequest(#[from] GenerationRequestBuilderError),

    /// The user pressed Ctrl-C at a prompt.
    #[error("interrupted")]
    Interrupted,
}

pub type Result<T> = std::result::Result<T, Error>;
