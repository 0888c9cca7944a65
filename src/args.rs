pub use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate local docker-compose development stacks
#[derive(Parser)]
#[clap(version, about)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a stack
    Create {
        /// Name or alias of the stack
        stack: String,

        /// Directory the stack folder is created in [default: $AUTOSTACK_OUTPUT_DIR or ./]
        #[clap(long, short)]
        output: Option<PathBuf>,
    },
    /// List all available stacks
    List {
        /// Only print the stack names
        #[clap(long, short)]
        short: bool,
    },
    /// Report template placeholders that have no declared variable or port
    Check {
        /// Only check this stack [default: all]
        stack: Option<String>,
    },
}
