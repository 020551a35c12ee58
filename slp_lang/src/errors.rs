use thiserror::Error;

// The tree walks themselves cannot fail; only the sink they write to can.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to format output")]
    Fmt(#[from] std::fmt::Error),
}
