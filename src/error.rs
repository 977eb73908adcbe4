use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The text does not have the shape of the quantity being parsed.
    #[error("invalid {kind} format: {input:?}")]
    Format { kind: &'static str, input: String },

    /// The leading numeral could not be read as a signed 64-bit integer.
    #[error("invalid number in {input:?}: {source}")]
    InvalidNumber {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid unit: {0:?}")]
    UnknownUnit(String),

    #[error("invalid duration unit: {0:?}")]
    UnknownDurationUnit(String),

    /// The scaled value does not fit in the target integer type.
    #[error("{0} overflows the representable range")]
    Overflow(String),

    #[error("{0}")]
    InvalidArgument(String),
}
