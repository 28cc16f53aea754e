//! Error types for the mcrev-proto codec.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The buffer does not parse against the wire schema.
  #[error("malformed buffer: {0}")]
  Decode(#[from] prost::DecodeError),

  #[error("unexpected message family: {found:?}")]
  WrongMessageType { found: String },

  #[error("unsupported schema version: {found}")]
  UnsupportedVersion { found: u32 },

  #[error("missing required field: {0}")]
  MissingField(&'static str),

  #[error("invalid wire date: year {year}, month {month}, day {day}")]
  InvalidDate { year: i32, month: u32, day: u32 },

  #[error("invalid wire timestamp: seconds {seconds}, nanos {nanos}")]
  InvalidTimestamp { seconds: i64, nanos: i32 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
