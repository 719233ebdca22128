use thiserror::Error;


/// Result type used throughout the crate.

pub type Result<T> = std::result::Result<T, Error>;


/// Everything that can go wrong outside of plain arithmetic.

#[derive(Debug, Error)]
pub enum Error {
  /// Reading or writing a file failed.
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  /// Persisted parameters could not be encoded or decoded.
  #[error("malformed model state: {0}")]
  Encoding(#[from] postcard::Error),

  /// A configuration document could not be parsed.
  #[error("config error: {0}")]
  Config(#[from] serde_json::Error),

  /// A configuration value is out of its valid range.
  #[error("invalid config: {0}")]
  InvalidConfig(String),

  /// Persisted parameters were followed by unexpected data.
  #[error("malformed model state: {count} trailing bytes after parameters")]
  TrailingBytes { count: usize },

  /// A persisted parameter decoded to NaN or infinity.
  #[error("malformed model state: parameter `{name}` is not finite")]
  NonFinite { name: &'static str },
}
