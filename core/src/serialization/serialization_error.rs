use thiserror::Error;

use crate::enum_codec::EnumCodecError;

#[derive(Debug, Error)]
pub enum SerializationError {
  #[error("Invalid argument: {0} must not be null or empty")]
  InvalidArgument(&'static str),
  #[error("Content type {0} does not have a factory registered")]
  FactoryNotFound(String),
  #[error(transparent)]
  Enum(#[from] EnumCodecError),
  #[error("Serialization cancelled")]
  Cancelled,
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),
  #[error("{0}")]
  Custom(String),
}

impl SerializationError {
  pub fn custom(message: impl Into<String>) -> Self {
    SerializationError::Custom(message.into())
  }

  pub fn is_invalid_argument(&self) -> bool {
    matches!(self, SerializationError::InvalidArgument(_))
  }
}

static_assertions::assert_impl_all!(SerializationError: Send, Sync);
