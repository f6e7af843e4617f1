use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumCodecError {
  #[error("Invalid enum value {value} for enum of type {type_name}")]
  InvalidValue { value: u64, type_name: &'static str },
  #[error("Enum type {0} is not registered")]
  UnregisteredType(&'static str),
}

static_assertions::assert_impl_all!(EnumCodecError: Send, Sync);
