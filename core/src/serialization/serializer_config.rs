use serde::{Deserialize, Serialize};

use crate::serialization::SerializerConfigOption;

pub const DEFAULT_READ_CHUNK_SIZE: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializerConfig {
  /// Whether writers emit only the values changed since the model was loaded.
  pub serialize_only_changed_values: bool,
  /// Chunk size, in bytes, used when reading serialized content back as text.
  pub read_chunk_size: usize,
}

impl Default for SerializerConfig {
  fn default() -> Self {
    SerializerConfig {
      serialize_only_changed_values: true,
      read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
    }
  }
}

impl SerializerConfig {
  pub fn from(options: impl IntoIterator<Item = SerializerConfigOption>) -> SerializerConfig {
    let mut config = SerializerConfig::default();
    for option in options {
      option.apply(&mut config);
    }
    config
  }
}
