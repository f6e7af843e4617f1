use crate::serialization::SerializerConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializerConfigOption {
  SetSerializeOnlyChangedValues(bool),
  SetReadChunkSize(usize),
}

impl SerializerConfigOption {
  pub fn apply(&self, config: &mut SerializerConfig) {
    match self {
      SerializerConfigOption::SetSerializeOnlyChangedValues(only_changed) => {
        config.serialize_only_changed_values = *only_changed;
      }
      SerializerConfigOption::SetReadChunkSize(chunk_size) => {
        config.read_chunk_size = (*chunk_size).max(1);
      }
    }
  }

  pub fn with_serialize_only_changed_values(only_changed: bool) -> SerializerConfigOption {
    SerializerConfigOption::SetSerializeOnlyChangedValues(only_changed)
  }

  pub fn with_read_chunk_size(chunk_size: usize) -> SerializerConfigOption {
    SerializerConfigOption::SetReadChunkSize(chunk_size)
  }
}
