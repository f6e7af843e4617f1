use crate::enum_codec::{encode_flags_value, WireEnum};
use crate::serialization::{Parsable, SerializationError, WriterHooks};

/// Accumulates the serialized form of a model graph for one serialization pass.
///
/// Implementations are supplied per wire format. A writer is owned by the call that
/// created it, used for exactly one pass and dropped afterwards; whatever
/// [`SerializationWriter::get_serialized_content`] returns must stay valid after the
/// drop. `key` is the field name, `None` for root values and collection items.
pub trait SerializationWriter: Send {
  fn write_string_value(&mut self, key: Option<&str>, value: Option<&str>) -> Result<(), SerializationError>;

  fn write_bool_value(&mut self, key: Option<&str>, value: Option<bool>) -> Result<(), SerializationError>;

  fn write_i64_value(&mut self, key: Option<&str>, value: Option<i64>) -> Result<(), SerializationError>;

  fn write_f64_value(&mut self, key: Option<&str>, value: Option<f64>) -> Result<(), SerializationError>;

  fn write_null_value(&mut self, key: Option<&str>) -> Result<(), SerializationError>;

  fn write_collection_of_string_values(&mut self, key: Option<&str>, values: &[String]) -> Result<(), SerializationError>;

  /// Writes `value` as an object, running the lifecycle hooks around it.
  ///
  /// See [`write_object_with_hooks`](crate::serialization::write_object_with_hooks).
  fn write_object_value(&mut self, key: Option<&str>, value: &dyn Parsable) -> Result<(), SerializationError>;

  fn write_collection_of_object_values(
    &mut self,
    key: Option<&str>,
    values: &[&dyn Parsable],
  ) -> Result<(), SerializationError>;

  /// Finalizes the output and returns an owned copy of it.
  fn get_serialized_content(&mut self) -> Result<Vec<u8>, SerializationError>;

  fn hooks(&self) -> &WriterHooks;

  fn hooks_mut(&mut self) -> &mut WriterHooks;
}

/// Typed helpers layered over any [`SerializationWriter`].
pub trait SerializationWriterExt: SerializationWriter {
  /// Writes an enum field using its wire name; flags values become a comma separated list.
  fn write_enum_value<E: WireEnum>(&mut self, key: Option<&str>, value: Option<E>) -> Result<(), SerializationError> {
    match value {
      Some(value) => {
        let wire = encode_flags_value(value)?;
        self.write_string_value(key, Some(&wire))
      }
      None => Ok(()),
    }
  }

  fn write_collection_of_enum_values<E: WireEnum>(
    &mut self,
    key: Option<&str>,
    values: &[E],
  ) -> Result<(), SerializationError> {
    let wires = values
      .iter()
      .map(|value| encode_flags_value(*value))
      .collect::<Result<Vec<_>, _>>()?;
    self.write_collection_of_string_values(key, &wires)
  }
}

impl<W: SerializationWriter + ?Sized> SerializationWriterExt for W {}
