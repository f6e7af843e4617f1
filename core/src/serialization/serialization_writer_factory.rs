use crate::serialization::{SerializationError, SerializationWriter};

/// Produces a fresh [`SerializationWriter`] per serialization pass.
pub trait SerializationWriterFactory: Send + Sync {
  /// The content type this factory writes.
  fn valid_content_type(&self) -> &str;

  fn get_serialization_writer(&self, content_type: &str) -> Result<Box<dyn SerializationWriter>, SerializationError>;

  /// Like [`SerializationWriterFactory::get_serialization_writer`], telling the factory
  /// whether only changed values should be written.
  ///
  /// Plain factories ignore the flag. Decorators forward it to the factory they wrap.
  fn get_serialization_writer_with_options(
    &self,
    content_type: &str,
    _serialize_only_changed_values: bool,
  ) -> Result<Box<dyn SerializationWriter>, SerializationError> {
    self.get_serialization_writer(content_type)
  }
}
