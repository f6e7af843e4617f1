use std::io::Cursor;
use std::sync::Arc;

use once_cell::sync::Lazy;
use tokio_util::sync::CancellationToken;

use crate::serialization::stream_text::read_stream_to_string_async;
use crate::serialization::{
  Parsable, ParsableFactory, ParseNodeExt, ParseNodeFactoryRegistry, SerializationError, SerializationWriter,
  SerializationWriterFactoryRegistry, SerializerConfig,
};

/// Serialized content handed back to the caller. It owns its bytes.
pub type SerializedStream = Cursor<Vec<u8>>;

static DEFAULT_SERIALIZER: Lazy<Serializer> = Lazy::new(Serializer::default);

/// Drives serialization passes through the writer registered for a content type.
///
/// Each call obtains its own writer, so one `Serializer` can be shared across threads.
#[derive(Debug, Clone)]
pub struct Serializer {
  writer_factories: Arc<SerializationWriterFactoryRegistry>,
  parse_node_factories: Arc<ParseNodeFactoryRegistry>,
  config: SerializerConfig,
}

impl Default for Serializer {
  fn default() -> Self {
    Serializer::new(
      SerializationWriterFactoryRegistry::default_instance(),
      ParseNodeFactoryRegistry::default_instance(),
      SerializerConfig::default(),
    )
  }
}

impl Serializer {
  pub fn new(
    writer_factories: Arc<SerializationWriterFactoryRegistry>,
    parse_node_factories: Arc<ParseNodeFactoryRegistry>,
    config: SerializerConfig,
  ) -> Self {
    Self {
      writer_factories,
      parse_node_factories,
      config,
    }
  }

  /// The serializer backed by the process-wide registries.
  pub fn default_instance() -> &'static Serializer {
    &DEFAULT_SERIALIZER
  }

  pub fn config(&self) -> &SerializerConfig {
    &self.config
  }

  pub fn writer_factories(&self) -> &Arc<SerializationWriterFactoryRegistry> {
    &self.writer_factories
  }

  pub fn parse_node_factories(&self) -> &Arc<ParseNodeFactoryRegistry> {
    &self.parse_node_factories
  }

  /// Serializes `value` with the configured change tracking setting.
  pub fn serialize_as_stream<T: Parsable>(
    &self,
    content_type: &str,
    value: Option<&T>,
  ) -> Result<SerializedStream, SerializationError> {
    self.serialize_as_stream_with_options(content_type, value, self.config.serialize_only_changed_values)
  }

  pub fn serialize_as_stream_with_options<T: Parsable>(
    &self,
    content_type: &str,
    value: Option<&T>,
    serialize_only_changed_values: bool,
  ) -> Result<SerializedStream, SerializationError> {
    validate_content_type(content_type)?;
    let value = value.ok_or(SerializationError::InvalidArgument("value"))?;
    let mut writer = self.get_serialization_writer(content_type, serialize_only_changed_values)?;
    tracing::debug!("Serializer::serialize_as_stream: content_type = {}", content_type);
    writer.write_object_value(None, value)?;
    Self::into_stream(writer)
  }

  pub fn serialize_collection_as_stream<T: Parsable>(
    &self,
    content_type: &str,
    values: Option<&[T]>,
    serialize_only_changed_values: bool,
  ) -> Result<SerializedStream, SerializationError> {
    validate_content_type(content_type)?;
    let values = values.ok_or(SerializationError::InvalidArgument("value"))?;
    let mut writer = self.get_serialization_writer(content_type, serialize_only_changed_values)?;
    tracing::debug!(
      "Serializer::serialize_collection_as_stream: content_type = {}, len = {}",
      content_type,
      values.len()
    );
    let values = values.iter().map(|value| value as &dyn Parsable).collect::<Vec<_>>();
    writer.write_collection_of_object_values(None, &values)?;
    Self::into_stream(writer)
  }

  #[deprecated(note = "use serialize_as_string_async")]
  #[allow(deprecated)]
  pub fn serialize_as_string<T: Parsable>(&self, content_type: &str, value: Option<&T>) -> Result<String, SerializationError> {
    let stream = self.serialize_as_stream(content_type, value)?;
    crate::serialization::read_stream_to_string(stream)
  }

  #[deprecated(note = "use serialize_collection_as_string_async")]
  #[allow(deprecated)]
  pub fn serialize_collection_as_string<T: Parsable>(
    &self,
    content_type: &str,
    values: Option<&[T]>,
  ) -> Result<String, SerializationError> {
    let stream = self.serialize_collection_as_stream(content_type, values, self.config.serialize_only_changed_values)?;
    crate::serialization::read_stream_to_string(stream)
  }

  pub async fn serialize_as_string_async<T: Parsable>(
    &self,
    content_type: &str,
    value: Option<&T>,
    serialize_only_changed_values: bool,
    cancellation: &CancellationToken,
  ) -> Result<String, SerializationError> {
    let stream = self.serialize_as_stream_with_options(content_type, value, serialize_only_changed_values)?;
    read_stream_to_string_async(stream, self.config.read_chunk_size, cancellation).await
  }

  pub async fn serialize_collection_as_string_async<T: Parsable>(
    &self,
    content_type: &str,
    values: Option<&[T]>,
    serialize_only_changed_values: bool,
    cancellation: &CancellationToken,
  ) -> Result<String, SerializationError> {
    let stream = self.serialize_collection_as_stream(content_type, values, serialize_only_changed_values)?;
    read_stream_to_string_async(stream, self.config.read_chunk_size, cancellation).await
  }

  /// Parses `content` and builds a model from its root node.
  pub fn deserialize<T>(
    &self,
    content_type: &str,
    content: Option<&[u8]>,
    factory: ParsableFactory<T>,
  ) -> Result<T, SerializationError> {
    validate_content_type(content_type)?;
    let content = content.ok_or(SerializationError::InvalidArgument("content"))?;
    let root = self.parse_node_factories.get_root_parse_node(content_type, content)?;
    tracing::debug!("Serializer::deserialize: content_type = {}", content_type);
    factory(root.as_ref())
  }

  /// Parses `content` and builds one model per item of its root collection.
  pub fn deserialize_collection<T>(
    &self,
    content_type: &str,
    content: Option<&[u8]>,
    factory: ParsableFactory<T>,
  ) -> Result<Vec<T>, SerializationError> {
    validate_content_type(content_type)?;
    let content = content.ok_or(SerializationError::InvalidArgument("content"))?;
    let root = self.parse_node_factories.get_root_parse_node(content_type, content)?;
    tracing::debug!("Serializer::deserialize_collection: content_type = {}", content_type);
    root.get_collection_of_object_values(factory)
  }

  fn get_serialization_writer(
    &self,
    content_type: &str,
    serialize_only_changed_values: bool,
  ) -> Result<Box<dyn SerializationWriter>, SerializationError> {
    self
      .writer_factories
      .get_serialization_writer(content_type, serialize_only_changed_values)
  }

  /// Copies the content out; the writer is dropped on return.
  fn into_stream(mut writer: Box<dyn SerializationWriter>) -> Result<SerializedStream, SerializationError> {
    let content = writer.get_serialized_content()?;
    Ok(Cursor::new(content))
  }
}

fn validate_content_type(content_type: &str) -> Result<(), SerializationError> {
  if content_type.is_empty() {
    return Err(SerializationError::InvalidArgument("content_type"));
  }
  Ok(())
}

/// Serializes `value` through the default serializer.
pub fn serialize_as_stream<T: Parsable>(
  content_type: &str,
  value: Option<&T>,
  serialize_only_changed_values: bool,
) -> Result<SerializedStream, SerializationError> {
  Serializer::default_instance().serialize_as_stream_with_options(content_type, value, serialize_only_changed_values)
}

/// Serializes `values` through the default serializer.
pub fn serialize_collection_as_stream<T: Parsable>(
  content_type: &str,
  values: Option<&[T]>,
  serialize_only_changed_values: bool,
) -> Result<SerializedStream, SerializationError> {
  Serializer::default_instance().serialize_collection_as_stream(content_type, values, serialize_only_changed_values)
}

pub async fn serialize_as_string_async<T: Parsable>(
  content_type: &str,
  value: Option<&T>,
  serialize_only_changed_values: bool,
  cancellation: &CancellationToken,
) -> Result<String, SerializationError> {
  Serializer::default_instance()
    .serialize_as_string_async(content_type, value, serialize_only_changed_values, cancellation)
    .await
}

pub async fn serialize_collection_as_string_async<T: Parsable>(
  content_type: &str,
  values: Option<&[T]>,
  serialize_only_changed_values: bool,
  cancellation: &CancellationToken,
) -> Result<String, SerializationError> {
  Serializer::default_instance()
    .serialize_collection_as_string_async(content_type, values, serialize_only_changed_values, cancellation)
    .await
}

static_assertions::assert_impl_all!(Serializer: Send, Sync);
