use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::serialization::{ParseNode, ParseNodeFactory, SerializationError, SerializationWriter, SerializationWriterFactory};

static VENDOR_SPECIFIC_CONTENT_TYPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^/]+\+").expect("valid regex"));

static DEFAULT_WRITER_FACTORIES: Lazy<Arc<SerializationWriterFactoryRegistry>> =
  Lazy::new(|| Arc::new(SerializationWriterFactoryRegistry::new()));

static DEFAULT_PARSE_NODE_FACTORIES: Lazy<Arc<ParseNodeFactoryRegistry>> =
  Lazy::new(|| Arc::new(ParseNodeFactoryRegistry::new()));

/// Factories keyed by content type.
///
/// Keys are matched exactly first. A lookup that misses is retried without media type
/// parameters (`application/json; charset=utf-8` → `application/json`) and then with
/// the vendor prefix removed (`application/vnd.acme.v2+json` → `application/json`).
pub struct ContentTypeRegistry<F: ?Sized + Send + Sync> {
  factories: DashMap<String, Arc<F>>,
}

pub type SerializationWriterFactoryRegistry = ContentTypeRegistry<dyn SerializationWriterFactory>;

pub type ParseNodeFactoryRegistry = ContentTypeRegistry<dyn ParseNodeFactory>;

impl<F: ?Sized + Send + Sync> ContentTypeRegistry<F> {
  pub fn new() -> Self {
    Self {
      factories: DashMap::new(),
    }
  }

  /// Registers `factory` for `content_type`, returning the factory it replaces.
  pub fn register(&self, content_type: &str, factory: Arc<F>) -> Result<Option<Arc<F>>, SerializationError> {
    if content_type.is_empty() {
      return Err(SerializationError::InvalidArgument("content_type"));
    }
    tracing::debug!("ContentTypeRegistry::register: content_type = {}", content_type);
    Ok(self.factories.insert(content_type.to_string(), factory))
  }

  pub fn unregister(&self, content_type: &str) -> Option<Arc<F>> {
    self.factories.remove(content_type).map(|(_, factory)| factory)
  }

  pub fn contains(&self, content_type: &str) -> bool {
    self.factories.contains_key(content_type)
  }

  pub fn content_types(&self) -> Vec<String> {
    let mut content_types = self.factories.iter().map(|entry| entry.key().clone()).collect::<Vec<_>>();
    content_types.sort();
    content_types
  }

  pub fn len(&self) -> usize {
    self.factories.len()
  }

  pub fn is_empty(&self) -> bool {
    self.factories.is_empty()
  }

  /// Finds the factory serving `content_type`, along with the key it is registered under.
  pub fn resolve(&self, content_type: &str) -> Result<(String, Arc<F>), SerializationError> {
    if content_type.is_empty() {
      return Err(SerializationError::InvalidArgument("content_type"));
    }
    if let Some(factory) = self.factories.get(content_type) {
      return Ok((content_type.to_string(), factory.clone()));
    }
    let without_parameters = content_type.split(';').next().unwrap_or(content_type).trim();
    if let Some(factory) = self.factories.get(without_parameters) {
      return Ok((without_parameters.to_string(), factory.clone()));
    }
    let cleaned = VENDOR_SPECIFIC_CONTENT_TYPE.replace(without_parameters, "");
    if let Some(factory) = self.factories.get(cleaned.as_ref()) {
      tracing::trace!(
        "ContentTypeRegistry::resolve: content_type = {}, resolved = {}",
        content_type,
        cleaned
      );
      return Ok((cleaned.into_owned(), factory.clone()));
    }
    tracing::debug!("ContentTypeRegistry::resolve: no factory for {}", content_type);
    Err(SerializationError::FactoryNotFound(cleaned.into_owned()))
  }
}

impl<F: ?Sized + Send + Sync> Default for ContentTypeRegistry<F> {
  fn default() -> Self {
    Self::new()
  }
}

impl<F: ?Sized + Send + Sync> Debug for ContentTypeRegistry<F> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ContentTypeRegistry")
      .field("content_types", &self.content_types())
      .finish()
  }
}

impl ContentTypeRegistry<dyn SerializationWriterFactory> {
  /// The process-wide registry used by [`Serializer::default`](crate::serialization::Serializer).
  pub fn default_instance() -> Arc<Self> {
    DEFAULT_WRITER_FACTORIES.clone()
  }

  /// Registers `factory` under its own valid content type.
  pub fn register_factory(
    &self,
    factory: Arc<dyn SerializationWriterFactory>,
  ) -> Result<Option<Arc<dyn SerializationWriterFactory>>, SerializationError> {
    let content_type = factory.valid_content_type().to_string();
    self.register(&content_type, factory)
  }

  /// Creates a writer for `content_type` from the factory registered for it.
  pub fn get_serialization_writer(
    &self,
    content_type: &str,
    serialize_only_changed_values: bool,
  ) -> Result<Box<dyn SerializationWriter>, SerializationError> {
    let (resolved, factory) = self.resolve(content_type)?;
    factory.get_serialization_writer_with_options(&resolved, serialize_only_changed_values)
  }
}

impl ContentTypeRegistry<dyn ParseNodeFactory> {
  /// The process-wide registry used by [`Serializer::default`](crate::serialization::Serializer).
  pub fn default_instance() -> Arc<Self> {
    DEFAULT_PARSE_NODE_FACTORIES.clone()
  }

  /// Registers `factory` under its own valid content type.
  pub fn register_factory(
    &self,
    factory: Arc<dyn ParseNodeFactory>,
  ) -> Result<Option<Arc<dyn ParseNodeFactory>>, SerializationError> {
    let content_type = factory.valid_content_type().to_string();
    self.register(&content_type, factory)
  }

  pub fn get_root_parse_node(&self, content_type: &str, content: &[u8]) -> Result<Box<dyn ParseNode>, SerializationError> {
    let (resolved, factory) = self.resolve(content_type)?;
    factory.get_root_parse_node(&resolved, content)
  }
}

static_assertions::assert_impl_all!(SerializationWriterFactoryRegistry: Send, Sync);
static_assertions::assert_impl_all!(ParseNodeFactoryRegistry: Send, Sync);
