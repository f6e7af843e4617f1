use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::serialization::{
  ObjectHook, SerializationError, SerializationWriter, SerializationWriterFactory, StartObjectHook,
};

/// Wraps a [`SerializationWriterFactory`] and installs extra lifecycle hooks on every
/// writer it produces.
///
/// The decorator's hooks are placed ahead of the hooks the wrapped writer already
/// carries, so stacked decorators run outermost first, then inward, then the
/// writer's own hooks. The wrapped factory itself is never modified.
#[derive(Clone)]
pub struct SerializationWriterProxyFactory {
  proxied_factory: Arc<dyn SerializationWriterFactory>,
  on_before: Option<ObjectHook>,
  on_after: Option<ObjectHook>,
  on_start: Option<StartObjectHook>,
  changed_values_only: bool,
}

impl SerializationWriterProxyFactory {
  pub fn new(
    factory_to_wrap: Option<Arc<dyn SerializationWriterFactory>>,
    on_before: Option<ObjectHook>,
    on_after: Option<ObjectHook>,
    on_start: Option<StartObjectHook>,
  ) -> Result<Self, SerializationError> {
    let proxied_factory = factory_to_wrap.ok_or(SerializationError::InvalidArgument("factory_to_wrap"))?;
    Ok(Self {
      proxied_factory,
      on_before,
      on_after,
      on_start,
      changed_values_only: false,
    })
  }

  /// Marks the hooks as tracking changed values only.
  ///
  /// Such a decorator steps aside when a caller asks for every value to be written.
  pub fn with_changed_values_only(mut self, changed_values_only: bool) -> Self {
    self.changed_values_only = changed_values_only;
    self
  }

  pub fn proxied_factory(&self) -> &Arc<dyn SerializationWriterFactory> {
    &self.proxied_factory
  }

  pub fn is_changed_values_only(&self) -> bool {
    self.changed_values_only
  }

  fn decorate(&self, mut writer: Box<dyn SerializationWriter>) -> Box<dyn SerializationWriter> {
    let hooks = writer.hooks_mut();
    if let Some(on_before) = &self.on_before {
      hooks.on_before_object_mut().prepend(on_before.clone());
    }
    if let Some(on_after) = &self.on_after {
      hooks.on_after_object_mut().prepend(on_after.clone());
    }
    if let Some(on_start) = &self.on_start {
      hooks.on_start_object_mut().prepend(on_start.clone());
    }
    writer
  }
}

impl SerializationWriterFactory for SerializationWriterProxyFactory {
  fn valid_content_type(&self) -> &str {
    self.proxied_factory.valid_content_type()
  }

  fn get_serialization_writer(&self, content_type: &str) -> Result<Box<dyn SerializationWriter>, SerializationError> {
    let writer = self.proxied_factory.get_serialization_writer(content_type)?;
    tracing::trace!(
      "SerializationWriterProxyFactory::get_serialization_writer: content_type = {}",
      content_type
    );
    Ok(self.decorate(writer))
  }

  fn get_serialization_writer_with_options(
    &self,
    content_type: &str,
    serialize_only_changed_values: bool,
  ) -> Result<Box<dyn SerializationWriter>, SerializationError> {
    let writer = self
      .proxied_factory
      .get_serialization_writer_with_options(content_type, serialize_only_changed_values)?;
    if self.changed_values_only && !serialize_only_changed_values {
      tracing::debug!(
        "SerializationWriterProxyFactory: skipping change tracking hooks, content_type = {}",
        content_type
      );
      return Ok(writer);
    }
    Ok(self.decorate(writer))
  }
}

impl Debug for SerializationWriterProxyFactory {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SerializationWriterProxyFactory")
      .field("valid_content_type", &self.valid_content_type())
      .field("on_before", &self.on_before)
      .field("on_after", &self.on_after)
      .field("on_start", &self.on_start)
      .field("changed_values_only", &self.changed_values_only)
      .finish()
  }
}

static_assertions::assert_impl_all!(SerializationWriterProxyFactory: Send, Sync);
