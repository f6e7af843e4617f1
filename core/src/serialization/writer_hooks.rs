use crate::serialization::{HookChain, ObjectHook, Parsable, SerializationError, SerializationWriter, StartObjectHook};

/// The three lifecycle hook chains carried by every [`SerializationWriter`].
///
/// Writers run `on_before_object` before opening an object, `on_start_object` right
/// after opening it and `on_after_object` once it is closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriterHooks {
  on_before_object: HookChain<ObjectHook>,
  on_after_object: HookChain<ObjectHook>,
  on_start_object: HookChain<StartObjectHook>,
}

impl WriterHooks {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn on_before_object(&self) -> &HookChain<ObjectHook> {
    &self.on_before_object
  }

  pub fn on_before_object_mut(&mut self) -> &mut HookChain<ObjectHook> {
    &mut self.on_before_object
  }

  pub fn on_after_object(&self) -> &HookChain<ObjectHook> {
    &self.on_after_object
  }

  pub fn on_after_object_mut(&mut self) -> &mut HookChain<ObjectHook> {
    &mut self.on_after_object
  }

  pub fn on_start_object(&self) -> &HookChain<StartObjectHook> {
    &self.on_start_object
  }

  pub fn on_start_object_mut(&mut self) -> &mut HookChain<StartObjectHook> {
    &mut self.on_start_object
  }

  pub fn is_empty(&self) -> bool {
    self.on_before_object.is_empty() && self.on_after_object.is_empty() && self.on_start_object.is_empty()
  }
}

/// Writes `value` as one object of `writer`, running the writer's hooks around it.
///
/// `open` and `close` emit the format's object delimiters. The hook chains are cloned
/// before running so that start hooks can write through `writer` themselves.
pub fn write_object_with_hooks<W>(
  writer: &mut W,
  value: &dyn Parsable,
  open: impl FnOnce(&mut W) -> Result<(), SerializationError>,
  close: impl FnOnce(&mut W) -> Result<(), SerializationError>,
) -> Result<(), SerializationError>
where
  W: SerializationWriter, {
  let hooks = writer.hooks().clone();
  hooks.on_before_object().invoke(value)?;
  open(writer)?;
  hooks.on_start_object().invoke(value, writer)?;
  value.serialize(writer)?;
  close(writer)?;
  hooks.on_after_object().invoke(value)
}
