use crate::serialization::{ObjectHook, Parsable, SerializationError, SerializationWriter, StartObjectHook};

/// Ordered callbacks for one lifecycle event, invoked front to back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookChain<H> {
  hooks: Vec<H>,
}

impl<H> HookChain<H> {
  pub fn new() -> Self {
    Self { hooks: Vec::new() }
  }

  /// Installs `hook` ahead of every hook already in the chain.
  pub fn prepend(&mut self, hook: H) {
    self.hooks.insert(0, hook);
  }

  /// Installs `hook` after every hook already in the chain.
  pub fn append(&mut self, hook: H) {
    self.hooks.push(hook);
  }

  pub fn len(&self) -> usize {
    self.hooks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.hooks.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &H> {
    self.hooks.iter()
  }
}

impl<H> Default for HookChain<H> {
  fn default() -> Self {
    Self::new()
  }
}

impl HookChain<ObjectHook> {
  /// Runs every hook in order, stopping at the first error.
  pub fn invoke(&self, value: &dyn Parsable) -> Result<(), SerializationError> {
    self.hooks.iter().try_for_each(|hook| hook.run(value))
  }
}

impl HookChain<StartObjectHook> {
  /// Runs every hook in order, stopping at the first error.
  pub fn invoke(&self, value: &dyn Parsable, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
    for hook in &self.hooks {
      hook.run(value, writer)?;
    }
    Ok(())
  }
}
