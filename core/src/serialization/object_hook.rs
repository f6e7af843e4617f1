use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::serialization::{Parsable, SerializationError};

/// Callback invoked before or after a model object is written.
#[derive(Clone)]
pub struct ObjectHook(Arc<dyn Fn(&dyn Parsable) -> Result<(), SerializationError> + Send + Sync + 'static>);

impl ObjectHook {
  pub fn new(f: impl Fn(&dyn Parsable) -> Result<(), SerializationError> + Send + Sync + 'static) -> Self {
    ObjectHook(Arc::new(f))
  }

  pub fn run(&self, value: &dyn Parsable) -> Result<(), SerializationError> {
    (self.0)(value)
  }
}

impl Debug for ObjectHook {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "ObjectHook")
  }
}

impl PartialEq for ObjectHook {
  fn eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }
}

impl Eq for ObjectHook {}

static_assertions::assert_impl_all!(ObjectHook: Send, Sync);
