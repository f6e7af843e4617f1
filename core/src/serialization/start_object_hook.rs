use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::serialization::{Parsable, SerializationError, SerializationWriter};

/// Callback invoked once a model object has been opened, before its fields are written.
#[allow(clippy::type_complexity)]
#[derive(Clone)]
pub struct StartObjectHook(
  Arc<dyn Fn(&dyn Parsable, &mut dyn SerializationWriter) -> Result<(), SerializationError> + Send + Sync + 'static>,
);

impl StartObjectHook {
  pub fn new(
    f: impl Fn(&dyn Parsable, &mut dyn SerializationWriter) -> Result<(), SerializationError> + Send + Sync + 'static,
  ) -> Self {
    StartObjectHook(Arc::new(f))
  }

  pub fn run(&self, value: &dyn Parsable, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
    (self.0)(value, writer)
  }
}

impl Debug for StartObjectHook {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "StartObjectHook")
  }
}

impl PartialEq for StartObjectHook {
  fn eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }
}

impl Eq for StartObjectHook {}

static_assertions::assert_impl_all!(StartObjectHook: Send, Sync);
