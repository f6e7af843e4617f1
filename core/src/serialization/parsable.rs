use crate::serialization::{ParseNode, SerializationError, SerializationWriter};

/// A model that knows how to write itself through any [`SerializationWriter`].
pub trait Parsable {
  /// Writes the model's fields into `writer`.
  ///
  /// The enclosing object, and the lifecycle hooks around it, are handled by the
  /// writer's `write_object_value`.
  fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError>;
}

/// Builds a model from a parse node.
pub type ParsableFactory<T> = fn(&dyn ParseNode) -> Result<T, SerializationError>;
