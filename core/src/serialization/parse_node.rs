use crate::enum_codec::{decode_enum_value, WireEnum};
use crate::serialization::{ParsableFactory, SerializationError};

/// One node of a parsed payload, supplied per wire format.
pub trait ParseNode {
  fn get_string_value(&self) -> Option<String>;

  fn get_bool_value(&self) -> Option<bool>;

  fn get_i64_value(&self) -> Option<i64>;

  fn get_f64_value(&self) -> Option<f64>;

  fn get_child_node(&self, identifier: &str) -> Option<Box<dyn ParseNode>>;

  /// The items of a collection node, `None` if the node is not a collection.
  fn get_collection_of_nodes(&self) -> Option<Vec<Box<dyn ParseNode>>>;
}

/// Typed helpers layered over any [`ParseNode`].
pub trait ParseNodeExt: ParseNode {
  /// Decodes the node's string value as `E`; unknown values yield `None`.
  fn get_enum_value<E: WireEnum>(&self) -> Option<E> {
    decode_enum_value(self.get_string_value().as_deref())
  }

  fn get_collection_of_enum_values<E: WireEnum>(&self) -> Option<Vec<E>> {
    self.get_collection_of_nodes().map(|nodes| {
      nodes
        .iter()
        .filter_map(|node| decode_enum_value(node.get_string_value().as_deref()))
        .collect()
    })
  }

  /// Builds one model per item of a collection node; a non-collection node yields no items.
  fn get_collection_of_object_values<T>(&self, factory: ParsableFactory<T>) -> Result<Vec<T>, SerializationError> {
    match self.get_collection_of_nodes() {
      Some(nodes) => nodes.iter().map(|node| factory(node.as_ref())).collect(),
      None => Ok(Vec::new()),
    }
  }
}

impl<N: ParseNode + ?Sized> ParseNodeExt for N {}
