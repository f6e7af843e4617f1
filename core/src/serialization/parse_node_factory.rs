use crate::serialization::{ParseNode, SerializationError};

/// Parses raw content of one content type into a root [`ParseNode`].
pub trait ParseNodeFactory: Send + Sync {
  fn valid_content_type(&self) -> &str;

  fn get_root_parse_node(&self, content_type: &str, content: &[u8]) -> Result<Box<dyn ParseNode>, SerializationError>;
}
