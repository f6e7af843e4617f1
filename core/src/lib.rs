//! Content-type driven serialization core for generated API client models.
//!
//! Writers for concrete wire formats live outside this crate. They are looked up by
//! content type, driven through [`serialization::Serializer`], and can be decorated with
//! lifecycle hooks by [`serialization::SerializationWriterProxyFactory`]. Enum fields
//! cross the wire through [`enum_codec`].

pub mod enum_codec;
pub mod serialization;

pub use enum_codec::*;
pub use serialization::*;
