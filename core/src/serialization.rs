//! Content-type driven serialization of parsable models.

mod content_type_registry;
mod hook_chain;
mod object_hook;
mod parsable;
mod parse_node;
mod parse_node_factory;
mod serialization_error;
mod serialization_writer;
mod serialization_writer_factory;
mod serialization_writer_proxy_factory;
mod serializer;
mod serializer_config;
mod serializer_config_option;
mod start_object_hook;
mod stream_text;
mod writer_hooks;


pub use {
  self::content_type_registry::*, self::hook_chain::*, self::object_hook::*, self::parsable::*, self::parse_node::*,
  self::parse_node_factory::*, self::serialization_error::*, self::serialization_writer::*,
  self::serialization_writer_factory::*, self::serialization_writer_proxy_factory::*, self::serializer::*,
  self::serializer_config::*, self::serializer_config_option::*, self::start_object_hook::*, self::stream_text::*,
  self::writer_hooks::*,
};
