//! Two-way mapping between enum values and their wire strings.

mod decode;
mod dyn_enum_value;
mod encode;
mod enum_codec_error;
mod enum_member;
mod enum_type_descriptor;
mod enum_type_registry;
mod wire_enum;


pub use {
  self::decode::*, self::dyn_enum_value::*, self::encode::*, self::enum_codec_error::*, self::enum_member::*,
  self::enum_type_descriptor::*, self::enum_type_registry::*, self::wire_enum::*,
};
