use std::any::TypeId;
use std::fmt::{Debug, Formatter};

use dashmap::DashMap;
use once_cell::sync::Lazy;

use crate::enum_codec::decode::decode_enum_bits;
use crate::enum_codec::encode::encode_enum_bits;
use crate::enum_codec::{DynEnumValue, EnumCodecError, EnumTypeDescriptor, WireEnum};

static GLOBAL_ENUM_TYPES: Lazy<EnumTypeRegistry> = Lazy::new(EnumTypeRegistry::new);

#[derive(Clone, Copy)]
struct EnumCodecEntry {
  type_name: &'static str,
  is_flags: bool,
  decode: fn(&str) -> Option<u64>,
  encode: fn(u64) -> Result<String, EnumCodecError>,
}

/// Decode/encode function pairs keyed by enum type, for callers that only hold a
/// runtime [`EnumTypeDescriptor`].
#[derive(Default)]
pub struct EnumTypeRegistry {
  entries: DashMap<TypeId, EnumCodecEntry>,
}

impl EnumTypeRegistry {
  pub fn new() -> Self {
    Self {
      entries: DashMap::new(),
    }
  }

  /// The process-wide registry populated by model registration.
  pub fn global() -> &'static EnumTypeRegistry {
    &GLOBAL_ENUM_TYPES
  }

  /// Registers `E`. Returns `false` if it was already registered.
  pub fn register<E: WireEnum>(&self) -> bool {
    tracing::debug!(
      "EnumTypeRegistry::register: type_name = {}, flags = {}",
      E::TYPE_NAME,
      E::IS_FLAGS
    );
    let entry = EnumCodecEntry {
      type_name: E::TYPE_NAME,
      is_flags: E::IS_FLAGS,
      decode: decode_enum_bits::<E>,
      encode: encode_enum_bits::<E>,
    };
    self.entries.insert(TypeId::of::<E>(), entry).is_none()
  }

  pub fn is_registered(&self, descriptor: &EnumTypeDescriptor) -> bool {
    self.entries.contains_key(&descriptor.type_id())
  }

  pub fn is_flags(&self, descriptor: &EnumTypeDescriptor) -> Option<bool> {
    self.entries.get(&descriptor.type_id()).map(|entry| entry.is_flags)
  }

  /// Decodes `raw_value` as the type described by `descriptor`.
  ///
  /// Follows [`decode_enum_value`](crate::enum_codec::decode_enum_value). A missing
  /// descriptor, an unregistered type, empty input and unparseable input all yield
  /// `None`. Nullable descriptors decode as their underlying type.
  pub fn decode(&self, descriptor: Option<&EnumTypeDescriptor>, raw_value: &str) -> Option<DynEnumValue> {
    let descriptor = descriptor?.underlying();
    let entry = match self.entries.get(&descriptor.type_id()) {
      Some(entry) => *entry,
      None => {
        tracing::debug!("EnumTypeRegistry::decode: unregistered type {}", descriptor);
        return None;
      }
    };
    (entry.decode)(raw_value).map(|bits| DynEnumValue::from_parts(descriptor.type_id(), entry.type_name, bits))
  }

  pub fn encode(&self, value: &DynEnumValue) -> Result<String, EnumCodecError> {
    let entry = self
      .entries
      .get(&value.type_id())
      .map(|entry| *entry)
      .ok_or(EnumCodecError::UnregisteredType(value.type_name()))?;
    (entry.encode)(value.bits())
  }
}

impl Debug for EnumTypeRegistry {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let type_names = self.entries.iter().map(|entry| entry.type_name).collect::<Vec<_>>();
    f.debug_struct("EnumTypeRegistry").field("types", &type_names).finish()
  }
}

static_assertions::assert_impl_all!(EnumTypeRegistry: Send, Sync);
