use std::any::TypeId;

use crate::enum_codec::WireEnum;

/// Type-erased enum value produced by the non-generic decode path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DynEnumValue {
  type_id: TypeId,
  type_name: &'static str,
  bits: u64,
}

impl DynEnumValue {
  pub fn new<E: WireEnum>(value: E) -> Self {
    Self {
      type_id: TypeId::of::<E>(),
      type_name: E::TYPE_NAME,
      bits: value.bits(),
    }
  }

  pub(crate) fn from_parts(type_id: TypeId, type_name: &'static str, bits: u64) -> Self {
    Self {
      type_id,
      type_name,
      bits,
    }
  }

  pub fn type_id(&self) -> TypeId {
    self.type_id
  }

  pub fn type_name(&self) -> &'static str {
    self.type_name
  }

  pub fn bits(&self) -> u64 {
    self.bits
  }

  /// Recovers the typed value, or `None` when `E` is not the decoded type.
  pub fn downcast<E: WireEnum>(&self) -> Option<E> {
    if self.type_id != TypeId::of::<E>() {
      return None;
    }
    E::from_bits(self.bits)
  }
}
