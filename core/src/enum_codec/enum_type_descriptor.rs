use std::any::TypeId;
use std::fmt::{Display, Formatter};

use crate::enum_codec::WireEnum;

/// Runtime description of an enum type, possibly wrapped as nullable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumTypeDescriptor {
  type_id: TypeId,
  type_name: &'static str,
  nullable: bool,
}

impl EnumTypeDescriptor {
  /// Describes `E` itself.
  pub fn of<E: WireEnum>() -> Self {
    Self {
      type_id: TypeId::of::<E>(),
      type_name: E::TYPE_NAME,
      nullable: false,
    }
  }

  /// Describes `Option<E>`.
  pub fn nullable<E: WireEnum>() -> Self {
    Self {
      nullable: true,
      ..Self::of::<E>()
    }
  }

  /// Drops the nullable wrapper, leaving the enum type itself.
  pub fn underlying(self) -> Self {
    Self {
      nullable: false,
      ..self
    }
  }

  pub fn type_id(&self) -> TypeId {
    self.type_id
  }

  pub fn type_name(&self) -> &'static str {
    self.type_name
  }

  pub fn is_nullable(&self) -> bool {
    self.nullable
  }
}

impl Display for EnumTypeDescriptor {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    if self.nullable {
      write!(f, "Option<{}>", self.type_name)
    } else {
      write!(f, "{}", self.type_name)
    }
  }
}
