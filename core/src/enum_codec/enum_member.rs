/// One declared member of a [`WireEnum`](super::WireEnum) type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumMember<E> {
  /// In-code member name. Matched case-insensitively when decoding.
  pub name: &'static str,
  /// Custom wire name replacing `name` on the wire. Matched exactly when decoding.
  pub wire_name: Option<&'static str>,
  pub value: E,
}

impl<E> EnumMember<E> {
  pub const fn new(name: &'static str, value: E) -> Self {
    Self {
      name,
      wire_name: None,
      value,
    }
  }

  pub const fn with_wire_name(name: &'static str, wire_name: &'static str, value: E) -> Self {
    Self {
      name,
      wire_name: Some(wire_name),
      value,
    }
  }

  /// The string written on the wire for this member.
  pub fn wire_name(&self) -> &'static str {
    self.wire_name.unwrap_or(self.name)
  }
}
