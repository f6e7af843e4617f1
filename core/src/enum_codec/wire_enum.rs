use crate::enum_codec::EnumMember;

/// A closed set of named integral values that can cross the wire.
///
/// Plain enums implement this directly. Flags types are usually newtypes over an
/// integer so that combined values stay representable; they set `IS_FLAGS` and
/// override [`WireEnum::from_bits`] to accept any combination.
///
/// ```
/// use wirekit_core_rs::{EnumMember, WireEnum};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Scope(u32);
///
/// impl Scope {
///   const READ: Scope = Scope(1);
///   const WRITE: Scope = Scope(2);
/// }
///
/// impl WireEnum for Scope {
///   const TYPE_NAME: &'static str = "Scope";
///   const IS_FLAGS: bool = true;
///
///   fn members() -> &'static [EnumMember<Self>] {
///     const MEMBERS: &[EnumMember<Scope>] = &[
///       EnumMember::new("Read", Scope::READ),
///       EnumMember::with_wire_name("Write", "write-all", Scope::WRITE),
///     ];
///     MEMBERS
///   }
///
///   fn bits(self) -> u64 {
///     u64::from(self.0)
///   }
///
///   fn from_bits(bits: u64) -> Option<Self> {
///     u32::try_from(bits).ok().map(Scope)
///   }
/// }
///
/// let scope = wirekit_core_rs::decode_enum_value::<Scope>(Some("write-all,READ")).unwrap();
/// assert_eq!(scope, Scope(3));
/// ```
pub trait WireEnum: Copy + Eq + Send + Sync + 'static {
  /// Name used in error messages and logs.
  const TYPE_NAME: &'static str;

  /// Whether values combine through bitwise OR.
  const IS_FLAGS: bool = false;

  /// Declared members, in declaration order.
  fn members() -> &'static [EnumMember<Self>];

  fn bits(self) -> u64;

  /// Rebuilds a value from its bit pattern.
  ///
  /// The default only accepts the bits of a declared member.
  fn from_bits(bits: u64) -> Option<Self> {
    Self::members()
      .iter()
      .find(|member| member.value.bits() == bits)
      .map(|member| member.value)
  }

  /// Looks up the declared member holding exactly `self`.
  fn member(self) -> Option<&'static EnumMember<Self>> {
    Self::members().iter().find(|member| member.value == self)
  }
}
