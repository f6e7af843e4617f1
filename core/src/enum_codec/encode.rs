use crate::enum_codec::{EnumCodecError, WireEnum};

/// Returns the wire string of a declared member of `E`.
///
/// The member's wire-name override wins over its in-code name. Values that do not
/// hold exactly one declared member, such as out-of-range integers or flag
/// combinations, are rejected.
pub fn encode_enum_value<E: WireEnum>(value: E) -> Result<&'static str, EnumCodecError> {
  value
    .member()
    .map(|member| member.wire_name())
    .ok_or_else(|| invalid_value::<E>(value.bits()))
}

/// Returns the wire string of a flags value as a comma separated list.
///
/// A value equal to a declared member encodes as that member. The empty combination
/// without a declared zero member encodes as an empty list. Any other value is split
/// into declared members, largest first, and written in ascending bit order. Bits not
/// covered by a declared member are rejected.
pub fn encode_flags_value<E: WireEnum>(value: E) -> Result<String, EnumCodecError> {
  if !E::IS_FLAGS {
    return encode_enum_value(value).map(str::to_string);
  }
  if let Some(member) = value.member() {
    return Ok(member.wire_name().to_string());
  }
  let bits = value.bits();
  if bits == 0 {
    return Ok(String::new());
  }

  let mut members = E::members()
    .iter()
    .filter(|member| member.value.bits() != 0)
    .collect::<Vec<_>>();
  members.sort_by(|left, right| right.value.bits().cmp(&left.value.bits()));

  let mut remaining = bits;
  let mut selected = Vec::new();
  for member in members {
    let member_bits = member.value.bits();
    if bits & member_bits == member_bits && remaining & member_bits != 0 {
      remaining &= !member_bits;
      selected.push(member);
    }
  }
  if remaining != 0 {
    return Err(invalid_value::<E>(bits));
  }

  selected.sort_by_key(|member| member.value.bits());
  Ok(
    selected
      .iter()
      .map(|member| member.wire_name())
      .collect::<Vec<_>>()
      .join(","),
  )
}

pub(crate) fn encode_enum_bits<E: WireEnum>(bits: u64) -> Result<String, EnumCodecError> {
  let value = E::from_bits(bits).ok_or_else(|| invalid_value::<E>(bits))?;
  encode_flags_value(value)
}

fn invalid_value<E: WireEnum>(value: u64) -> EnumCodecError {
  EnumCodecError::InvalidValue {
    value,
    type_name: E::TYPE_NAME,
  }
}
