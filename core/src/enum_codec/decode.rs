use crate::enum_codec::{EnumMember, WireEnum};

/// Decodes a wire string into a value of `E`.
///
/// Absent or empty input yields `None`. Wire-name overrides are matched exactly and
/// mapped back to the member name before the case-insensitive name match. For flags
/// types every comma separated segment is decoded on its own and the recognized ones
/// are OR-ed together; unrecognized segments are skipped, so input where nothing is
/// recognized decodes to the empty combination.
pub fn decode_enum_value<E: WireEnum>(raw_value: Option<&str>) -> Option<E> {
  let raw_value = match raw_value {
    Some(raw_value) if !raw_value.is_empty() => raw_value,
    _ => return None,
  };
  let raw_value = to_member_name(E::members(), raw_value);
  if E::IS_FLAGS {
    let mut bits = 0u64;
    for segment in raw_value.split(',').filter(|segment| !segment.is_empty()) {
      match find_by_name(E::members(), to_member_name(E::members(), segment)) {
        Some(member) => bits |= member.value.bits(),
        None => tracing::trace!("decode_enum_value: skipping unknown flag {} for {}", segment, E::TYPE_NAME),
      }
    }
    E::from_bits(bits)
  } else {
    let decoded = find_by_name(E::members(), raw_value).map(|member| member.value);
    if decoded.is_none() {
      tracing::trace!("decode_enum_value: unknown value {} for {}", raw_value, E::TYPE_NAME);
    }
    decoded
  }
}

/// Same as [`decode_enum_value`], reporting the decoded bit pattern.
pub(crate) fn decode_enum_bits<E: WireEnum>(raw_value: &str) -> Option<u64> {
  decode_enum_value::<E>(Some(raw_value)).map(WireEnum::bits)
}

fn to_member_name<'a, E>(members: &'static [EnumMember<E>], raw_value: &'a str) -> &'a str {
  members
    .iter()
    .find(|member| member.wire_name == Some(raw_value))
    .map_or(raw_value, |member| member.name)
}

fn find_by_name<E>(members: &'static [EnumMember<E>], name: &str) -> Option<&'static EnumMember<E>> {
  members.iter().find(|member| eq_ignore_case(member.name, name))
}

fn eq_ignore_case(left: &str, right: &str) -> bool {
  if left.is_ascii() && right.is_ascii() {
    left.eq_ignore_ascii_case(right)
  } else {
    left.to_lowercase() == right.to_lowercase()
  }
}
