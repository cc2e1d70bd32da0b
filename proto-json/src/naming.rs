//! Naming conventions shared by schema-generated code and the codec.
//!
//! Schema files use `snake_case` field names and `SCREAMING_SNAKE_CASE` enum
//! values prefixed with the enum name. Generated code exposes fields in
//! `camelCase` (which is also the JSON property name), types in `PascalCase`,
//! and enum values without their prefix.
//!
//! | Schema | Generated |
//! |--------|-----------|
//! | `walk_speed` | `walkSpeed` |
//! | `tb_player` | `TbPlayer` |
//! | `RESOURCE_ID_PLAYER` in `ResourceId` | `PLAYER` |

use convert_case::{split, Boundary};

/// Convert a `snake_case` name to `camelCase`.
///
/// Only underscores separate words. The first word is kept as written and
/// each later word gets an upper-case first letter, so `HTTP_port` becomes
/// `HTTPPort`.
///
/// ```rust
/// use proto_json::naming::snake_to_camel_case;
///
/// assert_eq!(snake_to_camel_case("walk_speed"), "walkSpeed");
/// assert_eq!(snake_to_camel_case("id"), "id");
/// ```
pub fn snake_to_camel_case(snake_case: &str) -> String {
    let mut result = String::with_capacity(snake_case.len());
    let parts = split(&snake_case, &[Boundary::Underscore]);
    for (index, part) in parts.into_iter().enumerate() {
        if part.is_empty() {
            continue;
        }
        if index == 0 {
            result.push_str(part);
        } else {
            push_capitalized(&mut result, part);
        }
    }
    result
}

/// Convert a `snake_case` name to `PascalCase`.
///
/// Every underscore-separated word gets an upper-case first letter. The rest
/// of each word keeps its case.
///
/// ```rust
/// use proto_json::naming::snake_to_pascal_case;
///
/// assert_eq!(snake_to_pascal_case("tb_player"), "TbPlayer");
/// ```
pub fn snake_to_pascal_case(snake_case: &str) -> String {
    let mut result = String::with_capacity(snake_case.len());
    for part in split(&snake_case, &[Boundary::Underscore]) {
        push_capitalized(&mut result, part);
    }
    result
}

/// Strip the enum-name prefix from an enum value name.
///
/// The prefix matches either the enum name itself (`RESOURCEID_` for
/// `ResourceId`) or its upper underscore form (`RESOURCE_ID_`), compared
/// without regard to ASCII case. The upper underscore form puts an underscore
/// before every upper-case letter, so `HTTPCode` becomes `H_T_T_P_CODE`.
/// Names without a matching prefix are returned unchanged, as is everything
/// when either input is empty.
///
/// ```rust
/// use proto_json::naming::strip_enum_value_prefix;
///
/// assert_eq!(strip_enum_value_prefix("RESOURCEID", "RESOURCEID_UI_LOGIN_PANEL"), "UI_LOGIN_PANEL");
/// assert_eq!(strip_enum_value_prefix("ResourceId", "RESOURCE_ID_PLAYER"), "PLAYER");
/// assert_eq!(strip_enum_value_prefix("ResourceId", "PLAYER"), "PLAYER");
/// ```
pub fn strip_enum_value_prefix<'a>(enum_name: &str, value_name: &'a str) -> &'a str {
    if enum_name.is_empty() || value_name.is_empty() {
        return value_name;
    }

    let prefix = format!("{enum_name}_");
    if let Some(rest) = strip_prefix_ignore_case(value_name, &prefix) {
        return rest;
    }

    let upper_prefix = format!("{}_", to_upper_underscore(enum_name));
    if let Some(rest) = strip_prefix_ignore_case(value_name, &upper_prefix) {
        return rest;
    }

    value_name
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

fn to_upper_underscore(name: &str) -> String {
    let mut result = String::with_capacity(name.len() * 2);
    for c in name.chars() {
        if c.is_uppercase() && !result.is_empty() {
            result.push('_');
        }
        result.extend(c.to_uppercase());
    }
    result
}

fn strip_prefix_ignore_case<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    let head = value.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        value.get(prefix.len()..)
    } else {
        None
    }
}
