//! JSON → message decoding.
//!
//! Decoding allocates a default-valued instance and assigns only the fields
//! present in the input, so absent keys keep their defaults. The instance is
//! handed back only when every present field decoded; a failure anywhere
//! discards it.
//!
//! Value shapes accepted per field kind:
//!
//! | Kind | JSON |
//! |------|------|
//! | integers | number, or decimal string |
//! | `float` / `double` | number, `"NaN"`, `"Infinity"`, `"-Infinity"` |
//! | `bool` | `true` / `false` |
//! | `string` | string |
//! | `bytes` | base64 string (standard or URL-safe alphabet) |
//! | enum | number, or value name with or without the enum prefix |
//! | message | object |
//! | repeated | array of the above |

use std::borrow::Cow;

use base64::{
    engine::general_purpose::{STANDARD, URL_SAFE},
    Engine as _,
};
use serde_json::Value as JsonValue;
use tracing::{debug, trace};

use crate::config::DecodeOptions;
use crate::descriptor::{EnumDescriptor, FieldDescriptor, FieldKind, MessageDescriptor, ScalarType};
use crate::error::{CodecError, CodecResult};
use crate::registry::MessageClass;
use crate::traits::{Message, MessageType};
use crate::value::Value;

/// JSON accepted by the decoder: text to be parsed, or an already parsed
/// value.
#[derive(Debug, Clone)]
pub enum JsonInput<'a> {
    /// JSON text.
    Text(&'a str),
    /// A parsed JSON value, borrowed or owned.
    Value(Cow<'a, JsonValue>),
}

impl<'a> JsonInput<'a> {
    /// Parse text input; parsed input is returned as-is.
    ///
    /// # Errors
    ///
    /// Returns a parse error when text input is not valid JSON.
    pub fn parse(self) -> CodecResult<Cow<'a, JsonValue>> {
        match self {
            Self::Text(text) => serde_json::from_str(text)
                .map(Cow::Owned)
                .map_err(CodecError::parse),
            Self::Value(value) => Ok(value),
        }
    }
}

impl<'a> From<&'a str> for JsonInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for JsonInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}

impl<'a> From<&'a JsonValue> for JsonInput<'a> {
    fn from(value: &'a JsonValue) -> Self {
        Self::Value(Cow::Borrowed(value))
    }
}

impl From<JsonValue> for JsonInput<'static> {
    fn from(value: JsonValue) -> Self {
        Self::Value(Cow::Owned(value))
    }
}

// =============================================================================
// Entry points
// =============================================================================

/// Decode a message of type `M` from JSON text or a parsed value.
///
/// # Errors
///
/// Returns a parse error for malformed text and an invalid value error when
/// the JSON does not fit `M`'s descriptor.
///
/// ```rust
/// use proto_json::{from_json, CodecErrorCode};
/// # use proto_json::{construct, CodecError, CodecResult, FieldDescriptor, Message, MessageDescriptor, MessageType, ScalarType, Value, ValueRef};
/// # #[derive(Debug, Default)]
/// # struct Vector3 { x: f32 }
/// # static FIELDS: [FieldDescriptor; 1] = [FieldDescriptor::scalar("x", 1, ScalarType::Float)];
/// # static VECTOR3: MessageDescriptor = MessageDescriptor::new("pokeworld.math.Vector3", &FIELDS, construct::<Vector3>);
/// # impl Message for Vector3 {
/// #     fn descriptor(&self) -> &'static MessageDescriptor { &VECTOR3 }
/// #     fn field(&self, index: usize) -> Option<ValueRef<'_>> { (index == 0).then(|| ValueRef::F32(self.x)) }
/// #     fn set_field(&mut self, index: usize, value: Value) -> CodecResult<()> {
/// #         match index { 0 => self.x = value.into_f32()?, _ => return Err(CodecError::unknown_field(&VECTOR3, index)) }
/// #         Ok(())
/// #     }
/// # }
/// # impl MessageType for Vector3 { fn message_descriptor() -> &'static MessageDescriptor { &VECTOR3 } }
///
/// let err = from_json::<Vector3>("invalid json").unwrap_err();
/// assert_eq!(err.code(), CodecErrorCode::ParseError);
/// assert!(err.to_string().starts_with("Failed to parse JSON"));
/// ```
pub fn from_json<'a, M: MessageType>(input: impl Into<JsonInput<'a>>) -> CodecResult<M> {
    from_json_with(input, &DecodeOptions::default())
}

/// Decode a message of type `M` using explicit options.
pub fn from_json_with<'a, M: MessageType>(
    input: impl Into<JsonInput<'a>>,
    options: &DecodeOptions,
) -> CodecResult<M> {
    let json = input.into().parse()?;
    let descriptor = M::message_descriptor();
    debug!(
        message_type = descriptor.full_name(),
        "decoding message from JSON"
    );

    let mut message = M::default();
    merge_object(descriptor, &mut message, &json, options, descriptor.name())?;
    Ok(message)
}

/// Decode a message of type `M` from a parsed JSON value.
pub fn from_value<M: MessageType>(value: &JsonValue) -> CodecResult<M> {
    from_json(value)
}

/// Decode through a runtime class reference.
///
/// This is the dynamic counterpart of [`from_json`], for callers that only
/// hold a [`MessageClass`].
///
/// # Errors
///
/// - invalid argument when `class` is `None` or has no constructor
/// - parse error when text input is not valid JSON
/// - schema error when the class has no descriptor
/// - invalid value when the JSON does not fit the descriptor
pub fn from_json_class<'a>(
    class: Option<&MessageClass>,
    input: impl Into<JsonInput<'a>>,
) -> CodecResult<Box<dyn Message>> {
    from_json_class_with(class, input, &DecodeOptions::default())
}

/// [`from_json_class`] with explicit options.
pub fn from_json_class_with<'a>(
    class: Option<&MessageClass>,
    input: impl Into<JsonInput<'a>>,
    options: &DecodeOptions,
) -> CodecResult<Box<dyn Message>> {
    let class = class.ok_or_else(|| {
        CodecError::invalid_argument("message class must be a function producing a message instance")
    })?;
    let constructor = class.constructor().ok_or_else(|| {
        CodecError::invalid_argument(format!(
            "message class `{}` must be a function producing a message instance",
            class.name()
        ))
    })?;

    let json = input.into().parse()?;

    let descriptor = class.descriptor().ok_or_else(|| {
        CodecError::schema(format!(
            "message class `{}` is missing __descriptor",
            class.name()
        ))
    })?;
    debug!(
        message_type = descriptor.full_name(),
        "decoding message from JSON through class reference"
    );

    let mut message = constructor();
    merge_object(descriptor, message.as_mut(), &json, options, descriptor.name())?;
    Ok(message)
}

// =============================================================================
// Messages
// =============================================================================

fn decode_message(
    descriptor: &'static MessageDescriptor,
    json: &JsonValue,
    options: &DecodeOptions,
    path: &str,
) -> CodecResult<Box<dyn Message>> {
    let mut message = descriptor.new_instance();
    merge_object(descriptor, message.as_mut(), json, options, path)?;
    Ok(message)
}

fn merge_object(
    descriptor: &'static MessageDescriptor,
    message: &mut dyn Message,
    json: &JsonValue,
    options: &DecodeOptions,
    path: &str,
) -> CodecResult<()> {
    let object = json.as_object().ok_or_else(|| {
        CodecError::invalid_value(
            path,
            format!("object for message {}", descriptor.full_name()),
            describe(json),
        )
    })?;

    let actual = message.descriptor();
    if actual != descriptor {
        return Err(CodecError::schema(format!(
            "constructor for `{}` produced an instance of `{}`",
            descriptor.full_name(),
            actual.full_name()
        )));
    }

    for key in object.keys() {
        if descriptor.field_by_name(key).is_some() {
            continue;
        }
        if !options.ignore_unknown_fields {
            return Err(CodecError::invalid_value(
                format!("{path}.{key}"),
                format!("a field of {}", descriptor.full_name()),
                "unknown field",
            ));
        }
        trace!(path, key = key.as_str(), "ignoring unknown field");
    }

    for (index, field) in descriptor.fields().iter().enumerate() {
        let field_path = format!("{path}.{}", field.name);
        let value = match object.get(field.name) {
            None => {
                trace!(field = field_path.as_str(), "field absent; keeping default");
                continue;
            }
            Some(JsonValue::Null) if options.null_as_default => {
                trace!(field = field_path.as_str(), "field is null; keeping default");
                continue;
            }
            Some(value) => value,
        };

        let decoded = decode_field(field, value, options, &field_path)?;
        message.set_field(index, decoded)?;
    }
    Ok(())
}

fn decode_field(
    field: &FieldDescriptor,
    json: &JsonValue,
    options: &DecodeOptions,
    path: &str,
) -> CodecResult<Value> {
    if !field.repeated {
        return decode_single(field, json, options, path);
    }

    let items = json
        .as_array()
        .ok_or_else(|| CodecError::invalid_value(path, field.type_name(), describe(json)))?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| decode_single(field, item, options, &format!("{path}[{index}]")))
        .collect::<CodecResult<Vec<_>>>()
        .map(Value::List)
}

fn decode_single(
    field: &FieldDescriptor,
    json: &JsonValue,
    options: &DecodeOptions,
    path: &str,
) -> CodecResult<Value> {
    match field.kind {
        FieldKind::Scalar(scalar) => decode_scalar(scalar, json, path),
        FieldKind::Enum(enumeration) => decode_enum(enumeration, json, path),
        FieldKind::Message(descriptor) => {
            decode_message(descriptor, json, options, path).map(Value::Message)
        }
    }
}

// =============================================================================
// Scalars
// =============================================================================

fn decode_scalar(scalar: ScalarType, json: &JsonValue, path: &str) -> CodecResult<Value> {
    let invalid = || CodecError::invalid_value(path, scalar.as_str(), describe(json));

    match scalar {
        ScalarType::Bool => json.as_bool().map(Value::Bool).ok_or_else(invalid),
        ScalarType::String => json
            .as_str()
            .map(|text| Value::String(text.to_string()))
            .ok_or_else(invalid),
        ScalarType::Bytes => json
            .as_str()
            .and_then(decode_base64)
            .map(Value::Bytes)
            .ok_or_else(invalid),
        ScalarType::Int32 => decode_integer(json, i32::try_from)
            .map(Value::I32)
            .ok_or_else(invalid),
        ScalarType::Int64 => decode_integer(json, i64::try_from)
            .map(Value::I64)
            .ok_or_else(invalid),
        ScalarType::UInt32 => decode_integer(json, u32::try_from)
            .map(Value::U32)
            .ok_or_else(invalid),
        ScalarType::UInt64 => decode_integer(json, u64::try_from)
            .map(Value::U64)
            .ok_or_else(invalid),
        ScalarType::Double => decode_float(json).map(Value::F64).ok_or_else(invalid),
        ScalarType::Float => decode_float(json)
            .and_then(narrow_to_f32)
            .map(Value::F32)
            .ok_or_else(invalid),
    }
}

/// Reads an integral JSON number or decimal string and narrows it with
/// `narrow`. Fractional and out-of-range values yield `None`.
fn decode_integer<T, E>(json: &JsonValue, narrow: impl Fn(i128) -> Result<T, E>) -> Option<T> {
    let wide = match json {
        JsonValue::Number(number) => {
            if let Some(value) = number.as_i64() {
                i128::from(value)
            } else if let Some(value) = number.as_u64() {
                i128::from(value)
            } else {
                integral_f64(number.as_f64()?)?
            }
        }
        JsonValue::String(text) => text.trim().parse::<i128>().ok()?,
        _ => return None,
    };
    narrow(wide).ok()
}

// 2^64; anything at or beyond it cannot fit the widest integer field.
const INTEGRAL_LIMIT: f64 = 18_446_744_073_709_551_616.0;

fn integral_f64(value: f64) -> Option<i128> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < INTEGRAL_LIMIT {
        Some(value as i128)
    } else {
        None
    }
}

fn decode_float(json: &JsonValue) -> Option<f64> {
    match json {
        JsonValue::Number(number) => number.as_f64(),
        JsonValue::String(text) => match text.as_str() {
            "NaN" => Some(f64::NAN),
            "Infinity" => Some(f64::INFINITY),
            "-Infinity" => Some(f64::NEG_INFINITY),
            _ => None,
        },
        _ => None,
    }
}

fn narrow_to_f32(value: f64) -> Option<f32> {
    let narrowed = value as f32;
    if value.is_finite() && !narrowed.is_finite() {
        return None;
    }
    Some(narrowed)
}

fn decode_base64(text: &str) -> Option<Vec<u8>> {
    STANDARD
        .decode(text)
        .or_else(|_| URL_SAFE.decode(text))
        .ok()
}

fn decode_enum(enumeration: &EnumDescriptor, json: &JsonValue, path: &str) -> CodecResult<Value> {
    let number = match json {
        JsonValue::Number(_) => decode_integer(json, i32::try_from),
        JsonValue::String(name) => enumeration.value_by_name(name).map(|value| value.number),
        _ => None,
    };
    let number = number.ok_or_else(|| {
        CodecError::invalid_value(
            path,
            format!("enum {}", enumeration.full_name()),
            describe(json),
        )
    })?;

    if enumeration.value_by_number(number).is_none() {
        trace!(field = path, number, "keeping undeclared enum number");
    }
    Ok(Value::Enum(number))
}

/// Short description of a JSON value for error messages.
fn describe(json: &JsonValue) -> String {
    match json {
        JsonValue::Null => "null".to_string(),
        JsonValue::Bool(value) => format!("bool {value}"),
        JsonValue::Number(number) => format!("number {number}"),
        JsonValue::String(text) => format!("string {text:?}"),
        JsonValue::Array(items) => format!("array of {} items", items.len()),
        JsonValue::Object(_) => "object".to_string(),
    }
}
