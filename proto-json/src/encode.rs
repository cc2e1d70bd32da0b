//! Message → JSON encoding.
//!
//! Encoding is total: every declared field is written, in descriptor order,
//! whether or not it holds its default. Unset nested messages are written
//! as the nested type's default instance.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Number, Value as JsonValue};
use tracing::{debug, trace};

use crate::config::EncodeOptions;
use crate::descriptor::{FieldDescriptor, FieldKind, MessageDescriptor, ScalarType};
use crate::error::{CodecError, CodecResult};
use crate::traits::Message;
use crate::value::ValueRef;

/// Encode a message as JSON text.
///
/// `indent` of `0` produces compact output; any other value pretty-prints
/// with that many spaces per level.
///
/// # Errors
///
/// Fails with an invalid argument error when `message` is `None`, and with a
/// schema error when the message's fields disagree with its descriptor.
///
/// ```rust
/// use proto_json::to_json;
///
/// let err = to_json(None, 2).unwrap_err();
/// assert!(err.to_string().contains("cannot be null"));
/// ```
pub fn to_json(message: Option<&dyn Message>, indent: usize) -> CodecResult<String> {
    to_json_with(message, &EncodeOptions::new().with_indent(indent))
}

/// Encode a message as JSON text using explicit options.
pub fn to_json_with(message: Option<&dyn Message>, options: &EncodeOptions) -> CodecResult<String> {
    let message = message.ok_or_else(|| CodecError::invalid_argument("message cannot be null"))?;
    debug!(
        message_type = message.descriptor().full_name(),
        indent = options.indent,
        "encoding message to JSON"
    );

    let json = to_value(message)?;
    if options.is_pretty() {
        write_pretty(&json, options.indent)
    } else {
        serde_json::to_string(&json).map_err(|e| CodecError::Encoding(e.to_string()))
    }
}

/// Encode a message as an in-memory JSON value.
///
/// Object keys keep descriptor order.
pub fn to_value(message: &dyn Message) -> CodecResult<JsonValue> {
    let descriptor = message.descriptor();
    encode_message(descriptor, message, descriptor.name())
}

fn write_pretty(json: &JsonValue, indent: usize) -> CodecResult<String> {
    let indent = " ".repeat(indent);
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(indent.as_bytes()));
    json.serialize(&mut serializer)
        .map_err(|e| CodecError::Encoding(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| CodecError::Encoding(e.to_string()))
}

fn encode_message(
    descriptor: &'static MessageDescriptor,
    message: &dyn Message,
    path: &str,
) -> CodecResult<JsonValue> {
    let actual = message.descriptor();
    if actual != descriptor {
        return Err(CodecError::schema(format!(
            "field `{path}` declares message `{}` but holds `{}`",
            descriptor.full_name(),
            actual.full_name()
        )));
    }

    let mut object = Map::with_capacity(descriptor.fields().len());
    for (index, field) in descriptor.fields().iter().enumerate() {
        let field_path = format!("{path}.{}", field.name);
        let value = message.field(index).ok_or_else(|| {
            CodecError::schema(format!(
                "message type `{}` does not expose declared field `{}`",
                descriptor.full_name(),
                field.name
            ))
        })?;
        object.insert(field.name.to_string(), encode_field(field, value, &field_path)?);
    }
    Ok(JsonValue::Object(object))
}

fn encode_field(field: &FieldDescriptor, value: ValueRef<'_>, path: &str) -> CodecResult<JsonValue> {
    if !field.repeated {
        return encode_single(field, value, path);
    }

    match value {
        ValueRef::List(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| encode_single(field, item, &format!("{path}[{index}]")))
            .collect::<CodecResult<Vec<_>>>()
            .map(JsonValue::Array),
        other => Err(kind_mismatch(field, &other, path)),
    }
}

fn encode_single(field: &FieldDescriptor, value: ValueRef<'_>, path: &str) -> CodecResult<JsonValue> {
    match (field.kind, value) {
        (FieldKind::Scalar(scalar), value) => {
            encode_scalar(scalar, &value).ok_or_else(|| kind_mismatch(field, &value, path))
        }
        (FieldKind::Enum(_), ValueRef::Enum(number)) => Ok(JsonValue::from(number)),
        (FieldKind::Message(descriptor), ValueRef::Message(Some(nested))) => {
            encode_message(descriptor, nested, path)
        }
        (FieldKind::Message(descriptor), ValueRef::Message(None)) => {
            trace!(field = path, "nested message unset; encoding defaults");
            let defaults = descriptor.new_instance();
            encode_message(descriptor, defaults.as_ref(), path)
        }
        (_, other) => Err(kind_mismatch(field, &other, path)),
    }
}

fn encode_scalar(scalar: ScalarType, value: &ValueRef<'_>) -> Option<JsonValue> {
    let json = match (scalar, value) {
        (ScalarType::Double, ValueRef::F64(v)) => encode_float(*v),
        (ScalarType::Float, ValueRef::F32(v)) => encode_f32(*v),
        (ScalarType::Int32, ValueRef::I32(v)) => JsonValue::from(*v),
        (ScalarType::Int64, ValueRef::I64(v)) => JsonValue::from(*v),
        (ScalarType::UInt32, ValueRef::U32(v)) => JsonValue::from(*v),
        (ScalarType::UInt64, ValueRef::U64(v)) => JsonValue::from(*v),
        (ScalarType::Bool, ValueRef::Bool(v)) => JsonValue::Bool(*v),
        (ScalarType::String, ValueRef::String(v)) => JsonValue::String(v.to_string()),
        (ScalarType::Bytes, ValueRef::Bytes(v)) => JsonValue::String(STANDARD.encode(v)),
        _ => return None,
    };
    Some(json)
}

/// Non-finite floats have no JSON number form and are written as strings.
fn encode_float(value: f64) -> JsonValue {
    match Number::from_f64(value) {
        Some(number) => JsonValue::Number(number),
        None if value.is_nan() => JsonValue::String("NaN".to_string()),
        None if value > 0.0 => JsonValue::String("Infinity".to_string()),
        None => JsonValue::String("-Infinity".to_string()),
    }
}

// Widening through the shortest decimal keeps 0.1f32 as 0.1 instead of
// 0.10000000149011612.
fn encode_f32(value: f32) -> JsonValue {
    if !value.is_finite() {
        return encode_float(f64::from(value));
    }
    let widened = value.to_string().parse::<f64>().unwrap_or(f64::from(value));
    encode_float(widened)
}

fn kind_mismatch(field: &FieldDescriptor, value: &ValueRef<'_>, path: &str) -> CodecError {
    CodecError::schema(format!(
        "field `{path}` is declared {} but holds {}",
        field.type_name(),
        value.kind_name()
    ))
}
