//! Static descriptors for message and enum types.
//!
//! A descriptor is the shape of a message type expressed as data: an ordered
//! list of fields, each with a JSON name, a kind and a repeated flag. The
//! codec walks descriptors instead of calling per-type serializers, which is
//! what lets one engine handle every generated type.
//!
//! Descriptors are built once, usually as `static` items emitted next to the
//! generated type, and never change afterwards. Message fields reference the
//! nested type's descriptor directly, so descriptor graphs can be walked
//! without any registry.
//!
//! ```rust
//! use proto_json::{construct, EnumDescriptor, EnumValue, FieldDescriptor, MessageDescriptor, ScalarType};
//! # use proto_json::{CodecError, CodecResult, Message, MessageType, Value, ValueRef};
//! # #[derive(Debug, Default)]
//! # struct Vector2Int { x: i32, y: i32 }
//! # impl Message for Vector2Int {
//! #     fn descriptor(&self) -> &'static MessageDescriptor { &VECTOR2_INT }
//! #     fn field(&self, index: usize) -> Option<ValueRef<'_>> {
//! #         match index { 0 => Some(ValueRef::I32(self.x)), 1 => Some(ValueRef::I32(self.y)), _ => None }
//! #     }
//! #     fn set_field(&mut self, index: usize, value: Value) -> CodecResult<()> {
//! #         match index {
//! #             0 => self.x = value.into_i32()?,
//! #             1 => self.y = value.into_i32()?,
//! #             _ => return Err(CodecError::unknown_field(&VECTOR2_INT, index)),
//! #         }
//! #         Ok(())
//! #     }
//! # }
//! # impl MessageType for Vector2Int {
//! #     fn message_descriptor() -> &'static MessageDescriptor { &VECTOR2_INT }
//! # }
//!
//! static VECTOR2_INT_FIELDS: [FieldDescriptor; 2] = [
//!     FieldDescriptor::scalar("x", 1, ScalarType::Int32),
//!     FieldDescriptor::scalar("y", 2, ScalarType::Int32),
//! ];
//!
//! static VECTOR2_INT: MessageDescriptor = MessageDescriptor::new(
//!     "pokeworld.math.Vector2Int",
//!     &VECTOR2_INT_FIELDS,
//!     construct::<Vector2Int>,
//! );
//!
//! assert_eq!(VECTOR2_INT.name(), "Vector2Int");
//! assert!(VECTOR2_INT.validate().is_ok());
//! ```

use std::collections::HashSet;
use std::fmt;

use crate::error::{CodecError, CodecResult};
use crate::naming::strip_enum_value_prefix;
use crate::traits::Message;
use crate::value::Value;

/// Function that allocates a default-valued message instance.
pub type Constructor = fn() -> Box<dyn Message>;

// =============================================================================
// Scalar types
// =============================================================================

/// Primitive field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// 64-bit float (`f64`)
    Double,
    /// 32-bit float (`f32`)
    Float,
    /// `i32`
    Int32,
    /// `i64`
    Int64,
    /// `u32`
    UInt32,
    /// `u64`
    UInt64,
    /// `bool`
    Bool,
    /// UTF-8 `String`
    String,
    /// `Vec<u8>`, base64 in JSON
    Bytes,
}

impl ScalarType {
    /// Returns the schema-language name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Double => "double",
            Self::Float => "float",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::UInt32 => "uint32",
            Self::UInt64 => "uint64",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Bytes => "bytes",
        }
    }

    /// Returns the zero value of the type.
    pub fn default_value(&self) -> Value {
        match self {
            Self::Double => Value::F64(0.0),
            Self::Float => Value::F32(0.0),
            Self::Int32 => Value::I32(0),
            Self::Int64 => Value::I64(0),
            Self::UInt32 => Value::U32(0),
            Self::UInt64 => Value::U64(0),
            Self::Bool => Value::Bool(false),
            Self::String => Value::String(String::new()),
            Self::Bytes => Value::Bytes(Vec::new()),
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Field descriptors
// =============================================================================

/// What a field holds.
#[derive(Clone, Copy)]
pub enum FieldKind {
    /// A primitive value.
    Scalar(ScalarType),
    /// A nested message described by the referenced descriptor.
    Message(&'static MessageDescriptor),
    /// An enum value, stored as its number.
    Enum(&'static EnumDescriptor),
}

impl FieldKind {
    /// Human-readable type name used in error messages.
    pub fn type_name(&self) -> String {
        match self {
            Self::Scalar(scalar) => scalar.as_str().to_string(),
            Self::Message(message) => format!("message {}", message.full_name()),
            Self::Enum(enumeration) => format!("enum {}", enumeration.full_name()),
        }
    }
}

// Descriptor graphs may be cyclic, so nested types are printed by name only.
impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(scalar) => f.debug_tuple("Scalar").field(scalar).finish(),
            Self::Message(message) => f.debug_tuple("Message").field(&message.full_name()).finish(),
            Self::Enum(enumeration) => f
                .debug_tuple("Enum")
                .field(&enumeration.full_name())
                .finish(),
        }
    }
}

/// One declared field of a message type.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// JSON property name.
    pub name: &'static str,
    /// Field number from the schema. Informational only.
    pub number: u32,
    /// Field kind.
    pub kind: FieldKind,
    /// Whether the field holds an ordered sequence of `kind` values.
    pub repeated: bool,
}

impl FieldDescriptor {
    /// Create a scalar field.
    pub const fn scalar(name: &'static str, number: u32, scalar: ScalarType) -> Self {
        Self {
            name,
            number,
            kind: FieldKind::Scalar(scalar),
            repeated: false,
        }
    }

    /// Create a nested message field.
    pub const fn message(
        name: &'static str,
        number: u32,
        message: &'static MessageDescriptor,
    ) -> Self {
        Self {
            name,
            number,
            kind: FieldKind::Message(message),
            repeated: false,
        }
    }

    /// Create an enum field.
    pub const fn enumeration(
        name: &'static str,
        number: u32,
        enumeration: &'static EnumDescriptor,
    ) -> Self {
        Self {
            name,
            number,
            kind: FieldKind::Enum(enumeration),
            repeated: false,
        }
    }

    /// Mark the field as repeated.
    pub const fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }

    /// The nested message descriptor, if this is a message field.
    pub fn message_type(&self) -> Option<&'static MessageDescriptor> {
        match self.kind {
            FieldKind::Message(message) => Some(message),
            _ => None,
        }
    }

    /// The enum descriptor, if this is an enum field.
    pub fn enum_type(&self) -> Option<&'static EnumDescriptor> {
        match self.kind {
            FieldKind::Enum(enumeration) => Some(enumeration),
            _ => None,
        }
    }

    /// Human-readable type name, including the `repeated` label.
    pub fn type_name(&self) -> String {
        if self.repeated {
            format!("repeated {}", self.kind.type_name())
        } else {
            self.kind.type_name()
        }
    }

    /// The value a field holds when it was never set.
    ///
    /// Repeated fields default to an empty list, messages to a fresh
    /// instance of the nested type, enums to their first declared value.
    pub fn default_value(&self) -> Value {
        if self.repeated {
            return Value::List(Vec::new());
        }
        match self.kind {
            FieldKind::Scalar(scalar) => scalar.default_value(),
            FieldKind::Message(message) => Value::Message(message.new_instance()),
            FieldKind::Enum(enumeration) => Value::Enum(enumeration.default_number()),
        }
    }
}

// =============================================================================
// Message descriptors
// =============================================================================

/// The shape of one message type.
pub struct MessageDescriptor {
    full_name: &'static str,
    fields: &'static [FieldDescriptor],
    constructor: Constructor,
}

impl MessageDescriptor {
    /// Create a descriptor. Usable in `static` items.
    pub const fn new(
        full_name: &'static str,
        fields: &'static [FieldDescriptor],
        constructor: Constructor,
    ) -> Self {
        Self {
            full_name,
            fields,
            constructor,
        }
    }

    /// Fully-qualified type name, e.g. `pokeworld.actor.Player`.
    pub fn full_name(&self) -> &'static str {
        self.full_name
    }

    /// Type name without its package.
    pub fn name(&self) -> &'static str {
        self.full_name
            .rsplit_once('.')
            .map_or(self.full_name, |(_, name)| name)
    }

    /// Declared fields, in descriptor order.
    pub fn fields(&self) -> &'static [FieldDescriptor] {
        self.fields
    }

    /// Field at `index`.
    pub fn field(&self, index: usize) -> Option<&'static FieldDescriptor> {
        self.fields.get(index)
    }

    /// Field with the given JSON name, with its index.
    pub fn field_by_name(&self, name: &str) -> Option<(usize, &'static FieldDescriptor)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, field)| field.name == name)
    }

    /// The constructor of the described type.
    pub fn constructor(&self) -> Constructor {
        self.constructor
    }

    /// Allocate a default-valued instance of the described type.
    pub fn new_instance(&self) -> Box<dyn Message> {
        (self.constructor)()
    }

    /// Check the descriptor invariants: field names are non-empty and unique.
    pub fn validate(&self) -> CodecResult<()> {
        let mut seen = HashSet::with_capacity(self.fields.len());
        for field in self.fields {
            if field.name.is_empty() {
                return Err(CodecError::schema(format!(
                    "message type `{}` declares a field with an empty name (number {})",
                    self.full_name, field.number
                )));
            }
            if !seen.insert(field.name) {
                return Err(CodecError::schema(format!(
                    "message type `{}` declares field `{}` more than once",
                    self.full_name, field.name
                )));
            }
        }
        Ok(())
    }
}

impl PartialEq for MessageDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.full_name == other.full_name
    }
}

impl Eq for MessageDescriptor {}

impl fmt::Debug for MessageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageDescriptor")
            .field("full_name", &self.full_name)
            .field("fields", &self.fields)
            .finish()
    }
}

// =============================================================================
// Enum descriptors
// =============================================================================

/// One declared enum value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumValue {
    /// Value name as declared in the schema, e.g. `RESOURCE_ID_PLAYER`.
    pub name: &'static str,
    /// Numeric value, which is what goes on the wire.
    pub number: i32,
}

impl EnumValue {
    /// Create an enum value.
    pub const fn new(name: &'static str, number: i32) -> Self {
        Self { name, number }
    }
}

/// The values of one enum type.
#[derive(Debug, PartialEq, Eq)]
pub struct EnumDescriptor {
    full_name: &'static str,
    values: &'static [EnumValue],
}

impl EnumDescriptor {
    /// Create a descriptor. The first value is the default.
    pub const fn new(full_name: &'static str, values: &'static [EnumValue]) -> Self {
        Self { full_name, values }
    }

    /// Fully-qualified enum name.
    pub fn full_name(&self) -> &'static str {
        self.full_name
    }

    /// Enum name without its package.
    pub fn name(&self) -> &'static str {
        self.full_name
            .rsplit_once('.')
            .map_or(self.full_name, |(_, name)| name)
    }

    /// Declared values, in declaration order.
    pub fn values(&self) -> &'static [EnumValue] {
        self.values
    }

    /// Number of the zero variant.
    pub fn default_number(&self) -> i32 {
        self.values.first().map_or(0, |value| value.number)
    }

    /// Value with the given number.
    pub fn value_by_number(&self, number: i32) -> Option<&'static EnumValue> {
        self.values.iter().find(|value| value.number == number)
    }

    /// Value matching `name`, either as declared or with the enum-name
    /// prefix stripped (`RESOURCE_ID_PLAYER` or `PLAYER`).
    pub fn value_by_name(&self, name: &str) -> Option<&'static EnumValue> {
        self.values.iter().find(|value| value.name == name).or_else(|| {
            self.values
                .iter()
                .find(|value| strip_enum_value_prefix(self.name(), value.name) == name)
        })
    }
}
