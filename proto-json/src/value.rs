//! Reflection values exchanged between the codec and message types.
//!
//! Message types hand the codec a borrowed [`ValueRef`] when it reads a field
//! and receive an owned [`Value`] when it writes one. Both mirror the field
//! kinds of the descriptor contract: scalars, enum numbers, nested messages
//! and lists of any of those.
//!
//! The `into_*` accessors on [`Value`] exist for generated `set_field`
//! implementations. They fail with a schema error when the codec hands over a
//! value of another kind, which only happens when a type's descriptor and
//! its fields disagree.

use crate::error::{CodecError, CodecResult};
use crate::traits::Message;

/// An owned field value, produced by the decoder.
#[derive(Debug)]
pub enum Value {
    Bool(bool),
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    String(String),
    Bytes(Vec<u8>),
    /// Enum number; may be a number the enum does not declare.
    Enum(i32),
    Message(Box<dyn Message>),
    List(Vec<Value>),
}

impl Value {
    /// Short name of the value kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::I32(_) => "int32",
            Self::I64(_) => "int64",
            Self::U32(_) => "uint32",
            Self::U64(_) => "uint64",
            Self::F32(_) => "float",
            Self::F64(_) => "double",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::Enum(_) => "enum",
            Self::Message(_) => "message",
            Self::List(_) => "list",
        }
    }

    fn mismatch(&self, expected: &str) -> CodecError {
        CodecError::schema(format!(
            "expected {expected} value, found {}",
            self.kind_name()
        ))
    }

    /// Take the enum number.
    pub fn into_enum(self) -> CodecResult<i32> {
        match self {
            Self::Enum(number) => Ok(number),
            other => Err(other.mismatch("enum")),
        }
    }

    /// Take a nested message of concrete type `M`.
    pub fn into_message<M: Message>(self) -> CodecResult<M> {
        match self {
            Self::Message(message) => {
                let found = message.descriptor().full_name();
                message
                    .into_any()
                    .downcast::<M>()
                    .map(|message| *message)
                    .map_err(|_| {
                        CodecError::schema(format!(
                            "expected message `{}`, found `{found}`",
                            std::any::type_name::<M>()
                        ))
                    })
            }
            other => Err(other.mismatch("message")),
        }
    }

    /// Take the list items without converting them.
    pub fn into_list(self) -> CodecResult<Vec<Value>> {
        match self {
            Self::List(items) => Ok(items),
            other => Err(other.mismatch("list")),
        }
    }

    /// Take a list, converting each item with `convert`.
    ///
    /// ```rust
    /// use proto_json::Value;
    ///
    /// let list = Value::List(vec![Value::I32(1), Value::I32(2)]);
    /// assert_eq!(list.into_repeated(Value::into_i32).unwrap(), vec![1, 2]);
    /// ```
    pub fn into_repeated<T>(
        self,
        convert: impl FnMut(Value) -> CodecResult<T>,
    ) -> CodecResult<Vec<T>> {
        self.into_list()?.into_iter().map(convert).collect()
    }
}

macro_rules! impl_scalar_accessors {
    ($($method:ident => $variant:ident($ty:ty), $expected:literal;)*) => {
        impl Value {
            $(
                #[doc = concat!("Take the `", stringify!($ty), "` payload.")]
                pub fn $method(self) -> CodecResult<$ty> {
                    match self {
                        Self::$variant(value) => Ok(value),
                        other => Err(other.mismatch($expected)),
                    }
                }
            )*
        }

        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_scalar_accessors! {
    into_bool => Bool(bool), "bool";
    into_i32 => I32(i32), "int32";
    into_i64 => I64(i64), "int64";
    into_u32 => U32(u32), "uint32";
    into_u64 => U64(u64), "uint64";
    into_f32 => F32(f32), "float";
    into_f64 => F64(f64), "double";
    into_string => String(String), "string";
    into_bytes => Bytes(Vec<u8>), "bytes";
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// A borrowed field value, handed to the encoder.
#[derive(Debug, Clone)]
pub enum ValueRef<'a> {
    Bool(bool),
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    String(&'a str),
    Bytes(&'a [u8]),
    Enum(i32),
    /// A nested message; `None` when the slot is unset.
    Message(Option<&'a dyn Message>),
    List(Vec<ValueRef<'a>>),
}

impl<'a> ValueRef<'a> {
    /// Short name of the value kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::I32(_) => "int32",
            Self::I64(_) => "int64",
            Self::U32(_) => "uint32",
            Self::U64(_) => "uint64",
            Self::F32(_) => "float",
            Self::F64(_) => "double",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::Enum(_) => "enum",
            Self::Message(_) => "message",
            Self::List(_) => "list",
        }
    }

    /// A set nested message.
    pub fn message<M: Message>(message: &'a M) -> Self {
        Self::Message(Some(message as &dyn Message))
    }

    /// A nested message slot that may be unset.
    pub fn optional_message<M: Message>(slot: &'a Option<M>) -> Self {
        Self::Message(slot.as_ref().map(|message| message as &dyn Message))
    }

    /// A repeated message field.
    pub fn messages<M: Message>(items: &'a [M]) -> Self {
        Self::List(
            items
                .iter()
                .map(|message| Self::Message(Some(message as &dyn Message)))
                .collect(),
        )
    }

    /// A repeated field of any other kind.
    pub fn list(items: impl IntoIterator<Item = ValueRef<'a>>) -> Self {
        Self::List(items.into_iter().collect())
    }
}
