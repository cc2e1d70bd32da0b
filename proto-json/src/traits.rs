//! The descriptor contract: what a type must provide to be serialized.
//!
//! ## Overview
//!
//! - [`Message`] is the object-safe reflection surface the codec walks. It
//!   exposes the type's descriptor and reads/writes fields by descriptor
//!   index, so the codec never needs to know the concrete type.
//! - [`MessageType`] adds the type-level capability: a descriptor reachable
//!   without an instance plus a `Default` constructor. It is what typed
//!   decoding (`from_json::<M>`) requires, checked at compile time.
//! - [`MessageExt`] and [`MessageTypeExt`] are blanket conveniences so
//!   callers can write `player.to_json()` and `Player::from_json(text)`.
//!
//! Types that only exist at runtime are described by a
//! [`MessageClass`](crate::MessageClass) instead.
//!
//! ## Implementing the contract
//!
//! Generated code implements both traits next to a `static` descriptor:
//!
//! ```rust
//! use proto_json::{
//!     construct, CodecError, CodecResult, FieldDescriptor, Message, MessageDescriptor,
//!     MessageExt, MessageType, MessageTypeExt, ScalarType, Value, ValueRef,
//! };
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Vector3 {
//!     x: f32,
//!     y: f32,
//!     z: f32,
//! }
//!
//! static VECTOR3_FIELDS: [FieldDescriptor; 3] = [
//!     FieldDescriptor::scalar("x", 1, ScalarType::Float),
//!     FieldDescriptor::scalar("y", 2, ScalarType::Float),
//!     FieldDescriptor::scalar("z", 3, ScalarType::Float),
//! ];
//!
//! static VECTOR3: MessageDescriptor =
//!     MessageDescriptor::new("pokeworld.math.Vector3", &VECTOR3_FIELDS, construct::<Vector3>);
//!
//! impl Message for Vector3 {
//!     fn descriptor(&self) -> &'static MessageDescriptor {
//!         &VECTOR3
//!     }
//!
//!     fn field(&self, index: usize) -> Option<ValueRef<'_>> {
//!         match index {
//!             0 => Some(ValueRef::F32(self.x)),
//!             1 => Some(ValueRef::F32(self.y)),
//!             2 => Some(ValueRef::F32(self.z)),
//!             _ => None,
//!         }
//!     }
//!
//!     fn set_field(&mut self, index: usize, value: Value) -> CodecResult<()> {
//!         match index {
//!             0 => self.x = value.into_f32()?,
//!             1 => self.y = value.into_f32()?,
//!             2 => self.z = value.into_f32()?,
//!             _ => return Err(CodecError::unknown_field(&VECTOR3, index)),
//!         }
//!         Ok(())
//!     }
//! }
//!
//! impl MessageType for Vector3 {
//!     fn message_descriptor() -> &'static MessageDescriptor {
//!         &VECTOR3
//!     }
//! }
//!
//! let v = Vector3 { x: 1.5, y: 2.5, z: 3.5 };
//! let json = v.to_json().unwrap();
//! assert_eq!(json, r#"{"x":1.5,"y":2.5,"z":3.5}"#);
//! assert_eq!(Vector3::from_json(json.as_str()).unwrap(), v);
//! ```

use std::any::Any;
use std::fmt;

use serde_json::Value as JsonValue;

use crate::decode::{from_json, JsonInput};
use crate::descriptor::MessageDescriptor;
use crate::encode::{to_json, to_value};
use crate::error::CodecResult;
use crate::value::{Value, ValueRef};

/// Access to the concrete type behind a `dyn Message`.
///
/// Implemented for every `'static` type; message types never implement it
/// by hand.
pub trait AsAny: Any {
    /// Borrow as `dyn Any`.
    fn as_any(&self) -> &dyn Any;

    /// Mutably borrow as `dyn Any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Convert a boxed value into `Box<dyn Any>` for downcasting.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Reflection surface of a message instance.
///
/// Field indices are positions in [`MessageDescriptor::fields`]. The codec
/// only ever calls [`field`](Message::field) and
/// [`set_field`](Message::set_field) with indices of the instance's own
/// descriptor, and only passes values whose kind matches the declared field.
pub trait Message: AsAny + fmt::Debug + Send + Sync {
    /// The descriptor shared by all instances of this type.
    fn descriptor(&self) -> &'static MessageDescriptor;

    /// Read the field at `index`. Returns `None` for indices the type does
    /// not declare.
    fn field(&self, index: usize) -> Option<ValueRef<'_>>;

    /// Assign the field at `index`.
    fn set_field(&mut self, index: usize, value: Value) -> CodecResult<()>;
}

/// Type-level side of the descriptor contract.
pub trait MessageType: Message + Default + Sized {
    /// The descriptor of this type, available without an instance.
    fn message_descriptor() -> &'static MessageDescriptor;
}

/// Default constructor for a [`MessageType`], for use in descriptors.
pub fn construct<M: MessageType>() -> Box<dyn Message> {
    Box::new(M::default())
}

/// Encoding conveniences for every message type.
pub trait MessageExt: Message {
    /// Compact JSON text.
    fn to_json(&self) -> CodecResult<String>;

    /// Pretty-printed JSON text with `indent` spaces per level.
    fn to_json_pretty(&self, indent: usize) -> CodecResult<String>;

    /// JSON value with keys in descriptor order.
    fn to_json_value(&self) -> CodecResult<JsonValue>;
}

impl<M: Message> MessageExt for M {
    fn to_json(&self) -> CodecResult<String> {
        to_json(Some(self as &dyn Message), 0)
    }

    fn to_json_pretty(&self, indent: usize) -> CodecResult<String> {
        to_json(Some(self as &dyn Message), indent)
    }

    fn to_json_value(&self) -> CodecResult<JsonValue> {
        to_value(self)
    }
}

/// Decoding conveniences for every [`MessageType`].
pub trait MessageTypeExt: MessageType {
    /// Decode from JSON text or an already parsed JSON value.
    fn from_json<'a>(input: impl Into<JsonInput<'a>>) -> CodecResult<Self>;
}

impl<M: MessageType> MessageTypeExt for M {
    fn from_json<'a>(input: impl Into<JsonInput<'a>>) -> CodecResult<Self> {
        from_json::<M>(input)
    }
}
