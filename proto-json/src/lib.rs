//! # proto-json
//!
//! A reflection-driven JSON codec for schema-generated message types.
//!
//! Generated message types describe themselves with a static
//! [`MessageDescriptor`] and expose their fields through the [`Message`]
//! trait. One engine walks those descriptors to convert any message to
//! canonical JSON text and back, so generated code carries no per-type
//! serializers.
//!
//! ## Overview
//!
//! - [`to_json`] writes every declared field, in descriptor order, including
//!   fields that still hold their defaults.
//! - [`from_json`] allocates a default instance and assigns the fields
//!   present in the input. Absent keys keep their defaults and unknown keys
//!   are ignored.
//! - [`from_json_class`] and [`MessageRegistry`] do the same for types only
//!   known at runtime.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use proto_json::{MessageExt, MessageTypeExt};
//!
//! let player = Player::default().with_id(123).with_name("Ash");
//! let json = player.to_json()?;
//! // => {"id":123,"name":"Ash","walkSpeed":0.0,"resourceId":0,"tags":[],"position":{"x":0.0,"y":0.0,"z":0.0}}
//!
//! let decoded = Player::from_json(json.as_str())?;
//! assert_eq!(decoded, player);
//! ```
//!
//! See [`traits`] for a complete hand-written message type.
//!
//! ## Field Mappings
//!
//! | Field kind | JSON written | JSON accepted |
//! |------------|--------------|---------------|
//! | `int32`, `uint32`, `int64`, `uint64` | number | number, decimal string |
//! | `float`, `double` | number, or `"NaN"` / `"Infinity"` / `"-Infinity"` | same |
//! | `bool` | `true` / `false` | same |
//! | `string` | string | string |
//! | `bytes` | standard base64 | standard or URL-safe base64 |
//! | enum | number | number, value name |
//! | message | object | object |
//! | repeated | array | array |
//!
//! ## Errors
//!
//! | Code | Raised when |
//! |------|-------------|
//! | `INVALID_ARGUMENT` | null message, class reference without constructor |
//! | `PARSE_ERROR` | input text is not JSON |
//! | `SCHEMA_ERROR` | class without descriptor, descriptor and fields disagree |
//! | `INVALID_VALUE` | a JSON value does not fit its field |
//! | `ENCODING_ERROR` | JSON text could not be written |
//!
//! ## Logging
//!
//! The codec emits [`tracing`] events (`debug` per call, `trace` per field
//! decision, `warn` for cyclic registrations) and installs no subscriber.

pub mod config;
pub mod decode;
pub mod descriptor;
pub mod encode;
pub mod error;
pub mod naming;
pub mod registry;
pub mod traits;
pub mod value;

pub use config::{DecodeOptions, EncodeOptions};
pub use decode::{from_json, from_json_class, from_json_class_with, from_json_with, from_value, JsonInput};
pub use descriptor::{
    Constructor, EnumDescriptor, EnumValue, FieldDescriptor, FieldKind, MessageDescriptor,
    ScalarType,
};
pub use encode::{to_json, to_json_with, to_value};
pub use error::{CodecError, CodecErrorCode, CodecResult};
pub use registry::{MessageClass, MessageRegistry};
pub use traits::{construct, AsAny, Message, MessageExt, MessageType, MessageTypeExt};
pub use value::{Value, ValueRef};
