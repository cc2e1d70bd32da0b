//! Hand-written stand-ins for generated message types.
//!
//! These mirror what the code generator emits for the `pokeworld` schemas:
//! a plain struct, a `static` descriptor, the reflection impls and fluent
//! `with_*` setters.

#![allow(dead_code)]

use proto_json::{
    construct, CodecError, CodecResult, EnumDescriptor, EnumValue, FieldDescriptor, Message,
    MessageDescriptor, MessageType, ScalarType, Value, ValueRef,
};

// =============================================================================
// pokeworld.resource
// =============================================================================

/// Numbers of `pokeworld.resource.ResourceId`.
pub mod resource_id {
    pub const NONE: i32 = 0;
    pub const PLAYER: i32 = 1;
    pub const UI_LOGIN_PANEL: i32 = 2;
}

static RESOURCE_ID_VALUES: [EnumValue; 3] = [
    EnumValue::new("RESOURCE_ID_NONE", resource_id::NONE),
    EnumValue::new("RESOURCE_ID_PLAYER", resource_id::PLAYER),
    EnumValue::new("RESOURCE_ID_UI_LOGIN_PANEL", resource_id::UI_LOGIN_PANEL),
];

pub static RESOURCE_ID: EnumDescriptor =
    EnumDescriptor::new("pokeworld.resource.ResourceId", &RESOURCE_ID_VALUES);

// =============================================================================
// pokeworld.math
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

static VECTOR3_FIELDS: [FieldDescriptor; 3] = [
    FieldDescriptor::scalar("x", 1, ScalarType::Float),
    FieldDescriptor::scalar("y", 2, ScalarType::Float),
    FieldDescriptor::scalar("z", 3, ScalarType::Float),
];

pub static VECTOR3: MessageDescriptor =
    MessageDescriptor::new("pokeworld.math.Vector3", &VECTOR3_FIELDS, construct::<Vector3>);

impl Vector3 {
    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    pub fn with_z(mut self, z: f32) -> Self {
        self.z = z;
        self
    }
}

impl Message for Vector3 {
    fn descriptor(&self) -> &'static MessageDescriptor {
        &VECTOR3
    }

    fn field(&self, index: usize) -> Option<ValueRef<'_>> {
        match index {
            0 => Some(ValueRef::F32(self.x)),
            1 => Some(ValueRef::F32(self.y)),
            2 => Some(ValueRef::F32(self.z)),
            _ => None,
        }
    }

    fn set_field(&mut self, index: usize, value: Value) -> CodecResult<()> {
        match index {
            0 => self.x = value.into_f32()?,
            1 => self.y = value.into_f32()?,
            2 => self.z = value.into_f32()?,
            _ => return Err(CodecError::unknown_field(&VECTOR3, index)),
        }
        Ok(())
    }
}

impl MessageType for Vector3 {
    fn message_descriptor() -> &'static MessageDescriptor {
        &VECTOR3
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vector2Int {
    pub x: i32,
    pub y: i32,
}

static VECTOR2_INT_FIELDS: [FieldDescriptor; 2] = [
    FieldDescriptor::scalar("x", 1, ScalarType::Int32),
    FieldDescriptor::scalar("y", 2, ScalarType::Int32),
];

pub static VECTOR2_INT: MessageDescriptor = MessageDescriptor::new(
    "pokeworld.math.Vector2Int",
    &VECTOR2_INT_FIELDS,
    construct::<Vector2Int>,
);

impl Vector2Int {
    pub fn with_x(mut self, x: i32) -> Self {
        self.x = x;
        self
    }

    pub fn with_y(mut self, y: i32) -> Self {
        self.y = y;
        self
    }
}

impl Message for Vector2Int {
    fn descriptor(&self) -> &'static MessageDescriptor {
        &VECTOR2_INT
    }

    fn field(&self, index: usize) -> Option<ValueRef<'_>> {
        match index {
            0 => Some(ValueRef::I32(self.x)),
            1 => Some(ValueRef::I32(self.y)),
            _ => None,
        }
    }

    fn set_field(&mut self, index: usize, value: Value) -> CodecResult<()> {
        match index {
            0 => self.x = value.into_i32()?,
            1 => self.y = value.into_i32()?,
            _ => return Err(CodecError::unknown_field(&VECTOR2_INT, index)),
        }
        Ok(())
    }
}

impl MessageType for Vector2Int {
    fn message_descriptor() -> &'static MessageDescriptor {
        &VECTOR2_INT
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

static RECT_FIELDS: [FieldDescriptor; 4] = [
    FieldDescriptor::scalar("x", 1, ScalarType::Int32),
    FieldDescriptor::scalar("y", 2, ScalarType::Int32),
    FieldDescriptor::scalar("width", 3, ScalarType::Int32),
    FieldDescriptor::scalar("height", 4, ScalarType::Int32),
];

pub static RECT: MessageDescriptor =
    MessageDescriptor::new("pokeworld.math.Rect", &RECT_FIELDS, construct::<Rect>);

impl Rect {
    pub fn with_x(mut self, x: i32) -> Self {
        self.x = x;
        self
    }

    pub fn with_y(mut self, y: i32) -> Self {
        self.y = y;
        self
    }

    pub fn with_width(mut self, width: i32) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: i32) -> Self {
        self.height = height;
        self
    }
}

impl Message for Rect {
    fn descriptor(&self) -> &'static MessageDescriptor {
        &RECT
    }

    fn field(&self, index: usize) -> Option<ValueRef<'_>> {
        match index {
            0 => Some(ValueRef::I32(self.x)),
            1 => Some(ValueRef::I32(self.y)),
            2 => Some(ValueRef::I32(self.width)),
            3 => Some(ValueRef::I32(self.height)),
            _ => None,
        }
    }

    fn set_field(&mut self, index: usize, value: Value) -> CodecResult<()> {
        match index {
            0 => self.x = value.into_i32()?,
            1 => self.y = value.into_i32()?,
            2 => self.width = value.into_i32()?,
            3 => self.height = value.into_i32()?,
            _ => return Err(CodecError::unknown_field(&RECT, index)),
        }
        Ok(())
    }
}

impl MessageType for Rect {
    fn message_descriptor() -> &'static MessageDescriptor {
        &RECT
    }
}

// =============================================================================
// pokeworld.actor
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub walk_speed: f32,
    pub resource_id: i32,
    pub tags: Vec<String>,
    pub position: Vector3,
}

static PLAYER_FIELDS: [FieldDescriptor; 6] = [
    FieldDescriptor::scalar("id", 1, ScalarType::Int32),
    FieldDescriptor::scalar("name", 2, ScalarType::String),
    FieldDescriptor::scalar("walkSpeed", 3, ScalarType::Float),
    FieldDescriptor::enumeration("resourceId", 4, &RESOURCE_ID),
    FieldDescriptor::scalar("tags", 5, ScalarType::String).repeated(),
    FieldDescriptor::message("position", 6, &VECTOR3),
];

pub static PLAYER: MessageDescriptor =
    MessageDescriptor::new("pokeworld.actor.Player", &PLAYER_FIELDS, construct::<Player>);

impl Player {
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_walk_speed(mut self, walk_speed: f32) -> Self {
        self.walk_speed = walk_speed;
        self
    }

    pub fn with_resource_id(mut self, resource_id: i32) -> Self {
        self.resource_id = resource_id;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_position(mut self, position: Vector3) -> Self {
        self.position = position;
        self
    }
}

impl Message for Player {
    fn descriptor(&self) -> &'static MessageDescriptor {
        &PLAYER
    }

    fn field(&self, index: usize) -> Option<ValueRef<'_>> {
        let value = match index {
            0 => ValueRef::I32(self.id),
            1 => ValueRef::String(&self.name),
            2 => ValueRef::F32(self.walk_speed),
            3 => ValueRef::Enum(self.resource_id),
            4 => ValueRef::list(self.tags.iter().map(|tag| ValueRef::String(tag))),
            5 => ValueRef::message(&self.position),
            _ => return None,
        };
        Some(value)
    }

    fn set_field(&mut self, index: usize, value: Value) -> CodecResult<()> {
        match index {
            0 => self.id = value.into_i32()?,
            1 => self.name = value.into_string()?,
            2 => self.walk_speed = value.into_f32()?,
            3 => self.resource_id = value.into_enum()?,
            4 => self.tags = value.into_repeated(Value::into_string)?,
            5 => self.position = value.into_message()?,
            _ => return Err(CodecError::unknown_field(&PLAYER, index)),
        }
        Ok(())
    }
}

impl MessageType for Player {
    fn message_descriptor() -> &'static MessageDescriptor {
        &PLAYER
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Actor {
    pub actor_id: i64,
    pub player: Option<Player>,
    pub waypoints: Vec<Vector2Int>,
    pub bounds: Rect,
}

static ACTOR_FIELDS: [FieldDescriptor; 4] = [
    FieldDescriptor::scalar("actorId", 1, ScalarType::Int64),
    FieldDescriptor::message("player", 2, &PLAYER),
    FieldDescriptor::message("waypoints", 3, &VECTOR2_INT).repeated(),
    FieldDescriptor::message("bounds", 4, &RECT),
];

pub static ACTOR: MessageDescriptor =
    MessageDescriptor::new("pokeworld.actor.Actor", &ACTOR_FIELDS, construct::<Actor>);

impl Actor {
    pub fn with_actor_id(mut self, actor_id: i64) -> Self {
        self.actor_id = actor_id;
        self
    }

    pub fn with_player(mut self, player: Player) -> Self {
        self.player = Some(player);
        self
    }

    pub fn with_waypoints(mut self, waypoints: Vec<Vector2Int>) -> Self {
        self.waypoints = waypoints;
        self
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }
}

impl Message for Actor {
    fn descriptor(&self) -> &'static MessageDescriptor {
        &ACTOR
    }

    fn field(&self, index: usize) -> Option<ValueRef<'_>> {
        let value = match index {
            0 => ValueRef::I64(self.actor_id),
            1 => ValueRef::optional_message(&self.player),
            2 => ValueRef::messages(&self.waypoints),
            3 => ValueRef::message(&self.bounds),
            _ => return None,
        };
        Some(value)
    }

    fn set_field(&mut self, index: usize, value: Value) -> CodecResult<()> {
        match index {
            0 => self.actor_id = value.into_i64()?,
            1 => self.player = Some(value.into_message()?),
            2 => self.waypoints = value.into_repeated(Value::into_message)?,
            3 => self.bounds = value.into_message()?,
            _ => return Err(CodecError::unknown_field(&ACTOR, index)),
        }
        Ok(())
    }
}

impl MessageType for Actor {
    fn message_descriptor() -> &'static MessageDescriptor {
        &ACTOR
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TbPlayer {
    pub data_list: Vec<Player>,
}

static TB_PLAYER_FIELDS: [FieldDescriptor; 1] =
    [FieldDescriptor::message("dataList", 1, &PLAYER).repeated()];

pub static TB_PLAYER: MessageDescriptor = MessageDescriptor::new(
    "pokeworld.actor.TbPlayer",
    &TB_PLAYER_FIELDS,
    construct::<TbPlayer>,
);

impl TbPlayer {
    pub fn with_data_list(mut self, data_list: Vec<Player>) -> Self {
        self.data_list = data_list;
        self
    }
}

impl Message for TbPlayer {
    fn descriptor(&self) -> &'static MessageDescriptor {
        &TB_PLAYER
    }

    fn field(&self, index: usize) -> Option<ValueRef<'_>> {
        match index {
            0 => Some(ValueRef::messages(&self.data_list)),
            _ => None,
        }
    }

    fn set_field(&mut self, index: usize, value: Value) -> CodecResult<()> {
        match index {
            0 => self.data_list = value.into_repeated(Value::into_message)?,
            _ => return Err(CodecError::unknown_field(&TB_PLAYER, index)),
        }
        Ok(())
    }
}

impl MessageType for TbPlayer {
    fn message_descriptor() -> &'static MessageDescriptor {
        &TB_PLAYER
    }
}

// =============================================================================
// Every scalar type
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScalarBag {
    pub double_value: f64,
    pub float_value: f32,
    pub int32_value: i32,
    pub int64_value: i64,
    pub uint32_value: u32,
    pub uint64_value: u64,
    pub bool_value: bool,
    pub string_value: String,
    pub bytes_value: Vec<u8>,
    pub scores: Vec<f64>,
}

static SCALAR_BAG_FIELDS: [FieldDescriptor; 10] = [
    FieldDescriptor::scalar("doubleValue", 1, ScalarType::Double),
    FieldDescriptor::scalar("floatValue", 2, ScalarType::Float),
    FieldDescriptor::scalar("int32Value", 3, ScalarType::Int32),
    FieldDescriptor::scalar("int64Value", 4, ScalarType::Int64),
    FieldDescriptor::scalar("uint32Value", 5, ScalarType::UInt32),
    FieldDescriptor::scalar("uint64Value", 6, ScalarType::UInt64),
    FieldDescriptor::scalar("boolValue", 7, ScalarType::Bool),
    FieldDescriptor::scalar("stringValue", 8, ScalarType::String),
    FieldDescriptor::scalar("bytesValue", 9, ScalarType::Bytes),
    FieldDescriptor::scalar("scores", 10, ScalarType::Double).repeated(),
];

pub static SCALAR_BAG: MessageDescriptor = MessageDescriptor::new(
    "pokeworld.test.ScalarBag",
    &SCALAR_BAG_FIELDS,
    construct::<ScalarBag>,
);

impl Message for ScalarBag {
    fn descriptor(&self) -> &'static MessageDescriptor {
        &SCALAR_BAG
    }

    fn field(&self, index: usize) -> Option<ValueRef<'_>> {
        let value = match index {
            0 => ValueRef::F64(self.double_value),
            1 => ValueRef::F32(self.float_value),
            2 => ValueRef::I32(self.int32_value),
            3 => ValueRef::I64(self.int64_value),
            4 => ValueRef::U32(self.uint32_value),
            5 => ValueRef::U64(self.uint64_value),
            6 => ValueRef::Bool(self.bool_value),
            7 => ValueRef::String(&self.string_value),
            8 => ValueRef::Bytes(&self.bytes_value),
            9 => ValueRef::list(self.scores.iter().copied().map(ValueRef::F64)),
            _ => return None,
        };
        Some(value)
    }

    fn set_field(&mut self, index: usize, value: Value) -> CodecResult<()> {
        match index {
            0 => self.double_value = value.into_f64()?,
            1 => self.float_value = value.into_f32()?,
            2 => self.int32_value = value.into_i32()?,
            3 => self.int64_value = value.into_i64()?,
            4 => self.uint32_value = value.into_u32()?,
            5 => self.uint64_value = value.into_u64()?,
            6 => self.bool_value = value.into_bool()?,
            7 => self.string_value = value.into_string()?,
            8 => self.bytes_value = value.into_bytes()?,
            9 => self.scores = value.into_repeated(Value::into_f64)?,
            _ => return Err(CodecError::unknown_field(&SCALAR_BAG, index)),
        }
        Ok(())
    }
}

impl MessageType for ScalarBag {
    fn message_descriptor() -> &'static MessageDescriptor {
        &SCALAR_BAG
    }
}

/// A player with every field set.
pub fn sample_player() -> Player {
    Player::default()
        .with_id(123)
        .with_name("Test Player")
        .with_walk_speed(5.0)
        .with_resource_id(resource_id::PLAYER)
        .with_tags(["fast", "friendly"])
        .with_position(Vector3::default().with_x(1.5).with_y(-2.0).with_z(0.25))
}
