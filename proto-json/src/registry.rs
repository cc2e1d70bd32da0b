//! Runtime lookup of message classes by type name.
//!
//! Typed decoding checks the descriptor contract at compile time through
//! [`MessageType`]. Callers that only learn a type at runtime (a type name
//! read from a config file or a network header) go through a
//! [`MessageClass`] instead, usually obtained from a [`MessageRegistry`].
//!
//! # Example
//!
//! ```rust,ignore
//! let mut registry = MessageRegistry::new();
//! registry.register::<TbPlayer>()?;
//!
//! // `Player` and `Vector3` were registered along with `TbPlayer`.
//! assert!(registry.contains("pokeworld.actor.Player"));
//! let message = registry.from_json("pokeworld.actor.Player", r#"{"id": 7}"#)?;
//! ```

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::config::DecodeOptions;
use crate::decode::{from_json_class_with, JsonInput};
use crate::descriptor::{Constructor, MessageDescriptor};
use crate::error::{CodecError, CodecResult};
use crate::traits::{construct, Message, MessageType};

/// Runtime handle to a message type: its name, how to construct it and how
/// it is shaped.
///
/// Both the constructor and the descriptor are optional so that a handle can
/// describe a type that does not honor the descriptor contract; decoding
/// through such a handle fails instead of guessing.
#[derive(Debug, Clone)]
pub struct MessageClass {
    name: Cow<'static, str>,
    constructor: Option<Constructor>,
    descriptor: Option<&'static MessageDescriptor>,
}

impl MessageClass {
    /// A bare handle with neither constructor nor descriptor.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            constructor: None,
            descriptor: None,
        }
    }

    /// The handle of a compile-time message type.
    pub fn of<M: MessageType>() -> Self {
        let descriptor = M::message_descriptor();
        Self {
            name: Cow::Borrowed(descriptor.full_name()),
            constructor: Some(construct::<M>),
            descriptor: Some(descriptor),
        }
    }

    /// The handle described by `descriptor`, using its constructor.
    pub fn from_descriptor(descriptor: &'static MessageDescriptor) -> Self {
        Self {
            name: Cow::Borrowed(descriptor.full_name()),
            constructor: Some(descriptor.constructor()),
            descriptor: Some(descriptor),
        }
    }

    /// Set the constructor.
    pub fn with_constructor(mut self, constructor: Constructor) -> Self {
        self.constructor = Some(constructor);
        self
    }

    /// Set the descriptor.
    pub fn with_descriptor(mut self, descriptor: &'static MessageDescriptor) -> Self {
        self.descriptor = Some(descriptor);
        self
    }

    /// Fully-qualified type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Constructor producing a default instance, if one was supplied.
    pub fn constructor(&self) -> Option<Constructor> {
        self.constructor
    }

    /// Descriptor of the class, if one was supplied.
    pub fn descriptor(&self) -> Option<&'static MessageDescriptor> {
        self.descriptor
    }
}

/// Message classes keyed by fully-qualified type name.
#[derive(Debug, Default)]
pub struct MessageRegistry {
    classes: HashMap<String, MessageClass>,
}

impl MessageRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `M` and every message type reachable from its fields.
    ///
    /// # Errors
    ///
    /// Returns a schema error, and registers nothing, when any reachable
    /// descriptor declares duplicate or empty field names.
    pub fn register<M: MessageType>(&mut self) -> CodecResult<()> {
        self.register_descriptor(M::message_descriptor())
    }

    /// Register the type described by `descriptor` and every message type
    /// reachable from its fields.
    pub fn register_descriptor(&mut self, descriptor: &'static MessageDescriptor) -> CodecResult<()> {
        let mut reachable = Vec::new();
        collect_reachable(descriptor, &mut HashSet::new(), &mut reachable);
        for nested in &reachable {
            nested.validate()?;
        }

        for nested in reachable {
            debug!(message_type = nested.full_name(), "registering message type");
            self.classes.insert(
                nested.full_name().to_string(),
                MessageClass::from_descriptor(nested),
            );
        }

        if let Some(cycle) = self.detect_cycles() {
            warn!(
                cycle = %cycle.join(" -> "),
                "message types nest each other through singular fields; encoding their defaults will not terminate"
            );
        }
        Ok(())
    }

    /// Register a raw class handle, replacing any class of the same name.
    ///
    /// The handle is stored as given; a missing constructor or descriptor
    /// surfaces when decoding through it.
    pub fn register_class(&mut self, class: MessageClass) -> Option<MessageClass> {
        debug!(message_type = class.name(), "registering message class");
        self.classes.insert(class.name().to_string(), class)
    }

    /// Get a class by type name.
    pub fn get(&self, name: &str) -> Option<&MessageClass> {
        self.classes.get(name)
    }

    /// Check whether a type name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Get all registered classes.
    pub fn classes(&self) -> impl Iterator<Item = &MessageClass> {
        self.classes.values()
    }

    /// Get the number of registered classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Decode a message of the named type.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error for unregistered names, otherwise
    /// fails like [`from_json_class`](crate::from_json_class).
    pub fn from_json<'a>(
        &self,
        name: &str,
        input: impl Into<JsonInput<'a>>,
    ) -> CodecResult<Box<dyn Message>> {
        self.from_json_with(name, input, &DecodeOptions::default())
    }

    /// [`from_json`](Self::from_json) with explicit options.
    pub fn from_json_with<'a>(
        &self,
        name: &str,
        input: impl Into<JsonInput<'a>>,
        options: &DecodeOptions,
    ) -> CodecResult<Box<dyn Message>> {
        let class = self.get(name).ok_or_else(|| {
            CodecError::invalid_argument(format!(
                "`{name}` is not registered; message class must be a function producing a message instance"
            ))
        })?;
        from_json_class_with(Some(class), input, options)
    }

    /// Find a cycle of singular message fields and return the type names
    /// along it, starting and ending with the same name.
    ///
    /// Repeated fields never form a cycle: their default is an empty list.
    pub fn detect_cycles(&self) -> Option<Vec<String>> {
        let mut names: Vec<&str> = self.classes.keys().map(String::as_str).collect();
        names.sort_unstable();

        let mut visited = HashSet::new();
        let mut path = Vec::new();
        for name in names {
            if !visited.contains(name) {
                if let Some(cycle) = self.find_cycle(name, &mut visited, &mut path) {
                    return Some(cycle);
                }
            }
        }
        None
    }

    fn find_cycle<'a>(
        &'a self,
        name: &'a str,
        visited: &mut HashSet<&'a str>,
        path: &mut Vec<&'a str>,
    ) -> Option<Vec<String>> {
        if let Some(start) = path.iter().position(|seen| *seen == name) {
            let mut cycle: Vec<String> = path[start..].iter().map(|seen| seen.to_string()).collect();
            cycle.push(name.to_string());
            return Some(cycle);
        }
        if visited.contains(name) {
            return None;
        }

        path.push(name);
        if let Some(descriptor) = self.get(name).and_then(MessageClass::descriptor) {
            let singular = descriptor
                .fields()
                .iter()
                .filter(|field| !field.repeated)
                .filter_map(|field| field.message_type());
            for nested in singular {
                if let Some(cycle) = self.find_cycle(nested.full_name(), visited, path) {
                    return Some(cycle);
                }
            }
        }
        path.pop();
        visited.insert(name);
        None
    }
}

fn collect_reachable(
    descriptor: &'static MessageDescriptor,
    seen: &mut HashSet<&'static str>,
    out: &mut Vec<&'static MessageDescriptor>,
) {
    if !seen.insert(descriptor.full_name()) {
        return;
    }
    out.push(descriptor);
    for nested in descriptor.fields().iter().filter_map(|field| field.message_type()) {
        collect_reachable(nested, seen, out);
    }
}
