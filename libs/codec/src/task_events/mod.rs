//! # Task Event Registries - Per-Kind Tag Namespaces
//!
//! ## Purpose
//!
//! Each task kind owns a disjoint `eventType` namespace, implemented as an
//! independently compiled module holding both directions for that namespace:
//! a strict `resolve` from tag + body to a typed event, and an `encode` that
//! is its exact inverse. Because both halves live in one module and match
//! over the same closed enum, the compiler flags any variant left unhandled
//! when an event is added - the decode and encode tables cannot drift apart.
//!
//! ## Extension Point
//!
//! The dispatch table in [`registry_for`] is the single registration point.
//! Adding a task kind means adding a module and one arm here; the envelope
//! parser and builder never change.

mod audio;
mod command;
mod streaming;
mod video;

use remlink_types::{TaskEvent, TaskKind};
use serde_json::Value;

use crate::error::ProtocolResult;

/// One task kind's event registry.
pub(crate) struct EventRegistry {
    /// Tags this kind accepts, in wire spelling.
    pub tags: &'static [&'static str],
    /// Resolve an `eventType` tag strictly within this kind's namespace.
    pub resolve: fn(&str, Value) -> ProtocolResult<TaskEvent>,
}

/// Registration table: task kind to its own event registry.
pub(crate) fn registry_for(kind: TaskKind) -> &'static EventRegistry {
    match kind {
        TaskKind::CommandExecution => &command::REGISTRY,
        TaskKind::PlayAudio => &audio::REGISTRY,
        TaskKind::PlayVideo => &video::REGISTRY,
        TaskKind::Streaming => &streaming::REGISTRY,
    }
}

/// Inverse direction: event tag + body derived from the event's variant
/// identity alone.
pub(crate) fn encode_event(event: &TaskEvent) -> ProtocolResult<(&'static str, Value)> {
    match event {
        TaskEvent::CommandExecution(event) => command::encode(event),
        TaskEvent::PlayAudio(event) => audio::encode(event),
        TaskEvent::PlayVideo(event) => video::encode(event),
        TaskEvent::Streaming(event) => streaming::encode(event),
    }
}

/// The wire tags registered for one task kind. Useful for diagnostics and
/// error reporting on the operator side.
pub fn registered_event_tags(kind: TaskKind) -> &'static [&'static str] {
    registry_for(kind).tags
}
