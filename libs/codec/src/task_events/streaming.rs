//! Screen-streaming task events.

use remlink_types::{StreamingEvent, TaskEvent, TaskKind};
use serde_json::Value;

use crate::constants::event::streaming as tags;
use crate::error::{ProtocolError, ProtocolResult, TagContext};
use crate::message_builder::{empty_body, to_body};
use crate::parser::decode_body;

use super::EventRegistry;

const CONTEXT: TagContext = TagContext::Event(TaskKind::Streaming);

pub(crate) const REGISTRY: EventRegistry = EventRegistry {
    tags: &[tags::PAUSE, tags::RESUME, tags::END, tags::CHANGE_FPS],
    resolve,
};

fn resolve(tag: &str, body: Value) -> ProtocolResult<TaskEvent> {
    let event = match tag {
        tags::PAUSE => StreamingEvent::Pause,
        tags::RESUME => StreamingEvent::Resume,
        tags::END => StreamingEvent::End,
        tags::CHANGE_FPS => StreamingEvent::ChangeFps(decode_body(CONTEXT, tag, body)?),
        _ => {
            return Err(ProtocolError::UnknownTag {
                context: CONTEXT,
                tag: tag.to_owned(),
            });
        }
    };
    Ok(TaskEvent::Streaming(event))
}

pub(super) fn encode(event: &StreamingEvent) -> ProtocolResult<(&'static str, Value)> {
    Ok(match event {
        StreamingEvent::Pause => (tags::PAUSE, empty_body()),
        StreamingEvent::Resume => (tags::RESUME, empty_body()),
        StreamingEvent::End => (tags::END, empty_body()),
        StreamingEvent::ChangeFps(change) => (tags::CHANGE_FPS, to_body(change)?),
    })
}
