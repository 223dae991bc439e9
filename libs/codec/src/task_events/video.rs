//! Video-playback task events.
//!
//! Mirrors the audio namespace tag-for-tag (including the shared
//! `StatusRequest` shape), but remains a separate registry: the same string
//! under a different task kind is a different event.

use remlink_types::{TaskEvent, TaskKind, VideoEvent};
use serde_json::Value;

use crate::constants::event::video as tags;
use crate::error::{ProtocolError, ProtocolResult, TagContext};
use crate::message_builder::{empty_body, to_body};
use crate::parser::decode_body;

use super::EventRegistry;

const CONTEXT: TagContext = TagContext::Event(TaskKind::PlayVideo);

pub(crate) const REGISTRY: EventRegistry = EventRegistry {
    tags: &[tags::PAUSE, tags::CONTINUE, tags::STATUS_REQUEST],
    resolve,
};

fn resolve(tag: &str, body: Value) -> ProtocolResult<TaskEvent> {
    let event = match tag {
        tags::PAUSE => VideoEvent::Pause,
        tags::CONTINUE => VideoEvent::Continue,
        tags::STATUS_REQUEST => VideoEvent::StatusRequest(decode_body(CONTEXT, tag, body)?),
        _ => {
            return Err(ProtocolError::UnknownTag {
                context: CONTEXT,
                tag: tag.to_owned(),
            });
        }
    };
    Ok(TaskEvent::PlayVideo(event))
}

pub(super) fn encode(event: &VideoEvent) -> ProtocolResult<(&'static str, Value)> {
    Ok(match event {
        VideoEvent::Pause => (tags::PAUSE, empty_body()),
        VideoEvent::Continue => (tags::CONTINUE, empty_body()),
        VideoEvent::StatusRequest(status) => (tags::STATUS_REQUEST, to_body(status)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolves_into_video_namespace() {
        let event = resolve(tags::PAUSE, json!({})).unwrap();
        assert_eq!(event, TaskEvent::PlayVideo(VideoEvent::Pause));
        assert_eq!(event.task_kind(), TaskKind::PlayVideo);
    }

    #[test]
    fn test_command_tags_do_not_leak_in() {
        let err = resolve("Input", json!({"input": "ls"})).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::UnknownTag {
                context: CONTEXT,
                tag: "Input".to_owned(),
            }
        );
    }
}
