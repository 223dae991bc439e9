//! Audio-playback task events.

use remlink_types::{AudioEvent, TaskEvent, TaskKind};
use serde_json::Value;

use crate::constants::event::audio as tags;
use crate::error::{ProtocolError, ProtocolResult, TagContext};
use crate::message_builder::{empty_body, to_body};
use crate::parser::decode_body;

use super::EventRegistry;

const CONTEXT: TagContext = TagContext::Event(TaskKind::PlayAudio);

pub(crate) const REGISTRY: EventRegistry = EventRegistry {
    tags: &[tags::PAUSE, tags::CONTINUE, tags::STATUS_REQUEST],
    resolve,
};

fn resolve(tag: &str, body: Value) -> ProtocolResult<TaskEvent> {
    let event = match tag {
        tags::PAUSE => AudioEvent::Pause,
        tags::CONTINUE => AudioEvent::Continue,
        tags::STATUS_REQUEST => AudioEvent::StatusRequest(decode_body(CONTEXT, tag, body)?),
        _ => {
            return Err(ProtocolError::UnknownTag {
                context: CONTEXT,
                tag: tag.to_owned(),
            });
        }
    };
    Ok(TaskEvent::PlayAudio(event))
}

pub(super) fn encode(event: &AudioEvent) -> ProtocolResult<(&'static str, Value)> {
    Ok(match event {
        AudioEvent::Pause => (tags::PAUSE, empty_body()),
        AudioEvent::Continue => (tags::CONTINUE, empty_body()),
        AudioEvent::StatusRequest(status) => (tags::STATUS_REQUEST, to_body(status)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use remlink_types::StatusRequest;
    use serde_json::json;

    #[test]
    fn test_pause_ignores_body_content() {
        let event = resolve(tags::PAUSE, json!({"leftover": true})).unwrap();
        assert_eq!(event, TaskEvent::PlayAudio(AudioEvent::Pause));
    }

    #[test]
    fn test_status_request_carries_code() {
        let event = resolve(tags::STATUS_REQUEST, json!({"code": 2})).unwrap();
        assert_eq!(
            event,
            TaskEvent::PlayAudio(AudioEvent::StatusRequest(StatusRequest { code: 2 }))
        );
    }

    #[test]
    fn test_streaming_tags_do_not_leak_in() {
        let err = resolve("Resume", json!({})).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::UnknownTag {
                context: CONTEXT,
                tag: "Resume".to_owned(),
            }
        );
    }
}
