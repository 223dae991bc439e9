//! Command-execution task events: stdin input, captured output, a terminate
//! signal, and the final exit notification.

use remlink_types::{CommandEvent, TaskEvent, TaskKind};
use serde_json::Value;

use crate::constants::event::command as tags;
use crate::error::{ProtocolError, ProtocolResult, TagContext};
use crate::message_builder::{empty_body, to_body};
use crate::parser::decode_body;

use super::EventRegistry;

const CONTEXT: TagContext = TagContext::Event(TaskKind::CommandExecution);

pub(crate) const REGISTRY: EventRegistry = EventRegistry {
    tags: &[tags::INPUT, tags::OUTPUT, tags::TERMINATE, tags::EXITED],
    resolve,
};

fn resolve(tag: &str, body: Value) -> ProtocolResult<TaskEvent> {
    let event = match tag {
        tags::INPUT => CommandEvent::Input(decode_body(CONTEXT, tag, body)?),
        tags::OUTPUT => CommandEvent::Output(decode_body(CONTEXT, tag, body)?),
        tags::TERMINATE => CommandEvent::Terminate,
        tags::EXITED => CommandEvent::Exited(decode_body(CONTEXT, tag, body)?),
        _ => {
            return Err(ProtocolError::UnknownTag {
                context: CONTEXT,
                tag: tag.to_owned(),
            });
        }
    };
    Ok(TaskEvent::CommandExecution(event))
}

pub(super) fn encode(event: &CommandEvent) -> ProtocolResult<(&'static str, Value)> {
    Ok(match event {
        CommandEvent::Input(input) => (tags::INPUT, to_body(input)?),
        CommandEvent::Output(output) => (tags::OUTPUT, to_body(output)?),
        CommandEvent::Terminate => (tags::TERMINATE, empty_body()),
        CommandEvent::Exited(exited) => (tags::EXITED, to_body(exited)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use remlink_types::{CommandExited, CommandOutput};
    use serde_json::json;

    #[test]
    fn test_output_resolves_with_text() {
        let event = resolve(tags::OUTPUT, json!({"output": "hello"})).unwrap();
        assert_eq!(
            event,
            TaskEvent::CommandExecution(CommandEvent::Output(CommandOutput {
                output: "hello".to_owned(),
            }))
        );
    }

    #[test]
    fn test_exited_requires_exitcode() {
        let event = resolve(tags::EXITED, json!({"exitcode": 137})).unwrap();
        assert_eq!(
            event,
            TaskEvent::CommandExecution(CommandEvent::Exited(CommandExited { exit_code: 137 }))
        );

        let err = resolve(tags::EXITED, json!({})).unwrap_err();
        assert!(matches!(err, ProtocolError::MalformedPayload { .. }));
    }

    #[test]
    fn test_foreign_tags_do_not_resolve_here() {
        // "Pause" is valid under three other kinds; this registry must still
        // reject it in its own name.
        let err = resolve("Pause", json!({})).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::UnknownTag {
                context: CONTEXT,
                tag: "Pause".to_owned(),
            }
        );
    }
}
