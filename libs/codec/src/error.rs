//! Protocol-level errors for Remlink message processing.
//!
//! Every decode failure is a typed error with enough context to tell the
//! different operator mistakes apart - in particular, an unknown tag names
//! the exact registry that rejected it, and a malformed body under a known
//! tag is reported separately from an unknown tag.

use std::fmt;

use remlink_types::TaskKind;
use thiserror::Error;

/// Which closed tag namespace a lookup ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagContext {
    /// `requestType` on a request envelope.
    Request,
    /// `responseType` on a response envelope.
    Response,
    /// `taskType` on a task-communication envelope.
    TaskKind,
    /// `eventType` inside the named task kind's own registry.
    Event(TaskKind),
}

impl fmt::Display for TagContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagContext::Request => f.write_str("request"),
            TagContext::Response => f.write_str("response"),
            TagContext::TaskKind => f.write_str("task kind"),
            TagContext::Event(kind) => write!(f, "{} event", kind.as_str()),
        }
    }
}

/// Remlink codec errors.
///
/// Decode errors are recoverable per message: the caller is expected to
/// translate them into a wire-level `Error` response rather than tearing
/// down the connection. The codec itself never retries and never returns a
/// partially resolved envelope.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// The outer frame is not a parseable envelope object, or its header
    /// fields are structurally inconsistent (e.g. a response carrying both
    /// correlation identifiers).
    #[error("malformed envelope: {detail}")]
    MalformedEnvelope { detail: String },

    /// The numeric `type` discriminant is outside the registered set.
    #[error("unknown envelope kind: {kind}")]
    UnknownKind { kind: i64 },

    /// A header field required by the resolved kind is absent.
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    /// A tag string is not registered in the context it was presented in.
    /// Resolution never falls through to another context's registry.
    #[error("unknown {context} tag `{tag}`")]
    UnknownTag { context: TagContext, tag: String },

    /// The tag resolved, but the body does not deserialize into the shape
    /// registered for it.
    #[error("malformed {context} payload for tag `{tag}`: {detail}")]
    MalformedPayload {
        context: TagContext,
        tag: String,
        detail: String,
    },

    /// Encode-side serialization failure. This indicates a defect in the
    /// calling code, never a malformed network message; do not convert it
    /// into a wire response.
    #[error("envelope serialization failed: {detail}")]
    Serialization { detail: String },
}

/// Result type for codec operations.
pub type ProtocolResult<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_context_names_its_task_kind() {
        let err = ProtocolError::UnknownTag {
            context: TagContext::Event(TaskKind::CommandExecution),
            tag: "Bogus".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "unknown CommandExecution event tag `Bogus`"
        );
    }

    #[test]
    fn test_unknown_tag_and_malformed_payload_are_distinct() {
        let unknown = ProtocolError::UnknownTag {
            context: TagContext::Request,
            tag: "Reboot".to_owned(),
        };
        let malformed = ProtocolError::MalformedPayload {
            context: TagContext::Request,
            tag: "Reboot".to_owned(),
            detail: "missing field `command`".to_owned(),
        };
        assert_ne!(unknown, malformed);
    }
}
