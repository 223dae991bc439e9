//! # Envelope Parser - Inbound Message Decoding
//!
//! ## Purpose
//!
//! Decodes one wire frame into a fully typed [`Envelope`]. Parsing is
//! staged: the identifier and numeric kind are lifted first, the matching
//! domain decoder resolves its tag against its own closed registry, and only
//! then is the body strictly deserialized into the concrete payload shape.
//! For task communication the dispatch cascades a second time, into the
//! event registry owned by the already-resolved task kind.
//!
//! ## Architecture Role
//!
//! ```text
//! wire text → [parse_envelope] → kind dispatch → tag registry → typed payload
//!                                     │
//!                                     └ task kind → that kind's event registry
//! ```
//!
//! Every failure is a typed [`ProtocolError`]; no partial envelope is ever
//! returned. Translating a failure into a wire-level `Error` response is the
//! caller's job - the parser performs no retries and no recovery.

use remlink_types::{
    CommandExecutionRequest, Correlation, Envelope, ErrorResponse, MessageId, PlayAudioRequest,
    PlayVideoRequest, RequestEnvelope, RequestPayload, ResponseEnvelope, ResponsePayload,
    StreamingRequest, TaskEnvelope, TaskId, TaskKind, TaskLaunchResponse, TextResponse,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::trace;

use crate::constants::{self, EnvelopeKind};
use crate::error::{ProtocolError, ProtocolResult, TagContext};
use crate::task_events;

/// Envelope with the header fields lifted and the body left uninterpreted.
///
/// Fields for all three kinds are optional here; the per-kind decoders
/// require the ones their kind mandates.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEnvelope {
    #[serde(default)]
    id: Option<String>,
    #[serde(rename = "type", default)]
    kind: Option<i64>,
    #[serde(default)]
    request_type: Option<String>,
    #[serde(default)]
    response_type: Option<String>,
    #[serde(default)]
    request_id: Option<String>,
    #[serde(default)]
    task_id: Option<String>,
    #[serde(default)]
    task_type: Option<String>,
    #[serde(default)]
    event_type: Option<String>,
    #[serde(default)]
    body: Value,
}

/// Decode one wire message into a fully typed envelope.
pub fn parse_envelope(input: &str) -> ProtocolResult<Envelope> {
    let raw: RawEnvelope = serde_json::from_str(input).map_err(|err| {
        ProtocolError::MalformedEnvelope {
            detail: err.to_string(),
        }
    })?;

    let id = MessageId::from(require(raw.id, "id")?);
    let kind_raw = require(raw.kind, "type")?;
    let kind = u8::try_from(kind_raw)
        .ok()
        .and_then(|value| EnvelopeKind::try_from(value).ok())
        .ok_or(ProtocolError::UnknownKind { kind: kind_raw })?;
    trace!(kind = ?kind, id = %id, "decoding envelope");

    match kind {
        EnvelopeKind::Request => parse_request(id, raw.request_type, raw.body),
        EnvelopeKind::Response => parse_response(
            id,
            raw.response_type,
            raw.request_id,
            raw.task_id,
            raw.body,
        ),
        EnvelopeKind::TaskCommunication => {
            parse_task_communication(id, raw.task_id, raw.task_type, raw.event_type, raw.body)
        }
    }
}

fn parse_request(
    id: MessageId,
    request_type: Option<String>,
    body: Value,
) -> ProtocolResult<Envelope> {
    let tag = require(request_type, "requestType")?;
    let payload = resolve_request(&tag, body)?;
    Ok(Envelope::Request(RequestEnvelope { id, payload }))
}

/// Request registry: `requestType` tag to payload shape, strict and closed.
fn resolve_request(tag: &str, body: Value) -> ProtocolResult<RequestPayload> {
    match tag {
        constants::request::COMMAND_EXECUTION => {
            decode_body::<CommandExecutionRequest>(TagContext::Request, tag, body)
                .map(RequestPayload::CommandExecution)
        }
        constants::request::PLAY_AUDIO => {
            decode_body::<PlayAudioRequest>(TagContext::Request, tag, body)
                .map(RequestPayload::PlayAudio)
        }
        constants::request::PLAY_VIDEO => {
            decode_body::<PlayVideoRequest>(TagContext::Request, tag, body)
                .map(RequestPayload::PlayVideo)
        }
        constants::request::PING => Ok(RequestPayload::Ping),
        constants::request::STREAMING => {
            decode_body::<StreamingRequest>(TagContext::Request, tag, body)
                .map(RequestPayload::Streaming)
        }
        _ => Err(ProtocolError::UnknownTag {
            context: TagContext::Request,
            tag: tag.to_owned(),
        }),
    }
}

fn parse_response(
    id: MessageId,
    response_type: Option<String>,
    request_id: Option<String>,
    task_id: Option<String>,
    body: Value,
) -> ProtocolResult<Envelope> {
    let tag = require(response_type, "responseType")?;
    let payload = resolve_response(&tag, body)?;
    let correlation = match (request_id, task_id) {
        (Some(request), None) => Correlation::Request(MessageId::from(request)),
        (None, Some(task)) => Correlation::Task(TaskId::from(task)),
        (Some(_), Some(_)) => {
            return Err(ProtocolError::MalformedEnvelope {
                detail: "response carries both requestId and taskId".to_owned(),
            });
        }
        (None, None) => {
            return Err(ProtocolError::MalformedEnvelope {
                detail: "response carries neither requestId nor taskId".to_owned(),
            });
        }
    };
    Ok(Envelope::Response(ResponseEnvelope {
        id,
        correlation,
        payload,
    }))
}

/// Response registry, shared by both correlation contexts.
fn resolve_response(tag: &str, body: Value) -> ProtocolResult<ResponsePayload> {
    match tag {
        constants::response::TEXT => {
            decode_body::<TextResponse>(TagContext::Response, tag, body).map(ResponsePayload::Text)
        }
        constants::response::ERROR => decode_body::<ErrorResponse>(TagContext::Response, tag, body)
            .map(ResponsePayload::Error),
        constants::response::TASK_LAUNCH => {
            decode_body::<TaskLaunchResponse>(TagContext::Response, tag, body)
                .map(ResponsePayload::TaskLaunch)
        }
        _ => Err(ProtocolError::UnknownTag {
            context: TagContext::Response,
            tag: tag.to_owned(),
        }),
    }
}

fn parse_task_communication(
    id: MessageId,
    task_id: Option<String>,
    task_type: Option<String>,
    event_type: Option<String>,
    body: Value,
) -> ProtocolResult<Envelope> {
    let task_id = TaskId::from(require(task_id, "taskId")?);
    let task_tag = require(task_type, "taskType")?;
    let event_tag = require(event_type, "eventType")?;

    // First level: the task kind selects which event registry applies.
    let kind = TaskKind::parse(&task_tag).map_err(|_| ProtocolError::UnknownTag {
        context: TagContext::TaskKind,
        tag: task_tag.clone(),
    })?;
    // Second level: the event tag resolves only inside that kind's registry.
    let event = (task_events::registry_for(kind).resolve)(&event_tag, body)?;

    Ok(Envelope::TaskCommunication(TaskEnvelope {
        id,
        task_id,
        event,
    }))
}

/// Strictly deserialize a resolved tag's body into its registered shape.
///
/// A `null` or absent body is treated as the empty object, matching senders
/// that omit the body for parameterless messages.
pub(crate) fn decode_body<T>(context: TagContext, tag: &str, body: Value) -> ProtocolResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let body = match body {
        Value::Null => Value::Object(serde_json::Map::new()),
        other => other,
    };
    serde_json::from_value(body).map_err(|err| ProtocolError::MalformedPayload {
        context,
        tag: tag.to_owned(),
        detail: err.to_string(),
    })
}

fn require<T>(field: Option<T>, name: &'static str) -> ProtocolResult<T> {
    field.ok_or(ProtocolError::MissingField { field: name })
}
