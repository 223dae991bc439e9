//! # Message Builder - Outbound Encoding
//!
//! ## Purpose
//!
//! Serializes a typed [`Envelope`] into its wire JSON text. The builder is
//! the inverse of the parse registries: the numeric kind comes from the
//! envelope's own variant, and `requestType` / `responseType` / `taskType` /
//! `eventType` are all inferred bottom-up from payload variant identity.
//! Callers never supply a tag string, so the encode table cannot disagree
//! with what they meant.
//!
//! ## Architecture Role
//!
//! ```text
//! typed Envelope → [encode_envelope] → tag inference → wire JSON text
//!                        │
//!                        └ task events defer to their kind's own module
//! ```
//!
//! Fresh identifiers are the envelope constructors' job, not the encoder's;
//! encoding the same envelope twice yields identical bytes.

use remlink_types::{
    Correlation, Envelope, RequestEnvelope, RequestPayload, ResponseEnvelope, ResponsePayload,
    TaskEnvelope,
};
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::trace;

use crate::constants::{self, EnvelopeKind};
use crate::error::{ProtocolError, ProtocolResult};
use crate::task_events;

/// Encode a typed envelope into one wire frame.
///
/// A failure here is a defect in the calling code, never a malformed network
/// message; it should not be converted into a wire-level error response.
pub fn encode_envelope(envelope: &Envelope) -> ProtocolResult<String> {
    let value = match envelope {
        Envelope::Request(request) => encode_request(request)?,
        Envelope::Response(response) => encode_response(response)?,
        Envelope::TaskCommunication(task) => encode_task_communication(task)?,
    };
    serde_json::to_string(&value).map_err(serialization_error)
}

fn encode_request(envelope: &RequestEnvelope) -> ProtocolResult<Value> {
    let (tag, body) = match &envelope.payload {
        RequestPayload::CommandExecution(request) => {
            (constants::request::COMMAND_EXECUTION, to_body(request)?)
        }
        RequestPayload::PlayAudio(request) => (constants::request::PLAY_AUDIO, to_body(request)?),
        RequestPayload::PlayVideo(request) => (constants::request::PLAY_VIDEO, to_body(request)?),
        RequestPayload::Ping => (constants::request::PING, empty_body()),
        RequestPayload::Streaming(request) => (constants::request::STREAMING, to_body(request)?),
    };
    trace!(tag, "encoding request envelope");
    Ok(json!({
        "id": envelope.id.as_str(),
        "type": EnvelopeKind::Request as u8,
        "requestType": tag,
        "body": body,
    }))
}

fn encode_response(envelope: &ResponseEnvelope) -> ProtocolResult<Value> {
    let (tag, body) = match &envelope.payload {
        ResponsePayload::Text(response) => (constants::response::TEXT, to_body(response)?),
        ResponsePayload::Error(response) => (constants::response::ERROR, to_body(response)?),
        ResponsePayload::TaskLaunch(response) => {
            (constants::response::TASK_LAUNCH, to_body(response)?)
        }
    };
    trace!(tag, "encoding response envelope");
    let mut value = json!({
        "id": envelope.id.as_str(),
        "type": EnvelopeKind::Response as u8,
        "responseType": tag,
        "body": body,
    });
    // Exactly one correlation key, selected by the correlation variant.
    match &envelope.correlation {
        Correlation::Request(request_id) => {
            value["requestId"] = Value::String(request_id.as_str().to_owned());
        }
        Correlation::Task(task_id) => {
            value["taskId"] = Value::String(task_id.as_str().to_owned());
        }
    }
    Ok(value)
}

fn encode_task_communication(envelope: &TaskEnvelope) -> ProtocolResult<Value> {
    let kind = envelope.event.task_kind();
    let (event_tag, body) = task_events::encode_event(&envelope.event)?;
    trace!(task_kind = kind.as_str(), event = event_tag, "encoding task event");
    Ok(json!({
        "id": envelope.id.as_str(),
        "type": EnvelopeKind::TaskCommunication as u8,
        "taskId": envelope.task_id.as_str(),
        "taskType": kind.as_str(),
        "eventType": event_tag,
        "body": body,
    }))
}

pub(crate) fn to_body<T: Serialize>(payload: &T) -> ProtocolResult<Value> {
    serde_json::to_value(payload).map_err(serialization_error)
}

pub(crate) fn empty_body() -> Value {
    Value::Object(Map::new())
}

fn serialization_error(err: serde_json::Error) -> ProtocolError {
    ProtocolError::Serialization {
        detail: err.to_string(),
    }
}
