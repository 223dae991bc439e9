//! Wire envelopes.
//!
//! An envelope is the outer unit of a single message: an identifier, a kind,
//! and the fully resolved payload for that kind. Envelopes are ephemeral -
//! constructed per message, never persisted.
//!
//! The constructors below are the only way outgoing envelopes come to exist:
//! they generate a fresh identifier and accept payloads through the closed
//! payload enums, so every constructible envelope is encodable and no tag
//! string ever crosses the API.

use crate::identifiers::{MessageId, TaskId};
use crate::messages::{RequestPayload, ResponsePayload};
use crate::task::TaskEvent;

/// A single decoded or to-be-encoded message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope {
    Request(RequestEnvelope),
    Response(ResponseEnvelope),
    TaskCommunication(TaskEnvelope),
}

impl Envelope {
    /// The message identifier, regardless of kind.
    pub fn id(&self) -> &MessageId {
        match self {
            Envelope::Request(envelope) => &envelope.id,
            Envelope::Response(envelope) => &envelope.id,
            Envelope::TaskCommunication(envelope) => &envelope.id,
        }
    }
}

/// A client-to-server (or server-to-client) request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestEnvelope {
    pub id: MessageId,
    pub payload: RequestPayload,
}

impl RequestEnvelope {
    /// Build an outgoing request with a fresh identifier.
    pub fn new(payload: impl Into<RequestPayload>) -> Self {
        Self {
            id: MessageId::generate(),
            payload: payload.into(),
        }
    }
}

/// What a response answers: a plain request or a long-running task.
///
/// Both draw from the same response payload set; only the correlation
/// identifier differs. Whether the referenced request or task actually
/// exists is the caller's bookkeeping, not the codec's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Correlation {
    Request(MessageId),
    Task(TaskId),
}

/// A reply, correlated back to the request or task that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEnvelope {
    pub id: MessageId,
    pub correlation: Correlation,
    pub payload: ResponsePayload,
}

impl ResponseEnvelope {
    /// Build an outgoing reply to a request.
    pub fn to_request(request_id: MessageId, payload: impl Into<ResponsePayload>) -> Self {
        Self {
            id: MessageId::generate(),
            correlation: Correlation::Request(request_id),
            payload: payload.into(),
        }
    }

    /// Build an outgoing reply describing a task.
    pub fn to_task(task_id: TaskId, payload: impl Into<ResponsePayload>) -> Self {
        Self {
            id: MessageId::generate(),
            correlation: Correlation::Task(task_id),
            payload: payload.into(),
        }
    }
}

/// An event on a running task's private channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEnvelope {
    pub id: MessageId,
    pub task_id: TaskId,
    pub event: TaskEvent,
}

impl TaskEnvelope {
    /// Build an outgoing task event with a fresh identifier.
    pub fn new(task_id: TaskId, event: impl Into<TaskEvent>) -> Self {
        Self {
            id: MessageId::generate(),
            task_id,
            event: event.into(),
        }
    }
}

impl From<RequestEnvelope> for Envelope {
    fn from(envelope: RequestEnvelope) -> Self {
        Envelope::Request(envelope)
    }
}

impl From<ResponseEnvelope> for Envelope {
    fn from(envelope: ResponseEnvelope) -> Self {
        Envelope::Response(envelope)
    }
}

impl From<TaskEnvelope> for Envelope {
    fn from(envelope: TaskEnvelope) -> Self {
        Envelope::TaskCommunication(envelope)
    }
}
