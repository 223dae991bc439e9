//! # Remlink Types
//!
//! Pure data structures for the Remlink remote-control wire protocol:
//! identifiers, status codes, request/response payload shapes, task kinds
//! with their event families, and the envelope structs that tie them
//! together.
//!
//! ## Design Philosophy
//!
//! This crate holds data, not rules. Everything that interprets bytes -
//! tag registries, envelope parsing, tag inference for encoding - lives in
//! `remlink-codec`. The split keeps payload definitions dependency-light and
//! lets transports and application code share types without pulling in the
//! codec.
//!
//! The payload sets are deliberately closed enums. Encoding derives every
//! wire tag from variant identity, so "payload with no registered tag" is
//! not a runtime error here - it is unrepresentable.

pub mod envelope;
pub mod identifiers;
pub mod messages;
pub mod status;
pub mod task;

pub use envelope::{Correlation, Envelope, RequestEnvelope, ResponseEnvelope, TaskEnvelope};
pub use identifiers::{MessageId, TaskId};
pub use messages::{
    CommandExecutionRequest, ErrorResponse, PlayAudioRequest, PlayVideoRequest, RequestPayload,
    ResponsePayload, StreamingRequest, TaskLaunchResponse, TextResponse,
};
pub use status::{Status, UnparseableStatus};
pub use task::{
    AudioEvent, ChangeFps, CommandEvent, CommandExited, CommandInput, CommandOutput, StatusRequest,
    StreamingEvent, TaskEvent, TaskKind, UnknownTaskKind, VideoEvent,
};
