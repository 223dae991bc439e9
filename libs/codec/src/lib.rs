//! # Remlink Protocol Codec
//!
//! ## Purpose
//!
//! This crate contains the "rules" layer of the Remlink remote-control
//! protocol: the cascading tagged-union codec that turns wire JSON frames
//! into fully typed envelopes and back. Three levels of dispatch compose:
//! the numeric envelope kind selects a domain (request / response / task
//! communication), the domain tag selects a payload shape, and for task
//! communication the task kind additionally selects which event-tag
//! namespace applies.
//!
//! ## Architecture Role
//!
//! ```text
//! remlink-types → [remlink-codec] → transport
//!      ↑                ↓               ↓
//! Pure Data        Protocol Rules   Persistent
//! Structures       Tag Registries   Connection
//! Envelopes        Parse/Encode     (not here)
//! ```
//!
//! ## Wire Format
//!
//! One JSON object per frame:
//!
//! ```text
//! {"id":"…","type":0,"requestType":"Ping","body":{}}
//! {"id":"…","type":1,"requestId":"…","responseType":"TextResponse","body":{"text":"hi"}}
//! {"id":"…","type":2,"taskId":"…","taskType":"CommandExecution",
//!  "eventType":"Output","body":{"output":"hello"}}
//! ```
//!
//! Decoding is strict: an unregistered kind or tag is a typed error, never a
//! passthrough value, and a tag valid under one task kind does not resolve
//! under another even when the strings are equal. Encoding infers every tag
//! from the payload's variant identity - the closed enums in
//! `remlink-types` are the registry domain, so an unregistered payload is
//! unrepresentable rather than a runtime failure.
//!
//! ## What This Crate Does NOT Contain
//!
//! - Connection or session management (the transport owns the socket)
//! - Command execution, playback, or streaming implementations
//! - Request/response correlation bookkeeping beyond carrying identifiers
//!
//! The codec is pure and synchronous: no I/O, no shared mutable state, and
//! every registry is a compile-time match table, so decode and encode may
//! run concurrently from any number of threads.

pub mod constants;
pub mod error;
pub mod message_builder;
pub mod parser;
pub mod task_events;

pub use constants::EnvelopeKind;
pub use error::{ProtocolError, ProtocolResult, TagContext};
pub use message_builder::encode_envelope;
pub use parser::parse_envelope;
pub use task_events::registered_event_tags;
