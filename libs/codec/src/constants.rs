//! # Protocol Constants - Remlink Wire Vocabulary
//!
//! ## Purpose
//!
//! Central registry of the wire-level discriminants and tag strings used by
//! the Remlink protocol. These values are the protocol; they must remain
//! stable across client and server builds, and both decode and encode paths
//! resolve against the same constants so the two directions cannot drift.
//!
//! ## Architecture Role
//!
//! ```text
//! parser.rs ──┐                  ┌── message_builder.rs
//!             ├── [constants] ───┤
//! task_events ┘                  └── task_events (encode half)
//! ```
//!
//! Task kind tags are the one exception: they live on
//! [`remlink_types::TaskKind`] itself because `TaskLaunchResponse` also
//! serializes them inside a payload body.

use num_enum::TryFromPrimitive;

/// Outer envelope discriminant - the numeric `type` field.
///
/// The values are fixed by the first protocol generation and shared with
/// every deployed peer; never renumber.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum EnvelopeKind {
    Request = 0,
    Response = 1,
    TaskCommunication = 2,
}

/// `requestType` tags.
pub mod request {
    pub const COMMAND_EXECUTION: &str = "CommandExecution";
    pub const PLAY_AUDIO: &str = "PlayAudio";
    pub const PLAY_VIDEO: &str = "PlayVideo";
    pub const PING: &str = "Ping";
    pub const STREAMING: &str = "Streaming";
}

/// `responseType` tags.
pub mod response {
    pub const TEXT: &str = "TextResponse";
    pub const ERROR: &str = "Error";
    pub const TASK_LAUNCH: &str = "TaskLaunch";
}

/// `eventType` tags, one namespace per task kind.
///
/// Strings collide across namespaces (`Pause`, `StatusRequest`); a tag is
/// only ever resolved inside the namespace of an already-resolved task kind.
pub mod event {
    pub mod command {
        pub const INPUT: &str = "Input";
        pub const OUTPUT: &str = "Output";
        pub const TERMINATE: &str = "Terminate";
        pub const EXITED: &str = "Exited";
    }

    pub mod audio {
        pub const PAUSE: &str = "Pause";
        pub const CONTINUE: &str = "Continue";
        pub const STATUS_REQUEST: &str = "StatusRequest";
    }

    pub mod video {
        pub const PAUSE: &str = "Pause";
        pub const CONTINUE: &str = "Continue";
        pub const STATUS_REQUEST: &str = "StatusRequest";
    }

    pub mod streaming {
        pub const PAUSE: &str = "Pause";
        pub const RESUME: &str = "Resume";
        pub const END: &str = "End";
        pub const CHANGE_FPS: &str = "ChangeFps";
    }
}
