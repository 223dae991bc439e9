//! Task kinds and task-communication events.
//!
//! A task is a long-running operation launched by a request and reported on
//! through task-communication envelopes. Each task kind owns its own
//! event-tag namespace; the wire strings deliberately collide across kinds
//! (`Pause` exists under three of them, `StatusRequest` under two), so an
//! event is only meaningful inside the kind that was already resolved.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four long-running task families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    CommandExecution,
    PlayAudio,
    PlayVideo,
    Streaming,
}

/// Error returned when a string is not a registered task kind tag.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown task kind `{0}`")]
pub struct UnknownTaskKind(pub String);

impl TaskKind {
    /// All task kinds, in registry order.
    pub const ALL: [TaskKind; 4] = [
        TaskKind::CommandExecution,
        TaskKind::PlayAudio,
        TaskKind::PlayVideo,
        TaskKind::Streaming,
    ];

    /// Canonical `taskType` wire tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::CommandExecution => "CommandExecution",
            TaskKind::PlayAudio => "PlayAudio",
            TaskKind::PlayVideo => "PlayVideo",
            TaskKind::Streaming => "Streaming",
        }
    }

    /// Parse a `taskType` wire tag, exact match only.
    pub fn parse(input: &str) -> Result<Self, UnknownTaskKind> {
        match input {
            "CommandExecution" => Ok(TaskKind::CommandExecution),
            "PlayAudio" => Ok(TaskKind::PlayAudio),
            "PlayVideo" => Ok(TaskKind::PlayVideo),
            "Streaming" => Ok(TaskKind::Streaming),
            other => Err(UnknownTaskKind(other.to_owned())),
        }
    }
}

impl FromStr for TaskKind {
    type Err = UnknownTaskKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskKind::parse(s)
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TaskKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TaskKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        TaskKind::parse(&raw).map_err(serde::de::Error::custom)
    }
}

// Leaf event payloads. Field keys follow the wire format.

/// Text fed to the remote process's stdin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInput {
    pub input: String,
}

/// A chunk of output captured from the remote process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutput {
    pub output: String,
}

/// Exit notification for a finished command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandExited {
    /// The wire key is all-lowercase `exitcode`.
    #[serde(rename = "exitcode")]
    pub exit_code: i32,
}

/// Playback status probe carrying a numeric status slot.
///
/// Shared shape between the audio and video namespaces; the owning task kind
/// comes from the envelope, never from this struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRequest {
    pub code: i32,
}

/// Change the capture rate of a running stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeFps {
    pub fps: u32,
}

/// Events scoped to a command-execution task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEvent {
    Input(CommandInput),
    Output(CommandOutput),
    /// Ask the remote side to kill the process. Empty body.
    Terminate,
    Exited(CommandExited),
}

/// Events scoped to an audio-playback task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioEvent {
    Pause,
    Continue,
    StatusRequest(StatusRequest),
}

/// Events scoped to a video-playback task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoEvent {
    Pause,
    Continue,
    StatusRequest(StatusRequest),
}

/// Events scoped to a screen-streaming task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamingEvent {
    Pause,
    Resume,
    End,
    ChangeFps(ChangeFps),
}

/// A task-communication event, carried inside the kind that owns its
/// namespace. The `taskType` and `eventType` wire tags are both derived
/// from the variant identity when encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskEvent {
    CommandExecution(CommandEvent),
    PlayAudio(AudioEvent),
    PlayVideo(VideoEvent),
    Streaming(StreamingEvent),
}

impl TaskEvent {
    /// The task kind whose registry this event belongs to.
    pub fn task_kind(&self) -> TaskKind {
        match self {
            TaskEvent::CommandExecution(_) => TaskKind::CommandExecution,
            TaskEvent::PlayAudio(_) => TaskKind::PlayAudio,
            TaskEvent::PlayVideo(_) => TaskKind::PlayVideo,
            TaskEvent::Streaming(_) => TaskKind::Streaming,
        }
    }
}

impl From<CommandEvent> for TaskEvent {
    fn from(event: CommandEvent) -> Self {
        TaskEvent::CommandExecution(event)
    }
}

impl From<AudioEvent> for TaskEvent {
    fn from(event: AudioEvent) -> Self {
        TaskEvent::PlayAudio(event)
    }
}

impl From<VideoEvent> for TaskEvent {
    fn from(event: VideoEvent) -> Self {
        TaskEvent::PlayVideo(event)
    }
}

impl From<StreamingEvent> for TaskEvent {
    fn from(event: StreamingEvent) -> Self {
        TaskEvent::Streaming(event)
    }
}
