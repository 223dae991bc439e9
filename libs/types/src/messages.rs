//! Request and response payload shapes.
//!
//! These are the concrete bodies a `requestType` / `responseType` tag
//! resolves to. Each set is a closed enum: the codec infers the wire tag
//! from the variant identity when encoding, so a payload that is not in the
//! enum cannot be constructed in the first place.

use serde::{Deserialize, Serialize};

use crate::identifiers::TaskId;
use crate::task::TaskKind;

/// Run a shell command on the controlled host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandExecutionRequest {
    pub command: String,
}

/// Start audio playback from a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayAudioRequest {
    pub url: String,
    pub volume: u32,
}

/// Start video playback from a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayVideoRequest {
    pub url: String,
    pub volume: u32,
    pub full_screen: bool,
}

/// Start streaming the controlled host's screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamingRequest {
    pub channel_id: String,
    pub fps: u32,
}

/// One payload per `requestType` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestPayload {
    CommandExecution(CommandExecutionRequest),
    PlayAudio(PlayAudioRequest),
    PlayVideo(PlayVideoRequest),
    /// Liveness probe; carries no body.
    Ping,
    Streaming(StreamingRequest),
}

impl From<CommandExecutionRequest> for RequestPayload {
    fn from(request: CommandExecutionRequest) -> Self {
        RequestPayload::CommandExecution(request)
    }
}

impl From<PlayAudioRequest> for RequestPayload {
    fn from(request: PlayAudioRequest) -> Self {
        RequestPayload::PlayAudio(request)
    }
}

impl From<PlayVideoRequest> for RequestPayload {
    fn from(request: PlayVideoRequest) -> Self {
        RequestPayload::PlayVideo(request)
    }
}

impl From<StreamingRequest> for RequestPayload {
    fn from(request: StreamingRequest) -> Self {
        RequestPayload::Streaming(request)
    }
}

/// Free-text reply to a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextResponse {
    pub text: String,
}

/// Protocol-level failure reply.
///
/// Decode failures on the receiving side are reported back through this
/// shape; the codec itself only carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Announces that a request spawned a long-running task.
///
/// Subsequent task-communication envelopes reference the `taskId` issued
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskLaunchResponse {
    #[serde(rename = "taskId")]
    pub task_id: TaskId,
    #[serde(rename = "taskType")]
    pub task_kind: TaskKind,
}

/// One payload per `responseType` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponsePayload {
    Text(TextResponse),
    Error(ErrorResponse),
    TaskLaunch(TaskLaunchResponse),
}

impl From<TextResponse> for ResponsePayload {
    fn from(response: TextResponse) -> Self {
        ResponsePayload::Text(response)
    }
}

impl From<ErrorResponse> for ResponsePayload {
    fn from(response: ErrorResponse) -> Self {
        ResponsePayload::Error(response)
    }
}

impl From<TaskLaunchResponse> for ResponsePayload {
    fn from(response: TaskLaunchResponse) -> Self {
        ResponsePayload::TaskLaunch(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_keys_are_camel_case() {
        let request = PlayVideoRequest {
            url: "https://example.com/clip.mp4".to_owned(),
            volume: 80,
            full_screen: true,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["fullScreen"], serde_json::json!(true));

        let request = StreamingRequest {
            channel_id: "main".to_owned(),
            fps: 30,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["channelId"], serde_json::json!("main"));
    }

    #[test]
    fn test_task_launch_uses_task_type_key() {
        let response = TaskLaunchResponse {
            task_id: TaskId::from("t-1"),
            task_kind: TaskKind::Streaming,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["taskId"], serde_json::json!("t-1"));
        assert_eq!(json["taskType"], serde_json::json!("Streaming"));
    }

    #[test]
    fn test_payloads_convert_without_naming_tags() {
        let payload: RequestPayload = CommandExecutionRequest {
            command: "uptime".to_owned(),
        }
        .into();
        assert!(matches!(payload, RequestPayload::CommandExecution(_)));

        let payload: ResponsePayload = ErrorResponse {
            message: "nope".to_owned(),
        }
        .into();
        assert!(matches!(payload, ResponsePayload::Error(_)));
    }
}
