//! End-to-end roundtrip equality: every registered variant in every context
//! must survive encode → decode unchanged.

use remlink_codec::{encode_envelope, parse_envelope};
use remlink_types::{
    AudioEvent, ChangeFps, CommandEvent, CommandExecutionRequest, CommandExited, CommandInput,
    CommandOutput, Envelope, ErrorResponse, MessageId, PlayAudioRequest, PlayVideoRequest,
    RequestEnvelope, RequestPayload, ResponseEnvelope, StatusRequest, StreamingEvent,
    StreamingRequest, TaskEnvelope, TaskId, TaskKind, TaskLaunchResponse, TextResponse,
    VideoEvent,
};

/// Helper: encode then decode, assert equality.
fn roundtrip(envelope: Envelope) {
    let frame = encode_envelope(&envelope).expect("encode failed");
    let decoded = parse_envelope(&frame).expect("decode failed");
    assert_eq!(decoded, envelope, "frame: {frame}");
}

#[test]
fn roundtrip_every_request_variant() {
    roundtrip(
        RequestEnvelope::new(CommandExecutionRequest {
            command: "tail -f /var/log/syslog".to_owned(),
        })
        .into(),
    );
    roundtrip(
        RequestEnvelope::new(PlayAudioRequest {
            url: "https://example.com/track.ogg".to_owned(),
            volume: 65,
        })
        .into(),
    );
    roundtrip(
        RequestEnvelope::new(PlayVideoRequest {
            url: "https://example.com/clip.mp4".to_owned(),
            volume: 100,
            full_screen: false,
        })
        .into(),
    );
    roundtrip(RequestEnvelope::new(RequestPayload::Ping).into());
    roundtrip(
        RequestEnvelope::new(StreamingRequest {
            channel_id: "desk-2".to_owned(),
            fps: 15,
        })
        .into(),
    );
}

#[test]
fn roundtrip_every_response_variant_under_both_correlations() {
    let payloads = [
        remlink_types::ResponsePayload::Text(TextResponse {
            text: "command accepted".to_owned(),
        }),
        remlink_types::ResponsePayload::Error(ErrorResponse {
            message: "target not reachable".to_owned(),
        }),
        remlink_types::ResponsePayload::TaskLaunch(TaskLaunchResponse {
            task_id: TaskId::from("task-42"),
            task_kind: TaskKind::CommandExecution,
        }),
    ];

    for payload in payloads {
        roundtrip(ResponseEnvelope::to_request(MessageId::from("req-7"), payload.clone()).into());
        roundtrip(ResponseEnvelope::to_task(TaskId::from("task-42"), payload).into());
    }
}

#[test]
fn roundtrip_every_command_event() {
    let events = [
        CommandEvent::Input(CommandInput {
            input: "whoami".to_owned(),
        }),
        CommandEvent::Output(CommandOutput {
            output: "root\n".to_owned(),
        }),
        CommandEvent::Terminate,
        CommandEvent::Exited(CommandExited { exit_code: -1 }),
    ];
    for event in events {
        roundtrip(TaskEnvelope::new(TaskId::from("task-cmd"), event).into());
    }
}

#[test]
fn roundtrip_every_playback_event() {
    let audio = [
        AudioEvent::Pause,
        AudioEvent::Continue,
        AudioEvent::StatusRequest(StatusRequest { code: 0 }),
    ];
    for event in audio {
        roundtrip(TaskEnvelope::new(TaskId::from("task-audio"), event).into());
    }

    let video = [
        VideoEvent::Pause,
        VideoEvent::Continue,
        VideoEvent::StatusRequest(StatusRequest { code: 3 }),
    ];
    for event in video {
        roundtrip(TaskEnvelope::new(TaskId::from("task-video"), event).into());
    }
}

#[test]
fn roundtrip_every_streaming_event() {
    let events = [
        StreamingEvent::Pause,
        StreamingEvent::Resume,
        StreamingEvent::End,
        StreamingEvent::ChangeFps(ChangeFps { fps: 60 }),
    ];
    for event in events {
        roundtrip(TaskEnvelope::new(TaskId::from("task-stream"), event).into());
    }
}

#[test]
fn decode_command_output_frame() {
    // Hand-written frame, as a remote peer would send it.
    let frame = r#"{
        "id": "6f9b2f3a-8d2e-4f4c-9a61-0c8f6f2b1d11",
        "type": 2,
        "taskId": "task-55",
        "taskType": "CommandExecution",
        "eventType": "Output",
        "body": {"output": "hello"}
    }"#;

    let envelope = parse_envelope(frame).unwrap();
    match envelope {
        Envelope::TaskCommunication(task) => {
            assert_eq!(task.task_id, TaskId::from("task-55"));
            assert_eq!(
                task.event,
                CommandEvent::Output(CommandOutput {
                    output: "hello".to_owned(),
                })
                .into()
            );
        }
        other => panic!("expected task envelope, got {other:?}"),
    }
}

#[test]
fn unicode_payloads_survive_the_wire() {
    roundtrip(
        TaskEnvelope::new(
            TaskId::from("task-cmd"),
            CommandEvent::Output(CommandOutput {
                output: "Привет 世界 🌍\n\ttabbed".to_owned(),
            }),
        )
        .into(),
    );
}
