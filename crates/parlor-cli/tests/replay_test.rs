//! Replay tests against transcripts on disk.

use parlor_cli::{ReplayError, load_transcript, replay, sample_transcript, save_transcript};
use parlor_proto::{RawEvent, Transcript};
use parlor_session::{ConnectionStatus, SessionConfig};

#[tokio::test]
async fn sample_round_trips_through_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("session.cbor");
    let transcript = sample_transcript(14).expect("sample encodes");

    save_transcript(&path, &transcript).await.expect("save");
    let loaded = load_transcript(&path).await.expect("load");

    assert_eq!(loaded, transcript);
}

#[tokio::test]
async fn sample_replay_ends_disconnected() {
    let transcript = sample_transcript(14).expect("sample encodes");

    let (session, stats) =
        replay(transcript, SessionConfig::default().with_protocol_version(14), true)
            .await
            .expect("replay");

    let state = session.state();
    assert_eq!(state.status(), ConnectionStatus::Disconnected);
    assert_eq!(state.status_message(), Some("Scheduled server shutdown"));
    assert_eq!(state.room_directory().len(), 3);
    assert_eq!(state.buddy_list().names(), vec!["alice"]);
    assert_eq!(state.ignore_list().names(), vec!["mallory"]);
    assert_eq!(state.online_users().names(), vec!["alice"]);

    // Login plus two auto-joins
    assert_eq!(stats.commands, 3);
    assert_eq!(stats.status_updates, 3);
    assert_eq!(stats.server_messages, 1);
    // Nine recorded events plus the synthesized login acceptance
    assert_eq!(stats.delivered, 10);
}

#[tokio::test]
async fn replay_without_acceptance_stays_logging_in_until_closed() {
    let mut transcript = sample_transcript(14).expect("sample encodes");
    transcript = transcript.into_iter().take(3).collect();

    let (session, stats) =
        replay(transcript, SessionConfig::default(), false).await.expect("replay");

    assert_eq!(session.state().status(), ConnectionStatus::LoggingIn);
    assert_eq!(stats.delivered, 3);
}

#[tokio::test]
async fn incompatible_sample_never_connects() {
    let transcript = sample_transcript(13).expect("sample encodes");

    let (session, stats) =
        replay(transcript, SessionConfig::default().with_protocol_version(14), true)
            .await
            .expect("replay");

    assert_ne!(session.state().status(), ConnectionStatus::Connected);
    // Disconnect plus the two auto-joins from the room list
    assert_eq!(stats.commands, 3);
}

#[tokio::test]
async fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");

    let result = load_transcript(&dir.path().join("absent.cbor")).await;

    assert!(matches!(result, Err(ReplayError::Io(_))));
}

#[tokio::test]
async fn corrupt_file_is_protocol_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("corrupt.cbor");
    tokio::fs::write(&path, [0xff, 0x00, 0x13]).await.expect("write");

    let result = load_transcript(&path).await;

    assert!(matches!(result, Err(ReplayError::Protocol(_))));
}

#[tokio::test]
async fn malformed_events_do_not_abort_replay() {
    let transcript: Transcript = [
        RawEvent::new(".Event_ServerIdentification.ext", vec![0x00]),
        RawEvent::new(".Event_ServerMessage.ext", vec![0xa1]),
    ]
    .into_iter()
    .collect();

    let (session, stats) =
        replay(transcript, SessionConfig::default(), false).await.expect("replay");

    assert_eq!(session.state().status(), ConnectionStatus::Disconnected);
    assert_eq!(stats.delivered, 2);
    assert_eq!(stats.commands, 0);
}
