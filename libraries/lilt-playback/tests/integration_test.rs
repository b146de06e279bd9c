//! Integration tests for the playback controller
//!
//! These tests drive the controller through realistic listening sessions
//! and check what it asks the transport and the view to do.

mod test_helpers;

use lilt_playback::{
    ControllerEvent, PlaybackConfig, PlaybackController, PlaybackError, PlayerCommand, Playlist,
    RepeatMode, StartPosition, TransportEvent,
};
use test_helpers::*;

// ===== Construction =====

#[test]
fn test_empty_playlist_fails_before_transport() {
    let result = PlaybackController::new(
        vec![],
        MockTransport::new(200.0),
        MockView::default(),
        PlaybackConfig::default(),
    );

    assert!(matches!(result, Err(PlaybackError::EmptyPlaylist)));
}

#[test]
fn test_construction_loads_start_track_and_refreshes_once() {
    let controller = create_controller(5, 4, RepeatMode::RepeatAll);

    assert_eq!(controller.transport().commands, vec![Command::Load("music-4".into())]);
    assert_eq!(controller.view().refresh_count(), 1);
    assert_eq!(
        controller.view().renders,
        vec![Render::Refresh {
            index: 4,
            name: "Track 4".into()
        }]
    );
}

#[test]
fn test_construction_from_parsed_playlist() {
    let playlist = Playlist::from_json(
        r#"[
            {"name": "Harley bike", "artist": "Allen Walker", "src": "music-1"},
            {"name": "Faded", "artist": "Alan Walker", "src": "music-2"},
            {"name": "Stay", "artist": "The Kid LAROI", "src": "music-3"}
        ]"#,
    )
    .unwrap();

    let config = PlaybackConfig {
        start: StartPosition::Index(2),
        ..Default::default()
    };
    let controller = PlaybackController::with_playlist(
        playlist,
        MockTransport::new(120.0),
        MockView::default(),
        config,
    )
    .unwrap();

    assert_eq!(controller.current_track().name, "Faded");
    assert_eq!(controller.playlist().len(), 3);
}

#[test]
fn test_seeded_random_start_is_reproducible() {
    let config = PlaybackConfig {
        seed: Some(1234),
        ..Default::default()
    };

    let a = PlaybackController::new(
        create_tracks(10),
        MockTransport::new(200.0),
        MockView::default(),
        config.clone(),
    )
    .unwrap();
    let b = PlaybackController::new(
        create_tracks(10),
        MockTransport::new(200.0),
        MockView::default(),
        config,
    )
    .unwrap();

    assert_eq!(a.current_index(), b.current_index());
}

// ===== Navigation =====

#[test]
fn test_every_navigation_refreshes_exactly_once() {
    let mut controller = create_controller(4, 1, RepeatMode::RepeatAll);
    controller.view_mut().clear();

    controller.next();
    assert_eq!(controller.view().refresh_count(), 1);

    controller.view_mut().clear();
    controller.previous();
    assert_eq!(controller.view().refresh_count(), 1);

    controller.view_mut().clear();
    controller.select_track(3).unwrap();
    assert_eq!(controller.view().refresh_count(), 1);

    controller.view_mut().clear();
    controller.on_track_ended();
    assert_eq!(controller.view().refresh_count(), 1);
}

#[test]
fn test_every_mode_change_refreshes_exactly_once() {
    let mut controller = create_controller(3, 2, RepeatMode::RepeatAll);
    controller.view_mut().clear();

    controller.cycle_mode();
    assert_eq!(
        controller.view().renders,
        vec![Render::Refresh {
            index: 2,
            name: "Track 2".into()
        }]
    );

    controller.view_mut().clear();
    controller.set_mode(RepeatMode::RepeatAll);
    assert_eq!(controller.view().refresh_count(), 1);
    assert_eq!(controller.transport().loads(), vec!["music-2"]);
}

#[test]
fn test_full_cycle_through_playlist() {
    let mut controller = create_controller(4, 2, RepeatMode::RepeatAll);

    for _ in 0..4 {
        controller.next();
    }

    assert_eq!(controller.current_index(), 2);
    assert_eq!(
        controller.transport().loads(),
        vec!["music-2", "music-3", "music-4", "music-1", "music-2"]
    );
}

#[test]
fn test_invalid_selection_leaves_session_usable() {
    let mut controller = create_controller(3, 1, RepeatMode::RepeatAll);

    let err = controller.select_track(7).unwrap_err();
    assert_eq!(err.to_string(), "Invalid track index 7 (playlist has 3 tracks)");
    assert_eq!(controller.current_index(), 1);

    controller.next();
    assert_eq!(controller.current_index(), 2);
}

// ===== End of Track =====

#[test]
fn test_repeat_all_wraps_at_end_of_playlist() {
    let mut controller = create_controller(3, 3, RepeatMode::RepeatAll);
    controller.on_track_ended();

    assert_eq!(controller.current_index(), 1);
    assert_eq!(controller.transport().loads(), vec!["music-3", "music-1"]);
}

#[test]
fn test_repeat_one_does_not_reload() {
    let mut controller = create_controller(3, 2, RepeatMode::RepeatOne);

    for _ in 0..5 {
        controller.on_track_ended();
    }

    assert_eq!(controller.current_index(), 2);
    assert_eq!(controller.transport().loads(), vec!["music-2"]);
    assert!(controller.is_playing());
}

#[test]
fn test_shuffle_session_never_repeats_back_to_back() {
    let mut controller = create_controller(6, 1, RepeatMode::Shuffle);

    let mut previous = controller.current_index();
    for _ in 0..100 {
        controller.on_track_ended();
        let current = controller.current_index();
        assert_ne!(current, previous);
        assert!((1..=6).contains(&current));
        previous = current;
    }
}

#[test]
fn test_shuffle_with_two_tracks_alternates() {
    let mut controller = create_controller(2, 1, RepeatMode::Shuffle);

    controller.on_track_ended();
    assert_eq!(controller.current_index(), 2);
    controller.on_track_ended();
    assert_eq!(controller.current_index(), 1);
}

// ===== Progress and Seek =====

#[test]
fn test_progress_ticks_render_formatted_times() {
    let mut controller = create_controller(2, 1, RepeatMode::RepeatAll);
    controller.view_mut().clear();

    controller.on_time_progress(5.0, 200.0).unwrap();

    assert_eq!(
        controller.view().renders,
        vec![
            Render::Progress(0.025),
            Render::Times("0:05".into(), "3:20".into())
        ]
    );
}

#[test]
fn test_progress_before_metadata_renders_nothing() {
    let mut controller = create_controller(2, 1, RepeatMode::RepeatAll);
    controller.view_mut().clear();

    let result = controller.on_time_progress(0.0, f64::NAN);

    assert!(matches!(result, Err(PlaybackError::InvalidDuration(_))));
    assert!(controller.view().renders.is_empty());
}

#[test]
fn test_seek_then_continue_playing() {
    let mut controller = create_controller(2, 1, RepeatMode::RepeatAll);
    controller.pause();

    controller.seek_to(0.5).unwrap();

    let commands = &controller.transport().commands;
    assert_eq!(commands[commands.len() - 2..], [Command::Seek(100.0), Command::Play]);
    assert!(controller.is_playing());
}

// ===== Event Dispatch =====

#[test]
fn test_listening_session_via_events() {
    let mut controller = create_controller(3, 1, RepeatMode::RepeatAll);

    let events: Vec<ControllerEvent> = vec![
        PlayerCommand::Play.into(),
        TransportEvent::TimeProgress {
            current: 100.0,
            duration: 200.0,
        }
        .into(),
        TransportEvent::Ended.into(),
        PlayerCommand::CycleMode.into(),
        TransportEvent::Ended.into(),
        PlayerCommand::Previous.into(),
    ];

    for event in events {
        controller.dispatch(event).unwrap();
    }

    // Ended in RepeatAll -> 2, RepeatOne keeps 2, Previous -> 1
    assert_eq!(controller.current_index(), 1);
    assert_eq!(controller.mode(), RepeatMode::RepeatOne);
    assert_eq!(controller.transport().loads(), vec!["music-1", "music-2", "music-1"]);
}

#[test]
fn test_into_parts_returns_collaborators() {
    let mut controller = create_controller(2, 1, RepeatMode::RepeatAll);
    controller.next();

    let (transport, view) = controller.into_parts();
    assert_eq!(transport.loads(), vec!["music-1", "music-2"]);
    assert_eq!(view.refresh_count(), 2);
}
