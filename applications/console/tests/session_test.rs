//! End-to-end tests for the console session
//!
//! Scripts are fed through `Session::run` and the printed screen is checked.

use lilt_console::{ConsoleConfig, Session};
use lilt_playback::{Playlist, RepeatMode, StartPosition, Track};
use std::io::Cursor;

fn playlist(n: usize) -> Playlist {
    Playlist::new(
        (1..=n)
            .map(|i| Track::new(format!("Song {}", i), "Band", format!("music-{}", i)))
            .collect(),
    )
    .unwrap()
}

fn config(mode: RepeatMode) -> ConsoleConfig {
    let mut config = ConsoleConfig::default();
    config.track_length_secs = 3.0;
    config.player.initial_mode = mode;
    config.player.start = StartPosition::Index(1);
    config.player.seed = Some(5);
    config
}

fn run(session: &mut Session<Vec<u8>>, script: &str) {
    session.run(Cursor::new(script.to_string())).unwrap();
}

#[test]
fn initial_screen_shows_first_track_paused() {
    let session = Session::new(&config(RepeatMode::RepeatAll), playlist(3), Vec::new()).unwrap();
    let text = String::from_utf8(session.into_writer()).unwrap();

    assert!(text.contains("Now playing: Song 1 - Band"));
    assert!(text.contains("Mode: Playlist looped (repeat)"));
    assert!(text.contains("State: paused"));
}

#[test]
fn ticking_through_a_track_advances_in_repeat_all() {
    let mut session =
        Session::new(&config(RepeatMode::RepeatAll), playlist(3), Vec::new()).unwrap();

    run(&mut session, "play\ntick 4\n");

    let controller = session.controller();
    assert_eq!(controller.current_index(), 2);
    assert!(controller.is_playing());
    assert_eq!(controller.transport().loaded(), Some("music-2"));
    assert_eq!(controller.transport().position(), 1.0);

    let text = String::from_utf8(session.into_writer()).unwrap();
    assert!(text.contains("[#############-------] 0:02 / 0:03"));
    assert!(text.contains("Now playing: Song 2 - Band"));
}

#[test]
fn repeat_one_keeps_the_track() {
    let mut session =
        Session::new(&config(RepeatMode::RepeatOne), playlist(3), Vec::new()).unwrap();

    run(&mut session, "play\ntick 10\n");

    assert_eq!(session.controller().current_index(), 1);
    assert_eq!(session.controller().transport().loaded(), Some("music-1"));
}

#[test]
fn shuffle_moves_to_another_track() {
    let mut session = Session::new(&config(RepeatMode::Shuffle), playlist(5), Vec::new()).unwrap();

    run(&mut session, "play\ntick 3\n");

    assert_ne!(session.controller().current_index(), 1);
}

#[test]
fn paused_session_does_not_advance() {
    let mut session =
        Session::new(&config(RepeatMode::RepeatAll), playlist(3), Vec::new()).unwrap();

    run(&mut session, "tick 10\n");

    assert_eq!(session.controller().current_index(), 1);
    assert_eq!(session.controller().transport().position(), 0.0);
}

#[test]
fn navigation_and_mode_commands() {
    let mut session =
        Session::new(&config(RepeatMode::RepeatAll), playlist(3), Vec::new()).unwrap();

    run(&mut session, "prev\nselect 2\nnext\nmode\nmode shuffle\n");

    assert_eq!(session.controller().current_index(), 3);
    assert_eq!(session.controller().mode(), RepeatMode::Shuffle);
}

#[test]
fn errors_are_reported_and_session_continues() {
    let mut session =
        Session::new(&config(RepeatMode::RepeatAll), playlist(3), Vec::new()).unwrap();

    run(&mut session, "select 9\nwarp\nnext\n");

    assert_eq!(session.controller().current_index(), 2);
    let text = String::from_utf8(session.into_writer()).unwrap();
    assert!(text.contains("error: Invalid track index 9 (playlist has 3 tracks)"));
    assert!(text.contains("Unknown command 'warp'"));
}

#[test]
fn quit_stops_reading() {
    let mut session =
        Session::new(&config(RepeatMode::RepeatAll), playlist(3), Vec::new()).unwrap();

    run(&mut session, "next\nquit\nnext\n");

    assert_eq!(session.controller().current_index(), 2);
}

#[test]
fn seek_jumps_the_playhead() {
    let mut session =
        Session::new(&config(RepeatMode::RepeatAll), playlist(3), Vec::new()).unwrap();

    run(&mut session, "seek 0.5\n");

    assert!(session.controller().is_playing());
    assert_eq!(session.controller().transport().position(), 1.5);
}

#[test]
fn leftover_time_carries_into_the_next_track() {
    let mut config = config(RepeatMode::RepeatAll);
    config.track_length_secs = 2.5;
    let mut session = Session::new(&config, playlist(3), Vec::new()).unwrap();

    run(&mut session, "play\ntick 3\n");

    assert_eq!(session.controller().current_index(), 2);
    assert_eq!(session.controller().transport().position(), 0.5);

    run(&mut session, "tick 5\n");

    // 2.0s finish track 2, the last 3.0s run through track 3 (2.5s) into track 1
    assert_eq!(session.controller().current_index(), 1);
    assert_eq!(session.controller().transport().position(), 0.5);
}

#[test]
fn paused_clock_stops_a_long_tick() {
    let mut session =
        Session::new(&config(RepeatMode::RepeatAll), playlist(3), Vec::new()).unwrap();

    session.tick(u64::MAX);

    assert_eq!(session.controller().current_index(), 1);
    assert_eq!(session.controller().transport().position(), 0.0);
}

#[test]
fn oversized_tick_is_rejected() {
    let mut session =
        Session::new(&config(RepeatMode::RepeatOne), playlist(3), Vec::new()).unwrap();

    run(&mut session, "play\ntick 99999999999\n");

    assert_eq!(session.controller().transport().position(), 0.0);
    let text = String::from_utf8(session.into_writer()).unwrap();
    assert!(text.contains("Invalid argument for 'tick'"));
}

#[test]
fn zero_length_tracks_are_refused() {
    let mut config = config(RepeatMode::RepeatAll);
    config.track_length_secs = 0.0;

    assert!(Session::new(&config, playlist(3), Vec::new()).is_err());
}
