use super::*;

#[test]
fn starts_idle() {
    assert_eq!(PlaybackState::default(), PlaybackState::Idle);
}

#[test]
fn play_pause_stop_play_ends_playing() {
    let end = [
        PlaybackCommand::Play,
        PlaybackCommand::Pause,
        PlaybackCommand::Stop,
        PlaybackCommand::Play,
    ]
    .into_iter()
    .fold(PlaybackState::Idle, PlaybackState::apply);
    assert_eq!(end, PlaybackState::Playing);
}

#[test]
fn pause_while_idle_is_accepted() {
    assert_eq!(PlaybackState::Idle.apply(PlaybackCommand::Pause), PlaybackState::Paused);
}

#[test]
fn stop_returns_to_idle_from_every_state() {
    for state in [PlaybackState::Idle, PlaybackState::Playing, PlaybackState::Paused] {
        assert_eq!(state.apply(PlaybackCommand::Stop), PlaybackState::Idle);
    }
}

#[test]
fn is_playing_only_when_playing() {
    assert!(PlaybackState::Playing.is_playing());
    assert!(!PlaybackState::Paused.is_playing());
}
