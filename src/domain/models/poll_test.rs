use std::time::Duration;

use super::NextPoll;
use super::PollPhase;
use super::PollState;
use super::Schedule;
use super::SessionToken;

fn schedule() -> Schedule {
    return Schedule {
        initial: Duration::from_millis(2000),
        retry: Duration::from_millis(5000),
        steady: Duration::from_millis(60000),
    };
}

#[test]
fn it_starts_unauthenticated_with_an_empty_bearer() {
    let state = PollState::new(schedule());

    assert_eq!(state.phase(), PollPhase::Unauthenticated);
    assert_eq!(state.bearer(), "");
    assert!(!state.is_loaded());
}

#[test]
fn it_stores_the_startup_token_and_returns_the_initial_delay() {
    let mut state = PollState::new(schedule());
    let delay = state.begin(Some(SessionToken::new("abc")));

    assert_eq!(delay, Duration::from_millis(2000));
    assert_eq!(state.phase(), PollPhase::PollingRetry);
    assert_eq!(state.bearer(), "abc");
}

#[test]
fn it_keeps_an_empty_bearer_when_the_startup_login_fails() {
    let mut state = PollState::new(schedule());
    let delay = state.begin(None);

    assert_eq!(delay, Duration::from_millis(2000));
    assert_eq!(state.bearer(), "");
}

#[test]
fn it_moves_to_the_steady_interval_on_the_first_success() {
    let mut state = PollState::new(schedule());
    state.begin(Some(SessionToken::new("abc")));

    let next = state.fetch_succeeded();

    assert_eq!(next, NextPoll::After(Duration::from_millis(60000)));
    assert_eq!(state.phase(), PollPhase::PollingSteady);
    assert!(state.is_loaded());
}

#[test]
fn it_keeps_the_token_through_a_401() {
    let mut state = PollState::new(schedule());
    state.begin(Some(SessionToken::new("abc")));

    state.fetch_unauthorized();

    assert_eq!(state.phase(), PollPhase::Reauthenticating);
    assert_eq!(state.bearer(), "abc");
}

#[test]
fn it_retries_quickly_after_a_401_before_the_first_load() {
    let mut state = PollState::new(schedule());
    state.begin(Some(SessionToken::new("abc")));
    state.fetch_unauthorized();

    let next = state.relogin_finished(None);

    assert_eq!(next, NextPoll::After(Duration::from_millis(5000)));
    assert_eq!(state.phase(), PollPhase::PollingRetry);
    assert_eq!(state.bearer(), "abc");
}

#[test]
fn it_returns_to_the_steady_interval_after_a_401_once_loaded() {
    let mut state = PollState::new(schedule());
    state.begin(Some(SessionToken::new("abc")));
    state.fetch_succeeded();
    state.fetch_unauthorized();

    let next = state.relogin_finished(Some(SessionToken::new("fresh")));

    assert_eq!(next, NextPoll::After(Duration::from_millis(60000)));
    assert_eq!(state.phase(), PollPhase::PollingSteady);
    assert_eq!(state.bearer(), "fresh");
    assert!(state.is_loaded());
}

#[test]
fn it_halts_permanently_on_unexpected_failures() {
    let mut state = PollState::new(schedule());
    state.begin(Some(SessionToken::new("abc")));
    state.fetch_succeeded();

    let next = state.fetch_failed();

    assert_eq!(next, NextPoll::Halt);
    assert_eq!(state.phase(), PollPhase::Halted);
}
