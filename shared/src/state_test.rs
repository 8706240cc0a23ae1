use super::*;

const ALL_STATES: [UiState; 5] = [
    UiState::Idle,
    UiState::PreviewReady,
    UiState::Loading { ticket: Ticket(7) },
    UiState::ResultShown,
    UiState::Error,
];

#[test]
fn idle_has_initial_controls() {
    let view = UiState::Idle.view();
    assert!(!view.preview_visible);
    assert!(!view.analyze_enabled);
    assert!(!view.clear_visible);
    assert!(view.placeholder_visible);
    assert!(!view.loading_visible);
    assert!(!view.results_visible);
    assert!(view.inputs_enabled);
}

#[test]
fn preview_load_enables_analyze_and_clear() {
    let mut session = UploadSession::new();
    assert!(!session.state().view().analyze_enabled);

    session.preview_loaded().unwrap();
    let view = session.state().view();
    assert_eq!(session.state(), UiState::PreviewReady);
    assert!(view.preview_visible);
    assert!(view.analyze_enabled);
    assert!(view.clear_visible);
    assert!(view.placeholder_visible);
}

#[test]
fn reset_from_every_state_returns_to_idle() {
    for state in ALL_STATES {
        let next = state.next(UiEvent::Reset).unwrap();
        assert_eq!(next, UiState::Idle, "from {state:?}");
        assert_eq!(next.view(), UiState::Idle.view());
    }
}

#[test]
fn reset_is_idempotent() {
    let mut session = UploadSession::new();
    assert_eq!(session.reset(), UiState::Idle);
    assert_eq!(session.reset(), UiState::Idle);
}

#[test]
fn analyze_without_file_is_a_no_op() {
    let mut session = UploadSession::new();
    assert_eq!(session.begin_analysis(), Err(TransitionError::NoFileSelected));
    assert_eq!(session.state(), UiState::Idle);
}

#[test]
fn loading_hides_placeholder_and_results() {
    let mut session = UploadSession::new();
    session.preview_loaded().unwrap();
    let ticket = session.begin_analysis().unwrap();

    assert_eq!(session.state(), UiState::Loading { ticket });
    let view = session.state().view();
    assert!(view.loading_visible);
    assert!(!view.placeholder_visible);
    assert!(!view.results_visible);
    assert!(!view.analyze_enabled);
    assert!(!view.inputs_enabled);
}

#[test]
fn second_submit_while_loading_is_rejected() {
    let mut session = UploadSession::new();
    session.preview_loaded().unwrap();
    let ticket = session.begin_analysis().unwrap();

    assert_eq!(session.begin_analysis(), Err(TransitionError::AnalysisInFlight));
    assert_eq!(session.state(), UiState::Loading { ticket });
}

#[test]
fn new_preview_while_loading_is_rejected() {
    let mut session = UploadSession::new();
    session.preview_loaded().unwrap();
    session.begin_analysis().unwrap();
    assert_eq!(session.preview_loaded(), Err(TransitionError::AnalysisInFlight));
}

#[test]
fn success_shows_results() {
    let mut session = UploadSession::new();
    session.preview_loaded().unwrap();
    let ticket = session.begin_analysis().unwrap();

    assert_eq!(session.succeed(ticket), Ok(UiState::ResultShown));
    let view = session.state().view();
    assert!(view.results_visible);
    assert!(!view.placeholder_visible);
    assert!(!view.loading_visible);
}

#[test]
fn failure_restores_placeholder_exactly_once() {
    let mut session = UploadSession::new();
    session.preview_loaded().unwrap();
    let ticket = session.begin_analysis().unwrap();

    assert_eq!(session.fail(ticket), Ok(UiState::Error));
    let view = session.state().view();
    assert!(!view.loading_visible);
    assert!(view.placeholder_visible);
    assert!(view.analyze_enabled);

    assert_eq!(session.fail(ticket), Err(TransitionError::Stale(ticket)));
}

#[test]
fn completion_after_reset_is_stale() {
    let mut session = UploadSession::new();
    session.preview_loaded().unwrap();
    let first = session.begin_analysis().unwrap();
    session.reset();

    assert_eq!(session.succeed(first), Err(TransitionError::Stale(first)));
    assert_eq!(session.state(), UiState::Idle);
}

#[test]
fn late_completion_of_older_ticket_is_stale() {
    let mut session = UploadSession::new();
    session.preview_loaded().unwrap();
    let first = session.begin_analysis().unwrap();
    session.reset();
    session.preview_loaded().unwrap();
    let second = session.begin_analysis().unwrap();

    assert!(second > first);
    assert_eq!(session.succeed(first), Err(TransitionError::Stale(first)));
    assert_eq!(session.state(), UiState::Loading { ticket: second });
    assert_eq!(session.succeed(second), Ok(UiState::ResultShown));
}

#[test]
fn can_reanalyze_after_result_or_error() {
    let mut session = UploadSession::new();
    session.preview_loaded().unwrap();
    let t1 = session.begin_analysis().unwrap();
    session.succeed(t1).unwrap();
    let t2 = session.begin_analysis().unwrap();
    session.fail(t2).unwrap();
    assert!(session.begin_analysis().is_ok());
}

#[test]
fn new_file_keeps_previous_result_visible() {
    let state = UiState::ResultShown.next(UiEvent::PreviewLoaded).unwrap();
    assert_eq!(state, UiState::ResultShown);

    let flags = state.view();
    assert!(flags.results_visible);
    assert!(flags.preview_visible);
    assert!(flags.analyze_enabled);
    assert!(!flags.placeholder_visible);
}

#[test]
fn result_is_hidden_only_by_analysis_or_reset() {
    let mut session = UploadSession::new();
    session.preview_loaded().unwrap();
    let ticket = session.begin_analysis().unwrap();
    session.succeed(ticket).unwrap();

    session.preview_loaded().unwrap();
    assert!(session.state().view().results_visible);

    let ticket = session.begin_analysis().unwrap();
    assert!(!session.state().view().results_visible);

    session.succeed(ticket).unwrap();
    session.reset();
    assert!(!session.state().view().results_visible);
}
