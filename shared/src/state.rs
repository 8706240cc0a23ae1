use thiserror::Error;

/// Identifies one submitted analysis so late completions can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    PreviewReady,
    Loading { ticket: Ticket },
    ResultShown,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    PreviewLoaded,
    AnalyzeRequested { ticket: Ticket },
    AnalysisSucceeded { ticket: Ticket },
    AnalysisFailed { ticket: Ticket },
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("No file selected")]
    NoFileSelected,
    #[error("Analysis already in progress")]
    AnalysisInFlight,
    #[error("Stale completion for ticket {0:?}")]
    Stale(Ticket),
}

/// Visibility of every control the uploader drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewFlags {
    pub preview_visible: bool,
    pub analyze_enabled: bool,
    pub clear_visible: bool,
    pub inputs_enabled: bool,
    pub loading_visible: bool,
    pub placeholder_visible: bool,
    pub results_visible: bool,
}

impl UiState {
    /// The only place UI state changes. Rejected events leave the caller's
    /// state untouched.
    pub fn next(self, event: UiEvent) -> Result<UiState, TransitionError> {
        match (self, event) {
            (_, UiEvent::Reset) => Ok(UiState::Idle),

            (UiState::Loading { .. }, UiEvent::PreviewLoaded) => {
                Err(TransitionError::AnalysisInFlight)
            }
            (UiState::ResultShown, UiEvent::PreviewLoaded) => Ok(UiState::ResultShown),
            (_, UiEvent::PreviewLoaded) => Ok(UiState::PreviewReady),

            (UiState::Idle, UiEvent::AnalyzeRequested { .. }) => {
                Err(TransitionError::NoFileSelected)
            }
            (UiState::Loading { .. }, UiEvent::AnalyzeRequested { .. }) => {
                Err(TransitionError::AnalysisInFlight)
            }
            (
                UiState::PreviewReady | UiState::ResultShown | UiState::Error,
                UiEvent::AnalyzeRequested { ticket },
            ) => Ok(UiState::Loading { ticket }),

            (UiState::Loading { ticket }, UiEvent::AnalysisSucceeded { ticket: done })
                if ticket == done =>
            {
                Ok(UiState::ResultShown)
            }
            (UiState::Loading { ticket }, UiEvent::AnalysisFailed { ticket: done })
                if ticket == done =>
            {
                Ok(UiState::Error)
            }
            (_, UiEvent::AnalysisSucceeded { ticket } | UiEvent::AnalysisFailed { ticket }) => {
                Err(TransitionError::Stale(ticket))
            }
        }
    }

    pub fn has_file(self) -> bool {
        !matches!(self, UiState::Idle)
    }

    pub fn is_loading(self) -> bool {
        matches!(self, UiState::Loading { .. })
    }

    pub fn view(self) -> ViewFlags {
        let loading = self.is_loading();
        ViewFlags {
            preview_visible: self.has_file(),
            analyze_enabled: self.has_file() && !loading,
            clear_visible: self.has_file(),
            inputs_enabled: !loading,
            loading_visible: loading,
            placeholder_visible: matches!(
                self,
                UiState::Idle | UiState::PreviewReady | UiState::Error
            ),
            results_visible: matches!(self, UiState::ResultShown),
        }
    }
}

/// Holds the current [`UiState`] and issues tickets for new analyses.
#[derive(Debug, Default)]
pub struct UploadSession {
    state: UiState,
    issued: u64,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn apply(&mut self, event: UiEvent) -> Result<UiState, TransitionError> {
        self.state = self.state.next(event)?;
        Ok(self.state)
    }

    pub fn begin_analysis(&mut self) -> Result<Ticket, TransitionError> {
        let ticket = Ticket(self.issued + 1);
        self.apply(UiEvent::AnalyzeRequested { ticket })?;
        self.issued = ticket.0;
        Ok(ticket)
    }

    pub fn preview_loaded(&mut self) -> Result<UiState, TransitionError> {
        self.apply(UiEvent::PreviewLoaded)
    }

    pub fn succeed(&mut self, ticket: Ticket) -> Result<UiState, TransitionError> {
        self.apply(UiEvent::AnalysisSucceeded { ticket })
    }

    pub fn fail(&mut self, ticket: Ticket) -> Result<UiState, TransitionError> {
        self.apply(UiEvent::AnalysisFailed { ticket })
    }

    pub fn reset(&mut self) -> UiState {
        self.apply(UiEvent::Reset).unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
