use thiserror::Error;

/// Why a classification attempt did not produce a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// The server answered and reported failure, optionally with a reason.
    #[error("server reported failure: {}", .0.as_deref().unwrap_or("no reason given"))]
    Application(Option<String>),
    /// The request could not be completed or its body could not be parsed.
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Why `submit` refused to start a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("nothing to classify: the draft is blank")]
    BlankDraft,
    #[error("a submission is already in flight")]
    AlreadyPending,
}

pub type ClassifyResult<T> = Result<T, ClassifyError>;
