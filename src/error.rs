use thiserror::Error;

/// Convenience result type for pipeline evaluation.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// A single element-level failure captured while evaluating a fallible stage.
///
/// Only the rendered message of the underlying error is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementFailure {
    /// Position of the failing element in the stage's input sequence.
    pub index: usize,
    /// `Display` rendering of the element's error.
    pub message: String,
}

/// Error type returned by pipeline evaluation.
///
/// Element-level errors raised inside a stage are converted into one of these variants; the
/// original error type is not preserved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// A fallible stage failed on one element and evaluation stopped immediately.
    #[error("stage '{stage}' failed at element {index}: {message}")]
    ElementFailed {
        stage: &'static str,
        index: usize,
        message: String,
    },

    /// A fallible stage failed on one or more elements (collect-all failure policy).
    #[error("stage '{stage}' failed on {} element(s); first at element {}: {}",
        .failures.len(),
        .failures.first().map(|f| f.index).unwrap_or_default(),
        .failures.first().map(|f| f.message.as_str()).unwrap_or_default())]
    ElementsFailed {
        stage: &'static str,
        failures: Vec<ElementFailure>,
    },
}

impl PipelineError {
    /// Name of the stage that produced the failure.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::ElementFailed { stage, .. } | Self::ElementsFailed { stage, .. } => stage,
        }
    }

    /// Every element failure carried by this error, in element order.
    pub fn failures(&self) -> Vec<ElementFailure> {
        match self {
            Self::ElementFailed { index, message, .. } => vec![ElementFailure {
                index: *index,
                message: message.clone(),
            }],
            Self::ElementsFailed { failures, .. } => failures.clone(),
        }
    }
}

/// Raised by [`crate::types::Dish::country_of_origin`] when a dish has no known origin.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown country of origin for dish '{dish}'")]
pub struct UnknownCountryOfOrigin {
    /// Name of the dish whose origin is unknown.
    pub dish: String,
}
