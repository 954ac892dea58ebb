//! Exactly-once completion.

/// `Ok(success message)` or `Err(failure message)`.
pub type CompletionResult = Result<String, String>;

/// Reported when no more specific message is available.
pub const FALLBACK_FAILURE: &str = "Loop notification failed: unknown error";

enum State<F> {
    Pending(F),
    Completed,
}

/// Single-use wrapper around a completion callback.
///
/// The first call to [`Completion::complete`] runs the callback; later calls
/// are no-ops. A completion dropped while still pending reports
/// [`FALLBACK_FAILURE`].
pub struct Completion<F: FnOnce(CompletionResult)> {
    state: State<F>,
}

impl<F: FnOnce(CompletionResult)> Completion<F> {
    pub fn new(callback: F) -> Self {
        Self {
            state: State::Pending(callback),
        }
    }

    /// Run the callback if it has not run yet. Returns whether it ran.
    pub fn complete(&mut self, outcome: CompletionResult) -> bool {
        match std::mem::replace(&mut self.state, State::Completed) {
            State::Pending(callback) => {
                callback(outcome);
                true
            }
            State::Completed => {
                tracing::debug!("ignoring repeated completion");
                false
            }
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, State::Completed)
    }
}

impl<F: FnOnce(CompletionResult)> Drop for Completion<F> {
    fn drop(&mut self) {
        if !self.is_completed() {
            tracing::warn!("completion dropped before an outcome was reported");
            self.complete(Err(FALLBACK_FAILURE.to_string()));
        }
    }
}
