//! The combined "around" form.

use std::fmt;

use crate::model::invocation::Invocation;

/// A call an around advice has been handed, not yet run.
///
/// [`proceed`](ProceedingCall::proceed) consumes the value, so the target
/// runs at most once.
pub struct ProceedingCall<'a, F> {
    invocation: &'a Invocation,
    target: F,
}

impl<'a, F> ProceedingCall<'a, F> {
    pub fn new(invocation: &'a Invocation, target: F) -> Self {
        Self { invocation, target }
    }

    pub fn invocation(&self) -> &'a Invocation {
        self.invocation
    }

    /// Run the wrapped target.
    pub fn proceed<T, E>(self) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        (self.target)()
    }
}

impl<F> fmt::Debug for ProceedingCall<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProceedingCall")
            .field("invocation", self.invocation)
            .finish_non_exhaustive()
    }
}

/// Advice that owns the whole call: it decides when the target runs and may
/// replace the result.
pub trait Around {
    fn around<T, E, F>(&self, call: ProceedingCall<'_, F>) -> Result<T, E>
    where
        T: fmt::Debug,
        E: fmt::Display,
        F: FnOnce() -> Result<T, E>;
}

/// Wrap a single call in `advice`.
pub fn intercept_around<A, T, E, F>(
    advice: &A,
    invocation: &Invocation,
    proceed: F,
) -> Result<T, E>
where
    A: Around,
    T: fmt::Debug,
    E: fmt::Display,
    F: FnOnce() -> Result<T, E>,
{
    advice.around(ProceedingCall::new(invocation, proceed))
}
