//! Single-purpose advice hooks and the engine that layers them around a call.

use std::fmt;
use std::sync::Arc;

use crate::model::invocation::Invocation;

/// The five advice styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdviceKind {
    /// Wraps the whole call and decides when the target runs.
    Around,
    /// Runs before the target.
    Before,
    /// Runs after the target returned successfully.
    AfterReturning,
    /// Runs after the target returned an error.
    AfterThrowing,
    /// Runs after the target, whatever the outcome.
    After,
}

impl AdviceKind {
    /// Tag printed in brackets at the start of every log line.
    pub fn tag(&self) -> &'static str {
        match self {
            AdviceKind::Around => "around",
            AdviceKind::Before => "before",
            AdviceKind::AfterReturning => "return",
            AdviceKind::AfterThrowing => "ex",
            AdviceKind::After => "after",
        }
    }
}

/// Hooks fired around an advised call.
///
/// Every hook defaults to a no-op, so an advice only implements the points it
/// cares about. None of them can change the call: the result and error are
/// handed over read-only and the target runs regardless of what `before` does.
pub trait Advice: Send + Sync {
    fn name(&self) -> &str;

    fn before(&self, _invocation: &Invocation) {}

    fn after_returning(&self, _invocation: &Invocation, _result: &dyn fmt::Debug) {}

    fn after_throwing(&self, _invocation: &Invocation, _error: &dyn fmt::Display) {}

    fn after(&self, _invocation: &Invocation) {}
}

/// Run `proceed` inside `chain`, the first advice being the outermost layer.
///
/// `before` hooks fire outermost first. The outcome hook and then `after`
/// fire innermost first, so each advice sees `before → outcome → after`
/// around everything nested inside it. `proceed` runs exactly once and its
/// result is returned untouched.
pub fn intercept<T, E, F>(
    chain: &[Arc<dyn Advice>],
    invocation: &Invocation,
    proceed: F,
) -> Result<T, E>
where
    T: fmt::Debug,
    E: fmt::Display,
    F: FnOnce() -> Result<T, E>,
{
    let Some((outer, inner)) = chain.split_first() else {
        return proceed();
    };

    outer.before(invocation);
    let _after = AfterGuard {
        advice: outer.as_ref(),
        invocation,
    };

    let result = intercept(inner, invocation, proceed);
    match &result {
        Ok(value) => outer.after_returning(invocation, value),
        Err(err) => outer.after_throwing(invocation, err),
    }
    result
}

/// Fires `after` on drop, so it also runs while a panic unwinds. Armed only
/// once `before` has returned.
struct AfterGuard<'a> {
    advice: &'a dyn Advice,
    invocation: &'a Invocation,
}

impl Drop for AfterGuard<'_> {
    fn drop(&mut self) {
        self.advice.after(self.invocation);
    }
}
