use std::fmt;

use crate::advice::hooks::{Advice, AdviceKind};
use crate::model::invocation::Invocation;

/// Logs one line at the single hook point its kind names.
///
/// Register one instance per style; the other hooks stay silent. Around
/// logging is [`TransactionAdvice`](super::TransactionAdvice)'s job.
#[derive(Debug, Clone)]
pub struct LoggingAdvice {
    kind: AdviceKind,
    name: String,
}

impl LoggingAdvice {
    fn new(kind: AdviceKind) -> Self {
        Self {
            kind,
            name: format!("log-{}", kind.tag()),
        }
    }

    pub fn before() -> Self {
        Self::new(AdviceKind::Before)
    }

    pub fn after_returning() -> Self {
        Self::new(AdviceKind::AfterReturning)
    }

    pub fn after_throwing() -> Self {
        Self::new(AdviceKind::AfterThrowing)
    }

    pub fn after() -> Self {
        Self::new(AdviceKind::After)
    }

    pub fn kind(&self) -> AdviceKind {
        self.kind
    }
}

impl Advice for LoggingAdvice {
    fn name(&self) -> &str {
        &self.name
    }

    fn before(&self, invocation: &Invocation) {
        if self.kind == AdviceKind::Before {
            tracing::info!("[{}] {invocation}", self.kind.tag());
        }
    }

    fn after_returning(&self, invocation: &Invocation, result: &dyn fmt::Debug) {
        if self.kind == AdviceKind::AfterReturning {
            tracing::info!("[{}] {invocation} return={result:?}", self.kind.tag());
        }
    }

    fn after_throwing(&self, invocation: &Invocation, error: &dyn fmt::Display) {
        if self.kind == AdviceKind::AfterThrowing {
            tracing::info!("[{}] {invocation} message={error}", self.kind.tag());
        }
    }

    fn after(&self, invocation: &Invocation) {
        if self.kind == AdviceKind::After {
            tracing::info!("[{}] {invocation}", self.kind.tag());
        }
    }
}
