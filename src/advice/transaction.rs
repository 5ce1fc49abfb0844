//! Transaction-style around advice: start, commit or roll back, release.

use std::fmt;

use crate::advice::around::{Around, ProceedingCall};
use crate::advice::hooks::Advice;
use crate::model::invocation::Invocation;

/// Logs a transaction lifecycle around each advised call.
///
/// Usable directly as [`Around`] advice, or registered as an [`Advice`]
/// where its four hooks produce the same lines in the same order.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionAdvice;

impl TransactionAdvice {
    fn start(invocation: &Invocation) {
        tracing::info!("[around][트랜잭션 시작] {invocation}");
    }

    fn commit(invocation: &Invocation) {
        tracing::info!("[around][트랜잭션 커밋] {invocation}");
    }

    fn rollback(invocation: &Invocation, error: &dyn fmt::Display) {
        tracing::info!("[around][트랜잭션 롤백] {invocation} message={error}");
    }

    fn release(invocation: &Invocation) {
        tracing::info!("[around][리소스 릴리즈] {invocation}");
    }
}

impl Around for TransactionAdvice {
    fn around<T, E, F>(&self, call: ProceedingCall<'_, F>) -> Result<T, E>
    where
        T: fmt::Debug,
        E: fmt::Display,
        F: FnOnce() -> Result<T, E>,
    {
        let invocation = call.invocation();
        let _release = ReleaseGuard(invocation);

        Self::start(invocation);
        match call.proceed() {
            Ok(value) => {
                Self::commit(invocation);
                Ok(value)
            }
            Err(err) => {
                Self::rollback(invocation, &err);
                Err(err)
            }
        }
    }
}

impl Advice for TransactionAdvice {
    fn name(&self) -> &str {
        "transaction"
    }

    fn before(&self, invocation: &Invocation) {
        Self::start(invocation);
    }

    fn after_returning(&self, invocation: &Invocation, _result: &dyn fmt::Debug) {
        Self::commit(invocation);
    }

    fn after_throwing(&self, invocation: &Invocation, error: &dyn fmt::Display) {
        Self::rollback(invocation, error);
    }

    fn after(&self, invocation: &Invocation) {
        Self::release(invocation);
    }
}

struct ReleaseGuard<'a>(&'a Invocation);

impl Drop for ReleaseGuard<'_> {
    fn drop(&mut self) {
        TransactionAdvice::release(self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advice::around::intercept_around;
    use crate::advice::hooks::intercept;
    use crate::testing::capture_logs;
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use std::sync::Arc;

    const ORDER_ITEM: Invocation =
        Invocation::new("hello::aop::order", "OrderService", "orderItem").with_params(&["itemId"]);

    #[test]
    fn commit_path() {
        let (result, lines) = capture_logs(|| {
            intercept_around::<_, _, String, _>(&TransactionAdvice, &ORDER_ITEM, || Ok("ok"))
        });

        assert_eq!(result, Ok("ok"));
        assert_eq!(
            lines,
            vec![
                "[around][트랜잭션 시작] OrderService.orderItem(itemId)",
                "[around][트랜잭션 커밋] OrderService.orderItem(itemId)",
                "[around][리소스 릴리즈] OrderService.orderItem(itemId)",
            ]
        );
    }

    #[test]
    fn rollback_path_returns_the_same_error() {
        let (result, lines) = capture_logs(|| {
            intercept_around::<_, (), _, _>(&TransactionAdvice, &ORDER_ITEM, || {
                Err("예외 발생".to_string())
            })
        });

        assert_eq!(result, Err("예외 발생".to_string()));
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("[around][트랜잭션 시작]"));
        assert!(lines[1].starts_with("[around][트랜잭션 롤백]"));
        assert!(lines[1].contains("예외 발생"));
        assert!(lines[2].starts_with("[around][리소스 릴리즈]"));
    }

    #[test]
    fn target_runs_once() {
        let calls = Cell::new(0);
        let _ = intercept_around(&TransactionAdvice, &ORDER_ITEM, || {
            calls.set(calls.get() + 1);
            Ok::<_, String>(())
        });
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn release_logged_when_target_panics() {
        let (outcome, lines) = capture_logs(|| {
            catch_unwind(AssertUnwindSafe(|| {
                let _: Result<(), String> =
                    intercept_around(&TransactionAdvice, &ORDER_ITEM, || panic!("boom"));
            }))
        });

        assert!(outcome.is_err());
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("[around][리소스 릴리즈]"));
    }

    #[test]
    fn decomposed_form_logs_the_same_lines() {
        let advice: Arc<dyn Advice> = Arc::new(TransactionAdvice);
        let chain = vec![advice];

        for fail in [false, true] {
            let target = || if fail { Err("예외 발생") } else { Ok("ok") };
            let (around_result, around_lines) =
                capture_logs(|| intercept_around(&TransactionAdvice, &ORDER_ITEM, target));
            let (hooks_result, hooks_lines) =
                capture_logs(|| intercept(&chain, &ORDER_ITEM, target));

            assert_eq!(around_result, hooks_result);
            assert_eq!(around_lines, hooks_lines);
        }
    }
}
