//! A small order domain whose calls are routed through an [`AdviceRegistry`].

pub mod repository;
pub mod service;

use std::sync::Arc;

use thiserror::Error;

use crate::advice::{Advice, AdviceRegistry, LoggingAdvice, Pointcut, TransactionAdvice};
use crate::model::config::{AppConfig, PointcutConfig};

pub use repository::OrderRepository;
pub use service::OrderService;

/// Module path the order types declare their invocations under.
pub const SCOPE: &str = "hello::aop::order";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("예외 발생!")]
    IllegalState,
}

/// Order-module calls on `*Service` types, per the configured scope and suffix.
pub fn order_and_service(config: &PointcutConfig) -> Pointcut {
    Pointcut::within(&config.scope).and(Pointcut::type_suffix(&config.type_suffix))
}

/// Register the advices enabled in `config`, all on [`order_and_service`].
///
/// Single-purpose advices are layered `before`, `after`, `after_returning`,
/// `after_throwing`, so `after` logs once the outcome has been logged. The
/// transaction advice wraps them all unless `around_first` is off.
pub fn build_registry(config: &AppConfig) -> AdviceRegistry {
    let pointcut = order_and_service(&config.pointcut);
    let enabled = &config.advice;

    let mut layers: Vec<Arc<dyn Advice>> = Vec::new();
    if enabled.before {
        layers.push(Arc::new(LoggingAdvice::before()));
    }
    if enabled.after {
        layers.push(Arc::new(LoggingAdvice::after()));
    }
    if enabled.after_returning {
        layers.push(Arc::new(LoggingAdvice::after_returning()));
    }
    if enabled.after_throwing {
        layers.push(Arc::new(LoggingAdvice::after_throwing()));
    }
    if enabled.around {
        let transaction: Arc<dyn Advice> = Arc::new(TransactionAdvice);
        if enabled.around_first {
            layers.insert(0, transaction);
        } else {
            layers.push(transaction);
        }
    }

    let mut registry = AdviceRegistry::new();
    for advice in layers {
        registry.register(pointcut.clone(), advice);
    }
    tracing::debug!(advices = registry.len(), "advice registry built");
    registry
}
