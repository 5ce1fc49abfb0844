//! Call interception with structured lifecycle hooks.
//!
//! Calls are described by an [`Invocation`](model::invocation::Invocation)
//! and wrapped explicitly, either by a single [`Around`](advice::Around)
//! advice or by an [`AdviceRegistry`](advice::AdviceRegistry) that layers
//! every [`Advice`](advice::Advice) whose pointcut matches:
//!
//! ```
//! use std::sync::Arc;
//! use advice_kit::advice::{AdviceRegistry, LoggingAdvice, Pointcut};
//! use advice_kit::model::invocation::Invocation;
//!
//! const LOOKUP: Invocation = Invocation::new("app::users", "UserService", "lookup")
//!     .with_params(&["id"]);
//!
//! let mut registry = AdviceRegistry::new();
//! registry.register(Pointcut::type_suffix("Service"), Arc::new(LoggingAdvice::before()));
//!
//! let name: Result<&str, String> = registry.invoke(&LOOKUP, || Ok("ada"));
//! assert_eq!(name, Ok("ada"));
//! ```

pub mod advice;
pub mod logging;
pub mod model;
pub mod order;

#[cfg(test)]
pub(crate) mod testing;
