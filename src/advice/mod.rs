pub mod around;
pub mod hooks;
pub mod logging;
pub mod pointcut;
pub mod registry;
pub mod transaction;

pub use around::{Around, ProceedingCall, intercept_around};
pub use hooks::{Advice, AdviceKind, intercept};
pub use logging::LoggingAdvice;
pub use pointcut::Pointcut;
pub use registry::{AdviceKey, AdviceRegistry};
pub use transaction::TransactionAdvice;
