use std::fmt;
use std::sync::Arc;

use crate::model::invocation::Invocation;

type Predicate = dyn Fn(&Invocation) -> bool + Send + Sync;

/// Selects which invocations an advice applies to.
///
/// A pointcut is an opaque predicate plus a description used in logs.
/// Combine them with [`and`](Pointcut::and), [`or`](Pointcut::or) and
/// [`negate`](Pointcut::negate).
#[derive(Clone)]
pub struct Pointcut {
    description: String,
    predicate: Arc<Predicate>,
}

impl Pointcut {
    pub fn new<F>(description: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Invocation) -> bool + Send + Sync + 'static,
    {
        Self {
            description: description.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// Matches every invocation.
    pub fn always() -> Self {
        Self::new("always", |_| true)
    }

    /// Matches invocations declared in `scope` or any module below it. An
    /// empty scope is the crate root and matches everything.
    pub fn within(scope: impl Into<String>) -> Self {
        let scope = scope.into();
        Self::new(format!("within({scope})"), move |inv| {
            scope.is_empty()
                || inv.scope == scope
                || inv
                    .scope
                    .strip_prefix(scope.as_str())
                    .is_some_and(|rest| rest.starts_with("::"))
        })
    }

    /// Matches invocations whose declaring type name ends with `suffix`.
    pub fn type_suffix(suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        Self::new(format!("type(*{suffix})"), move |inv| {
            inv.type_name.ends_with(suffix.as_str())
        })
    }

    pub fn and(self, other: Pointcut) -> Self {
        let description = format!("{} && {}", self.description, other.description);
        Self::new(description, move |inv| self.matches(inv) && other.matches(inv))
    }

    pub fn or(self, other: Pointcut) -> Self {
        let description = format!("({} || {})", self.description, other.description);
        Self::new(description, move |inv| self.matches(inv) || other.matches(inv))
    }

    pub fn negate(self) -> Self {
        let description = format!("!{}", self.description);
        Self::new(description, move |inv| !self.matches(inv))
    }

    pub fn matches(&self, invocation: &Invocation) -> bool {
        (self.predicate)(invocation)
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Debug for Pointcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pointcut").field(&self.description).finish()
    }
}

impl fmt::Display for Pointcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERVICE: Invocation = Invocation::new("hello::aop::order", "OrderService", "orderItem");
    const REPOSITORY: Invocation = Invocation::new("hello::aop::order", "OrderRepository", "save");
    const NESTED: Invocation = Invocation::new("hello::aop::order::sub", "SubService", "go");
    const SIBLING: Invocation = Invocation::new("hello::aop::orders", "MemberService", "hello");

    #[test]
    fn within_matches_scope_and_submodules_only() {
        let pc = Pointcut::within("hello::aop::order");
        assert!(pc.matches(&SERVICE));
        assert!(pc.matches(&NESTED));
        assert!(!pc.matches(&SIBLING));
    }

    #[test]
    fn empty_scope_matches_every_invocation() {
        let pc = Pointcut::within("");
        assert!(pc.matches(&SERVICE));
        assert!(pc.matches(&NESTED));
        assert!(pc.matches(&Invocation::new("", "Free", "f")));
    }

    #[test]
    fn type_suffix_matches_declaring_type() {
        let pc = Pointcut::type_suffix("Service");
        assert!(pc.matches(&SERVICE));
        assert!(!pc.matches(&REPOSITORY));
        assert!(pc.matches(&SIBLING));
    }

    #[test]
    fn combinators() {
        let order_and_service =
            Pointcut::within("hello::aop::order").and(Pointcut::type_suffix("Service"));
        assert!(order_and_service.matches(&SERVICE));
        assert!(!order_and_service.matches(&REPOSITORY));
        assert!(!order_and_service.matches(&SIBLING));

        let either = Pointcut::type_suffix("Repository").or(Pointcut::within("hello::aop::orders"));
        assert!(either.matches(&REPOSITORY));
        assert!(either.matches(&SIBLING));
        assert!(!either.matches(&SERVICE));

        assert!(!Pointcut::always().negate().matches(&SERVICE));
    }

    #[test]
    fn custom_predicate() {
        let pc = Pointcut::new("method(save)", |inv| inv.method == "save");
        assert!(pc.matches(&REPOSITORY));
        assert!(!pc.matches(&SERVICE));
    }

    #[test]
    fn description_tracks_composition() {
        let pc = Pointcut::within("a").and(Pointcut::type_suffix("B").or(Pointcut::always()));
        assert_eq!(pc.to_string(), "within(a) && (type(*B) || always)");
        assert_eq!(format!("{pc:?}"), "Pointcut(\"within(a) && (type(*B) || always)\")");
        assert_eq!(Pointcut::always().negate().description(), "!always");
    }
}
