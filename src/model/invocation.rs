use std::fmt;

/// Identifies one intercepted call.
///
/// Descriptors are plain `'static` data so call sites can keep them in a
/// `const` next to the method they describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Invocation {
    /// Declaring module path, e.g. `hello::aop::order`.
    pub scope: &'static str,
    /// Declaring type, e.g. `OrderService`.
    pub type_name: &'static str,
    /// Method name, e.g. `orderItem`.
    pub method: &'static str,
    /// Parameter names, rendered inside the signature parentheses.
    pub params: &'static [&'static str],
}

impl Invocation {
    pub const fn new(scope: &'static str, type_name: &'static str, method: &'static str) -> Self {
        Self {
            scope,
            type_name,
            method,
            params: &[],
        }
    }

    pub const fn with_params(mut self, params: &'static [&'static str]) -> Self {
        self.params = params;
        self
    }

    /// Short signature used in every log line: `OrderService.orderItem(itemId)`.
    pub fn signature(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}({})",
            self.type_name,
            self.method,
            self.params.join(", ")
        )
    }
}
