//! Advice registry: explicit `(pointcut, advice)` wiring.

use std::fmt;
use std::sync::Arc;

use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

use crate::advice::hooks::{self, Advice};
use crate::advice::pointcut::Pointcut;
use crate::model::invocation::Invocation;

new_key_type! {
    /// Handle returned by [`AdviceRegistry::register`].
    pub struct AdviceKey;
}

/// Advices matching one invocation, outermost first.
pub type AdviceChain = SmallVec<[Arc<dyn Advice>; 4]>;

struct Registration {
    pointcut: Pointcut,
    advice: Arc<dyn Advice>,
}

/// Registry of advices and the pointcuts selecting the calls they wrap.
///
/// Registration order is layering order: the first registered advice is the
/// outermost layer around a call. Build the registry at startup, then share
/// it; wrapping a call only needs `&self`.
#[derive(Default)]
pub struct AdviceRegistry {
    entries: SlotMap<AdviceKey, Registration>,
    order: Vec<AdviceKey>,
}

impl AdviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, pointcut: Pointcut, advice: Arc<dyn Advice>) -> AdviceKey {
        tracing::debug!(
            advice = advice.name(),
            pointcut = %pointcut,
            "registering advice"
        );
        let key = self.entries.insert(Registration { pointcut, advice });
        self.order.push(key);
        key
    }

    /// Returns `true` if the key was registered.
    pub fn unregister(&mut self, key: AdviceKey) -> bool {
        let Some(removed) = self.entries.remove(key) else {
            return false;
        };
        self.order.retain(|k| *k != key);
        tracing::debug!(advice = removed.advice.name(), "unregistered advice");
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Advice names in layering order.
    pub fn names(&self) -> Vec<String> {
        self.registrations()
            .map(|reg| reg.advice.name().to_string())
            .collect()
    }

    pub fn matching(&self, invocation: &Invocation) -> AdviceChain {
        self.registrations()
            .filter(|reg| reg.pointcut.matches(invocation))
            .map(|reg| Arc::clone(&reg.advice))
            .collect()
    }

    /// Run `proceed` wrapped in every matching advice.
    ///
    /// The result, or error, of `proceed` is returned unchanged.
    pub fn invoke<T, E, F>(&self, invocation: &Invocation, proceed: F) -> Result<T, E>
    where
        T: fmt::Debug,
        E: fmt::Display,
        F: FnOnce() -> Result<T, E>,
    {
        let chain = self.matching(invocation);
        tracing::trace!(%invocation, advices = chain.len(), "invoking");
        hooks::intercept(&chain, invocation, proceed)
    }

    fn registrations(&self) -> impl Iterator<Item = &Registration> {
        self.order.iter().filter_map(|key| self.entries.get(*key))
    }
}

impl fmt::Debug for AdviceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.registrations()
                    .map(|reg| format!("{} @ {}", reg.advice.name(), reg.pointcut)),
            )
            .finish()
    }
}
