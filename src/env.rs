//! Environment
//!
//! A mapping from identifier to value with a per-lookup default, immutable
//! with functional update. Backed by a `BTreeMap` rather than the
//! `HashMap` used for mutable runtime state elsewhere in this kind of
//! codebase — `BTreeMap<K, V>` is structurally `Hash`/`Eq`/`Ord` whenever
//! `K`/`V` are, which is what lets the symbolic-state sets built on top of
//! `Env` use ordinary derived equality and hashing instead of a bespoke
//! canonicalisation step. See DESIGN.md for the rationale.

use std::collections::BTreeMap;

use crate::ident::Identifier;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Env<V: Clone + Eq + std::hash::Hash> {
    bindings: BTreeMap<Identifier, V>,
    default: V,
}

impl<V: Clone + Eq + std::hash::Hash> Env<V> {
    pub fn new(default: V) -> Self {
        Self {
            bindings: BTreeMap::new(),
            default,
        }
    }

    pub fn get(&self, id: &Identifier) -> V {
        self.bindings
            .get(id)
            .cloned()
            .unwrap_or_else(|| self.default.clone())
    }

    /// Functional update: returns a new `Env` with `id` bound to `value`,
    /// leaving `self` untouched.
    pub fn with(&self, id: Identifier, value: V) -> Self {
        let mut bindings = self.bindings.clone();
        bindings.insert(id, value);
        Self {
            bindings,
            default: self.default.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lookup() {
        let env: Env<String> = Env::new(String::new());
        assert_eq!(env.get(&Identifier::new("x")), "");
    }

    #[test]
    fn test_functional_update_does_not_mutate_original() {
        let env: Env<String> = Env::new(String::new());
        let updated = env.with(Identifier::new("x"), "1".to_string());
        assert_eq!(env.get(&Identifier::new("x")), "");
        assert_eq!(updated.get(&Identifier::new("x")), "1");
    }

    #[test]
    fn test_later_update_overrides() {
        let env: Env<String> = Env::new(String::new());
        let env = env.with(Identifier::new("x"), "1".to_string());
        let env = env.with(Identifier::new("x"), "2".to_string());
        assert_eq!(env.get(&Identifier::new("x")), "2");
    }
}
