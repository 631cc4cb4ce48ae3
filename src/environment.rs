// src/environment.rs

use std::sync::Arc;

use crate::geometry::GeometryValue;

#[derive(Debug)]
struct Binding {
    name: String,
    value: GeometryValue,
    next: Option<Arc<Binding>>,
}

/// Persistent association list from names to evaluated values. Extending an
/// environment returns a new one that shares its tail with the original, so
/// outer scopes are never touched by inner `Let`s.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    head: Option<Arc<Binding>>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends a binding, shadowing any earlier binding of the same name.
    pub fn extend(&self, name: impl Into<String>, value: GeometryValue) -> Self {
        Self {
            head: Some(Arc::new(Binding {
                name: name.into(),
                value,
                next: self.head.clone(),
            })),
        }
    }

    /// Most recent binding of `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<&GeometryValue> {
        self.iter()
            .find(|(bound, _)| *bound == name)
            .map(|(_, value)| value)
    }

    /// Bindings from innermost to outermost, shadowed ones included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GeometryValue)> {
        std::iter::successors(self.head.as_deref(), |binding| binding.next.as_deref())
            .map(|binding| (binding.name.as_str(), &binding.value))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}
