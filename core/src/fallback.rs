//! Tagged outcome of a list fetch and the sample-data policy.
//!
//! A settled list fetch is either `Loaded` (non-empty data), `Empty` (the
//! backend answered with no records) or `Failed`. Views substitute bundled
//! sample data for both `Empty` and `Failed` so a section never renders
//! blank.

use crate::fetch::FetchState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved<T> {
    Loaded(T),
    Empty,
    Failed(String),
}

impl<T> Resolved<T> {
    /// True when a view should show sample data instead.
    pub fn needs_fallback(&self) -> bool {
        !matches!(self, Resolved::Loaded(_))
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Resolved::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

impl<T: Clone> Resolved<&[T]> {
    /// Loaded records, or `samples()` for `Empty` and `Failed`.
    pub fn or_samples(&self, samples: impl FnOnce() -> Vec<T>) -> Vec<T> {
        match self {
            Resolved::Loaded(items) => items.to_vec(),
            Resolved::Empty | Resolved::Failed(_) => samples(),
        }
    }
}

impl<T> FetchState<Vec<T>> {
    /// `None` while loading. An error wins over any data kept from an
    /// earlier fetch.
    pub fn resolve(&self) -> Option<Resolved<&[T]>> {
        if self.loading {
            return None;
        }
        if let Some(reason) = &self.error {
            return Some(Resolved::Failed(reason.clone()));
        }
        match self.data.as_deref() {
            Some(items) if !items.is_empty() => Some(Resolved::Loaded(items)),
            _ => Some(Resolved::Empty),
        }
    }
}
