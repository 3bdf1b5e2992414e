//! In-memory route history for the desktop host.

use goriderss_sidebar::Navigation;

/// Stack of visited routes. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteHistory {
    entries: Vec<String>,
}

impl RouteHistory {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            entries: vec![start.into()],
        }
    }

    pub fn current(&self) -> &str {
        self.entries.last().map(String::as_str).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pushes `path` unless it is already the current route.
    pub fn push(&mut self, path: impl Into<String>) {
        let path = path.into();
        if self.current() != path {
            self.entries.push(path);
        }
    }

    /// Overwrites the current entry.
    pub fn replace(&mut self, path: impl Into<String>) {
        let path = path.into();
        match self.entries.last_mut() {
            Some(last) => *last = path,
            None => self.entries.push(path),
        }
    }

    /// Steps back one entry. Returns false when already at the oldest entry.
    pub fn back(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    pub fn apply(&mut self, navigation: Navigation) {
        match navigation {
            Navigation::Push(path) => self.push(path),
            Navigation::Replace(path) => self.replace(path),
        }
    }
}
