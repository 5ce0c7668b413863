// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Navigation between portal routes

use parking_lot::Mutex;

/// How a navigation affects history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Add a new history entry
    Push,
    /// Overwrite the current entry so "back" cannot return to it
    Replace,
}

/// A navigation that actually happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEvent {
    pub route: String,
    pub mode: NavigationMode,
}

/// Moves the application between routes
pub trait Navigator: Send + Sync {
    /// Navigate to `route`
    ///
    /// Navigating to the route already shown is a no-op and returns `false`.
    /// The check and the move happen atomically.
    fn navigate(&self, route: &str, mode: NavigationMode) -> bool;

    /// Route currently shown, if any
    fn current_route(&self) -> Option<String>;
}

#[derive(Default)]
struct HistoryState {
    entries: Vec<String>,
    events: Vec<NavigationEvent>,
}

/// In-memory history stack
///
/// Records every navigation event, which makes it the navigator used by the
/// CLI and by tests.
#[derive(Default)]
pub struct HistoryNavigator {
    state: Mutex<HistoryState>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `route` as the only history entry
    pub fn starting_at(route: &str) -> Self {
        let navigator = Self::new();
        navigator.state.lock().entries.push(route.to_string());
        navigator
    }

    /// History entries, oldest first
    pub fn history(&self) -> Vec<String> {
        self.state.lock().entries.clone()
    }

    /// Every navigation performed, oldest first
    pub fn events(&self) -> Vec<NavigationEvent> {
        self.state.lock().events.clone()
    }

    /// Number of navigations to `route`
    pub fn visits(&self, route: &str) -> usize {
        self.state
            .lock()
            .events
            .iter()
            .filter(|e| e.route == route)
            .count()
    }

    /// Go back one entry, returning the route now shown
    pub fn back(&self) -> Option<String> {
        let mut state = self.state.lock();
        if state.entries.len() > 1 {
            state.entries.pop();
        }
        state.entries.last().cloned()
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, route: &str, mode: NavigationMode) -> bool {
        let mut state = self.state.lock();
        if state.entries.last().map(String::as_str) == Some(route) {
            return false;
        }

        if mode == NavigationMode::Replace {
            state.entries.pop();
        }
        state.entries.push(route.to_string());
        state.events.push(NavigationEvent {
            route: route.to_string(),
            mode,
        });
        log::debug!("Navigated to {} ({:?})", route, mode);
        true
    }

    fn current_route(&self) -> Option<String> {
        self.state.lock().entries.last().cloned()
    }
}
