// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Page liveness
//!
//! Leaving a page does not cancel its in-flight requests. Their results are
//! dropped here instead, so a late response cannot update a discarded view.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Handle shared by a page and the work it started
#[derive(Debug, Clone)]
pub struct PageScope {
    route: Arc<str>,
    mounted: Arc<AtomicBool>,
}

impl PageScope {
    /// Activate a page
    pub fn mount(route: &str) -> Self {
        Self {
            route: Arc::from(route),
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    /// Leave the page. Every clone observes it.
    pub fn unmount(&self) {
        if self.mounted.swap(false, Ordering::AcqRel) {
            log::trace!("Left {}", self.route);
        }
    }

    /// Run `update` only while the page is shown
    pub fn apply_if_mounted<R>(&self, update: impl FnOnce() -> R) -> Option<R> {
        self.is_mounted().then(update)
    }

    /// Await `work`; keep its output only if the page is still shown
    pub async fn run<F: Future>(&self, work: F) -> Option<F::Output> {
        let output = work.await;
        if self.is_mounted() {
            Some(output)
        } else {
            log::debug!("Dropping result that arrived after leaving {}", self.route);
            None
        }
    }
}
