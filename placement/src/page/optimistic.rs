// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Optimistic local updates
//!
//! The new value is shown immediately, then the backend call runs. If the call
//! fails the previous value is put back and the error returned.

use std::future::Future;

/// A local value changed ahead of its backend confirmation
pub struct OptimisticUpdate<'a, T> {
    slot: &'a mut T,
    previous: Option<T>,
}

impl<'a, T> OptimisticUpdate<'a, T> {
    /// Replace `*slot` with `next`, remembering the old value
    pub fn apply(slot: &'a mut T, next: T) -> Self {
        let previous = std::mem::replace(slot, next);
        Self {
            slot,
            previous: Some(previous),
        }
    }

    /// Value currently shown
    pub fn current(&self) -> &T {
        self.slot
    }

    /// Await the backend call; roll back if it fails
    pub async fn reconcile<R, E, F>(mut self, call: F) -> Result<R, E>
    where
        F: Future<Output = Result<R, E>>,
    {
        match call.await {
            Ok(confirmed) => {
                self.previous = None;
                Ok(confirmed)
            }
            Err(e) => {
                self.rollback();
                Err(e)
            }
        }
    }

    /// Restore the previous value now
    pub fn rollback(&mut self) {
        if let Some(previous) = self.previous.take() {
            *self.slot = previous;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_success_keeps_new_value() {
        let mut status = "applied".to_string();
        let update = OptimisticUpdate::apply(&mut status, "shortlisted".to_string());
        assert_eq!(update.current(), "shortlisted");

        let result: Result<(), &str> = update.reconcile(async { Ok(()) }).await;
        assert!(result.is_ok());
        assert_eq!(status, "shortlisted");
    }

    #[tokio::test]
    async fn test_failure_rolls_back() {
        let mut status = "applied".to_string();
        let result: Result<(), &str> = OptimisticUpdate::apply(&mut status, "rejected".to_string())
            .reconcile(async { Err("server error") })
            .await;

        assert_eq!(result, Err("server error"));
        assert_eq!(status, "applied");
    }

    #[test]
    fn test_manual_rollback_is_idempotent() {
        let mut count = 1;
        let mut update = OptimisticUpdate::apply(&mut count, 2);
        update.rollback();
        update.rollback();
        drop(update);
        assert_eq!(count, 1);
    }
}
