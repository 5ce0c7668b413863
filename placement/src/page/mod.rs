// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Page-level helpers: liveness of an activated page and optimistic updates.

pub mod optimistic;
pub mod scope;

pub use optimistic::OptimisticUpdate;
pub use scope::PageScope;
