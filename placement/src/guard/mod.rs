// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Access gates: the route guard run when a protected page activates and the
//! handler run when the backend rejects a credential.

pub mod route_guard;
pub mod unauthorized;

pub use route_guard::{GuardOutcome, GuardState, RouteGuard};
pub use unauthorized::UnauthorizedHandler;
