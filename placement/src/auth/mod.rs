// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Login and logout

pub mod login;

pub use login::{Credentials, LoginError, LoginService};
