// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Backend access
//!
//! ```text
//! AuthenticatedClient (bearer token, 401/403 handling)
//!     ↓
//! Transport (HttpTransport | ScriptedTransport)
//! ```

pub mod authenticated;
pub mod error;
pub mod request;
pub mod transport;

pub use authenticated::AuthenticatedClient;
pub use error::{ApiError, TransportError};
pub use request::{ApiRequest, ApiResponse, FilePart, Method, RequestBody, StatusCode};
pub use transport::{HttpTransport, ScriptedTransport, Transport};
