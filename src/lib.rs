// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Analytics Service
//!
//! HTTP bootstrap for the Eyes Café Analytics Service.
//!
//! The service binds on all interfaces at `ANALYTICS_PORT` (default 8001)
//! and answers liveness probes on `GET /` and `GET /health`.
//!
//! ## Main modules
//! - `api`: HTTP router and handlers
//! - `config`: configuration management
//! - `error`: error types
//! - `logging`: tracing subscriber setup
//! - `server`: listener binding, serving and shutdown signals
//! - `prelude`: commonly used types and traits

mod api;
mod config;
mod error;
pub mod logging;
pub mod prelude;
pub mod server;

// Re-export commonly used types
/// Application configuration
pub use config::{Config, defaults, env_vars, load_dotenv};

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router, state and response bodies
pub use api::handlers::{HealthResponse, RootResponse};
pub use api::{AppState, create_router};
