// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! ```rust
//! use analytics_service::prelude::*;
//! ```

// Core types
pub use crate::config::{Config, load_dotenv};
pub use crate::error::{AppError, Result};

// HTTP surface
pub use crate::api::{AppState, create_router};
pub use crate::server::{bind, serve, spawn_signal_handler};
