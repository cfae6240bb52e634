// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod fallback;
mod health;
mod root;

pub use fallback::{method_not_allowed, not_found};
pub use health::{HealthResponse, health_check};
pub use root::{RootResponse, root};
