// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Pure rendering of log records into the strings each sink receives.
//!
//! Nothing in here reads configuration or touches a sink. The dispatch layer
//! decides whether to render at all and where the results go.

mod describe;
mod location;
mod params;
mod record;

pub use describe::{describe, or_nil, OrNil, NIL, UNREPRESENTABLE};
pub use location::{enclosing_function, Location};
pub use params::Params;
pub use record::Record;
