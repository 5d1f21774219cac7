/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod api;
pub mod auth;
pub mod client;
pub mod collection;
pub mod config;
pub mod errors;
mod macros;
mod parsers;
pub mod photo;
pub mod properties;
pub mod resize;
pub mod search;
pub mod stats;
pub mod topic;
pub mod user;

pub use api::{QueryParams, build_url};
pub use auth::*;
pub use client::*;
pub use collection::*;
pub use config::*;
pub use errors::*;
pub use photo::*;
pub use properties::*;
pub use resize::*;
pub use search::*;
pub use stats::*;
pub use topic::*;
pub use user::*;

// Page size used when streaming list endpoints, the API maximum
pub(crate) const PER_PAGE: usize = 30;
