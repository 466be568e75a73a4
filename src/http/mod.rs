//! Internal HTTP layer for the country and geocoding APIs.
//!
//! This module is `pub(crate)` - it contains implementation details
//! not exposed to library users.

pub(crate) mod common;
pub(crate) mod error_helpers;
pub(crate) mod fetch;
pub(crate) mod loud_wire;
