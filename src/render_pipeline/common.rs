//! Common utilities module
//!
//! This module contains shared utilities used across the render pipeline.

pub mod error;

pub use error::{RenderError, Result};
