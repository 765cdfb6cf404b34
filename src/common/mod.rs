//! Common types and utilities shared across framesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and [`SimConfig`](config::SimConfig)
//! - Error types
//! - Identifiers and bounds ([`PageId`], [`FrameCapacity`])

mod capacity;
pub mod config;
pub mod error;
mod page_id;

pub use capacity::FrameCapacity;
pub use error::{Error, Result};
pub use page_id::{pages, PageId};
