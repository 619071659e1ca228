//! Foundation types for the cxxtags toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`Position`], [`LineIndex`] - Line/column positions and conversion
//!
//! This module has NO dependencies on other cxxtags modules.

mod position;

pub use position::{LineIndex, Position};
pub use text_size::{TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
