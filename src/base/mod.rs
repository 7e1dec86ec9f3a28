//! Foundation types for the extsense toolchain.
//!
//! This module provides fundamental types used throughout the library:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`] - Line/column coordinates
//! - [`Span`] - Combined byte range and line/column range for syntax nodes
//!
//! This module has NO dependencies on other extsense modules.

mod span;

pub use span::{LineCol, Span, TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
