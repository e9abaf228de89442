//! Theme name resolution.
//!
//! This module provides:
//!
//! - [`ThemeName`]: A named visual theme identifier
//! - [`ThemeAccessor`]: Per-view state holder that resolves the active theme
//!
//! The accessor wraps the theme value and provides the single read API
//! view components use to learn the active theme name.

mod accessor;
mod name;

pub use accessor::ThemeAccessor;
pub use name::ThemeName;
