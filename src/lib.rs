//! Fixed light-theme accessor for themed UI rendering.
//!
//! This crate provides:
//!
//! - [`ThemeName`]: A named visual theme identifier
//! - [`ThemeAccessor`]: Per-view owner of the current theme name
//!
//! View code asks a [`ThemeAccessor`] for the active theme name instead of
//! hardcoding one, so the resolution logic stays in one place. This is the
//! "lite" resolver: it always answers `"light"`.
//!
//! # Example
//!
//! ```rust
//! use themelite::ThemeAccessor;
//!
//! let accessor = ThemeAccessor::new();
//! assert_eq!(accessor.name(), "light");
//! ```

mod theme;

pub use theme::{ThemeAccessor, ThemeName};
