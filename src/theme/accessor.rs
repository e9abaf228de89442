//! Per-view theme accessor.

use once_cell::unsync::OnceCell;
use std::cell::Cell;

use super::name::ThemeName;

/// Per-view owner of the current theme name.
///
/// Each view instance creates its own accessor and reads the active theme
/// through it. The accessor starts at [`ThemeName::Light`] and runs a
/// one-time confirmation step on the first read, which re-asserts the same
/// value. Reads are total: they cannot fail and always answer `"light"`.
///
/// The confirmation step mirrors the two-phase lifecycle of the host UI
/// runtime (state created at mount, settled right after), so the accessor
/// is observably constant even though it passes through two states.
///
/// Accessors are single-threaded by construction (interior `Cell` state,
/// no locking) and fully independent of each other.
///
/// # Example
///
/// ```rust
/// use themelite::{ThemeAccessor, ThemeName};
///
/// let accessor = ThemeAccessor::new();
/// assert_eq!(accessor.theme(), ThemeName::Light);
/// assert_eq!(accessor.name(), "light");
/// ```
#[derive(Debug)]
pub struct ThemeAccessor {
    value: Cell<ThemeName>,
    confirmed: OnceCell<()>,
}

impl ThemeAccessor {
    /// Creates an accessor holding the default theme, not yet confirmed.
    pub fn new() -> Self {
        Self {
            value: Cell::new(ThemeName::Light),
            confirmed: OnceCell::new(),
        }
    }

    /// Returns the active theme.
    ///
    /// The first call per instance runs the one-time confirmation step,
    /// which re-asserts [`ThemeName::Light`] into the state cell. Every
    /// call, first or later, answers the same value.
    pub fn theme(&self) -> ThemeName {
        self.confirmed.get_or_init(|| {
            // Lite resolution: the fixed theme is reaffirmed after mount.
            self.value.set(ThemeName::Light);
        });
        self.value.get()
    }

    /// Returns the active theme's canonical string form.
    pub fn name(&self) -> &'static str {
        self.theme().as_str()
    }

    /// Reports whether the one-time confirmation step has run.
    ///
    /// The transition fires on the first read and never again; both sides
    /// of it expose the same theme.
    pub fn is_initialized(&self) -> bool {
        self.confirmed.get().is_some()
    }
}

impl Default for ThemeAccessor {
    fn default() -> Self {
        Self::new()
    }
}
