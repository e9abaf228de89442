//! Theme name identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named visual presentation mode for a user interface.
///
/// The lite resolver knows a single theme, so `Light` is the only
/// variant. The canonical string form is what view code branches on.
///
/// # Example
///
/// ```rust
/// use themelite::ThemeName;
///
/// assert_eq!(ThemeName::Light.as_str(), "light");
/// assert_eq!(ThemeName::default(), ThemeName::Light);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    Light,
}

impl ThemeName {
    /// Returns the canonical string form of the theme name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
        }
    }
}

impl Default for ThemeName {
    fn default() -> Self {
        ThemeName::Light
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(ThemeName::Light.as_str(), "light");
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(ThemeName::default(), ThemeName::Light);
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(ThemeName::Light.to_string(), "light");
    }

    #[test]
    fn test_serde_wire_form() {
        let json = serde_json::to_string(&ThemeName::Light).unwrap();
        assert_eq!(json, "\"light\"");

        let back: ThemeName = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(back, ThemeName::Light);
    }
}
