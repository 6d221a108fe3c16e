//! Configuration enum types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Status bar position on screen.
///
/// Controls where the status bar appears relative to screen edges.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum StatusPosition {
    /// Top-left corner
    TopLeft,
    /// Top-right corner
    TopRight,
    /// Bottom-left corner
    BottomLeft,
    /// Bottom-right corner
    BottomRight,
}

/// What an export puts on the clipboard.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ClipboardMode {
    /// Leave the clipboard alone
    #[default]
    Off,
    /// The PNG image (`image/png`)
    Png,
    /// The `data:image/png;base64,...` URL as text
    DataUrl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        position: StatusPosition,
    }

    #[test]
    fn positions_use_kebab_case() {
        let parsed: Wrapper = toml::from_str(r#"position = "top-right""#).unwrap();
        assert_eq!(parsed.position, StatusPosition::TopRight);
        assert!(toml::from_str::<Wrapper>(r#"position = "TopRight""#).is_err());
    }

    #[test]
    fn clipboard_mode_defaults_off() {
        #[derive(Deserialize)]
        struct Export {
            #[serde(default)]
            clipboard: ClipboardMode,
        }

        let parsed: Export = toml::from_str("").unwrap();
        assert_eq!(parsed.clipboard, ClipboardMode::Off);
        let parsed: Export = toml::from_str(r#"clipboard = "data-url""#).unwrap();
        assert_eq!(parsed.clipboard, ClipboardMode::DataUrl);
    }
}
