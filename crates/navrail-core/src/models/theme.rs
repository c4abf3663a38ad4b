//! Color schemes and theme palettes
//!
//! Exactly two schemes exist. A palette maps each semantic color role to a
//! CSS custom-property reference; the embedding stylesheet must define every
//! referenced `--color-*` variable for both schemes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Color scheme selector for the sidebar palette
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Dark theme (default)
    #[default]
    Dark,
    /// Light theme
    Light,
}

impl ColorScheme {
    /// The other scheme. Toggling twice restores the original value.
    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Dark => ColorScheme::Light,
            ColorScheme::Light => ColorScheme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Dark => "dark",
            ColorScheme::Light => "light",
        }
    }

    /// The palette for this scheme.
    pub const fn palette(self) -> ThemePalette {
        ThemePalette::of(self)
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(ColorScheme::Dark),
            "light" => Ok(ColorScheme::Light),
            _ => Err(CoreError::UnknownScheme {
                value: s.to_string(),
            }),
        }
    }
}

/// Flat mapping from semantic color role to CSS custom-property reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub sidebar_default: &'static str,
    pub sidebar_hover: &'static str,
    pub sidebar_active: &'static str,
    pub text_default: &'static str,
    pub text_hover: &'static str,
    pub text_active: &'static str,
    pub text_logo: &'static str,
    pub button_default: &'static str,
    pub button_active: &'static str,
}

const DARK: ThemePalette = ThemePalette {
    sidebar_default: "var(--color-sidebar-background-dark-default)",
    sidebar_hover: "var(--color-sidebar-background-dark-hover)",
    sidebar_active: "var(--color-sidebar-background-dark-active)",
    text_default: "var(--color-text-dark-default)",
    text_hover: "var(--color-text-dark-hover)",
    text_active: "var(--color-text-dark-active)",
    text_logo: "var(--color-text-logo-dark-default)",
    button_default: "var(--color-button-background-dark-default)",
    button_active: "var(--color-button-background-dark-active)",
};

const LIGHT: ThemePalette = ThemePalette {
    sidebar_default: "var(--color-sidebar-background-light-default)",
    sidebar_hover: "var(--color-sidebar-background-light-hover)",
    sidebar_active: "var(--color-sidebar-background-light-active)",
    text_default: "var(--color-text-light-default)",
    text_hover: "var(--color-text-light-hover)",
    text_active: "var(--color-text-light-active)",
    text_logo: "var(--color-text-logo-light-default)",
    button_default: "var(--color-button-background-light-default)",
    button_active: "var(--color-button-background-light-active)",
};

impl ThemePalette {
    pub const fn of(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark => DARK,
            ColorScheme::Light => LIGHT,
        }
    }

    /// The custom-property bindings the sidebar applies to its root element.
    /// Rules in the stylesheet read these, never the `--color-*` variables
    /// directly, so flipping the scheme re-derives every themed color at once.
    pub fn roles(&self) -> [(&'static str, &'static str); 9] {
        [
            ("--nav-sidebar-bg", self.sidebar_default),
            ("--nav-sidebar-hover", self.sidebar_hover),
            ("--nav-sidebar-active", self.sidebar_active),
            ("--nav-text", self.text_default),
            ("--nav-text-hover", self.text_hover),
            ("--nav-text-active", self.text_active),
            ("--nav-text-logo", self.text_logo),
            ("--nav-button-bg", self.button_default),
            ("--nav-button-active", self.button_active),
        ]
    }

    /// Declaration block for the root element's `style` attribute.
    pub fn inline_style(&self) -> String {
        let mut out = String::with_capacity(512);
        for (property, value) in self.roles() {
            out.push_str(property);
            out.push(':');
            out.push_str(value);
            out.push(';');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(ColorScheme::default(), ColorScheme::Dark);
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(ColorScheme::Dark.toggled(), ColorScheme::Light);
        assert_eq!(ColorScheme::Light.toggled(), ColorScheme::Dark);
        for scheme in [ColorScheme::Dark, ColorScheme::Light] {
            assert_eq!(scheme.toggled().toggled(), scheme);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("dark".parse::<ColorScheme>().unwrap(), ColorScheme::Dark);
        assert_eq!("Light".parse::<ColorScheme>().unwrap(), ColorScheme::Light);
        assert_eq!("DARK".parse::<ColorScheme>().unwrap(), ColorScheme::Dark);
    }

    #[test]
    fn test_parse_rejects_unknown_scheme() {
        let err = "solarized".parse::<ColorScheme>().unwrap_err();
        assert!(err.to_string().contains("solarized"));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for scheme in [ColorScheme::Dark, ColorScheme::Light] {
            assert_eq!(scheme.to_string().parse::<ColorScheme>().unwrap(), scheme);
        }
    }

    #[test]
    fn test_palettes_differ_in_every_role() {
        let dark = ColorScheme::Dark.palette().roles();
        let light = ColorScheme::Light.palette().roles();
        for ((role, dark_value), (_, light_value)) in dark.iter().zip(light.iter()) {
            assert_ne!(dark_value, light_value, "role {role} is identical");
        }
    }

    #[test]
    fn test_palette_values_name_their_scheme() {
        for (_, value) in ColorScheme::Dark.palette().roles() {
            assert!(value.contains("dark"), "{value}");
        }
        for (_, value) in ColorScheme::Light.palette().roles() {
            assert!(value.contains("light"), "{value}");
        }
    }

    #[test]
    fn test_toggle_restores_palette() {
        let original = ColorScheme::Light.palette();
        assert_eq!(ColorScheme::Light.toggled().toggled().palette(), original);
    }

    #[test]
    fn test_inline_style_binds_every_role() {
        let style = ColorScheme::Dark.palette().inline_style();
        for (property, value) in ColorScheme::Dark.palette().roles() {
            assert!(style.contains(&format!("{property}:{value};")));
        }
    }
}
