//! Application theme and baseline styles.
//!
//! The [`Theme`] is built once in `main` and injected into the root context. [`ThemeBaseline`]
//! reads it once and publishes the palette as CSS custom properties, views pick the colors up
//! through those variables. It is never mutated after startup.

use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;

use crate::error::theme::ThemeError;

pub const PRIMARY_COLOR: &str = "#1976d2";
pub const SECONDARY_COLOR: &str = "#dc004e";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteMode {
    Light,
}

impl PaletteMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
        }
    }

    fn background(self) -> Color {
        match self {
            Self::Light => Color::new(0xff, 0xff, 0xff),
        }
    }

    fn text(self) -> Color {
        match self {
            Self::Light => Color::new(0x21, 0x21, 0x21),
        }
    }

    fn secondary_text(self) -> Color {
        match self {
            Self::Light => Color::new(0x66, 0x66, 0x66),
        }
    }
}

/// An opaque RGB color parsed from `#rrggbb` notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Darkens each channel by `percent`, used for hover states.
    pub fn darken(self, percent: u8) -> Self {
        let scale = |channel: u8| {
            let keep = 100 - u16::from(percent.min(100));
            // Always fits: channel * keep / 100 <= channel
            (u16::from(channel) * keep / 100) as u8
        };
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl FromStr for Color {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ThemeError::MissingHash(s.to_string()))?;
        if hex.len() != 6 {
            return Err(ThemeError::InvalidLength(s.to_string()));
        }
        // from_str_radix alone would accept a leading '+'
        if !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(ThemeError::InvalidDigit(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(|| ThemeError::InvalidDigit(s.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Process-wide palette shared by every rendered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub mode: PaletteMode,
    pub primary: Color,
    pub secondary: Color,
}

impl Theme {
    pub fn new(mode: PaletteMode, primary: &str, secondary: &str) -> Result<Self, ThemeError> {
        Ok(Self {
            mode,
            primary: primary.parse()?,
            secondary: secondary.parse()?,
        })
    }

    /// The Quiz App palette: light mode with blue primary and pink secondary.
    pub fn quiz() -> Result<Self, ThemeError> {
        Self::new(PaletteMode::Light, PRIMARY_COLOR, SECONDARY_COLOR)
    }

    /// Renders the palette as CSS custom properties on `:root`.
    pub fn css_variables(&self) -> String {
        format!(
            ":root {{ color-scheme: {mode}; --quiz-primary: {primary}; --quiz-primary-dark: {primary_dark}; --quiz-secondary: {secondary}; --quiz-background: {background}; --quiz-text: {text}; --quiz-text-secondary: {text_secondary}; }}",
            mode = self.mode.as_str(),
            primary = self.primary,
            primary_dark = self.primary.darken(10),
            secondary = self.secondary,
            background = self.mode.background(),
            text = self.mode.text(),
            text_secondary = self.mode.secondary_text(),
        )
    }
}

/// Baseline reset and shared component classes, styled through the theme variables.
pub const BASELINE_CSS: &str = r#"
*, *::before, *::after { box-sizing: border-box; }
html { -webkit-font-smoothing: antialiased; -moz-osx-font-smoothing: grayscale; }
body { margin: 0; font-family: "Roboto", "Helvetica", "Arial", sans-serif; line-height: 1.5; color: var(--quiz-text); background-color: var(--quiz-background); }
a { color: inherit; text-decoration: none; }
.navbar { display: flex; align-items: center; gap: 8px; padding: 0 24px; min-height: 64px; color: #fff; background-color: var(--quiz-primary); box-shadow: 0 2px 4px rgba(0, 0, 0, 0.2); }
.navbar-title { flex-grow: 1; margin: 0; font-size: 1.25rem; font-weight: 500; }
.nav-link { padding: 6px 8px; border-radius: 4px; text-transform: uppercase; font-size: 0.875rem; font-weight: 500; }
.nav-link:hover, .nav-link.active { background-color: rgba(255, 255, 255, 0.12); }
.container { max-width: 900px; margin: 0 auto; padding: 0 24px; }
.landing { display: flex; flex-direction: column; align-items: center; margin-top: 64px; text-align: center; }
.landing-actions { display: flex; flex-wrap: wrap; justify-content: center; gap: 16px; margin-top: 32px; }
.btn { display: inline-flex; align-items: center; gap: 8px; padding: 8px 22px; border-radius: 4px; border: 1px solid var(--quiz-primary); font-size: 0.9375rem; font-weight: 500; text-transform: uppercase; cursor: pointer; }
.btn-contained { color: #fff; background-color: var(--quiz-primary); }
.btn-contained:hover { background-color: var(--quiz-primary-dark); }
.btn-outlined { color: var(--quiz-primary); background-color: transparent; }
.text-secondary { color: var(--quiz-text-secondary); }
.error { color: var(--quiz-secondary); }
.question-card { border: 1px solid #ddd; border-radius: 4px; padding: 20px; margin: 20px 0; background-color: #f9f9f9; }
.correct-answer { color: green; font-weight: bold; }
.field { display: flex; flex-direction: column; gap: 4px; margin-bottom: 16px; }
.field input { padding: 12px; border: 1px solid #bbb; border-radius: 4px; font-size: 1rem; }
"#;

/// Installs the baseline styles and the theme variables into the document head.
///
/// Rendered once at the application root.
#[component]
pub fn ThemeBaseline() -> Element {
    let theme = use_context::<Theme>();
    let variables = theme.css_variables();

    rsx!(
        document::Style { "{BASELINE_CSS}" }
        document::Style { "{variables}" }
    )
}
