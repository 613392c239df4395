//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes,
//! and `StyleMap` resolves role names to concrete styles.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Cycle to the next variant: Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Color Palette — semantic roles to Style
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Records table --
    pub table_header: Style,
    pub table_header_sorted: Style,
    pub table_row: Style,
    pub table_row_selected: Style,
    pub table_cell_sorted: Style,
    pub table_empty: Style,

    // -- Pagination line --
    pub page_current: Style,
    pub page_number: Style,
    pub page_nav: Style,
    pub page_nav_disabled: Style,

    // -- Profile card --
    pub profile_avatar: Style,
    pub profile_name: Style,
    pub profile_label: Style,
    pub profile_value: Style,

    // -- Chrome --
    pub status_bar: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,

    // -- Load states --
    pub loading_text: Style,
    pub error_text: Style,
}

impl ColorPalette {
    /// Dark palette — the default for dark terminal backgrounds.
    fn dark() -> Self {
        Self {
            // Records table
            table_header: Style::default().add_modifier(Modifier::BOLD),
            table_header_sorted: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            table_row: Style::default(),
            table_row_selected: Style::default().bg(Color::DarkGray).fg(Color::White),
            table_cell_sorted: Style::default().fg(Color::Yellow),
            table_empty: Style::default().fg(Color::DarkGray),

            // Pagination
            page_current: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            page_number: Style::default(),
            page_nav: Style::default(),
            page_nav_disabled: Style::default().fg(Color::DarkGray),

            // Profile
            profile_avatar: Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            profile_name: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            profile_label: Style::default().fg(Color::DarkGray),
            profile_value: Style::default(),

            // Chrome
            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            panel_border: Style::default(),
            panel_border_focused: Style::default().fg(Color::Cyan),

            // Load states
            loading_text: Style::default().fg(Color::DarkGray),
            error_text: Style::default().fg(Color::Red),
        }
    }

    /// Light palette — adapted for light terminal backgrounds.
    fn light() -> Self {
        Self {
            // Records table
            table_header: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            table_header_sorted: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            table_row: Style::default().fg(Color::Black),
            table_row_selected: Style::default().bg(Color::Blue).fg(Color::White),
            table_cell_sorted: Style::default().fg(Color::Magenta),
            table_empty: Style::default().fg(Color::DarkGray),

            // Pagination
            page_current: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            page_number: Style::default().fg(Color::Black),
            page_nav: Style::default().fg(Color::Black),
            page_nav_disabled: Style::default().fg(Color::DarkGray),

            // Profile
            profile_avatar: Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            profile_name: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            profile_label: Style::default().fg(Color::DarkGray),
            profile_value: Style::default().fg(Color::Black),

            // Chrome
            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(Color::Blue),

            // Load states
            loading_text: Style::default().fg(Color::DarkGray),
            error_text: Style::default().fg(Color::Red),
        }
    }
}

// ============================================================================
// Style Map — string-keyed lookup
// ============================================================================

/// String-keyed style lookup.
///
/// Built from a `ColorPalette`, this allows resolving role names (e.g.
/// `"table_header_sorted"`) to their concrete `Style` at runtime.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

/// All semantic role names, in declaration order.
const ROLE_NAMES: [&str; 19] = [
    "table_header",
    "table_header_sorted",
    "table_row",
    "table_row_selected",
    "table_cell_sorted",
    "table_empty",
    "page_current",
    "page_number",
    "page_nav",
    "page_nav_disabled",
    "profile_avatar",
    "profile_name",
    "profile_label",
    "profile_value",
    "status_bar",
    "panel_border",
    "panel_border_focused",
    "loading_text",
    "error_text",
];

impl StyleMap {
    /// Build a `StyleMap` from a `ColorPalette`.
    pub fn from_palette(p: &ColorPalette) -> Self {
        let styles: [Style; 19] = [
            p.table_header,
            p.table_header_sorted,
            p.table_row,
            p.table_row_selected,
            p.table_cell_sorted,
            p.table_empty,
            p.page_current,
            p.page_number,
            p.page_nav,
            p.page_nav_disabled,
            p.profile_avatar,
            p.profile_name,
            p.profile_label,
            p.profile_value,
            p.status_bar,
            p.panel_border,
            p.panel_border_focused,
            p.loading_text,
            p.error_text,
        ];

        let mut map = HashMap::with_capacity(ROLE_NAMES.len());
        for (name, style) in ROLE_NAMES.iter().zip(styles.iter()) {
            map.insert(*name, *style);
        }

        Self { map }
    }

    /// Resolve a role name to its `Style`. Returns `Style::default()` for unknown roles.
    pub fn resolve(&self, role: &str) -> Style {
        self.map.get(role).copied().unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================
