//! Icon service for managing glyph themes
//!
//! The table draws every icon (checkboxes, sort arrows, menu triggers) through
//! this service so a single setting switches between Unicode symbols and plain
//! ASCII fallbacks for terminals with limited fonts.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Checkbox glyphs
#[derive(Debug, Clone)]
pub struct CheckboxIcons {
    pub unchecked: &'static str,
    pub checked: &'static str,
    pub indeterminate: &'static str,
}

/// Header sort indicators
#[derive(Debug, Clone)]
pub struct SortIcons {
    pub ascending: &'static str,
    pub descending: &'static str,
}

/// Toolbar and menu glyphs
#[derive(Debug, Clone)]
pub struct ToolbarIcons {
    pub search: &'static str,
    pub row_menu: &'static str,
    pub bulk_menu: &'static str,
    pub columns_menu: &'static str,
    pub skeleton: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub checkbox: CheckboxIcons,
    pub sort: SortIcons,
    pub toolbar: ToolbarIcons,
    pub spinner: &'static [&'static str],
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme: Ascii -> Unicode -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            checkbox: CheckboxIcons {
                unchecked: "☐",
                checked: "☑",
                indeterminate: "▣",
            },
            sort: SortIcons {
                ascending: "↑",
                descending: "↓",
            },
            toolbar: ToolbarIcons {
                search: "⌕",
                row_menu: "⋮",
                bulk_menu: "❏",
                columns_menu: "☰",
                skeleton: "░",
            },
            spinner: &["◐", "◓", "◑", "◒"],
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            checkbox: CheckboxIcons {
                unchecked: "[ ]",
                checked: "[x]",
                indeterminate: "[-]",
            },
            sort: SortIcons {
                ascending: "^",
                descending: "v",
            },
            toolbar: ToolbarIcons {
                search: "/",
                row_menu: ":",
                bulk_menu: "[#]",
                columns_menu: "[=]",
                skeleton: "#",
            },
            spinner: &["|", "/", "-", "\\"],
        }
    }

    #[must_use]
    pub fn checkbox_unchecked(&self) -> &'static str {
        self.icons().checkbox.unchecked
    }

    #[must_use]
    pub fn checkbox_checked(&self) -> &'static str {
        self.icons().checkbox.checked
    }

    #[must_use]
    pub fn checkbox_indeterminate(&self) -> &'static str {
        self.icons().checkbox.indeterminate
    }

    #[must_use]
    pub fn sort_ascending(&self) -> &'static str {
        self.icons().sort.ascending
    }

    #[must_use]
    pub fn sort_descending(&self) -> &'static str {
        self.icons().sort.descending
    }

    #[must_use]
    pub fn search(&self) -> &'static str {
        self.icons().toolbar.search
    }

    #[must_use]
    pub fn row_menu(&self) -> &'static str {
        self.icons().toolbar.row_menu
    }

    #[must_use]
    pub fn bulk_menu(&self) -> &'static str {
        self.icons().toolbar.bulk_menu
    }

    #[must_use]
    pub fn columns_menu(&self) -> &'static str {
        self.icons().toolbar.columns_menu
    }

    #[must_use]
    pub fn skeleton(&self) -> &'static str {
        self.icons().toolbar.skeleton
    }

    /// Spinner frame for the given tick, wrapping around the frame list
    #[must_use]
    pub fn spinner_frame(&self, tick: usize) -> &'static str {
        let frames = self.icons().spinner;
        frames[tick % frames.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let service = IconService::default();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_ascii_checkboxes() {
        let service = IconService::new(IconTheme::Ascii);
        assert_eq!(service.checkbox_unchecked(), "[ ]");
        assert_eq!(service.checkbox_checked(), "[x]");
        assert_eq!(service.checkbox_indeterminate(), "[-]");
    }

    #[test]
    fn test_theme_cycling() {
        let mut service = IconService::new(IconTheme::Ascii);
        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Unicode);
        assert_eq!(service.sort_ascending(), "↑");

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_spinner_wraps() {
        let service = IconService::new(IconTheme::Ascii);
        assert_eq!(service.spinner_frame(0), service.spinner_frame(4));
        assert_ne!(service.spinner_frame(0), service.spinner_frame(1));
    }
}
