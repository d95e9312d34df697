//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Checkbox icons for task cards
#[derive(Debug, Clone)]
pub struct CheckboxIcons {
    pub unchecked: &'static str,
    pub checked: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub app_title: &'static str,
    pub add: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub filter: &'static str,
    pub warning: &'static str,
    pub timestamp: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub checkbox: CheckboxIcons,
    pub ui: UiIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            checkbox: CheckboxIcons {
                unchecked: "🔳",
                checked: "✅",
            },
            ui: UiIcons {
                app_title: "📝",
                add: "➕",
                edit: "✏️",
                delete: "🗑️",
                filter: "🔎",
                warning: "⚠️",
                timestamp: "🕒",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            checkbox: CheckboxIcons {
                unchecked: "☐",
                checked: "☑",
            },
            ui: UiIcons {
                app_title: "▶",
                add: "+",
                edit: "✎",
                delete: "✗",
                filter: "▾",
                warning: "⚠",
                timestamp: "◷",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            checkbox: CheckboxIcons {
                unchecked: "[ ]",
                checked: "[x]",
            },
            ui: UiIcons {
                app_title: ">",
                add: "+",
                edit: "*",
                delete: "x",
                filter: "v",
                warning: "!",
                timestamp: "@",
            },
        }
    }

    /// Checkbox glyph for a completion state
    #[must_use]
    pub fn checkbox(&self, checked: bool) -> &'static str {
        let icons = self.icons();
        if checked {
            icons.checkbox.checked
        } else {
            icons.checkbox.unchecked
        }
    }

    #[must_use]
    pub fn app_title(&self) -> &'static str {
        self.icons().ui.app_title
    }

    #[must_use]
    pub fn add(&self) -> &'static str {
        self.icons().ui.add
    }

    #[must_use]
    pub fn edit(&self) -> &'static str {
        self.icons().ui.edit
    }

    #[must_use]
    pub fn delete(&self) -> &'static str {
        self.icons().ui.delete
    }

    #[must_use]
    pub fn filter(&self) -> &'static str {
        self.icons().ui.filter
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }

    #[must_use]
    pub fn timestamp(&self) -> &'static str {
        self.icons().ui.timestamp
    }
}
