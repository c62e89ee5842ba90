//! Dark and light colour palettes plus the observable theme setting
//!
//! [`ThemeStore`] holds the single current theme. Readers either take a
//! [`ThemeStore::snapshot`] or [`ThemeStore::subscribe`] to be told about
//! toggles.

use ratatui::style::Color;
use tokio::sync::watch;

/// Secondary colours used for highlights and the detail tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentColors {
    pub aqua: Color,
    pub purple: Color,
    pub pink: Color,
    pub green: Color,
    pub blue: Color,
    pub orange: Color,
    pub red: Color,
    pub periwinkle: Color,
}

/// A complete colour set for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: Color,
    pub card: Color,
    pub primary: Color,
    pub secondary: Color,
    pub border: Color,
    pub accent: AccentColors,
}

pub const DARK_COLORS: ThemeColors = ThemeColors {
    background: Color::Rgb(0x11, 0x18, 0x27),
    card: Color::Rgb(0x1E, 0x29, 0x3B),
    primary: Color::Rgb(0xF1, 0xF5, 0xF9),
    secondary: Color::Rgb(0x94, 0xA3, 0xB8),
    border: Color::Rgb(0x33, 0x41, 0x55),
    accent: AccentColors {
        aqua: Color::Rgb(0x67, 0xE8, 0xF9),
        purple: Color::Rgb(0xC4, 0xB5, 0xFD),
        pink: Color::Rgb(0xF9, 0xA8, 0xD4),
        green: Color::Rgb(0x86, 0xEF, 0xAC),
        blue: Color::Rgb(0x93, 0xC5, 0xFD),
        orange: Color::Rgb(0xFD, 0xBA, 0x74),
        red: Color::Rgb(0xFC, 0xA5, 0xA5),
        periwinkle: Color::Rgb(0xA5, 0xB4, 0xFC),
    },
};

pub const LIGHT_COLORS: ThemeColors = ThemeColors {
    background: Color::Rgb(0xF8, 0xFA, 0xFC),
    card: Color::Rgb(0xFF, 0xFF, 0xFF),
    primary: Color::Rgb(0x0F, 0x17, 0x2A),
    secondary: Color::Rgb(0x64, 0x74, 0x8B),
    border: Color::Rgb(0xE2, 0xE8, 0xF0),
    accent: AccentColors {
        aqua: Color::Rgb(0x08, 0x91, 0xB2),
        purple: Color::Rgb(0x7C, 0x3A, 0xED),
        pink: Color::Rgb(0xDB, 0x27, 0x77),
        green: Color::Rgb(0x05, 0x96, 0x69),
        blue: Color::Rgb(0x25, 0x63, 0xEB),
        orange: Color::Rgb(0xEA, 0x58, 0x0C),
        red: Color::Rgb(0xDC, 0x26, 0x26),
        periwinkle: Color::Rgb(0x4F, 0x46, 0xE5),
    },
};

/// The active theme: a mode flag and the palette that goes with it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub is_dark: bool,
    pub colors: ThemeColors,
}

impl Theme {
    pub fn new(is_dark: bool) -> Self {
        Self {
            is_dark,
            colors: if is_dark { DARK_COLORS } else { LIGHT_COLORS },
        }
    }

    /// Short name shown in the header
    pub fn name(&self) -> &'static str {
        if self.is_dark {
            "dark"
        } else {
            "light"
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Owner of the current theme; toggles are broadcast to subscribers
#[derive(Debug)]
pub struct ThemeStore {
    sender: watch::Sender<Theme>,
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ThemeStore {
    pub fn new(is_dark: bool) -> Self {
        let (sender, _) = watch::channel(Theme::new(is_dark));
        Self { sender }
    }

    /// Current theme
    pub fn snapshot(&self) -> Theme {
        *self.sender.borrow()
    }

    /// Flips between dark and light and notifies subscribers
    ///
    /// # Returns
    /// The theme now in effect
    pub fn toggle(&self) -> Theme {
        self.sender
            .send_modify(|theme| *theme = Theme::new(!theme.is_dark));
        let theme = self.snapshot();
        tracing::info!(theme = theme.name(), "theme toggled");
        theme
    }

    /// Receiver that observes every later toggle
    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.sender.subscribe()
    }
}
