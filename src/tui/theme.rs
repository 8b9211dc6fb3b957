// theme support for the tui

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    // dark
    Dusk,
    Lavender,
    Forest,
    // light
    Sunrise,
    Seafoam,
}

impl ThemeKind {
    pub const ALL: &'static [ThemeKind] = &[
        Self::Dusk,
        Self::Lavender,
        Self::Forest,
        Self::Sunrise,
        Self::Seafoam,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Dusk => "dusk",
            Self::Lavender => "lavender",
            Self::Forest => "forest",
            Self::Sunrise => "sunrise",
            Self::Seafoam => "seafoam",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

/// Picks a light or dark default from the terminal background.
pub fn detect_theme() -> ThemeKind {
    match terminal_light::luma() {
        Ok(luma) if luma > 0.6 => ThemeKind::Sunrise,
        _ => ThemeKind::Dusk,
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub border: Color,
    pub selection: Color,
    pub error: Color,
    pub success: Color,
    pub warning: Color,
    pub muted: Color,
}

impl Theme {
    pub fn from_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Dusk => Self::dusk(),
            ThemeKind::Lavender => Self::lavender(),
            ThemeKind::Forest => Self::forest(),
            ThemeKind::Sunrise => Self::sunrise(),
            ThemeKind::Seafoam => Self::seafoam(),
        }
    }

    fn dusk() -> Self {
        Self {
            bg: Color::Rgb(24, 26, 38),
            fg: Color::Rgb(222, 224, 240),
            accent: Color::Rgb(130, 170, 255),
            border: Color::Rgb(58, 62, 86),
            selection: Color::Rgb(48, 52, 76),
            error: Color::Rgb(240, 120, 130),
            success: Color::Rgb(130, 220, 170),
            warning: Color::Rgb(245, 200, 120),
            muted: Color::Rgb(120, 124, 150),
        }
    }

    fn lavender() -> Self {
        Self {
            bg: Color::Rgb(34, 28, 46),
            fg: Color::Rgb(232, 224, 246),
            accent: Color::Rgb(196, 167, 240),
            border: Color::Rgb(66, 56, 88),
            selection: Color::Rgb(70, 58, 96),
            error: Color::Rgb(238, 118, 150),
            success: Color::Rgb(160, 214, 190),
            warning: Color::Rgb(240, 196, 130),
            muted: Color::Rgb(128, 116, 150),
        }
    }

    fn forest() -> Self {
        Self {
            bg: Color::Rgb(26, 34, 30),
            fg: Color::Rgb(220, 232, 222),
            accent: Color::Rgb(140, 210, 150),
            border: Color::Rgb(56, 74, 62),
            selection: Color::Rgb(50, 68, 56),
            error: Color::Rgb(226, 120, 110),
            success: Color::Rgb(150, 220, 140),
            warning: Color::Rgb(226, 196, 120),
            muted: Color::Rgb(112, 134, 118),
        }
    }

    fn sunrise() -> Self {
        Self {
            bg: Color::Rgb(252, 246, 238),
            fg: Color::Rgb(70, 56, 60),
            accent: Color::Rgb(220, 110, 80),
            border: Color::Rgb(230, 214, 200),
            selection: Color::Rgb(248, 226, 210),
            error: Color::Rgb(196, 60, 70),
            success: Color::Rgb(70, 150, 100),
            warning: Color::Rgb(204, 140, 40),
            muted: Color::Rgb(150, 132, 128),
        }
    }

    fn seafoam() -> Self {
        Self {
            bg: Color::Rgb(238, 248, 246),
            fg: Color::Rgb(36, 64, 66),
            accent: Color::Rgb(40, 150, 150),
            border: Color::Rgb(196, 224, 220),
            selection: Color::Rgb(210, 236, 232),
            error: Color::Rgb(200, 70, 80),
            success: Color::Rgb(50, 150, 100),
            warning: Color::Rgb(200, 140, 50),
            muted: Color::Rgb(120, 150, 150),
        }
    }

    // style helpers
    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.selection)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}
