use ratatui::style::Color;

/// Dark palette shared by every view.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub focus: Color,
    pub dimmed: Color,
}

impl Theme {
    pub fn dusk() -> Self {
        Self {
            background: Color::Rgb(20, 20, 31),
            text: Color::Rgb(200, 202, 217),
            focus: Color::Rgb(255, 107, 107),
            dimmed: Color::Rgb(92, 96, 120),
        }
    }

    pub fn current() -> Self {
        Self::dusk()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::dusk()
    }
}

/// Convenience access to the current theme colors.
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn focus() -> Color {
        Theme::current().focus
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
}
