use ratatui::style::{Color, Modifier, Style};

/// Colour set for one display mode. Only colours change between modes.
pub struct Palette {
    pub background: Color,
    pub card: Color,
    pub header: Color,
    pub highlight: Color,
    pub text: Color,
    pub text_dim: Color,
    pub primary: Color,
    pub border: Color,
    pub error: Color,
}

pub static LIGHT: Palette = Palette {
    background: Color::Rgb(245, 245, 245),
    card: Color::Rgb(255, 255, 255),
    header: Color::Rgb(240, 240, 240),
    highlight: Color::Rgb(228, 242, 229),
    text: Color::Rgb(51, 51, 51),
    text_dim: Color::Rgb(102, 102, 102),
    primary: Color::Rgb(76, 175, 80),
    border: Color::Rgb(224, 224, 224),
    error: Color::Rgb(198, 40, 40),
};

pub static DARK: Palette = Palette {
    background: Color::Rgb(18, 18, 18),
    card: Color::Rgb(30, 30, 30),
    header: Color::Rgb(44, 44, 44),
    highlight: Color::Rgb(30, 48, 31),
    text: Color::Rgb(224, 224, 224),
    text_dim: Color::Rgb(160, 160, 160),
    primary: Color::Rgb(129, 199, 132),
    border: Color::Rgb(51, 51, 51),
    error: Color::Rgb(239, 154, 154),
};

pub fn palette(dark_mode: bool) -> &'static Palette {
    if dark_mode { &DARK } else { &LIGHT }
}

impl Palette {
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn surface(&self) -> Style {
        Style::default().fg(self.text).bg(self.card)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub fn bold(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn table_header(&self) -> Style {
        Style::default()
            .fg(self.text)
            .bg(self.header)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight(&self) -> Style {
        Style::default().fg(self.text).bg(self.highlight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_only_swap_colours() {
        assert_eq!(palette(false).primary, LIGHT.primary);
        assert_eq!(palette(true).background, DARK.background);
        assert_ne!(palette(true).base(), palette(false).base());
    }
}
