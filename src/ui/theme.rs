use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub banner: ColorSpec,
    pub text: ColorSpec,
    pub text_muted: ColorSpec,
    pub error: ColorSpec,
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// RGB color specification.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::hacker_news()
    }
}

impl Theme {
    /// Orange on light grey, after the Hacker News front page.
    ///
    pub fn hacker_news() -> Self {
        Theme {
            name: "hacker-news".to_string(),
            primary: ColorSpec::rgb(255, 102, 0),
            banner: ColorSpec::rgb(255, 102, 0),
            text: ColorSpec::rgb(230, 230, 223),
            text_muted: ColorSpec::rgb(130, 130, 130),
            error: ColorSpec::rgb(220, 50, 47),
            border_active: ColorSpec::rgb(255, 102, 0),
            border_normal: ColorSpec::rgb(130, 130, 130),
            highlight_bg: ColorSpec::rgb(255, 102, 0),
            highlight_fg: ColorSpec::rgb(0, 0, 0),
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec::rgb(125, 207, 255),
            banner: ColorSpec::rgb(255, 159, 196),
            text: ColorSpec::rgb(169, 177, 214),
            text_muted: ColorSpec::rgb(117, 121, 148),
            error: ColorSpec::rgb(247, 118, 142),
            border_active: ColorSpec::rgb(125, 207, 255),
            border_normal: ColorSpec::rgb(117, 121, 148),
            highlight_bg: ColorSpec::rgb(125, 207, 255),
            highlight_fg: ColorSpec::rgb(26, 27, 38),
        }
    }

    /// Plain greys for terminals with poor color support.
    ///
    pub fn monochrome() -> Self {
        Theme {
            name: "monochrome".to_string(),
            primary: ColorSpec::rgb(255, 255, 255),
            banner: ColorSpec::rgb(255, 255, 255),
            text: ColorSpec::rgb(208, 208, 208),
            text_muted: ColorSpec::rgb(128, 128, 128),
            error: ColorSpec::rgb(255, 255, 255),
            border_active: ColorSpec::rgb(255, 255, 255),
            border_normal: ColorSpec::rgb(128, 128, 128),
            highlight_bg: ColorSpec::rgb(208, 208, 208),
            highlight_fg: ColorSpec::rgb(0, 0, 0),
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hacker-news" => Some(Self::hacker_news()),
            "tokyo-night" => Some(Self::tokyo_night()),
            "monochrome" => Some(Self::monochrome()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "hacker-news".to_string(),
            "tokyo-night".to_string(),
            "monochrome".to_string(),
        ]
    }
}
