use crate::config::UiConfig;

use tui::style::Color;

const DEFAULT_ACCENT: Color = Color::Red;

pub fn accent(config: &UiConfig) -> Color {
    parse_color(&config.accent_color).unwrap_or(DEFAULT_ACCENT)
}

pub fn parse_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_color_names_parse() {
        assert_eq!(parse_color("cyan"), Some(Color::Cyan));
        assert_eq!(parse_color("Red"), Some(Color::Red));
        assert_eq!(parse_color("grey"), Some(Color::Gray));
    }

    #[test]
    fn unknown_color_names_fall_back_to_default_accent() {
        assert_eq!(parse_color("mauve"), None);

        let config = UiConfig {
            accent_color: String::from("mauve"),
            ..UiConfig::default()
        };
        assert_eq!(accent(&config), DEFAULT_ACCENT);
    }
}
