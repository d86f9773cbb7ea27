use super::{
    component::{Component, Frame},
    theme,
};
use crate::config::UiConfig;

use tui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Paragraph},
};

pub const TOP_BAR_HEIGHT: u16 = 2;

// Cast, create, notifications, profile. All of them are inert.
const ICONS: [&str; 4] = ["⌁", "✚", "⍾", "◉"];
const ASCII_ICONS: [&str; 4] = ["[cast]", "[+]", "[!]", "[o]"];

pub struct TopBar {
    config: UiConfig,
}

impl TopBar {
    pub fn new(config: UiConfig) -> Self {
        Self { config }
    }

    fn icon_label(&self) -> String {
        let icons = if self.config.unicode_icons {
            ICONS
        } else {
            ASCII_ICONS
        };
        icons.join("  ")
    }
}

impl Component for TopBar {
    fn draw(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::BOTTOM);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let icon_label = self.icon_label();
        let icon_width = u16::try_from(icon_label.chars().count()).unwrap_or(0);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(icon_width)].as_ref())
            .split(inner);

        let logo = Paragraph::new(Spans::from(vec![
            Span::styled(
                "▶",
                Style::default()
                    .fg(theme::accent(&self.config))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" TuiTube", Style::default().add_modifier(Modifier::BOLD)),
        ]));
        f.render_widget(logo, chunks[0]);

        let icons = Paragraph::new(icon_label)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Right);
        f.render_widget(icons, chunks[1]);
    }
}
