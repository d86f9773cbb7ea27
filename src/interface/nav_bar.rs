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

pub const NAV_BAR_HEIGHT: u16 = 3;

pub struct NavEntry {
    pub icon: &'static str,
    pub label: &'static str,
}

pub const ENTRIES: [NavEntry; 5] = [
    NavEntry {
        icon: "⌂",
        label: "Home",
    },
    NavEntry {
        icon: "◎",
        label: "Explore",
    },
    NavEntry {
        icon: "✚",
        label: "Create",
    },
    NavEntry {
        icon: "▤",
        label: "Subscriptions",
    },
    NavEntry {
        icon: "▣",
        label: "Library",
    },
];

/// "Home" is selected at all times; there is no way to change it.
pub const SELECTED_ENTRY: usize = 0;

pub struct NavBar {
    config: UiConfig,
}

impl NavBar {
    pub fn new(config: UiConfig) -> Self {
        Self { config }
    }

    fn entry_text(&self, entry: &NavEntry) -> Vec<Spans<'static>> {
        if self.config.unicode_icons {
            vec![
                Spans::from(Span::raw(entry.icon)),
                Spans::from(Span::raw(entry.label)),
            ]
        } else {
            vec![Spans::from(Span::raw(entry.label))]
        }
    }
}

impl Component for NavBar {
    fn draw(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let constraints = [Constraint::Ratio(1, 5); 5];
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints.as_ref())
            .split(inner);

        for (index, entry) in ENTRIES.iter().enumerate() {
            let style = if index == SELECTED_ENTRY {
                Style::default()
                    .fg(theme::accent(&self.config))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let paragraph = Paragraph::new(self.entry_text(entry))
                .style(style)
                .alignment(Alignment::Center);
            f.render_widget(paragraph, chunks[index]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_bar_has_exactly_five_entries() {
        assert_eq!(ENTRIES.len(), 5);
    }

    #[test]
    fn home_is_the_selected_entry() {
        assert_eq!(ENTRIES[SELECTED_ENTRY].label, "Home");
    }

    #[test]
    fn exactly_one_entry_is_selected() {
        let selected_count = ENTRIES
            .iter()
            .enumerate()
            .filter(|(index, _)| *index == SELECTED_ENTRY)
            .count();
        assert_eq!(selected_count, 1);
    }

    #[test]
    fn entry_labels_match_the_home_screen() {
        let labels: Vec<&str> = ENTRIES.iter().map(|entry| entry.label).collect();
        assert_eq!(
            labels,
            vec!["Home", "Explore", "Create", "Subscriptions", "Library"]
        );
    }
}
