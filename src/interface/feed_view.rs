use super::{
    actions::Actions,
    card_list::{CardList, CARD_HEIGHT},
    component::{Component, Frame},
    theme, thumbnail,
};
use crate::{config::UiConfig, feed::Feed, video::Video};

use crossterm::event::{Event, KeyCode};
use delegate::delegate;
use tui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const THUMBNAIL_HEIGHT: u16 = thumbnail::ART_HEIGHT + 2;
const TITLE_HEIGHT: u16 = 2;

/// Scrollable list of video cards. One card per record, in feed order.
pub struct FeedView {
    actions: Actions,
    config: UiConfig,
    cards: CardList,
}

impl FeedView {
    pub fn new(actions: Actions, config: UiConfig, feed: Feed) -> Self {
        Self {
            actions,
            config,
            cards: CardList::new(feed.videos),
        }
    }

    delegate! {
        to self.cards {
            fn move_up(&mut self);
            fn move_down(&mut self);
            fn move_top(&mut self);
            fn move_bottom(&mut self);
        }
    }

    fn draw_card(&self, f: &mut Frame, area: Rect, video: &Video, highlighted: bool) {
        let border_style = if highlighted {
            Style::default().fg(theme::accent(&self.config))
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let thumbnail_height = THUMBNAIL_HEIGHT.min(area.height);
        let thumbnail_area = Rect::new(area.x, area.y, area.width, thumbnail_height);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let art_area = block.inner(thumbnail_area);
        f.render_widget(block, thumbnail_area);

        if art_area.height > 0 {
            let art = thumbnail::art(&video.thumbnail).join("\n");
            let art = Paragraph::new(art)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            f.render_widget(art, art_area);
        }

        let title_y = area.y + THUMBNAIL_HEIGHT;
        if title_y < area.bottom() {
            let title_height = TITLE_HEIGHT.min(area.bottom() - title_y);
            // Two rows cap the title; the widget clips the overflow.
            let title_area = Rect::new(
                area.x,
                title_y,
                area.width.saturating_sub(2),
                title_height,
            );
            let title = Paragraph::new(&*video.title)
                .style(Style::default().add_modifier(Modifier::BOLD))
                .wrap(Wrap { trim: true });
            f.render_widget(title, title_area);

            // Inert secondary-action affordance.
            let more = Paragraph::new("⋮").style(Style::default().fg(Color::DarkGray));
            f.render_widget(more, Rect::new(area.right() - 1, title_y, 1, 1));
        }

        let meta_y = title_y + TITLE_HEIGHT;
        if meta_y < area.bottom() {
            let meta = Paragraph::new(video.meta_label()).style(Style::default().fg(Color::Gray));
            f.render_widget(meta, Rect::new(area.x, meta_y, area.width, 1));
        }
    }
}

impl Component for FeedView {
    fn draw(&mut self, f: &mut Frame, area: Rect) {
        if self.cards.is_empty() || area.height == 0 || area.width == 0 {
            return;
        }

        let start = self.cards.visible_range(area.height.into()).start;

        let mut y = area.y;
        for index in start..self.cards.len() {
            if y >= area.bottom() {
                break;
            }

            let Some(video) = self.cards.get(index) else { break };
            let height = CARD_HEIGHT.min(area.bottom() - y);
            let card_area = Rect::new(area.x, y, area.width, height);
            self.draw_card(f, card_area, video, index == self.cards.current_index());

            y += CARD_HEIGHT;
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(event) = event {
            match event.code {
                KeyCode::Up => self.move_up(),
                KeyCode::Down => self.move_down(),
                KeyCode::Char('j') => self.move_down(),
                KeyCode::Char('k') => self.move_up(),
                KeyCode::Char('g') => self.move_top(),
                KeyCode::Char('G') => self.move_bottom(),
                _ => return,
            }

            self.actions.redraw();
        }
    }
}
