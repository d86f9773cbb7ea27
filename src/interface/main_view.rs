use super::{
    actions::Actions,
    component::{Component, Frame},
    feed_view::FeedView,
    nav_bar::{NavBar, NAV_BAR_HEIGHT},
    top_bar::{TopBar, TOP_BAR_HEIGHT},
};
use crate::{config::UiConfig, feed::Feed};

use crossterm::event::Event;
use tui::layout::{Constraint, Direction, Layout, Rect};

/// The home screen: fixed chrome around the scrollable feed.
pub struct MainView {
    top_bar: TopBar,
    feed_view: FeedView,
    nav_bar: NavBar,
}

impl MainView {
    pub fn new(actions: Actions, config: UiConfig, feed: Feed) -> Self {
        Self {
            top_bar: TopBar::new(config.clone()),
            nav_bar: NavBar::new(config.clone()),
            feed_view: FeedView::new(actions, config, feed),
        }
    }
}

impl Component for MainView {
    fn draw(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                [
                    Constraint::Length(TOP_BAR_HEIGHT),
                    Constraint::Min(0),
                    Constraint::Length(NAV_BAR_HEIGHT),
                ]
                .as_ref(),
            )
            .split(area);

        self.top_bar.draw(f, chunks[0]);
        self.feed_view.draw(f, chunks[1]);
        self.nav_bar.draw(f, chunks[2]);
    }

    fn handle_event(&mut self, event: Event) {
        self.feed_view.handle_event(event);
    }
}
