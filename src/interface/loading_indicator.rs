use super::{
    actions::Actions,
    component::{Component, Frame},
};

use futures_timer::Delay;
use parking_lot::Mutex;
use std::{sync::Arc, time::Duration};
use tui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

pub struct LoadingIndicator {
    dots: Arc<Mutex<usize>>,
    actions: Actions,
}

impl LoadingIndicator {
    pub fn new(actions: Actions) -> Self {
        Self {
            dots: Arc::new(Mutex::new(0)),
            actions,
        }
    }
}

impl Component for LoadingIndicator {
    fn draw(&mut self, f: &mut Frame, area: Rect) {
        let dots = *self.dots.lock();
        let dots = format!("{:.<n$}", "", n = dots);
        let text = format!("Loading{dots:<3}");
        let dialog = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);

        f.render_widget(dialog, area);

        let actions = self.actions.clone();
        let dots = Arc::clone(&self.dots);
        tokio::spawn(async move {
            Delay::new(Duration::from_millis(500)).await;

            {
                let mut dots = dots.lock();
                *dots += 1;
                *dots %= 4;
            }

            actions.redraw_async().await;
        });
    }
}
