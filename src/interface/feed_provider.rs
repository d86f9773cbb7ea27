use super::{
    actions::Actions,
    component::{Component, Frame},
    loading_indicator::LoadingIndicator,
    main_view::MainView,
};
use crate::{
    config::UiConfigHandler,
    error::FeedError,
    feed::{FeedSource, SampleSource},
};

use crossterm::event::{Event, KeyCode};
use parking_lot::Mutex;
use std::sync::Arc;
use tui::layout::Rect;

/// Loads the config and the feed source in the background and swaps in the
/// main view once both are ready.
pub struct FeedProvider {
    actions: Actions,
    main_view: Arc<Mutex<Option<MainView>>>,
    loading_indicator: LoadingIndicator,
}

impl FeedProvider {
    pub fn new(actions: Actions) -> Self {
        let provider = Self {
            loading_indicator: LoadingIndicator::new(actions.clone()),
            main_view: Arc::new(Mutex::new(None)),
            actions,
        };

        provider.init();
        provider
    }

    fn init(&self) {
        let actions = self.actions.clone();
        let main_view = Arc::clone(&self.main_view);

        tokio::spawn(async move {
            let init_result = Self::init_impl(actions.clone(), main_view).await;
            actions.redraw_or_error_async(init_result, false).await;
        });
    }

    async fn init_impl(
        actions: Actions,
        main_view: Arc<Mutex<Option<MainView>>>,
    ) -> Result<(), FeedError> {
        let config = UiConfigHandler::load().await?;
        let source = SampleSource::load().await?;
        let feed = source.feed();
        log::info!("feed loaded with {} videos", feed.videos.len());

        let mut main_view = main_view.lock();
        *main_view = Some(MainView::new(actions, config.config(), feed));
        Ok(())
    }
}

impl Component for FeedProvider {
    fn draw(&mut self, f: &mut Frame, area: Rect) {
        if let Some(ref mut main_view) = *self.main_view.lock() {
            main_view.draw(f, area);
        } else {
            self.loading_indicator.draw(f, area);
        }
    }

    fn handle_event(&mut self, event: Event) {
        if matches!(event, Event::Key(event) if event.code == KeyCode::Char('q')) {
            self.actions.quit();
            return;
        }

        if let Some(ref mut main_view) = *self.main_view.lock() {
            main_view.handle_event(event);
        }
    }
}
