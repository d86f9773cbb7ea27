use super::{
    actions::Actions,
    component::{Backend, Component},
    error_handler::ErrorHandler,
    feed_provider::FeedProvider,
};

use crossterm::event::EventStream;
use tokio::select;
use tokio_stream::StreamExt;
use tui::Terminal;

#[derive(Debug)]
pub enum UiMessage {
    Redraw,
    Quit,
}

pub async fn run(terminal: &mut Terminal<Backend>) {
    let mut event_reader = EventStream::new();
    let (ui_sender, ui_receiver) = flume::unbounded();

    let mut root = ErrorHandler::new(ui_sender.clone(), |error_sender| {
        FeedProvider::new(Actions::new(ui_sender.clone(), error_sender))
    });

    run_draw_cycle(terminal, &mut root);

    loop {
        select! {
            Ok(message) = ui_receiver.recv_async() => {
                match message {
                    UiMessage::Redraw => run_draw_cycle(terminal, &mut root),
                    UiMessage::Quit => break,
                }
            },
            Some(Ok(event)) = event_reader.next() => root.handle_event(event),
        };
    }
}

fn run_draw_cycle(terminal: &mut Terminal<Backend>, root: &mut impl Component) {
    terminal
        .draw(|f| root.draw(f, f.size()))
        .expect("Failed to draw interface");
}
