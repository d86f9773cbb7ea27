use super::{
    component::{Component, Frame},
    dialog::Dialog,
    ui::UiMessage,
};

use crossterm::event::{Event, KeyCode, KeyEvent};
use parking_lot::Mutex;
use std::sync::Arc;
use tui::layout::Rect;

pub struct ErrorMsg {
    pub message: String,
    pub ignorable: bool,
}

/// Wraps the rest of the interface and overlays a dialog whenever a
/// component reports an error. Ignorable errors are dismissed with Esc.
pub struct ErrorHandler {
    ui_sender: flume::Sender<UiMessage>,
    child: Box<dyn Component>,
    error: Arc<Mutex<Option<ErrorMsg>>>,
}

impl ErrorHandler {
    pub fn new<C, CF>(ui_sender: flume::Sender<UiMessage>, child_creator: CF) -> Self
    where
        C: Component + 'static,
        CF: FnOnce(flume::Sender<ErrorMsg>) -> C,
    {
        let (error_sender, error_receiver) = flume::unbounded();

        let new_error_handler = Self {
            ui_sender,
            child: Box::new(child_creator(error_sender)),
            error: Arc::new(Mutex::new(None)),
        };

        new_error_handler.listen_error_msg(error_receiver);
        new_error_handler
    }

    fn listen_error_msg(&self, error_receiver: flume::Receiver<ErrorMsg>) {
        let ui_sender = self.ui_sender.clone();
        let error = Arc::clone(&self.error);
        tokio::spawn(async move {
            while let Ok(new_error) = error_receiver.recv_async().await {
                log::error!("{}", new_error.message);
                {
                    let mut error = error.lock();
                    *error = Some(new_error);
                }
                let _ = ui_sender.send(UiMessage::Redraw);
            }
        });
    }
}

impl Component for ErrorHandler {
    fn draw(&mut self, f: &mut Frame, area: Rect) {
        self.child.draw(f, area);

        if let Some(ref error) = *self.error.lock() {
            Dialog::new_with_body("An error occured", Some(&error.message)).draw(f, area);
        }
    }

    fn handle_event(&mut self, event: Event) {
        let mut error = self.error.lock();
        if let Some(ErrorMsg { ignorable, .. }) = *error {
            if event == Event::Key(KeyEvent::from(KeyCode::Char('q'))) {
                let _ = self.ui_sender.send(UiMessage::Quit);
            } else if ignorable && event == Event::Key(KeyEvent::from(KeyCode::Esc)) {
                *error = None;
                let _ = self.ui_sender.send(UiMessage::Redraw);
            }
        } else {
            self.child.handle_event(event);
        }
    }
}
