use super::{error_handler::ErrorMsg, ui::UiMessage};

use std::fmt::Display;

/// Clonable handle components use to request redraws, quit the application
/// and surface errors.
#[derive(Clone)]
pub struct Actions {
    ui_sender: flume::Sender<UiMessage>,
    error_sender: flume::Sender<ErrorMsg>,
}

impl Actions {
    pub fn new(ui_sender: flume::Sender<UiMessage>, error_sender: flume::Sender<ErrorMsg>) -> Self {
        Self {
            ui_sender,
            error_sender,
        }
    }

    pub fn quit(&self) {
        self.handle_result(self.ui_sender.send(UiMessage::Quit), false);
    }

    pub fn redraw(&self) {
        self.handle_result(self.ui_sender.send(UiMessage::Redraw), false);
    }

    pub async fn redraw_async(&self) {
        self.handle_result_async(self.ui_sender.send_async(UiMessage::Redraw).await, false)
            .await;
    }
}

// Implement error actions
#[allow(dead_code)]
impl Actions {
    fn error(&self, error: ErrorMsg) {
        self.error_sender
            .send(error)
            .expect("Failed to send error message");
    }

    async fn error_async(&self, error: ErrorMsg) {
        self.error_sender
            .send_async(error)
            .await
            .expect("Failed to send error message");
    }

    pub async fn redraw_or_error_async<T, E: Display>(
        &self,
        result: Result<T, E>,
        ignorable: bool,
    ) {
        match result {
            Ok(_) => self.redraw_async().await,
            Err(error) => {
                self.error_async(ErrorMsg {
                    message: error.to_string(),
                    ignorable,
                })
                .await
            }
        }
    }

    pub fn handle_error<E: Display>(&self, error: E, ignorable: bool) {
        self.error(ErrorMsg {
            message: error.to_string(),
            ignorable,
        });
    }

    pub fn handle_result<T, E: Display>(&self, result: Result<T, E>, ignorable: bool) {
        if let Err(error) = result {
            self.handle_error(error, ignorable);
        }
    }

    pub async fn handle_result_async<T, E: Display>(&self, result: Result<T, E>, ignorable: bool) {
        if let Err(error) = result {
            self.error_async(ErrorMsg {
                message: error.to_string(),
                ignorable,
            })
            .await;
        }
    }
}
