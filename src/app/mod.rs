mod event_handler;
mod pipeline;
mod recording;
mod state;

pub use event_handler::handle_app_event;
pub use state::{AppEvent, AppState, InputMode};
