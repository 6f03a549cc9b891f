use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use super::state::{AppEvent, AppState};

/// Upload prepared audio bytes to the backend on the tokio runtime.
pub fn dispatch_processing(state: &Rc<RefCell<AppState>>, filename: String, bytes: Vec<u8>) {
    let s = state.borrow();
    let base_url = s.config.backend_url.clone();
    let sender = s.events.clone();

    s.tokio_rt.spawn(async move {
        match crate::backend::process_audio(&base_url, &filename, bytes).await {
            Ok(result) => {
                let _ = sender.send(AppEvent::ProcessingComplete(result)).await;
            }
            Err(e) => {
                let _ = sender.send(AppEvent::ProcessingError(e.to_string())).await;
            }
        }
    });
}

/// Read an uploaded media file and hand it to the backend.
pub fn dispatch_file_upload(state: &Rc<RefCell<AppState>>, path: PathBuf) {
    let s = state.borrow();
    let base_url = s.config.backend_url.clone();
    let sender = s.events.clone();

    s.tokio_rt.spawn(async move {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.bin".into());

        match tokio::fs::read(&path).await {
            Ok(bytes) => match crate::backend::process_audio(&base_url, &filename, bytes).await {
                Ok(result) => {
                    let _ = sender.send(AppEvent::ProcessingComplete(result)).await;
                }
                Err(e) => {
                    let _ = sender.send(AppEvent::ProcessingError(e.to_string())).await;
                }
            },
            Err(e) => {
                let _ = sender
                    .send(AppEvent::ProcessingError(format!(
                        "Failed to read {}: {e}",
                        path.display()
                    )))
                    .await;
            }
        }
    });
}
