use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gtk4::glib;

use super::pipeline::dispatch_processing;
use super::state::{AppEvent, AppStatus, AppState};
use crate::audio_feedback::{self, Cue};
use crate::ui;

/// Fixed recording window; capture stops automatically when it elapses.
pub const RECORD_SECONDS: u64 = 5;

/// Start microphone capture with the fixed auto-stop timer.
pub fn start_recording(state: &Rc<RefCell<AppState>>) {
    log::info!("Starting recording ({RECORD_SECONDS}s window)");

    {
        let s = state.borrow();
        s.audio_buffer.lock().unwrap().clear();
    }

    audio_feedback::play_cue(Cue::RecordStart);

    let buffer = state.borrow().audio_buffer.clone();
    match crate::recorder::start_capture(buffer) {
        Ok(capture) => {
            let mut s = state.borrow_mut();
            s.sample_rate = capture.sample_rate;
            s.capture = Some(capture);
            s.status = AppStatus::Recording;
        }
        Err(e) => {
            log::error!("Failed to start recording: {e}");
            let sender = state.borrow().events.clone();
            let _ = sender.try_send(AppEvent::ProcessingError(format!("Microphone: {e}")));
            return;
        }
    }

    {
        let s = state.borrow();
        let strings = s.strings();
        if let Some(ref w) = s.window {
            ui::window::set_recording(w, true, strings);
            ui::window::show_toast(w, strings.recording_started);
        }
    }

    // The timer is the only thing that ends a recording. Cancelling a
    // recording must remove it, or it would fire into the next one.
    let sender = state.borrow().events.clone();
    let timer = glib::timeout_add_local_once(Duration::from_secs(RECORD_SECONDS), move || {
        let _ = sender.try_send(AppEvent::RecordingTimeout);
    });
    state.borrow_mut().record_timer = Some(timer);
}

/// Stop capture, encode the buffer as WAV, and hand it to the backend.
pub fn finish_recording(state: &Rc<RefCell<AppState>>) {
    if state.borrow().status != AppStatus::Recording {
        return;
    }

    log::info!("Recording window elapsed, stopping capture");

    {
        let mut s = state.borrow_mut();
        // Dropping the stream stops the microphone. The timer has already
        // fired (that is how we got here), so it is only cleared, not removed.
        s.capture = None;
        s.record_timer = None;
    }
    audio_feedback::play_cue(Cue::RecordStop);

    let (samples, sample_rate) = {
        let s = state.borrow();
        let samples: Vec<f32> = s.audio_buffer.lock().unwrap().clone();
        (samples, s.sample_rate)
    };

    if samples.is_empty() {
        state.borrow_mut().status = AppStatus::Idle;
        let s = state.borrow();
        let strings = s.strings();
        if let Some(ref w) = s.window {
            ui::window::set_recording(w, false, strings);
            ui::window::show_toast(w, strings.no_audio_captured);
        }
        return;
    }

    log::info!(
        "Captured {} samples ({:.1}s at {}Hz)",
        samples.len(),
        samples.len() as f32 / sample_rate as f32,
        sample_rate
    );

    let wav = match crate::recorder::encode_wav(&samples, sample_rate) {
        Ok(bytes) => bytes,
        Err(e) => {
            state.borrow_mut().status = AppStatus::Idle;
            let sender = state.borrow().events.clone();
            let _ = sender.try_send(AppEvent::ProcessingError(format!("WAV encoding: {e}")));
            return;
        }
    };

    {
        let mut s = state.borrow_mut();
        s.status = AppStatus::Processing;
    }
    {
        let s = state.borrow();
        let strings = s.strings();
        if let Some(ref w) = s.window {
            ui::window::set_recording(w, false, strings);
            ui::window::set_processing(w, true);
        }
    }

    dispatch_processing(state, "recording.wav".into(), wav);
}
