use std::cell::RefCell;
use std::rc::Rc;

use super::pipeline::dispatch_file_upload;
use super::recording::{finish_recording, start_recording};
use super::state::{AppEvent, AppStatus, AppState, InputMode};
use crate::ui;

/// Handle one event. This is the core state machine of the page.
pub fn handle_app_event(state: &Rc<RefCell<AppState>>, event: AppEvent) {
    match event {
        AppEvent::ModeSelected(mode) => on_mode_selected(state, mode),

        AppEvent::RecordPressed => {
            if state.borrow().status == AppStatus::Idle {
                start_recording(state);
            } else {
                log::info!("Ignoring record press while busy");
            }
        }

        AppEvent::RecordingTimeout => finish_recording(state),

        AppEvent::FileChosen(path) => {
            if state.borrow().status != AppStatus::Idle {
                return;
            }
            log::info!("File chosen: {}", path.display());
            state.borrow_mut().status = AppStatus::Processing;
            {
                let s = state.borrow();
                let strings = s.strings();
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                if let Some(ref w) = s.window {
                    ui::window::show_toast(w, &format!("{}: \"{name}\"", strings.file_uploaded));
                    ui::window::set_processing(w, true);
                }
            }
            dispatch_file_upload(state, path);
        }

        AppEvent::YoutubeSubmitted(url) => {
            let s = state.borrow();
            let strings = s.strings();
            if let Some(ref w) = s.window {
                if url.trim().is_empty() {
                    ui::window::show_toast(w, strings.enter_youtube_url);
                } else if !crate::youtube::is_youtube_url(&url) {
                    ui::window::show_toast(w, strings.invalid_youtube_url);
                } else {
                    // Extraction lives server-side and isn't available yet
                    log::info!("YouTube URL accepted but extraction is unavailable: {url}");
                    ui::window::show_toast(w, strings.youtube_not_available);
                }
            }
        }

        AppEvent::ProcessingComplete(result) => {
            log::info!("Translation complete ({} chars)", result.text.len());
            {
                let mut s = state.borrow_mut();
                s.status = AppStatus::Idle;
                s.result = Some(result.clone());
            }
            let s = state.borrow();
            let strings = s.strings();
            if let Some(ref w) = s.window {
                ui::window::set_processing(w, false);
                ui::window::show_result(w, &result);
                ui::window::show_toast(w, strings.translation_complete_toast);
            }
        }

        AppEvent::ProcessingError(msg) => {
            log::error!("Processing error: {msg}");
            {
                let mut s = state.borrow_mut();
                s.status = AppStatus::Idle;
                s.capture = None;
            }
            crate::audio_feedback::play_cue(crate::audio_feedback::Cue::Error);
            let s = state.borrow();
            let strings = s.strings();
            if let Some(ref w) = s.window {
                ui::window::set_recording(w, false, strings);
                ui::window::set_processing(w, false);
                ui::window::show_toast(w, &format!("{}: {msg}", strings.processing_failed));
            }
        }

        AppEvent::CopyPressed => {
            let s = state.borrow();
            let strings = s.strings();
            let Some(ref result) = s.result else { return };
            match crate::clipboard::copy_to_clipboard(&result.braille) {
                Ok(()) => {
                    if let Some(ref w) = s.window {
                        ui::window::show_toast(w, strings.braille_copied);
                    }
                }
                Err(e) => {
                    log::error!("Clipboard error: {e}");
                    if let Some(ref w) = s.window {
                        ui::window::show_toast(w, &format!("{}: {e}", strings.copy_failed));
                    }
                }
            }
        }

        AppEvent::DownloadPressed => {
            let s = state.borrow();
            let strings = s.strings();
            let Some(ref result) = s.result else { return };
            match crate::export::save_translation(result, strings) {
                Ok(path) => {
                    if let Some(ref w) = s.window {
                        ui::window::show_toast(
                            w,
                            &format!("{} — {}", strings.download_success, path.display()),
                        );
                    }
                }
                Err(e) => {
                    log::error!("Download failed: {e}");
                    if let Some(ref w) = s.window {
                        ui::window::show_toast(w, &format!("{}: {e}", strings.download_failed));
                    }
                }
            }
        }

        AppEvent::SpeakPressed => {
            let s = state.borrow();
            let strings = s.strings();
            let Some(ref result) = s.result else { return };
            match crate::speech::speak(&result.text, s.config.language) {
                Ok(()) => {
                    if let Some(ref w) = s.window {
                        ui::window::show_toast(w, strings.reading_aloud);
                    }
                }
                Err(e) => {
                    log::error!("Speech error: {e}");
                    if let Some(ref w) = s.window {
                        ui::window::show_toast(w, &format!("{}: {e}", strings.speech_failed));
                    }
                }
            }
        }

        AppEvent::ReadPagePressed => {
            let s = state.borrow();
            let strings = s.strings();
            let summary = crate::speech::page_summary(s.config.language);
            match crate::speech::speak(&summary, s.config.language) {
                Ok(()) => {
                    if let Some(ref w) = s.window {
                        ui::window::show_toast(w, strings.reading_page);
                    }
                }
                Err(e) => {
                    log::error!("Speech error: {e}");
                    if let Some(ref w) = s.window {
                        ui::window::show_toast(w, &format!("{}: {e}", strings.speech_failed));
                    }
                }
            }
        }

        AppEvent::HelpPressed => {
            let s = state.borrow();
            if let Some(ref w) = s.window {
                ui::window::show_toast(w, s.strings().help_message);
            }
        }

        AppEvent::ThemeToggled => {
            let dark = {
                let mut s = state.borrow_mut();
                s.dark_theme = !s.dark_theme;
                s.dark_theme
            };
            let scheme = if dark {
                libadwaita::ColorScheme::ForceDark
            } else {
                libadwaita::ColorScheme::ForceLight
            };
            libadwaita::StyleManager::default().set_color_scheme(scheme);
            let s = state.borrow();
            let strings = s.strings();
            if let Some(ref w) = s.window {
                let message = if dark {
                    strings.dark_mode_enabled
                } else {
                    strings.light_mode_enabled
                };
                ui::window::show_toast(w, message);
            }
        }

        AppEvent::ContrastToggled => {
            let enabled = {
                let mut s = state.borrow_mut();
                s.high_contrast = !s.high_contrast;
                s.high_contrast
            };
            let s = state.borrow();
            let strings = s.strings();
            if let Some(ref w) = s.window {
                ui::window::set_high_contrast(w, enabled);
                let message = if enabled {
                    strings.high_contrast_enabled
                } else {
                    strings.high_contrast_disabled
                };
                ui::window::show_toast(w, message);
            }
        }

        AppEvent::LanguageChanged(language) => {
            {
                let mut s = state.borrow_mut();
                if s.config.language == language {
                    return;
                }
                s.config.language = language;
                if let Err(e) = s.config.save() {
                    log::warn!("Failed to save config: {e}");
                }
            }
            log::info!("UI language switched to {}", language.code());
            let s = state.borrow();
            if let Some(ref w) = s.window {
                ui::window::apply_language(w, language.strings());
            }
        }

        AppEvent::BackendUrlChanged(url) => {
            let mut s = state.borrow_mut();
            if s.config.backend_url == url {
                return;
            }
            s.config.backend_url = url;
            if let Err(e) = s.config.save() {
                log::warn!("Failed to save config: {e}");
            }
        }
    }
}

fn on_mode_selected(state: &Rc<RefCell<AppState>>, mode: InputMode) {
    {
        let mut s = state.borrow_mut();
        if s.status == AppStatus::Recording {
            log::info!("Recording cancelled by mode change");
            s.capture = None;
            s.status = AppStatus::Idle;
            // The auto-stop timer is still armed; without this it would
            // fire into a later recording and cut it short.
            if let Some(timer) = s.record_timer.take() {
                timer.remove();
            }
        }
        s.mode = Some(mode);
        s.result = None;
    }
    let s = state.borrow();
    let strings = s.strings();
    if let Some(ref w) = s.window {
        ui::window::set_active_mode(w, mode);
        ui::window::clear_result(w);
        ui::window::set_recording(w, false, strings);
    }
}

// The handler only touches widgets behind `if let Some(ref w) = s.window`,
// so the state machine itself runs fine without a display.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ProcessingResult;

    fn test_state() -> Rc<RefCell<AppState>> {
        let (tx, _rx) = async_channel::unbounded();
        Rc::new(RefCell::new(AppState::new(tx)))
    }

    fn sample_result() -> ProcessingResult {
        ProcessingResult {
            text: "hello".into(),
            braille: "⠓⠑⠇⠇⠕".into(),
        }
    }

    #[test]
    fn mode_change_cancels_recording_and_clears_result() {
        let state = test_state();
        {
            let mut s = state.borrow_mut();
            s.status = AppStatus::Recording;
            s.result = Some(sample_result());
        }

        handle_app_event(&state, AppEvent::ModeSelected(InputMode::Upload));

        let s = state.borrow();
        assert_eq!(s.status, AppStatus::Idle);
        assert_eq!(s.mode, Some(InputMode::Upload));
        assert!(s.result.is_none());
        assert!(s.capture.is_none());
        assert!(s.record_timer.is_none());
    }

    #[test]
    fn leftover_timeout_does_nothing_when_idle() {
        // A cancelled recording's timer is removed, so a timeout event can
        // only arrive stale; it must not push the app into Processing.
        let state = test_state();

        handle_app_event(&state, AppEvent::RecordingTimeout);

        let s = state.borrow();
        assert_eq!(s.status, AppStatus::Idle);
        assert!(s.result.is_none());
    }

    #[test]
    fn record_press_ignored_while_processing() {
        let state = test_state();
        state.borrow_mut().status = AppStatus::Processing;

        handle_app_event(&state, AppEvent::RecordPressed);

        let s = state.borrow();
        assert_eq!(s.status, AppStatus::Processing);
        assert!(s.capture.is_none());
    }

    #[test]
    fn processing_outcome_updates_state() {
        let state = test_state();
        state.borrow_mut().status = AppStatus::Processing;

        handle_app_event(&state, AppEvent::ProcessingComplete(sample_result()));
        {
            let s = state.borrow();
            assert_eq!(s.status, AppStatus::Idle);
            assert_eq!(s.result, Some(sample_result()));
        }

        state.borrow_mut().status = AppStatus::Processing;
        handle_app_event(&state, AppEvent::ProcessingError("backend down".into()));
        let s = state.borrow();
        assert_eq!(s.status, AppStatus::Idle);
        assert!(s.capture.is_none());
    }
}
