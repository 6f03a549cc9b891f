mod app;
mod audio_feedback;
mod backend;
mod clipboard;
mod config;
mod export;
mod i18n;
mod recorder;
mod speech;
mod ui;
mod youtube;

use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;
use libadwaita::prelude::*;

use app::{AppEvent, AppState, InputMode};
use i18n::Language;

fn main() {
    env_logger::init();
    log::info!("Sparsh Vaani starting");

    let application = libadwaita::Application::builder()
        .application_id("io.github.sparshvaani.SparshVaani")
        .build();

    application.connect_activate(on_activate);
    application.run();
}

fn on_activate(app: &libadwaita::Application) {
    // One channel carries user actions and backend results alike
    let (event_tx, event_rx) = async_channel::unbounded::<AppEvent>();

    let state = Rc::new(RefCell::new(AppState::new(event_tx.clone())));
    let widgets = ui::window::build_window(app, &state.borrow().config);

    // Mode selector
    for (button, mode) in [
        (&widgets.voice_mode_button, InputMode::Voice),
        (&widgets.upload_mode_button, InputMode::Upload),
        (&widgets.youtube_mode_button, InputMode::Youtube),
    ] {
        let tx = event_tx.clone();
        button.connect_clicked(move |_| {
            let _ = tx.try_send(AppEvent::ModeSelected(mode));
        });
    }

    // Voice pane
    {
        let tx = event_tx.clone();
        widgets.record_button.connect_clicked(move |_| {
            let _ = tx.try_send(AppEvent::RecordPressed);
        });
    }

    // Upload pane: native file chooser for media files
    {
        let tx = event_tx.clone();
        let parent = widgets.window.clone();
        widgets.choose_file_button.connect_clicked(move |_| {
            let filter = gtk4::FileFilter::new();
            filter.add_mime_type("video/*");
            filter.add_mime_type("audio/*");
            let filters = gtk4::gio::ListStore::new::<gtk4::FileFilter>();
            filters.append(&filter);

            let dialog = gtk4::FileDialog::builder()
                .modal(true)
                .filters(&filters)
                .build();

            let tx_inner = tx.clone();
            dialog.open(
                Some(&parent),
                None::<&gtk4::gio::Cancellable>,
                move |result| {
                    if let Ok(file) = result {
                        if let Some(path) = file.path() {
                            let _ = tx_inner.try_send(AppEvent::FileChosen(path));
                        }
                    }
                },
            );
        });
    }

    // YouTube pane: button and Enter both submit
    {
        let tx = event_tx.clone();
        let entry = widgets.url_entry.clone();
        widgets.extract_button.connect_clicked(move |_| {
            let _ = tx.try_send(AppEvent::YoutubeSubmitted(entry.text().to_string()));
        });
    }
    {
        let tx = event_tx.clone();
        widgets.url_entry.connect_activate(move |entry| {
            let _ = tx.try_send(AppEvent::YoutubeSubmitted(entry.text().to_string()));
        });
    }

    // Result actions
    for (button, event) in [
        (&widgets.copy_button, AppEvent::CopyPressed),
        (&widgets.download_button, AppEvent::DownloadPressed),
        (&widgets.speak_button, AppEvent::SpeakPressed),
    ] {
        let tx = event_tx.clone();
        button.connect_clicked(move |_| {
            let _ = tx.try_send(event.clone());
        });
    }

    // Accessibility controls
    for (button, event) in [
        (&widgets.theme_button, AppEvent::ThemeToggled),
        (&widgets.contrast_button, AppEvent::ContrastToggled),
        (&widgets.read_page_button, AppEvent::ReadPagePressed),
        (&widgets.help_button, AppEvent::HelpPressed),
    ] {
        let tx = event_tx.clone();
        button.connect_clicked(move |_| {
            let _ = tx.try_send(event.clone());
        });
    }

    // Language switcher
    {
        let tx = event_tx.clone();
        widgets.language_dropdown.connect_selected_notify(move |dropdown| {
            let idx = dropdown.selected() as usize;
            if let Some(&language) = Language::ALL.get(idx) {
                let _ = tx.try_send(AppEvent::LanguageChanged(language));
            }
        });
    }

    // Backend URL changes
    {
        let tx = event_tx.clone();
        widgets
            .backend_url_row
            .connect_changed(move |row: &libadwaita::EntryRow| {
                let _ = tx.try_send(AppEvent::BackendUrlChanged(row.text().to_string()));
            });
    }

    // Show the page, then hand the UI handles to the state
    widgets.window.present();
    state.borrow_mut().window = Some(widgets);

    // Attach the event handler
    let state_clone = state.clone();
    gtk4::glib::spawn_future_local(async move {
        while let Ok(event) = event_rx.recv().await {
            app::handle_app_event(&state_clone, event);
        }
    });
}
