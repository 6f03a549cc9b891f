use gtk4::prelude::*;
use libadwaita::prelude::*;

use crate::app::InputMode;
use crate::backend::ProcessingResult;
use crate::config::Config;
use crate::i18n::{Language, Strings};

/// Handles returned from building the main window. Everything whose text
/// changes with the UI language (or whose state the event handler drives)
/// is kept here.
pub struct WindowWidgets {
    pub window: libadwaita::ApplicationWindow,
    pub toast_overlay: libadwaita::ToastOverlay,

    // Header controls
    pub theme_button: gtk4::Button,
    pub contrast_button: gtk4::Button,
    pub read_page_button: gtk4::Button,
    pub help_button: gtk4::Button,
    pub language_dropdown: gtk4::DropDown,

    // Hero
    pub title_label: gtk4::Label,
    pub subtitle_label: gtk4::Label,
    pub voice_mode_button: gtk4::Button,
    pub upload_mode_button: gtk4::Button,
    pub youtube_mode_button: gtk4::Button,
    voice_mode_content: libadwaita::ButtonContent,
    upload_mode_content: libadwaita::ButtonContent,
    youtube_mode_content: libadwaita::ButtonContent,

    // Input panes
    pub input_stack: gtk4::Stack,
    voice_title_label: gtk4::Label,
    voice_desc_label: gtk4::Label,
    pub record_button: gtk4::Button,
    record_hint_label: gtk4::Label,
    upload_title_label: gtk4::Label,
    upload_desc_label: gtk4::Label,
    pub choose_file_button: gtk4::Button,
    choose_file_content: libadwaita::ButtonContent,
    formats_label: gtk4::Label,
    youtube_title_label: gtk4::Label,
    youtube_desc_label: gtk4::Label,
    pub url_entry: gtk4::Entry,
    pub extract_button: gtk4::Button,

    // Processing indicator
    processing_box: gtk4::Box,
    spinner: gtk4::Spinner,
    processing_label: gtk4::Label,
    processing_desc_label: gtk4::Label,

    // Result display
    result_box: gtk4::Box,
    result_title_label: gtk4::Label,
    result_desc_label: gtk4::Label,
    text_heading_label: gtk4::Label,
    text_label: gtk4::Label,
    pub speak_button: gtk4::Button,
    speak_content: libadwaita::ButtonContent,
    braille_heading_label: gtk4::Label,
    braille_label: gtk4::Label,
    pub copy_button: gtk4::Button,
    copy_content: libadwaita::ButtonContent,
    pub download_button: gtk4::Button,
    download_content: libadwaita::ButtonContent,

    // Footer + settings
    tagline_label: gtk4::Label,
    made_by_label: gtk4::Label,
    pub backend_url_row: libadwaita::EntryRow,
}

const APP_CSS: &str = r#"
.hero-title {
    font-size: 36px;
    font-weight: 800;
}
.hero-subtitle {
    font-size: 16px;
}
.record-button {
    min-width: 96px;
    min-height: 96px;
    border-radius: 48px;
}
.record-button.recording {
    background-color: #c01c28;
    color: white;
}
.result-panel {
    background-color: alpha(currentColor, 0.06);
    border-radius: 12px;
    padding: 12px;
}
.braille-text {
    font-size: 26px;
    letter-spacing: 4px;
}
window.high-contrast,
window.high-contrast .result-panel {
    background-color: black;
    color: white;
}
window.high-contrast label {
    color: white;
}
"#;

/// Build the single-page main window.
pub fn build_window(app: &libadwaita::Application, config: &Config) -> WindowWidgets {
    let strings = config.language.strings();

    let window = libadwaita::ApplicationWindow::builder()
        .application(app)
        .title(strings.title)
        .default_width(760)
        .default_height(820)
        .build();

    let css_provider = gtk4::CssProvider::new();
    css_provider.load_from_string(APP_CSS);
    gtk4::style_context_add_provider_for_display(
        &gtk4::gdk::Display::default().unwrap(),
        &css_provider,
        gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );

    let toolbar_view = libadwaita::ToolbarView::new();
    let header = libadwaita::HeaderBar::new();

    // Accessibility controls + language switcher, top right
    let language_dropdown = gtk4::DropDown::from_strings(&[
        Language::En.native_name(),
        Language::Hi.native_name(),
        Language::Mr.native_name(),
    ]);
    let selected = Language::ALL
        .iter()
        .position(|l| *l == config.language)
        .unwrap_or(0) as u32;
    language_dropdown.set_selected(selected);
    header.pack_end(&language_dropdown);

    let help_button = gtk4::Button::from_icon_name("help-about-symbolic");
    header.pack_end(&help_button);
    let contrast_button = gtk4::Button::from_icon_name("display-brightness-symbolic");
    header.pack_end(&contrast_button);
    let read_page_button = gtk4::Button::from_icon_name("audio-volume-high-symbolic");
    header.pack_end(&read_page_button);
    let theme_button = gtk4::Button::from_icon_name("weather-clear-night-symbolic");
    header.pack_end(&theme_button);

    toolbar_view.add_top_bar(&header);

    let content = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    content.set_margin_start(24);
    content.set_margin_end(24);
    content.set_margin_top(16);
    content.set_margin_bottom(16);

    // --- Hero ---
    let title_label = gtk4::Label::new(Some(strings.title));
    title_label.add_css_class("hero-title");
    content.append(&title_label);

    let subtitle_label = gtk4::Label::new(Some(strings.subtitle));
    subtitle_label.add_css_class("hero-subtitle");
    subtitle_label.add_css_class("dim-label");
    subtitle_label.set_wrap(true);
    subtitle_label.set_justify(gtk4::Justification::Center);
    subtitle_label.set_margin_top(8);
    content.append(&subtitle_label);

    let mode_row = gtk4::Box::new(gtk4::Orientation::Horizontal, 12);
    mode_row.set_halign(gtk4::Align::Center);
    mode_row.set_margin_top(20);

    let voice_mode_content = libadwaita::ButtonContent::builder()
        .icon_name("audio-input-microphone-symbolic")
        .label(strings.live_voice_input)
        .build();
    let voice_mode_button = gtk4::Button::new();
    voice_mode_button.set_child(Some(&voice_mode_content));
    voice_mode_button.add_css_class("suggested-action");
    voice_mode_button.add_css_class("pill");
    mode_row.append(&voice_mode_button);

    let upload_mode_content = libadwaita::ButtonContent::builder()
        .icon_name("folder-videos-symbolic")
        .label(strings.upload_video)
        .build();
    let upload_mode_button = gtk4::Button::new();
    upload_mode_button.set_child(Some(&upload_mode_content));
    upload_mode_button.add_css_class("pill");
    mode_row.append(&upload_mode_button);

    let youtube_mode_content = libadwaita::ButtonContent::builder()
        .icon_name("insert-link-symbolic")
        .label(strings.youtube_url)
        .build();
    let youtube_mode_button = gtk4::Button::new();
    youtube_mode_button.set_child(Some(&youtube_mode_content));
    youtube_mode_button.add_css_class("pill");
    mode_row.append(&youtube_mode_button);

    content.append(&mode_row);

    // --- Input panes ---
    let input_stack = gtk4::Stack::new();
    input_stack.set_transition_type(gtk4::StackTransitionType::Crossfade);
    input_stack.set_margin_top(24);

    let placeholder = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    input_stack.add_named(&placeholder, Some("none"));

    // Voice pane
    let voice_pane = gtk4::Box::new(gtk4::Orientation::Vertical, 8);
    voice_pane.set_halign(gtk4::Align::Center);
    let voice_title_label = gtk4::Label::new(Some(strings.live_voice_title));
    voice_title_label.add_css_class("title-2");
    voice_pane.append(&voice_title_label);
    let voice_desc_label = gtk4::Label::new(Some(strings.live_voice_description));
    voice_desc_label.add_css_class("dim-label");
    voice_desc_label.set_wrap(true);
    voice_pane.append(&voice_desc_label);

    let record_button = gtk4::Button::from_icon_name("audio-input-microphone-symbolic");
    record_button.add_css_class("record-button");
    record_button.add_css_class("suggested-action");
    record_button.set_halign(gtk4::Align::Center);
    record_button.set_margin_top(12);
    voice_pane.append(&record_button);

    let record_hint_label = gtk4::Label::new(Some(strings.click_to_record));
    record_hint_label.add_css_class("dim-label");
    record_hint_label.set_margin_top(4);
    voice_pane.append(&record_hint_label);

    input_stack.add_named(&voice_pane, Some("voice"));

    // Upload pane
    let upload_pane = gtk4::Box::new(gtk4::Orientation::Vertical, 8);
    upload_pane.set_halign(gtk4::Align::Center);
    let upload_title_label = gtk4::Label::new(Some(strings.upload_video_title));
    upload_title_label.add_css_class("title-2");
    upload_pane.append(&upload_title_label);
    let upload_desc_label = gtk4::Label::new(Some(strings.upload_video_description));
    upload_desc_label.add_css_class("dim-label");
    upload_desc_label.set_wrap(true);
    upload_pane.append(&upload_desc_label);

    let choose_file_content = libadwaita::ButtonContent::builder()
        .icon_name("document-open-symbolic")
        .label(strings.choose_file)
        .build();
    let choose_file_button = gtk4::Button::new();
    choose_file_button.set_child(Some(&choose_file_content));
    choose_file_button.add_css_class("pill");
    choose_file_button.set_halign(gtk4::Align::Center);
    choose_file_button.set_margin_top(12);
    upload_pane.append(&choose_file_button);

    let formats_label = gtk4::Label::new(Some(strings.supported_formats));
    formats_label.add_css_class("dim-label");
    formats_label.set_margin_top(4);
    upload_pane.append(&formats_label);

    input_stack.add_named(&upload_pane, Some("upload"));

    // YouTube pane
    let youtube_pane = gtk4::Box::new(gtk4::Orientation::Vertical, 8);
    youtube_pane.set_halign(gtk4::Align::Center);
    let youtube_title_label = gtk4::Label::new(Some(strings.youtube_url_title));
    youtube_title_label.add_css_class("title-2");
    youtube_pane.append(&youtube_title_label);
    let youtube_desc_label = gtk4::Label::new(Some(strings.youtube_url_description));
    youtube_desc_label.add_css_class("dim-label");
    youtube_desc_label.set_wrap(true);
    youtube_pane.append(&youtube_desc_label);

    let url_entry = gtk4::Entry::builder()
        .placeholder_text(strings.youtube_url_placeholder)
        .width_chars(40)
        .build();
    url_entry.set_margin_top(12);
    youtube_pane.append(&url_entry);

    let extract_button = gtk4::Button::with_label(strings.extract_and_translate);
    extract_button.add_css_class("suggested-action");
    extract_button.add_css_class("pill");
    extract_button.set_halign(gtk4::Align::Center);
    extract_button.set_margin_top(8);
    youtube_pane.append(&extract_button);

    input_stack.add_named(&youtube_pane, Some("youtube"));

    content.append(&input_stack);

    // --- Processing indicator ---
    let processing_box = gtk4::Box::new(gtk4::Orientation::Vertical, 8);
    processing_box.set_halign(gtk4::Align::Center);
    processing_box.set_margin_top(24);
    processing_box.set_visible(false);

    let spinner = gtk4::Spinner::new();
    spinner.set_size_request(32, 32);
    processing_box.append(&spinner);

    let processing_label = gtk4::Label::new(Some(strings.processing));
    processing_label.add_css_class("title-4");
    processing_box.append(&processing_label);

    let processing_desc_label = gtk4::Label::new(Some(strings.processing_description));
    processing_desc_label.add_css_class("dim-label");
    processing_box.append(&processing_desc_label);

    content.append(&processing_box);

    // --- Result display ---
    let result_box = gtk4::Box::new(gtk4::Orientation::Vertical, 12);
    result_box.set_margin_top(24);
    result_box.set_visible(false);

    let result_title_label = gtk4::Label::new(Some(strings.translation_complete));
    result_title_label.add_css_class("title-2");
    result_title_label.set_xalign(0.0);
    result_box.append(&result_title_label);

    let result_desc_label = gtk4::Label::new(Some(strings.translation_complete_description));
    result_desc_label.add_css_class("dim-label");
    result_desc_label.set_xalign(0.0);
    result_desc_label.set_wrap(true);
    result_box.append(&result_desc_label);

    // Text transcription section
    let text_header = gtk4::Box::new(gtk4::Orientation::Horizontal, 8);
    let text_heading_label = gtk4::Label::new(Some(strings.text_transcription));
    text_heading_label.add_css_class("title-4");
    text_heading_label.set_hexpand(true);
    text_heading_label.set_xalign(0.0);
    text_header.append(&text_heading_label);

    let speak_content = libadwaita::ButtonContent::builder()
        .icon_name("audio-volume-high-symbolic")
        .label(strings.read_aloud)
        .build();
    let speak_button = gtk4::Button::new();
    speak_button.set_child(Some(&speak_content));
    speak_button.add_css_class("flat");
    text_header.append(&speak_button);
    result_box.append(&text_header);

    let text_label = gtk4::Label::new(None);
    text_label.set_wrap(true);
    text_label.set_xalign(0.0);
    text_label.set_selectable(true);
    text_label.add_css_class("result-panel");
    result_box.append(&text_label);

    result_box.append(&gtk4::Separator::new(gtk4::Orientation::Horizontal));

    // Braille section
    let braille_header = gtk4::Box::new(gtk4::Orientation::Horizontal, 8);
    let braille_heading_label = gtk4::Label::new(Some(strings.braille_translation));
    braille_heading_label.add_css_class("title-4");
    braille_heading_label.set_hexpand(true);
    braille_heading_label.set_xalign(0.0);
    braille_header.append(&braille_heading_label);

    let copy_content = libadwaita::ButtonContent::builder()
        .icon_name("edit-copy-symbolic")
        .label(strings.copy)
        .build();
    let copy_button = gtk4::Button::new();
    copy_button.set_child(Some(&copy_content));
    braille_header.append(&copy_button);

    let download_content = libadwaita::ButtonContent::builder()
        .icon_name("document-save-symbolic")
        .label(strings.download)
        .build();
    let download_button = gtk4::Button::new();
    download_button.set_child(Some(&download_content));
    braille_header.append(&download_button);
    result_box.append(&braille_header);

    let braille_label = gtk4::Label::new(None);
    braille_label.set_wrap(true);
    braille_label.set_xalign(0.0);
    braille_label.set_selectable(true);
    braille_label.add_css_class("result-panel");
    braille_label.add_css_class("braille-text");
    result_box.append(&braille_label);

    content.append(&result_box);

    // --- Settings + footer ---
    let backend_group = libadwaita::PreferencesGroup::new();
    backend_group.set_margin_top(24);
    let backend_url_row = libadwaita::EntryRow::builder()
        .title(strings.backend_url)
        .text(&config.backend_url)
        .build();
    backend_group.add(&backend_url_row);
    content.append(&backend_group);

    let tagline_label = gtk4::Label::new(Some(strings.tagline));
    tagline_label.add_css_class("dim-label");
    tagline_label.set_margin_top(24);
    content.append(&tagline_label);

    let made_by_label = gtk4::Label::new(Some(strings.made_by));
    made_by_label.add_css_class("dim-label");
    content.append(&made_by_label);

    // Assemble
    let scrolled = gtk4::ScrolledWindow::builder()
        .hscrollbar_policy(gtk4::PolicyType::Never)
        .child(&content)
        .build();
    toolbar_view.set_content(Some(&scrolled));

    let toast_overlay = libadwaita::ToastOverlay::new();
    toast_overlay.set_child(Some(&toolbar_view));
    window.set_content(Some(&toast_overlay));

    let widgets = WindowWidgets {
        window,
        toast_overlay,
        theme_button,
        contrast_button,
        read_page_button,
        help_button,
        language_dropdown,
        title_label,
        subtitle_label,
        voice_mode_button,
        upload_mode_button,
        youtube_mode_button,
        voice_mode_content,
        upload_mode_content,
        youtube_mode_content,
        input_stack,
        voice_title_label,
        voice_desc_label,
        record_button,
        record_hint_label,
        upload_title_label,
        upload_desc_label,
        choose_file_button,
        choose_file_content,
        formats_label,
        youtube_title_label,
        youtube_desc_label,
        url_entry,
        extract_button,
        processing_box,
        spinner,
        processing_label,
        processing_desc_label,
        result_box,
        result_title_label,
        result_desc_label,
        text_heading_label,
        text_label,
        speak_button,
        speak_content,
        braille_heading_label,
        braille_label,
        copy_button,
        copy_content,
        download_button,
        download_content,
        tagline_label,
        made_by_label,
        backend_url_row,
    };
    apply_language(&widgets, strings);
    widgets
}

/// Retranslate every visible label and tooltip.
pub fn apply_language(w: &WindowWidgets, s: &Strings) {
    w.window.set_title(Some(s.title));

    w.theme_button.set_tooltip_text(Some(s.toggle_theme));
    w.contrast_button.set_tooltip_text(Some(s.high_contrast_mode));
    w.read_page_button.set_tooltip_text(Some(s.read_page_content));
    w.help_button.set_tooltip_text(Some(s.help_accessibility));
    w.language_dropdown.set_tooltip_text(Some(s.switch_language));

    w.title_label.set_text(s.title);
    w.subtitle_label.set_text(s.subtitle);
    w.voice_mode_content.set_label(s.live_voice_input);
    w.upload_mode_content.set_label(s.upload_video);
    w.youtube_mode_content.set_label(s.youtube_url);

    w.voice_title_label.set_text(s.live_voice_title);
    w.voice_desc_label.set_text(s.live_voice_description);
    w.record_hint_label.set_text(s.click_to_record);
    w.upload_title_label.set_text(s.upload_video_title);
    w.upload_desc_label.set_text(s.upload_video_description);
    w.choose_file_content.set_label(s.choose_file);
    w.formats_label.set_text(s.supported_formats);
    w.youtube_title_label.set_text(s.youtube_url_title);
    w.youtube_desc_label.set_text(s.youtube_url_description);
    w.url_entry.set_placeholder_text(Some(s.youtube_url_placeholder));
    w.extract_button.set_label(s.extract_and_translate);

    w.processing_label.set_text(s.processing);
    w.processing_desc_label.set_text(s.processing_description);

    w.result_title_label.set_text(s.translation_complete);
    w.result_desc_label.set_text(s.translation_complete_description);
    w.text_heading_label.set_text(s.text_transcription);
    w.speak_content.set_label(s.read_aloud);
    w.braille_heading_label.set_text(s.braille_translation);
    w.copy_content.set_label(s.copy);
    w.download_content.set_label(s.download);

    w.backend_url_row.set_title(s.backend_url);
    w.tagline_label.set_text(s.tagline);
    w.made_by_label.set_text(s.made_by);
}

/// Stack page name for a mode.
fn stack_page(mode: InputMode) -> &'static str {
    match mode {
        InputMode::Voice => "voice",
        InputMode::Upload => "upload",
        InputMode::Youtube => "youtube",
    }
}

/// Reveal the input pane for the selected mode.
pub fn set_active_mode(w: &WindowWidgets, mode: InputMode) {
    w.input_stack.set_visible_child_name(stack_page(mode));
}

/// Reflect recording state on the record button and hint.
pub fn set_recording(w: &WindowWidgets, recording: bool, s: &Strings) {
    w.record_button.set_sensitive(!recording);
    if recording {
        w.record_button.add_css_class("recording");
        w.record_hint_label.set_text(s.recording);
    } else {
        w.record_button.remove_css_class("recording");
        w.record_hint_label.set_text(s.click_to_record);
    }
}

/// Show or hide the processing indicator; input actions are disabled while on.
pub fn set_processing(w: &WindowWidgets, processing: bool) {
    w.processing_box.set_visible(processing);
    w.spinner.set_spinning(processing);
    w.record_button.set_sensitive(!processing);
    w.choose_file_button.set_sensitive(!processing);
    w.extract_button.set_sensitive(!processing);
}

/// Populate and reveal the result display.
pub fn show_result(w: &WindowWidgets, result: &ProcessingResult) {
    w.text_label.set_text(&result.text);
    w.braille_label.set_text(&result.braille);
    w.result_box.set_visible(true);
}

/// Hide and empty the result display.
pub fn clear_result(w: &WindowWidgets) {
    w.text_label.set_text("");
    w.braille_label.set_text("");
    w.result_box.set_visible(false);
}

/// Flip the window-level high-contrast style.
pub fn set_high_contrast(w: &WindowWidgets, enabled: bool) {
    if enabled {
        w.window.add_css_class("high-contrast");
    } else {
        w.window.remove_css_class("high-contrast");
    }
}

/// Surface a notification toast.
pub fn show_toast(w: &WindowWidgets, message: &str) {
    let toast = libadwaita::Toast::new(message);
    toast.set_timeout(3);
    w.toast_overlay.add_toast(toast);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_mode_has_its_own_stack_page() {
        assert_eq!(stack_page(InputMode::Voice), "voice");
        assert_eq!(stack_page(InputMode::Upload), "upload");
        assert_eq!(stack_page(InputMode::Youtube), "youtube");
    }
}
