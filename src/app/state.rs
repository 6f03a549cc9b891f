use std::sync::{Arc, Mutex};

use gtk4::glib;

use crate::backend::ProcessingResult;
use crate::config::Config;
use crate::i18n::{Language, Strings};
use crate::recorder::Capture;
use crate::ui::window::WindowWidgets;

/// The three mutually exclusive input modes of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Voice,
    Upload,
    Youtube,
}

/// Application status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppStatus {
    Idle,
    Recording,
    Processing,
}

/// Events delivered to the GTK main thread's handler. User actions and
/// background-task results all flow through the same channel.
#[derive(Debug, Clone)]
pub enum AppEvent {
    ModeSelected(InputMode),
    RecordPressed,
    RecordingTimeout,
    FileChosen(std::path::PathBuf),
    YoutubeSubmitted(String),
    ProcessingComplete(ProcessingResult),
    ProcessingError(String),
    CopyPressed,
    DownloadPressed,
    SpeakPressed,
    ReadPagePressed,
    HelpPressed,
    ThemeToggled,
    ContrastToggled,
    LanguageChanged(Language),
    BackendUrlChanged(String),
}

/// Central application state. Lives on the GTK main thread inside Rc<RefCell<>>.
pub struct AppState {
    pub status: AppStatus,
    pub mode: Option<InputMode>,
    pub config: Config,
    /// Latest backend answer; replaced wholesale on each submission.
    pub result: Option<ProcessingResult>,

    // Session-only accessibility toggles (intentionally not persisted)
    pub dark_theme: bool,
    pub high_contrast: bool,

    // Recording state
    pub audio_buffer: Arc<Mutex<Vec<f32>>>,
    pub capture: Option<Capture>,
    pub sample_rate: u32,
    /// Pending auto-stop timer; must be removed when a recording is
    /// cancelled, or it would cut the next recording short.
    pub record_timer: Option<glib::SourceId>,

    pub tokio_rt: tokio::runtime::Runtime,
    pub events: async_channel::Sender<AppEvent>,

    // UI handles
    pub window: Option<WindowWidgets>,
}

impl AppState {
    pub fn new(events: async_channel::Sender<AppEvent>) -> Self {
        let config = Config::load();
        let tokio_rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

        Self {
            status: AppStatus::Idle,
            mode: None,
            config,
            result: None,
            dark_theme: false,
            high_contrast: false,
            audio_buffer: Arc::new(Mutex::new(Vec::new())),
            capture: None,
            sample_rate: 16_000,
            record_timer: None,
            tokio_rt,
            events,
            window: None,
        }
    }

    /// String table for the active UI language.
    pub fn strings(&self) -> &'static Strings {
        self.config.language.strings()
    }
}
