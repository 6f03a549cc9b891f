use chrono::{DateTime, Local};
use std::fs;
use std::path::PathBuf;

use crate::backend::ProcessingResult;
use crate::i18n::Strings;

/// Body of the downloadable file: both strings under their localized labels.
pub fn format_translation(result: &ProcessingResult, strings: &Strings) -> String {
    format!(
        "{}: {}\n\n{}: {}",
        strings.text_transcription, result.text, strings.braille_translation, result.braille
    )
}

fn filename(now: DateTime<Local>) -> String {
    format!("braille-translation-{}.txt", now.format("%Y%m%d-%H%M%S"))
}

/// Where downloads land: ~/Downloads, else home, else cwd.
fn download_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Write the translation to a timestamped text file and return its path.
pub fn save_translation(
    result: &ProcessingResult,
    strings: &Strings,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = download_dir().join(filename(Local::now()));
    fs::write(&path, format_translation(result, strings))?;
    log::info!("Saved translation to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use chrono::TimeZone;

    fn sample_result() -> ProcessingResult {
        ProcessingResult {
            text: "hello".into(),
            braille: "⠓⠑⠇⠇⠕".into(),
        }
    }

    #[test]
    fn file_body_labels_both_sections() {
        let body = format_translation(&sample_result(), Language::En.strings());
        assert_eq!(
            body,
            "Text Transcription: hello\n\nBraille Translation: ⠓⠑⠇⠇⠕"
        );
    }

    #[test]
    fn file_body_uses_the_active_language() {
        let body = format_translation(&sample_result(), Language::Hi.strings());
        assert!(body.starts_with("पाठ प्रतिलेखन: hello"));
        assert!(body.contains("ब्रेल अनुवाद: ⠓⠑⠇⠇⠕"));
    }

    #[test]
    fn filenames_are_timestamped_text_files() {
        let when = Local.with_ymd_and_hms(2026, 8, 27, 14, 30, 5).unwrap();
        assert_eq!(filename(when), "braille-translation-20260827-143005.txt");
    }
}
