use std::process::{Child, Command, Stdio};

use crate::i18n::Language;

/// Build the synthesizer invocation for the platform: `say` on macOS,
/// speech-dispatcher's `spd-say` on Linux.
fn synthesizer_command(text: &str, language: Language) -> Command {
    #[cfg(target_os = "macos")]
    {
        let mut c = Command::new("say");
        // ~10% below normal, matching the original's 0.9 utterance rate
        c.args(["-r", "160"]).arg(text);
        let _ = language;
        c
    }

    #[cfg(target_os = "linux")]
    {
        let mut c = Command::new("spd-say");
        c.args(["-r", "-10", "-l", language.code()]).arg(text);
        c
    }
}

/// Speak text through the system speech synthesizer.
/// Returns once the synthesizer process has been handed the text;
/// playback continues in the background.
pub fn speak(text: &str, language: Language) -> Result<(), Box<dyn std::error::Error>> {
    if text.trim().is_empty() {
        return Ok(());
    }

    let child = synthesizer_command(text, language)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    reap_in_background(child);

    Ok(())
}

/// Wait on the child from a detached thread so finished synthesizers don't
/// linger as zombies. `say` blocks until playback ends, so waiting inline
/// would stall the UI.
fn reap_in_background(mut child: Child) {
    std::thread::spawn(move || {
        if let Err(e) = child.wait() {
            log::warn!("Failed to reap speech synthesizer: {e}");
        }
    });
}

/// Speak the page heading, for the read-page accessibility button.
pub fn page_summary(language: Language) -> String {
    let strings = language.strings();
    format!("{}. {}", strings.title, strings.subtitle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_summary_joins_title_and_subtitle() {
        let summary = page_summary(Language::En);
        assert!(summary.starts_with("Sparsh Vaani. "));
        assert!(summary.contains("Convert speech to Braille"));
    }

    #[test]
    fn page_summary_is_localized() {
        assert!(page_summary(Language::Hi).starts_with("स्पर्श वाणी. "));
        assert_ne!(page_summary(Language::En), page_summary(Language::Mr));
    }

    #[test]
    fn empty_text_is_a_quiet_no_op() {
        assert!(speak("   ", Language::En).is_ok());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_command_sets_rate_and_language() {
        let c = synthesizer_command("hello", Language::Hi);
        assert_eq!(c.get_program(), "spd-say");
        let args: Vec<_> = c.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(args, ["-r", "-10", "-l", "hi", "hello"]);
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn macos_command_sets_the_rate() {
        let c = synthesizer_command("hello", Language::En);
        assert_eq!(c.get_program(), "say");
        let args: Vec<_> = c.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(args, ["-r", "160", "hello"]);
    }
}
