use std::io::Write;
use std::process::{Command, Stdio};

/// Clipboard tool for the current session: pbcopy on macOS, wl-copy on
/// Wayland, xclip on X11.
fn clipboard_tool() -> (&'static str, &'static [&'static str]) {
    #[cfg(target_os = "macos")]
    {
        ("pbcopy", &[])
    }

    #[cfg(target_os = "linux")]
    {
        let session_type = std::env::var("XDG_SESSION_TYPE").unwrap_or_default();
        if session_type == "wayland" {
            ("wl-copy", &[])
        } else {
            ("xclip", &["-selection", "clipboard"])
        }
    }
}

/// Copy text (the Braille string, for this app) to the system clipboard.
/// Braille cells are plain Unicode, so the text is piped as UTF-8 bytes.
pub fn copy_to_clipboard(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (cmd, args) = clipboard_tool();

    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| format!("{cmd}: {e}"))?;

    if let Some(ref mut stdin) = child.stdin {
        stdin.write_all(text.as_bytes())?;
    }

    let status = child.wait()?;
    if !status.success() {
        return Err(format!("{cmd} exited with status {status}").into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_os = "linux")]
    #[test]
    fn tool_follows_the_session_type() {
        // Sequential in one test; the selection reads an env var.
        std::env::set_var("XDG_SESSION_TYPE", "wayland");
        assert_eq!(clipboard_tool(), ("wl-copy", &[] as &[&str]));

        std::env::set_var("XDG_SESSION_TYPE", "x11");
        let (cmd, args) = clipboard_tool();
        assert_eq!(cmd, "xclip");
        assert_eq!(args, ["-selection", "clipboard"]);
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn tool_is_pbcopy() {
        assert_eq!(clipboard_tool().0, "pbcopy");
    }
}
