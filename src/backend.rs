use serde::Deserialize;

/// The one record that crosses component boundaries: the backend's answer.
/// Braille is an opaque string here; the backend owns the encoding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProcessingResult {
    pub text: String,
    pub braille: String,
}

/// Error-detail body the backend returns on failure.
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

fn endpoint(base_url: &str) -> String {
    format!("{}/process-audio", base_url.trim_end_matches('/'))
}

/// Upload one media file to the backend and await transcription + Braille.
///
/// The backend accepts multipart form data with a single `file` field and
/// answers `{ "text": ..., "braille": ... }`. Any non-success status is
/// turned into a single error message for the toast.
pub async fn process_audio(
    base_url: &str,
    filename: &str,
    bytes: Vec<u8>,
) -> Result<ProcessingResult, Box<dyn std::error::Error + Send + Sync>> {
    let url = endpoint(base_url);
    log::info!("Uploading {} ({} bytes) to {url}", filename, bytes.len());

    let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
    let form = reqwest::multipart::Form::new().part("file", part);

    let client = reqwest::Client::new();
    let resp = client.post(&url).multipart(form).send().await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(error_message(status.as_u16(), &body).into());
    }

    let result: ProcessingResult = resp.json().await?;
    Ok(result)
}

/// Prefer the backend's `detail` field; fall back to the bare status.
fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) if !err.detail.is_empty() => err.detail,
        _ => format!("Backend returned status {status}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_success_body() {
        let result: ProcessingResult =
            serde_json::from_str(r#"{"text":"hello world","braille":"⠓⠑⠇⠇⠕ ⠺⠕⠗⠇⠙"}"#)
                .unwrap();
        assert_eq!(result.text, "hello world");
        assert_eq!(result.braille, "⠓⠑⠇⠇⠕ ⠺⠕⠗⠇⠙");
    }

    #[test]
    fn extracts_the_detail_from_an_error_body() {
        let msg = error_message(422, r#"{"detail":"Unsupported audio format"}"#);
        assert_eq!(msg, "Unsupported audio format");
    }

    #[test]
    fn falls_back_to_status_for_unparseable_bodies() {
        assert_eq!(error_message(500, "<html>oops</html>"), "Backend returned status 500");
        assert_eq!(error_message(502, ""), "Backend returned status 502");
        assert_eq!(error_message(400, r#"{"detail":""}"#), "Backend returned status 400");
    }

    #[test]
    fn endpoint_tolerates_a_trailing_slash() {
        assert_eq!(
            endpoint("http://localhost:8000/"),
            "http://localhost:8000/process-audio"
        );
        assert_eq!(
            endpoint("http://localhost:8000"),
            "http://localhost:8000/process-audio"
        );
    }
}
