//! HTTP client for the external PDF parsing service.
//!
//! One call per submission: `POST {api_base}/api/v2/parse` with a multipart
//! body carrying the PDF under the `pdf_file` field. No retries, no
//! cancellation; the caller enforces at-most-one in-flight request.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use web_sys::{File, FormData};

use crate::record::DriverApplicationRecord;
use crate::types::{AppError, AppResult};

/// Response envelope from the parsing service.
///
/// Any non-2xx status is a failure regardless of body content; on 2xx,
/// `success` decides between the attached record and the server message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<DriverApplicationRecord>,
}

/// Upload a PDF and return the parsed record.
pub async fn parse_pdf(file: File, api_base: &str) -> AppResult<DriverApplicationRecord> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Transport(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob("pdf_file", &file)
        .map_err(|e| AppError::Transport(format!("Failed to append file: {:?}", e)))?;

    let url = format!("{}/api/v2/parse", api_base);
    let request = Request::post(&url)
        .header("Accept", "application/json")
        .body(form_data)
        .map_err(|e| AppError::Transport(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Transport(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        return Err(AppError::Transport(format!(
            "API Error: {} {}",
            response.status(),
            response.status_text()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| AppError::MalformedResponse(e.to_string()))?;

    interpret_response(&body)
}

/// Decode a 2xx body into a record or a typed failure.
fn interpret_response(body: &str) -> AppResult<DriverApplicationRecord> {
    let envelope: ParseResponse =
        serde_json::from_str(body).map_err(|e| AppError::MalformedResponse(e.to_string()))?;

    if !envelope.success {
        return Err(AppError::Application(
            envelope
                .message
                .unwrap_or_else(|| "PDF parsing failed".to_string()),
        ));
    }

    envelope.data.ok_or_else(|| {
        AppError::MalformedResponse("success response carried no data".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let json = r#"{
            "success": true,
            "data": {
                "full_name": "Jane Doe",
                "has_cdl": true,
                "employment_history": [],
                "extraction_metadata": { "fields_extracted": 63 },
                "parsing_confidence": 91.0
            }
        }"#;

        let record = interpret_response(json).unwrap();
        assert_eq!(record.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(record.parsing_confidence, Some(91.0));
        assert!(record.employment_history.is_empty());
    }

    #[test]
    fn test_application_failure_surfaces_server_message() {
        let json = r#"{ "success": false, "message": "Unreadable PDF" }"#;
        assert_eq!(
            interpret_response(json),
            Err(AppError::Application("Unreadable PDF".to_string()))
        );
    }

    #[test]
    fn test_application_failure_without_message_uses_generic_text() {
        let json = r#"{ "success": false }"#;
        assert_eq!(
            interpret_response(json),
            Err(AppError::Application("PDF parsing failed".to_string()))
        );
    }

    #[test]
    fn test_non_json_body_is_malformed() {
        assert!(matches!(
            interpret_response("<html>gateway timeout</html>"),
            Err(AppError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_success_without_data_is_malformed() {
        assert!(matches!(
            interpret_response(r#"{ "success": true }"#),
            Err(AppError::MalformedResponse(_))
        ));
    }
}
