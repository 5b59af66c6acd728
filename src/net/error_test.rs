use super::*;

#[test]
fn status_message_uses_error_response_message() {
    let body = r#"{"message":"Asset with ID:42 Not found","status":404,"error":"Not Found","path":"/api/v1/assets/42"}"#;
    assert_eq!(status_message(404, body), "Asset with ID:42 Not found");
}

#[test]
fn status_message_falls_back_to_plain_text_body() {
    assert_eq!(status_message(400, "  validation failed \n"), "validation failed");
}

#[test]
fn status_message_falls_back_to_code() {
    assert_eq!(status_message(503, ""), "HTTP 503");
}

#[test]
fn from_status_formats_display() {
    let err = ApiError::from_status(500, r#"{"error":"Internal Server Error"}"#);
    assert_eq!(err.to_string(), "server returned 500: Internal Server Error");
}

#[test]
fn rejection_classification() {
    assert!(ApiError::Transport("offline".into()).is_rejection());
    assert!(ApiError::Encode("bad".into()).is_rejection());
    assert!(ApiError::Unavailable.is_rejection());
    assert!(!ApiError::Decode("eof".into()).is_rejection());
    assert!(!ApiError::from_status(404, "").is_rejection());
}
