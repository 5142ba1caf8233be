use super::*;

#[test]
fn endpoint_paths_match_backend_routes() {
    assert_eq!(SIGNUP_PATH, "/user/signup");
    assert_eq!(LOGIN_PATH, "/user/login");
    assert_eq!(UPLOAD_CSV_PATH, "/upload/csv");
    assert_eq!(MONTHLY_TOTALS_PATH, "/query/transactions/totals");
    assert_eq!(CHAT_PROMPT_PATH, "/chat/prompt");
    assert_eq!(CHAT_INSIGHTS_PATH, "/chat/insights");
}

#[test]
fn failure_message_includes_status_text() {
    let err = ApiError::Status { status: 500, status_text: "Internal Server Error".to_owned() };
    assert_eq!(failure_message("Upload", &err), "Upload failed. Error: Internal Server Error");
}

#[test]
fn failure_message_asks_for_login_on_unauthorized() {
    let err = ApiError::Status { status: 401, status_text: "Unauthorized".to_owned() };
    assert_eq!(failure_message("Loading transactions", &err), "Loading transactions failed: please log in again.");
}

#[test]
fn failure_message_is_generic_for_transport_errors() {
    assert_eq!(
        failure_message("Login", &ApiError::Network("offline".to_owned())),
        "Login failed: could not reach the server."
    );
    assert_eq!(
        failure_message("Login", &ApiError::Decode("eof".to_owned())),
        "Login failed: unexpected response."
    );
}
