use super::*;

#[test]
fn status_error_names_endpoint_and_code() {
    let err = ClientError::Status { endpoint: "/comments".to_owned(), status: 503 };
    assert_eq!(err.to_string(), "request to /comments failed: 503");
}

#[test]
fn network_helper_keeps_source_message() {
    let err = ClientError::network("/login", "connection refused");
    assert_eq!(err.to_string(), "request to /login failed: connection refused");
}

#[test]
fn decode_helper_formats_unexpected_response() {
    let err = ClientError::decode("/comments", "missing field `comments`");
    assert_eq!(
        err.to_string(),
        "unexpected response from /comments: missing field `comments`"
    );
}

#[test]
fn missing_target_mentions_element_id() {
    let err = ClientError::MissingTarget("comments-servlet".to_owned());
    assert_eq!(err.to_string(), "missing page element #comments-servlet");
}
