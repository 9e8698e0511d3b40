use super::*;

#[test]
fn secure_page_uses_wss() {
    assert_eq!(endpoint_url("https:", "example.com:8443", "/chat/user"), "wss://example.com:8443/chat/user");
}

#[test]
fn plain_page_uses_ws() {
    assert_eq!(endpoint_url("http:", "127.0.0.1:8080", DEFAULT_ENDPOINT_PATH), "ws://127.0.0.1:8080/chat/user");
    assert_eq!(ws_scheme("file:"), "ws");
}

#[test]
fn missing_host_falls_back_to_localhost() {
    assert_eq!(endpoint_url("http:", "", "/chat/user"), "ws://localhost/chat/user");
}

#[test]
fn path_without_leading_slash_is_accepted() {
    assert_eq!(endpoint_url("http", "h", "chat/user"), "ws://h/chat/user");
}

#[test]
fn origin_string_is_split_into_scheme_and_host() {
    assert_eq!(
        endpoint_url_from_origin("HTTPS://rules.example/ignored", "/chat/user"),
        Ok("wss://rules.example/chat/user".to_owned())
    );
    assert_eq!(
        endpoint_url_from_origin("http://localhost:8080", "/chat/user"),
        Ok("ws://localhost:8080/chat/user".to_owned())
    );
}

#[test]
fn origin_errors_are_typed() {
    assert_eq!(
        endpoint_url_from_origin("localhost:8080", "/chat/user"),
        Err(EndpointError::MalformedOrigin("localhost:8080".to_owned()))
    );
    assert_eq!(
        endpoint_url_from_origin("ftp://x", "/chat/user"),
        Err(EndpointError::UnsupportedScheme("ftp".to_owned()))
    );
}
