use super::*;

#[test]
fn explicit_origin_and_path_build_url() {
    let cli = Cli::try_parse_from(["rulechat", "--origin", "https://rules.example", "--endpoint-path", "/chat/ann"])
        .expect("args parse");
    assert_eq!(cli.endpoint_url().expect("url"), "wss://rules.example/chat/ann");
}

#[test]
fn plain_origin_keeps_port() {
    let cli = Cli::try_parse_from(["rulechat", "--origin", "http://127.0.0.1:9000", "--endpoint-path", "/chat/user"])
        .expect("args parse");
    assert_eq!(cli.endpoint_url().expect("url"), "ws://127.0.0.1:9000/chat/user");
}

#[test]
fn malformed_origin_is_an_endpoint_error() {
    let cli = Cli::try_parse_from(["rulechat", "--origin", "localhost", "--endpoint-path", "/chat/user"])
        .expect("args parse");
    assert!(matches!(cli.endpoint_url(), Err(ClientError::Endpoint(_))));
}

#[test]
fn no_color_selects_plain_mode() {
    let cli = Cli::try_parse_from(["rulechat", "--origin", "http://h", "--no-color"]).expect("args parse");
    assert_eq!(cli.color_mode(), ColorMode::Plain);
}
