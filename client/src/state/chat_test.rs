use super::*;
use messages::Sender;

#[test]
fn chat_state_default_is_empty_and_disconnected() {
    let state = ChatState::default();
    assert!(state.log.is_empty());
    assert_eq!(state.connection, ConnectionStatus::Disconnected);
    assert!(!state.is_connected());
}

#[test]
fn receive_appends_bot_message_in_arrival_order() {
    let mut state = ChatState::default();
    assert_eq!(state.receive("Hello, how can I help you?"), 0);
    assert_eq!(state.receive("name: widget"), 1);

    let nodes = state.log.messages();
    assert!(nodes.iter().all(|node| node.sender == Sender::Bot));
    assert!(nodes[0].copy.is_none());
    assert!(nodes[1].copy.is_some());
    assert_eq!(state.log.scroll_anchor(), Some(1));
}

#[test]
fn record_sent_appends_literal_user_message() {
    let mut state = ChatState::default();
    let index = state.record_sent("<b>hi</b>");
    let node = state.log.get(index).expect("node exists");
    assert_eq!(node.sender, Sender::User);
    assert_eq!(node.inner_html(), "&lt;b&gt;hi&lt;/b&gt;");
}

#[test]
fn first_frame_promotes_connecting_to_connected() {
    let mut state = ChatState { connection: ConnectionStatus::Connecting, ..ChatState::default() };
    assert_eq!(state.connection.label(), "Connecting");
    assert!(!state.is_connected());

    state.receive("Hello, how can I help you?");
    assert!(state.is_connected());
    assert_eq!(state.connection.label(), "Connected");
}

#[test]
fn mark_open_does_not_revive_a_closed_connection() {
    let mut state = ChatState::default();
    state.mark_open();
    assert_eq!(state.connection, ConnectionStatus::Disconnected);
    assert_eq!(state.connection.label(), "Offline");
}

#[test]
fn submit_trims_and_records_user_message() {
    let mut state = ChatState::default();
    assert_eq!(state.submit("  make a rule \n"), Some("make a rule".to_owned()));

    let node = state.log.get(0).expect("node exists");
    assert_eq!(node.sender, Sender::User);
    assert_eq!(node.source, "make a rule");
}

#[test]
fn submit_ignores_blank_input() {
    let mut state = ChatState::default();
    assert_eq!(state.submit("   \t"), None);
    assert!(state.log.is_empty());
}
