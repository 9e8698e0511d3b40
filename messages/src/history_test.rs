use super::*;
use crate::copy::CopyState;
use crate::message::Sender;

#[test]
fn new_log_is_empty_without_anchor() {
    let log = MessageLog::new();
    assert!(log.is_empty());
    assert_eq!(log.scroll_anchor(), None);
    assert_eq!(log.latest_copyable(), None);
}

#[test]
fn every_message_produces_exactly_one_node_in_order() {
    let mut log = MessageLog::new();
    log.push(ChatMessage::user("make a rule"));
    log.push(ChatMessage::bot("name: widget"));
    log.push(ChatMessage::bot("anything else?"));

    let senders: Vec<_> = log.messages().iter().map(|node| node.sender).collect();
    assert_eq!(senders, [Sender::User, Sender::Bot, Sender::Bot]);
}

#[test]
fn append_scrolls_to_newest() {
    let mut log = MessageLog::new();
    assert_eq!(log.push(ChatMessage::user("a")), 0);
    assert_eq!(log.scroll_anchor(), Some(0));
    assert_eq!(log.push(ChatMessage::user("b")), 1);
    assert_eq!(log.scroll_anchor(), Some(1));
}

#[test]
fn latest_copyable_skips_plain_nodes() {
    let mut log = MessageLog::new();
    log.push(ChatMessage::bot("key: 1"));
    log.push(ChatMessage::bot("Hello, how can I help you?"));
    log.push(ChatMessage::user("thanks: a lot"));
    assert_eq!(log.latest_copyable(), Some(0));
}

#[test]
fn copy_control_mut_reaches_node_state() {
    let mut log = MessageLog::new();
    let index = log.push(ChatMessage::bot("```yaml\nkey: 1\n```"));

    let control = log.copy_control_mut(index).expect("copy control");
    let ticket = control.begin();
    control.finish(ticket, &Ok(()));

    let stored = log.get(index).and_then(|node| node.copy.as_ref()).expect("copy control");
    assert_eq!(stored.state(), CopyState::Success);
    assert!(log.copy_control_mut(5).is_none());
}
