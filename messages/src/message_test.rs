use super::*;

#[test]
fn role_class_matches_sender() {
    assert_eq!(Sender::User.role_class(), "user");
    assert_eq!(Sender::Bot.role_class(), "bot");
}

#[test]
fn constructors_set_sender() {
    assert_eq!(ChatMessage::user("hi").sender, Sender::User);
    assert_eq!(ChatMessage::bot("hi").sender, Sender::Bot);
    assert_eq!(ChatMessage::bot("hi").text, "hi");
}

#[test]
fn outbound_text_trims_and_rejects_blank() {
    assert_eq!(outbound_text("  move javax to jakarta \n"), Some("move javax to jakarta".to_owned()));
    assert_eq!(outbound_text("   "), None);
    assert_eq!(outbound_text(""), None);
}
