use super::*;
use messages::{ChatMessage, render};

#[test]
fn user_message_prints_literally() {
    let out = format_message(&render(ChatMessage::user("<b>hi</b>")), ColorMode::Plain);
    assert_eq!(out, "you> <b>hi</b>\n");
}

#[test]
fn bare_yaml_prints_unfenced_with_copy_hint() {
    let out = format_message(&render(ChatMessage::bot("name: widget\nqty: 3")), ColorMode::Plain);
    assert_eq!(out, "bot>\nname: widget\nqty: 3\n[📋 Copy YAML] (/copy)\n");
}

#[test]
fn prose_without_code_has_no_hint() {
    let out = format_message(&render(ChatMessage::bot("Hello, how can I help you?")), ColorMode::Plain);
    assert_eq!(out, "bot>\nHello, how can I help you?\n");
}

#[test]
fn fenced_blocks_are_highlighted_in_ansi_mode() {
    let node = render(ChatMessage::bot("Rule:\n```yaml\nkey: 1\n```\nDone."));
    let out = format_message(&node, ColorMode::Ansi);
    assert!(out.starts_with("bot>\nRule:\n"), "{out:?}");
    assert!(out.contains("\x1b[38;2;"), "{out:?}");
    assert!(out.contains("Done.\n"));
    assert!(!out.contains(FENCE));
}

#[test]
fn unterminated_fence_still_prints_code() {
    let node = render(ChatMessage::bot("```java\nclass A {}"));
    let out = format_message(&node, ColorMode::Plain);
    assert_eq!(out, format!("bot>\nclass A {{}}\n[📋 Copy YAML] (/copy)\n"));
}

#[test]
fn copy_state_labels_are_bracketed() {
    assert_eq!(format_copy_state(CopyState::Success), "[✅ Copied!]");
    assert_eq!(format_copy_state(CopyState::Failure), "[❌ Failed]");
}

#[test]
fn shared_writer_writes_through() {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let writer = SharedWriter::new(Capture(buf.clone()));
    writer.write_str("hello").expect("write succeeds");
    assert_eq!(buf.lock().expect("lock").as_slice(), b"hello");
}

struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0.lock().map_err(|_| io::Error::other("poisoned"))?.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
