use super::*;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

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

struct Broken;

impl Write for Broken {
    fn write(&mut self, _data: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn osc52_sequence_encodes_payload() {
    assert_eq!(osc52_sequence("key: 1"), "\x1b]52;c;a2V5OiAx\x07");
}

#[tokio::test]
async fn write_text_emits_sequence_to_sink() {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let clipboard = Osc52Clipboard::new(SharedWriter::new(Capture(buf.clone())));

    clipboard.write_text("key: 1").await.expect("write succeeds");

    let written = String::from_utf8(buf.lock().expect("lock").clone()).expect("utf8");
    assert_eq!(written, osc52_sequence("key: 1"));
}

#[tokio::test]
async fn broken_sink_is_a_rejected_write() {
    let clipboard = Osc52Clipboard::new(SharedWriter::new(Broken));
    let err = clipboard.write_text("x").await.expect_err("write should fail");
    assert!(matches!(err, ClipboardError::Rejected(_)));
}
