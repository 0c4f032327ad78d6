//! Fuzz target: `LineDecoder::push` + `HostCommand::parse_bytes`
//!
//! Streams arbitrary bytes from the host side through the line decoder.
//! It must never panic, never yield a line longer than its buffer, and
//! recover cleanly after a reset.
//!
//! cargo fuzz run fuzz_line_decoder

#![no_main]

use libfuzzer_sys::fuzz_target;
use levelnode::app::commands::HostCommand;
use levelnode::link::codec::{LineDecoder, MAX_LINE_LEN};

fuzz_target!(|data: &[u8]| {
    let mut decoder = LineDecoder::new();

    for &b in data {
        if let Some(Ok(line)) = decoder.push(b) {
            assert!(line.len() <= MAX_LINE_LEN, "line exceeds MAX_LINE_LEN");
            let _ = HostCommand::parse_bytes(line);
        }
        assert!(decoder.pending() <= MAX_LINE_LEN);
    }

    decoder.reset();
    assert_eq!(decoder.pending(), 0);
    if let Some(Ok(line)) = decoder.push(b'\n') {
        assert!(line.is_empty());
    }
});
