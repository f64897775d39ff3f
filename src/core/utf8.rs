// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! UTF-8 encode/decode, no heap allocation, per `SPEC_FULL.md` §4.2.
//!
//! `decode_one` distinguishes a truncated-but-structurally-valid lead byte (wait for
//! more bytes) from a lead or continuation byte that can never form a valid sequence
//! (drop one byte, no event), matching `original_source/tui.h`'s `tui_parse_input_event`
//! (~line 1710), which takes the `available < len` branch (wait, nothing consumed) and
//! the invalid-byte branch (`tui_input_consume(ctx,1)`, no event) separately. Collapsing
//! both into "emit a replacement character" would turn one multi-byte code point split
//! across two non-blocking reads into spurious `CHAR(U+FFFD)` events and violate
//! `spec.md` §8's "feeding σ byte-by-byte equals feeding σ in one shot" invariant.

/// A successfully decoded code point and the number of bytes it occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    pub ch: char,
    pub len: usize,
}

/// Outcome of attempting to decode one code point from the front of a byte slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf8Decode {
    /// A complete code point, `len` bytes long.
    Complete(Decoded),
    /// A structurally valid lead byte, but `bytes` doesn't yet hold all of its
    /// continuation bytes. Consume nothing and wait for the next read.
    Incomplete,
    /// A lead or continuation byte that can never form a valid sequence. The caller
    /// drops exactly one byte and resumes.
    Invalid,
}

/// Decode one UTF-8 code point from the front of `bytes`.
///
/// Returns `None` only for an empty slice.
#[must_use]
pub fn decode_one(bytes: &[u8]) -> Option<Utf8Decode> {
    let lead = *bytes.first()?;

    if lead < 0x80 {
        return Some(Utf8Decode::Complete(Decoded { ch: lead as char, len: 1 }));
    }

    let (len, lead_bits): (usize, u32) = if lead & 0xE0 == 0xC0 {
        (2, (lead & 0x1F) as u32)
    } else if lead & 0xF0 == 0xE0 {
        (3, (lead & 0x0F) as u32)
    } else if lead & 0xF8 == 0xF0 {
        (4, (lead & 0x07) as u32)
    } else {
        return Some(Utf8Decode::Invalid);
    };

    if bytes.len() < len {
        return Some(Utf8Decode::Incomplete);
    }

    let mut cp = lead_bits;
    for &b in &bytes[1..len] {
        if b & 0xC0 != 0x80 {
            return Some(Utf8Decode::Invalid);
        }
        cp = (cp << 6) | (b & 0x3F) as u32;
    }

    match char::from_u32(cp) {
        Some(ch) => Some(Utf8Decode::Complete(Decoded { ch, len })),
        None => Some(Utf8Decode::Invalid),
    }
}

/// Encode `ch` as 1..4 UTF-8 bytes into `out`, returning the number of bytes written.
///
/// `out` must have room for at least 4 bytes; this never allocates.
#[must_use]
pub fn encode(ch: char, out: &mut [u8; 4]) -> usize {
    ch.encode_utf8(out).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_roundtrip() {
        let mut buf = [0u8; 4];
        let n = encode('H', &mut buf);
        assert_eq!(&buf[..n], b"H");
        assert_eq!(decode_one(&buf[..n]), Some(Utf8Decode::Complete(Decoded { ch: 'H', len: 1 })));
    }

    #[test]
    fn multibyte_roundtrip() {
        for ch in ['\u{A9}', '\u{20AC}', '\u{1F600}'] {
            let mut buf = [0u8; 4];
            let n = encode(ch, &mut buf);
            let Some(Utf8Decode::Complete(decoded)) = decode_one(&buf[..n]) else {
                panic!("expected a complete decode");
            };
            assert_eq!(decoded.ch, ch);
            assert_eq!(decoded.len, n);
        }
    }

    #[test]
    fn truncated_but_valid_lead_byte_waits_for_more_bytes() {
        // Lead byte for a 3-byte sequence, but only 1 byte available so far.
        let bytes = [0xE2u8];
        assert_eq!(decode_one(&bytes), Some(Utf8Decode::Incomplete));
    }

    #[test]
    fn truncated_sequence_completes_once_the_rest_arrives() {
        let mut buf = [0u8; 4];
        let n = encode('\u{20AC}', &mut buf);
        assert_eq!(decode_one(&buf[..1]), Some(Utf8Decode::Incomplete));
        assert_eq!(decode_one(&buf[..n]), Some(Utf8Decode::Complete(Decoded { ch: '\u{20AC}', len: n })));
    }

    #[test]
    fn invalid_lead_byte_is_invalid_not_incomplete() {
        let bytes = [0xFFu8, b'A'];
        assert_eq!(decode_one(&bytes), Some(Utf8Decode::Invalid));
    }

    #[test]
    fn invalid_continuation_byte_is_invalid() {
        let bytes = [0xE2u8, 0x00, 0x00];
        assert_eq!(decode_one(&bytes), Some(Utf8Decode::Invalid));
    }

    #[test]
    fn empty_slice_returns_none() {
        assert_eq!(decode_one(&[]), None);
    }
}
