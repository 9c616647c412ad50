//! Decoder for the game's rich text markup.
//!
//! Rich text is plain UTF-8 interleaved with binary payloads framed as
//! `0x02 <kind> <len> <body> 0x03`, where `len` counts the body and the
//! closing `0x03`. Payloads carry icons, colours and line breaks; only the
//! text between them is kept.
use grimoire_core::{RichTextDecoder, TextError};

const PAYLOAD_START: u8 = 0x02;
const PAYLOAD_END: u8 = 0x03;

/// Splits rich text into its plain text segments.
///
/// Segments that begin with a stray `0x03` are remnants of payload framing
/// and are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct SeTextDecoder;

impl SeTextDecoder {
    pub fn new() -> Self {
        Self
    }

    fn push_segment(
        segments: &mut Vec<String>,
        raw: &[u8],
        start: usize,
        end: usize,
    ) -> Result<(), TextError> {
        if start == end {
            return Ok(());
        }
        let text = std::str::from_utf8(&raw[start..end])
            .map_err(|_| TextError::InvalidUtf8 { offset: start })?;
        if !text.starts_with(char::from(PAYLOAD_END)) {
            segments.push(text.to_owned());
        }
        Ok(())
    }
}

impl RichTextDecoder for SeTextDecoder {
    fn decode(&self, raw: &[u8]) -> Result<Vec<String>, TextError> {
        let mut segments = Vec::new();
        let mut text_start = 0;
        let mut cursor = 0;

        while cursor < raw.len() {
            if raw[cursor] != PAYLOAD_START {
                cursor += 1;
                continue;
            }
            Self::push_segment(&mut segments, raw, text_start, cursor)?;

            // kind byte at cursor + 1; the length byte counts the body and the 0x03
            let len = raw
                .get(cursor + 2)
                .copied()
                .ok_or(TextError::TruncatedPayload { offset: cursor })?;
            if len == 0 {
                return Err(TextError::MissingPayloadEnd { offset: cursor });
            }
            let end = cursor + 2 + usize::from(len);
            match raw.get(end) {
                Some(&PAYLOAD_END) => {}
                Some(_) => return Err(TextError::MissingPayloadEnd { offset: cursor }),
                None => return Err(TextError::TruncatedPayload { offset: cursor }),
            }

            cursor = end + 1;
            text_start = cursor;
        }
        Self::push_segment(&mut segments, raw, text_start, raw.len())?;

        Ok(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEW_LINE: [u8; 4] = [0x02, 0x10, 0x01, 0x03];

    fn markup(parts: &[&[u8]]) -> Vec<u8> {
        parts.concat()
    }

    #[test]
    fn plain_text_is_one_segment() {
        let decoder = SeTextDecoder::new();
        assert_eq!(
            decoder.decode("Water Cannon".as_bytes()).unwrap(),
            vec!["Water Cannon".to_owned()]
        );
        assert!(decoder.decode(b"").unwrap().is_empty());
    }

    #[test]
    fn payloads_split_segments() {
        let stars = "★★".as_bytes();
        let raw = markup(&[b"Magical", &NEW_LINE, b"Piercing/Fire", &NEW_LINE, stars]);
        let segments = SeTextDecoder.decode(&raw).unwrap();
        assert_eq!(segments, vec!["Magical", "Piercing/Fire", "★★"]);
    }

    #[test]
    fn payload_bodies_are_skipped() {
        // colour payload wrapping a word
        let raw = markup(&[
            b"Deals ",
            &[0x02, 0x13, 0x03, 0xF2, 0x01, 0x03],
            b"water",
            &[0x02, 0x13, 0x02, 0x01, 0x03],
            b" damage.",
        ]);
        assert_eq!(
            SeTextDecoder.plain_text(&raw).unwrap(),
            "Deals water damage."
        );
    }

    #[test]
    fn payload_bodies_may_contain_framing_bytes() {
        let raw = markup(&[b"Fire", &[0x02, 0x12, 0x03, 0x03, 0x02, 0x03], b"Angon"]);
        assert_eq!(SeTextDecoder.decode(&raw).unwrap(), vec!["Fire", "Angon"]);
    }

    #[test]
    fn stray_terminator_segments_are_dropped() {
        let raw = markup(&[b"\x03stray", &NEW_LINE, b"kept"]);
        assert_eq!(SeTextDecoder.decode(&raw).unwrap(), vec!["kept"]);
    }

    #[test]
    fn whitespace_led_segments_are_kept() {
        let raw = markup(&[
            b"Deals damage.",
            &[0x02, 0x13, 0x02, 0x01, 0x03],
            b"\nAdditional Effect: Slow",
        ]);
        assert_eq!(
            SeTextDecoder.plain_text(&raw).unwrap(),
            "Deals damage.\nAdditional Effect: Slow"
        );
        assert_eq!(
            SeTextDecoder.plain_text(b"\tIndented flavor").unwrap(),
            "\tIndented flavor"
        );
    }

    #[test]
    fn malformed_framing_is_rejected() {
        assert_eq!(
            SeTextDecoder.decode(&[b'a', 0x02, 0x10]),
            Err(TextError::TruncatedPayload { offset: 1 })
        );
        assert_eq!(
            SeTextDecoder.decode(&[0x02, 0x10, 0x02, 0x00]),
            Err(TextError::TruncatedPayload { offset: 0 })
        );
        assert_eq!(
            SeTextDecoder.decode(&[0x02, 0x10, 0x00, 0x03]),
            Err(TextError::MissingPayloadEnd { offset: 0 })
        );
        assert_eq!(
            SeTextDecoder.decode(&[0x02, 0x10, 0x01, 0x00, 0x04]),
            Err(TextError::MissingPayloadEnd { offset: 0 })
        );
        assert_eq!(
            SeTextDecoder.decode(&[0xFF, 0x02, 0x10, 0x00, 0x03]),
            Err(TextError::InvalidUtf8 { offset: 0 })
        );
    }
}
