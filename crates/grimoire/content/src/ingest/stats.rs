//! Parser for the compact stats line of a spell.
//!
//! The line reads `<type> <aspect>[/<aspect>...] <rank glyphs>`, e.g.
//! `Magical Piercing/Fire ★★★`. Tokens may be separated by whitespace or by
//! markup payloads. The grammar and vocabulary are closed: anything else
//! means the data source changed shape.
use std::str::FromStr;

use grimoire_core::{
    Aspect, Aspects, DexError, ErrorSeverity, RichTextDecoder, SpellRank, SpellType, TextError,
    UnknownTiming,
};

/// Stats line or timing value outside the closed grammar.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected 3 stat tokens, found {found}")]
    TokenCount { found: usize },

    #[error("unknown spell type '{0}'")]
    UnknownType(String),

    #[error("unknown aspect '{0}'")]
    UnknownAspect(String),

    #[error("rank token '{token}' is not made of '{glyph}' glyphs")]
    RankGlyph { token: String, glyph: char },

    #[error("rank ordinal {ordinal} is outside the rank range")]
    RankOutOfRange { ordinal: usize },

    #[error(transparent)]
    Text(#[from] TextError),

    #[error(transparent)]
    Timing(#[from] UnknownTiming),
}

impl DexError for ParseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            ParseError::TokenCount { .. } => "STATS_TOKEN_COUNT",
            ParseError::UnknownType(_) => "STATS_UNKNOWN_TYPE",
            ParseError::UnknownAspect(_) => "STATS_UNKNOWN_ASPECT",
            ParseError::RankGlyph { .. } => "STATS_RANK_GLYPH",
            ParseError::RankOutOfRange { .. } => "STATS_RANK_OUT_OF_RANGE",
            ParseError::Text(error) => error.error_code(),
            ParseError::Timing(error) => error.error_code(),
        }
    }
}

/// Parsed stats line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatLine {
    pub spell_type: SpellType,
    pub aspects: Aspects,
    pub rank: SpellRank,
}

impl StatLine {
    /// Decodes raw rich text and parses it.
    pub fn decode(
        raw: &[u8],
        decoder: &dyn RichTextDecoder,
        rank_glyph: char,
    ) -> Result<Self, ParseError> {
        let segments = decoder.decode(raw)?;
        let tokens: Vec<&str> = segments
            .iter()
            .flat_map(|segment| segment.split_whitespace())
            .collect();
        Self::from_tokens(&tokens, rank_glyph)
    }

    /// Parses already decoded plain text.
    pub fn parse(text: &str, rank_glyph: char) -> Result<Self, ParseError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        Self::from_tokens(&tokens, rank_glyph)
    }

    fn from_tokens(tokens: &[&str], rank_glyph: char) -> Result<Self, ParseError> {
        let [spell_type, aspects, rank] = tokens else {
            return Err(ParseError::TokenCount {
                found: tokens.len(),
            });
        };

        Ok(Self {
            spell_type: parse_type(spell_type)?,
            aspects: parse_aspects(aspects)?,
            rank: parse_rank(rank, rank_glyph)?,
        })
    }
}

fn parse_type(token: &str) -> Result<SpellType, ParseError> {
    SpellType::from_str(token).map_err(|_| ParseError::UnknownType(token.to_owned()))
}

fn parse_aspects(token: &str) -> Result<Aspects, ParseError> {
    token
        .split('/')
        .map(|part| Aspect::from_str(part).map_err(|_| ParseError::UnknownAspect(part.to_owned())))
        .collect()
}

fn parse_rank(token: &str, glyph: char) -> Result<SpellRank, ParseError> {
    let token = token.trim();
    if !token.chars().all(|c| c == glyph) {
        return Err(ParseError::RankGlyph {
            token: token.to_owned(),
            glyph,
        });
    }
    let ordinal = token.chars().count().saturating_sub(1);
    SpellRank::from_ordinal(ordinal).ok_or(ParseError::RankOutOfRange { ordinal })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::SeTextDecoder;

    const STAR: char = '★';

    #[test]
    fn parses_multi_aspect_line() {
        let line = StatLine::parse("Magical Piercing/Fire ★★★", STAR).unwrap();
        assert_eq!(line.spell_type, SpellType::Magic);
        assert_eq!(line.aspects, Aspects::PIERCING | Aspects::FIRE);
        assert_eq!(line.rank, SpellRank::Three);
    }

    #[test]
    fn parses_single_aspect_line() {
        let line = StatLine::parse("Physical Blunt ★", STAR).unwrap();
        assert_eq!(line.spell_type, SpellType::Physical);
        assert_eq!(line.aspects, Aspects::BLUNT);
        assert_eq!(line.rank, SpellRank::One);
    }

    #[test]
    fn parsing_is_deterministic() {
        let first = StatLine::parse("Magical Water ★★", STAR);
        let second = StatLine::parse("Magical Water ★★", STAR);
        assert_eq!(first, second);
    }

    #[test]
    fn payloads_delimit_tokens() {
        let raw = [
            b"Magical".as_slice(),
            &[0x02, 0x10, 0x01, 0x03],
            b"Ice",
            &[0x02, 0x10, 0x01, 0x03],
            "★★★★★".as_bytes(),
        ]
        .concat();
        let line = StatLine::decode(&raw, &SeTextDecoder, STAR).unwrap();
        assert_eq!(line.aspects, Aspects::ICE);
        assert_eq!(line.rank, SpellRank::Five);
    }

    #[test]
    fn rejects_wrong_token_count() {
        assert_eq!(
            StatLine::parse("Magical Water", STAR),
            Err(ParseError::TokenCount { found: 2 })
        );
        assert_eq!(
            StatLine::parse("Magical Water ★ extra", STAR),
            Err(ParseError::TokenCount { found: 4 })
        );
    }

    #[test]
    fn rejects_unknown_vocabulary() {
        assert_eq!(
            StatLine::parse("Magic Water ★", STAR),
            Err(ParseError::UnknownType("Magic".into()))
        );
        assert_eq!(
            StatLine::parse("Magical Piercing/Fire/Steam ★", STAR),
            Err(ParseError::UnknownAspect("Steam".into()))
        );
        assert_eq!(
            StatLine::parse("Magical Fire/ ★", STAR),
            Err(ParseError::UnknownAspect(String::new()))
        );
    }

    #[test]
    fn rejects_bad_rank() {
        assert_eq!(
            StatLine::parse("Magical Water ★★★★★★", STAR),
            Err(ParseError::RankOutOfRange { ordinal: 5 })
        );
        assert_eq!(
            StatLine::parse("Magical Water ★☆", STAR),
            Err(ParseError::RankGlyph {
                token: "★☆".into(),
                glyph: STAR,
            })
        );
    }
}
