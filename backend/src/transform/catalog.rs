//! Transformation catalog
//!
//! The fixed set of text effects, addressed on the wire by their snake_case name.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{case, cipher, effects, words};
use crate::error::TransformError;

/// All available transformations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transformation {
    /// HeLlO wOrLd, restarting after sentence punctuation
    AlternateCase,

    /// Each visible character in its own coloured `<span>`
    RainbowHtml,

    /// H3110 W0r1d
    #[serde(rename = "l33t_speak")]
    L33tSpeak,

    /// Reverse the whole string
    Backwards,

    /// Flip letters with Unicode look-alikes and reverse
    UpsideDown,

    /// h-h-hello w-w-world
    Stutter,

    /// Sprinkle combining diacritics over letters
    Zalgo,

    /// International Morse, words separated by `/`
    MorseCode,

    /// 8-bit binary code points
    Binary,

    /// Caesar shift by 13
    Rot13,

    /// Reverse each word in place
    ReverseWords,

    /// rAndOm cAsE
    SpongebobCase,

    /// ~h~e~l~l~o~ style decorations
    WaveText,

    /// helloizzle worldizzle
    Shizzle,
}

impl Transformation {
    /// Catalog order, as listed to clients.
    pub const ALL: [Transformation; 14] = [
        Transformation::AlternateCase,
        Transformation::RainbowHtml,
        Transformation::L33tSpeak,
        Transformation::Backwards,
        Transformation::UpsideDown,
        Transformation::Stutter,
        Transformation::Zalgo,
        Transformation::MorseCode,
        Transformation::Binary,
        Transformation::Rot13,
        Transformation::ReverseWords,
        Transformation::SpongebobCase,
        Transformation::WaveText,
        Transformation::Shizzle,
    ];

    /// Wire name of this transformation
    pub fn name(&self) -> &'static str {
        match self {
            Transformation::AlternateCase => "alternate_case",
            Transformation::RainbowHtml => "rainbow_html",
            Transformation::L33tSpeak => "l33t_speak",
            Transformation::Backwards => "backwards",
            Transformation::UpsideDown => "upside_down",
            Transformation::Stutter => "stutter",
            Transformation::Zalgo => "zalgo",
            Transformation::MorseCode => "morse_code",
            Transformation::Binary => "binary",
            Transformation::Rot13 => "rot13",
            Transformation::ReverseWords => "reverse_words",
            Transformation::SpongebobCase => "spongebob_case",
            Transformation::WaveText => "wave_text",
            Transformation::Shizzle => "shizzle",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Transformation::AlternateCase => "Alternate upper and lower case, restarting after . ! ?",
            Transformation::RainbowHtml => "Wrap each visible character in a rainbow-coloured HTML span",
            Transformation::L33tSpeak => "Replace letters with look-alike digits",
            Transformation::Backwards => "Reverse the whole text",
            Transformation::UpsideDown => "Flip the text upside down with Unicode look-alikes",
            Transformation::Stutter => "Stutter the first letter of longer words",
            Transformation::Zalgo => "Add a light sprinkle of combining diacritics",
            Transformation::MorseCode => "Encode letters and digits as Morse code",
            Transformation::Binary => "Encode each character as 8-bit binary",
            Transformation::Rot13 => "Rotate ASCII letters by 13 places",
            Transformation::ReverseWords => "Reverse each word, keeping word order",
            Transformation::SpongebobCase => "Randomly mix upper and lower case",
            Transformation::WaveText => "Decorate characters with wave symbols",
            Transformation::Shizzle => "Append 'izzle' to every word",
        }
    }

    /// True when the output is an HTML fragment rather than plain text
    pub fn is_html(&self) -> bool {
        matches!(self, Transformation::RainbowHtml)
    }

    /// True when the output depends on the random source
    pub fn is_randomized(&self) -> bool {
        matches!(self, Transformation::Zalgo | Transformation::SpongebobCase)
    }

    /// Apply this transformation to `text`
    pub fn apply<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> String {
        match self {
            Transformation::AlternateCase => case::alternate_case(text),
            Transformation::RainbowHtml => effects::rainbow_html(text),
            Transformation::L33tSpeak => cipher::l33t_speak(text),
            Transformation::Backwards => words::backwards(text),
            Transformation::UpsideDown => effects::upside_down(text),
            Transformation::Stutter => words::stutter(text),
            Transformation::Zalgo => effects::zalgo(text, rng),
            Transformation::MorseCode => cipher::morse_code(text),
            Transformation::Binary => cipher::binary(text),
            Transformation::Rot13 => cipher::rot13(text),
            Transformation::ReverseWords => words::reverse_words(text),
            Transformation::SpongebobCase => case::spongebob_case(text, rng),
            Transformation::WaveText => effects::wave_text(text),
            Transformation::Shizzle => words::shizzle(text),
        }
    }
}

impl FromStr for Transformation {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Transformation::ALL
            .iter()
            .copied()
            .find(|t| t.name() == s)
            .ok_or_else(|| TransformError::UnknownTransformation(s.to_string()))
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Markdown table of the catalog, for the CLI
pub fn transformations_description() -> String {
    let mut out = String::from("Available transformations:\n\n");
    out.push_str("| Name | Description | Output |\n");
    out.push_str("|------|-------------|--------|\n");
    for t in Transformation::ALL {
        let kind = match (t.is_html(), t.is_randomized()) {
            (true, _) => "html",
            (false, true) => "text (random)",
            (false, false) => "text",
        };
        out.push_str(&format!("| {} | {} | {} |\n", t.name(), t.description(), kind));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_name() {
        for t in Transformation::ALL {
            assert_eq!(t.name().parse::<Transformation>(), Ok(t));
        }
    }

    #[test]
    fn test_parse_unknown_name() {
        assert_eq!(
            "invalid_transform".parse::<Transformation>(),
            Err(TransformError::UnknownTransformation("invalid_transform".into()))
        );
        // Names are case sensitive
        assert!("ROT13".parse::<Transformation>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        for t in Transformation::ALL {
            let json = serde_json::to_value(t).unwrap();
            assert_eq!(json, serde_json::Value::String(t.name().to_string()));
        }
        let t: Transformation = serde_json::from_str("\"l33t_speak\"").unwrap();
        assert_eq!(t, Transformation::L33tSpeak);
    }

    #[test]
    fn test_flags() {
        let html: Vec<_> = Transformation::ALL.iter().filter(|t| t.is_html()).collect();
        assert_eq!(html, vec![&Transformation::RainbowHtml]);
        assert!(Transformation::Zalgo.is_randomized());
        assert!(Transformation::SpongebobCase.is_randomized());
        assert!(!Transformation::Stutter.is_randomized());
    }

    #[test]
    fn test_description_lists_every_transformation() {
        let table = transformations_description();
        for t in Transformation::ALL {
            assert!(table.contains(t.name()));
        }
    }
}
