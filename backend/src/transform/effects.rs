//! Visual effects: rainbow markup, flipped text, zalgo and waves.

use rand::seq::SliceRandom;
use rand::Rng;

const RAINBOW: [&str; 7] = [
    "#FF0000", "#FF7F00", "#FFFF00", "#00FF00", "#0000FF", "#4B0082", "#9400D3",
];

/// Pairs of characters that look like each other turned upside down.
/// Lookups go both ways, so flipping is its own inverse.
const FLIP_PAIRS: [(char, char); 22] = [
    ('a', 'ɐ'),
    ('b', 'q'),
    ('c', 'ɔ'),
    ('d', 'p'),
    ('e', 'ǝ'),
    ('f', 'ɟ'),
    ('g', 'ƃ'),
    ('h', 'ɥ'),
    ('i', 'ᴉ'),
    ('j', 'ɾ'),
    ('k', 'ʞ'),
    ('m', 'ɯ'),
    ('n', 'u'),
    ('r', 'ɹ'),
    ('t', 'ʇ'),
    ('v', 'ʌ'),
    ('w', 'ʍ'),
    ('y', 'ʎ'),
    ('?', '¿'),
    ('!', '¡'),
    ('.', '˙'),
    (',', '\''),
];

/// Combining marks U+0300..=U+030D.
const ZALGO_MARKS: [char; 14] = [
    '\u{0300}', '\u{0301}', '\u{0302}', '\u{0303}', '\u{0304}', '\u{0305}', '\u{0306}',
    '\u{0307}', '\u{0308}', '\u{0309}', '\u{030A}', '\u{030B}', '\u{030C}', '\u{030D}',
];

/// Chance that a letter picks up a combining mark
pub const ZALGO_DENSITY: f64 = 0.3;

const WAVES: [char; 5] = ['~', '∼', '〜', '～', '˜'];

/// Wrap every non-whitespace character in a coloured span.
///
/// Characters are HTML-escaped inside the span so the fragment can be
/// injected into a page as-is.
pub fn rainbow_html(text: &str) -> String {
    let mut result = String::new();
    let mut color_index = 0;
    let mut buf = [0u8; 4];

    for c in text.chars() {
        if c.is_whitespace() {
            result.push(c);
            continue;
        }
        let color = RAINBOW[color_index % RAINBOW.len()];
        let ch: &str = c.encode_utf8(&mut buf);
        let escaped = html_escape::encode_safe(ch);
        result.push_str(&format!("<span style=\"color: {};\">{}</span>", color, escaped));
        color_index += 1;
    }

    result
}

fn flip(c: char) -> char {
    FLIP_PAIRS
        .iter()
        .find_map(|&(a, b)| {
            if c == a {
                Some(b)
            } else if c == b {
                Some(a)
            } else {
                None
            }
        })
        .unwrap_or(c)
}

/// Lowercase, flip each character, then reverse.
pub fn upside_down(text: &str) -> String {
    let flipped: Vec<char> = text.to_lowercase().chars().map(flip).collect();
    flipped.into_iter().rev().collect()
}

pub fn zalgo<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    let mut result = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        result.push(c);
        if c.is_alphabetic() && rng.gen::<f64>() < ZALGO_DENSITY {
            if let Some(mark) = ZALGO_MARKS.choose(rng) {
                result.push(*mark);
            }
        }
    }
    result
}

/// Surround every other character with a wave glyph.
///
/// The glyph cycles over non-space characters; the even/odd decision uses the
/// character's position in the whole text, spaces included.
pub fn wave_text(text: &str) -> String {
    let mut result = String::new();
    let mut wave_index = 0;

    for (i, c) in text.chars().enumerate() {
        if c == ' ' {
            result.push(' ');
            continue;
        }
        if i % 2 == 0 {
            let wave = WAVES[wave_index % WAVES.len()];
            result.push(wave);
            result.push(c);
            result.push(wave);
        } else {
            result.push(c);
        }
        wave_index += 1;
    }

    result
}
