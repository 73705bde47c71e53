//! Character encodings: l33t, Morse, binary and ROT13.

/// Classic leet substitutions, case-insensitive
fn leet(c: char) -> Option<char> {
    let mapped = match c.to_ascii_lowercase() {
        'a' => '4',
        'e' => '3',
        'i' => '1',
        'l' => '1',
        'o' => '0',
        's' => '5',
        't' => '7',
        'g' => '9',
        'b' => '6',
        _ => return None,
    };
    Some(mapped)
}

pub fn l33t_speak(text: &str) -> String {
    text.chars().map(|c| leet(c).unwrap_or(c)).collect()
}

fn morse(c: char) -> Option<&'static str> {
    let code = match c {
        'A' => ".-",
        'B' => "-...",
        'C' => "-.-.",
        'D' => "-..",
        'E' => ".",
        'F' => "..-.",
        'G' => "--.",
        'H' => "....",
        'I' => "..",
        'J' => ".---",
        'K' => "-.-",
        'L' => ".-..",
        'M' => "--",
        'N' => "-.",
        'O' => "---",
        'P' => ".--.",
        'Q' => "--.-",
        'R' => ".-.",
        'S' => "...",
        'T' => "-",
        'U' => "..-",
        'V' => "...-",
        'W' => ".--",
        'X' => "-..-",
        'Y' => "-.--",
        'Z' => "--..",
        '0' => "-----",
        '1' => ".----",
        '2' => "..---",
        '3' => "...--",
        '4' => "....-",
        '5' => ".....",
        '6' => "-....",
        '7' => "--...",
        '8' => "---..",
        '9' => "----.",
        ' ' => "/",
        _ => return None,
    };
    Some(code)
}

/// Morse encode letters, digits and spaces; anything else is dropped.
pub fn morse_code(text: &str) -> String {
    text.chars()
        .flat_map(char::to_uppercase)
        .filter_map(morse)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Space separated binary code points, zero padded to 8 bits.
pub fn binary(text: &str) -> String {
    text.chars()
        .map(|c| format!("{:08b}", c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn rot13(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'a'..='z' => rotate(c, b'a'),
            'A'..='Z' => rotate(c, b'A'),
            _ => c,
        })
        .collect()
}

fn rotate(c: char, base: u8) -> char {
    (((c as u8 - base + 13) % 26) + base) as char
}
