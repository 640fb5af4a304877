/// Keypad digit for each uppercase letter, indexed from `A`.
pub const KEYPAD: [u8; 26] = *b"22233344455566677778889999";

pub fn keypad_digit(ch: char) -> Option<char> {
    if !ch.is_ascii_uppercase() {
        return None;
    }
    let index = (ch as u8 - b'A') as usize;
    Some(KEYPAD[index] as char)
}

/// Replaces uppercase mnemonic letters with their keypad digits. Everything
/// else, lowercase letters included, is left for digit extraction to purge.
pub fn map_letters(raw: &str) -> String {
    raw.chars()
        .map(|ch| keypad_digit(ch).unwrap_or(ch))
        .collect()
}
