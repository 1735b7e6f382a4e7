//! Character classification

use crate::symbols::{punctuation, DIGITS, LETTERS};
use crate::types::CharClass;

/// Classify a character and resolve its Morse code.
///
/// Total over `char`: anything without a code is [`CharClass::Unknown`].
pub fn classify(c: char) -> CharClass {
    match c {
        ' ' | '\t' | '\n' => CharClass::WordSpace,
        'a'..='z' => CharClass::Letter(LETTERS[(c as u8 - b'a') as usize]),
        'A'..='Z' => CharClass::Letter(LETTERS[(c as u8 - b'A') as usize]),
        '0'..='9' => CharClass::Digit(DIGITS[(c as u8 - b'0') as usize]),
        _ => match punctuation(c) {
            Some(code) => CharClass::Punctuation(code),
            None => CharClass::Unknown,
        },
    }
}
