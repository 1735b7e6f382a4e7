//! Static Morse symbol tables
//!
//! Patterns are written most significant bit first in the literals, but
//! are transmitted least significant bit first: `0b10` with length 2 is
//! dit then dah, i.e. `A`.

use crate::types::SymbolCode;

const fn code(length: u8, pattern: u8) -> SymbolCode {
    SymbolCode::new(length, pattern)
}

/// Letters A - Z
pub static LETTERS: [SymbolCode; 26] = [
    code(2, 0b00010), // A .-
    code(4, 0b00001), // B -...
    code(4, 0b00101), // C -.-.
    code(3, 0b00001), // D -..
    code(1, 0b00000), // E .
    code(4, 0b00100), // F ..-.
    code(3, 0b00011), // G --.
    code(4, 0b00000), // H ....
    code(2, 0b00000), // I ..
    code(4, 0b01110), // J .---
    code(3, 0b00101), // K -.-
    code(4, 0b00010), // L .-..
    code(2, 0b00011), // M --
    code(2, 0b00001), // N -.
    code(3, 0b00111), // O ---
    code(4, 0b00110), // P .--.
    code(4, 0b01011), // Q --.-
    code(3, 0b00010), // R .-.
    code(3, 0b00000), // S ...
    code(1, 0b00001), // T -
    code(3, 0b00100), // U ..-
    code(4, 0b01000), // V ...-
    code(3, 0b00110), // W .--
    code(4, 0b01001), // X -..-
    code(4, 0b01101), // Y -.--
    code(4, 0b00011), // Z --..
];

/// Digits 0 - 9
pub static DIGITS: [SymbolCode; 10] = [
    code(5, 0b11111), // 0 -----
    code(5, 0b11110), // 1 .----
    code(5, 0b11100), // 2 ..---
    code(5, 0b11000), // 3 ...--
    code(5, 0b10000), // 4 ....-
    code(5, 0b00000), // 5 .....
    code(5, 0b00001), // 6 -....
    code(5, 0b00011), // 7 --...
    code(5, 0b00111), // 8 ---..
    code(5, 0b01111), // 9 ----.
];

/// Supported punctuation, in lookup order
pub static PUNCTUATION: [(char, SymbolCode); 16] = [
    ('!', code(6, 0b110101)), // -.-.--
    ('"', code(6, 0b010010)), // .-..-.
    ('\'', code(6, 0b011110)), // .----.
    ('(', code(5, 0b01101)),  // -.--.
    (')', code(6, 0b101101)), // -.--.-
    ('+', code(5, 0b01010)),  // .-.-.
    (',', code(6, 0b110011)), // --..--
    ('-', code(6, 0b100001)), // -....-
    ('.', code(6, 0b101010)), // .-.-.-
    ('/', code(5, 0b01001)),  // -..-.
    (':', code(6, 0b000111)), // ---...
    (';', code(6, 0b010101)), // -.-.-.
    ('=', code(5, 0b10001)),  // -...-
    ('?', code(6, 0b001100)), // ..--..
    ('@', code(6, 0b010110)), // .--.-.
    ('_', code(6, 0b101100)), // ..--.-
];

/// Look up a punctuation mark
pub fn punctuation(c: char) -> Option<SymbolCode> {
    PUNCTUATION
        .iter()
        .find(|(mark, _)| *mark == c)
        .map(|(_, code)| *code)
}
