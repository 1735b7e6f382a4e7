//! Core data types for the Morse transmitter

use core::fmt;

/// Morse code elements
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(Hash))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Element {
    /// Dit (dot, short element)
    Dit,
    /// Dah (dash, long element)
    Dah,
}

impl Element {
    /// Returns the key-down duration of this element in units
    pub const fn duration_units(&self) -> u32 {
        match self {
            Element::Dit => 1,
            Element::Dah => 3,
        }
    }

    /// Printable form, `.` or `-`
    pub const fn as_char(&self) -> char {
        match self {
            Element::Dit => '.',
            Element::Dah => '-',
        }
    }
}

/// Longest code a [`SymbolCode`] can hold
pub const MAX_SYMBOL_LENGTH: u8 = 6;

/// Bit position of the length field in the packed byte form
const LENGTH_SHIFT: u8 = 5;

/// Bit-packed Morse representation of one character.
///
/// `pattern` holds `length` elements, least significant bit first;
/// a 0 bit is a dit and a 1 bit is a dah. Bits at or above `length`
/// are always zero.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SymbolCode {
    length: u8,
    pattern: u8,
}

impl SymbolCode {
    /// Zero-length code of the word space class
    pub const SPACE: SymbolCode = SymbolCode { length: 0, pattern: 0b0 };
    /// Zero-length code of the unknown class
    pub const UNKNOWN: SymbolCode = SymbolCode { length: 0, pattern: 0b1 };

    /// Build a code, capping the length at six and masking unused bits
    pub const fn new(length: u8, pattern: u8) -> Self {
        let length = if length > MAX_SYMBOL_LENGTH { MAX_SYMBOL_LENGTH } else { length };
        if length == 0 {
            return SymbolCode { length: 0, pattern: pattern & 0b1 };
        }
        let mask = ((1u16 << length) - 1) as u8;
        Self { length, pattern: pattern & mask }
    }

    /// Decode the single-byte storage form `0bLLLDDDDD`.
    ///
    /// A six element code sets the low length bit through its sixth
    /// pattern bit, so both `0b110` and `0b111` decode as length 6.
    pub const fn from_packed(byte: u8) -> Self {
        let length = byte >> LENGTH_SHIFT;
        Self::new(length, byte)
    }

    /// Encode into the single-byte storage form
    pub const fn to_packed(&self) -> u8 {
        (self.length << LENGTH_SHIFT) | self.pattern
    }

    pub const fn length(&self) -> u8 {
        self.length
    }

    pub const fn pattern(&self) -> u8 {
        self.pattern
    }

    /// Element at `index`, counting in transmission order
    pub const fn element(&self, index: u8) -> Option<Element> {
        if index >= self.length {
            return None;
        }
        if self.pattern & (1 << index) != 0 {
            Some(Element::Dah)
        } else {
            Some(Element::Dit)
        }
    }

    /// Elements in transmission order
    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        (0..self.length).filter_map(move |i| self.element(i))
    }

    /// Total key-down units of all elements
    pub fn keyed_units(&self) -> u32 {
        self.elements().map(|e| e.duration_units()).sum()
    }
}

impl fmt::Display for SymbolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in self.elements() {
            write!(f, "{}", element.as_char())?;
        }
        Ok(())
    }
}

/// Classification of an input character
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CharClass {
    /// A-Z, either case
    Letter(SymbolCode),
    /// 0-9
    Digit(SymbolCode),
    /// One of the sixteen supported marks
    Punctuation(SymbolCode),
    /// Space, tab or newline
    WordSpace,
    /// Anything else; sent as nothing
    Unknown,
}

impl CharClass {
    /// The code this class resolves to; zero length for spaces and unknowns
    pub const fn code(&self) -> SymbolCode {
        match self {
            CharClass::Letter(code) | CharClass::Digit(code) | CharClass::Punctuation(code) => *code,
            CharClass::WordSpace => SymbolCode::SPACE,
            CharClass::Unknown => SymbolCode::UNKNOWN,
        }
    }
}

/// Transmitter states
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TxState {
    /// Nothing being sent
    Idle,
    /// Line energized for a dit or dah
    KeyDown,
    /// Line released between elements
    KeyUp,
    /// Line released after the last element of a character
    LetterGap,
    /// Line released for a word space
    WordGap,
}

impl TxState {
    /// Returns true if the line is energized in this state
    pub const fn is_keyed(&self) -> bool {
        matches!(self, TxState::KeyDown)
    }
}

/// Configuration rejection reasons
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Words per minute must be at least 1
    ZeroWordsPerMinute,
    /// Words per minute above [`MAX_WPM`] would give a zero-length unit
    WordsPerMinuteTooHigh,
    /// Short fist fraction must lie in 0.0..=1.0
    ShortFistOutOfRange,
}

#[cfg(feature = "std")]
impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroWordsPerMinute => write!(f, "WPM must be greater than zero"),
            ConfigError::WordsPerMinuteTooHigh => write!(f, "WPM must not exceed {}", MAX_WPM),
            ConfigError::ShortFistOutOfRange => write!(f, "Short fist must be between 0.0 and 1.0"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Slow default speed suited to weak receivers
pub const DEFAULT_WPM: u32 = 8;

/// Fastest speed whose unit is still at least one millisecond
pub const MAX_WPM: u32 = crate::timing::PARIS_UNIT_MS;

/// Transmitter configuration parameters
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TransmitterConfig {
    wpm: u32,
    short_fist: f32,
    active_high: bool,
}

impl Default for TransmitterConfig {
    fn default() -> Self {
        Self {
            wpm: DEFAULT_WPM,
            short_fist: 0.0,
            active_high: true,
        }
    }
}

impl TransmitterConfig {
    /// Create a new configuration with validation
    pub fn new(wpm: u32, short_fist: f32, active_high: bool) -> Result<Self, ConfigError> {
        let mut config = Self { active_high, ..Self::default() };
        config.set_wpm(wpm)?;
        config.set_short_fist(short_fist)?;
        Ok(config)
    }

    /// Same configuration with a different line polarity
    pub fn with_active_high(mut self, active_high: bool) -> Self {
        self.active_high = active_high;
        self
    }

    /// Speed in words per minute (PARIS timing)
    pub fn wpm(&self) -> u32 {
        self.wpm
    }

    /// Fraction of a unit trimmed from every key-down
    pub fn short_fist(&self) -> f32 {
        self.short_fist
    }

    /// True if a high line level means key down
    pub fn active_high(&self) -> bool {
        self.active_high
    }

    /// Update the speed; zero or anything above [`MAX_WPM`] is rejected
    /// and the old value kept
    pub fn set_wpm(&mut self, wpm: u32) -> Result<(), ConfigError> {
        if wpm == 0 {
            return Err(ConfigError::ZeroWordsPerMinute);
        }
        if wpm > MAX_WPM {
            return Err(ConfigError::WordsPerMinuteTooHigh);
        }
        self.wpm = wpm;
        Ok(())
    }

    /// Update the short fist fraction; values outside 0.0..=1.0 (and NaN)
    /// are rejected and the old value kept
    pub fn set_short_fist(&mut self, fraction: f32) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(ConfigError::ShortFistOutOfRange);
        }
        self.short_fist = fraction;
        Ok(())
    }
}
