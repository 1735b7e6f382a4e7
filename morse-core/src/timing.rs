//! Timing model: every interval is derived from one unit length
//!
//! One unit is `1200 / wpm` milliseconds (PARIS standard: 50 units per
//! word). Dit:dah is 1:3 and the element, letter and word gaps are
//! 1:3:7 units.

use heapless::Vec;

use crate::encoder::classify;
use crate::hal::Duration;
use crate::types::{CharClass, Element, SymbolCode, TransmitterConfig, TxState, MAX_SYMBOL_LENGTH};

/// Milliseconds per unit at one word per minute
pub const PARIS_UNIT_MS: u32 = 1200;

/// Gap between elements of one character, in units
pub const UNIT_SPACE_SYMBOL: u32 = 1;
/// Extra gap after a character; follows the element gap of its last element
pub const UNIT_SPACE_LETTER: u32 = 3 - UNIT_SPACE_SYMBOL;
/// Word gap; assumed to follow a character, whose element gap it extends
pub const UNIT_SPACE_WORD: u32 = 7 - UNIT_SPACE_SYMBOL;

/// Most intervals one character can need: a key-down and key-up per
/// element plus the letter gap
pub const MAX_PLAN_LEN: usize = MAX_SYMBOL_LENGTH as usize * 2 + 1;

/// Unit length for a speed, truncated to whole milliseconds
pub const fn unit_millis(wpm: u32) -> u32 {
    PARIS_UNIT_MS / wpm
}

/// One timed step of a transmission
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Interval {
    pub state: TxState,
    pub duration: Duration,
}

impl Interval {
    /// Returns true if the line is energized for this interval
    pub const fn is_keyed(&self) -> bool {
        self.state.is_keyed()
    }
}

/// Ordered intervals for one character
pub type Plan = Vec<Interval, MAX_PLAN_LEN>;

/// Interval durations derived from a [`TransmitterConfig`].
///
/// The short fist offset is stored in milliseconds, so it has to be
/// rebuilt whenever the unit changes.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Timing {
    unit: Duration,
    short_fist: Duration,
}

impl Timing {
    pub fn new(config: &TransmitterConfig) -> Self {
        let unit_ms = unit_millis(config.wpm());
        // Round half up; the fraction is never negative
        let short_fist_ms = (config.short_fist() * unit_ms as f32 + 0.5) as u64;
        Self {
            unit: Duration::from_millis(unit_ms as u64),
            short_fist: Duration::from_millis(short_fist_ms.min(unit_ms as u64)),
        }
    }

    /// Basic timing unit (dit duration)
    pub fn unit(&self) -> Duration {
        self.unit
    }

    /// Time cut from the end of every key-down and added to the following key-up
    pub fn short_fist(&self) -> Duration {
        self.short_fist
    }

    /// Energized time of an element, less the short fist offset
    pub fn key_down(&self, element: Element) -> Duration {
        self.unit * element.duration_units() - self.short_fist
    }

    /// Released time after an element, including the short fist offset
    pub fn key_up(&self) -> Duration {
        self.short_fist + self.unit * UNIT_SPACE_SYMBOL
    }

    /// Gap appended after a character's last element gap
    pub fn letter_gap(&self) -> Duration {
        self.unit * UNIT_SPACE_LETTER
    }

    /// Gap sent for a word space
    pub fn word_gap(&self) -> Duration {
        self.unit * UNIT_SPACE_WORD
    }

    /// Intervals for one keyed code: each element as key-down then
    /// key-up, then the letter gap
    pub fn plan_code(&self, code: SymbolCode) -> Plan {
        let mut plan = Plan::new();
        if code.length() == 0 {
            return plan;
        }
        for element in code.elements() {
            // Capacity covers six elements plus the letter gap
            plan.push(Interval { state: TxState::KeyDown, duration: self.key_down(element) }).ok();
            plan.push(Interval { state: TxState::KeyUp, duration: self.key_up() }).ok();
        }
        plan.push(Interval { state: TxState::LetterGap, duration: self.letter_gap() }).ok();
        plan
    }

    /// Intervals for a classified character
    pub fn plan(&self, class: CharClass) -> Plan {
        match class {
            CharClass::Letter(code) | CharClass::Digit(code) | CharClass::Punctuation(code) => {
                self.plan_code(code)
            }
            CharClass::WordSpace => {
                let mut plan = Plan::new();
                plan.push(Interval { state: TxState::WordGap, duration: self.word_gap() }).ok();
                plan
            }
            CharClass::Unknown => Plan::new(),
        }
    }

    /// Total blocking time of one character.
    ///
    /// The short fist only moves time from key-down to key-up, so this is
    /// a whole number of units.
    pub fn char_duration(&self, c: char) -> Duration {
        match classify(c) {
            CharClass::Letter(code) | CharClass::Digit(code) | CharClass::Punctuation(code) => {
                let element_gaps = code.length() as u32 * UNIT_SPACE_SYMBOL;
                self.unit * (code.keyed_units() + element_gaps + UNIT_SPACE_LETTER)
            }
            CharClass::WordSpace => self.word_gap(),
            CharClass::Unknown => Duration::from_millis(0),
        }
    }

    /// Total blocking time of a text, up to its first `'\0'`
    pub fn text_duration(&self, text: &str) -> Duration {
        text.chars()
            .take_while(|&c| c != '\0')
            .fold(Duration::from_millis(0), |total, c| total + self.char_duration(c))
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::new(&TransmitterConfig::default())
    }
}
