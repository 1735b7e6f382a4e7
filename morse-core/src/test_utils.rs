//! Test utilities for the transmission engine

#[cfg(feature = "test-utils")]
pub mod output_capture {
    //! Turns a recorded [`Timeline`] into key-down / key-up intervals

    use crate::hal::mock::{Event, Timeline};

    /// One wait as seen from the key's point of view
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CapturedInterval {
        /// True if the line was at its active level during the wait
        pub key_down: bool,
        pub millis: u64,
    }

    impl CapturedInterval {
        pub const fn on(millis: u64) -> Self {
            Self { key_down: true, millis }
        }

        pub const fn off(millis: u64) -> Self {
            Self { key_down: false, millis }
        }
    }

    /// Captured transmitter output
    #[derive(Debug, Clone, Default)]
    pub struct OutputCapture {
        intervals: Vec<CapturedInterval>,
        key_downs: usize,
    }

    impl OutputCapture {
        /// Read a timeline recorded by a line with the given polarity.
        ///
        /// The line is assumed released before the first recorded level.
        pub fn from_timeline(timeline: &Timeline, active_high: bool) -> Self {
            let mut key_down = false;
            let mut capture = Self::default();
            for event in timeline.events() {
                match event {
                    Event::Level(high) => {
                        let now_down = high == active_high;
                        if now_down && !key_down {
                            capture.key_downs += 1;
                        }
                        key_down = now_down;
                    }
                    Event::Wait(ns) => capture.intervals.push(CapturedInterval {
                        key_down,
                        millis: ns / 1_000_000,
                    }),
                }
            }
            capture
        }

        /// Every wait in call order
        pub fn intervals(&self) -> &[CapturedInterval] {
            &self.intervals
        }

        /// Adjacent waits at the same key state joined, as a receiver hears them
        pub fn merged(&self) -> Vec<CapturedInterval> {
            let mut merged: Vec<CapturedInterval> = Vec::new();
            for interval in &self.intervals {
                match merged.last_mut() {
                    Some(last) if last.key_down == interval.key_down => last.millis += interval.millis,
                    _ => merged.push(*interval),
                }
            }
            merged
        }

        /// Number of key-down transitions
        pub fn key_downs(&self) -> usize {
            self.key_downs
        }

        /// Total time spent keyed
        pub fn on_millis(&self) -> u64 {
            self.intervals.iter().filter(|i| i.key_down).map(|i| i.millis).sum()
        }

        /// Total blocking time
        pub fn total_millis(&self) -> u64 {
            self.intervals.iter().map(|i| i.millis).sum()
        }

        /// Decode key-down lengths to dots and dashes, given the unit.
        ///
        /// Letter gaps become a space and word gaps ` / `. A short fist
        /// trims at most one unit, so anything keyed longer than one unit
        /// is a dah.
        pub fn to_morse_string(&self, unit_ms: u64) -> String {
            let mut result = String::new();
            for interval in self.merged() {
                if interval.key_down {
                    result.push(if interval.millis > unit_ms { '-' } else { '.' });
                } else if interval.millis >= 5 * unit_ms {
                    result.push_str(" / ");
                } else if interval.millis >= 3 * unit_ms {
                    result.push(' ');
                }
            }
            result.trim().to_string()
        }
    }
}
