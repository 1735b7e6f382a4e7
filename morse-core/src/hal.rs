//! Hardware Abstraction Layer for the transmitter
//!
//! The engine only needs two things from the platform: a digital output
//! line (`embedded_hal::digital::OutputPin`) and a blocking delay
//! (`embedded_hal::delay::DelayNs`). This module provides the time type
//! used for interval arithmetic and the error type for line failures.

// Re-export time types based on feature
#[cfg(feature = "embassy-time")]
pub use embassy_time::Duration;

#[cfg(not(feature = "embassy-time"))]
pub use self::mock_time::Duration;

#[cfg(not(feature = "embassy-time"))]
mod mock_time {
    /// Millisecond duration used when embassy-time is not enabled
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Duration(u64);

    impl Duration {
        pub const fn from_millis(ms: u64) -> Self {
            Self(ms)
        }

        pub const fn as_millis(&self) -> u64 {
            self.0
        }
    }

    impl core::ops::Add for Duration {
        type Output = Duration;

        fn add(self, rhs: Duration) -> Duration {
            Duration(self.0 + rhs.0)
        }
    }

    impl core::ops::AddAssign for Duration {
        fn add_assign(&mut self, rhs: Duration) {
            self.0 += rhs.0;
        }
    }

    impl core::ops::Sub for Duration {
        type Output = Duration;

        fn sub(self, rhs: Duration) -> Duration {
            Duration(self.0 - rhs.0)
        }
    }

    impl core::ops::Div<u32> for Duration {
        type Output = Duration;

        fn div(self, rhs: u32) -> Duration {
            Duration(self.0 / rhs as u64)
        }
    }

    impl core::ops::Mul<u32> for Duration {
        type Output = Duration;

        fn mul(self, rhs: u32) -> Duration {
            Duration(self.0 * rhs as u64)
        }
    }
}

/// Error types for HAL operations
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HalError {
    /// Writing the output line failed
    GpioError,
}

#[cfg(feature = "std")]
impl core::fmt::Display for HalError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HalError::GpioError => write!(f, "GPIO operation failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HalError {}

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    //! Recording line and delay for host testing.
    //!
    //! Both halves write into one shared [`Timeline`], so a test can see
    //! exactly which level the line held during every wait.

    use core::convert::Infallible;
    use embedded_hal::delay::DelayNs;
    use embedded_hal::digital::{ErrorType, OutputPin};
    use std::sync::{Arc, Mutex};
    use std::vec::Vec;

    /// One recorded hardware event
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub enum Event {
        /// Line driven to a physical level (true = high)
        Level(bool),
        /// Blocking wait, in nanoseconds
        Wait(u64),
    }

    /// Shared, ordered log of line and delay activity
    #[derive(Clone, Default, Debug)]
    pub struct Timeline {
        inner: Arc<Mutex<Vec<Event>>>,
    }

    impl Timeline {
        pub fn new() -> Self {
            Self::default()
        }

        fn push(&self, event: Event) {
            self.inner.lock().unwrap().push(event);
        }

        /// Snapshot of all events so far
        pub fn events(&self) -> Vec<Event> {
            self.inner.lock().unwrap().clone()
        }

        pub fn clear(&self) {
            self.inner.lock().unwrap().clear();
        }

        /// Sum of all recorded waits in milliseconds
        pub fn elapsed_ms(&self) -> u64 {
            self.inner
                .lock()
                .unwrap()
                .iter()
                .map(|e| match e {
                    Event::Wait(ns) => *ns,
                    Event::Level(_) => 0,
                })
                .sum::<u64>()
                / 1_000_000
        }

        /// Create a line and delay pair that record into this timeline
        pub fn split(&self) -> (MockLine, MockDelay) {
            (
                MockLine { timeline: self.clone(), high: false },
                MockDelay { timeline: self.clone() },
            )
        }
    }

    /// Output line that logs every level it is driven to
    #[derive(Debug)]
    pub struct MockLine {
        timeline: Timeline,
        high: bool,
    }

    impl MockLine {
        /// Current physical level
        pub fn is_high(&self) -> bool {
            self.high
        }
    }

    impl ErrorType for MockLine {
        type Error = Infallible;
    }

    impl OutputPin for MockLine {
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            self.timeline.push(Event::Level(true));
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            self.timeline.push(Event::Level(false));
            Ok(())
        }
    }

    /// Delay that returns immediately and logs the requested time
    #[derive(Debug)]
    pub struct MockDelay {
        timeline: Timeline,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.timeline.push(Event::Wait(ns as u64));
        }

        // Keep one event per call instead of the default chunked loop
        fn delay_ms(&mut self, ms: u32) {
            self.timeline.push(Event::Wait(ms as u64 * 1_000_000));
        }
    }
}
