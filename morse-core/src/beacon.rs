//! Beacon line sending with transmitted-line telemetry

use core::fmt::{self, Write};
use portable_atomic::{AtomicU32, Ordering};

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use heapless::String;

use crate::hal::HalError;
use crate::transmitter::Transmitter;

/// Longest formatted line a [`Beacon`] will build
pub const MAX_LINE_LEN: usize = 128;

/// Receiver of per-line telemetry, e.g. a persistent counter
pub trait Telemetry {
    /// Called once after every line that was sent in full
    fn line_transmitted(&mut self);
}

/// Lines-transmitted counter.
/// Safe to share with interrupt contexts and to place in a `static`.
///
/// Targets without atomic compare-and-swap need the `single-core` or
/// `critical-section` feature for [`LineCounter::increment`].
pub struct LineCounter {
    lines: AtomicU32,
}

impl LineCounter {
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// Resume from a previously stored count
    pub const fn starting_at(lines: u32) -> Self {
        Self {
            lines: AtomicU32::new(lines),
        }
    }

    pub fn increment(&self) {
        self.lines.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self) -> u32 {
        self.lines.load(Ordering::Relaxed)
    }
}

impl Default for LineCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl Telemetry for LineCounter {
    fn line_transmitted(&mut self) {
        self.increment();
    }
}

impl Telemetry for &LineCounter {
    fn line_transmitted(&mut self) {
        self.increment();
    }
}

/// Errors from sending a beacon line
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BeaconError {
    /// Output line failure during transmission
    Hal(HalError),
    /// Formatted text did not fit in [`MAX_LINE_LEN`]; nothing was sent
    LineTooLong,
}

impl From<HalError> for BeaconError {
    fn from(err: HalError) -> Self {
        BeaconError::Hal(err)
    }
}

#[cfg(feature = "std")]
impl fmt::Display for BeaconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BeaconError::Hal(err) => write!(f, "{}", err),
            BeaconError::LineTooLong => write!(f, "Line exceeds {} characters", MAX_LINE_LEN),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BeaconError {}

/// Transmitter paired with the telemetry it reports to
pub struct Beacon<P, D, T> {
    tx: Transmitter<P, D>,
    telemetry: T,
}

impl<P, D, T> Beacon<P, D, T>
where
    P: OutputPin,
    D: DelayNs,
    T: Telemetry,
{
    pub fn new(tx: Transmitter<P, D>, telemetry: T) -> Self {
        Self { tx, telemetry }
    }

    /// Send one line, then record it
    pub fn send_line(&mut self, text: &str) -> Result<(), BeaconError> {
        self.tx.transmit_text(text)?;
        self.telemetry.line_transmitted();

        #[cfg(feature = "defmt")]
        defmt::info!("Line sent: {=str}", text);

        Ok(())
    }

    /// Format a line (typically with sensor readings) and send it
    pub fn send_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), BeaconError> {
        let mut line: String<MAX_LINE_LEN> = String::new();
        line.write_fmt(args).map_err(|_| BeaconError::LineTooLong)?;
        self.send_line(&line)
    }

    pub fn transmitter(&self) -> &Transmitter<P, D> {
        &self.tx
    }

    /// Access to the transmitter, e.g. to change speed between lines
    pub fn transmitter_mut(&mut self) -> &mut Transmitter<P, D> {
        &mut self.tx
    }

    pub fn telemetry(&self) -> &T {
        &self.telemetry
    }

    pub fn release(self) -> (Transmitter<P, D>, T) {
        (self.tx, self.telemetry)
    }
}
