//! Blocking Morse transmitter
//!
//! Drives one output line through the intervals produced by the timing
//! model. Every call blocks until the last gap has elapsed; there is no
//! queue and no way to cancel a transmission once it has started.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::encoder::classify;
use crate::hal::{Duration, HalError};
use crate::timing::{Interval, Timing};
use crate::types::{CharClass, ConfigError, TransmitterConfig, TxState};

/// Morse transmitter bound to one output line
pub struct Transmitter<P, D> {
    pin: P,
    delay: D,
    config: TransmitterConfig,
    timing: Timing,
    state: TxState,
}

impl<P, D> Transmitter<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Create a transmitter with the default configuration.
    ///
    /// `active_high` selects which line level keys the transmitter.
    /// The line is released before this returns.
    pub fn new(pin: P, delay: D, active_high: bool) -> Result<Self, HalError> {
        Self::with_config(pin, delay, TransmitterConfig::default().with_active_high(active_high))
    }

    /// Create a transmitter from a validated configuration
    pub fn with_config(pin: P, delay: D, config: TransmitterConfig) -> Result<Self, HalError> {
        let mut tx = Self {
            pin,
            delay,
            config,
            timing: Timing::new(&config),
            state: TxState::Idle,
        };
        tx.set_key(false)?;

        #[cfg(feature = "defmt")]
        defmt::info!("Transmitter ready: {} WPM, active {}", config.wpm(), if config.active_high() { "high" } else { "low" });

        Ok(tx)
    }

    /// Send one character and block until its trailing gap has elapsed.
    ///
    /// Characters without a code are dropped: no line activity and no delay.
    pub fn transmit_char(&mut self, c: char) -> Result<(), HalError> {
        let class = classify(c);
        match class {
            CharClass::Unknown => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Dropping unsupported character {=u32:#x}", c as u32);
                Ok(())
            }
            _ => {
                let plan = self.timing.plan(class);
                let result = self.run(&plan);
                if result.is_err() {
                    self.set_key(false).ok();
                }
                self.state = TxState::Idle;
                result
            }
        }
    }

    /// Send each character of `text` in order, stopping at the first `'\0'`
    pub fn transmit_text(&mut self, text: &str) -> Result<(), HalError> {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Sending {=usize} chars ({=u64} ms)",
            text.chars().take_while(|&c| c != '\0').count(),
            self.timing.text_duration(text).as_millis()
        );

        for c in text.chars().take_while(|&c| c != '\0') {
            self.transmit_char(c)?;
        }
        Ok(())
    }

    /// Execute a plan interval by interval
    fn run(&mut self, plan: &[Interval]) -> Result<(), HalError> {
        for interval in plan {
            self.enter(interval)?;
            self.wait(interval.duration);
        }
        Ok(())
    }

    /// Transition to the interval's state, driving the line only when
    /// its level changes
    fn enter(&mut self, interval: &Interval) -> Result<(), HalError> {
        #[cfg(feature = "defmt")]
        defmt::trace!("TX state: {:?} -> {:?}", self.state, interval.state);

        let keyed = interval.is_keyed();
        if keyed != self.state.is_keyed() {
            self.set_key(keyed)?;
        }
        self.state = interval.state;
        Ok(())
    }

    fn wait(&mut self, duration: Duration) {
        let ms = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        self.delay.delay_ms(ms);
    }

    /// Energize or release the line, honoring the configured polarity
    fn set_key(&mut self, energized: bool) -> Result<(), HalError> {
        if energized == self.config.active_high() {
            self.pin.set_high().map_err(|_| HalError::GpioError)
        } else {
            self.pin.set_low().map_err(|_| HalError::GpioError)
        }
    }

    /// Update the speed; zero and rates above [`MAX_WPM`](crate::MAX_WPM) are ignored
    pub fn set_wpm(&mut self, wpm: u32) {
        self.try_set_wpm(wpm).ok();
    }

    /// Update the speed, reporting a rejected value
    pub fn try_set_wpm(&mut self, wpm: u32) -> Result<(), ConfigError> {
        let result = self.config.set_wpm(wpm);
        self.apply(result)
    }

    /// Update the short fist fraction; values outside 0.0..=1.0 are ignored
    pub fn set_short_fist(&mut self, fraction: f32) {
        self.try_set_short_fist(fraction).ok();
    }

    /// Update the short fist fraction, reporting a rejected value
    pub fn try_set_short_fist(&mut self, fraction: f32) -> Result<(), ConfigError> {
        let result = self.config.set_short_fist(fraction);
        self.apply(result)
    }

    /// Rebuild derived timing after an accepted change
    fn apply(&mut self, result: Result<(), ConfigError>) -> Result<(), ConfigError> {
        match result {
            Ok(()) => {
                self.timing = Timing::new(&self.config);
                #[cfg(feature = "defmt")]
                defmt::debug!("Timing: unit {=u64} ms, short fist {=u64} ms", self.timing.unit().as_millis(), self.timing.short_fist().as_millis());
                Ok(())
            }
            Err(err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Ignoring configuration change: {:?}", err);
                Err(err)
            }
        }
    }

    /// Get current configuration
    pub fn config(&self) -> &TransmitterConfig {
        &self.config
    }

    /// Get derived interval durations
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Get current transmitter state; `Idle` whenever no call is in progress
    pub fn state(&self) -> TxState {
        self.state
    }

    /// Give back the line and delay
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }
}
