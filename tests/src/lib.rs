//! Shared fixtures for host-side transmitter tests

use morse_core::hal::mock::{MockDelay, MockLine, Timeline};
use morse_core::test_utils::output_capture::OutputCapture;
use morse_core::{Transmitter, TransmitterConfig};

#[cfg(test)]
mod polarity_tests;
#[cfg(test)]
mod property_tests;

pub type RecordingTransmitter = Transmitter<MockLine, MockDelay>;

/// Transmitter on a recording line, with construction events cleared
pub fn recording_transmitter(
    wpm: u32,
    short_fist: f32,
    active_high: bool,
) -> (RecordingTransmitter, Timeline) {
    let timeline = Timeline::new();
    let (line, delay) = timeline.split();
    let config = TransmitterConfig::new(wpm, short_fist, active_high)
        .expect("test configuration must be valid");
    let tx = Transmitter::with_config(line, delay, config).expect("mock line cannot fail");
    timeline.clear();
    (tx, timeline)
}

/// Send `text` and capture what the line did
pub fn capture_text(tx: &mut RecordingTransmitter, timeline: &Timeline, text: &str) -> OutputCapture {
    timeline.clear();
    tx.transmit_text(text).expect("mock line cannot fail");
    OutputCapture::from_timeline(timeline, tx.config().active_high())
}
