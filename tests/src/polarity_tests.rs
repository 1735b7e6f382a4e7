//! Line polarity against an embedded-hal-mock pin

use embedded_hal_mock::eh1::digital::{Mock as PinMock, State as PinState, Transaction as PinTransaction};
use morse_core::hal::mock::Timeline;
use morse_core::{Transmitter, TransmitterConfig};

fn config(active_high: bool) -> TransmitterConfig {
    TransmitterConfig::new(20, 0.0, active_high).unwrap()
}

#[test]
fn active_high_keys_with_high_level() {
    let expectations = [
        // Construction releases the line
        PinTransaction::set(PinState::Low),
        // N is -.
        PinTransaction::set(PinState::High),
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
        PinTransaction::set(PinState::Low),
    ];
    let pin = PinMock::new(&expectations);
    let timeline = Timeline::new();
    let (_line, delay) = timeline.split();

    let mut tx = Transmitter::with_config(pin, delay, config(true)).unwrap();
    tx.transmit_char('N').unwrap();

    let (mut pin, _delay) = tx.release();
    pin.done();
    assert_eq!(timeline.elapsed_ms(), 180 + 60 + 60 + 60 + 120);
}

#[test]
fn active_low_keys_with_low_level() {
    let expectations = [
        PinTransaction::set(PinState::High),
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
    ];
    let pin = PinMock::new(&expectations);
    let timeline = Timeline::new();
    let (_line, delay) = timeline.split();

    let mut tx = Transmitter::with_config(pin, delay, config(false)).unwrap();
    tx.transmit_char('E').unwrap();

    let (mut pin, _delay) = tx.release();
    pin.done();
}

#[test]
fn spaces_and_unknowns_never_touch_the_line() {
    let expectations = [PinTransaction::set(PinState::Low)];
    let pin = PinMock::new(&expectations);
    let timeline = Timeline::new();
    let (_line, delay) = timeline.split();

    let mut tx = Transmitter::with_config(pin, delay, config(true)).unwrap();
    tx.transmit_text(" \t\n#~").unwrap();

    let (mut pin, _delay) = tx.release();
    pin.done();
    assert_eq!(timeline.elapsed_ms(), 3 * 360);
}
