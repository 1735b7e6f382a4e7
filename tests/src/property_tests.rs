//! Timing properties over arbitrary text and configuration

use crate::{capture_text, recording_transmitter};
use morse_core::{classify, CharClass};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn captured_time_matches_timing_model(
        text in "[ -~\t\n]{0,24}",
        wpm in 1u32..=60,
        short_fist in 0.0f32..=1.0,
    ) {
        let (mut tx, timeline) = recording_transmitter(wpm, short_fist, true);
        let capture = capture_text(&mut tx, &timeline, &text);
        prop_assert_eq!(capture.total_millis(), tx.timing().text_duration(&text).as_millis());
    }

    #[test]
    fn short_fist_never_changes_total_time(
        text in "[A-Z0-9 ?/.]{1,16}",
        wpm in 5u32..=40,
        short_fist in 0.0f32..=1.0,
    ) {
        let (mut plain_tx, plain_tl) = recording_transmitter(wpm, 0.0, true);
        let (mut trim_tx, trim_tl) = recording_transmitter(wpm, short_fist, true);
        let plain = capture_text(&mut plain_tx, &plain_tl, &text);
        let trimmed = capture_text(&mut trim_tx, &trim_tl, &text);

        prop_assert_eq!(plain.total_millis(), trimmed.total_millis());
        prop_assert_eq!(plain.key_downs(), trimmed.key_downs());
        let offset = trim_tx.timing().short_fist().as_millis();
        prop_assert_eq!(plain.on_millis() - trimmed.on_millis(), offset * plain.key_downs() as u64);
    }

    #[test]
    fn key_downs_and_on_time_follow_elements(text in "[a-zA-Z0-9]{0,16}") {
        let (mut tx, timeline) = recording_transmitter(20, 0.0, true);
        let capture = capture_text(&mut tx, &timeline, &text);
        let elements: usize = text.chars().map(|c| classify(c).code().length() as usize).sum();
        let keyed_units: u32 = text.chars().map(|c| classify(c).code().keyed_units()).sum();
        prop_assert_eq!(capture.key_downs(), elements);
        prop_assert_eq!(capture.on_millis(), keyed_units as u64 * 60);
    }

    #[test]
    fn every_interval_is_whole_units(text in "[A-Z0-9 ]{0,16}", wpm in 1u32..=60) {
        let (mut tx, timeline) = recording_transmitter(wpm, 0.0, true);
        let unit = tx.timing().unit().as_millis();
        let capture = capture_text(&mut tx, &timeline, &text);
        for interval in capture.intervals() {
            prop_assert_eq!(interval.millis % unit, 0);
        }
    }

    #[test]
    fn unknown_characters_are_invisible(text in "[A-Z ]{0,12}", junk in "[#$%&*]{1,4}") {
        let (mut tx, timeline) = recording_transmitter(20, 0.0, true);
        let clean = capture_text(&mut tx, &timeline, &text);
        let interleaved: String = text.chars().flat_map(|c| std::iter::once(c).chain(junk.chars())).collect();
        let noisy = format!("{}{}", junk, interleaved);
        prop_assert!(junk.chars().all(|c| classify(c) == CharClass::Unknown));
        let dirty = capture_text(&mut tx, &timeline, &noisy);
        prop_assert_eq!(clean.intervals(), dirty.intervals());
    }
}
