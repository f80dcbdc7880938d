#![no_main]

use horae_core::Seconds;
use horae_time::{Clock, Date, Weekday};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Anything that parses must render back to a string that parses equal
    if let Ok(secs) = text.parse::<Seconds>() {
        assert_eq!(secs.to_string().parse::<Seconds>(), Ok(secs));
    }
    if let Ok(date) = text.parse::<Date>() {
        let prefix = if text.contains('W') { "W" } else { "" };
        assert_eq!(date.show(prefix).parse::<Date>(), Ok(date));
    }
    if let Ok(clock) = text.parse::<Clock>() {
        let _ = clock.show(18);
    }
    let _ = text.parse::<Weekday>();
});
