#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Every non-empty line yields exactly one item, ok or not
        let expected = text.lines().filter(|l| !l.is_empty()).count();
        assert_eq!(landed_git::parse_log(text).count(), expected);
        let _ = landed_git::remote::parse_remotes(text);
    }
});
