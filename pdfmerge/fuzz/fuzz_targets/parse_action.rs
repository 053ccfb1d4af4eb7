#![no_main]

use libfuzzer_sys::fuzz_target;
use pdfmerge::session::Action;

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    // Parsing must not panic. Commands taking a list never parse to an empty one.
    if let Ok(Some(action)) = Action::parse(line) {
        match action {
            Action::Remove(indices) => assert!(!indices.is_empty()),
            Action::Add(patterns) => assert!(!patterns.is_empty()),
            _ => {}
        }
    }
});
