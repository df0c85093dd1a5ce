#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        // Parsing must never panic, and anything accepted must plan cleanly
        if let Ok(token) = wjs_deploy::CommandToken::parse(raw) {
            if let Ok(profile) = wjs_deploy::ProfileTable::builtin().select(&token) {
                let _ = wjs_deploy::plan_for(&profile);
            }
        }
    }
});
