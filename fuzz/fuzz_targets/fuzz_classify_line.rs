#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let (folder, line) = text.split_once('\n').unwrap_or(("dag", &text));
    let _ = skyhook::classify_line(line, folder);
});
