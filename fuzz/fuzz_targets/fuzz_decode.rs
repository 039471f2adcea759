#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Full decode of arbitrary bytes — must never panic
    let _ = bmpview::decode(data);

    // Header parse alone, and decode under tight caps — must never panic
    let _ = bmpview::parse_headers(data);
    let limits = bmpview::Limits {
        max_pixels: Some(1 << 20),
        max_memory_bytes: Some(16 << 20),
        ..Default::default()
    };
    let _ = bmpview::decode_with_limits(data, &limits);
});
