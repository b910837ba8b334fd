#![no_main]
use libfuzzer_sys::fuzz_target;
use seghuff::{build_codes, decode, encode};

fuzz_target!(|data: (Vec<u8>, u8, u8)| {
    let (input, seg, ch) = data;
    let segment_length = (seg as usize % 64) + 1;
    let character_length = (ch as usize % 8) + 1;

    let book = build_codes(&input, segment_length, character_length).unwrap();
    let bits = encode(&input, &book).unwrap();
    let output = decode(&bits, &book).unwrap();
    assert_eq!(input, output);

    for table in book.tables() {
        for (_, code) in table.iter() {
            assert!(!code.is_empty());
        }
    }
});
