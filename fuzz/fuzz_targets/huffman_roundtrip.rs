#![no_main]
use huffc::{decode, encode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut encoded = Vec::new();
    encode(data, &mut encoded).unwrap();

    let mut decoded = Vec::new();
    decode(&encoded, &mut decoded).unwrap();

    assert_eq!(data, decoded.as_slice());
});
