use huffc::{decode, encode};

fn main() {
    // Skewed text-like distribution over a small alphabet. Squaring runs
    // past u32 at this length, so generate in u64.
    let input: Vec<u8> = (0..100_000u64)
        .map(|i| b'a' + ((i * i) % 7) as u8)
        .collect();

    for _ in 0..200 {
        let mut encoded = Vec::new();
        encode(&input, &mut encoded).unwrap();

        let mut decoded = Vec::new();
        decode(&encoded, &mut decoded).unwrap();

        assert_eq!(input, decoded);
    }
}
