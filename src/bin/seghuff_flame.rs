use seghuff::{build_codes, decode, encode};

fn main() {
    let input: Vec<u8> = (0..65536u32)
        .map(|i| {
            let drift = (i / 4096) as u8;
            ((i.wrapping_mul(2654435761) % 97) as u8 % 16).wrapping_add(drift) % 64 + b' '
        })
        .collect();

    for _ in 0..200 {
        let book = build_codes(&input, 4096, 1).unwrap();
        let bits = encode(&input, &book).unwrap();
        let output = decode(&bits, &book).unwrap();
        assert_eq!(input, output);
    }
}
