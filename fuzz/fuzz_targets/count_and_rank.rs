use honggfuzz::fuzz;
use passmask::{count, rank, CountOptions, Encoding, MaskError, TopN};
use std::io::Cursor;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let options = CountOptions {
                encoding: Encoding::Latin1,
                ..CountOptions::default()
            };
            let counts = count(Cursor::new(data), &options).expect("latin-1 never fails");
            let ranked = rank(&counts, TopN::All);
            assert_eq!(ranked.len(), counts.distinct());
            assert!(ranked.windows(2).all(|w| w[0].count >= w[1].count));
            let utf8 = count(Cursor::new(data), &CountOptions::default());
            assert!(matches!(utf8, Ok(_) | Err(MaskError::Decode { .. })));
        });
    }
}
