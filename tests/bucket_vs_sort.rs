use std::io::Cursor;

use passmask::{count, rank, CountOptions, TopN};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALPHABET: &[u8] = b"abcdeABCDE0123456789!@#$";

fn random_wordlist(rng: &mut StdRng, lines: usize) -> String {
    let mut out = String::new();
    for _ in 0..lines {
        let len = rng.gen_range(0..7);
        for _ in 0..len {
            out.push(ALPHABET[rng.gen_range(0..ALPHABET.len())] as char);
        }
        out.push('\n');
    }
    out
}

#[test]
fn bucket_rank_matches_stable_sort() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let text = random_wordlist(&mut rng, 20_000);
    let counts = count(Cursor::new(text), &CountOptions::default()).unwrap();
    assert_eq!(counts.qualifying(), 20_000);

    let mut sorted: Vec<_> = counts.iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));

    let ranked = rank(&counts, TopN::All);
    let ranked: Vec<_> = ranked.iter().map(|r| (r.mask, r.count)).collect();
    assert_eq!(ranked, sorted);
}
