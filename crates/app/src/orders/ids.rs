//! Order identifiers.

use rand::{Rng, seq::SliceRandom};

/// Uppercase base36 alphabet, URL-safe and readable over the phone.
const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Identifier length. 36^9 ids make collisions negligible at this scale;
/// no uniqueness check is made against existing orders.
const LEN: usize = 9;

/// Generate a short, shareable random order id.
pub fn generate_order_id() -> String {
    let mut rng = rand::thread_rng();

    generate_with(&mut rng)
}

fn generate_with<R: Rng>(rng: &mut R) -> String {
    (0..LEN)
        .map(|_| ALPHABET.choose(rng).copied().unwrap_or(b'0') as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_have_the_fixed_alphanumeric_shape() {
        for _ in 0..100 {
            let id = generate_order_id();

            assert_eq!(id.len(), LEN);
            assert!(
                id.bytes().all(|b| ALPHABET.contains(&b)),
                "unexpected character in {id}"
            );
        }
    }

    #[test]
    fn ids_are_drawn_from_a_seeded_rng_deterministically() {
        use rand::SeedableRng;

        let mut a = rand::rngs::StdRng::seed_from_u64(7);
        let mut b = rand::rngs::StdRng::seed_from_u64(7);

        assert_eq!(generate_with(&mut a), generate_with(&mut b));
    }
}
