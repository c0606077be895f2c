//! Mock on-chain transaction hashes.

use rand::Rng;

/// Fixed prefix of every mock hash.
pub const TX_HASH_PREFIX: &str = "0x8a2f";
/// Random base-36 characters after the prefix.
pub const TX_HASH_SUFFIX_LEN: usize = 11;

/// Generates `0x8a2f` followed by 11 random lowercase base-36 characters.
pub fn mock_tx_hash<R: Rng + ?Sized>(rng: &mut R) -> String {
    let suffix: String = (0..TX_HASH_SUFFIX_LEN)
        .filter_map(|_| char::from_digit(rng.gen_range(0..36), 36))
        .collect();
    format!("{TX_HASH_PREFIX}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn prefix_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let hash = mock_tx_hash(&mut rng);
            assert_eq!(hash.len(), 17);
            let suffix = hash.strip_prefix(TX_HASH_PREFIX).unwrap_or_default();
            assert_eq!(suffix.len(), TX_HASH_SUFFIX_LEN);
            assert!(
                suffix
                    .chars()
                    .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
            );
        }
    }
}
