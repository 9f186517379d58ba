use std::sync::LazyLock;

use regex::Regex;

use crate::constants::SOLANA_ADDRESS_PATTERN;
use crate::error::VerifyError;

static SOLANA_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SOLANA_ADDRESS_PATTERN).expect("address pattern is a valid regex"));

/// Shape check only: base58 alphabet, 32 to 44 characters. The upstream decides whether the wallet exists.
pub fn is_valid_solana_address(candidate: &str) -> bool {
    SOLANA_ADDRESS.is_match(candidate)
}

pub fn validate_wallet_address(candidate: &str) -> Result<&str, VerifyError> {
    if candidate.is_empty() {
        return Err(VerifyError::MissingAddress);
    }
    if !is_valid_solana_address(candidate) {
        return Err(VerifyError::InvalidAddress(candidate.to_string()));
    }
    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;

    const BASE58: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

    #[rstest]
    #[case("2GpQzcKVQ6ggaqS5FYnKefTexNaHcAsXX8FYbWgbRaSN")]
    #[case("So11111111111111111111111111111111111111112")]
    #[case("11111111111111111111111111111111")]
    fn accepts_known_addresses(#[case] address: &str) {
        assert!(is_valid_solana_address(address));
        assert_eq!(validate_wallet_address(address), Ok(address));
    }

    #[rstest]
    #[case("")]
    #[case("2GpQzcKVQ6ggaqS5FYnKefTexNaHcAsXX8FYbWgbRaS")]
    #[case("0GpQzcKVQ6ggaqS5FYnKefTexNaHcAsXX8FYbWgbRaSN")]
    #[case("OGpQzcKVQ6ggaqS5FYnKefTexNaHcAsXX8FYbWgbRaSN")]
    #[case("IGpQzcKVQ6ggaqS5FYnKefTexNaHcAsXX8FYbWgbRaSN")]
    #[case("lGpQzcKVQ6ggaqS5FYnKefTexNaHcAsXX8FYbWgbRaSN")]
    #[case(" 2GpQzcKVQ6ggaqS5FYnKefTexNaHcAsXX8FYbWgbRaSN")]
    #[case("2GpQzcKVQ6ggaqS5FYnKefTexNaHcAsXX8FYbWgbRaSN\n")]
    #[case("0x52908400098527886E0F7030069857D2E4169EE7")]
    fn rejects_malformed(#[case] address: &str) {
        assert!(!is_valid_solana_address(address));
    }

    #[test]
    fn empty_input_is_missing_not_invalid() {
        assert_eq!(validate_wallet_address(""), Err(VerifyError::MissingAddress));
        assert!(matches!(validate_wallet_address("abc"), Err(VerifyError::InvalidAddress(_))));
    }

    proptest! {
        #[test]
        fn well_formed_base58_is_accepted(address in proptest::collection::vec(proptest::sample::select(BASE58.chars().collect::<Vec<_>>()), 32..=44)) {
            let address: String = address.into_iter().collect();
            prop_assert!(is_valid_solana_address(&address));
        }

        #[test]
        fn wrong_length_is_rejected(address in proptest::collection::vec(proptest::sample::select(BASE58.chars().collect::<Vec<_>>()), 0..80)
            .prop_filter("length outside 32..=44", |chars| chars.len() < 32 || chars.len() > 44))
        {
            let address: String = address.into_iter().collect();
            prop_assert!(!is_valid_solana_address(&address));
        }

        #[test]
        fn disallowed_character_is_rejected(
            prefix in "[1-9A-HJ-NP-Za-km-z]{16}",
            bad in "[0OIl+/=_ -]",
            suffix in "[1-9A-HJ-NP-Za-km-z]{16,27}",
        ) {
            let address = format!("{}{}{}", prefix, bad, suffix);
            prop_assert!(!is_valid_solana_address(&address));
        }
    }
}
