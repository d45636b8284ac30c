//! Target classification heuristic.

use sentinel_types::TargetKind;

const HEX_PREFIX: &str = "0x";

/// Raw input longer than this (and `0x`-prefixed) is treated as a
/// transaction hash. Strictly greater-than: a 60-character string is still an
/// address.
const TRANSACTION_LENGTH_THRESHOLD: usize = 60;

/// Classify raw input as a transaction hash or an address.
///
/// This is a heuristic, not a validator: it never rejects input. A long
/// non-hash string that happens to start with `0x` will be misclassified as a
/// transaction, and the audit service is expected to cope. A blank string
/// classifies as an address.
#[must_use]
pub fn classify(raw: &str) -> TargetKind {
    if raw.starts_with(HEX_PREFIX) && raw.chars().count() > TRANSACTION_LENGTH_THRESHOLD {
        TargetKind::Transaction
    } else {
        TargetKind::Address
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_one_chars_with_prefix_is_transaction() {
        let raw = format!("0x{}", "a".repeat(59));
        assert_eq!(raw.len(), 61);
        assert_eq!(classify(&raw), TargetKind::Transaction);
    }

    #[test]
    fn sixty_chars_with_prefix_is_still_address() {
        let raw = format!("0x{}", "a".repeat(58));
        assert_eq!(raw.len(), 60);
        assert_eq!(classify(&raw), TargetKind::Address);
    }

    #[test]
    fn blank_input_is_address() {
        assert_eq!(classify(""), TargetKind::Address);
    }

    #[test]
    fn short_hex_string_is_address() {
        assert_eq!(classify("0xabc123"), TargetKind::Address);
    }

    #[test]
    fn long_string_without_prefix_is_address() {
        let raw = "a".repeat(80);
        assert_eq!(classify(&raw), TargetKind::Address);
    }

    #[test]
    fn long_non_hash_with_prefix_is_misclassified_by_design() {
        // Documented limitation: the heuristic only looks at prefix + length.
        let raw = format!("0x{}", "not-a-hash-".repeat(8));
        assert_eq!(classify(&raw), TargetKind::Transaction);
    }
}
