//! Access gating: decides whether the scan surface is unlocked and derives
//! the operator label shown in the terminal header.

use sentinel_types::{AccessOverride, WalletState};

/// Label shown when neither a wallet address nor an override is present.
pub const UNKNOWN_OPERATOR_LABEL: &str = "UNKNOWN";

/// Label shown while the access override is active.
pub const OVERRIDE_OPERATOR_LABEL: &str = "ADMIN_OVERRIDE_USER";

/// Addresses longer than this are elided for display.
const ELISION_THRESHOLD: usize = 10;
const ELISION_PREFIX: usize = 6;
const ELISION_SUFFIX: usize = 4;

/// Whether the scan surface is unlocked.
///
/// The override takes effect regardless of wallet state.
#[must_use]
pub fn is_unlocked(wallet: &WalletState, overridden: AccessOverride) -> bool {
    overridden.is_active() || wallet.is_connected()
}

/// Derive the operator label for the access panel.
///
/// Precedence: override > wallet address > unknown. A connected wallet whose
/// address has not resolved yet yields [`UNKNOWN_OPERATOR_LABEL`]; presence is
/// checked before any slicing.
#[must_use]
pub fn operator_label(wallet: &WalletState, overridden: AccessOverride) -> String {
    if overridden.is_active() {
        return OVERRIDE_OPERATOR_LABEL.to_string();
    }
    match wallet.address() {
        Some(address) => elide_address(address),
        None => UNKNOWN_OPERATOR_LABEL.to_string(),
    }
}

/// Shorten a long address to `first6…last4`; short addresses pass through.
///
/// Counts characters rather than bytes so a multi-byte address cannot be
/// split mid-codepoint.
fn elide_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= ELISION_THRESHOLD {
        return address.to_string();
    }
    let prefix: String = chars[..ELISION_PREFIX].iter().collect();
    let suffix: String = chars[chars.len() - ELISION_SUFFIX..].iter().collect();
    format!("{prefix}…{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connected_wallet_unlocks_regardless_of_override() {
        let wallet = WalletState::connected("0xabc");
        assert!(is_unlocked(&wallet, AccessOverride::new(false)));
        assert!(is_unlocked(&wallet, AccessOverride::new(true)));
    }

    #[test]
    fn override_unlocks_regardless_of_wallet() {
        let active = AccessOverride::new(true);
        assert!(is_unlocked(&WalletState::disconnected(), active));
        assert!(is_unlocked(&WalletState::connected("0xabc"), active));
        assert!(is_unlocked(&WalletState::connected_unresolved(), active));
    }

    #[test]
    fn locked_without_wallet_or_override() {
        assert!(!is_unlocked(
            &WalletState::disconnected(),
            AccessOverride::new(false)
        ));
    }

    #[test]
    fn override_label_takes_precedence_over_address() {
        let wallet = WalletState::connected("0x1234567890abcdef");
        let label = operator_label(&wallet, AccessOverride::new(true));
        assert_eq!(label, OVERRIDE_OPERATOR_LABEL);
    }

    #[test]
    fn connected_without_address_is_unknown() {
        let wallet = WalletState::connected_unresolved();
        let label = operator_label(&wallet, AccessOverride::new(false));
        assert_eq!(label, UNKNOWN_OPERATOR_LABEL);
    }

    #[test]
    fn disconnected_is_unknown() {
        let label = operator_label(&WalletState::disconnected(), AccessOverride::new(false));
        assert_eq!(label, UNKNOWN_OPERATOR_LABEL);
    }

    #[test]
    fn short_address_passes_through_unmodified() {
        let wallet = WalletState::connected("0x12345678"); // 10 chars
        let label = operator_label(&wallet, AccessOverride::new(false));
        assert_eq!(label, "0x12345678");
    }

    #[test]
    fn long_address_is_elided_to_six_plus_four() {
        let wallet = WalletState::connected("0x123456789ab"); // 13 chars
        let label = operator_label(&wallet, AccessOverride::new(false));
        assert_eq!(label, "0x1234…89ab");
    }

    #[test]
    fn elision_boundary_is_strictly_greater_than_ten() {
        let ten = "a".repeat(10);
        let eleven = "a".repeat(11);
        assert_eq!(elide_address(&ten), ten);
        assert_eq!(elide_address(&eleven), format!("{}…{}", "a".repeat(6), "a".repeat(4)));
    }

    #[test]
    fn elision_counts_characters_not_bytes() {
        // 12 characters, all multi-byte
        let address = "ありがとうございました。!";
        let elided = elide_address(address);
        assert_eq!(elided.chars().count(), ELISION_PREFIX + 1 + ELISION_SUFFIX);
    }
}
