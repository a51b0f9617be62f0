//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! Functions for formatting wallet addresses for display:
//! - [`format_address`] - Keep the first N and last M characters around an ellipsis
//! - [`truncate_address`] - `format_address` with the widget's 5/4 split
//!
//! Formatting is purely textual. Nothing is validated, so a short or malformed
//! address still produces a (possibly odd) display string.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::truncate_address;
//!
//! assert_eq!(truncate_address("0xAbCdEf1234567890"), "0xAbC...7890");
//! ```

/// Characters kept at the start of a truncated address.
pub const ADDRESS_PREFIX_LEN: usize = 5;

/// Characters kept at the end of a truncated address.
pub const ADDRESS_SUFFIX_LEN: usize = 4;

/// Format a wallet address as its first `prefix_len` characters, `"..."`, and
/// its last `suffix_len` characters.
///
/// Counts characters rather than bytes. When the address is shorter than
/// either length the whole address is used for that side, so `"abc"` becomes
/// `"abc...abc"`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
/// assert_eq!(format_address(addr, 4, 4), "8W6Q...JKAL");
/// assert_eq!(format_address("abc", 5, 4), "abc...abc");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address
        .chars()
        .skip(char_count.saturating_sub(suffix_len))
        .collect();

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with the default 5-character prefix and
/// 4-character suffix.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// assert_eq!(truncate_address("0xAbCdEf1234567890"), "0xAbC...7890");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, ADDRESS_PREFIX_LEN, ADDRESS_SUFFIX_LEN)
}
