/// Balance amount formatting
///
/// Classifies a string-encoded signed amount as debit or credit and pairs
/// it with the short coin symbol. On-chain quantities can exceed 2^63, so
/// the sign check goes through `BigInt`; the amount text itself is always
/// the wire string, never a reparsed or truncated value.

use num_bigint::BigInt;
use num_bigint::Sign;

/// A balance amount prepared for display
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedAmount {
    /// `"{amount} {SYMBOL}"`, amount verbatim from the wire
    pub text: String,
    /// true = debit (negative), false = credit (zero or positive)
    pub negative: bool,
}

/// Format one balance delta. `coin_type` is `package::module::TYPENAME`;
/// the symbol is the segment after the last `::`, or the whole string when
/// there is no separator. An amount `BigInt` cannot parse is classified as
/// a credit and still printed verbatim.
pub fn format_amount(amount: &str, coin_type: &str) -> FormattedAmount {
    let symbol = coin_symbol(coin_type);
    let negative = match amount.trim().parse::<BigInt>() {
        Ok(value) => value.sign() == Sign::Minus,
        Err(_) => false,
    };
    FormattedAmount { text: format!("{} {}", amount, symbol), negative }
}

/// The human label for a qualified coin type
pub fn coin_symbol(coin_type: &str) -> &str {
    coin_type.rsplit("::").next().unwrap_or(coin_type)
}
