/// Validates a raw user-typed amount. This is the single gate between
/// free-text input and the ledger: only finite, strictly positive numbers
/// pass. Everything else ("abc", "-5", "0", "inf", "") is rejected.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let amount: f64 = raw.trim().parse().ok()?;
    if amount.is_finite() && amount > 0.0 {
        Some(amount)
    } else {
        None
    }
}

/// True once the buffer would be accepted by `parse_amount`; the entry
/// dialog uses this to enable its confirm action.
pub fn is_valid_amount(raw: &str) -> bool {
    parse_amount(raw).is_some()
}
