//! Indian-rupee display formatting

/// Format an amount for display using Indian short notation.
///
/// Amounts of 1 crore and above render as `₹x.xCr`, 1 lakh and above as
/// `₹x.xL`, 1 thousand and above as `₹x.xK`, and smaller amounts as plain
/// rupees without decimals.
pub fn format_rupees(amount: f64) -> String {
    if amount >= 10_000_000.0 {
        format!("₹{:.1}Cr", amount / 10_000_000.0)
    } else if amount >= 100_000.0 {
        format!("₹{:.1}L", amount / 100_000.0)
    } else if amount >= 1_000.0 {
        format!("₹{:.1}K", amount / 1_000.0)
    } else {
        format!("₹{:.0}", amount)
    }
}
