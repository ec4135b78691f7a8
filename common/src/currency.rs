/// Format a dollar amount for display.
///
/// Uses the shortest decimal form, so whole amounts have no fractional part
/// (`12.0` → `$12`, `12.5` → `$12.5`).
pub fn format_price(amount: f64) -> String {
    format!("${amount}")
}
