use super::*;

#[test]
fn format_amount_uses_two_decimals() {
    assert_eq!(format_amount(12.5), "$12.50");
    assert_eq!(format_amount(0.0), "$0.00");
    assert_eq!(format_amount(1200.0), "$1200.00");
}

#[test]
fn format_amount_puts_sign_first() {
    assert_eq!(format_amount(-4.25), "-$4.25");
}
