use super::*;

#[test]
fn format_listing_date_has_no_padding() {
    assert_eq!(format_listing_date(2026, 3, 7), "7/3/2026");
}

#[test]
fn format_listing_date_keeps_two_digit_parts() {
    assert_eq!(format_listing_date(2025, 12, 31), "31/12/2025");
}
