//! Listing publication dates.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

/// Italian short date: `d/m/yyyy`, no zero padding.
#[must_use]
pub fn format_listing_date(year: i32, month: u32, day: u32) -> String {
    format!("{day}/{month}/{year}")
}

/// Today's date in the browser's local time zone.
#[cfg(feature = "hydrate")]
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn today() -> String {
    let now = js_sys::Date::new_0();
    format_listing_date(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
}

/// SSR never publishes; render an empty date.
#[cfg(not(feature = "hydrate"))]
#[must_use]
pub fn today() -> String {
    String::new()
}
