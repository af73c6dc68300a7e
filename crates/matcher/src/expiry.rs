use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

/// Items expiring within this many days (or already expired) are flagged.
pub const EXPIRING_WITHIN_DAYS: i64 = 3;

const PADDED: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");
const UNPADDED: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month padding:none]-[day padding:none]");

/// Something with an optional, free-text expiration date.
pub trait Perishable {
    fn expires_on(&self) -> Option<&str>;
}

/// Parses a `YYYY-MM-DD` expiration date; anything else means "no date".
pub fn parse_expiration(raw: &str) -> Option<Date> {
    // `[year]` would also take a leading sign
    if !raw.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    Date::parse(raw, PADDED)
        .or_else(|_| Date::parse(raw, UNPADDED))
        .ok()
}

#[derive(Debug)]
pub struct Expiring<'a, T> {
    pub item: &'a T,
    /// Negative once the item is past its date.
    pub days_remaining: i64,
}

/// Items whose date is at most [`EXPIRING_WITHIN_DAYS`] away from `today`.
///
/// Already expired items are part of the list. Items without a date, or with
/// one that does not parse, are skipped. Input order is kept.
pub fn expiring_soon<T: Perishable>(items: &[T], today: Date) -> Vec<Expiring<'_, T>> {
    items
        .iter()
        .filter_map(|item| {
            let expires_on = item.expires_on().and_then(parse_expiration)?;
            let days_remaining = (expires_on - today).whole_days();

            (days_remaining <= EXPIRING_WITHIN_DAYS).then_some(Expiring {
                item,
                days_remaining,
            })
        })
        .collect()
}
