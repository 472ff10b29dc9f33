//! Lookup between Indonesian month names and their numeric forms.
//!
//! Every function here is total: values outside the table are handed back
//! unchanged so callers can forward whatever format the backend stores.

use std::borrow::Cow;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, FromRepr};

/// Indonesian month names in calendar order.
pub const MONTH_NAMES_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// A calendar month, named the way the dashboard stores it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, FromRepr,
)]
#[repr(u8)]
pub enum Month {
    Januari = 1,
    Februari,
    Maret,
    April,
    Mei,
    Juni,
    Juli,
    Agustus,
    September,
    Oktober,
    November,
    Desember,
}

impl Month {
    /// Month number, 1 through 12.
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Look a month up by its name (`"Maret"`) or number (`"3"`, `"03"`).
    ///
    /// Numbers must be one or two digits; `"003"` is not a month.
    pub fn parse(value: &str) -> Option<Month> {
        if let Ok(month) = value.parse::<Month>() {
            return Some(month);
        }
        if !is_short_number(value) {
            return None;
        }
        value.parse::<u8>().ok().and_then(Month::from_repr)
    }
}

/// Convert a month name to its number, `"1"`..`"12"` or `"01"`..`"12"` when
/// `padded`. Unknown names are returned as given.
pub fn month_name_to_number(name: &str, padded: bool) -> Cow<'_, str> {
    match name.parse::<Month>() {
        Ok(month) if padded => Cow::Owned(format!("{:02}", month.number())),
        Ok(month) => Cow::Owned(month.number().to_string()),
        Err(_) => Cow::Borrowed(name),
    }
}

/// Convert `"1"`..`"12"` or `"01"`..`"09"` to a month name. Anything else is
/// returned as given.
pub fn month_number_to_name(number: &str) -> Cow<'_, str> {
    // "010".."012" are not in the table even though they parse to 10..12.
    let known = match number.len() {
        1 => number != "0",
        2 => number.starts_with('0') || matches!(number, "10" | "11" | "12"),
        _ => false,
    };
    if !known {
        return Cow::Borrowed(number);
    }
    match number.parse::<u8>().ok().and_then(Month::from_repr) {
        Some(month) => Cow::Owned(month.to_string()),
        None => Cow::Borrowed(number),
    }
}

/// Normalize a month filter value before it is sent as a query parameter.
///
/// One- or two-digit numbers are already in the stored form; names are
/// converted to their unpadded number.
pub fn normalize_month_for_db(month: &str) -> Cow<'_, str> {
    if is_short_number(month) {
        return Cow::Borrowed(month);
    }
    month_name_to_number(month, false)
}

/// All months in calendar order.
pub fn months() -> impl Iterator<Item = Month> {
    Month::iter()
}

fn is_short_number(value: &str) -> bool {
    (1..=2).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit())
}
