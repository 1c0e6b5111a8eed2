//! Calendar view derivation: groups products by the day they expire.
//!
//! Grouping is date-only — the time of day of `expires_at` is truncated.
//! The selected day is always present in the index, even when nothing
//! expires on it, so the calendar widget can highlight it.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Marker for one product expiring on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMarker {
    pub product_id: Option<i64>,
}

/// Everything the calendar needs to know about one day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayEntry {
    /// Whether this is the day the user has selected.
    pub selected: bool,
    /// One marker per product expiring on this day.
    pub markers: Vec<DayMarker>,
}

/// Date-keyed expiration index consumed by the calendar screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarIndex {
    pub days: BTreeMap<NaiveDate, DayEntry>,
    pub selected: NaiveDate,
}

/// The calendar day (UTC) on which a product expires.
pub fn expiry_day(product: &Product) -> NaiveDate {
    product.expires_at.date_naive()
}

/// Build the calendar index for a loaded product collection.
///
/// Each product contributes one marker to its expiry day. `selected`
/// defaults to today's local date; the selected day is merged into the
/// index with `selected: true` and an empty marker list if nothing
/// expires on it.
pub fn calendar_index(products: &[Product], selected: Option<NaiveDate>) -> CalendarIndex {
    let selected = selected.unwrap_or_else(|| Local::now().date_naive());

    let mut days: BTreeMap<NaiveDate, DayEntry> = BTreeMap::new();
    for product in products {
        days.entry(expiry_day(product))
            .or_default()
            .markers
            .push(DayMarker {
                product_id: product.id,
            });
    }

    days.entry(selected).or_default().selected = true;

    CalendarIndex { days, selected }
}

/// Products expiring on `day`, in input order.
pub fn products_on(products: &[Product], day: NaiveDate) -> Vec<&Product> {
    products
        .iter()
        .filter(|p| expiry_day(p) == day)
        .collect()
}
