//! Upcoming/expired classification and urgency banding.
//!
//! Unlike the calendar grouping, everything here compares full instants:
//! a product expiring later today is still upcoming at noon. The boundary
//! is inclusive — a product expiring exactly at `now` counts as upcoming.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::product::Product;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Days remaining before a product turns urgent.
pub const URGENT_WITHIN_DAYS: f64 = 5.0;
/// Days remaining before a product turns warning.
pub const WARNING_WITHIN_DAYS: f64 = 10.0;

/// Which half of the partition a list screen wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpiryFilter {
    Upcoming,
    Expired,
}

/// Urgency classification of an upcoming product by days remaining.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UrgencyBand {
    /// Five days or less remaining.
    Urgent,
    /// More than five and at most ten days remaining.
    Warning,
    Normal,
}

/// Both halves of the upcoming/expired split, each sorted by expiration
/// ascending. Ties keep input (store-native) order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiryPartition {
    pub upcoming: Vec<Product>,
    pub expired: Vec<Product>,
}

/// Split products into upcoming and expired relative to `now`.
///
/// Every product lands in exactly one half: `expires_at >= now` is
/// upcoming, `expires_at < now` is expired.
pub fn partition(products: &[Product], now: DateTime<Utc>) -> ExpiryPartition {
    let mut upcoming = Vec::new();
    let mut expired = Vec::new();

    for product in products {
        if product.expires_at >= now {
            upcoming.push(product.clone());
        } else {
            expired.push(product.clone());
        }
    }

    upcoming.sort_by_key(|p| p.expires_at);
    expired.sort_by_key(|p| p.expires_at);

    ExpiryPartition { upcoming, expired }
}

/// One half of the partition, for the filter-toggle list screen.
pub fn filtered(products: &[Product], now: DateTime<Utc>, filter: ExpiryFilter) -> Vec<Product> {
    let split = partition(products, now);
    match filter {
        ExpiryFilter::Upcoming => split.upcoming,
        ExpiryFilter::Expired => split.expired,
    }
}

/// Fractional days between `now` and `expires_at`. Negative once expired;
/// deliberately not rounded so the banding thresholds cut exactly.
pub fn days_remaining(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (expires_at - now).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// Band for a given number of days remaining.
pub fn urgency(days_remaining: f64) -> UrgencyBand {
    if days_remaining <= URGENT_WITHIN_DAYS {
        UrgencyBand::Urgent
    } else if days_remaining <= WARNING_WITHIN_DAYS {
        UrgencyBand::Warning
    } else {
        UrgencyBand::Normal
    }
}

/// Band for an upcoming product; `None` once it has expired.
pub fn band_for(product: &Product, now: DateTime<Utc>) -> Option<UrgencyBand> {
    if product.expires_at < now {
        return None;
    }
    Some(urgency(days_remaining(product.expires_at, now)))
}
