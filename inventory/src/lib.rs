pub mod calendar;
pub mod expiry;
pub mod product;

pub use calendar::{calendar_index, expiry_day, products_on, CalendarIndex, DayEntry, DayMarker};
pub use expiry::{
    band_for, days_remaining, filtered, partition, urgency, ExpiryFilter, ExpiryPartition,
    UrgencyBand,
};
pub use product::Product;
