//! Meal history: record types and the append-only [`store::MealStore`].

pub mod store;
pub mod types;

pub use store::MealStore;
pub use types::{Meal, MealEntry};

/// Date format used in the `meals.date` column. Zero-padded, so string
/// comparison orders dates correctly.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Current local calendar date.
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
