/// A stored meal, matching the `meals` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    /// Assigned by SQLite on insert; never reused.
    pub id: i64,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub meal_type: String,
    pub content: String,
    pub macros: Option<String>,
}

/// One meal from a parsed model response, with defaults already applied.
/// Has no id until it is written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealEntry {
    pub meal_type: String,
    pub content: String,
    pub macros: String,
}
