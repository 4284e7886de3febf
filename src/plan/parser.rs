//! Turns raw model output into [`MealEntry`] values.
//!
//! Models such as DeepSeek-R1 wrap their answer in `<think>` scratch text and
//! often put the JSON inside a markdown fence. Both are removed before the
//! remainder is parsed. Missing fields are filled with placeholders so one bad
//! field never drops an otherwise usable meal.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer};

use crate::error::{PlanError, PlanResult};
use crate::meals::MealEntry;

pub const DEFAULT_MEAL_TYPE: &str = "Unknown Type";
pub const DEFAULT_CONTENT: &str = "No description provided";
pub const DEFAULT_MACROS: &str = "NA";

lazy_static! {
    // static pattern, cannot fail
    static ref THINK_BLOCK: Regex = Regex::new(r"(?s)<think>.*?</think>").unwrap();
}

#[derive(Debug, Default, Deserialize)]
struct PlanResponse {
    #[serde(default)]
    meals: Vec<RawMeal>,
}

#[derive(Debug, Default, Deserialize)]
struct RawMeal {
    #[serde(default, deserialize_with = "lenient_text")]
    meal_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    content: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    macros: Option<String>,
}

/// Accepts a string, `null`, or any other JSON scalar/structure (rendered as
/// JSON text). Blank strings count as missing.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    }
    .filter(|s| !s.trim().is_empty()))
}

impl From<RawMeal> for MealEntry {
    fn from(raw: RawMeal) -> Self {
        Self {
            meal_type: raw.meal_type.unwrap_or_else(|| DEFAULT_MEAL_TYPE.to_string()),
            content: raw.content.unwrap_or_else(|| DEFAULT_CONTENT.to_string()),
            macros: raw.macros.unwrap_or_else(|| DEFAULT_MACROS.to_string()),
        }
    }
}

/// Remove reasoning blocks and code fences, then trim.
pub fn clean_response(raw: &str) -> String {
    THINK_BLOCK
        .replace_all(raw, "")
        .replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Parse a raw model response into insert-ready meals, in response order.
///
/// On failure the returned [`PlanError::Parse`] carries both the raw and the
/// cleaned text.
pub fn parse_plan(raw: &str) -> PlanResult<Vec<MealEntry>> {
    let cleaned = clean_response(raw);
    tracing::debug!(cleaned = %cleaned, "cleaned model response");

    match serde_json::from_str::<PlanResponse>(&cleaned) {
        Ok(plan) => Ok(plan.meals.into_iter().map(MealEntry::from).collect()),
        Err(source) => Err(PlanError::Parse {
            source,
            raw: raw.to_string(),
            cleaned,
        }),
    }
}
