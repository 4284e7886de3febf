//! Prompt text sent to the model and the notification text built from its
//! answer. The JSON field names in the prompt must match what
//! [`super::parser`] reads.

use std::fmt::Write;

use crate::meals::{Meal, MealEntry};

pub const USER_PROMPT: &str = "Give me a meal suggestion for today.";

pub const NO_HISTORY: &str = "No recent meal history.";

pub const NOTIFICATION_HEADER: &str = "🍽️ *Today's Meal Plan* 🍽️\n\n";

const INSTRUCTIONS: &str = r#"Provide a meal plan for today including Breakfast, Lunch, Dinner, and strictly optional Snacks.
You MUST output the response in valid JSON format with the below structure. Make sure that this is the only thing you output, there should not be any other text in your response other than the JSON structure below.:
{
    "meals": [
        {
            "meal_type": "Breakfast",
            "content": "Description of the meal",
            "macros": "Calories: Xkcal, Carbs: Xg, Protein: Yg, Fats: Zg"
        },
        ...
    ]
}
Do not add any markdown formatting or text outside the JSON."#;

/// Summarise recent meals so the model avoids repeating them.
pub fn history_text(history: &[Meal], days: u32) -> String {
    if history.is_empty() {
        return NO_HISTORY.to_string();
    }

    let mut text = format!(
        "Here is what the user ate in the last {days} days (Avoid repeating these):\n"
    );
    for meal in history {
        let _ = writeln!(text, "- {} ({}): {}", meal.date, meal.meal_type, meal.content);
    }
    text
}

pub fn system_prompt(history: &[Meal], days: u32) -> String {
    format!(
        "You are a helpful assistant who helps the user plan their meals. \n{}\n{}",
        history_text(history, days),
        INSTRUCTIONS
    )
}

/// Notification body: header, then one block per meal in plan order.
pub fn render_notification(meals: &[MealEntry]) -> String {
    let mut body = NOTIFICATION_HEADER.to_string();
    for meal in meals {
        let _ = write!(
            body,
            "*Meal Type:* {}\n*Meal:* {}\n*Macros:* {}\n\n",
            meal.meal_type, meal.content, meal.macros
        );
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(date: &str, meal_type: &str, content: &str) -> Meal {
        Meal {
            id: 1,
            date: date.into(),
            meal_type: meal_type.into(),
            content: content.into(),
            macros: None,
        }
    }

    #[test]
    fn empty_history_uses_fixed_sentence() {
        let prompt = system_prompt(&[], 3);
        assert!(prompt.contains(NO_HISTORY));
        assert!(!prompt.contains("Avoid repeating"));
    }

    #[test]
    fn history_lines_are_listed() {
        let history = vec![
            meal("2024-01-10", "Dinner", "Curry"),
            meal("2024-01-09", "Lunch", "Rice and beans"),
        ];
        let text = history_text(&history, 3);
        assert!(text.starts_with("Here is what the user ate in the last 3 days"));
        assert!(text.contains("- 2024-01-10 (Dinner): Curry\n"));
        assert!(text.contains("- 2024-01-09 (Lunch): Rice and beans\n"));
    }

    #[test]
    fn prompt_names_the_parsed_fields() {
        let prompt = system_prompt(&[], 3);
        for field in ["\"meals\"", "\"meal_type\"", "\"content\"", "\"macros\""] {
            assert!(prompt.contains(field), "prompt is missing {field}");
        }
        assert!(prompt.contains("Breakfast, Lunch, Dinner"));
    }

    #[test]
    fn notification_lists_meals_in_order() {
        let meals = vec![
            MealEntry {
                meal_type: "Breakfast".into(),
                content: "Oats".into(),
                macros: "350kcal".into(),
            },
            MealEntry {
                meal_type: "Dinner".into(),
                content: "Salmon".into(),
                macros: "NA".into(),
            },
        ];
        let body = render_notification(&meals);
        assert!(body.starts_with(NOTIFICATION_HEADER));
        assert!(body.contains("*Meal Type:* Breakfast\n*Meal:* Oats\n*Macros:* 350kcal\n\n"));
        assert!(body.find("Breakfast").unwrap() < body.find("Dinner").unwrap());
    }

    #[test]
    fn empty_plan_renders_header_only() {
        assert_eq!(render_notification(&[]), NOTIFICATION_HEADER);
    }
}
