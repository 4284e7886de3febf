//! CLI `history` command: print recent meals, newest first.

use anyhow::Result;

use mealplan::config::PlannerConfig;
use mealplan::meals::MealStore;

pub fn history(config: &PlannerConfig, days: u32) -> Result<()> {
    let store = MealStore::new(config.resolved_db_path());
    let meals = store.recent_meals(days)?;

    if meals.is_empty() {
        println!("No meals recorded in the last {days} days.");
        return Ok(());
    }

    for meal in &meals {
        println!(
            "{}  {:<10}  {}  [{}]",
            meal.date,
            meal.meal_type,
            meal.content,
            meal.macros.as_deref().unwrap_or("-")
        );
    }
    eprintln!("{} meals in the last {days} days.", meals.len());
    Ok(())
}
