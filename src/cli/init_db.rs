//! CLI `init-db` command: create the meals table and print where it lives.

use anyhow::{Context, Result};

use mealplan::config::PlannerConfig;
use mealplan::meals::MealStore;

pub fn init_db(config: &PlannerConfig) -> Result<()> {
    let store = MealStore::new(config.resolved_db_path());
    store
        .initialize()
        .with_context(|| format!("failed to initialize {}", store.path().display()))?;

    println!("Database initialized at {}", store.path().display());
    Ok(())
}
