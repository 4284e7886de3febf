//! Append-only meal log backed by a single SQLite file.
//!
//! Each operation opens its own connection and drops it before returning.
//! There are no update or delete paths.

use chrono::{Duration, NaiveDate};
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

use super::types::Meal;
use super::DATE_FORMAT;
use crate::db;
use crate::error::{PlanError, PlanResult};

#[derive(Debug, Clone)]
pub struct MealStore {
    path: PathBuf,
}

impl MealStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> PlanResult<Connection> {
        db::open_database(&self.path)
    }

    /// Create the database file and `meals` table if they do not exist.
    pub fn initialize(&self) -> PlanResult<()> {
        let conn = self.connect()?;
        db::schema::init_schema(&conn)?;
        tracing::info!(path = %self.path.display(), "database initialized and table verified");
        Ok(())
    }

    /// Insert one meal and return its new id. `date` defaults to today.
    pub fn add(
        &self,
        meal_type: &str,
        content: &str,
        macros: Option<&str>,
        date: Option<NaiveDate>,
    ) -> PlanResult<i64> {
        if meal_type.trim().is_empty() {
            return Err(PlanError::InvalidMeal("meal_type must not be empty".into()));
        }
        if content.trim().is_empty() {
            return Err(PlanError::InvalidMeal("content must not be empty".into()));
        }

        let date = date.unwrap_or_else(super::today);
        let date_str = date.format(DATE_FORMAT).to_string();

        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO meals (date, meal_type, content, macros) VALUES (?1, ?2, ?3, ?4)",
            params![date_str, meal_type, content, macros],
        )?;
        let id = conn.last_insert_rowid();

        tracing::debug!(id, meal_type, date = %date_str, "added meal");
        Ok(id)
    }

    /// Meals dated on or after `today - days`, newest date first.
    pub fn recent_meals(&self, days: u32) -> PlanResult<Vec<Meal>> {
        self.recent_meals_as_of(days, super::today())
    }

    /// Same as [`recent_meals`](Self::recent_meals), evaluated as of `today`.
    pub fn recent_meals_as_of(&self, days: u32, today: NaiveDate) -> PlanResult<Vec<Meal>> {
        // Reading must not create the database as a side effect.
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        // A window reaching past the earliest representable date means "all history".
        let threshold = today
            .checked_sub_signed(Duration::days(i64::from(days)))
            .unwrap_or(NaiveDate::MIN)
            .format(DATE_FORMAT)
            .to_string();

        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, date, meal_type, content, macros FROM meals \
             WHERE date >= ?1 ORDER BY date DESC, id DESC",
        )?;

        let meals = stmt
            .query_map(params![threshold], |row| {
                Ok(Meal {
                    id: row.get(0)?,
                    date: row.get(1)?,
                    meal_type: row.get(2)?,
                    content: row.get(3)?,
                    macros: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(meals)
    }
}
