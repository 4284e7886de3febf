#![allow(dead_code)]

use std::cell::RefCell;

use chrono::NaiveDate;
use mealplan::error::{PlanError, PlanResult};
use mealplan::llm::{ChatMessage, ChatModel};
use mealplan::meals::MealStore;
use mealplan::notify::Notifier;
use tempfile::TempDir;

/// A store backed by a fresh file in a temp dir. Keep the `TempDir` alive.
pub fn temp_store() -> (TempDir, MealStore) {
    let tmp = TempDir::new().unwrap();
    let store = MealStore::new(tmp.path().join("meal_history.db"));
    store.initialize().unwrap();
    (tmp, store)
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn row_count(store: &MealStore) -> i64 {
    let conn = rusqlite::Connection::open(store.path()).unwrap();
    conn.query_row("SELECT COUNT(*) FROM meals", [], |row| row.get(0))
        .unwrap()
}

/// Make every insert with the given meal type fail inside SQLite.
pub fn fail_inserts_of(store: &MealStore, meal_type: &str) {
    let conn = rusqlite::Connection::open(store.path()).unwrap();
    conn.execute_batch(&format!(
        "CREATE TRIGGER fail_{0} BEFORE INSERT ON meals WHEN NEW.meal_type = '{0}' \
         BEGIN SELECT RAISE(ABORT, 'simulated storage fault'); END;",
        meal_type
    ))
    .unwrap();
}

/// Model fake that returns a fixed reply and records what it was asked.
pub struct ScriptedModel {
    reply: Result<String, String>,
    pub calls: RefCell<Vec<(Vec<ChatMessage>, f64)>>,
}

impl ScriptedModel {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn system_prompt(&self) -> String {
        self.calls.borrow()[0].0[0].content.clone()
    }
}

impl ChatModel for ScriptedModel {
    async fn complete(&self, messages: &[ChatMessage], temperature: f64) -> PlanResult<String> {
        self.calls.borrow_mut().push((messages.to_vec(), temperature));
        self.reply.clone().map_err(PlanError::Transport)
    }

    fn model_id(&self) -> &str {
        "scripted"
    }
}

/// Notifier fake that records every body it is asked to send.
#[derive(Default)]
pub struct RecordingNotifier {
    pub fail: bool,
    pub sent: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            sent: RefCell::new(Vec::new()),
        }
    }
}

impl Notifier for RecordingNotifier {
    async fn send(&self, body: &str) -> PlanResult<String> {
        self.sent.borrow_mut().push(body.to_string());
        if self.fail {
            return Err(PlanError::Transport("provider unavailable".into()));
        }
        Ok(format!("SM{}", self.sent.borrow().len()))
    }
}

pub const THREE_MEALS: &str = r#"<think>
The user had curry yesterday, so avoid it.
</think>
```json
{
    "meals": [
        {"meal_type": "Breakfast", "content": "Greek yogurt with berries", "macros": "Calories: 300kcal"},
        {"meal_type": "Lunch", "content": "Chicken salad", "macros": "Calories: 450kcal"},
        {"meal_type": "Dinner", "content": "Baked salmon with rice"}
    ]
}
```"#;
