//! One meal plan run, start to finish.
//!
//! Stages run strictly in order with no retries:
//! `FetchHistory → BuildPrompt → InvokeModel → ParseResponse → PersistMeals →
//! BuildNotification → SendNotification → Done`. Only `InvokeModel` and
//! `ParseResponse` can fail the run. History reads, inserts and the final
//! send degrade to a logged error.

use chrono::NaiveDate;

use super::{parser, prompt};
use crate::config::ModelConfig;
use crate::error::{PlanError, PlanResult};
use crate::llm::{ChatMessage, ChatModel};
use crate::meals::{MealEntry, MealStore};
use crate::notify::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    FetchHistory,
    BuildPrompt,
    InvokeModel,
    ParseResponse,
    PersistMeals,
    BuildNotification,
    SendNotification,
    Done,
}

impl RunStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FetchHistory => "fetch_history",
            Self::BuildPrompt => "build_prompt",
            Self::InvokeModel => "invoke_model",
            Self::ParseResponse => "parse_response",
            Self::PersistMeals => "persist_meals",
            Self::BuildNotification => "build_notification",
            Self::SendNotification => "send_notification",
            Self::Done => "done",
        }
    }
}

impl std::fmt::Display for RunStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PlanSettings {
    pub temperature: f64,
    pub history_days: u32,
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            history_days: 3,
        }
    }
}

impl From<&ModelConfig> for PlanSettings {
    fn from(config: &ModelConfig) -> Self {
        let mut temperature = config.temperature;
        if !(0.0..=2.0).contains(&temperature) {
            tracing::warn!(temperature, "temperature out of range, using 0.7");
            temperature = Self::default().temperature;
        }
        Self {
            temperature,
            history_days: config.history_days,
        }
    }
}

/// Outcome of a run that reached `Done`.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Number of history rows shown to the model.
    pub history_len: usize,
    /// Every parsed meal, in plan order, whether or not it was saved.
    pub meals: Vec<MealEntry>,
    /// Ids of the rows that were inserted.
    pub saved_ids: Vec<i64>,
    /// Provider message id, if the notification went out.
    pub message_id: Option<String>,
}

pub struct Planner<'a, M, N> {
    store: &'a MealStore,
    model: &'a M,
    notifier: &'a N,
    settings: PlanSettings,
}

impl<'a, M: ChatModel, N: Notifier> Planner<'a, M, N> {
    pub fn new(store: &'a MealStore, model: &'a M, notifier: &'a N, settings: PlanSettings) -> Self {
        Self {
            store,
            model,
            notifier,
            settings,
        }
    }

    /// Execute one run, dating every new meal `today`. Returns the fatal
    /// error if the run ends in the failed state.
    pub async fn run(&self, today: NaiveDate) -> PlanResult<RunReport> {
        let days = self.settings.history_days;

        tracing::info!(stage = %RunStage::FetchHistory, "fetching recent meals");
        let history = self
            .store
            .recent_meals_as_of(days, today)
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "failed to read meal history, continuing without it");
                Vec::new()
            });

        tracing::debug!(stage = %RunStage::BuildPrompt, history = history.len(), "building prompt");
        let messages = [
            ChatMessage::system(prompt::system_prompt(&history, days)),
            ChatMessage::user(prompt::USER_PROMPT),
        ];

        tracing::info!(
            stage = %RunStage::InvokeModel,
            model = self.model.model_id(),
            "querying model"
        );
        let raw = self
            .model
            .complete(&messages, self.settings.temperature)
            .await
            .inspect_err(|e| {
                tracing::error!(stage = %RunStage::InvokeModel, error = ?e, "model call failed");
            })?;
        tracing::info!("received response from model");
        tracing::debug!(raw = %raw, "raw response");

        let meals = parser::parse_plan(&raw).inspect_err(|e| {
            if let PlanError::Parse {
                source,
                raw,
                cleaned,
            } = e
            {
                tracing::error!(
                    stage = %RunStage::ParseResponse,
                    error = %source,
                    raw = %raw,
                    cleaned = %cleaned,
                    "failed to parse model response"
                );
            }
        })?;
        tracing::info!(
            stage = %RunStage::ParseResponse,
            meals = meals.len(),
            "parsing successful, saving to database"
        );

        let mut saved_ids = Vec::with_capacity(meals.len());
        for meal in &meals {
            match self
                .store
                .add(&meal.meal_type, &meal.content, Some(&meal.macros), Some(today))
            {
                Ok(id) => {
                    tracing::info!(id, meal_type = %meal.meal_type, "saved meal");
                    saved_ids.push(id);
                }
                Err(e) => {
                    tracing::error!(
                        stage = %RunStage::PersistMeals,
                        meal_type = %meal.meal_type,
                        error = %e,
                        "failed to save meal, continuing"
                    );
                }
            }
        }

        let body = prompt::render_notification(&meals);
        tracing::debug!(stage = %RunStage::BuildNotification, len = body.len(), "notification built");

        tracing::info!(stage = %RunStage::SendNotification, "sending notification");
        let message_id = match self.notifier.send(&body).await {
            Ok(sid) => Some(sid),
            Err(e) => {
                tracing::error!(error = %e, "failed to send notification");
                None
            }
        };

        tracing::info!(
            stage = %RunStage::Done,
            parsed = meals.len(),
            saved = saved_ids.len(),
            notified = message_id.is_some(),
            "meal plan run finished"
        );

        Ok(RunReport {
            history_len: history.len(),
            meals,
            saved_ids,
            message_id,
        })
    }
}
