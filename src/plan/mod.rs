//! Daily plan generation: prompt, parse, persist, notify.

pub mod orchestrator;
pub mod parser;
pub mod prompt;

pub use orchestrator::{PlanSettings, Planner, RunReport, RunStage};

use crate::config::{NotifyCredentials, PlannerConfig};
use crate::error::PlanResult;
use crate::llm::openai::OpenAiChatClient;
use crate::meals::MealStore;
use crate::notify::whatsapp::WhatsAppNotifier;

/// Wire the real collaborators from config and run once for today.
pub async fn run_daily_plan(config: &PlannerConfig) -> PlanResult<RunReport> {
    let store = MealStore::new(config.resolved_db_path());
    if let Err(e) = store.initialize() {
        tracing::error!(error = %e, path = %store.path().display(), "failed to initialize database");
    }

    let model = OpenAiChatClient::new(&config.model);
    let notifier = WhatsAppNotifier::new(&config.notify, NotifyCredentials::from_env());

    Planner::new(&store, &model, &notifier, PlanSettings::from(&config.model))
        .run(crate::meals::today())
        .await
}
