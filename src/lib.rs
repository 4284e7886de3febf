//! Daily meal planner.
//!
//! Asks a local chat model for today's meals, keeps an append-only meal
//! history in SQLite so recent meals are not repeated, and sends the plan as
//! a WhatsApp message.
//!
//! # Modules
//!
//! - [`config`]: TOML + environment configuration, messaging credentials
//! - [`db`]: SQLite connection and schema
//! - [`meals`]: meal records and the [`meals::MealStore`]
//! - [`plan`]: response parsing, prompt text, and the run orchestrator
//! - [`llm`]: chat-completion model client
//! - [`notify`]: WhatsApp notifier
//! - [`error`]: the [`error::PlanError`] taxonomy
//! - [`logging`]: tracing subscriber setup

pub mod config;
pub mod db;
pub mod error;
pub mod llm;
pub mod logging;
pub mod meals;
pub mod notify;
pub mod plan;
