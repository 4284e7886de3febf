//! Messaging collaborator: delivers the rendered plan.

pub mod whatsapp;

use crate::error::PlanResult;

#[allow(async_fn_in_trait)]
pub trait Notifier {
    /// Send `body` and return the provider's message id.
    async fn send(&self, body: &str) -> PlanResult<String>;
}

pub const TEST_MESSAGE: &str = "Hello! This is a test message from your Meal Planner Agent.";
