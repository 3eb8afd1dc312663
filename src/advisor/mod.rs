//! Advisory-text client.
//!
//! The planner never depends on this module: advice is a parallel
//! recommendation path whose output is opaque display text. The trait is
//! the seam that keeps the computational core testable offline.

use std::env;
use std::time::Duration;

use crate::error::{MentorError, Result};
use crate::models::UserProfile;

/// Environment variable naming the generation endpoint.
pub const ADVISOR_URL_VAR: &str = "MEAL_MENTOR_ADVISOR_URL";

/// Environment variable naming the model to request.
pub const ADVISOR_MODEL_VAR: &str = "MEAL_MENTOR_ADVISOR_MODEL";

/// Environment variable holding an optional bearer token.
pub const ADVISOR_API_KEY_VAR: &str = "MEAL_MENTOR_ADVISOR_API_KEY";

const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";
const DEFAULT_MODEL: &str = "qwen2.5:7b";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Produces free-text dietary advice for a profile.
pub trait AdvisoryProvider {
    fn generate_advice(&self, profile: &UserProfile) -> Result<String>;
}

/// Build the generation prompt from the advisory-relevant profile fields.
pub fn build_prompt(profile: &UserProfile) -> String {
    let diet = if profile.vegetarian {
        "vegetarian"
    } else {
        "non-vegetarian"
    };

    format!(
        "Give short, practical dietary advice for a {} year old {} person \
         whose fitness goal is to {} and who prefers {} food. \
         Answer in a few sentences of plain text.",
        profile.age_years,
        profile.gender.label().to_lowercase(),
        goal_phrase(profile),
        diet
    )
}

fn goal_phrase(profile: &UserProfile) -> &'static str {
    use crate::models::FitnessGoal;
    match profile.goal {
        FitnessGoal::LoseWeight => "lose weight",
        FitnessGoal::MaintainWeight => "maintain weight",
        FitnessGoal::GainWeight => "gain weight",
    }
}

/// Blocking HTTP client for an Ollama-style generation endpoint.
pub struct HttpAdvisor {
    endpoint: String,
    model: String,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
}

impl HttpAdvisor {
    pub fn new(endpoint: String, model: String, api_key: Option<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            endpoint,
            model,
            api_key,
            client,
        })
    }

    /// Configure from the environment, falling back to a local endpoint.
    pub fn from_env() -> Result<Self> {
        let endpoint = env::var(ADVISOR_URL_VAR).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let model = env::var(ADVISOR_MODEL_VAR).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let api_key = env::var(ADVISOR_API_KEY_VAR).ok();

        Self::new(endpoint, model, api_key)
    }
}

impl AdvisoryProvider for HttpAdvisor {
    fn generate_advice(&self, profile: &UserProfile) -> Result<String> {
        let body = serde_json::json!({
            "model": self.model,
            "prompt": build_prompt(profile),
            "stream": false,
        });

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(MentorError::Service(format!(
                "endpoint returned status {}",
                status
            )));
        }

        let payload: serde_json::Value = response.json()?;
        payload["response"]
            .as_str()
            .map(|s| s.trim().to_string())
            .ok_or_else(|| {
                MentorError::Service("response body missing 'response' text field".to_string())
            })
    }
}
