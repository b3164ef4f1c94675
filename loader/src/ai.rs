/*
 * SPDX-FileCopyrightText: 2024 Crown Copyright
 *
 * SPDX-License-Identifier: MIT
 */

//! Thin client for an OpenAI-compatible chat-completions API. Calls are
//! synchronous from the caller's point of view and carry no retry; a
//! failed call surfaces as an error on the admin action that made it.

use anyhow::{Context, Result};
use core::input::load_secret;
use core::types::Cli;
use serde::{Deserialize, Serialize};

const EXTRACTION_ROLE: &str = "\
You are a data-entry assistant for a registry of government policy evaluations.

You will receive the text of an evaluation report or plan. Extract the initial
registry record and answer with a single JSON object, without explanation or
markdown fences, using exactly these fields:
* \"title\": title of the evaluation
* \"brief_description\": 300 word description of the evaluation
* \"lead_department\": government department associated with this evaluation
* \"status\": one of \"planned\", \"ongoing\", \"complete\"
* \"evaluation_design_types\": array of design types of this evaluation

All fields are required.";

/// Initial evaluation data extracted from an uploaded document. Free-text
/// fields are taken as-is; `lead_department` and the design types still
/// have to be matched to registry codes by a human.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EvaluationInitialData {
    pub title: String,
    pub brief_description: String,
    pub lead_department: String,
    pub status: String,
    #[serde(default)]
    pub evaluation_design_types: Vec<String>,
}

pub struct AiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl AiClient {
    pub fn from_cli(cli: &Cli) -> Result<AiClient> {
        let key_file = cli
            .ai_api_key_file
            .as_ref()
            .context("No AI api key file configured")?;

        Ok(AiClient {
            http: reqwest::Client::new(),
            base_url: cli.ai_api_url.trim_end_matches('/').to_string(),
            api_key: load_secret(key_file),
            model: cli.ai_model.clone(),
        })
    }

    pub async fn chat(&self, system: &str, user: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let response: ChatResponse = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("AI request failed")?
            .error_for_status()
            .context("AI request rejected")?
            .json()
            .await
            .context("Failed to parse AI response")?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .context("AI response contained no choices")
    }

    pub async fn extract_evaluation(&self, document_text: &str) -> Result<EvaluationInitialData> {
        let answer = self.chat(EXTRACTION_ROLE, document_text).await?;

        serde_json::from_str(strip_fences(&answer))
            .context("AI answer did not match the expected fields")
    }
}

/// Models fence their JSON in markdown despite instructions often enough
/// that stripping is cheaper than re-asking.
fn strip_fences(answer: &str) -> &str {
    let answer = answer.trim();
    answer
        .strip_prefix("```json")
        .or_else(|| answer.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(answer)
}
