//! Structured field extraction for one CV through the completion service

use crate::config::ExtractionConfig;
use crate::error::Result;
use crate::llm::client::{CompletionClient, CompletionRequest};
use crate::llm::parser::extract_json_object;
use crate::llm::prompts::{PromptParams, PromptTemplates};
use crate::processing::record::CvRecord;
use log::debug;

pub struct FieldExtractor<C> {
    client: C,
    templates: PromptTemplates,
    settings: ExtractionConfig,
}

impl<C: CompletionClient> FieldExtractor<C> {
    pub fn new(client: C, settings: ExtractionConfig) -> Self {
        Self {
            client,
            templates: PromptTemplates::default(),
            settings,
        }
    }

    pub fn build_request(&self, cv_text: &str, filename: &str) -> CompletionRequest {
        let user = self.templates.render_user_message(&PromptParams {
            filename,
            cv_text,
            max_input_chars: self.settings.max_input_chars,
        });

        CompletionRequest {
            system: self.templates.system.clone(),
            user,
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        }
    }

    /// Ask the model for the fields of one CV and parse its answer into a record.
    pub async fn extract(&self, cv_text: &str, filename: &str) -> Result<CvRecord> {
        let request = self.build_request(cv_text, filename);
        let response = self.client.complete(&request).await?;
        debug!("Model response for {}: {} characters", filename, response.len());

        let fields = extract_json_object(&response)?;
        Ok(CvRecord::new(filename, fields))
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}
