//! Fixed extraction prompt and per-document user message

/// Parameters for rendering the user message of one request
#[derive(Debug, Clone)]
pub struct PromptParams<'a> {
    pub filename: &'a str,
    pub cv_text: &'a str,
    pub max_input_chars: usize,
}

#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub system: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            system: EXTRACTION_PROMPT.to_string(),
        }
    }
}

impl PromptTemplates {
    pub fn render_user_message(&self, params: &PromptParams<'_>) -> String {
        format!(
            "CV Filename: {}\n\nCV Content:\n{}",
            params.filename,
            truncate_chars(params.cv_text, params.max_input_chars)
        )
    }
}

/// Keep at most `max_chars` characters (not bytes) of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

pub const EXTRACTION_PROMPT: &str = r#"You are an expert CV/Resume parser. Analyze the provided CV content and extract the following personal information:

Name
Email
Phone/Mobile Number
Location/Address (City, Country)
LinkedIn Profile URL
GitHub Profile URL (if available)
Professional Summary/Objective (first line or brief summary)
Current/Most Recent Job Title
Current/Most Recent Company
Years of Experience (total)
Education (Highest Degree)
University/Institution Name

Return the information as a JSON object with these exact keys:
{
    "name": "",
    "email": "",
    "phone": "",
    "location": "",
    "linkedin": "",
    "github": "",
    "professional_summary": "",
    "current_job_title": "",
    "current_company": "",
    "years_experience": "",
    "education": "",
    "institution": ""
}

If any field is not found or not clearly mentioned, use null for that field.
Return ONLY the JSON object, no other text."#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::record::FIELD_KEYS;

    #[test]
    fn test_prompt_lists_every_field_key() {
        let templates = PromptTemplates::default();
        for key in FIELD_KEYS {
            assert!(templates.system.contains(&format!("\"{}\"", key)), "missing {key}");
        }
        assert!(templates.system.contains("use null"));
    }

    #[test]
    fn test_user_message_layout() {
        let templates = PromptTemplates::default();
        let message = templates.render_user_message(&PromptParams {
            filename: "jane.pdf",
            cv_text: "Jane Doe\nEngineer",
            max_input_chars: 4000,
        });

        assert_eq!(message, "CV Filename: jane.pdf\n\nCV Content:\nJane Doe\nEngineer");
    }

    #[test]
    fn test_user_message_truncates_content() {
        let templates = PromptTemplates::default();
        let cv_text = "a".repeat(5000);
        let message = templates.render_user_message(&PromptParams {
            filename: "long.txt",
            cv_text: &cv_text,
            max_input_chars: 4000,
        });

        let content = message.split("CV Content:\n").nth(1).unwrap();
        assert_eq!(content.len(), 4000);
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let text = "ééééé";
        assert_eq!(truncate_chars(text, 3), "ééé");
        assert_eq!(truncate_chars(text, 5), text);
        assert_eq!(truncate_chars(text, 10), text);
        assert_eq!(truncate_chars(text, 0), "");
    }
}
