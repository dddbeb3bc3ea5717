//! Prompt formatting for the completion endpoint.

/// Formats the configured system prompt and the user input into a single
/// completion prompt. Pure, no failure modes.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    system_prompt: String,
}

impl PromptBuilder {
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
        }
    }

    /// Labeled sections, with the trailing marker the model completes from.
    pub fn format(&self, user_input: &str) -> String {
        format!(
            "System: {}\nUser: {}\nAssistant:",
            self.system_prompt, user_input
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_both_sections_and_trailing_marker() {
        let prompt = PromptBuilder::new("SYS").format("hello");
        assert!(prompt.contains("System: SYS"));
        assert!(prompt.contains("User: hello"));
        assert!(prompt.ends_with("Assistant:"));
    }

    #[test]
    fn multiline_system_prompt_is_embedded_verbatim() {
        let prompt = PromptBuilder::new("line one\nline two").format("q");
        assert!(prompt.starts_with("System: line one\nline two\nUser: q"));
    }
}
