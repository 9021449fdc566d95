use quill::{GenerationRequest, Message, MessageRole};
use std::fmt;

pub trait SystemPrompt: fmt::Display {
    fn to_generation_request(&self, user_prompt: &impl fmt::Display) -> GenerationRequest {
        GenerationRequest::new(vec![
            Message {
                role: MessageRole::System,
                content: self.to_string(),
            },
            Message {
                role: MessageRole::User,
                content: user_prompt.to_string(),
            },
        ])
    }
}

impl<T: fmt::Display> SystemPrompt for T {}

pub struct IntroductionPrompt {}

impl fmt::Display for IntroductionPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You are a helpful assistant that write engaging blog introductions"
        )
    }
}

pub struct SummaryPrompt {}

impl fmt::Display for SummaryPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You are a helpful assistant that writes blog summaries")
    }
}

pub struct IntroductionRequestPrompt<'a> {
    pub content: &'a str,
}

impl fmt::Display for IntroductionRequestPrompt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generate an intro for this post: {}", self.content)
    }
}

pub struct SummaryRequestPrompt<'a> {
    pub content: &'a str,
}

impl fmt::Display for SummaryRequestPrompt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generate a summary for this post: {}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_embed_content_after_system_instruction() {
        let content = "Rust ownership in five minutes";
        let request =
            IntroductionPrompt {}.to_generation_request(&IntroductionRequestPrompt { content });
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, MessageRole::System);
        assert!(request.messages[0].content.contains("introductions"));
        assert_eq!(request.messages[1].role, MessageRole::User);
        assert_eq!(
            request.messages[1].content,
            "Generate an intro for this post: Rust ownership in five minutes"
        );

        let request = SummaryPrompt {}.to_generation_request(&SummaryRequestPrompt { content });
        assert!(request.messages[0].content.contains("summaries"));
        assert!(request.messages[1].content.ends_with(content));
    }
}
