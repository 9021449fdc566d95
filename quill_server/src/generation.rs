use tracing::{debug, error, warn};

use crate::{
    client::CompletionBackend,
    models::{
        generate::GenerationKind,
        prompts::{
            IntroductionPrompt, IntroductionRequestPrompt, SummaryPrompt, SummaryRequestPrompt,
            SystemPrompt,
        },
    },
};

/// Generate an engaging blog introduction for `content`. Returns `None`
/// when the backend fails or gives back no text.
pub async fn generate_introduction(
    backend: &dyn CompletionBackend,
    content: &str,
) -> Option<String> {
    let request =
        IntroductionPrompt {}.to_generation_request(&IntroductionRequestPrompt { content });
    generate(backend, GenerationKind::Intro, request).await
}

/// Generate a blog summary for `content`. Same failure semantics as
/// [`generate_introduction`].
pub async fn generate_summary(backend: &dyn CompletionBackend, content: &str) -> Option<String> {
    let request = SummaryPrompt {}.to_generation_request(&SummaryRequestPrompt { content });
    generate(backend, GenerationKind::Summary, request).await
}

// Every failure cause collapses into `None` here. The cause only survives
// in the logs.
async fn generate(
    backend: &dyn CompletionBackend,
    kind: GenerationKind,
    request: quill::GenerationRequest,
) -> Option<String> {
    debug!("generating {kind}");
    match backend.complete(request).await {
        Ok(text) if text.is_empty() => {
            warn!("backend returned empty text for {kind}");
            None
        }
        Ok(text) => Some(text),
        Err(err) => {
            error!("error generating {kind}: {err}");
            None
        }
    }
}
