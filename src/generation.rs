//! Asynchronous generation.
//!
//! A [`Generator`] waits out the simulated processing delay, then asks the
//! optional remote handler for layout descriptors. It never touches the
//! workspace: the outcome is handed back to the event loop, which applies it
//! only if its request token is still the latest.

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::RemoteConfig;
use crate::remote::{GenerateHandler, GenerateRequest, LayoutDescriptor};
use crate::workspace::RequestToken;

/// Result of one generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutcome {
    pub token: RequestToken,
    /// Remote descriptors; empty means local composition only
    pub descriptors: Vec<LayoutDescriptor>,
}

/// Produces generation outcomes off the event loop.
#[derive(Clone)]
pub struct Generator {
    handler: Option<GenerateHandler>,
    latency: Duration,
}

impl Generator {
    /// Local composition only.
    pub fn offline(latency: Duration) -> Self {
        Self {
            handler: None,
            latency,
        }
    }

    /// Consult the remote collaborator described by `config`.
    pub fn new(config: &RemoteConfig, latency: Duration) -> Self {
        Self::with_handler(GenerateHandler::from_config(config), latency)
    }

    pub fn with_handler(handler: GenerateHandler, latency: Duration) -> Self {
        Self {
            handler: Some(handler),
            latency,
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn is_remote(&self) -> bool {
        self.handler.is_some()
    }

    pub async fn fetch(&self, token: RequestToken, prompt: String) -> GenerationOutcome {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let descriptors = match &self.handler {
            None => Vec::new(),
            Some(handler) => {
                let response = handler.handle(&GenerateRequest { prompt }).await;
                if response.is_success() {
                    let layouts = response.into_layouts().unwrap_or_default();
                    debug!(token = %token, count = layouts.len(), "Remote descriptors received");
                    layouts
                } else {
                    warn!(
                        token = %token,
                        status = response.status,
                        "Remote generation failed, using local composition: {}",
                        response.error_message().unwrap_or("unknown error")
                    );
                    Vec::new()
                }
            }
        };

        GenerationOutcome { token, descriptors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::factory::LayoutFactory;
    use crate::remote::{CompletionClient, RemoteError};
    use crate::workspace::{Settings, Workspace};
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::time::Instant;

    struct FixedCompletion(&'static str);

    #[async_trait]
    impl CompletionClient for FixedCompletion {
        async fn complete(&self, _prompt: &str) -> Result<String, RemoteError> {
            Ok(self.0.to_string())
        }
    }

    fn workspace() -> Workspace {
        Workspace::with_factory(Settings::default(), LayoutFactory::seeded(Catalog::builtin(), 3))
    }

    #[tokio::test]
    async fn test_offline_yields_no_descriptors() {
        let generator = Generator::offline(Duration::ZERO);
        let outcome = generator.fetch(RequestToken(1), "Todo app".into()).await;
        assert_eq!(outcome.token, RequestToken(1));
        assert!(outcome.descriptors.is_empty());
        assert!(!generator.is_remote());
    }

    #[tokio::test]
    async fn test_missing_credential_falls_back_to_local() {
        let generator = Generator::new(&RemoteConfig::default(), Duration::ZERO);
        assert!(generator.is_remote());

        let mut ws = workspace();
        let token = ws.begin_generation("Todo app").unwrap();
        let outcome = generator.fetch(token, ws.prompt().to_string()).await;
        assert!(outcome.descriptors.is_empty());

        assert!(ws.complete_generation(outcome.token, &outcome.descriptors));
        assert_eq!(ws.batch().len(), 3);
        assert!(ws.batch().iter().all(|l| !l.markup.is_empty()));
    }

    #[tokio::test]
    async fn test_remote_descriptors_flow_into_batch() {
        let client = FixedCompletion(
            r#"Here: [{"title":"Neon","description":"Glow","html":"<div>neon</div>"}]"#,
        );
        let generator = Generator::with_handler(
            GenerateHandler::with_client(Arc::new(client)),
            Duration::ZERO,
        );

        let mut ws = workspace();
        let token = ws.begin_generation("Arcade").unwrap();
        let outcome = generator.fetch(token, "Arcade".into()).await;
        assert_eq!(outcome.descriptors.len(), 1);

        ws.complete_generation(outcome.token, &outcome.descriptors);
        assert_eq!(ws.batch()[0].title, "Neon");
        assert_eq!(ws.batch()[0].markup, "<div>neon</div>");
        assert_eq!(ws.batch().len(), 3);
    }

    #[tokio::test]
    async fn test_unparsable_completion_yields_heuristic_titles() {
        let generator = Generator::with_handler(
            GenerateHandler::with_client(Arc::new(FixedCompletion("no layouts here"))),
            Duration::ZERO,
        );
        let outcome = generator.fetch(RequestToken(2), "Bakery".into()).await;
        let titles: Vec<_> = outcome.descriptors.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["Bakery Modern", "Bakery Bold", "Bakery Minimal"]);
    }

    #[tokio::test]
    async fn test_latency_is_applied() {
        let generator = Generator::offline(Duration::from_millis(20));
        let started = Instant::now();
        generator.fetch(RequestToken(1), "p".into()).await;
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_out_of_order_completions() {
        let generator = Generator::offline(Duration::ZERO);
        let mut ws = workspace();
        let first = ws.begin_generation("first").unwrap();
        let second = ws.begin_generation("second").unwrap();

        let late = generator.fetch(first, "first".into()).await;
        let fresh = generator.fetch(second, "second".into()).await;

        assert!(ws.complete_generation(fresh.token, &fresh.descriptors));
        assert!(!ws.complete_generation(late.token, &late.descriptors));
        assert!(ws.batch().iter().all(|l| l.source_prompt == "second"));
    }
}
