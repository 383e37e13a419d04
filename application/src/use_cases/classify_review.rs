//! Classify Review use case
//!
//! Sends one review, wrapped in the few-shot prompt, to the configured model
//! and reads a sentiment out of the reply.

use crate::config::ClassifierConfig;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::stream_observer::{NoStreamObserver, StreamObserver};
use reviewbot_domain::{Classification, Model};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while classifying a review
#[derive(Error, Debug)]
pub enum ClassifyReviewError {
    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),
}

/// Use case for labelling a single review.
///
/// Flow:
/// 1. Render the few-shot prompt around the review
/// 2. Open a session on the configured model
/// 3. Stream the reply, echoing chunks to the observer
/// 4. Interpret the aggregated reply as Positive/Negative
///
/// Holds no per-request state, so one instance can serve concurrent requests.
#[derive(Clone)]
pub struct ClassifyReviewUseCase {
    gateway: Arc<dyn LlmGateway>,
    config: Arc<ClassifierConfig>,
}

impl ClassifyReviewUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, config: ClassifierConfig) -> Self {
        Self {
            gateway,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn model(&self) -> &Model {
        self.config.model()
    }

    /// Execute without observing the stream
    pub async fn execute(&self, review: &str) -> Result<Classification, ClassifyReviewError> {
        self.execute_with_observer(review, &NoStreamObserver).await
    }

    /// Execute, forwarding streamed chunks to `observer`.
    ///
    /// Empty reviews are sent as-is.
    pub async fn execute_with_observer(
        &self,
        review: &str,
        observer: &dyn StreamObserver,
    ) -> Result<Classification, ClassifyReviewError> {
        let model = self.config.model();
        let prompt = self.config.render_prompt(review);

        info!(
            model = %model,
            review_chars = review.chars().count(),
            "Classifying review"
        );
        debug!(
            examples = self.config.examples().len(),
            prompt_chars = prompt.chars().count(),
            "Rendered few-shot prompt"
        );

        let session = self.gateway.create_session(model).await?;
        let handle = session.send_streaming(&prompt).await?;

        observer.on_stream_start(session.model());
        let reply = handle.collect_text_with(observer).await;
        observer.on_stream_end();
        let reply = reply?;

        let classification = Classification::new(
            session.model().clone(),
            review.to_string(),
            prompt,
            reply,
        );

        info!(
            sentiment = %classification.sentiment,
            "Review classified"
        );
        debug!(reply = %classification.reply.trim(), "Model reply");

        Ok(classification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::{LlmSession, StreamHandle};
    use async_trait::async_trait;
    use reviewbot_domain::{ExampleSet, Sentiment, StreamEvent};
    use std::sync::Mutex;
    use tokio::sync::mpsc;

    // === Mock implementations ===

    /// Replies with fixed chunks and records every prompt it receives.
    struct MockGateway {
        chunks: Vec<String>,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    impl MockGateway {
        fn new(chunks: &[&str]) -> Self {
            Self {
                chunks: chunks.iter().map(|c| c.to_string()).collect(),
                prompts: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        async fn create_session(
            &self,
            model: &Model,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            Ok(Box::new(MockSession {
                model: model.clone(),
                chunks: self.chunks.clone(),
                prompts: Arc::clone(&self.prompts),
            }))
        }

        async fn available_models(&self) -> Result<Vec<Model>, GatewayError> {
            Ok(vec![Model::default()])
        }
    }

    struct MockSession {
        model: Model,
        chunks: Vec<String>,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl LlmSession for MockSession {
        fn model(&self) -> &Model {
            &self.model
        }

        async fn send(&self, content: &str) -> Result<String, GatewayError> {
            self.prompts.lock().unwrap().push(content.to_string());
            Ok(self.chunks.concat())
        }

        async fn send_streaming(&self, content: &str) -> Result<StreamHandle, GatewayError> {
            self.prompts.lock().unwrap().push(content.to_string());
            let (tx, rx) = mpsc::channel(self.chunks.len() + 1);
            for chunk in &self.chunks {
                tx.send(StreamEvent::Delta(chunk.clone())).await.unwrap();
            }
            tx.send(StreamEvent::Completed(self.chunks.concat()))
                .await
                .unwrap();
            Ok(StreamHandle::new(rx))
        }
    }

    struct FailingGateway;

    #[async_trait]
    impl LlmGateway for FailingGateway {
        async fn create_session(
            &self,
            _model: &Model,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            Err(GatewayError::ConnectionError("connection refused".to_string()))
        }

        async fn available_models(&self) -> Result<Vec<Model>, GatewayError> {
            Ok(vec![])
        }
    }

    #[derive(Default)]
    struct RecordingObserver {
        events: Mutex<Vec<String>>,
    }

    impl StreamObserver for RecordingObserver {
        fn on_stream_start(&self, model: &Model) {
            self.events.lock().unwrap().push(format!("start:{model}"));
        }

        fn on_stream_chunk(&self, chunk: &str) {
            self.events.lock().unwrap().push(chunk.to_string());
        }

        fn on_stream_end(&self) {
            self.events.lock().unwrap().push("end".to_string());
        }
    }

    fn use_case(gateway: Arc<MockGateway>) -> ClassifyReviewUseCase {
        ClassifyReviewUseCase::new(gateway, ClassifierConfig::default())
    }

    // === Tests ===

    #[tokio::test]
    async fn alpha_reply_is_positive() {
        let gateway = Arc::new(MockGateway::new(&["Label", ": ", "alpha"]));
        let result = use_case(gateway)
            .execute("The mess meals are a daily delight; I love every bite!")
            .await
            .unwrap();

        assert_eq!(result.reply, "Label: alpha");
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.display_label(), "Positive");
    }

    #[tokio::test]
    async fn beta_reply_is_negative() {
        let gateway = Arc::new(MockGateway::new(&["Label: beta"]));
        let result = use_case(gateway)
            .execute("Mess meals are a last resort for me.")
            .await
            .unwrap();

        assert_eq!(result.sentiment, Sentiment::Negative);
    }

    #[tokio::test]
    async fn unrelated_reply_is_negative() {
        let gateway = Arc::new(MockGateway::new(&["I am not sure."]));
        let result = use_case(gateway).execute("hmm").await.unwrap();
        assert_eq!(result.sentiment, Sentiment::Negative);
    }

    #[tokio::test]
    async fn prompt_sent_contains_examples_and_literal_input() {
        let gateway = Arc::new(MockGateway::new(&["alpha"]));
        let review = "Rice was {cold} today";
        use_case(Arc::clone(&gateway)).execute(review).await.unwrap();

        let prompts = gateway.prompts();
        assert_eq!(prompts.len(), 1);
        let prompt = &prompts[0];
        for example in &ExampleSet::builtin() {
            assert!(prompt.contains(&example.review));
        }
        assert!(prompt.contains(review));
        assert!(prompt.starts_with("Carefully read the following reviews and their labels"));
    }

    #[tokio::test]
    async fn empty_review_still_issues_request() {
        let gateway = Arc::new(MockGateway::new(&["Label: alpha"]));
        let result = use_case(Arc::clone(&gateway)).execute("").await.unwrap();

        assert_eq!(gateway.prompts().len(), 1);
        assert_eq!(result.review, "");
        assert_eq!(result.sentiment, Sentiment::Positive);
    }

    #[tokio::test]
    async fn observer_sees_stream_without_changing_result() {
        let gateway = Arc::new(MockGateway::new(&["Label: ", "beta"]));
        let observer = RecordingObserver::default();
        let result = use_case(gateway)
            .execute_with_observer("meh", &observer)
            .await
            .unwrap();

        assert_eq!(result.reply, "Label: beta");
        assert_eq!(
            *observer.events.lock().unwrap(),
            vec!["start:llama2", "Label: ", "beta", "end"]
        );
    }

    #[tokio::test]
    async fn gateway_failure_propagates() {
        let use_case =
            ClassifyReviewUseCase::new(Arc::new(FailingGateway), ClassifierConfig::default());
        let err = use_case.execute("anything").await.unwrap_err();
        assert!(matches!(
            err,
            ClassifyReviewError::GatewayError(GatewayError::ConnectionError(_))
        ));
    }

    #[tokio::test]
    async fn configured_model_is_used() {
        let gateway = Arc::new(MockGateway::new(&["alpha"]));
        let use_case = ClassifyReviewUseCase::new(
            gateway,
            ClassifierConfig::default().with_model(Model::Mistral),
        );
        let result = use_case.execute("good").await.unwrap();
        assert_eq!(result.model, Model::Mistral);
    }
}
