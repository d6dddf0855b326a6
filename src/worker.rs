// Background request dispatch
// Runs generation requests on a tokio runtime and hands results back to the UI thread

use content_generator::{ContentGenerator, GeneratedContent, GenerationError};
use std::sync::mpsc;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

/// Outcome of one generation request
pub type GenerationResult = Result<GeneratedContent, GenerationError>;

/// Runs content generation off the UI thread
/// The UI polls for finished results once per frame
pub struct GenerationWorker {
    /// Runtime the requests execute on
    runtime: tokio::runtime::Runtime,
    /// Adapter used for every request
    generator: Arc<dyn ContentGenerator>,
    result_sender: mpsc::Sender<GenerationResult>,
    result_receiver: mpsc::Receiver<GenerationResult>,
}

impl GenerationWorker {
    /// Create a worker with a single-threaded request runtime
    pub fn new(generator: Arc<dyn ContentGenerator>) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("content-generation")
            .enable_all()
            .build()?;
        let (result_sender, result_receiver) = mpsc::channel();

        Ok(Self {
            runtime,
            generator,
            result_sender,
            result_receiver,
        })
    }

    /// Start a request for `topic`
    /// `notify` runs once the result is ready to poll (typically a repaint request)
    pub fn dispatch<F>(&self, topic: String, notify: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let generator = Arc::clone(&self.generator);
        let sender = self.result_sender.clone();
        let span = tracing::info_span!("generation", request_id = %Uuid::new_v4());

        self.runtime.spawn(
            async move {
                tracing::info!(topic_len = topic.len(), "Generation request started");
                let result = generator.request_content(&topic).await;
                match &result {
                    Ok(content) => tracing::info!(
                        titles = content.titles.len(),
                        tags = content.tags.len(),
                        "Generation request succeeded"
                    ),
                    Err(e) => tracing::warn!(error = %e, "Generation request failed"),
                }

                // The receiver only goes away when the app is shutting down
                if sender.send(result).is_err() {
                    tracing::debug!("Result receiver dropped, discarding result");
                }
                notify();
            }
            .instrument(span),
        );
    }

    /// Take a finished result without blocking
    pub fn poll(&self) -> Option<GenerationResult> {
        self.result_receiver.try_recv().ok()
    }

    /// Block until a result arrives or the timeout passes
    #[cfg(test)]
    pub fn wait(&self, timeout: std::time::Duration) -> Option<GenerationResult> {
        self.result_receiver.recv_timeout(timeout).ok()
    }
}
