//! Channel-based template resolver
//!
//! A future/promise-style request/response exchange between the expansion
//! engine and the template store: each lookup travels over an mpsc channel
//! and carries its own oneshot reply sender as the correlation key. The
//! engine never blocks while a lookup is outstanding, and a stopped
//! service simply resolves as unavailable, which the engine reads as
//! "not found".

use async_trait::async_trait;
use snipflow_application::ports::{ResolveError, TemplateRepository, TemplateResolver};
use snipflow_domain::Template;
use tokio::sync::{mpsc, oneshot};

/// One in-flight lookup.
struct LookupRequest {
    shortcut: String,
    reply: oneshot::Sender<Option<Template>>,
}

/// Serves shortcut lookups from a template repository.
///
/// Run it on its own task; it stops when every resolver handle is dropped.
pub struct ResolverService<R> {
    repository: R,
    requests: mpsc::Receiver<LookupRequest>,
}

impl<R: TemplateRepository> ResolverService<R> {
    /// Creates a service and a resolver handle connected to it.
    #[must_use]
    pub fn new(repository: R, capacity: usize) -> (Self, ChannelTemplateResolver) {
        let (tx, rx) = mpsc::channel(capacity);
        (
            Self {
                repository,
                requests: rx,
            },
            ChannelTemplateResolver { requests: tx },
        )
    }

    /// Answers lookups until all resolver handles are dropped.
    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            let found = match self.repository.find_by_shortcut(&request.shortcut).await {
                Ok(template) => template,
                Err(error) => {
                    tracing::warn!(shortcut = %request.shortcut, %error, "template lookup failed");
                    None
                }
            };

            tracing::debug!(
                shortcut = %request.shortcut,
                found = found.is_some(),
                "resolved shortcut"
            );

            // The requester may have been dropped while we looked up; a
            // never-delivered reply is an abandoned cycle, not an error.
            let _ = request.reply.send(found);
        }
    }
}

/// Resolver handle that forwards lookups to a [`ResolverService`].
#[derive(Debug, Clone)]
pub struct ChannelTemplateResolver {
    requests: mpsc::Sender<LookupRequest>,
}

#[async_trait]
impl TemplateResolver for ChannelTemplateResolver {
    async fn resolve(&self, shortcut: &str) -> Result<Option<Template>, ResolveError> {
        let (reply, response) = oneshot::channel();

        self.requests
            .send(LookupRequest {
                shortcut: shortcut.to_string(),
                reply,
            })
            .await
            .map_err(|_| ResolveError::Unavailable)?;

        response.await.map_err(|_| ResolveError::Unavailable)
    }
}
