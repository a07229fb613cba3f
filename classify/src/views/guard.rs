use crate::client::ServiceError;
use std::future::Future;
use std::pin::Pin;
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub type BoxedRequest<T> = Pin<Box<dyn Future<Output = Result<T, ServiceError>> + Send>>;

/// Ties a view's requests to the view's lifetime.
///
/// Starting a request cancels the one before it. A completion is only
/// applied when it belongs to the most recent request, so a slow early
/// response can never overwrite a later one. Dropping the guard cancels
/// everything still in flight.
#[derive(Debug)]
pub struct FetchGuard {
    lifetime: CancellationToken,
    current: Option<CancellationToken>,
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: u64,
    token: CancellationToken,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Done(Result<T, ServiceError>),
    Cancelled,
}

/// The result of a [`PendingRequest`], to be handed back to the view that
/// started it.
#[derive(Debug)]
pub struct Completion<T> {
    pub ticket: FetchTicket,
    pub fetched: Fetched<T>,
}

/// A request that has been issued by a view but not yet awaited.
pub struct PendingRequest<T> {
    ticket: FetchTicket,
    request: BoxedRequest<T>,
}

impl<T> std::fmt::Debug for PendingRequest<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingRequest")
            .field("ticket", &self.ticket)
            .finish_non_exhaustive()
    }
}

impl<T> PendingRequest<T> {
    pub fn new(ticket: FetchTicket, request: BoxedRequest<T>) -> Self {
        Self { ticket, request }
    }

    pub fn ticket(&self) -> &FetchTicket {
        &self.ticket
    }

    /// Wait for the response, or stop early when the request is cancelled.
    pub async fn resolve(self) -> Completion<T> {
        let token = self.ticket.token.clone();
        let fetched = tokio::select! {
            biased;
            _ = token.cancelled() => Fetched::Cancelled,
            result = self.request => Fetched::Done(result),
        };

        Completion {
            ticket: self.ticket,
            fetched,
        }
    }
}

impl FetchGuard {
    pub fn new() -> Self {
        Self {
            lifetime: CancellationToken::new(),
            current: None,
            generation: 0,
        }
    }

    pub fn start(&mut self) -> FetchTicket {
        self.cancel_current();
        self.generation += 1;

        let token = self.lifetime.child_token();
        self.current = Some(token.clone());
        FetchTicket {
            generation: self.generation,
            token,
        }
    }

    /// Invalidate the in-flight request without starting another.
    pub fn cancel_current(&mut self) {
        if let Some(token) = self.current.take() {
            debug!(generation = self.generation, "Cancelling superseded request");
            token.cancel();
        }
    }

    /// Cancel everything, including requests started later.
    pub fn shutdown(&mut self) {
        self.current = None;
        self.lifetime.cancel();
    }

    pub fn accepts(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation
            && self.current.is_some()
            && !ticket.token.is_cancelled()
    }

    /// Accept a completion and close out its request. Returns `None` for a
    /// stale or cancelled completion.
    pub fn settle<T>(&mut self, completion: Completion<T>) -> Option<Result<T, ServiceError>> {
        if !self.accepts(&completion.ticket) {
            debug!(
                generation = completion.ticket.generation,
                current = self.generation,
                "Dropping stale response"
            );
            return None;
        }

        match completion.fetched {
            Fetched::Cancelled => None,
            Fetched::Done(result) => {
                self.current = None;
                Some(result)
            }
        }
    }
}

impl Default for FetchGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FetchGuard {
    fn drop(&mut self) {
        self.lifetime.cancel();
    }
}
