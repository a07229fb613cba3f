//! Pieces every fetching view shares: the tagged view state, the
//! cancellation guard, and the rendered output.

mod guard;
mod rendered;
mod state;

pub use guard::{BoxedRequest, Completion, FetchGuard, FetchTicket, Fetched, PendingRequest};
pub use rendered::RenderedView;
pub use state::ViewState;
