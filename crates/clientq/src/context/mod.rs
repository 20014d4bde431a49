//! Request-scoped context and execution-context affinity.
//!
//! - `RequestContext` bundles request-scoped data (the correlation id) to
//!   complement application-scoped `AppState`.
//! - `ContextHandle` pins session-bound work to a dedicated thread.

mod affinity;
mod correlation;
mod extractor;
mod types;

pub use affinity::{ContextError, ContextHandle, ContextId};
pub use correlation::{propagate_correlation_id, CORRELATION_ID_HEADER};
pub use types::{CorrelationId, RequestContext};
