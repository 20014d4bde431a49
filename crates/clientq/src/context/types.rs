//! Pure types for request-scoped context.

use uuid::Uuid;

/// Identifier that ties together every log line of one request.
///
/// Callers may supply their own through the `X-Correlation-ID` header, in
/// any format; otherwise a UUID v4 is generated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorrelationId(String);

impl CorrelationId {
    /// Generates a fresh correlation id.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Accepts a caller-supplied id, rejecting blank values.
    pub fn from_header_value(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request-scoped context available to all handlers.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Correlation id for tracing and logging.
    pub correlation_id: CorrelationId,
}
