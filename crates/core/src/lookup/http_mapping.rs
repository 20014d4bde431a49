use crate::storage::repository_error_to_status_code;

use super::LookupError;

/// Maps a [`LookupError`] to an HTTP status code.
///
/// Store errors use the repository mapping. A missing execution context
/// means the store is unreachable, so it maps to 503.
pub fn lookup_error_to_status_code(error: &LookupError) -> u16 {
    match error {
        LookupError::Repository(repo_error) => repository_error_to_status_code(repo_error),
        LookupError::ContextUnavailable(_) => 503,
    }
}
