//! Error types for a single poll cycle
//!
//! Every stage of a cycle (fetch, validate, format) reports failures through
//! [`CycleError`]. The poller treats all variants alike: the description is
//! sent to the operator and the cycle is abandoned.

use thiserror::Error;

/// Result type alias for cycle stages
pub type CycleResult<T> = std::result::Result<T, CycleError>;

/// Failures that can abort a poll cycle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CycleError {
    /// The request to the review API could not complete
    #[error("сбой при запросе к эндпоинту: {0}")]
    Transport(String),

    /// The review API answered with a non-success status code
    #[error("недоступность эндпоинта {endpoint} (код ответа {status})")]
    UnavailableEndpoint {
        /// Requested endpoint
        endpoint: String,
        /// HTTP status code
        status: u16,
    },

    /// The response body is not valid JSON
    #[error("ошибка, тело не в json формате: {0}")]
    MalformedPayload(String),

    /// The payload has no entries at all
    #[error("ответ пришел пустой")]
    EmptyResponse,

    /// `homeworks` is missing or is not a list
    #[error("homeworks отсутствует или не является списком")]
    BadShape,

    /// `homeworks` is an empty list
    #[error("список с домашкой пуст")]
    EmptyHomeworkList,

    /// A homework entry lacks a required field
    #[error("пустое значение {0}")]
    MissingField(&'static str),

    /// A homework entry carries a status outside the catalog
    #[error("недокументированный статус домашней работы, обнаруженный в ответе API: {0}")]
    UnknownStatus(String),
}

impl CycleError {
    /// Returns true for failures raised while talking to the review API
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::UnavailableEndpoint { .. } | Self::MalformedPayload(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_names_the_field() {
        let err = CycleError::MissingField("homework_name");
        assert!(err.to_string().contains("homework_name"));
    }

    #[test]
    fn test_fetch_error_classification() {
        assert!(CycleError::Transport("dns".into()).is_fetch_error());
        assert!(
            CycleError::UnavailableEndpoint {
                endpoint: "http://localhost".into(),
                status: 503,
            }
            .is_fetch_error()
        );
        assert!(!CycleError::EmptyHomeworkList.is_fetch_error());
        assert!(!CycleError::UnknownStatus("graded".into()).is_fetch_error());
    }
}
