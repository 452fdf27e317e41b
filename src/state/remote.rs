//! Remote Data State
//!
//! Tri-state tracking for an in-flight query. The three variants are
//! mutually exclusive: a request is either still out, failed with a message,
//! or resolved with a value.

/// Lifecycle of a one-shot remote fetch
#[derive(Clone, Debug, PartialEq)]
pub enum RemoteData<T> {
    /// Request in flight, nothing to show yet
    Loading,
    /// Request finished with an error message
    Failed(String),
    /// Response received
    Loaded(T),
}

impl<T> RemoteData<T> {
    /// Fold a finished fetch into the matching variant
    pub fn from_result(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => RemoteData::Loaded(value),
            Err(message) => RemoteData::Failed(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result_ok() {
        let state = RemoteData::from_result(Ok(vec![1, 2]));
        assert_eq!(state, RemoteData::Loaded(vec![1, 2]));
    }

    #[test]
    fn test_from_result_err() {
        let state: RemoteData<Vec<i32>> = RemoteData::from_result(Err("Network error".to_string()));
        assert_eq!(state, RemoteData::Failed("Network error".to_string()));
    }
}
