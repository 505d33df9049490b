use std::fmt::Display;

/// Progress of a remote fetch as seen by a view.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => LoadState::Loaded(data),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> LoadState<U> {
        match self {
            LoadState::Loading => LoadState::Loading,
            LoadState::Loaded(data) => LoadState::Loaded(f(data)),
            LoadState::Failed(message) => LoadState::Failed(message),
        }
    }
}

impl<T> LoadState<Vec<T>> {
    /// Loaded with nothing in it.
    pub fn is_empty(&self) -> bool {
        matches!(self, LoadState::Loaded(items) if items.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_result_keeps_error_text() {
        let failed: LoadState<u8> = LoadState::from_result(Err::<u8, _>("boom"));
        assert_eq!(failed.error(), Some("boom"));
        assert_eq!(failed.data(), None);
    }

    #[test]
    fn empty_list_is_distinct_from_loading() {
        let empty: LoadState<Vec<u8>> = LoadState::Loaded(vec![]);
        assert!(empty.is_empty());
        assert!(!LoadState::<Vec<u8>>::Loading.is_empty());
        assert_eq!(LoadState::Loaded(vec![1, 2]).map(|v| v.len()), LoadState::Loaded(2));
    }
}
