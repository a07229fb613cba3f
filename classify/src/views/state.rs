/// Every view is in exactly one of these states. A view that is loading
/// cannot also hold an old record or an old error.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let idle: ViewState<u8> = ViewState::default();
        assert_eq!(ViewState::Idle, idle);
        assert!(!idle.is_loading());

        assert!(ViewState::<u8>::Loading.is_loading());
        assert_eq!(Some(&3), ViewState::Loaded(3).loaded());
        assert_eq!(None, ViewState::Loaded(3).error());
        assert_eq!(Some("boom"), ViewState::<u8>::Failed("boom".to_string()).error());
        assert_eq!(None, ViewState::<u8>::Failed("boom".to_string()).loaded());
    }
}
