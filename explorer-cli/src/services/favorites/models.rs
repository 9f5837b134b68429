/// Change broadcast after every successful favorites mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesEvent {
    Added(String),
    Removed(String),
}

impl FavoritesEvent {
    /// Code that triggered the change
    pub fn code(&self) -> &str {
        match self {
            FavoritesEvent::Added(code) | FavoritesEvent::Removed(code) => code,
        }
    }

    pub fn is_added(&self) -> bool {
        matches!(self, FavoritesEvent::Added(_))
    }
}

impl std::fmt::Display for FavoritesEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FavoritesEvent::Added(code) => write!(f, "favorites changed: added {}", code),
            FavoritesEvent::Removed(code) => write!(f, "favorites changed: removed {}", code),
        }
    }
}
