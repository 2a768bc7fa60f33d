use derive_more::Display;

/// Everything that can go wrong between the endpoint and the widgets.
///
/// None of these are fatal: a failed fetch keeps the last good payload around,
/// and the worst visible outcome is an error banner.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DashboardError {
    #[display(fmt = "HTTP error: {}", status)]
    Http { status: u16, status_text: String },
    #[display(fmt = "Network error: {}", _0)]
    Network(String),
    #[display(fmt = "Failed to parse payload: {}", _0)]
    Decode(String),
    #[display(fmt = "Invalid configuration: {}", _0)]
    Config(String),
}

impl DashboardError {
    pub fn http(status: u16, status_text: impl Into<String>) -> Self {
        Self::Http { status, status_text: status_text.into() }
    }

    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl std::error::Error for DashboardError {}

pub type DashboardResult<T> = Result<T, DashboardError>;
