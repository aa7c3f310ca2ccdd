use thiserror::Error;

#[derive(Debug, Error)]
pub enum FacetsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("facet `{0}` is defined more than once")]
    DuplicateFacet(String),
    #[error("options reference unknown facet `{0}`")]
    UnknownFacet(String),
}

pub type Result<T> = std::result::Result<T, FacetsError>;
