use promptdeck_common::{HttpStatusCode, PromptdeckError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavError {
    #[error("Failed to render navigation: {0}")]
    RenderError(#[from] askama::Error),
}

impl HttpStatusCode for NavError {
    fn status_code(&self) -> u16 {
        500
    }
}

impl From<NavError> for PromptdeckError {
    fn from(err: NavError) -> Self {
        PromptdeckError::InternalError(err.to_string())
    }
}
