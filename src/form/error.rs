use strum_macros::AsRefStr;

pub type FormResult<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("subscribe client error: {0}")]
    SubscribeClient(#[from] crate::subscribe_client::Error),
}

impl Error {
    /// Collapses every failure cause into the one kind shown on the page.
    /// Network unreachable, server error and malformed response all look the
    /// same to the visitor.
    pub fn client_error(&self) -> ClientError {
        ClientError::SubmissionFailed
    }
}

#[derive(Debug, derive_more::Display)]
pub enum ClientError {
    #[display("Failed to submit the form. Please try again.")]
    SubmissionFailed,
}
