use crate::{config, form, subscribe_client};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("form error: {0}")]
    Form(#[from] form::Error),
    #[error("subscribe client error: {0}")]
    SubscribeClient(#[from] subscribe_client::Error),

    #[error("tokio joining error: {0}")]
    TokioJoin(#[from] tokio::task::JoinError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
