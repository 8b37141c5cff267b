use reqwest::Client;
use serde::Serialize;
use strum_macros::AsRefStr;

#[derive(Debug)]
pub struct SubscribeClient {
    pub http_client: Client,
}

impl SubscribeClient {
    /// No request timeout on purpose: an unresolved submission keeps the form
    /// in its loading state until the page goes away.
    pub fn new() -> Result<Self> {
        let http_client = Client::builder().build()?;

        Ok(SubscribeClient { http_client })
    }

    /// Issues the one POST of a submission attempt to the form's declared
    /// action target. The endpoint is expected to answer 2xx with a JSON
    /// document; anything else counts as a failed submission.
    pub async fn submit_subscription(&self, action: &reqwest::Url, email: &str) -> Result<()> {
        let request = SubscriptionRequest { email };

        let resp = self
            .http_client
            .post(action.clone())
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        resp.json::<serde_json::Value>()
            .await
            .map_err(|er| Error::ResponseNotJson(er.to_string()))?;

        Ok(())
    }
}

/// The payload POSTed to the submission endpoint.
/// Built fresh from the email input's current value on every attempt.
#[derive(Serialize)]
pub struct SubscriptionRequest<'a> {
    pub email: &'a str,
}

// ###################################
// ->   ERROR & RESULT
// ###################################
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, derive_more::From)]
pub enum Error {
    ResponseNotJson(String),
    #[from]
    Reqwest(reqwest::Error),
}
// Error Boilerplate
impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
