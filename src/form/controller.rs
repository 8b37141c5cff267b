use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    form::{
        log,
        structs::{SubscribeForm, UiState},
        Error, FORM_ID,
    },
    SubscribeClient,
};

/// Mediates one form's lifecycle from user intent to network outcome.
pub struct SubscriptionFormController {
    client: SubscribeClient,
    form: SubscribeForm,
}

impl SubscriptionFormController {
    /// Takes over submission handling for `form`. The hosting application
    /// calls this exactly once, when the page becomes interactive; from then
    /// on every submit event is routed through [`Self::submit`] instead of
    /// native form submission.
    pub fn initialize(form: SubscribeForm, client: SubscribeClient) -> Self {
        debug!(
            "{:<12} - Intercepting submissions for '#{}' -> {}",
            "initialize",
            FORM_ID,
            form.action()
        );

        SubscriptionFormController { client, form }
    }

    pub fn form(&self) -> &SubscribeForm {
        &self.form
    }

    /// Forwards the visitor's typing into the email input.
    pub fn set_email_input<S: Into<String>>(&mut self, value: S) {
        self.form.set_email_value(value);
    }

    /// One user-initiated submit event. Issues at most one POST; every
    /// failure is absorbed into the `Failed` state rather than propagated.
    /// Returns the state the form ends up in.
    #[tracing::instrument(
        name = "Submitting the subscription form",
        skip(self),
        fields(subscriber_email = %self.form.email_value())
    )]
    pub async fn submit(&mut self) -> UiState {
        // A disabled or hidden control fires no events: the form is either
        // mid-flight or already consumed.
        if !self.form.accepts_submission() {
            debug!("{:<12} - Submit event ignored, control inactive", "submit");
            return self.form.ui_state();
        }

        let attempt_id = Uuid::new_v4();
        self.form.begin_submitting();

        let email = self.form.email_value().to_owned();
        let outcome = self
            .client
            .submit_subscription(self.form.action(), &email)
            .await;

        let form_error = match outcome {
            Ok(()) => {
                self.form.complete_succeeded();
                None
            }
            Err(er) => {
                let er = Error::from(er);
                warn!("{:<12} - Submission failed: {er}", "submit");
                self.form.complete_failed();
                Some(er)
            }
        };

        let state = self.form.ui_state();
        let client_error = form_error.as_ref().map(Error::client_error);

        #[allow(clippy::redundant_pattern_matching)]
        if let Ok(_) = log::log_submission(
            attempt_id,
            self.form.action(),
            state,
            form_error.as_ref(),
            client_error,
        )
        .await
        {}

        state
    }
}
