use tracing::info;

use crate::{
    config::AppConfig,
    form::{structs::SubscribeForm, SubscriptionFormController},
    Result, SubscribeClient,
};

/// The hosting application: one page, one form, one controller.
pub struct App {
    pub controller: SubscriptionFormController,
}

impl App {
    pub fn new(controller: SubscriptionFormController) -> Self {
        App { controller }
    }

    /// Process-wide one-shot wiring, the "document ready" moment: validate
    /// the declared action target, build the HTTP client, bind the form and
    /// hand it to the controller.
    pub fn build_from_config(config: &AppConfig) -> Result<App> {
        let action = config.form_config.action_target()?;

        let client = SubscribeClient::new()?;
        let form = SubscribeForm::bind(action);
        info!("{:<20} - {}", "Form submits to:", form.action());

        let controller = SubscriptionFormController::initialize(form, client);

        Ok(App::new(controller))
    }
}
