pub mod controller;
mod error;
pub mod log;
pub mod structs;

pub use controller::SubscriptionFormController;
pub use error::{ClientError, Error, FormResult};

// Stable identifiers of the page regions the controller drives.
pub const FORM_ID: &str = "subscribe-form";
pub const EMAIL_INPUT_ID: &str = "subscribe-email";
pub const SUBMIT_BUTTON_ID: &str = "subscribe-submit-button";
pub const LOADING_INDICATOR_ID: &str = "subscribe-loading-indicator";
pub const SUCCESS_MESSAGE_ID: &str = "subscribe-success-message";
pub const FAILURE_MESSAGE_ID: &str = "subscribe-failure-message";
pub const FIELD_GROUP_ID: &str = "subscribe-field-group";
