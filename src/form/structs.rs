//! The bound form surface and its visibility-flag state machine.
//! The controller only ever touches the surface through the transition
//! methods below, which keeps the four states mutually exclusive.

use reqwest::Url;
use strum_macros::AsRefStr;

use super::{
    EMAIL_INPUT_ID, FAILURE_MESSAGE_ID, FIELD_GROUP_ID, LOADING_INDICATOR_ID, SUBMIT_BUTTON_ID,
    SUCCESS_MESSAGE_ID,
};

// ###################################
// ->   STRUCTS
// ###################################

/// The four states a form instance can be in. Exactly one of them describes
/// the visible UI at any instant; see [`SubscribeForm::ui_state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum UiState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// One page region toggled through its visibility flag.
#[derive(Debug, Clone)]
pub struct Region {
    id: &'static str,
    hidden: bool,
}

impl Region {
    fn new(id: &'static str, hidden: bool) -> Self {
        Region { id, hidden }
    }

    pub fn id(&self) -> &str {
        self.id
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn show(&mut self) {
        self.hidden = false;
    }

    fn hide(&mut self) {
        self.hidden = true;
    }
}

/// The submit control carries a disabled flag on top of its visibility.
/// A disabled or hidden control cannot produce submit events.
#[derive(Debug, Clone)]
pub struct SubmitControl {
    region: Region,
    disabled: bool,
}

impl SubmitControl {
    pub fn id(&self) -> &str {
        self.region.id()
    }

    pub fn is_hidden(&self) -> bool {
        self.region.is_hidden()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// The email input; its current textual value is read on each submission.
#[derive(Debug, Clone)]
pub struct EmailInput {
    id: &'static str,
    value: String,
}

impl EmailInput {
    pub fn id(&self) -> &str {
        self.id
    }
}

/// The form surface: the declared action target, the email input and the
/// regions the submission state machine toggles.
#[derive(Debug, Clone)]
pub struct SubscribeForm {
    action: Url,
    email_input: EmailInput,
    submit: SubmitControl,
    loading: Region,
    success: Region,
    failure: Region,
    field_group: Region,
}

// ###################################
// ->   IMPLs
// ###################################

impl SubscribeForm {
    /// Binds a fresh form surface to `action`. All five regions exist from
    /// this point on, with the idle visibility set: submit control and field
    /// group shown, everything else hidden.
    pub fn bind(action: Url) -> Self {
        SubscribeForm {
            action,
            email_input: EmailInput {
                id: EMAIL_INPUT_ID,
                value: String::new(),
            },
            submit: SubmitControl {
                region: Region::new(SUBMIT_BUTTON_ID, false),
                disabled: false,
            },
            loading: Region::new(LOADING_INDICATOR_ID, true),
            success: Region::new(SUCCESS_MESSAGE_ID, true),
            failure: Region::new(FAILURE_MESSAGE_ID, true),
            field_group: Region::new(FIELD_GROUP_ID, false),
        }
    }

    pub fn action(&self) -> &Url {
        &self.action
    }

    pub fn email_value(&self) -> &str {
        &self.email_input.value
    }

    pub fn set_email_value<S: Into<String>>(&mut self, value: S) {
        self.email_input.value = value.into();
    }

    pub fn email_input(&self) -> &EmailInput {
        &self.email_input
    }

    pub fn submit_control(&self) -> &SubmitControl {
        &self.submit
    }

    pub fn loading_indicator(&self) -> &Region {
        &self.loading
    }

    pub fn success_message(&self) -> &Region {
        &self.success
    }

    pub fn failure_message(&self) -> &Region {
        &self.failure
    }

    pub fn field_group(&self) -> &Region {
        &self.field_group
    }

    /// Whether a submit event would currently be accepted. Mirrors the
    /// browser rule that a disabled or hidden control cannot fire one; this
    /// is the sole guard keeping a second request off the wire.
    pub fn accepts_submission(&self) -> bool {
        !self.submit.disabled && !self.submit.region.is_hidden()
    }

    /// Derives the active state from the visibility flags alone.
    pub fn ui_state(&self) -> UiState {
        if !self.success.is_hidden() {
            UiState::Succeeded
        } else if !self.loading.is_hidden() {
            UiState::Submitting
        } else if !self.failure.is_hidden() {
            UiState::Failed
        } else {
            UiState::Idle
        }
    }

    /// `Idle | Failed -> Submitting`: lock and hide the submit control, clear
    /// any earlier failure message, reveal the loading indicator.
    pub(crate) fn begin_submitting(&mut self) {
        self.submit.disabled = true;
        self.failure.hide();
        self.submit.region.hide();
        self.loading.show();
    }

    /// `Submitting -> Succeeded`: the form is consumed, no re-submission
    /// path is offered.
    pub(crate) fn complete_succeeded(&mut self) {
        self.loading.hide();
        self.success.show();
        self.field_group.hide();
    }

    /// `Submitting -> Failed`: surface the failure message and hand the
    /// submit control back so the visitor can retry.
    pub(crate) fn complete_failed(&mut self) {
        self.loading.hide();
        self.failure.show();
        self.submit.disabled = false;
        self.submit.region.show();
    }
}

// ###################################
// ->   TESTS
// ###################################
