use std::borrow::Cow;

use crate::domain::{AdminNotification, MessageKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub subject: Cow<'static, str>,
    pub html_body: Cow<'static, str>,
    pub text_body: Cow<'static, str>,
}

#[derive(thiserror::Error, Debug)]
pub enum TemplateError {
    #[error("There is no stored template for {0}.")]
    NotFound(MessageKind),
    #[error("Failed to serialize the admin form data.")]
    FormData(#[from] serde_json::Error),
    #[error("Failed to render the admin notification.")]
    Render(#[from] tera::Error),
}

const CONTACT_CONFIRMATION: Template = Template {
    subject: Cow::Borrowed("Thank you for contacting AI Workshop Switzerland"),
    html_body: Cow::Borrowed(include_str!("../templates/contact_confirmation.html")),
    text_body: Cow::Borrowed(include_str!("../templates/contact_confirmation.txt")),
};

const WORKSHOP_BOOKING_CONFIRMATION: Template = Template {
    subject: Cow::Borrowed("Your AI workshop booking request"),
    html_body: Cow::Borrowed(include_str!(
        "../templates/workshop_booking_confirmation.html"
    )),
    text_body: Cow::Borrowed(include_str!(
        "../templates/workshop_booking_confirmation.txt"
    )),
};

const BROCHURE_SENT: Template = Template {
    subject: Cow::Borrowed("Your AI Workshop Switzerland brochure"),
    html_body: Cow::Borrowed(include_str!("../templates/brochure_sent.html")),
    text_body: Cow::Borrowed(include_str!("../templates/brochure_sent.txt")),
};

const DISCOVERY_CALL_CONFIRMATION: Template = Template {
    subject: Cow::Borrowed("Your discovery call request"),
    html_body: Cow::Borrowed(include_str!(
        "../templates/discovery_call_confirmation.html"
    )),
    text_body: Cow::Borrowed(include_str!(
        "../templates/discovery_call_confirmation.txt"
    )),
};

const ADMIN_NOTIFICATION_HTML: &str = include_str!("../templates/admin_notification.html.tera");
const ADMIN_NOTIFICATION_TEXT: &str = include_str!("../templates/admin_notification.txt.tera");

/// Returns the stored template for `kind`. Admin notifications have none,
/// see [`Template::admin_notification`].
pub fn lookup(kind: MessageKind) -> Result<Template, TemplateError> {
    match kind {
        MessageKind::ContactConfirmation => Ok(CONTACT_CONFIRMATION),
        MessageKind::WorkshopBookingConfirmation => Ok(WORKSHOP_BOOKING_CONFIRMATION),
        MessageKind::BrochureSent => Ok(BROCHURE_SENT),
        MessageKind::DiscoveryCallConfirmation => Ok(DISCOVERY_CALL_CONFIRMATION),
        MessageKind::AdminNotification => Err(TemplateError::NotFound(kind)),
    }
}

impl Template {
    /// Builds the admin notification from the caller's subject and message.
    /// Form data, when given, is appended as pretty-printed JSON under a
    /// "Form Data" heading in both bodies.
    pub fn admin_notification(notification: &AdminNotification) -> Result<Self, TemplateError> {
        let form_data = notification
            .form_data
            .as_ref()
            .map(serde_json::to_string_pretty)
            .transpose()?;

        let mut ctx = tera::Context::new();
        ctx.insert("subject", &notification.subject);
        ctx.insert("message", &notification.message);
        ctx.insert("form_data", &form_data);

        Ok(Self {
            subject: Cow::Owned(notification.subject.clone()),
            html_body: Cow::Owned(tera::Tera::one_off(ADMIN_NOTIFICATION_HTML, &ctx, false)?),
            text_body: Cow::Owned(tera::Tera::one_off(ADMIN_NOTIFICATION_TEXT, &ctx, false)?),
        })
    }
}
