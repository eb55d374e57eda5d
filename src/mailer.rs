//! Validation, template selection and delivery for the five send operations.
//!
//! Both transport shells are thin adapters over [`Mailer`]; any difference in
//! observable behavior between them belongs in the shells' error mapping,
//! never in here.

use anyhow::Context;
use serde::de::DeserializeOwned;

use crate::{
    delivery::DeliveryClient,
    dispatch,
    domain::{
        AdminNotification, AdminNotificationRequest, BrochureConfirmation, BrochureRequest,
        ContactConfirmation, ContactConfirmationRequest, DiscoveryCallConfirmation,
        DiscoveryCallRequest, Mailbox, MergeVariables, MessageKind, MissingFields, SendResult,
        WorkshopBookingConfirmation, WorkshopBookingRequest,
    },
    routes::error_chain_fmt,
    templates::{self, Template},
};

#[derive(thiserror::Error)]
pub enum MailerError {
    #[error(transparent)]
    MissingFields(#[from] MissingFields),
    #[error("Invalid payload: {0}")]
    InvalidPayload(#[source] serde_json::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl MailerError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            MailerError::MissingFields(_) | MailerError::InvalidPayload(_)
        )
    }
}

impl std::fmt::Debug for MailerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(Clone)]
pub struct Mailer {
    delivery: DeliveryClient,
    sender: Mailbox,
    admin: Mailbox,
}

impl Mailer {
    pub fn new(delivery: DeliveryClient, sender: Mailbox, admin: Mailbox) -> Self {
        Self {
            delivery,
            sender,
            admin,
        }
    }

    /// Runs the operation `kind` with an untyped payload, as received by the
    /// callable shell.
    pub async fn dispatch(
        &self,
        kind: MessageKind,
        payload: serde_json::Value,
    ) -> Result<SendResult, MailerError> {
        match kind {
            MessageKind::ContactConfirmation => {
                self.send_contact_confirmation(parse_payload(payload)?).await
            }
            MessageKind::WorkshopBookingConfirmation => {
                self.send_workshop_booking_confirmation(parse_payload(payload)?)
                    .await
            }
            MessageKind::BrochureSent => {
                self.send_brochure_confirmation(parse_payload(payload)?)
                    .await
            }
            MessageKind::DiscoveryCallConfirmation => {
                self.send_discovery_call_confirmation(parse_payload(payload)?)
                    .await
            }
            MessageKind::AdminNotification => {
                self.send_admin_notification(parse_payload(payload)?).await
            }
        }
    }

    #[tracing::instrument(name = "Sending a contact confirmation", skip_all)]
    pub async fn send_contact_confirmation(
        &self,
        request: ContactConfirmationRequest,
    ) -> Result<SendResult, MailerError> {
        let contact: ContactConfirmation = request.try_into()?;

        let mut vars = recipient_variables(&contact.recipient);
        vars.insert("message", contact.message);

        self.send_stored(MessageKind::ContactConfirmation, &vars, contact.recipient)
            .await
    }

    #[tracing::instrument(name = "Sending a workshop booking confirmation", skip_all)]
    pub async fn send_workshop_booking_confirmation(
        &self,
        request: WorkshopBookingRequest,
    ) -> Result<SendResult, MailerError> {
        let booking: WorkshopBookingConfirmation = request.try_into()?;

        let mut vars = recipient_variables(&booking.recipient);
        vars.extend_from_object(&booking.booking_data);

        self.send_stored(
            MessageKind::WorkshopBookingConfirmation,
            &vars,
            booking.recipient,
        )
        .await
    }

    #[tracing::instrument(name = "Sending a brochure confirmation", skip_all)]
    pub async fn send_brochure_confirmation(
        &self,
        request: BrochureRequest,
    ) -> Result<SendResult, MailerError> {
        let brochure: BrochureConfirmation = request.try_into()?;

        let vars = recipient_variables(&brochure.recipient);

        self.send_stored(MessageKind::BrochureSent, &vars, brochure.recipient)
            .await
    }

    #[tracing::instrument(name = "Sending a discovery call confirmation", skip_all)]
    pub async fn send_discovery_call_confirmation(
        &self,
        request: DiscoveryCallRequest,
    ) -> Result<SendResult, MailerError> {
        let call: DiscoveryCallConfirmation = request.try_into()?;

        let mut vars = recipient_variables(&call.recipient);
        vars.extend_from_object(&call.call_data);

        self.send_stored(MessageKind::DiscoveryCallConfirmation, &vars, call.recipient)
            .await
    }

    #[tracing::instrument(name = "Sending an admin notification", skip_all)]
    pub async fn send_admin_notification(
        &self,
        request: AdminNotificationRequest,
    ) -> Result<SendResult, MailerError> {
        let notification: AdminNotification = request.try_into()?;

        let template = Template::admin_notification(&notification)
            .context("Failed to build the admin notification.")?;
        let send_request = dispatch::build(
            &template,
            &MergeVariables::new(),
            vec![self.admin.clone()],
            self.sender.clone(),
            notification.submitter(),
        );

        Ok(self.delivery.send(&send_request).await)
    }

    async fn send_stored(
        &self,
        kind: MessageKind,
        vars: &MergeVariables,
        recipient: Mailbox,
    ) -> Result<SendResult, MailerError> {
        let template = templates::lookup(kind)
            .with_context(|| format!("Failed to load the template for {kind}."))?;
        let send_request = dispatch::build(
            &template,
            vars,
            vec![recipient],
            self.sender.clone(),
            None,
        );

        Ok(self.delivery.send(&send_request).await)
    }
}

fn recipient_variables(recipient: &Mailbox) -> MergeVariables {
    let name = recipient.display_name();
    [("firstName", name), ("name", name)].into_iter().collect()
}

fn parse_payload<T: DeserializeOwned>(payload: serde_json::Value) -> Result<T, MailerError> {
    serde_json::from_value(payload).map_err(MailerError::InvalidPayload)
}
