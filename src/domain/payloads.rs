//! Caller payloads for the five send operations and their validated forms.
//!
//! Payload fields are all optional on the wire so that a missing field is
//! reported as a validation failure naming the field, rather than as a
//! deserialization error. A field counts as missing when it is absent,
//! `null`, or an empty string.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::Mailbox;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Missing required fields: {}", .0.join(", "))]
pub struct MissingFields(pub Vec<&'static str>);

#[derive(Default)]
struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    fn text(&mut self, field: &'static str, value: Option<String>) -> String {
        match value.filter(|v| !v.is_empty()) {
            Some(v) => v,
            None => {
                self.missing.push(field);
                String::new()
            }
        }
    }

    fn object(&mut self, field: &'static str, value: Option<Map<String, Value>>) -> Map<String, Value> {
        value.unwrap_or_else(|| {
            self.missing.push(field);
            Map::new()
        })
    }

    fn finish(self) -> Result<(), MissingFields> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(MissingFields(self.missing))
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactConfirmationRequest {
    pub recipient_email: Option<String>,
    pub recipient_name: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopBookingRequest {
    pub recipient_email: Option<String>,
    pub recipient_name: Option<String>,
    /// `workshopType`, `preferredDate`, `preferredTime`,
    /// `numberOfParticipants`, `locationPreference`; extra fields are merged
    /// too.
    pub booking_data: Option<Map<String, Value>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrochureRequest {
    pub recipient_email: Option<String>,
    pub recipient_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryCallRequest {
    pub recipient_email: Option<String>,
    pub recipient_name: Option<String>,
    /// `preferredDate`, `preferredTime`, `callDuration`, `callType`.
    pub call_data: Option<Map<String, Value>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminNotificationRequest {
    pub subject: Option<String>,
    pub message: Option<String>,
    pub form_data: Option<Map<String, Value>>,
}

#[derive(Debug, Clone)]
pub struct ContactConfirmation {
    pub recipient: Mailbox,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct WorkshopBookingConfirmation {
    pub recipient: Mailbox,
    pub booking_data: Map<String, Value>,
}

#[derive(Debug, Clone)]
pub struct BrochureConfirmation {
    pub recipient: Mailbox,
}

#[derive(Debug, Clone)]
pub struct DiscoveryCallConfirmation {
    pub recipient: Mailbox,
    pub call_data: Map<String, Value>,
}

#[derive(Debug, Clone)]
pub struct AdminNotification {
    pub subject: String,
    pub message: String,
    pub form_data: Option<Map<String, Value>>,
}

impl AdminNotification {
    /// The submitter named in the form, if the form carried an address.
    pub fn submitter(&self) -> Option<Mailbox> {
        let form = self.form_data.as_ref()?;
        let email = form
            .get("email")
            .and_then(Value::as_str)
            .filter(|e| !e.is_empty())?;
        let name = form
            .get("name")
            .and_then(Value::as_str)
            .filter(|n| !n.is_empty())
            .map(str::to_owned);
        Some(Mailbox::new(email, name))
    }
}

impl TryFrom<ContactConfirmationRequest> for ContactConfirmation {
    type Error = MissingFields;

    fn try_from(value: ContactConfirmationRequest) -> Result<Self, Self::Error> {
        let mut required = RequiredFields::default();
        let email = required.text("recipientEmail", value.recipient_email);
        let name = required.text("recipientName", value.recipient_name);
        let message = required.text("message", value.message);
        required.finish()?;

        Ok(Self {
            recipient: Mailbox::new(email, Some(name)),
            message,
        })
    }
}

impl TryFrom<WorkshopBookingRequest> for WorkshopBookingConfirmation {
    type Error = MissingFields;

    fn try_from(value: WorkshopBookingRequest) -> Result<Self, Self::Error> {
        let mut required = RequiredFields::default();
        let email = required.text("recipientEmail", value.recipient_email);
        let name = required.text("recipientName", value.recipient_name);
        let booking_data = required.object("bookingData", value.booking_data);
        required.finish()?;

        Ok(Self {
            recipient: Mailbox::new(email, Some(name)),
            booking_data,
        })
    }
}

impl TryFrom<BrochureRequest> for BrochureConfirmation {
    type Error = MissingFields;

    fn try_from(value: BrochureRequest) -> Result<Self, Self::Error> {
        let mut required = RequiredFields::default();
        let email = required.text("recipientEmail", value.recipient_email);
        let name = required.text("recipientName", value.recipient_name);
        required.finish()?;

        Ok(Self {
            recipient: Mailbox::new(email, Some(name)),
        })
    }
}

impl TryFrom<DiscoveryCallRequest> for DiscoveryCallConfirmation {
    type Error = MissingFields;

    fn try_from(value: DiscoveryCallRequest) -> Result<Self, Self::Error> {
        let mut required = RequiredFields::default();
        let email = required.text("recipientEmail", value.recipient_email);
        let name = required.text("recipientName", value.recipient_name);
        let call_data = required.object("callData", value.call_data);
        required.finish()?;

        Ok(Self {
            recipient: Mailbox::new(email, Some(name)),
            call_data,
        })
    }
}

impl TryFrom<AdminNotificationRequest> for AdminNotification {
    type Error = MissingFields;

    fn try_from(value: AdminNotificationRequest) -> Result<Self, Self::Error> {
        let mut required = RequiredFields::default();
        let subject = required.text("subject", value.subject);
        let message = required.text("message", value.message);
        required.finish()?;

        Ok(Self {
            subject,
            message,
            form_data: value.form_data,
        })
    }
}
