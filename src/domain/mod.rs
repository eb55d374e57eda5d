mod mailbox;
mod merge_variables;
mod message_kind;
mod payloads;
mod send_result;

pub use mailbox::Mailbox;
pub use merge_variables::MergeVariables;
pub use message_kind::MessageKind;
pub use payloads::{
    AdminNotification, AdminNotificationRequest, BrochureConfirmation, BrochureRequest,
    ContactConfirmation, ContactConfirmationRequest, DiscoveryCallConfirmation,
    DiscoveryCallRequest, MissingFields, WorkshopBookingConfirmation, WorkshopBookingRequest,
};
pub use send_result::SendResult;
