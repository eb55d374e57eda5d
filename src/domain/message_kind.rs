/// Every kind of transactional email the relay knows how to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    ContactConfirmation,
    WorkshopBookingConfirmation,
    BrochureSent,
    DiscoveryCallConfirmation,
    /// Built per call from the caller's subject and message instead of a
    /// stored template.
    AdminNotification,
}

impl MessageKind {
    pub const ALL: [MessageKind; 5] = [
        MessageKind::ContactConfirmation,
        MessageKind::WorkshopBookingConfirmation,
        MessageKind::BrochureSent,
        MessageKind::DiscoveryCallConfirmation,
        MessageKind::AdminNotification,
    ];

    /// Name of the operation on the callable surface.
    pub fn callable_name(&self) -> &'static str {
        match self {
            MessageKind::ContactConfirmation => "sendContactConfirmation",
            MessageKind::WorkshopBookingConfirmation => "sendWorkshopBookingConfirmation",
            MessageKind::BrochureSent => "sendBrochureConfirmation",
            MessageKind::DiscoveryCallConfirmation => "sendDiscoveryCallConfirmation",
            MessageKind::AdminNotification => "sendAdminNotification",
        }
    }

    pub fn from_callable_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.callable_name() == name)
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.callable_name())
    }
}
