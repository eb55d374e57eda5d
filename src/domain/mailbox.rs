use validator::ValidateEmail;

/// An address plus optional display name, used for recipients, the sender
/// and reply-to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mailbox {
    pub email: String,
    pub name: Option<String>,
}

impl Mailbox {
    /// Wraps a caller-supplied address as is. Presence is checked by the
    /// entry points, the format is not.
    pub fn new(email: impl Into<String>, name: Option<String>) -> Self {
        Self {
            email: email.into(),
            name,
        }
    }

    /// Parses an address coming from configuration, which has to be a valid
    /// email.
    pub fn parse(email: String, name: Option<String>) -> Result<Self, String> {
        if !email.validate_email() {
            return Err(format!("{} is not a valid email address.", email));
        }
        Ok(Self::new(email, name.filter(|n| !n.trim().is_empty())))
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }

    /// Fills in the display name with the address when none was given.
    pub fn with_default_name(self) -> Self {
        let name = self.name.unwrap_or_else(|| self.email.clone());
        Self {
            email: self.email,
            name: Some(name),
        }
    }
}

impl AsRef<str> for Mailbox {
    fn as_ref(&self) -> &str {
        &self.email
    }
}
