use crate::{
    domain::{Mailbox, MergeVariables},
    merge::merge,
    templates::Template,
};

/// Provider-agnostic description of one outgoing email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    pub to: Vec<Mailbox>,
    pub sender: Mailbox,
    pub reply_to: Option<Mailbox>,
    pub subject: String,
    pub html_content: String,
    pub text_content: String,
}

/// Merges both bodies of `template` with `vars` and addresses the result.
/// The subject is copied as is.
pub fn build(
    template: &Template,
    vars: &MergeVariables,
    to: Vec<Mailbox>,
    sender: Mailbox,
    reply_to: Option<Mailbox>,
) -> SendRequest {
    SendRequest {
        to: to.into_iter().map(Mailbox::with_default_name).collect(),
        sender: sender.with_default_name(),
        reply_to: reply_to.map(Mailbox::with_default_name),
        subject: template.subject.to_string(),
        html_content: merge(&template.html_body, vars),
        text_content: merge(&template.text_body, vars),
    }
}
