//! Contact actions and the quick-contact panel.

use foundation::time::Time;
use runtime::feedback::{COPIED_FEEDBACK_S, FeedbackFlag, SUBMIT_DELAY_S};
use serde::Serialize;
use tracing::{debug, info};

use crate::content::ContactInfo;

pub const MAIL_SUBJECT: &str = "Contact from Portfolio";

/// A navigation the host performs on the user's behalf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContactAction {
    Dial { uri: String },
    Mail { uri: String },
    /// Opened in a new browsing context.
    External { url: String },
    Download { href: String, file_name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    EmptyField(&'static str),
    InvalidEmail(String),
    SubmitInProgress,
}

impl std::fmt::Display for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactError::EmptyField(field) => write!(f, "{field} must not be empty"),
            ContactError::InvalidEmail(email) => write!(f, "not an email address: {email}"),
            ContactError::SubmitInProgress => write!(f, "a message is already being sent"),
        }
    }
}

impl std::error::Error for ContactError {}

pub fn tel_uri(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{digits}")
}

pub fn mailto_uri(to: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{to}?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

impl ContactInfo {
    pub fn dial(&self) -> ContactAction {
        ContactAction::Dial {
            uri: tel_uri(&self.phone),
        }
    }

    pub fn mail(&self) -> ContactAction {
        ContactAction::Mail {
            uri: format!("mailto:{}", self.email),
        }
    }

    /// Opens the location in Google Maps.
    pub fn map(&self) -> ContactAction {
        ContactAction::External {
            url: format!(
                "https://maps.google.com/?q={}",
                urlencoding::encode(&self.location)
            ),
        }
    }

    pub fn profiles(&self) -> Vec<ContactAction> {
        std::iter::once(&self.github)
            .chain(self.linkedin.as_ref())
            .map(|url| ContactAction::External { url: url.clone() })
            .collect()
    }

    pub fn resume(&self) -> ContactAction {
        let file_name = self
            .resume_path
            .rsplit('/')
            .next()
            .unwrap_or("resume.pdf")
            .to_string();
        ContactAction::Download {
            href: self.resume_path.clone(),
            file_name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::EmptyField(field));
            }
        }
        let email = self.email.trim();
        let valid = email
            .split_once('@')
            .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'));
        if !valid {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    pub fn compose_mailto(&self, to: &str) -> Result<String, ContactError> {
        self.validate()?;
        Ok(mailto_uri(to, MAIL_SUBJECT, &self.body()))
    }
}

/// Which contact detail a copy button copies.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CopyField {
    Phone,
    Email,
    Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardError(pub String);

/// Host clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The contact section's transient state: copy confirmations and the
/// quick-contact form.
#[derive(Debug)]
pub struct ContactPanel {
    info: ContactInfo,
    pub form: ContactForm,
    copied: FeedbackFlag<CopyField>,
    submitting: FeedbackFlag<()>,
    pending_mail: Option<String>,
}

impl ContactPanel {
    pub fn new(info: ContactInfo) -> Self {
        Self {
            info,
            form: ContactForm::default(),
            copied: FeedbackFlag::new(),
            submitting: FeedbackFlag::new(),
            pending_mail: None,
        }
    }

    pub fn info(&self) -> &ContactInfo {
        &self.info
    }

    pub fn copied(&self) -> Option<CopyField> {
        self.copied.current().copied()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.current().is_some()
    }

    /// Copies `field` and shows the confirmation. A clipboard failure is
    /// swallowed and leaves the confirmation untouched.
    pub fn copy(&mut self, clipboard: &mut impl Clipboard, field: CopyField, now: Time) -> bool {
        let text = match field {
            CopyField::Phone => &self.info.phone,
            CopyField::Email => &self.info.email,
            CopyField::Location => &self.info.location,
        };
        match clipboard.write_text(text) {
            Ok(()) => self.copied.trigger(field, now, COPIED_FEEDBACK_S),
            Err(ClipboardError(reason)) => {
                debug!(?field, %reason, "clipboard write failed");
                false
            }
        }
    }

    /// Validates the form and starts the simulated send.
    pub fn submit(&mut self, now: Time) -> Result<(), ContactError> {
        if self.is_submitting() {
            return Err(ContactError::SubmitInProgress);
        }
        let uri = self.form.compose_mailto(&self.info.email)?;
        if self.submitting.trigger((), now, SUBMIT_DELAY_S) {
            self.pending_mail = Some(uri);
        }
        Ok(())
    }

    /// Advances timeouts. Returns the mail hand-off once the send delay
    /// elapses, clearing the form.
    pub fn tick(&mut self, now: Time) -> Option<ContactAction> {
        self.copied.expire(now);
        self.submitting.expire(now)?;
        let uri = self.pending_mail.take()?;
        info!("contact form handed to mail client");
        self.form = ContactForm::default();
        Some(ContactAction::Mail { uri })
    }

    /// Called on unmount; pending confirmations and sends are dropped.
    pub fn detach(&mut self) {
        self.copied.detach();
        self.submitting.detach();
        self.pending_mail = None;
    }
}
