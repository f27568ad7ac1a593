//! Lead form draft and validation.
//!
//! A lead is transient: the draft lives in the form, is validated and sent
//! once, and only the confirmation message outlives the submission.

#[cfg(test)]
#[path = "lead_test.rs"]
mod lead_test;

use crate::net::types::LeadRequest;

/// Area of interest offered in the lead form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    #[default]
    Recruiting,
    Software,
    Consultation,
    Other,
}

impl Interest {
    pub const ALL: [Self; 4] = [Self::Recruiting, Self::Software, Self::Consultation, Self::Other];

    /// Wire / form value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Recruiting => "recruiting",
            Self::Software => "software",
            Self::Consultation => "consultation",
            Self::Other => "other",
        }
    }

    /// Human-readable option label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Recruiting => "IT Recruiting",
            Self::Software => "Software Solutions",
            Self::Consultation => "Consultation",
            Self::Other => "Other",
        }
    }

    /// Parse a form value, falling back to the default for unknown input.
    #[must_use]
    pub fn from_form_value(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|i| i.as_str() == raw)
            .unwrap_or_default()
    }
}

/// Lead form validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in required fields (Name and Email)")]
    MissingRequired,
}

/// Raw lead form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub interest: Interest,
}

impl LeadDraft {
    /// Validate the draft and build the request body.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingRequired`] when `name` or `email` is
    /// blank.
    pub fn into_request(self, session_id: Option<&str>) -> Result<LeadRequest, ValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(ValidationError::MissingRequired);
        }
        Ok(LeadRequest {
            session_id: session_id.map(str::to_owned),
            name: name.to_owned(),
            email: email.to_owned(),
            phone: optional_field(&self.phone),
            company: optional_field(&self.company),
            interest: self.interest,
        })
    }
}

fn optional_field(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
