use std::collections::BTreeMap;
use std::fmt;

use crate::domain::GeneratorInputs;

/// The form checkpoints that gate forward progress.
///
/// Validation gates the wizard only; the composer remains callable (for
/// best-effort live preview) even while errors are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStep {
    /// Business identity: company name and website URL.
    Business,
    /// Contact and jurisdiction: email and country.
    Contact,
}

/// A required field that validation can report against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    /// The company name.
    CompanyName,
    /// The website URL.
    WebsiteUrl,
    /// The contact email.
    Email,
    /// The jurisdiction country.
    Country,
}

impl Field {
    /// The field's stable identifier, used as the error key.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CompanyName => "company_name",
            Self::WebsiteUrl => "website_url",
            Self::Email => "email",
            Self::Country => "country",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-field validation errors, keyed by field.
///
/// An empty map means the step passes. The map is rebuilt on every call, so
/// correcting a field clears exactly that field's entry and no others.
pub type ValidationErrors = BTreeMap<Field, String>;

/// Checks the presence requirements for advancing past the given step.
///
/// Presence checks only: no URL or email format validation is enforced.
#[must_use]
pub fn validate_step(step: FormStep, inputs: &GeneratorInputs) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    match step {
        FormStep::Business => {
            require(&mut errors, Field::CompanyName, &inputs.company_name, "Company name is required");
            require(&mut errors, Field::WebsiteUrl, &inputs.website_url, "Website URL is required");
        }
        FormStep::Contact => {
            require(&mut errors, Field::Email, &inputs.email, "Contact email is required");
            require(&mut errors, Field::Country, &inputs.country, "Country is required");
        }
    }

    errors
}

fn require(errors: &mut ValidationErrors, field: Field, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(field, message.to_string());
    }
}
