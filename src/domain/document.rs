use std::{fmt, str::FromStr};

use borsh::BorshSerialize;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::{
    compose,
    domain::{GeneratorInputs, Platform},
};

/// The kind of legal document the composer can assemble.
///
/// A closed set: each variant selects its own section ordering and
/// conditional clauses.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize,
)]
pub enum DocumentType {
    /// A privacy policy.
    PrivacyPolicy,
    /// Terms and conditions of use.
    TermsAndConditions,
    /// A cookie policy.
    CookiePolicy,
}

impl DocumentType {
    /// Every document type, in presentation order.
    pub const ALL: [Self; 3] = [
        Self::PrivacyPolicy,
        Self::TermsAndConditions,
        Self::CookiePolicy,
    ];

    /// The human title used in document headers.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::PrivacyPolicy => "Privacy Policy",
            Self::TermsAndConditions => "Terms & Conditions",
            Self::CookiePolicy => "Cookie Policy",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for DocumentType {
    type Err = UnknownDocumentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "privacy" | "privacy-policy" => Ok(Self::PrivacyPolicy),
            "terms" | "terms-and-conditions" => Ok(Self::TermsAndConditions),
            "cookies" | "cookie-policy" => Ok(Self::CookiePolicy),
            _ => Err(UnknownDocumentTypeError(s.to_string())),
        }
    }
}

/// Error returned when a string does not name a known document type.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown document type '{0}': expected 'privacy', 'terms' or 'cookies'")]
pub struct UnknownDocumentTypeError(String);

/// An immutable snapshot pairing generated text with the exact inputs that
/// produced it.
///
/// `content` is frozen at save time and never regenerated, even if the
/// composer's templates later change. The stored inputs allow the snapshot
/// to be reloaded into the form for editing and regeneration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedDocument {
    pub(crate) id: Uuid,
    pub(crate) doc_type: DocumentType,
    pub(crate) platform: Platform,
    pub(crate) company_name: String,
    pub(crate) content: String,
    pub(crate) date: NaiveDate,
    pub(crate) inputs: GeneratorInputs,
    pub(crate) fingerprint: String,
}

impl SavedDocument {
    /// Freezes a generated document together with the inputs that produced
    /// it.
    ///
    /// A new UUID is generated for the snapshot, and a fingerprint over the
    /// content and inputs is recorded so the pairing can later be verified.
    #[must_use]
    pub fn new(
        doc_type: DocumentType,
        inputs: GeneratorInputs,
        date: NaiveDate,
        content: String,
    ) -> Self {
        let fingerprint = fingerprint(doc_type, &inputs, date, &content);
        Self {
            id: Uuid::new_v4(),
            doc_type,
            platform: inputs.platform,
            company_name: inputs.company_name.clone(),
            content,
            date,
            inputs,
            fingerprint,
        }
    }

    /// The unique, stable identifier of this snapshot.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// The document type this snapshot was generated as.
    #[must_use]
    pub const fn doc_type(&self) -> DocumentType {
        self.doc_type
    }

    /// The platform recorded at save time.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// The company name recorded at save time.
    #[must_use]
    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    /// The frozen document text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The header date the document was generated with.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// The inputs that produced the content, for reload into the form.
    #[must_use]
    pub const fn inputs(&self) -> &GeneratorInputs {
        &self.inputs
    }

    /// Whether the stored content and inputs are still the pairing that was
    /// frozen at save time.
    ///
    /// A mismatch means the record was modified after the fact; content and
    /// inputs must never be re-derived independently of each other.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        fingerprint(self.doc_type, &self.inputs, self.date, &self.content) == self.fingerprint
    }

    /// Whether the composer's current templates would produce different text
    /// from the frozen content.
    ///
    /// Drift is expected after template changes, and is the norm for
    /// documents produced by the remote generative source. The frozen
    /// content is never updated; this is a report, not a repair.
    #[must_use]
    pub fn drifted(&self) -> bool {
        compose::compose(self.doc_type, &self.inputs, self.date) != self.content
    }
}

/// SHA-256 over a Borsh encoding of the snapshot's semantic content.
fn fingerprint(
    doc_type: DocumentType,
    inputs: &GeneratorInputs,
    date: NaiveDate,
    content: &str,
) -> String {
    #[derive(BorshSerialize)]
    struct FingerprintData<'a> {
        doc_type: &'a DocumentType,
        inputs: &'a GeneratorInputs,
        date: String,
        content: &'a str,
    }

    let data = FingerprintData {
        doc_type: &doc_type,
        inputs,
        date: date.to_string(),
        content,
    };

    let encoded = borsh::to_vec(&data).expect("this should never fail");
    let hash = Sha256::digest(encoded);
    format!("{hash:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> GeneratorInputs {
        GeneratorInputs {
            company_name: "Acme Digital".to_string(),
            website_url: "https://acme.example".to_string(),
            email: "legal@acme.example".to_string(),
            country: "Germany".to_string(),
            ..GeneratorInputs::default()
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }

    #[test]
    fn snapshot_copies_inputs_by_value() {
        let content =
            compose::compose(DocumentType::PrivacyPolicy, &inputs(), date());
        let saved =
            SavedDocument::new(DocumentType::PrivacyPolicy, inputs(), date(), content);

        assert_eq!(saved.company_name(), "Acme Digital");
        assert_eq!(saved.platform(), Platform::Website);
        assert_eq!(saved.inputs(), &inputs());
    }

    #[test]
    fn fresh_snapshot_is_consistent_and_not_drifted() {
        let content =
            compose::compose(DocumentType::CookiePolicy, &inputs(), date());
        let saved =
            SavedDocument::new(DocumentType::CookiePolicy, inputs(), date(), content);

        assert!(saved.is_consistent());
        assert!(!saved.drifted());
    }

    #[test]
    fn tampered_content_is_detected() {
        let content =
            compose::compose(DocumentType::PrivacyPolicy, &inputs(), date());
        let mut saved =
            SavedDocument::new(DocumentType::PrivacyPolicy, inputs(), date(), content);

        saved.content.push_str("amended after the fact");

        assert!(!saved.is_consistent());
        assert!(saved.drifted());
    }

    #[test]
    fn remote_content_is_consistent_but_drifted() {
        // A remotely generated draft pairs valid inputs with text the local
        // composer would not produce.
        let saved = SavedDocument::new(
            DocumentType::PrivacyPolicy,
            inputs(),
            date(),
            "# Privacy Policy for Acme Digital\n\nBespoke prose.".to_string(),
        );

        assert!(saved.is_consistent());
        assert!(saved.drifted());
    }

    #[test]
    fn document_type_parses_cli_spellings() {
        assert_eq!("privacy".parse(), Ok(DocumentType::PrivacyPolicy));
        assert_eq!(
            "terms-and-conditions".parse(),
            Ok(DocumentType::TermsAndConditions)
        );
        assert_eq!("Cookies".parse(), Ok(DocumentType::CookiePolicy));
        assert!("eula".parse::<DocumentType>().is_err());
    }

    #[test]
    fn titles_match_document_headers() {
        assert_eq!(DocumentType::PrivacyPolicy.to_string(), "Privacy Policy");
        assert_eq!(
            DocumentType::TermsAndConditions.to_string(),
            "Terms & Conditions"
        );
        assert_eq!(DocumentType::CookiePolicy.to_string(), "Cookie Policy");
    }
}
