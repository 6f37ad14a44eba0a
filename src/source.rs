//! Document sources.
//!
//! Two content producers sit behind one capability: the deterministic local
//! [`Composer`] and the [`RemoteService`] generative collaborator. The rest
//! of the system (preview, save, export) is agnostic to which produced the
//! text. Only the composer carries the reproducibility guarantee; the remote
//! path is best-effort and may fail.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    compose,
    domain::{DocumentType, GeneratorInputs, Platform},
};

/// Disclaimer appended to remotely generated drafts.
const REMOTE_DISCLAIMER: &str = "\n\n---\n\n**DISCLAIMER:** *This document is an AI-generated \
    draft provided for informational purposes only. It does not constitute legal advice and may \
    not comply with all applicable laws in your jurisdiction. We strongly recommend having this \
    document reviewed by a qualified legal professional before use.*";

/// A producer of document text from the questionnaire record.
pub trait DocumentSource {
    /// Produces the text of a document of the given type.
    ///
    /// `notes` carries free-text additional instructions; the deterministic
    /// composer ignores them.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot produce a document. The local
    /// composer never fails; the remote service fails on network or service
    /// errors, with no retry.
    fn generate(
        &self,
        doc_type: DocumentType,
        inputs: &GeneratorInputs,
        notes: Option<&str>,
    ) -> Result<String, SourceError>;
}

/// The deterministic local composer, with its generation date fixed at
/// construction.
///
/// Fixing the date up front keeps repeated preview calls byte-identical
/// within one session.
#[derive(Debug, Clone, Copy)]
pub struct Composer {
    generated_on: NaiveDate,
}

impl Composer {
    /// Creates a composer that stamps documents with the given date.
    #[must_use]
    pub const fn new(generated_on: NaiveDate) -> Self {
        Self { generated_on }
    }
}

impl DocumentSource for Composer {
    fn generate(
        &self,
        doc_type: DocumentType,
        inputs: &GeneratorInputs,
        _notes: Option<&str>,
    ) -> Result<String, SourceError> {
        Ok(compose::compose(doc_type, inputs, self.generated_on))
    }
}

/// The remote generative collaborator.
///
/// Posts a prompt assembled from the same inputs to a configured HTTP
/// endpoint and expects a JSON `{"text": ...}` response. Failures surface
/// as a single reported error; the caller may re-invoke manually.
#[derive(Debug, Clone)]
pub struct RemoteService {
    endpoint: String,
}

impl RemoteService {
    /// Creates a client for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl DocumentSource for RemoteService {
    fn generate(
        &self,
        doc_type: DocumentType,
        inputs: &GeneratorInputs,
        notes: Option<&str>,
    ) -> Result<String, SourceError> {
        let request = serde_json::json!({ "prompt": prompt(doc_type, inputs, notes) });

        let response: GeneratedText = ureq::post(&self.endpoint)
            .send_json(request)
            .map_err(|error| SourceError::Service(Box::new(error)))?
            .into_json()?;

        if response.text.is_empty() {
            return Err(SourceError::Empty);
        }

        Ok(response.text + REMOTE_DISCLAIMER)
    }
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    text: String,
}

/// Errors from a document source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The generation service could not be reached or reported an error.
    #[error("could not reach the generation service: {0}")]
    Service(#[source] Box<ureq::Error>),
    /// The response body could not be read or decoded.
    #[error("invalid response from the generation service")]
    Response(#[from] std::io::Error),
    /// The service returned no text.
    #[error("the generation service returned an empty document")]
    Empty,
}

/// Assembles the instruction prompt sent to the remote service.
fn prompt(doc_type: DocumentType, inputs: &GeneratorInputs, notes: Option<&str>) -> String {
    let platform_context = match inputs.platform {
        Platform::Both => "both a website and a mobile application".to_string(),
        Platform::App => inputs.app_platform.as_ref().map_or_else(
            || "a mobile application".to_string(),
            |detail| format!("a mobile application ({detail})"),
        ),
        Platform::Website => "a website".to_string(),
    };

    let section_instructions = match doc_type {
        DocumentType::PrivacyPolicy => {
            "Include sections like Introduction, Information Collection, Use of Information, \
             Tracking Technologies (Cookies), Third-Party Disclosure, User Rights (GDPR/CCPA), \
             and Contact Information."
        }
        DocumentType::TermsAndConditions => {
            "Include sections like Acceptance of Terms, User Conduct, Intellectual Property \
             Rights, Limitation of Liability, Termination of Use, Governing Law, and Changes to \
             Terms."
        }
        DocumentType::CookiePolicy => {
            "Include sections like What are Cookies, Why we use Cookies, Types of Cookies used \
             (Essential, Analytics, Marketing), How to control Cookies, and Updates to this \
             policy."
        }
    };

    let notes = notes
        .map(|n| format!("Additional specific requirements: {n}\n\n"))
        .unwrap_or_default();

    format!(
        "Generate a professional and legally sound {doc_type} for {platform_context} with the \
         following details:\n\
         - Company/Entity Name: {}\n\
         - URL/App Link: {}\n\
         - Contact Email: {}\n\
         - Location: {}, {}\n\
         - Data Practices: {}\n\
         - Cookies/Tracking: {}\n\
         - Advertising: {}\n\
         - Third-party tools: {}\n\n\
         {notes}\
         Structure the response as a formal legal document using Markdown.\n\
         {section_instructions}\n\n\
         If it's for an App, include standard clauses about App Store/Play Store requirements \
         and device permissions.\n\
         Ensure it complies with general principles of GDPR and CCPA where applicable.",
        inputs.company_name,
        inputs.website_url,
        inputs.email,
        inputs.state,
        inputs.country,
        if inputs.collects_personal_data {
            "Collects personal data (name, email, device ID, etc.)"
        } else {
            "Does not collect personal data"
        },
        if inputs.uses_cookies {
            "Uses cookies or mobile identifiers for tracking"
        } else {
            "Does not use tracking technology"
        },
        if inputs.uses_ads {
            "Uses third-party advertising (like Google AdSense or AdMob)"
        } else {
            "No advertising"
        },
        inputs.third_party_tools,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> GeneratorInputs {
        GeneratorInputs {
            company_name: "Acme Digital".to_string(),
            website_url: "https://acme.example".to_string(),
            email: "legal@acme.example".to_string(),
            country: "United States".to_string(),
            state: "California".to_string(),
            uses_cookies: true,
            third_party_tools: "Stripe, AWS".to_string(),
            ..GeneratorInputs::default()
        }
    }

    #[test]
    fn composer_matches_direct_composition() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let source = Composer::new(date);

        let generated = source
            .generate(DocumentType::PrivacyPolicy, &inputs(), None)
            .unwrap();

        assert_eq!(
            generated,
            compose::compose(DocumentType::PrivacyPolicy, &inputs(), date)
        );
    }

    #[test]
    fn composer_ignores_notes() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let source = Composer::new(date);

        let plain = source
            .generate(DocumentType::CookiePolicy, &inputs(), None)
            .unwrap();
        let noted = source
            .generate(DocumentType::CookiePolicy, &inputs(), Some("add a jurisdiction clause"))
            .unwrap();

        assert_eq!(plain, noted);
    }

    #[test]
    fn prompt_names_the_business_facts() {
        let text = prompt(DocumentType::PrivacyPolicy, &inputs(), None);

        assert!(text.contains("Privacy Policy for a website"));
        assert!(text.contains("Company/Entity Name: Acme Digital"));
        assert!(text.contains("Location: California, United States"));
        assert!(text.contains("Uses cookies or mobile identifiers for tracking"));
        assert!(text.contains("Third-party tools: Stripe, AWS"));
    }

    #[test]
    fn prompt_describes_the_app_platform() {
        let inputs = GeneratorInputs {
            platform: Platform::App,
            app_platform: Some("iOS & Android".to_string()),
            ..inputs()
        };
        let text = prompt(DocumentType::TermsAndConditions, &inputs, None);
        assert!(text.contains("for a mobile application (iOS & Android)"));
    }

    #[test]
    fn prompt_appends_additional_notes() {
        let text = prompt(
            DocumentType::CookiePolicy,
            &inputs(),
            Some("mention the ePrivacy Directive"),
        );
        assert!(text.contains(
            "Additional specific requirements: mention the ePrivacy Directive"
        ));
    }
}
