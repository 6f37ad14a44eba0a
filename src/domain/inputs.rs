use std::{fmt, str::FromStr};

use borsh::BorshSerialize;
use serde::{Deserialize, Serialize};

/// The deployment surface an organisation runs on.
///
/// Drives the lowercase noun phrase substituted wherever generated text
/// refers to "the platform".
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, BorshSerialize,
)]
pub enum Platform {
    /// A website only.
    #[default]
    Website,
    /// A mobile application only.
    App,
    /// Both a website and a mobile application.
    Both,
}

impl Platform {
    /// The lowercase noun phrase used in section bodies.
    ///
    /// The same phrase is used for every reference within one generated
    /// document, so substitution is consistent throughout.
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::App => "app",
            Self::Both => "both a website and a mobile application",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Website => "Website",
            Self::App => "App",
            Self::Both => "Both",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Platform {
    type Err = UnknownPlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "website" => Ok(Self::Website),
            "app" => Ok(Self::App),
            "both" => Ok(Self::Both),
            _ => Err(UnknownPlatformError(s.to_string())),
        }
    }
}

/// Error returned when a string does not name a known platform.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown platform '{0}': expected 'website', 'app' or 'both'")]
pub struct UnknownPlatformError(String);

/// The questionnaire record of business facts that drives composition.
///
/// Owned and mutated field-by-field by the form while editing, and copied by
/// value into any saved document. Booleans default to `false`: absence of a
/// fact is always read as the conservative "does not collect/use" posture.
///
/// No boolean implies another. `sell_data` without `collects_personal_data`
/// is a permitted, if odd, state: the composer renders each independently
/// and does not cross-validate.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, BorshSerialize,
)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct GeneratorInputs {
    /// Legal name of the organisation. Required before finalisation.
    pub company_name: String,
    /// Website or app link. Required, but free-form: no URL validation.
    pub website_url: String,
    /// The deployment surface.
    pub platform: Platform,
    /// Descriptive only (e.g. "iOS & Android"); never gates composition.
    pub app_platform: Option<String>,
    /// Contact address named in generated text. Required.
    pub email: String,
    /// Jurisdiction country, used verbatim in rights text. Required.
    pub country: String,
    /// Jurisdiction state/region, used verbatim in rights text. Optional.
    pub state: String,
    /// Whether the organisation collects personal information.
    pub collects_personal_data: bool,
    /// Whether cookies or similar tracking technologies are used.
    pub uses_cookies: bool,
    /// Whether third-party advertising is used.
    pub uses_ads: bool,
    /// Whether marketing emails are sent.
    pub marketing_emails: bool,
    /// Whether data is shared or sold to third parties.
    pub sell_data: bool,
    /// Whether social media logins are offered.
    pub social_logins: bool,
    /// Whether payments are processed via third-party processors.
    pub payment_processing: bool,
    /// Whether the service knowingly collects data from minors.
    pub minor_users: bool,
    /// Comma-separated third-party tool/vendor names, listed verbatim.
    /// An empty string omits the third-party section entirely.
    pub third_party_tools: String,
}

/// The boolean facts of the questionnaire, as a closed table.
///
/// The form renders its checkbox step from [`Fact::ALL`] and the label
/// table below; there is no dynamic lookup over the record's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fact {
    /// Personal information is collected.
    CollectsPersonalData,
    /// Cookies or similar tracking technologies are used.
    UsesCookies,
    /// Third-party advertising is used.
    UsesAds,
    /// Marketing emails are sent.
    MarketingEmails,
    /// Data is shared or sold to third parties.
    SellData,
    /// Social media logins are offered.
    SocialLogins,
    /// Payments are processed.
    PaymentProcessing,
    /// Data is knowingly collected from minors.
    MinorUsers,
}

impl Fact {
    /// Every fact, in the order the form presents them.
    pub const ALL: [Self; 8] = [
        Self::CollectsPersonalData,
        Self::UsesCookies,
        Self::UsesAds,
        Self::MarketingEmails,
        Self::SellData,
        Self::SocialLogins,
        Self::PaymentProcessing,
        Self::MinorUsers,
    ];

    /// Human label shown against the checkbox for this fact.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CollectsPersonalData => "Collects personal data",
            Self::UsesCookies => "Uses cookies or tracking technologies",
            Self::UsesAds => "Uses third-party advertising",
            Self::MarketingEmails => "Sends marketing emails",
            Self::SellData => "Shares or sells data with third parties",
            Self::SocialLogins => "Offers social media logins",
            Self::PaymentProcessing => "Processes payments",
            Self::MinorUsers => "Knowingly collects data from minors",
        }
    }

    /// Reads this fact from the inputs record.
    #[must_use]
    pub const fn get(self, inputs: &GeneratorInputs) -> bool {
        match self {
            Self::CollectsPersonalData => inputs.collects_personal_data,
            Self::UsesCookies => inputs.uses_cookies,
            Self::UsesAds => inputs.uses_ads,
            Self::MarketingEmails => inputs.marketing_emails,
            Self::SellData => inputs.sell_data,
            Self::SocialLogins => inputs.social_logins,
            Self::PaymentProcessing => inputs.payment_processing,
            Self::MinorUsers => inputs.minor_users,
        }
    }

    /// Writes this fact into the inputs record.
    pub const fn set(self, inputs: &mut GeneratorInputs, value: bool) {
        match self {
            Self::CollectsPersonalData => inputs.collects_personal_data = value,
            Self::UsesCookies => inputs.uses_cookies = value,
            Self::UsesAds => inputs.uses_ads = value,
            Self::MarketingEmails => inputs.marketing_emails = value,
            Self::SellData => inputs.sell_data = value,
            Self::SocialLogins => inputs.social_logins = value,
            Self::PaymentProcessing => inputs.payment_processing = value,
            Self::MinorUsers => inputs.minor_users = value,
        }
    }
}
