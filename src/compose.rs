//! The document composer.
//!
//! A pure function mapping `(document type, inputs, date)` to finished
//! Markdown text. Composition is string concatenation and conditional
//! branching only: no I/O, no randomness, no ambient clock. The generation
//! date is an explicit parameter so output is reproducible byte-for-byte.
//!
//! Section numbers are fixed literal labels per template. When an optional
//! section is omitted (cookies, third-party tools, user registration) the
//! surrounding sections keep their own numbers; nothing is renumbered.

use chrono::NaiveDate;

use crate::domain::{DocumentType, GeneratorInputs};

/// Assembles a complete document of the given type from the questionnaire
/// record.
///
/// Total over its domain: never fails, renders empty fields verbatim.
/// Required-field emptiness is the form's validation concern, not the
/// composer's.
#[must_use]
pub fn compose(
    doc_type: DocumentType,
    inputs: &GeneratorInputs,
    generated_on: NaiveDate,
) -> String {
    let mut out = header(doc_type, inputs, generated_on);

    match doc_type {
        DocumentType::PrivacyPolicy => privacy_policy(&mut out, inputs),
        DocumentType::TermsAndConditions => terms_and_conditions(&mut out, inputs),
        DocumentType::CookiePolicy => cookie_policy(&mut out, inputs),
    }

    out.push_str(&footer(inputs));
    out
}

/// Title line, last-updated line, and greeting paragraph, for every type.
fn header(doc_type: DocumentType, inputs: &GeneratorInputs, generated_on: NaiveDate) -> String {
    let title = doc_type.title();
    let company = &inputs.company_name;
    let date = generated_on.format("%B %-d, %Y");
    format!(
        "# {title} for {company}\n\n**Last Updated: {date}**\n\nWelcome to {company}. We are \
         committed to protecting your personal information and your right to privacy. If you \
         have any questions or concerns about this {}, please contact us at {}.\n\n",
        title.to_lowercase(),
        inputs.email,
    )
}

fn privacy_policy(out: &mut String, inputs: &GeneratorInputs) {
    let platform = inputs.platform.phrase();

    out.push_str("## 1. WHAT INFORMATION DO WE COLLECT?\n\n");
    if inputs.collects_personal_data {
        out.push_str(&format!(
            "We collect personal information that you voluntarily provide to us when you \
             register on the {platform}, express an interest in obtaining information about us \
             or our products and services, when you participate in activities on the {platform} \
             or otherwise when you contact us.\n\n"
        ));
        if inputs.social_logins {
            out.push_str(
                "We provide you with the option to register with us using your existing social \
                 media account details (like your Facebook, Twitter, or other social media \
                 login).\n\n",
            );
        }
    } else {
        out.push_str("We do not knowingly collect personal information from our users.\n\n");
    }

    out.push_str("## 2. HOW DO WE USE YOUR INFORMATION?\n\n");
    out.push_str(&format!(
        "We use personal information collected via our {platform} for a variety of business \
         purposes described below. We process your personal information for these purposes in \
         reliance on our legitimate business interests, in order to enter into or perform a \
         contract with you, with your consent, and/or for compliance with our legal \
         obligations.\n\n"
    ));
    if inputs.marketing_emails {
        out.push_str(
            "We may use the personal information you send to us for our marketing purposes, if \
             this is in accordance with your marketing preferences. You can opt-out of our \
             marketing emails at any time.\n\n",
        );
    }
    if inputs.payment_processing {
        out.push_str(&format!(
            "We may provide paid products and/or services within the {platform}. In that case, \
             we use third-party services for payment processing (e.g., payment processors). We \
             will not store or collect your payment card details.\n\n"
        ));
    }

    out.push_str("## 3. WILL YOUR INFORMATION BE SHARED WITH ANYONE?\n\n");
    if inputs.sell_data {
        out.push_str(
            "We may share or sell data with third parties for marketing purposes. You have the \
             right to opt-out of such sharing under certain jurisdictions (e.g., CCPA).\n\n",
        );
    } else {
        out.push_str(
            "We do not share, sell, rent, or trade any of your information with third parties \
             for their promotional purposes.\n\n",
        );
    }

    if inputs.uses_cookies {
        out.push_str(
            "## 4. COOKIES AND OTHER TRACKING TECHNOLOGIES\n\nWe may use cookies and similar \
             tracking technologies (like web beacons and pixels) to access or store \
             information.\n\n",
        );
    }

    if !inputs.third_party_tools.is_empty() {
        out.push_str(&format!(
            "## 5. THIRD-PARTY TOOLS\n\nWe utilize the following third-party services which may \
             process your data: {}.\n\n",
            inputs.third_party_tools
        ));
    }

    if inputs.minor_users {
        out.push_str(
            "## 6. PRIVACY OF MINORS\n\nWe knowingly collect data from or market to children \
             under 13 years of age. We take extra precautions to protect the privacy and safety \
             of children using our services.\n\n",
        );
    } else {
        out.push_str(&format!(
            "## 6. PRIVACY OF MINORS\n\nWe do not knowingly solicit data from or market to \
             children under 18 years of age. By using the {platform}, you represent that you \
             are at least 18.\n\n"
        ));
    }

    out.push_str(&format!(
        "## 7. YOUR PRIVACY RIGHTS\n\nDepending on your location ({}, {}), you may have certain \
         rights under applicable data protection laws (e.g., GDPR, CCPA). These may include the \
         right to request access and obtain a copy of your personal information, to request \
         rectification or erasure; to restrict the processing of your personal information; \
         and, if applicable, to data portability.\n\n",
        inputs.state, inputs.country
    ));
}

fn terms_and_conditions(out: &mut String, inputs: &GeneratorInputs) {
    out.push_str(&format!(
        "## 1. AGREEMENT TO TERMS\n\nThese Terms of Use constitute a legally binding agreement \
         made between you, whether personally or on behalf of an entity (\"you\") and {} \
         (\"Company\", \"we\", \"us\", or \"our\"), concerning your access to and use of the {} \
         website as well as any other media form, media channel, mobile website or mobile \
         application related, linked, or otherwise connected thereto.\n\n",
        inputs.company_name, inputs.website_url
    ));

    if inputs.social_logins {
        out.push_str(
            "## 2. USER REGISTRATION\n\nYou may be required to register with the Site. You \
             agree to keep your password confidential and will be responsible for all use of \
             your account and password. We reserve the right to remove, reclaim, or change a \
             username you select if we determine, in our sole discretion, that such username is \
             inappropriate, obscene, or otherwise objectionable.\n\n",
        );
    }

    out.push_str(
        "## 3. INTELLECTUAL PROPERTY RIGHTS\n\nUnless otherwise indicated, the Site is our \
         proprietary property and all source code, databases, functionality, software, website \
         designs, audio, video, text, photographs, and graphics on the Site and the trademarks, \
         service marks, and logos contained therein are owned or controlled by us.\n\n",
    );

    let consent = if inputs.minor_users {
        " (unless parental consent is provided)"
    } else {
        ""
    };
    out.push_str(&format!(
        "## 4. USER REPRESENTATIONS\n\nBy using the Site, you represent and warrant that: (1) \
         you have the legal capacity and you agree to comply with these Terms of Use; (2) you \
         are not a minor in the jurisdiction in which you reside{consent}; (3) you will not \
         access the Site through automated or non-human means; (4) you will not use the Site \
         for any illegal or unauthorized purpose.\n\n"
    ));

    out.push_str(
        "## 5. LIMITATION OF LIABILITY\n\nIN NO EVENT WILL WE OR OUR DIRECTORS, EMPLOYEES, OR \
         AGENTS BE LIABLE TO YOU OR ANY THIRD PARTY FOR ANY DIRECT, INDIRECT, CONSEQUENTIAL, \
         EXEMPLARY, INCIDENTAL, SPECIAL, OR PUNITIVE DAMAGES, INCLUDING LOST PROFIT, LOST \
         REVENUE, LOSS OF DATA, OR OTHER DAMAGES ARISING FROM YOUR USE OF THE SITE.\n\n",
    );
}

fn cookie_policy(out: &mut String, inputs: &GeneratorInputs) {
    out.push_str(
        "## 1. WHAT ARE COOKIES?\n\nCookies are small data files that are placed on your \
         computer or mobile device when you visit a website. Cookies are widely used by website \
         owners in order to make their websites work, or to work more efficiently, as well as \
         to provide reporting information.\n\n",
    );

    out.push_str(&format!(
        "## 2. WHY DO WE USE COOKIES?\n\nWe use first-party and third-party cookies for several \
         reasons. Some cookies are required for technical reasons in order for our {} to \
         operate, and we refer to these as \"essential\" or \"strictly necessary\" \
         cookies.\n\n",
        inputs.platform.phrase()
    ));

    if inputs.uses_ads {
        out.push_str(
            "## 3. ADVERTISING AND TRACKING\n\nWe use advertising cookies to make advertising \
             messages more relevant to you. They perform functions like preventing the same ad \
             from continuously reappearing, ensuring that ads are properly displayed for \
             advertisers, and in some cases selecting advertisements that are based on your \
             interests.\n\n",
        );
    }

    out.push_str(
        "## 4. HOW CAN I CONTROL COOKIES?\n\nYou have the right to decide whether to accept or \
         reject cookies. You can set or amend your web browser controls to accept or refuse \
         cookies. If you choose to reject cookies, you may still use our website though your \
         access to some functionality and areas of our website may be restricted.\n\n",
    );
}

/// Disclaimer and legal notice, appended verbatim to every document type.
fn footer(inputs: &GeneratorInputs) -> String {
    format!(
        "\n---\n\n**DISCLAIMER:** This document is an AI-generated draft provided for \
         informational purposes only. It does not constitute legal advice and may not comply \
         with all applicable laws in your jurisdiction. We strongly recommend having this \
         document reviewed by a qualified legal professional before use.\n\n**LEGAL NOTICE:** \
         This document was generated using EasyPolicyTool's automated legal framework in {}.",
        inputs.country
    )
}
