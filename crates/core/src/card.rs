//! Checkout payment-card field validation.
//!
//! A pure predicate over the five raw checkout form fields. Nothing here is
//! stored, logged, or sent anywhere; the fields exist only for the duration
//! of one checkout request.

use serde::Deserialize;

/// Raw checkout form fields as submitted by the client.
///
/// Every field defaults to the empty string so an absent form field
/// deserializes the same as an empty one; missing input must never be able
/// to fail a request outright.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardFields {
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub cardholder_name: String,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub cvv: String,
}

impl CardFields {
    /// Whether all five fields are empty, i.e. the form was submitted blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.card_number.is_empty()
            && self.cardholder_name.is_empty()
            && self.month.is_empty()
            && self.year.is_empty()
            && self.cvv.is_empty()
    }
}

/// Result of validating a checkout submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardOutcome {
    /// All checks passed; carries the normalized (digits-only) card number.
    Accepted {
        /// Card number with spaces and hyphens stripped.
        card_number: String,
    },
    /// At least one check failed. No field-level detail is produced; the
    /// form is re-shown with a single error indicator.
    Rejected,
    /// All five fields were empty, so no validation was performed.
    NotSubmitted,
}

/// Validate a checkout submission.
///
/// Checks, in order:
///
/// 1. normalize the card number by deleting spaces and hyphens;
/// 2. card number: all digits, exactly 16 of them;
/// 3. month: all digits, at most 2 characters, value in `1..=12`;
/// 4. year: all digits, exactly 2 or 4 characters;
/// 5. cvv: all digits, exactly 3 characters.
///
/// Malformed input of any shape degrades to [`CardOutcome::Rejected`],
/// never a panic. The cardholder name is free text and not checked.
#[must_use]
pub fn validate(fields: &CardFields) -> CardOutcome {
    if fields.is_blank() {
        return CardOutcome::NotSubmitted;
    }

    let card_number: String = fields
        .card_number
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .collect();

    let valid_card_number = is_digits(&card_number) && card_number.len() == 16;
    let valid_month = is_digits(&fields.month)
        && fields.month.len() <= 2
        && fields
            .month
            .parse::<u8>()
            .is_ok_and(|m| (1..=12).contains(&m));
    let valid_year = is_digits(&fields.year) && matches!(fields.year.len(), 2 | 4);
    let valid_cvv = is_digits(&fields.cvv) && fields.cvv.len() == 3;

    if valid_card_number && valid_month && valid_year && valid_cvv {
        CardOutcome::Accepted { card_number }
    } else {
        CardOutcome::Rejected
    }
}

/// Whether `s` is non-empty and consists solely of ASCII digits.
///
/// The non-empty check matters: `chars().all` is vacuously true on the
/// empty string, which would wave an empty month or cvv through.
fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
