//! # Lead Form
//!
//! Rules for the "contact us" form shown next to the calculator result.
//!
//! ## Lead Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Visitor fills in name / phone / email                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_lead_form ──► errors? ──► 400 with one message per field      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Lead::from_form                                                        │
//! │  ├── phone sanitised ("081-234-5678" → "0812345678")                   │
//! │  ├── id assigned (UUID v4)                                             │
//! │  └── created_at stamped                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult, FieldError};

/// Minimum name length after trimming.
pub const FULL_NAME_MIN_LEN: usize = 2;

/// Maximum name length after trimming.
pub const FULL_NAME_MAX_LEN: usize = 100;

/// Accepted phone lengths once formatting is stripped.
pub const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 9..=10;

/// Maximum email length.
pub const EMAIL_MAX_LEN: usize = 255;

/// Wire names of the lead form fields.
pub mod fields {
    pub const FULL_NAME: &str = "fullName";
    pub const PHONE: &str = "phone";
    pub const EMAIL: &str = "email";
}

/// User-facing messages, shown verbatim by the storefront.
pub mod messages {
    pub const FULL_NAME_REQUIRED: &str = "กรุณากรอกชื่อ-นามสกุล";
    pub const FULL_NAME_TOO_SHORT: &str = "กรุณากรอกชื่อ-นามสกุล (อย่างน้อย 2 ตัวอักษร)";
    pub const FULL_NAME_TOO_LONG: &str = "ชื่อ-นามสกุลต้องไม่เกิน 100 ตัวอักษร";
    pub const PHONE_REQUIRED: &str = "กรุณากรอกเบอร์โทรศัพท์";
    pub const PHONE_INVALID: &str = "กรุณากรอกเบอร์โทรศัพท์ที่ถูกต้อง (9-10 หลัก)";
    pub const EMAIL_REQUIRED: &str = "กรุณากรอกอีเมล";
    pub const EMAIL_INVALID: &str = "กรุณากรอกอีเมลที่ถูกต้อง";
}

// =============================================================================
// Lead Form (raw)
// =============================================================================

/// Lead form data before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LeadForm {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

// =============================================================================
// Lead (accepted)
// =============================================================================

/// A lead that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Unique identifier (UUID v4).
    pub id: String,

    pub full_name: String,

    /// Digits only.
    pub phone: String,

    pub email: String,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Lead {
    /// Validates a form and turns it into a lead stamped with `now`.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::Utc;
    /// use solar_core::{Lead, LeadForm};
    ///
    /// let form = LeadForm {
    ///     full_name: " Somchai Jaidee ".to_string(),
    ///     phone: "081-234-5678".to_string(),
    ///     email: "somchai@example.com".to_string(),
    /// };
    ///
    /// let lead = Lead::from_form(&form, Utc::now()).unwrap();
    /// assert_eq!(lead.full_name, "Somchai Jaidee");
    /// assert_eq!(lead.phone, "0812345678");
    /// ```
    pub fn from_form(form: &LeadForm, now: DateTime<Utc>) -> CoreResult<Self> {
        let errors = validate_lead_form(form);
        if !errors.is_empty() {
            return Err(CoreError::InvalidLead(errors));
        }

        Ok(Lead {
            id: Uuid::new_v4().to_string(),
            full_name: form.full_name.trim().to_string(),
            phone: sanitize_phone(&form.phone),
            email: form.email.trim().to_string(),
            created_at: now,
        })
    }
}

// =============================================================================
// Validators
// =============================================================================

/// Validates the whole form, at most one error per field.
///
/// ## Example
/// ```rust
/// use solar_core::lead::validate_lead_form;
/// use solar_core::LeadForm;
///
/// let errors = validate_lead_form(&LeadForm::default());
/// let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
/// assert_eq!(fields, vec!["fullName", "phone", "email"]);
/// ```
pub fn validate_lead_form(form: &LeadForm) -> Vec<FieldError> {
    [
        validate_full_name(&form.full_name),
        validate_phone(&form.phone),
        validate_email(&form.email),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Name must be non-blank and 2-100 characters after trimming.
pub fn validate_full_name(full_name: &str) -> Option<FieldError> {
    let name = full_name.trim();
    let len = name.chars().count();

    let message = if name.is_empty() {
        messages::FULL_NAME_REQUIRED
    } else if len < FULL_NAME_MIN_LEN {
        messages::FULL_NAME_TOO_SHORT
    } else if len > FULL_NAME_MAX_LEN {
        messages::FULL_NAME_TOO_LONG
    } else {
        return None;
    };

    Some(FieldError::new(fields::FULL_NAME, message))
}

/// Phone must be 9-10 digits once spaces, dashes and parentheses are removed.
pub fn validate_phone(phone: &str) -> Option<FieldError> {
    if phone.trim().is_empty() {
        return Some(FieldError::new(fields::PHONE, messages::PHONE_REQUIRED));
    }

    let clean = sanitize_phone(phone);
    let valid = PHONE_DIGITS.contains(&clean.len()) && clean.bytes().all(|b| b.is_ascii_digit());
    if valid {
        None
    } else {
        Some(FieldError::new(fields::PHONE, messages::PHONE_INVALID))
    }
}

/// Email must look like `local@domain.tld` with no whitespace.
///
/// The domain needs at least one dot with text on both sides; other dots
/// are not checked, so `a@b.c.` passes.
pub fn validate_email(email: &str) -> Option<FieldError> {
    let email = email.trim();
    if email.is_empty() {
        return Some(FieldError::new(fields::EMAIL, messages::EMAIL_REQUIRED));
    }

    if email.chars().count() > EMAIL_MAX_LEN || !is_email_shaped(email) {
        return Some(FieldError::new(fields::EMAIL, messages::EMAIL_INVALID));
    }

    None
}

/// Strips spaces, dashes and parentheses from a phone number.
///
/// ```rust
/// use solar_core::lead::sanitize_phone;
///
/// assert_eq!(sanitize_phone("081-234-5678"), "0812345678");
/// assert_eq!(sanitize_phone("(02) 123 4567"), "021234567");
/// ```
pub fn sanitize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect()
}

fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Any dot in the domain with text on both sides will do
    domain
        .match_indices('.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

// =============================================================================
// Unit Tests
// =============================================================================
