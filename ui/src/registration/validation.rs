//! Registration Step Validators
//!
//! One pure function per wizard step. The personal info validator stops at the
//! first failing field; the location validator reports every missing field at
//! once.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::types::{DraftField, RegistrationDraft, WizardStep};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)*@([A-Za-z0-9_-]+\.)+[a-zA-Z]{2,7}$")
        .expect("email pattern is valid")
});

pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please select a member type to continue")]
    MemberTypeRequired,

    #[error("First name is required")]
    FirstNameRequired,

    #[error("Last name is required")]
    LastNameRequired,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Date of birth is required")]
    DateOfBirthRequired,

    #[error("Gender is required")]
    GenderRequired,

    #[error("Please complete all location fields")]
    Location(LocationErrors),

    #[error("Passwords do not match")]
    PasswordsDoNotMatch,

    #[error("Password does not meet all requirements")]
    PasswordRequirementsNotMet,
}

/// Location inputs checked on the third step, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LocationField {
    Country,
    City,
    Village,
    State,
    Community,
}

impl LocationField {
    pub const ALL: [LocationField; 5] = [
        LocationField::Country,
        LocationField::City,
        LocationField::Village,
        LocationField::State,
        LocationField::Community,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LocationField::Country => "country",
            LocationField::City => "city",
            LocationField::Village => "village",
            LocationField::State => "state",
            LocationField::Community => "community",
        }
    }

    pub fn missing_message(&self) -> &'static str {
        match self {
            LocationField::Country => "Please select your country",
            LocationField::City => "Please enter your city",
            LocationField::Village => "Please select your village",
            LocationField::State => "Please enter your state",
            LocationField::Community => "Please enter your community",
        }
    }

    /// The field named by a draft write, if it belongs to this step
    pub fn of(field: &DraftField) -> Option<Self> {
        match field {
            DraftField::Country(_) => Some(LocationField::Country),
            DraftField::City(_) => Some(LocationField::City),
            DraftField::Village(_) => Some(LocationField::Village),
            DraftField::State(_) => Some(LocationField::State),
            DraftField::Community(_) => Some(LocationField::Community),
            _ => None,
        }
    }

    fn is_missing(&self, draft: &RegistrationDraft) -> bool {
        match self {
            LocationField::Country => draft.country.trim().is_empty(),
            LocationField::City => draft.city.trim().is_empty(),
            LocationField::Village => draft.village.is_none(),
            LocationField::State => draft.state.trim().is_empty(),
            LocationField::Community => draft.community.trim().is_empty(),
        }
    }
}

/// Every missing location field with its message
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocationErrors {
    errors: BTreeMap<LocationField, &'static str>,
}

impl LocationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: LocationField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn fields(&self) -> impl Iterator<Item = LocationField> + '_ {
        self.errors.keys().copied()
    }

    pub fn clear(&mut self, field: LocationField) {
        self.errors.remove(&field);
    }
}

impl fmt::Display for LocationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.values().copied().collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Step 0: an account type must be chosen
pub fn validate_account_type(draft: &RegistrationDraft) -> Result<(), ValidationError> {
    match draft.member_type {
        Some(_) => Ok(()),
        None => Err(ValidationError::MemberTypeRequired),
    }
}

/// Step 1: checks fields in a fixed order and reports only the first failure
pub fn validate_personal_info(draft: &RegistrationDraft) -> Result<(), ValidationError> {
    if draft.first_name.trim().is_empty() {
        return Err(ValidationError::FirstNameRequired);
    }
    if draft.last_name.trim().is_empty() {
        return Err(ValidationError::LastNameRequired);
    }
    if !is_valid_email(&draft.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !draft.has_date_of_birth() {
        return Err(ValidationError::DateOfBirthRequired);
    }
    if draft.gender.is_none() {
        return Err(ValidationError::GenderRequired);
    }
    Ok(())
}

/// Step 2: evaluates every location field independently
pub fn validate_location(draft: &RegistrationDraft) -> LocationErrors {
    let errors = LocationField::ALL
        .iter()
        .filter(|field| field.is_missing(draft))
        .map(|field| (*field, field.missing_message()))
        .collect();
    LocationErrors { errors }
}

/// Step 3: the confirmation must match before the requirements are looked at
pub fn validate_password(password: &str, confirm_password: &str) -> Result<(), ValidationError> {
    if password != confirm_password {
        return Err(ValidationError::PasswordsDoNotMatch);
    }
    if !PasswordChecklist::evaluate(password).all_met() {
        return Err(ValidationError::PasswordRequirementsNotMet);
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validate whichever step is active.
///
/// Confirmation and success have no validator of their own and always pass.
pub fn validate_step(
    step: WizardStep,
    draft: &RegistrationDraft,
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    match step {
        WizardStep::AccountType => validate_account_type(draft),
        WizardStep::PersonalInfo => validate_personal_info(draft),
        WizardStep::Location => {
            let errors = validate_location(draft);
            if errors.is_empty() {
                Ok(())
            } else {
                Err(ValidationError::Location(errors))
            }
        }
        WizardStep::Password => validate_password(password, confirm_password),
        WizardStep::Confirmation | WizardStep::Success => Ok(()),
    }
}

/// The five independent password predicates, shown to the user as a checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordChecklist {
    pub min_length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl PasswordChecklist {
    pub fn evaluate(password: &str) -> Self {
        Self {
            min_length: password.chars().count() >= MIN_PASSWORD_LENGTH,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            symbol: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    pub fn items(&self) -> [(&'static str, bool); 5] {
        [
            ("At least 8 characters", self.min_length),
            ("One uppercase letter", self.uppercase),
            ("One lowercase letter", self.lowercase),
            ("One number", self.digit),
            ("One special character", self.symbol),
        ]
    }

    pub fn all_met(&self) -> bool {
        self.items().iter().all(|(_, met)| *met)
    }

    pub fn unmet_count(&self) -> usize {
        self.items().iter().filter(|(_, met)| !met).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::types::{Gender, MemberType, Village};

    fn personal_info_draft() -> RegistrationDraft {
        RegistrationDraft {
            first_name: "Ada".to_string(),
            last_name: "Obi".to_string(),
            email: "ada.obi@example.org".to_string(),
            day: "12".to_string(),
            month: "4".to_string(),
            year: "1991".to_string(),
            gender: Some(Gender::Female),
            ..RegistrationDraft::default()
        }
    }

    #[test]
    fn test_account_type_requires_selection() {
        let mut draft = RegistrationDraft::default();
        assert_eq!(
            validate_account_type(&draft),
            Err(ValidationError::MemberTypeRequired)
        );
        draft.member_type = Some(MemberType::CommunityLeader);
        assert_eq!(validate_account_type(&draft), Ok(()));
    }

    #[test]
    fn test_personal_info_accepts_complete_draft() {
        assert_eq!(validate_personal_info(&personal_info_draft()), Ok(()));
    }

    #[test]
    fn test_personal_info_reports_first_failure_only() {
        let draft = RegistrationDraft {
            first_name: String::new(),
            email: "not-an-email".to_string(),
            ..personal_info_draft()
        };
        let error = validate_personal_info(&draft).unwrap_err();
        assert_eq!(error, ValidationError::FirstNameRequired);
        assert_eq!(error.to_string(), "First name is required");
    }

    #[test]
    fn test_personal_info_order() {
        let mut draft = personal_info_draft();
        draft.gender = None;
        draft.year.clear();
        draft.email = "bad@".to_string();
        draft.last_name = "   ".to_string();

        assert_eq!(
            validate_personal_info(&draft),
            Err(ValidationError::LastNameRequired)
        );
        draft.last_name = "Obi".to_string();
        assert_eq!(
            validate_personal_info(&draft),
            Err(ValidationError::InvalidEmail)
        );
        draft.email = "ada@example.com".to_string();
        assert_eq!(
            validate_personal_info(&draft),
            Err(ValidationError::DateOfBirthRequired)
        );
        draft.year = "1991".to_string();
        assert_eq!(
            validate_personal_info(&draft),
            Err(ValidationError::GenderRequired)
        );
    }

    #[test]
    fn test_personal_info_is_stable_across_calls() {
        let draft = RegistrationDraft {
            email: "nope".to_string(),
            ..personal_info_draft()
        };
        assert_eq!(validate_personal_info(&draft), validate_personal_info(&draft));

        let valid = personal_info_draft();
        assert_eq!(validate_personal_info(&valid), validate_personal_info(&valid));
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last-name@sub.domain.co"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("us er@example.com"));
    }

    #[test]
    fn test_location_collects_every_missing_field() {
        let draft = RegistrationDraft {
            country: String::new(),
            city: "X".to_string(),
            village: None,
            state: "Y".to_string(),
            community: String::new(),
            ..RegistrationDraft::default()
        };
        let errors = validate_location(&draft);
        let fields: Vec<LocationField> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![
                LocationField::Country,
                LocationField::Village,
                LocationField::Community
            ]
        );
        assert_eq!(
            errors.get(LocationField::Village),
            Some("Please select your village")
        );
        assert_eq!(errors.get(LocationField::City), None);
    }

    #[test]
    fn test_location_treats_whitespace_as_missing() {
        let draft = RegistrationDraft {
            country: "   ".to_string(),
            city: "\t".to_string(),
            village: Some(Village::Dan),
            state: " ".to_string(),
            community: "  ".to_string(),
            ..RegistrationDraft::default()
        };
        let errors = validate_location(&draft);
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(LocationField::Village), None);
        assert_eq!(errors.get(LocationField::City), Some("Please enter your city"));
    }

    #[test]
    fn test_location_field_of_draft_write() {
        assert_eq!(
            LocationField::of(&DraftField::Community("x".to_string())),
            Some(LocationField::Community)
        );
        assert_eq!(LocationField::of(&DraftField::Village(None)), Some(LocationField::Village));
        assert_eq!(LocationField::of(&DraftField::Email("x".to_string())), None);
    }

    #[test]
    fn test_location_complete() {
        let draft = RegistrationDraft {
            country: "Rwanda".to_string(),
            city: "Kigali".to_string(),
            village: Some(Village::Levi),
            state: "Kigali City".to_string(),
            community: "Nyamirambo".to_string(),
            ..RegistrationDraft::default()
        };
        assert!(validate_location(&draft).is_empty());
        assert_eq!(
            validate_step(WizardStep::Location, &draft, "", ""),
            Ok(())
        );
    }

    #[test]
    fn test_strong_password_passes_every_predicate() {
        let checklist = PasswordChecklist::evaluate("Abcdef1!");
        assert!(checklist.all_met());
        assert_eq!(checklist.unmet_count(), 0);
        assert_eq!(validate_password("Abcdef1!", "Abcdef1!"), Ok(()));
    }

    #[test]
    fn test_weak_password_checklist() {
        let checklist = PasswordChecklist::evaluate("abc");
        assert!(!checklist.min_length);
        assert!(!checklist.uppercase);
        assert!(checklist.lowercase);
        assert!(!checklist.digit);
        assert!(!checklist.symbol);
        assert_eq!(checklist.unmet_count(), 4);
        assert_eq!(
            validate_password("abc", "abc"),
            Err(ValidationError::PasswordRequirementsNotMet)
        );
    }

    #[test]
    fn test_mismatch_is_checked_first() {
        assert_eq!(
            validate_password("abc", "abd"),
            Err(ValidationError::PasswordsDoNotMatch)
        );
        assert_eq!(
            validate_password("Abcdef1!", "Abcdef1?"),
            Err(ValidationError::PasswordsDoNotMatch)
        );
    }

    #[test]
    fn test_confirmation_has_no_validator() {
        let draft = RegistrationDraft::default();
        assert_eq!(validate_step(WizardStep::Confirmation, &draft, "", ""), Ok(()));
    }
}
