//! Field validation for the signup and login forms. Pure functions from the
//! current form values to per-field verdicts; the routes decide when to
//! show them (after blur, or all at once on submit).

use regex::Regex;

/// Symbols accepted by the password composition rule.
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";
/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// Minimum trimmed name length.
pub const MIN_NAME_LENGTH: usize = 2;

/// Letter runs separated by a single space, apostrophe, or hyphen.
const NAME_PATTERN: &str = r"^[A-Za-z]+(?:[ '-][A-Za-z]+)*$";
/// Canonical email shape: local part, `@`, domain containing a dot.
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

/// Why a field failed. The message shown to the caller depends on both the
/// kind and the field it is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidFormat,
    TooShort,
    WeakComposition,
    Mismatch,
}

impl FieldError {
    /// Inline copy for the given field. Kinds that cannot occur on a field
    /// fall back to that field's format message rather than panicking in
    /// the view.
    pub fn message(self, field: Field) -> &'static str {
        match (field, self) {
            (Field::Name, FieldError::Required) => "Full name is required",
            (Field::Name, FieldError::TooShort) => "Name must be at least 2 characters",
            (Field::Name, _) => {
                "Please enter a valid name (letters, spaces, hyphens, and apostrophes only)"
            }
            (Field::Email, FieldError::Required) => "Email is required",
            (Field::Email, _) => "Please enter a valid email address",
            (Field::Password, FieldError::Required) => "Password is required",
            (Field::Password, FieldError::TooShort) => "Password must be at least 8 characters",
            (Field::Password, _) => {
                "Password must include uppercase, lowercase, number, and special character"
            }
            (Field::ConfirmPassword, FieldError::Required) => "Please confirm your password",
            (Field::ConfirmPassword, _) => "Passwords do not match",
        }
    }
}

/// Raw signup form values, one entry per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Fields the caller has visited and left; errors stay hidden until then.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Touched {
    pub name: bool,
    pub email: bool,
    pub password: bool,
    pub confirm_password: bool,
}

impl Touched {
    pub fn mark(&mut self, field: Field) {
        match field {
            Field::Name => self.name = true,
            Field::Email => self.email = true,
            Field::Password => self.password = true,
            Field::ConfirmPassword => self.confirm_password = true,
        }
    }

    /// Submission marks everything so every error becomes visible at once.
    pub fn mark_all(&mut self) {
        *self = Self {
            name: true,
            email: true,
            password: true,
            confirm_password: true,
        };
    }

    pub fn contains(self, field: Field) -> bool {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Password => self.password,
            Field::ConfirmPassword => self.confirm_password,
        }
    }
}

/// Per-field verdicts; `None` means the field passed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
    pub confirm_password: Option<FieldError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Password => self.password,
            Field::ConfirmPassword => self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, error: Option<FieldError>) {
        match field {
            Field::Name => self.name = error,
            Field::Email => self.email = error,
            Field::Password => self.password = error,
            Field::ConfirmPassword => self.confirm_password = error,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }
}

/// First failing check wins: required, then format, then length.
pub fn validate_name(name: &str) -> Option<FieldError> {
    if name.trim().is_empty() {
        return Some(FieldError::Required);
    }
    if !matches_pattern(NAME_PATTERN, name) {
        return Some(FieldError::InvalidFormat);
    }
    if name.trim().len() < MIN_NAME_LENGTH {
        return Some(FieldError::TooShort);
    }
    None
}

pub fn validate_email(email: &str) -> Option<FieldError> {
    if email.is_empty() {
        return Some(FieldError::Required);
    }
    if !matches_pattern(EMAIL_PATTERN, email) {
        return Some(FieldError::InvalidFormat);
    }
    None
}

/// Length gates composition; the four class checks are computed together so
/// the checklist can light up each rule independently.
pub fn validate_password(password: &str) -> Option<FieldError> {
    if password.is_empty() {
        return Some(FieldError::Required);
    }
    let rules = password_rules(password);
    if !rules.min_length {
        return Some(FieldError::TooShort);
    }
    if !rules.composition() {
        return Some(FieldError::WeakComposition);
    }
    None
}

/// Compares against the password value passed in, never a stored copy, so
/// editing the password invalidates a previously matching confirmation.
/// An empty confirmation reports `Required` even when the password is also
/// empty.
pub fn validate_confirm_password(confirm: &str, password: &str) -> Option<FieldError> {
    if confirm.is_empty() {
        return Some(FieldError::Required);
    }
    if confirm != password {
        return Some(FieldError::Mismatch);
    }
    None
}

pub fn validate_field(form: &FormState, field: Field) -> Option<FieldError> {
    match field {
        Field::Name => validate_name(&form.name),
        Field::Email => validate_email(&form.email),
        Field::Password => validate_password(&form.password),
        Field::ConfirmPassword => {
            validate_confirm_password(&form.confirm_password, &form.password)
        }
    }
}

/// Evaluates all four fields independently; no field compensates for
/// another.
pub fn validate_form(form: &FormState) -> FieldErrors {
    FieldErrors {
        name: validate_name(&form.name),
        email: validate_email(&form.email),
        password: validate_password(&form.password),
        confirm_password: validate_confirm_password(&form.confirm_password, &form.password),
    }
}

/// Live checklist state for the name field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NameRules {
    pub provided: bool,
    pub format: bool,
    pub min_length: bool,
}

pub fn name_rules(name: &str) -> NameRules {
    NameRules {
        provided: !name.is_empty(),
        format: matches_pattern(NAME_PATTERN, name),
        min_length: name.trim().len() >= MIN_NAME_LENGTH,
    }
}

/// Live checklist state for the email field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmailRules {
    pub provided: bool,
    pub format: bool,
}

pub fn email_rules(email: &str) -> EmailRules {
    EmailRules {
        provided: !email.is_empty(),
        format: matches_pattern(EMAIL_PATTERN, email),
    }
}

/// One flag per password rule row: length plus the four character classes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordRules {
    pub min_length: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub symbol: bool,
}

impl PasswordRules {
    /// The four character classes, independent of length.
    pub fn composition(self) -> bool {
        self.lowercase && self.uppercase && self.digit && self.symbol
    }
}

pub fn password_rules(password: &str) -> PasswordRules {
    PasswordRules {
        min_length: password.len() >= MIN_PASSWORD_LENGTH,
        lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        digit: password.chars().any(|c| c.is_ascii_digit()),
        symbol: password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)),
    }
}

fn matches_pattern(pattern: &str, value: &str) -> bool {
    Regex::new(pattern).is_ok_and(|re| re.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> FormState {
        FormState {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            password: "Abcdef1!".to_string(),
            confirm_password: "Abcdef1!".to_string(),
        }
    }

    #[test]
    fn valid_form_passes_every_field() {
        let errors = validate_form(&valid_form());
        assert!(errors.is_valid());
        assert_eq!(errors, FieldErrors::default());
    }

    #[test]
    fn name_requires_non_blank_value() {
        assert_eq!(validate_name(""), Some(FieldError::Required));
        assert_eq!(validate_name("   "), Some(FieldError::Required));
    }

    #[test]
    fn name_rejects_digits_and_symbols() {
        assert_eq!(validate_name("John3"), Some(FieldError::InvalidFormat));
        assert_eq!(validate_name("John_Doe"), Some(FieldError::InvalidFormat));
        assert_eq!(validate_name("John!"), Some(FieldError::InvalidFormat));
    }

    #[test]
    fn name_accepts_single_separators() {
        assert_eq!(validate_name("Mary-Jane"), None);
        assert_eq!(validate_name("O'Brien"), None);
        assert_eq!(validate_name("Anne Marie Smith"), None);
    }

    #[test]
    fn name_rejects_doubled_separators() {
        assert_eq!(validate_name("John  Doe"), Some(FieldError::InvalidFormat));
        assert_eq!(validate_name("Mary--Jane"), Some(FieldError::InvalidFormat));
        assert_eq!(validate_name("John Doe "), Some(FieldError::InvalidFormat));
    }

    #[test]
    fn single_letter_name_is_too_short() {
        assert_eq!(validate_name("A"), Some(FieldError::TooShort));
    }

    #[test]
    fn email_requires_value() {
        assert_eq!(validate_email(""), Some(FieldError::Required));
    }

    #[test]
    fn email_without_at_is_invalid_format() {
        for input in ["john.example.com", "plainaddress", "a.b.c", "john at example.com"] {
            assert_eq!(
                validate_email(input),
                Some(FieldError::InvalidFormat),
                "expected InvalidFormat for {input:?}"
            );
        }
    }

    #[test]
    fn email_requires_dotted_domain() {
        assert_eq!(validate_email("john@example"), Some(FieldError::InvalidFormat));
        assert_eq!(validate_email("john@"), Some(FieldError::InvalidFormat));
        assert_eq!(
            validate_email("john@exa mple.com"),
            Some(FieldError::InvalidFormat)
        );
    }

    #[test]
    fn email_accepts_common_shapes() {
        assert_eq!(validate_email("john@example.com"), None);
        assert_eq!(validate_email("j.doe+tag@sub.example.co"), None);
    }

    #[test]
    fn password_requires_value() {
        assert_eq!(validate_password(""), Some(FieldError::Required));
    }

    #[test]
    fn short_password_fails_before_composition() {
        assert_eq!(validate_password("Ab1!"), Some(FieldError::TooShort));
    }

    #[test]
    fn password_with_all_classes_passes() {
        assert_eq!(validate_password("Abcdef1!"), None);
    }

    #[test]
    fn removing_any_character_class_fails_composition() {
        // Each input drops exactly one required class from "Abcdef1!".
        for input in ["abcdef1!", "ABCDEF1!", "Abcdefg!", "Abcdefg1"] {
            assert_eq!(
                validate_password(input),
                Some(FieldError::WeakComposition),
                "expected WeakComposition for {input:?}"
            );
        }
    }

    #[test]
    fn all_lowercase_password_is_weak() {
        assert_eq!(validate_password("abcdefgh"), Some(FieldError::WeakComposition));
    }

    #[test]
    fn symbol_outside_allowed_set_does_not_count() {
        assert_eq!(validate_password("Abcdef1#"), Some(FieldError::WeakComposition));
    }

    #[test]
    fn password_rules_track_each_class() {
        let rules = password_rules("Ab1!");
        assert!(!rules.min_length);
        assert!(rules.lowercase);
        assert!(rules.uppercase);
        assert!(rules.digit);
        assert!(rules.symbol);
        assert!(rules.composition());

        let rules = password_rules("abcdefgh");
        assert!(rules.min_length);
        assert!(!rules.uppercase);
        assert!(!rules.composition());
    }

    #[test]
    fn empty_confirmation_reports_required_even_when_password_empty() {
        assert_eq!(
            validate_confirm_password("", ""),
            Some(FieldError::Required)
        );
    }

    #[test]
    fn mismatched_confirmation_fails() {
        assert_eq!(
            validate_confirm_password("Abcdef1!", "Abcdef1?"),
            Some(FieldError::Mismatch)
        );
    }

    #[test]
    fn confirmation_is_checked_against_current_password() {
        let mut form = valid_form();
        // The confirmation matched once; changing the password afterwards
        // must invalidate it.
        form.password.push('x');
        assert_eq!(
            validate_field(&form, Field::ConfirmPassword),
            Some(FieldError::Mismatch)
        );
    }

    #[test]
    fn any_single_failing_field_fails_the_form() {
        let mut broken = valid_form();
        broken.name = "J0hn".to_string();
        let errors = validate_form(&broken);
        assert!(!errors.is_valid());
        assert_eq!(errors.name, Some(FieldError::InvalidFormat));
        assert!(errors.email.is_none());

        let mut broken = valid_form();
        broken.email = "john.example.com".to_string();
        assert!(!validate_form(&broken).is_valid());

        let mut broken = valid_form();
        broken.password = "abcdefgh".to_string();
        let errors = validate_form(&broken);
        assert_eq!(errors.password, Some(FieldError::WeakComposition));
        // The confirmation no longer matches either; fields fail
        // independently.
        assert_eq!(errors.confirm_password, Some(FieldError::Mismatch));

        let mut broken = valid_form();
        broken.confirm_password.clear();
        assert_eq!(
            validate_form(&broken).confirm_password,
            Some(FieldError::Required)
        );
    }

    #[test]
    fn touched_marks_and_queries_fields() {
        let mut touched = Touched::default();
        assert!(!touched.contains(Field::Email));

        touched.mark(Field::Email);
        assert!(touched.contains(Field::Email));
        assert!(!touched.contains(Field::Name));

        touched.mark_all();
        assert!(touched.contains(Field::Name));
        assert!(touched.contains(Field::ConfirmPassword));
    }

    #[test]
    fn messages_match_the_form_copy() {
        assert_eq!(
            FieldError::Required.message(Field::Name),
            "Full name is required"
        );
        assert_eq!(
            FieldError::Mismatch.message(Field::ConfirmPassword),
            "Passwords do not match"
        );
        assert_eq!(
            FieldError::WeakComposition.message(Field::Password),
            "Password must include uppercase, lowercase, number, and special character"
        );
    }
}
