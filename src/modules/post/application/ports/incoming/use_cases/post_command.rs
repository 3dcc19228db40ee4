use std::collections::BTreeMap;
use std::str::FromStr;

use email_address::EmailAddress;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::post::application::domain::entities::{
    Continent, DegreeType, PostStatus, StudentType, Term, DEFAULT_GPA_SCALE, DEFAULT_YEAR,
    YEAR_MAX, YEAR_MIN,
};

//
// ──────────────────────────────────────────────────────────
// Raw input (request body of create and update)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct PostInput {
    /// BS, BA, MS, MA, PHD or OTHER
    #[schema(example = "MS")]
    pub degree_type: String,
    #[schema(example = "Computer Science")]
    pub major: String,
    #[schema(example = "Stanford University")]
    pub university: String,
    #[schema(example = "USA")]
    pub country: String,
    /// Defaults to 2025
    #[schema(example = 2025)]
    pub year: Option<i32>,
    /// FALL, SPRING, SUMMER or WINTER; defaults to SPRING
    #[schema(example = "FALL")]
    pub term: Option<String>,
    #[schema(example = "Round 1")]
    pub application_round: String,
    #[schema(example = "ACCEPTED")]
    pub status: String,
    #[schema(example = "Email")]
    pub notification_method: Option<String>,
    #[schema(example = 3.8)]
    pub gpa: Option<f64>,
    /// Defaults to 4.0
    pub gpa_scale: Option<f64>,
    #[schema(example = "GRE")]
    pub test_type: Option<String>,
    #[schema(example = 325)]
    pub test_score: Option<i32>,
    /// DOMESTIC or INTERNATIONAL
    #[schema(example = "INTERNATIONAL")]
    pub student_type: String,
    /// AF, AS, EU, NA, SA, OC or AN
    pub continent: Option<String>,
    pub state: Option<String>,
    pub financial_aid: bool,
    pub scholarship: Option<String>,
    pub post_grad_plans: Option<String>,
    pub notes: Option<String>,
    /// Required when `notify_comments` is true
    pub email: Option<String>,
    pub notify_comments: bool,
}

//
// ──────────────────────────────────────────────────────────
// Validated command
// ──────────────────────────────────────────────────────────
//

/// Every field error found in a [`PostInput`], keyed by field name.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid post: {} field(s) rejected", fields.len())]
pub struct PostValidationError {
    pub fields: BTreeMap<String, String>,
}

/// Post fields after validation. Built by [`PostCommand::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct PostCommand {
    pub degree_type: DegreeType,
    pub major: String,
    pub university: String,
    pub country: String,
    pub year: i32,
    pub term: Term,
    pub application_round: String,
    pub status: PostStatus,
    pub notification_method: Option<String>,
    pub gpa: Option<f64>,
    pub gpa_scale: f64,
    pub test_type: Option<String>,
    pub test_score: Option<i32>,
    pub student_type: StudentType,
    pub continent: Option<Continent>,
    pub state: Option<String>,
    pub financial_aid: bool,
    pub scholarship: Option<String>,
    pub post_grad_plans: Option<String>,
    pub notes: Option<String>,
    pub email: Option<String>,
    pub notify_comments: bool,
}

const REQUIRED: &str = "This field is required";
const INVALID_CHOICE: &str = "Select a valid choice";

#[derive(Default)]
struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_insert_with(|| message.into());
    }

    fn required_text(&mut self, field: &str, value: &str, max: usize) -> String {
        let value = value.trim();
        if value.is_empty() {
            self.add(field, REQUIRED);
        } else if value.chars().count() > max {
            self.add(field, format!("Must be at most {max} characters"));
        }
        value.to_string()
    }

    fn optional_text(&mut self, field: &str, value: Option<String>, max: Option<usize>) -> Option<String> {
        let value = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())?;
        if let Some(max) = max {
            if value.chars().count() > max {
                self.add(field, format!("Must be at most {max} characters"));
            }
        }
        Some(value)
    }

    fn choice<T: FromStr>(&mut self, field: &str, value: &str) -> Option<T> {
        if value.trim().is_empty() {
            self.add(field, REQUIRED);
            return None;
        }
        let parsed = value.parse().ok();
        if parsed.is_none() {
            self.add(field, INVALID_CHOICE);
        }
        parsed
    }

    fn optional_choice<T: FromStr>(&mut self, field: &str, value: Option<&str>) -> Option<T> {
        match value.map(str::trim) {
            None | Some("") => None,
            Some(raw) => self.choice(field, raw),
        }
    }
}

impl PostCommand {
    pub fn new(input: PostInput) -> Result<Self, PostValidationError> {
        let mut errors = FieldErrors::default();

        let degree_type = errors.choice::<DegreeType>("degree_type", &input.degree_type);
        let major = errors.required_text("major", &input.major, 100);
        let university = errors.required_text("university", &input.university, 100);
        let country = errors.required_text("country", &input.country, 50);
        let application_round =
            errors.required_text("application_round", &input.application_round, 20);
        let status = errors.choice::<PostStatus>("status", &input.status);
        let student_type = errors.choice::<StudentType>("student_type", &input.student_type);

        let term = match input.term.as_deref().map(str::trim) {
            None | Some("") => Some(Term::default()),
            Some(raw) => errors.choice::<Term>("term", raw),
        };
        let continent = errors.optional_choice::<Continent>("continent", input.continent.as_deref());

        let year = input.year.unwrap_or(DEFAULT_YEAR);
        if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
            errors.add("year", format!("Year must be between {YEAR_MIN} and {YEAR_MAX}"));
        }

        let gpa_scale = input.gpa_scale.unwrap_or(DEFAULT_GPA_SCALE);
        if !gpa_scale.is_finite() || gpa_scale <= 0.0 || gpa_scale > 100.0 {
            errors.add("gpa_scale", "GPA scale must be greater than 0 and at most 100");
        }
        if let Some(gpa) = input.gpa {
            if !gpa.is_finite() || gpa < 0.0 || gpa > gpa_scale {
                errors.add("gpa", "GPA must be between 0 and the GPA scale");
            }
        }
        if matches!(input.test_score, Some(score) if score < 0) {
            errors.add("test_score", "Test score cannot be negative");
        }

        let notification_method =
            errors.optional_text("notification_method", input.notification_method, Some(20));
        let test_type = errors.optional_text("test_type", input.test_type, Some(20));
        let state = errors.optional_text("state", input.state, Some(50));
        let scholarship = errors.optional_text("scholarship", input.scholarship, Some(100));
        let post_grad_plans =
            errors.optional_text("post_grad_plans", input.post_grad_plans, Some(100));
        let notes = errors.optional_text("notes", input.notes, None);

        let email = errors.optional_text("email", input.email, None);
        match &email {
            Some(address) if !EmailAddress::is_valid(address) => {
                errors.add("email", "Enter a valid email address");
            }
            None if input.notify_comments => {
                errors.add("email", "Email is required to receive comment notifications");
            }
            _ => {}
        }

        match (degree_type, status, student_type, term) {
            (Some(degree_type), Some(status), Some(student_type), Some(term))
                if errors.0.is_empty() =>
            {
                Ok(Self {
                    degree_type,
                    major,
                    university,
                    country,
                    year,
                    term,
                    application_round,
                    status,
                    notification_method,
                    gpa: input.gpa,
                    gpa_scale,
                    test_type,
                    test_score: input.test_score,
                    student_type,
                    continent,
                    state,
                    financial_aid: input.financial_aid,
                    scholarship,
                    post_grad_plans,
                    notes,
                    email,
                    notify_comments: input.notify_comments,
                })
            }
            _ => Err(PostValidationError { fields: errors.0 }),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn valid_input() -> PostInput {
        PostInput {
            degree_type: "MS".to_string(),
            major: "Computer Science".to_string(),
            university: "Stanford University".to_string(),
            country: "USA".to_string(),
            year: Some(2025),
            term: Some("FALL".to_string()),
            application_round: "Round 1".to_string(),
            status: "ACCEPTED".to_string(),
            student_type: "INTERNATIONAL".to_string(),
            ..PostInput::default()
        }
    }

    pub fn valid_command() -> PostCommand {
        PostCommand::new(valid_input()).unwrap()
    }
}
