use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::profile::application::domain::entities::{EducationEntry, ExperienceEntry, Social};
use crate::shared::validation::{
    is_blank, is_handle, is_url, length_between, parse_date, ValidationErrors,
};

pub const HANDLE_MIN: usize = 2;
pub const HANDLE_MAX: usize = 40;

/// Body of `POST /api/profile`. Social links arrive flat, skills as a
/// comma-separated string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileInput {
    pub handle: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: String,
    pub github_username: Option<String>,
    pub skills: String,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExperienceInput {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: String,
    pub to: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EducationInput {
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: String,
    pub to: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

/// Profile fields after validation, ready to be written into a document.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileFields {
    pub handle: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: String,
    pub github_username: Option<String>,
    pub skills: Vec<String>,
    pub social: Social,
}

/// Trimmed value, `None` when blank.
fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

fn check_url(errors: &mut ValidationErrors, field: &str, value: &Option<String>) {
    if let Some(url) = present(value) {
        if !is_url(&url) {
            errors.add(field, "Not a valid URL");
        }
    }
}

/// Validates the `from`/`to` pair and returns the parsed dates.
fn check_dates(
    errors: &mut ValidationErrors,
    from: &str,
    to: &Option<String>,
    current: bool,
) -> Option<(NaiveDate, Option<NaiveDate>)> {
    let from = if is_blank(Some(from)) {
        errors.add("from", "From date field is required");
        None
    } else {
        let parsed = parse_date(from);
        if parsed.is_none() {
            errors.add("from", "From date must be formatted as YYYY-MM-DD");
        }
        parsed
    };

    // A current position has no end date.
    let to = match present(to) {
        Some(_) if current => None,
        Some(raw) => match parse_date(&raw) {
            Some(date) => Some(date),
            None => {
                errors.add("to", "To date must be formatted as YYYY-MM-DD");
                return None;
            }
        },
        None => None,
    };

    let from = from?;
    if let Some(end) = to {
        if end < from {
            errors.add("to", "To date cannot be before from date");
            return None;
        }
    }

    Some((from, to))
}

pub fn validate_profile_input(input: &ProfileInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if is_blank(Some(&input.handle)) {
        errors.add("handle", "Profile handle is required");
    } else if !length_between(&input.handle, HANDLE_MIN, HANDLE_MAX) {
        errors.add("handle", "Handle needs to be between 2 and 40 characters");
    } else if !is_handle(&input.handle) {
        errors.add(
            "handle",
            "Handle may only contain letters, digits, underscores and dashes",
        );
    }

    if is_blank(Some(&input.status)) {
        errors.add("status", "Status field is required");
    }

    if split_skills(&input.skills).is_empty() {
        errors.add("skills", "Skills field is required");
    }

    check_url(&mut errors, "website", &input.website);
    check_url(&mut errors, "youtube", &input.youtube);
    check_url(&mut errors, "twitter", &input.twitter);
    check_url(&mut errors, "facebook", &input.facebook);
    check_url(&mut errors, "linkedin", &input.linkedin);
    check_url(&mut errors, "instagram", &input.instagram);

    errors
}

type Dates = Option<(NaiveDate, Option<NaiveDate>)>;

fn experience_checks(input: &ExperienceInput) -> (ValidationErrors, Dates) {
    let mut errors = ValidationErrors::new();

    if is_blank(Some(&input.title)) {
        errors.add("title", "Job title field is required");
    }
    if is_blank(Some(&input.company)) {
        errors.add("company", "Company field is required");
    }
    let dates = check_dates(&mut errors, &input.from, &input.to, input.current);

    (errors, dates)
}

fn education_checks(input: &EducationInput) -> (ValidationErrors, Dates) {
    let mut errors = ValidationErrors::new();

    if is_blank(Some(&input.school)) {
        errors.add("school", "School field is required");
    }
    if is_blank(Some(&input.degree)) {
        errors.add("degree", "Degree field is required");
    }
    if is_blank(Some(&input.field_of_study)) {
        errors.add("field_of_study", "Field of study field is required");
    }
    let dates = check_dates(&mut errors, &input.from, &input.to, input.current);

    (errors, dates)
}

/// Every failed date check records an error, so valid input always has dates.
fn require_dates(
    errors: ValidationErrors,
    dates: Dates,
) -> Result<(NaiveDate, Option<NaiveDate>), ValidationErrors> {
    errors.into_result()?;
    dates.ok_or_else(|| ValidationErrors::single("from", "From date field is required"))
}

pub fn parse_profile(input: &ProfileInput) -> Result<ProfileFields, ValidationErrors> {
    validate_profile_input(input).into_result()?;

    Ok(ProfileFields {
        handle: input.handle.trim().to_string(),
        company: present(&input.company),
        website: present(&input.website),
        location: present(&input.location),
        bio: present(&input.bio),
        status: input.status.trim().to_string(),
        github_username: present(&input.github_username),
        skills: split_skills(&input.skills),
        social: Social {
            youtube: present(&input.youtube),
            twitter: present(&input.twitter),
            linkedin: present(&input.linkedin),
            facebook: present(&input.facebook),
            instagram: present(&input.instagram),
        },
    })
}

/// Validates the input and builds an entry with a fresh id.
pub fn parse_experience(input: &ExperienceInput) -> Result<ExperienceEntry, ValidationErrors> {
    let (errors, dates) = experience_checks(input);
    let (from, to) = require_dates(errors, dates)?;

    Ok(ExperienceEntry {
        id: Uuid::new_v4(),
        title: input.title.trim().to_string(),
        company: input.company.trim().to_string(),
        location: present(&input.location),
        from,
        to,
        current: input.current,
        description: present(&input.description),
    })
}

/// Validates the input and builds an entry with a fresh id.
pub fn parse_education(input: &EducationInput) -> Result<EducationEntry, ValidationErrors> {
    let (errors, dates) = education_checks(input);
    let (from, to) = require_dates(errors, dates)?;

    Ok(EducationEntry {
        id: Uuid::new_v4(),
        school: input.school.trim().to_string(),
        degree: input.degree.trim().to_string(),
        field_of_study: input.field_of_study.trim().to_string(),
        from,
        to,
        current: input.current,
        description: present(&input.description),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_input() -> ProfileInput {
        ProfileInput {
            handle: "jane_doe".to_string(),
            status: "Developer".to_string(),
            skills: "rust, sql ,, actix ".to_string(),
            ..Default::default()
        }
    }

    fn experience_input() -> ExperienceInput {
        ExperienceInput {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            from: "2019-03-01".to_string(),
            to: Some("2021-06-30".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn skills_are_split_and_trimmed() {
        let fields = parse_profile(&profile_input()).unwrap();
        assert_eq!(fields.skills, vec!["rust", "sql", "actix"]);
    }

    #[test]
    fn blank_optional_fields_become_absent() {
        let mut input = profile_input();
        input.company = Some("   ".to_string());
        input.twitter = Some("".to_string());

        let fields = parse_profile(&input).unwrap();
        assert_eq!(fields.company, None);
        assert_eq!(fields.social.twitter, None);
    }

    #[test]
    fn profile_requires_handle_status_and_skills() {
        let errors = validate_profile_input(&ProfileInput::default());

        assert_eq!(errors.get("handle"), Some("Profile handle is required"));
        assert_eq!(errors.get("status"), Some("Status field is required"));
        assert_eq!(errors.get("skills"), Some("Skills field is required"));
    }

    #[test]
    fn handle_length_and_charset_are_checked() {
        let mut input = profile_input();
        input.handle = "j".to_string();
        assert!(validate_profile_input(&input).get("handle").is_some());

        input.handle = "jane doe!".to_string();
        assert!(validate_profile_input(&input).get("handle").is_some());

        input.handle = "a".repeat(41);
        assert!(validate_profile_input(&input).get("handle").is_some());
    }

    #[test]
    fn social_links_must_be_urls() {
        let mut input = profile_input();
        input.website = Some("not a url".to_string());
        input.linkedin = Some("https://linkedin.com/in/jane".to_string());

        let errors = validate_profile_input(&input);
        assert_eq!(errors.get("website"), Some("Not a valid URL"));
        assert_eq!(errors.get("linkedin"), None);
    }

    #[test]
    fn experience_requires_title_company_and_from() {
        let errors = parse_experience(&ExperienceInput::default()).unwrap_err();

        assert_eq!(errors.get("title"), Some("Job title field is required"));
        assert_eq!(errors.get("company"), Some("Company field is required"));
        assert_eq!(errors.get("from"), Some("From date field is required"));
    }

    #[test]
    fn end_date_before_start_is_rejected() {
        let mut input = experience_input();
        input.to = Some("2018-01-01".to_string());

        let errors = parse_experience(&input).unwrap_err();
        assert_eq!(errors.get("to"), Some("To date cannot be before from date"));
    }

    #[test]
    fn malformed_date_is_rejected() {
        let mut input = experience_input();
        input.from = "03/01/2019".to_string();

        let errors = parse_experience(&input).unwrap_err();
        assert!(errors.get("from").is_some());
    }

    #[test]
    fn current_entry_drops_end_date() {
        let mut input = experience_input();
        input.current = true;

        let entry = parse_experience(&input).unwrap();
        assert!(entry.current);
        assert_eq!(entry.to, None);
    }

    #[test]
    fn education_requires_school_degree_and_field() {
        let errors = parse_education(&EducationInput {
            from: "2015-09-01".to_string(),
            ..Default::default()
        })
        .unwrap_err();

        assert_eq!(errors.get("school"), Some("School field is required"));
        assert_eq!(errors.get("degree"), Some("Degree field is required"));
        assert_eq!(
            errors.get("field_of_study"),
            Some("Field of study field is required")
        );
        assert_eq!(errors.get("from"), None);
    }

    #[test]
    fn valid_education_gets_a_fresh_id() {
        let input = EducationInput {
            school: "MIT".to_string(),
            degree: "BSc".to_string(),
            field_of_study: "CS".to_string(),
            from: "2015-09-01".to_string(),
            to: Some("2019-06-01".to_string()),
            ..Default::default()
        };

        let first = parse_education(&input).unwrap();
        let second = parse_education(&input).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(first.to, NaiveDate::from_ymd_opt(2019, 6, 1));
    }
}
