use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserSummary;
use crate::shared::document::{Identified, Versioned};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl Identified for ExperienceEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl Identified for EducationEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// A user's profile document. Experience and education are newest-first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub handle: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: String,
    pub github_username: Option<String>,
    pub skills: Vec<String>,
    pub social: Social,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub version: i64,
}

impl Profile {
    pub fn experience_mut(&mut self) -> &mut Vec<ExperienceEntry> {
        &mut self.experience
    }

    pub fn education_mut(&mut self) -> &mut Vec<EducationEntry> {
        &mut self.education
    }
}

impl Versioned for Profile {
    fn version(&self) -> i64 {
        self.version
    }
}

/// Profile as returned to clients, with the owner's name and avatar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    #[serde(flatten)]
    pub profile: Profile,
    pub user: UserSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_flattens_profile_and_hides_version() {
        let owner = Uuid::new_v4();
        let view = ProfileView {
            profile: Profile {
                id: Uuid::new_v4(),
                user_id: owner,
                handle: "jane".to_string(),
                company: None,
                website: None,
                location: None,
                bio: None,
                status: "Developer".to_string(),
                github_username: None,
                skills: vec!["rust".to_string()],
                social: Social::default(),
                experience: vec![],
                education: vec![],
                created_at: Utc::now(),
                version: 7,
            },
            user: UserSummary {
                id: owner,
                name: "Jane".to_string(),
                avatar_url: "https://www.gravatar.com/avatar/x".to_string(),
            },
        };

        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["handle"], "jane");
        assert_eq!(json["user"]["name"], "Jane");
        assert!(json.get("version").is_none());
        assert!(json.get("date").is_some());
    }

    #[test]
    fn entry_dates_serialize_as_plain_dates() {
        let entry = ExperienceEntry {
            id: Uuid::new_v4(),
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: None,
            from: NaiveDate::from_ymd_opt(2020, 1, 15).unwrap(),
            to: None,
            current: true,
            description: None,
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["from"], "2020-01-15");
        assert!(json["to"].is_null());
    }
}
