use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::{Identity, User, UserId};
use crate::post::application::domain::entities::Post;
use crate::profile::application::domain::entities::{
    EducationEntry, ExperienceEntry, Profile, Social,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn identity_of(user: &User) -> Identity {
    Identity {
        user_id: UserId::from(user.id),
        name: user.name.clone(),
        avatar_url: user.avatar_url.clone(),
    }
}

/// Minimal valid profile with empty nested collections.
pub fn profile_for(user_id: Uuid, handle: &str) -> Profile {
    Profile {
        id: Uuid::new_v4(),
        user_id,
        handle: handle.to_string(),
        company: None,
        website: None,
        location: None,
        bio: None,
        status: "Developer".to_string(),
        github_username: None,
        skills: vec!["rust".to_string(), "sql".to_string()],
        social: Social::default(),
        experience: Vec::new(),
        education: Vec::new(),
        created_at: Utc::now(),
        version: 0,
    }
}

pub fn experience(title: &str) -> ExperienceEntry {
    ExperienceEntry {
        id: Uuid::new_v4(),
        title: title.to_string(),
        company: "Acme".to_string(),
        location: None,
        from: date(2019, 1, 1),
        to: Some(date(2020, 6, 30)),
        current: false,
        description: None,
    }
}

pub fn education(school: &str) -> EducationEntry {
    EducationEntry {
        id: Uuid::new_v4(),
        school: school.to_string(),
        degree: "BSc".to_string(),
        field_of_study: "Computer Science".to_string(),
        from: date(2012, 9, 1),
        to: Some(date(2016, 6, 30)),
        current: false,
        description: None,
    }
}

pub fn post_by(user_id: Uuid, text: &str) -> Post {
    Post {
        id: Uuid::new_v4(),
        user_id,
        text: text.to_string(),
        name: "Post Author".to_string(),
        avatar_url: "https://www.gravatar.com/avatar/author".to_string(),
        likes: Vec::new(),
        comments: Vec::new(),
        created_at: Utc::now(),
        version: 0,
    }
}
