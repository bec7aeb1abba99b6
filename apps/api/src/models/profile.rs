use serde::{Deserialize, Serialize};

use crate::models::icon::Icon;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub summary: String,
    pub contact_links: Vec<ContactLink>,
    pub projects: Vec<FeaturedProject>,
    pub experience: Vec<Experience>,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactLink {
    pub icon: Icon,
    pub label: String,
    pub value: String,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedProject {
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub github: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}
