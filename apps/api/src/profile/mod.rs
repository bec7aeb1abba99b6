//! Portfolio profile content: hero text, featured projects, experience,
//! skills and contact links. Embedded at compile time.

pub mod handlers;

use thiserror::Error;

use crate::models::profile::Profile;

const EMBEDDED_PROFILE: &str = include_str!("../../data/profile.json");

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Profile JSON is invalid: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Profile has a blank name")]
    BlankName,

    #[error("Profile lists no experience")]
    NoExperience,
}

impl Profile {
    pub fn embedded() -> Result<Self, ProfileError> {
        Self::from_json(EMBEDDED_PROFILE)
    }

    pub fn from_json(raw: &str) -> Result<Self, ProfileError> {
        let profile: Profile = serde_json::from_str(raw)?;
        if profile.name.trim().is_empty() {
            return Err(ProfileError::BlankName);
        }
        if profile.experience.is_empty() {
            return Err(ProfileError::NoExperience);
        }
        Ok(profile)
    }
}
