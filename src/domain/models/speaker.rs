//! Speaker Domain Model
//!
//! Speakers are referenced by talks. Their lifecycle is managed outside
//! this service: they are looked up, never created.

/// Newtype wrapper for Speaker ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpeakerId(i32);

impl SpeakerId {
    #[must_use]
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for SpeakerId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SpeakerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Speaker entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Speaker {
    pub id: SpeakerId,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub company_url: Option<String>,
    pub blog_url: Option<String>,
    pub twitter: Option<String>,
    pub github: Option<String>,
}

impl Speaker {
    /// Create a speaker with only the required name parts set
    #[must_use]
    pub fn named(id: SpeakerId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            middle_name: None,
            last_name: last_name.into(),
            bio: None,
            company: None,
            company_url: None,
            blog_url: None,
            twitter: None,
            github: None,
        }
    }
}
