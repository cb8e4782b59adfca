//! Form input checks.
//!
//! Every failure is a [`DomainError::Validation`] carrying the message shown
//! to the user. Checks run in a fixed order and the first failure wins.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{DEFAULT_FEATURED_IMAGE, NewPost, excerpt};
use crate::error::DomainError;

/// Minimum password length accepted by the registration form.
pub const REGISTRATION_PASSWORD_MIN: usize = 8;

/// Author recorded when neither the form nor the session names one.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

pub const MSG_REQUIRED_FIELDS: &str = "Please fill in all required fields";
pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address";
pub const MSG_INVALID_PHONE: &str = "Please enter a valid phone number";
pub const MSG_POST_REQUIRED: &str = "Title and content are required";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[\d\s\-()]{10,}$").expect("valid phone regex"));

fn invalid(msg: &str) -> DomainError {
    DomainError::Validation(msg.to_string())
}

/// The account registration form.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub bio: Option<String>,
    pub password: String,
    pub confirm_password: String,
}

/// A registration that passed every form check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<Registration, DomainError> {
        let required = [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.password,
            &self.confirm_password,
        ];
        if required.iter().any(|field| field.is_empty()) {
            return Err(invalid(MSG_REQUIRED_FIELDS));
        }

        if self.password != self.confirm_password {
            return Err(invalid(MSG_PASSWORD_MISMATCH));
        }

        if self.password.chars().count() < REGISTRATION_PASSWORD_MIN {
            return Err(invalid(MSG_PASSWORD_TOO_SHORT));
        }

        if !EMAIL_RE.is_match(&self.email) {
            return Err(invalid(MSG_INVALID_EMAIL));
        }

        // Optional, but checked when given.
        if let Some(phone) = self.phone_number.as_deref().filter(|p| !p.is_empty()) {
            if !PHONE_RE.is_match(phone) {
                return Err(invalid(MSG_INVALID_PHONE));
            }
        }

        Ok(Registration {
            name: format!("{} {}", self.first_name, self.last_name),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// The create-post form.
#[derive(Debug, Clone, Default)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub featured_image: Option<String>,
    /// Comma separated.
    pub tags: String,
    pub author: Option<String>,
}

impl PostForm {
    /// Turn the form into a post ready for the store.
    ///
    /// `session_author` is the signed-in user's name, used when the form
    /// leaves the author blank.
    pub fn into_new_post(self, session_author: Option<&str>) -> Result<NewPost, DomainError> {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            return Err(invalid(MSG_POST_REQUIRED));
        }

        let featured_image = self
            .featured_image
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FEATURED_IMAGE.to_string());

        let author = self
            .author
            .filter(|name| !name.trim().is_empty())
            .or_else(|| session_author.map(str::to_string))
            .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string());

        Ok(NewPost {
            excerpt: excerpt(&self.content),
            tags: parse_tags(&self.tags),
            title: self.title,
            content: self.content,
            featured_image,
            author,
        })
    }
}

/// Split a comma separated tag list, trimming and dropping empty entries.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
