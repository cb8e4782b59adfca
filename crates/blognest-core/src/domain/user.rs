use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

/// Generated avatar for the given seed.
pub fn avatar_url(seed: &str) -> String {
    format!("{AVATAR_BASE_URL}{seed}")
}

/// How a user signed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    #[default]
    Email,
    Google,
    Github,
    Twitter,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Email => "email",
            AuthProvider::Google => "google",
            AuthProvider::Github => "github",
            AuthProvider::Twitter => "twitter",
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Third-party providers whose sign-in flow is simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OAuthProvider {
    Google,
    Github,
    Twitter,
}

impl OAuthProvider {
    /// Display name and email of the account every simulated sign-in returns.
    fn profile(self) -> (&'static str, &'static str) {
        match self {
            OAuthProvider::Google => ("Google User", "user@gmail.com"),
            OAuthProvider::Github => ("GitHub Developer", "developer@github.com"),
            OAuthProvider::Twitter => ("Twitter User", "user@twitter.com"),
        }
    }
}

impl From<OAuthProvider> for AuthProvider {
    fn from(provider: OAuthProvider) -> Self {
        match provider {
            OAuthProvider::Google => AuthProvider::Google,
            OAuthProvider::Github => AuthProvider::Github,
            OAuthProvider::Twitter => AuthProvider::Twitter,
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown sign-in provider: {0}")]
pub struct UnknownProvider(pub String);

impl FromStr for OAuthProvider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "google" => Ok(OAuthProvider::Google),
            "github" => Ok(OAuthProvider::Github),
            "twitter" => Ok(OAuthProvider::Twitter),
            _ => Err(UnknownProvider(s.to_string())),
        }
    }
}

/// User entity - the authenticated session's account record.
///
/// This is also the exact shape persisted to local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub provider: AuthProvider,
}

impl User {
    /// An email/password account created at `id_millis`.
    pub fn with_email(id_millis: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        let email = email.into();
        Self {
            id: id_millis.to_string(),
            name: name.into(),
            avatar: avatar_url(&email),
            email,
            provider: AuthProvider::Email,
        }
    }

    /// The fixed account returned by a simulated third-party sign-in.
    pub fn from_oauth(provider: OAuthProvider, id_millis: i64) -> Self {
        let (name, email) = provider.profile();
        let provider = AuthProvider::from(provider);
        Self {
            id: format!("{provider}_{id_millis}"),
            name: name.to_string(),
            email: email.to_string(),
            avatar: avatar_url(provider.as_str()),
            provider,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_user_avatar_is_seeded_by_email() {
        let user = User::with_email(1700, "jane", "jane@example.com");
        assert_eq!(user.id, "1700");
        assert_eq!(
            user.avatar,
            "https://api.dicebear.com/7.x/avataaars/svg?seed=jane@example.com"
        );
        assert_eq!(user.provider, AuthProvider::Email);
    }

    #[test]
    fn test_oauth_users_are_provider_specific() {
        let user = User::from_oauth(OAuthProvider::Github, 99);
        assert_eq!(user.id, "github_99");
        assert_eq!(user.name, "GitHub Developer");
        assert_eq!(user.email, "developer@github.com");
        assert_eq!(
            user.avatar,
            "https://api.dicebear.com/7.x/avataaars/svg?seed=github"
        );
        assert_eq!(user.provider, AuthProvider::Github);
    }

    #[test]
    fn test_provider_parsing() {
        assert_eq!("Google".parse::<OAuthProvider>().unwrap(), OAuthProvider::Google);
        assert_eq!("twitter".parse::<OAuthProvider>().unwrap(), OAuthProvider::Twitter);
        assert!("email".parse::<OAuthProvider>().is_err());
        assert!("myspace".parse::<OAuthProvider>().is_err());
    }

    #[test]
    fn test_persisted_record_shape() {
        let user = User::from_oauth(OAuthProvider::Twitter, 5);
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "twitter_5",
                "name": "Twitter User",
                "email": "user@twitter.com",
                "avatar": "https://api.dicebear.com/7.x/avataaars/svg?seed=twitter",
                "provider": "twitter",
            })
        );

        let back: User = serde_json::from_value(json).unwrap();
        assert_eq!(back, user);
    }
}
