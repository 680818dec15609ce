//! User models

use serde::Deserialize;

/// A user returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserResponse {
    /// User id
    #[serde(default)]
    pub id: Option<u32>,
    /// Full name
    #[serde(default)]
    pub name: Option<String>,
    /// Login name
    #[serde(default)]
    pub username: Option<String>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Website
    #[serde(default)]
    pub website: Option<String>,
    /// Postal address
    #[serde(default)]
    pub address: Option<Address>,
    /// Employer
    #[serde(default)]
    pub company: Option<Company>,
}

/// Postal address of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Address {
    /// Street
    #[serde(default)]
    pub street: Option<String>,
    /// Suite
    #[serde(default)]
    pub suite: Option<String>,
    /// City
    #[serde(default)]
    pub city: Option<String>,
    /// Zip code
    #[serde(default)]
    pub zipcode: Option<String>,
}

/// Employer of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Company name
    #[serde(default)]
    pub name: Option<String>,
    /// Slogan
    #[serde(default)]
    pub catch_phrase: Option<String>,
    /// Business summary
    #[serde(default)]
    pub bs: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_user() {
        let user: UserResponse = serde_json::from_value(json!({
            "id": 1,
            "name": "Leanne Graham",
            "email": "Sincere@april.biz",
            "address": {"city": "Gwenborough", "geo": {"lat": "-37.3159"}},
            "company": {"name": "Romaguera-Crona", "catchPhrase": "Multi-layered"}
        }))
        .unwrap();

        assert_eq!(user.id, Some(1));
        assert_eq!(
            user.address.and_then(|a| a.city).as_deref(),
            Some("Gwenborough")
        );
        assert_eq!(
            user.company.and_then(|c| c.catch_phrase).as_deref(),
            Some("Multi-layered")
        );
        assert_eq!(user.phone, None);
    }
}
