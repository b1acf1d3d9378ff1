use serde::{Deserialize, Serialize};

/// Placeholder shown for fields the remote service left empty
pub const NOT_AVAILABLE: &str = "Not available";

/// Maximum number of characters in `User::initials`
const MAX_INITIALS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub company: Option<Company>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub suite: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Company {
    #[serde(default)]
    pub name: String,
}

impl User {
    /// Up to two uppercase initials taken from the words of the name
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(MAX_INITIALS)
            .collect()
    }

    /// Case-insensitive match of `query` against name or email.
    /// An empty query matches every user.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query) || self.email.to_lowercase().contains(&query)
    }

    pub fn company_name(&self) -> Option<&str> {
        self.company
            .as_ref()
            .map(|c| c.name.as_str())
            .filter(|n| !n.is_empty())
    }

    pub fn city(&self) -> Option<&str> {
        self.address
            .as_ref()
            .map(|a| a.city.as_str())
            .filter(|c| !c.is_empty())
    }
}

impl Address {
    /// Single-line form, skipping empty parts
    pub fn one_line(&self) -> String {
        [&self.street, &self.suite, &self.city, &self.zipcode]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Users matching `query`, in their original order
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    users.iter().filter(|u| u.matches_query(query)).collect()
}

/// Returns `value`, or "Not available" when it is empty
pub fn display_or_default(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_AVAILABLE
    } else {
        value
    }
}
