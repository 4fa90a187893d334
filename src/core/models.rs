use std::fmt;

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
};

/// Mentor ids arrive either as JSON numbers or strings. They compare exactly,
/// so `1` and `"1"` are different mentors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MentorId {
    Number(i64),
    Text(String),
}

impl Default for MentorId {
    fn default() -> Self {
        MentorId::Text(String::new())
    }
}

impl fmt::Display for MentorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MentorId::Number(n) => write!(f, "{n}"),
            MentorId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for MentorId {
    fn from(value: i64) -> Self {
        MentorId::Number(value)
    }
}

impl From<&str> for MentorId {
    fn from(value: &str) -> Self {
        MentorId::Text(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Mentor {
    pub id: MentorId,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub org: String,
    #[serde(deserialize_with = "null_as_default")]
    pub interests: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub availability: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mode: String,
    pub grad_year: Option<i32>,
    #[serde(deserialize_with = "null_as_default")]
    pub notes: String,
    pub request_link: Option<String>,
}

/// Mentor files written by hand often carry `null` for blank fields.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Mentor {
    pub fn bucket(&self) -> Availability {
        Availability::from_text(&self.availability)
    }

    /// "role · org", the subtitle line shown on cards and in the detail dialog.
    pub fn role_line(&self) -> String {
        format!("{} · {}", self.role, self.org)
    }

    pub fn initials(&self) -> String {
        let parts: Vec<&str> = self.name.split_whitespace().collect();
        let first = parts.first().and_then(|p| p.chars().next()).unwrap_or('M');
        let second = match parts.len() {
            0 => None,
            1 => parts[0].chars().nth(1),
            n => parts[n - 1].chars().next(),
        };

        let mut out: String = first.to_uppercase().collect();
        if let Some(c) = second {
            out.extend(c.to_uppercase());
        }
        out
    }

    /// Lowercased text the search tokens are matched against.
    pub fn search_blob(&self) -> String {
        [
            self.name.as_str(),
            self.role.as_str(),
            self.org.as_str(),
            self.interests.join(" ").as_str(),
            self.notes.as_str(),
        ]
        .join(" | ")
        .to_lowercase()
    }
}

/// Coarse availability bucket derived from free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Availability {
    Available,
    Limited,
    Unavailable,
}

impl Availability {
    pub const ALL: [Availability; 3] =
        [Availability::Available, Availability::Limited, Availability::Unavailable];

    // "unavailable" and "limited availability" both contain "available",
    // so the negative and limited forms are checked first.
    pub fn from_text(text: &str) -> Self {
        let lower = text.to_lowercase();
        if lower.contains("unavailable") || lower.contains("not available") {
            Availability::Unavailable
        } else if lower.contains("limited") {
            Availability::Limited
        } else if lower.contains("available") {
            Availability::Available
        } else {
            Availability::Unavailable
        }
    }

    pub fn rank(self) -> u8 {
        match self {
            Availability::Available => 0,
            Availability::Limited => 1,
            Availability::Unavailable => 2,
        }
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Limited => "limited",
            Availability::Unavailable => "unavailable",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::Limited => "Limited",
            Availability::Unavailable => "Unavailable",
        }
    }
}
