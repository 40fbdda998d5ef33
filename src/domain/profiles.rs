//! Profile domain types
//!
//! The directory's sole entity, plus the form-shaped draft the admin
//! create/edit flows submit.

use serde::{Deserialize, Serialize};

/// A directory entry.
///
/// Serialized as camelCase JSON; this is also the persisted layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Assigned by the service on creation and immutable afterwards.
    pub id: i64,
    pub name: String,
    pub description: String,
    pub full_description: String,
    pub address: String,
    pub city: String,
    /// Photo URL shown on cards and the detail page.
    pub photo: String,
    /// Degrees in [-90, 90]. Always a number, even though forms collect text.
    pub latitude: f64,
    /// Degrees in [-180, 180].
    pub longitude: f64,
    #[serde(default)]
    pub contact: ContactInfo,
    /// Display order is preserved as entered.
    #[serde(default)]
    pub interests: Vec<String>,
}

impl Profile {
    /// Address for display, with a fallback when the field is blank.
    pub fn display_address(&self) -> &str {
        if self.address.trim().is_empty() {
            "Address not available"
        } else {
            &self.address
        }
    }
}

/// Contact details attached to a profile. Both fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Form-shaped input for add and update.
///
/// Latitude and longitude arrive as text because the forms collect them in
/// plain inputs; the service coerces them to numbers when the record is
/// stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub full_description: String,
    pub address: String,
    pub city: String,
    pub photo: String,
    pub latitude: String,
    pub longitude: String,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl ProfileDraft {
    /// Form-boundary cleanup: trims every text field, drops empty contact
    /// entries, and falls back to the short description when the full one
    /// was left blank.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.description = self.description.trim().to_string();
        self.full_description = self.full_description.trim().to_string();
        if self.full_description.is_empty() {
            self.full_description = self.description.clone();
        }
        self.address = self.address.trim().to_string();
        self.city = self.city.trim().to_string();
        self.photo = self.photo.trim().to_string();
        self.latitude = self.latitude.trim().to_string();
        self.longitude = self.longitude.trim().to_string();
        self.contact.email = self
            .contact
            .email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
        self.contact.phone = self
            .contact
            .phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
        self.interests = self
            .interests
            .into_iter()
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .collect();
        self
    }

    /// Split the comma-separated interests line the forms collect into the
    /// stored list.
    pub fn parse_interests(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|i| !i.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Prefill for the edit form.
impl From<&Profile> for ProfileDraft {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            description: profile.description.clone(),
            full_description: profile.full_description.clone(),
            address: profile.address.clone(),
            city: profile.city.clone(),
            photo: profile.photo.clone(),
            latitude: profile.latitude.to_string(),
            longitude: profile.longitude.to_string(),
            contact: profile.contact.clone(),
            interests: profile.interests.clone(),
        }
    }
}

/// Coerce a raw route parameter into a profile id.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
