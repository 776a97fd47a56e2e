//! Request-side types: what the caller asks the profile service to do.

use serde::{Deserialize, Serialize};

use crate::impl_domain_label_display;

/// Client-supplied partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }
}

/// Operation requested against the target identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileAction {
    /// Read the record (still records the access).
    View,
    /// Read the record and apply the patch.
    Update(ProfilePatch),
}

impl ProfileAction {
    pub fn kind(&self) -> RequestKind {
        match self {
            Self::View => RequestKind::Read,
            Self::Update(_) => RequestKind::Mutate,
        }
    }
}

/// Read vs. mutate, as a loggable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Read,
    Mutate,
}

impl_domain_label_display!(RequestKind {
    Read => "read",
    Mutate => "mutate",
});

/// Which side of a request an identity lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityRole {
    Acting,
    Target,
}

impl_domain_label_display!(IdentityRole {
    Acting => "acting",
    Target => "target",
});
