//! Record types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The `{data: [...]}` envelope every list endpoint answers with.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Whether a supplier currently offers services.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupplierStatus {
    #[serde(rename = "activo")]
    Active,
    #[serde(rename = "inactivo")]
    Inactive,
    #[default]
    #[serde(other, rename = "desconocido")]
    Unknown,
}

impl SupplierStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupplierStatus::Active => "activo",
            SupplierStatus::Inactive => "inactivo",
            SupplierStatus::Unknown => "desconocido",
        }
    }
}

/// A service supplier (`/proveedor/listar`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub status: SupplierStatus,
}

/// An event organizer (`/organizador/listar`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organizer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub events_count: u32,
}

/// An attendee (`/asistente/listar`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attendee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub registration_date: String,
    pub attended_events: u32,
}

/// An event (`/events`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `POST /events`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: String,
}

impl NewEvent {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            date: date.into(),
        }
    }

    /// Check the event the way the create form does before submitting.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::Required { field: "title" });
        }
        if self.date.trim().is_empty() {
            return Err(ValidationError::Required { field: "date" });
        }
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").map_err(|e| {
            ValidationError::Invalid {
                field: "date",
                reason: format!("expected YYYY-MM-DD ({})", e),
            }
        })?;
        Ok(())
    }
}
