//! Common types used across the frontend application.
//!
//! This module centralizes the wire types of the registration API and
//! the small UI enums shared between services and components.
//!
//! # Categories
//!
//! - **Request Types** - Bodies sent to the API
//! - **API Response Types** - Bodies received from the API
//! - **UI Types** - Notification kinds

use serde::{Deserialize, Serialize};

// =============================================================================
// Request Types
// =============================================================================

/// Registration form payload.
///
/// Built fresh for every submission from the form fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    /// Registrant's full name (required)
    pub full_name: String,
    /// Contact email (required)
    pub email: String,
    /// Institution or organization (required)
    pub affiliation: String,
    /// Phone number
    pub phone: Option<String>,
    /// Free-text research interests
    pub interests: Option<String>,
}

impl RegistrationRequest {
    /// Copy with required fields trimmed and blank optional fields
    /// turned into `None`.
    pub fn normalized(&self) -> Self {
        fn optional(value: &Option<String>) -> Option<String> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        }

        Self {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            affiliation: self.affiliation.trim().to_string(),
            phone: optional(&self.phone),
            interests: optional(&self.interests),
        }
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Raw body of `POST /api/register`.
///
/// Either `{success:true, message, emailSent}` or `{success:false, error}`.
/// A missing `success` counts as a rejection.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub email_sent: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Interpreted registration outcome.
#[derive(Clone, Debug, PartialEq)]
pub enum RegistrationResult {
    /// The server accepted the registration.
    Registered { message: String, email_sent: bool },
    /// The server refused it; `error` is its explanation, if any.
    Rejected { error: Option<String> },
}

impl From<RegisterResponse> for RegistrationResult {
    fn from(response: RegisterResponse) -> Self {
        if response.success {
            RegistrationResult::Registered {
                message: response.message.unwrap_or_default(),
                email_sent: response.email_sent,
            }
        } else {
            RegistrationResult::Rejected {
                error: response.error.filter(|e| !e.trim().is_empty()),
            }
        }
    }
}

/// Aggregate registration counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// All registrations so far
    pub total: u64,
    /// Registrations received today
    pub today: u64,
}

/// Raw body of `GET /api/stats`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub success: bool,
    #[serde(default)]
    pub stats: Option<StatsSnapshot>,
}

/// A registration as stored by the server. Display-only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub full_name: String,
    pub affiliation: String,
    /// Server timestamp, usually ISO-8601
    pub registration_date: String,
    #[serde(default)]
    pub email_sent: bool,
}

/// Raw body of `GET /api/registration/{email}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LookupResponse {
    pub success: bool,
    #[serde(default)]
    pub registration: Option<RegistrationRecord>,
    #[serde(default)]
    pub error: Option<String>,
}

// =============================================================================
// UI Types
// =============================================================================

/// Notification banner flavor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification notification-success",
            NotificationKind::Error => "notification notification-error",
        }
    }

    /// Font Awesome icon class.
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "fas fa-check-circle",
            NotificationKind::Error => "fas fa-exclamation-circle",
        }
    }
}
