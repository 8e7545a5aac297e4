use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── FTM record ──────────────────────────────────────────────────────

/// An FTM chip detail registered by a partner, as returned by the
/// partner-management API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FtmRecord {
    pub ftm_id: String,
    pub partner_id: String,
    pub make: String,
    pub model: String,
    pub status: FtmStatus,
    pub created_date_time: DateTime<Utc>,
    pub certificate_upload_date_time: Option<DateTime<Utc>>,
    pub certificate_expiry_date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_certificate_available: bool,
}

// ── Lifecycle status ────────────────────────────────────────────────

/// Lifecycle status of an FTM chip detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FtmStatus {
    Approved,
    Rejected,
    PendingApproval,
    PendingCertUpload,
    Deactivated,
}

/// Semantic tone of a status, mapped to a badge style by the UI layer.
///
/// Every screen showing an FTM status renders through this one mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Warning,
    Danger,
    Neutral,
}

impl FtmStatus {
    /// Display label shown in status badges.
    pub fn label(&self) -> &'static str {
        match self {
            FtmStatus::Approved => "Approved",
            FtmStatus::Rejected => "Rejected",
            FtmStatus::PendingApproval => "Pending Approval",
            FtmStatus::PendingCertUpload => "Pending Certificate Upload",
            FtmStatus::Deactivated => "Deactivated",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            FtmStatus::Approved => StatusTone::Success,
            FtmStatus::PendingApproval | FtmStatus::PendingCertUpload => StatusTone::Warning,
            FtmStatus::Rejected => StatusTone::Danger,
            FtmStatus::Deactivated => StatusTone::Neutral,
        }
    }
}

// ── Detail view context ─────────────────────────────────────────────

/// Which action set the detail screen exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailMode {
    /// Read-only: certificate download only.
    View,
    /// Certificate lifecycle management: upload/re-upload plus download.
    Manage,
}

/// Navigation payload handed from the FTM list screen to the detail
/// screen. Lives for the duration of the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FtmDetailContext {
    pub record: FtmRecord,
    pub mode: DetailMode,
}
