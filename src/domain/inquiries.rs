use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

/// Where an inquiry stands in the follow-up process.
///
/// Any status may be set from any other; the admin dashboard only ever moves
/// `new -> contacted` and `new | contacted -> completed`, but nothing here
/// forbids going back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    #[default]
    New,
    Contacted,
    Completed,
}

impl InquiryStatus {
    pub const ALL: [InquiryStatus; 3] = [
        InquiryStatus::New,
        InquiryStatus::Contacted,
        InquiryStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryStatus::New => "new",
            InquiryStatus::Contacted => "contacted",
            InquiryStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not a valid status (expected one of: new, contacted, completed)",
            self.0
        )
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for InquiryStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InquiryStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Inquiry {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub course_interested: String,
    pub message: Option<String>,
    pub status: InquiryStatus,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewInquiry {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub course_interested: String,
    pub message: Option<String>,
}

#[async_trait]
pub trait InquiryRepository: Send + Sync {
    /// Stores a new inquiry with status `new` and the current time.
    async fn create(&self, new_inquiry: NewInquiry) -> Result<Inquiry, anyhow::Error>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Inquiry>, anyhow::Error>;
    /// Newest first.
    async fn find_all(&self) -> Result<Vec<Inquiry>, anyhow::Error>;
    /// Returns `None` when no inquiry has this id.
    async fn update_status(
        &self,
        id: Uuid,
        status: InquiryStatus,
    ) -> Result<Option<Inquiry>, anyhow::Error>;
    async fn delete(&self, id: Uuid) -> Result<bool, anyhow::Error>;
}
