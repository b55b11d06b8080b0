use crate::domain::inquiries::{Inquiry, InquiryStatus};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct InquiryDbModel {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub course_interested: String,
    pub message: Option<String>,
    pub status: String,
    pub created_at: OffsetDateTime,
}

impl TryFrom<InquiryDbModel> for Inquiry {
    type Error = anyhow::Error;

    fn try_from(model: InquiryDbModel) -> Result<Self, Self::Error> {
        let status: InquiryStatus = model.status.parse()?;
        Ok(Self {
            id: model.id,
            name: model.name,
            phone: model.phone,
            email: model.email,
            course_interested: model.course_interested,
            message: model.message,
            status,
            created_at: model.created_at,
        })
    }
}
