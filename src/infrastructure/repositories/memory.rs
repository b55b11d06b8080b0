//! In-process repositories, used when no `DATABASE_URL` is configured and by tests.
//!
//! Every collection sits behind one `RwLock`; an operation holds the lock for its
//! whole read-modify-write, so concurrent updates and deletes of one id serialize.

use crate::domain::auth::RevokedTokenRepository;
use crate::domain::courses::{Course, CourseRepository, NewCourse, UpdateCourse};
use crate::domain::inquiries::{Inquiry, InquiryRepository, InquiryStatus, NewInquiry};
use crate::domain::notices::{NewNotice, Notice, NoticeRepository};
use crate::domain::reviews::{NewReview, Review, ReviewRepository};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug)]
struct Table<T> {
    rows: Arc<RwLock<T>>,
}

impl<T> Clone for Table<T> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<T: Default> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Arc::new(RwLock::new(T::default())),
        }
    }
}

impl<T> Table<T> {
    fn read(&self) -> Result<RwLockReadGuard<'_, T>> {
        self.rows
            .read()
            .map_err(|_| anyhow::anyhow!("in-memory store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, T>> {
        self.rows
            .write()
            .map_err(|_| anyhow::anyhow!("in-memory store lock poisoned"))
    }
}

fn remove_by_id<T>(rows: &mut Vec<T>, id: Uuid, id_of: impl Fn(&T) -> Uuid) -> bool {
    match rows.iter().position(|row| id_of(row) == id) {
        Some(index) => {
            rows.remove(index);
            true
        }
        None => false,
    }
}

/// Insertion order is kept; listing reverses it for newest-first collections.
#[derive(Clone, Default)]
pub struct InMemoryInquiryRepository {
    table: Table<Vec<Inquiry>>,
}

#[async_trait]
impl InquiryRepository for InMemoryInquiryRepository {
    async fn create(&self, new_inquiry: NewInquiry) -> Result<Inquiry> {
        let inquiry = Inquiry {
            id: Uuid::new_v4(),
            name: new_inquiry.name,
            phone: new_inquiry.phone,
            email: new_inquiry.email,
            course_interested: new_inquiry.course_interested,
            message: new_inquiry.message,
            status: InquiryStatus::New,
            created_at: OffsetDateTime::now_utc(),
        };
        self.table.write()?.push(inquiry.clone());
        Ok(inquiry)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Inquiry>> {
        Ok(self.table.read()?.iter().find(|i| i.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Inquiry>> {
        Ok(self.table.read()?.iter().rev().cloned().collect())
    }

    async fn update_status(&self, id: Uuid, status: InquiryStatus) -> Result<Option<Inquiry>> {
        let mut rows = self.table.write()?;
        Ok(rows.iter_mut().find(|i| i.id == id).map(|inquiry| {
            inquiry.status = status;
            inquiry.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        Ok(remove_by_id(&mut *self.table.write()?, id, |i| i.id))
    }
}

#[derive(Clone, Default)]
pub struct InMemoryCourseRepository {
    table: Table<Vec<Course>>,
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn create(&self, new_course: NewCourse) -> Result<Course> {
        let course = Course {
            id: Uuid::new_v4(),
            name: new_course.name,
            stream: new_course.stream,
            course_type: new_course.course_type,
            description: new_course.description,
            duration: new_course.duration,
            features: new_course.features,
            created_at: OffsetDateTime::now_utc(),
        };
        self.table.write()?.push(course.clone());
        Ok(course)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>> {
        Ok(self.table.read()?.iter().find(|c| c.id == id).cloned())
    }

    async fn find_all(&self, stream: Option<&str>) -> Result<Vec<Course>> {
        Ok(self
            .table
            .read()?
            .iter()
            .filter(|c| stream.is_none_or(|s| c.stream == s))
            .cloned()
            .collect())
    }

    async fn update(&self, id: Uuid, update: UpdateCourse) -> Result<Option<Course>> {
        let mut rows = self.table.write()?;
        Ok(rows.iter_mut().find(|c| c.id == id).map(|course| {
            update.apply(course);
            course.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        Ok(remove_by_id(&mut *self.table.write()?, id, |c| c.id))
    }
}

#[derive(Clone, Default)]
pub struct InMemoryReviewRepository {
    table: Table<Vec<Review>>,
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn create(&self, new_review: NewReview) -> Result<Review> {
        let review = Review {
            id: Uuid::new_v4(),
            name: new_review.name,
            rating: new_review.rating,
            comment: new_review.comment,
            course: new_review.course,
            approved: new_review.approved,
            created_at: OffsetDateTime::now_utc(),
        };
        self.table.write()?.push(review.clone());
        Ok(review)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>> {
        Ok(self.table.read()?.iter().find(|r| r.id == id).cloned())
    }

    async fn find_all(&self, approved: Option<bool>) -> Result<Vec<Review>> {
        Ok(self
            .table
            .read()?
            .iter()
            .rev()
            .filter(|r| approved.is_none_or(|a| r.approved == a))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        Ok(remove_by_id(&mut *self.table.write()?, id, |r| r.id))
    }
}

#[derive(Clone, Default)]
pub struct InMemoryNoticeRepository {
    table: Table<Vec<Notice>>,
}

#[async_trait]
impl NoticeRepository for InMemoryNoticeRepository {
    async fn create(&self, new_notice: NewNotice) -> Result<Notice> {
        let notice = Notice {
            id: Uuid::new_v4(),
            title: new_notice.title,
            content: new_notice.content,
            priority: new_notice.priority,
            active: new_notice.active,
            created_at: OffsetDateTime::now_utc(),
        };
        self.table.write()?.push(notice.clone());
        Ok(notice)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Notice>> {
        Ok(self.table.read()?.iter().find(|n| n.id == id).cloned())
    }

    async fn find_all(&self, active: Option<bool>) -> Result<Vec<Notice>> {
        Ok(self
            .table
            .read()?
            .iter()
            .rev()
            .filter(|n| active.is_none_or(|a| n.active == a))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        Ok(remove_by_id(&mut *self.table.write()?, id, |n| n.id))
    }
}

#[derive(Clone, Default)]
pub struct InMemoryRevokedTokenRepository {
    table: Table<HashMap<String, OffsetDateTime>>,
}

#[async_trait]
impl RevokedTokenRepository for InMemoryRevokedTokenRepository {
    async fn revoke(&self, token_hash: &str, expires_at: OffsetDateTime) -> Result<()> {
        self.table
            .write()?
            .insert(token_hash.to_string(), expires_at);
        Ok(())
    }

    async fn is_revoked(&self, token_hash: &str) -> Result<bool> {
        let now = OffsetDateTime::now_utc();
        Ok(self
            .table
            .read()?
            .get(token_hash)
            .is_some_and(|expires_at| *expires_at > now))
    }

    async fn delete_expired(&self) -> Result<u64> {
        let now = OffsetDateTime::now_utc();
        let mut rows = self.table.write()?;
        let before = rows.len();
        rows.retain(|_, expires_at| *expires_at > now);
        Ok((before - rows.len()) as u64)
    }
}
