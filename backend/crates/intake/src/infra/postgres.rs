//! PostgreSQL Repository Implementations

use auth::models::email::Email;
use chrono::{DateTime, Utc};
use kernel::id::{ContactMessageId, PartnershipInquiryId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::contact_message::ContactMessage;
use crate::domain::entity::partnership_inquiry::PartnershipInquiry;
use crate::domain::repository::{ContactRepository, InquiryRepository};
use crate::error::IntakeResult;

/// PostgreSQL-backed intake repository
#[derive(Clone)]
pub struct PgIntakeRepository {
    pool: PgPool,
}

impl PgIntakeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Contact Repository Implementation
// ============================================================================

impl ContactRepository for PgIntakeRepository {
    async fn create_contact(&self, message: &ContactMessage) -> IntakeResult<()> {
        sqlx::query(
            r#"
            INSERT INTO contact_messages (
                message_id,
                name,
                email,
                phone,
                message,
                handled,
                admin_notes,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(message.message_id.as_uuid())
        .bind(&message.name)
        .bind(message.email.as_str())
        .bind(&message.phone)
        .bind(&message.message)
        .bind(message.handled)
        .bind(&message.admin_notes)
        .bind(message.created_at)
        .bind(message.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_contacts(&self) -> IntakeResult<Vec<ContactMessage>> {
        let rows = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT
                message_id, name, email, phone, message,
                handled, admin_notes, created_at, updated_at
            FROM contact_messages
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_message()).collect())
    }

    async fn review_contact(
        &self,
        id: &ContactMessageId,
        handled: bool,
        admin_notes: Option<String>,
    ) -> IntakeResult<Option<ContactMessage>> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            UPDATE contact_messages
            SET handled = $2,
                admin_notes = COALESCE($3, admin_notes),
                updated_at = NOW()
            WHERE message_id = $1
            RETURNING
                message_id, name, email, phone, message,
                handled, admin_notes, created_at, updated_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(handled)
        .bind(admin_notes)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_message()))
    }
}

// ============================================================================
// Inquiry Repository Implementation
// ============================================================================

impl InquiryRepository for PgIntakeRepository {
    async fn create_inquiry(&self, inquiry: &PartnershipInquiry) -> IntakeResult<()> {
        sqlx::query(
            r#"
            INSERT INTO partnership_inquiries (
                inquiry_id,
                name,
                email,
                phone,
                company,
                address,
                message,
                handled,
                admin_notes,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(inquiry.inquiry_id.as_uuid())
        .bind(&inquiry.name)
        .bind(inquiry.email.as_str())
        .bind(&inquiry.phone)
        .bind(&inquiry.company)
        .bind(&inquiry.address)
        .bind(&inquiry.message)
        .bind(inquiry.handled)
        .bind(&inquiry.admin_notes)
        .bind(inquiry.created_at)
        .bind(inquiry.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_inquiries(&self) -> IntakeResult<Vec<PartnershipInquiry>> {
        let rows = sqlx::query_as::<_, InquiryRow>(
            r#"
            SELECT
                inquiry_id, name, email, phone, company, address, message,
                handled, admin_notes, created_at, updated_at
            FROM partnership_inquiries
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_inquiry()).collect())
    }

    async fn review_inquiry(
        &self,
        id: &PartnershipInquiryId,
        handled: bool,
        admin_notes: Option<String>,
    ) -> IntakeResult<Option<PartnershipInquiry>> {
        let row = sqlx::query_as::<_, InquiryRow>(
            r#"
            UPDATE partnership_inquiries
            SET handled = $2,
                admin_notes = COALESCE($3, admin_notes),
                updated_at = NOW()
            WHERE inquiry_id = $1
            RETURNING
                inquiry_id, name, email, phone, company, address, message,
                handled, admin_notes, created_at, updated_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(handled)
        .bind(admin_notes)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_inquiry()))
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ContactRow {
    message_id: Uuid,
    name: String,
    email: String,
    phone: Option<String>,
    message: String,
    handled: bool,
    admin_notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ContactRow {
    fn into_message(self) -> ContactMessage {
        ContactMessage {
            message_id: ContactMessageId::from_uuid(self.message_id),
            name: self.name,
            email: Email::from_db(self.email),
            phone: self.phone,
            message: self.message,
            handled: self.handled,
            admin_notes: self.admin_notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct InquiryRow {
    inquiry_id: Uuid,
    name: String,
    email: String,
    phone: String,
    company: String,
    address: Option<String>,
    message: String,
    handled: bool,
    admin_notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl InquiryRow {
    fn into_inquiry(self) -> PartnershipInquiry {
        PartnershipInquiry {
            inquiry_id: PartnershipInquiryId::from_uuid(self.inquiry_id),
            name: self.name,
            email: Email::from_db(self.email),
            phone: self.phone,
            company: self.company,
            address: self.address,
            message: self.message,
            handled: self.handled,
            admin_notes: self.admin_notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
