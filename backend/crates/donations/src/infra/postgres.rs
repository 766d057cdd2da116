//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{DonationId, ProgramId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{
    donation::{Donation, DonationWithDetails},
    program::Program,
};
use crate::domain::repository::{DonationRepository, ProgramRepository};
use crate::domain::value_object::{
    amount::Amount, currency::Currency, donation_status::DonationStatus,
    donation_type::DonationType,
};
use crate::error::{DonationError, DonationResult};

/// PostgreSQL-backed donation repository
#[derive(Clone)]
pub struct PgDonationRepository {
    pool: PgPool,
}

impl PgDonationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Donation Repository Implementation
// ============================================================================

impl DonationRepository for PgDonationRepository {
    async fn create(&self, donation: &Donation) -> DonationResult<()> {
        sqlx::query(
            r#"
            INSERT INTO donations (
                donation_id,
                user_id,
                program_id,
                amount_minor,
                currency,
                donation_type,
                status,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(donation.donation_id.as_uuid())
        .bind(donation.user_id.as_uuid())
        .bind(donation.program_id.as_ref().map(|id| *id.as_uuid()))
        .bind(donation.amount.minor_units())
        .bind(donation.currency.as_str())
        .bind(donation.donation_type.id())
        .bind(donation.status.id())
        .bind(donation.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_by_user(&self, user_id: &UserId) -> DonationResult<Vec<Donation>> {
        let rows = sqlx::query_as::<_, DonationRow>(
            r#"
            SELECT
                donation_id,
                user_id,
                program_id,
                amount_minor,
                currency,
                donation_type,
                status,
                created_at
            FROM donations
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_donation()).collect()
    }

    async fn list_all_with_details(&self) -> DonationResult<Vec<DonationWithDetails>> {
        let rows = sqlx::query_as::<_, DonationDetailsRow>(
            r#"
            SELECT
                d.donation_id,
                d.user_id,
                d.program_id,
                d.amount_minor,
                d.currency,
                d.donation_type,
                d.status,
                d.created_at,
                u.email AS donor_email,
                p.name AS program_name
            FROM donations d
            JOIN users u ON u.user_id = d.user_id
            LEFT JOIN programs p ON p.program_id = d.program_id
            ORDER BY d.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_details()).collect()
    }
}

// ============================================================================
// Program Repository Implementation
// ============================================================================

impl ProgramRepository for PgDonationRepository {
    async fn find_active(&self, program_id: &ProgramId) -> DonationResult<Option<Program>> {
        let row = sqlx::query_as::<_, ProgramRow>(
            r#"
            SELECT program_id, name, slug, active, created_at
            FROM programs
            WHERE program_id = $1 AND active = TRUE
            "#,
        )
        .bind(program_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_program()))
    }

    async fn list_active(&self) -> DonationResult<Vec<Program>> {
        let rows = sqlx::query_as::<_, ProgramRow>(
            r#"
            SELECT program_id, name, slug, active, created_at
            FROM programs
            WHERE active = TRUE
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_program()).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct DonationRow {
    donation_id: Uuid,
    user_id: Uuid,
    program_id: Option<Uuid>,
    amount_minor: i64,
    currency: String,
    donation_type: i16,
    status: i16,
    created_at: DateTime<Utc>,
}

impl DonationRow {
    fn into_donation(self) -> DonationResult<Donation> {
        let donation_type = DonationType::from_id(self.donation_type).ok_or_else(|| {
            DonationError::Internal(format!("Invalid donation type id: {}", self.donation_type))
        })?;

        let status = DonationStatus::from_id(self.status).ok_or_else(|| {
            DonationError::Internal(format!("Invalid donation status id: {}", self.status))
        })?;

        Ok(Donation {
            donation_id: DonationId::from_uuid(self.donation_id),
            user_id: UserId::from_uuid(self.user_id),
            program_id: self.program_id.map(ProgramId::from_uuid),
            amount: Amount::from_db(self.amount_minor),
            currency: Currency::from_db(self.currency),
            donation_type,
            status,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct DonationDetailsRow {
    donation_id: Uuid,
    user_id: Uuid,
    program_id: Option<Uuid>,
    amount_minor: i64,
    currency: String,
    donation_type: i16,
    status: i16,
    created_at: DateTime<Utc>,
    donor_email: String,
    program_name: Option<String>,
}

impl DonationDetailsRow {
    fn into_details(self) -> DonationResult<DonationWithDetails> {
        let donation = DonationRow {
            donation_id: self.donation_id,
            user_id: self.user_id,
            program_id: self.program_id,
            amount_minor: self.amount_minor,
            currency: self.currency,
            donation_type: self.donation_type,
            status: self.status,
            created_at: self.created_at,
        }
        .into_donation()?;

        Ok(DonationWithDetails {
            donation,
            donor_email: self.donor_email,
            program_name: self.program_name,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ProgramRow {
    program_id: Uuid,
    name: String,
    slug: String,
    active: bool,
    created_at: DateTime<Utc>,
}

impl ProgramRow {
    fn into_program(self) -> Program {
        Program {
            program_id: ProgramId::from_uuid(self.program_id),
            name: self.name,
            slug: self.slug,
            active: self.active,
            created_at: self.created_at,
        }
    }
}
