//! HTTP Handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use std::sync::Arc;

use auth::middleware::CurrentUser;
use platform::notify::Notifier;

use crate::application::config::DonationConfig;
use crate::application::{
    ListAllDonationsUseCase, ListMyDonationsUseCase, ListProgramsUseCase, RecordDonationInput,
    RecordDonationUseCase,
};
use crate::domain::repository::{DonationRepository, ProgramRepository};
use crate::error::DonationResult;
use crate::presentation::dto::{
    DonationDetailsResponse, DonationResponse, ProgramResponse, RecordDonationRequest,
};

/// Shared state for donation handlers
pub struct DonationAppState<R, N>
where
    R: DonationRepository + ProgramRepository + Clone + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub notifier: Arc<N>,
    pub config: Arc<DonationConfig>,
}

// Manual impl: a derive would demand `N: Clone`, but every field is an
// Arc and the notifier is only ever shared.
impl<R, N> Clone for DonationAppState<R, N>
where
    R: DonationRepository + ProgramRepository + Clone + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            notifier: Arc::clone(&self.notifier),
            config: Arc::clone(&self.config),
        }
    }
}

// ============================================================================
// Record Donation
// ============================================================================

/// POST /api/donations (session required)
pub async fn record_donation<R, N>(
    State(state): State<DonationAppState<R, N>>,
    Extension(current_user): Extension<CurrentUser>,
    Json(req): Json<RecordDonationRequest>,
) -> DonationResult<impl IntoResponse>
where
    R: DonationRepository + ProgramRepository + Clone + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    let use_case =
        RecordDonationUseCase::new(state.repo.clone(), state.notifier.clone(), state.config.clone());

    let input = RecordDonationInput {
        amount_minor: req.amount,
        currency: req.currency,
        donation_type: req.donation_type,
        program_id: req.program_id,
    };

    let donation = use_case.execute(current_user.user_id, input).await?;

    Ok((StatusCode::CREATED, Json(DonationResponse::from(&donation))))
}

// ============================================================================
// Listings
// ============================================================================

/// GET /api/donations/me (session required, own donations)
pub async fn list_my_donations<R, N>(
    State(state): State<DonationAppState<R, N>>,
    Extension(current_user): Extension<CurrentUser>,
) -> DonationResult<Json<Vec<DonationResponse>>>
where
    R: DonationRepository + ProgramRepository + Clone + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    let use_case = ListMyDonationsUseCase::new(state.repo.clone());
    let donations = use_case.execute(&current_user.user_id).await?;

    Ok(Json(donations.iter().map(DonationResponse::from).collect()))
}

/// GET /api/donations (admin, all donations joined with donor/program)
pub async fn list_all_donations<R, N>(
    State(state): State<DonationAppState<R, N>>,
) -> DonationResult<Json<Vec<DonationDetailsResponse>>>
where
    R: DonationRepository + ProgramRepository + Clone + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    let use_case = ListAllDonationsUseCase::new(state.repo.clone());
    let donations = use_case.execute().await?;

    Ok(Json(
        donations.iter().map(DonationDetailsResponse::from).collect(),
    ))
}

/// GET /api/programs (public)
pub async fn list_programs<R, N>(
    State(state): State<DonationAppState<R, N>>,
) -> DonationResult<Json<Vec<ProgramResponse>>>
where
    R: DonationRepository + ProgramRepository + Clone + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    let use_case = ListProgramsUseCase::new(state.repo.clone());
    let programs = use_case.execute().await?;

    Ok(Json(programs.iter().map(ProgramResponse::from).collect()))
}
