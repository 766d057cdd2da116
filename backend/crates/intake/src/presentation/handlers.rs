//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use kernel::id::{ContactMessageId, PartnershipInquiryId};
use platform::notify::Notifier;

use crate::application::{
    ListContactsUseCase, ListInquiriesUseCase, ReviewContactUseCase, ReviewInquiryUseCase,
    SubmitContactInput, SubmitContactUseCase, SubmitInquiryInput, SubmitInquiryUseCase,
};
use crate::domain::repository::{ContactRepository, InquiryRepository};
use crate::error::{IntakeError, IntakeResult};
use crate::presentation::dto::{
    ContactMessageResponse, InquiryResponse, OkResponse, ReviewRequest, SubmitContactRequest,
    SubmitInquiryRequest,
};

/// Shared state for intake handlers
pub struct IntakeAppState<R, N>
where
    R: ContactRepository + InquiryRepository + Clone + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub notifier: Arc<N>,
}

// Manual impl: a derive would demand `N: Clone`, but every field is an
// Arc and the notifier is only ever shared.
impl<R, N> Clone for IntakeAppState<R, N>
where
    R: ContactRepository + InquiryRepository + Clone + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            notifier: Arc::clone(&self.notifier),
        }
    }
}

// ============================================================================
// Public Forms
// ============================================================================

/// POST /api/contact
pub async fn submit_contact<R, N>(
    State(state): State<IntakeAppState<R, N>>,
    Json(req): Json<SubmitContactRequest>,
) -> IntakeResult<impl IntoResponse>
where
    R: ContactRepository + InquiryRepository + Clone + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    let use_case = SubmitContactUseCase::new(state.repo.clone(), state.notifier.clone());

    use_case
        .execute(SubmitContactInput {
            name: req.name,
            email: req.email,
            phone: req.phone,
            message: req.message,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(OkResponse::new())))
}

/// POST /api/partnerships
pub async fn submit_inquiry<R, N>(
    State(state): State<IntakeAppState<R, N>>,
    Json(req): Json<SubmitInquiryRequest>,
) -> IntakeResult<impl IntoResponse>
where
    R: ContactRepository + InquiryRepository + Clone + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    let use_case = SubmitInquiryUseCase::new(state.repo.clone(), state.notifier.clone());

    use_case
        .execute(SubmitInquiryInput {
            name: req.name,
            email: req.email,
            phone: req.phone,
            company: req.company,
            address: req.address,
            message: req.message,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(OkResponse::new())))
}

// ============================================================================
// Admin Listing
// ============================================================================

/// GET /api/contact (admin)
pub async fn list_contacts<R, N>(
    State(state): State<IntakeAppState<R, N>>,
) -> IntakeResult<Json<Vec<ContactMessageResponse>>>
where
    R: ContactRepository + InquiryRepository + Clone + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    let messages = ListContactsUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(
        messages.iter().map(ContactMessageResponse::from).collect(),
    ))
}

/// GET /api/partnerships (admin)
pub async fn list_inquiries<R, N>(
    State(state): State<IntakeAppState<R, N>>,
) -> IntakeResult<Json<Vec<InquiryResponse>>>
where
    R: ContactRepository + InquiryRepository + Clone + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    let inquiries = ListInquiriesUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(inquiries.iter().map(InquiryResponse::from).collect()))
}

// ============================================================================
// Admin Review
// ============================================================================

/// PATCH /api/contact/{id} (admin)
pub async fn review_contact<R, N>(
    State(state): State<IntakeAppState<R, N>>,
    Path(id): Path<String>,
    Json(req): Json<ReviewRequest>,
) -> IntakeResult<Json<ContactMessageResponse>>
where
    R: ContactRepository + InquiryRepository + Clone + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    // An unparseable id cannot match any row
    let id = ContactMessageId::parse(&id).map_err(|_| IntakeError::NotFound)?;

    let reviewed = ReviewContactUseCase::new(state.repo.clone())
        .execute(&id, req.handled, req.admin_notes)
        .await?;

    Ok(Json(ContactMessageResponse::from(&reviewed)))
}

/// PATCH /api/partnerships/{id} (admin)
pub async fn review_inquiry<R, N>(
    State(state): State<IntakeAppState<R, N>>,
    Path(id): Path<String>,
    Json(req): Json<ReviewRequest>,
) -> IntakeResult<Json<InquiryResponse>>
where
    R: ContactRepository + InquiryRepository + Clone + Send + Sync + 'static,
    N: Notifier + Send + Sync + 'static,
{
    let id = PartnershipInquiryId::parse(&id).map_err(|_| IntakeError::NotFound)?;

    let reviewed = ReviewInquiryUseCase::new(state.repo.clone())
        .execute(&id, req.handled, req.admin_notes)
        .await?;

    Ok(Json(InquiryResponse::from(&reviewed)))
}
