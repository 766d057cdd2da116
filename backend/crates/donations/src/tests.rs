//! Unit tests for the donations crate

#[cfg(test)]
mod record_donation_tests {
    use std::sync::{Arc, Mutex};

    use kernel::id::{ProgramId, UserId};
    use platform::notify::{Notification, Notifier, NotifyError};

    use crate::application::config::DonationConfig;
    use crate::application::{RecordDonationInput, RecordDonationUseCase};
    use crate::domain::entity::donation::{Donation, DonationWithDetails};
    use crate::domain::entity::program::Program;
    use crate::domain::repository::{DonationRepository, ProgramRepository};
    use crate::domain::value_object::donation_status::DonationStatus;
    use crate::domain::value_object::donation_type::DonationType;
    use crate::error::{DonationError, DonationResult};

    /// In-memory repository for use-case tests
    #[derive(Clone, Default)]
    struct MemRepo {
        donations: Arc<Mutex<Vec<Donation>>>,
        programs: Arc<Mutex<Vec<Program>>>,
    }

    impl DonationRepository for MemRepo {
        async fn create(&self, donation: &Donation) -> DonationResult<()> {
            self.donations.lock().unwrap().push(donation.clone());
            Ok(())
        }

        async fn list_by_user(&self, user_id: &UserId) -> DonationResult<Vec<Donation>> {
            let mut out: Vec<Donation> = self
                .donations
                .lock()
                .unwrap()
                .iter()
                .filter(|d| d.user_id == *user_id)
                .cloned()
                .collect();
            out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(out)
        }

        async fn list_all_with_details(&self) -> DonationResult<Vec<DonationWithDetails>> {
            Ok(Vec::new())
        }
    }

    impl ProgramRepository for MemRepo {
        async fn find_active(&self, program_id: &ProgramId) -> DonationResult<Option<Program>> {
            Ok(self
                .programs
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.program_id == *program_id && p.active)
                .cloned())
        }

        async fn list_active(&self) -> DonationResult<Vec<Program>> {
            Ok(self
                .programs
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.active)
                .cloned()
                .collect())
        }
    }

    #[derive(Clone, Default)]
    struct NullNotifier;

    impl Notifier for NullNotifier {
        async fn notify(&self, _notification: Notification) -> Result<(), NotifyError> {
            Ok(())
        }
    }

    fn use_case(repo: MemRepo) -> RecordDonationUseCase<MemRepo, NullNotifier> {
        RecordDonationUseCase::new(
            Arc::new(repo),
            Arc::new(NullNotifier),
            Arc::new(DonationConfig::default()),
        )
    }

    fn input(amount: i64, ty: &str) -> RecordDonationInput {
        RecordDonationInput {
            amount_minor: amount,
            currency: None,
            donation_type: ty.to_string(),
            program_id: None,
        }
    }

    fn sample_program(active: bool) -> Program {
        Program {
            program_id: ProgramId::new(),
            name: "Clean Water".to_string(),
            slug: "clean-water".to_string(),
            active,
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn records_donation_owned_by_session_user() {
        let repo = MemRepo::default();
        let donor = UserId::new();

        let donation = use_case(repo.clone())
            .execute(donor, input(5000, "ONE_TIME"))
            .await
            .unwrap();

        assert_eq!(donation.user_id, donor);
        assert_eq!(donation.amount.minor_units(), 5000);
        assert_eq!(donation.donation_type, DonationType::OneTime);
        assert_eq!(donation.status, DonationStatus::Succeeded);
        assert_eq!(donation.currency.as_str(), "JPY");
        assert_eq!(repo.donations.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn rejects_non_positive_amount() {
        let repo = MemRepo::default();

        for bad in [0, -1, -5000] {
            let err = use_case(repo.clone())
                .execute(UserId::new(), input(bad, "ONE_TIME"))
                .await
                .unwrap_err();
            let app = err.into_app_error();
            assert_eq!(app.status_code(), 400);
            assert_eq!(app.field(), Some("amount"));
        }
        assert!(repo.donations.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_unknown_type() {
        let repo = MemRepo::default();

        let err = use_case(repo)
            .execute(UserId::new(), input(1000, "WEEKLY"))
            .await
            .unwrap_err();
        let app = err.into_app_error();
        assert_eq!(app.status_code(), 400);
        assert_eq!(app.field(), Some("type"));
    }

    #[tokio::test]
    async fn rejects_unknown_program() {
        let repo = MemRepo::default();

        let mut req = input(1000, "MONTHLY");
        req.program_id = Some(ProgramId::new().to_string());

        let err = use_case(repo).execute(UserId::new(), req).await.unwrap_err();
        assert!(matches!(err, DonationError::ProgramInvalid));
        assert_eq!(err.into_app_error().field(), Some("programId"));
    }

    #[tokio::test]
    async fn rejects_inactive_program() {
        let repo = MemRepo::default();
        let program = sample_program(false);
        let program_id = program.program_id;
        repo.programs.lock().unwrap().push(program);

        let mut req = input(1000, "SPONSORSHIP");
        req.program_id = Some(program_id.to_string());

        let err = use_case(repo).execute(UserId::new(), req).await.unwrap_err();
        assert!(matches!(err, DonationError::ProgramInvalid));
    }

    #[tokio::test]
    async fn accepts_active_program_and_explicit_currency() {
        let repo = MemRepo::default();
        let program = sample_program(true);
        let program_id = program.program_id;
        repo.programs.lock().unwrap().push(program);

        let req = RecordDonationInput {
            amount_minor: 2500,
            currency: Some("usd".to_string()),
            donation_type: "MONTHLY".to_string(),
            program_id: Some(program_id.to_string()),
        };

        let donation = use_case(repo).execute(UserId::new(), req).await.unwrap();
        assert_eq!(donation.program_id, Some(program_id));
        assert_eq!(donation.currency.as_str(), "USD");
    }

    #[tokio::test]
    async fn rejects_malformed_program_id() {
        let repo = MemRepo::default();

        let mut req = input(1000, "ONE_TIME");
        req.program_id = Some("not-a-uuid".to_string());

        let err = use_case(repo).execute(UserId::new(), req).await.unwrap_err();
        assert_eq!(err.into_app_error().field(), Some("programId"));
    }

    #[tokio::test]
    async fn list_mine_is_newest_first_and_scoped() {
        let repo = MemRepo::default();
        let donor = UserId::new();
        let other = UserId::new();

        let uc = use_case(repo.clone());
        uc.execute(donor, input(100, "ONE_TIME")).await.unwrap();
        uc.execute(other, input(200, "ONE_TIME")).await.unwrap();
        uc.execute(donor, input(300, "ONE_TIME")).await.unwrap();

        let mine = repo.list_by_user(&donor).await.unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine[0].created_at >= mine[1].created_at);
        assert!(mine.iter().all(|d| d.user_id == donor));
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::domain::entity::donation::Donation;
    use crate::domain::value_object::{
        amount::Amount, currency::Currency, donation_type::DonationType,
    };
    use crate::presentation::dto::{DonationResponse, RecordDonationRequest};
    use kernel::id::UserId;

    #[test]
    fn request_uses_wire_names() {
        let json = r#"{"amount":5000,"type":"ONE_TIME","programId":null}"#;
        let req: RecordDonationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.amount, 5000);
        assert_eq!(req.donation_type, "ONE_TIME");
        assert!(req.currency.is_none());
    }

    #[test]
    fn response_serializes_wire_codes() {
        let donation = Donation::new(
            UserId::new(),
            None,
            Amount::new(5000).unwrap(),
            Currency::new("JPY").unwrap(),
            DonationType::Sponsorship,
        );

        let value = serde_json::to_value(DonationResponse::from(&donation)).unwrap();
        assert_eq!(value["type"], "SPONSORSHIP");
        assert_eq!(value["status"], "SUCCEEDED");
        assert_eq!(value["amount"], 5000);
        assert!(value["programId"].is_null());
    }
}
