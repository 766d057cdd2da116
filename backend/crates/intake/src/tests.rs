//! Unit tests for the intake crate

#[cfg(test)]
mod submit_tests {
    use std::sync::{Arc, Mutex};

    use kernel::id::{ContactMessageId, PartnershipInquiryId};
    use platform::notify::{Notification, Notifier, NotifyError};

    use crate::application::{
        ListContactsUseCase, ReviewContactUseCase, ReviewInquiryUseCase, SubmitContactInput,
        SubmitContactUseCase, SubmitInquiryInput, SubmitInquiryUseCase,
    };
    use crate::domain::entity::contact_message::ContactMessage;
    use crate::domain::entity::partnership_inquiry::PartnershipInquiry;
    use crate::domain::repository::{ContactRepository, InquiryRepository};
    use crate::error::{IntakeError, IntakeResult};

    /// In-memory repository for use-case tests
    #[derive(Clone, Default)]
    struct MemRepo {
        contacts: Arc<Mutex<Vec<ContactMessage>>>,
        inquiries: Arc<Mutex<Vec<PartnershipInquiry>>>,
    }

    impl ContactRepository for MemRepo {
        async fn create_contact(&self, message: &ContactMessage) -> IntakeResult<()> {
            self.contacts.lock().unwrap().push(message.clone());
            Ok(())
        }

        async fn list_contacts(&self) -> IntakeResult<Vec<ContactMessage>> {
            let mut out = self.contacts.lock().unwrap().clone();
            out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(out)
        }

        async fn review_contact(
            &self,
            id: &ContactMessageId,
            handled: bool,
            admin_notes: Option<String>,
        ) -> IntakeResult<Option<ContactMessage>> {
            let mut contacts = self.contacts.lock().unwrap();
            match contacts.iter_mut().find(|m| m.message_id == *id) {
                Some(m) => {
                    m.review(handled, admin_notes);
                    Ok(Some(m.clone()))
                }
                None => Ok(None),
            }
        }
    }

    impl InquiryRepository for MemRepo {
        async fn create_inquiry(&self, inquiry: &PartnershipInquiry) -> IntakeResult<()> {
            self.inquiries.lock().unwrap().push(inquiry.clone());
            Ok(())
        }

        async fn list_inquiries(&self) -> IntakeResult<Vec<PartnershipInquiry>> {
            let mut out = self.inquiries.lock().unwrap().clone();
            out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(out)
        }

        async fn review_inquiry(
            &self,
            id: &PartnershipInquiryId,
            handled: bool,
            admin_notes: Option<String>,
        ) -> IntakeResult<Option<PartnershipInquiry>> {
            let mut inquiries = self.inquiries.lock().unwrap();
            match inquiries.iter_mut().find(|i| i.inquiry_id == *id) {
                Some(i) => {
                    i.review(handled, admin_notes);
                    Ok(Some(i.clone()))
                }
                None => Ok(None),
            }
        }
    }

    #[derive(Clone, Default)]
    struct NullNotifier;

    impl Notifier for NullNotifier {
        async fn notify(&self, _notification: Notification) -> Result<(), NotifyError> {
            Ok(())
        }
    }

    fn contact_input() -> SubmitContactInput {
        SubmitContactInput {
            name: "Hanako Yamada".to_string(),
            email: "hanako@example.com".to_string(),
            phone: None,
            message: "I would like to volunteer.".to_string(),
        }
    }

    fn inquiry_input() -> SubmitInquiryInput {
        SubmitInquiryInput {
            name: "Taro Suzuki".to_string(),
            email: "taro@example.co.jp".to_string(),
            phone: "03-1234-5678".to_string(),
            company: "Example Holdings".to_string(),
            address: Some("1-2-3 Chiyoda, Tokyo".to_string()),
            message: "Interested in a corporate partnership.".to_string(),
        }
    }

    #[tokio::test]
    async fn submits_contact_message() {
        let repo = MemRepo::default();

        let contact = SubmitContactUseCase::new(Arc::new(repo.clone()), Arc::new(NullNotifier))
            .execute(contact_input())
            .await
            .unwrap();

        assert_eq!(contact.name, "Hanako Yamada");
        assert_eq!(contact.email.as_str(), "hanako@example.com");
        assert!(!contact.handled);
        assert!(contact.admin_notes.is_none());
        assert_eq!(repo.contacts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn rejects_blank_contact_name() {
        let repo = MemRepo::default();

        let mut input = contact_input();
        input.name = "   ".to_string();

        let err = SubmitContactUseCase::new(Arc::new(repo.clone()), Arc::new(NullNotifier))
            .execute(input)
            .await
            .unwrap_err();

        let app = err.into_app_error();
        assert_eq!(app.status_code(), 400);
        assert_eq!(app.field(), Some("name"));
        assert!(repo.contacts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_invalid_contact_email() {
        let repo = MemRepo::default();

        let mut input = contact_input();
        input.email = "not-an-email".to_string();

        let err = SubmitContactUseCase::new(Arc::new(repo.clone()), Arc::new(NullNotifier))
            .execute(input)
            .await
            .unwrap_err();

        assert_eq!(err.into_app_error().field(), Some("email"));
        assert!(repo.contacts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn blank_optional_phone_is_dropped() {
        let repo = MemRepo::default();

        let mut input = contact_input();
        input.phone = Some("  ".to_string());

        let contact = SubmitContactUseCase::new(Arc::new(repo), Arc::new(NullNotifier))
            .execute(input)
            .await
            .unwrap();

        assert!(contact.phone.is_none());
    }

    #[tokio::test]
    async fn submits_partnership_inquiry() {
        let repo = MemRepo::default();

        let inquiry = SubmitInquiryUseCase::new(Arc::new(repo.clone()), Arc::new(NullNotifier))
            .execute(inquiry_input())
            .await
            .unwrap();

        assert_eq!(inquiry.company, "Example Holdings");
        assert!(!inquiry.handled);
        assert_eq!(repo.inquiries.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn inquiry_requires_phone_and_company() {
        let repo = MemRepo::default();
        let uc = SubmitInquiryUseCase::new(Arc::new(repo.clone()), Arc::new(NullNotifier));

        let mut input = inquiry_input();
        input.phone = String::new();
        let err = uc.execute(input).await.unwrap_err();
        assert_eq!(err.into_app_error().field(), Some("phone"));

        let mut input = inquiry_input();
        input.company = "  ".to_string();
        let err = uc.execute(input).await.unwrap_err();
        assert_eq!(err.into_app_error().field(), Some("company"));

        assert!(repo.inquiries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_oversized_message() {
        let repo = MemRepo::default();

        let mut input = contact_input();
        input.message = "a".repeat(5_001);

        let err = SubmitContactUseCase::new(Arc::new(repo), Arc::new(NullNotifier))
            .execute(input)
            .await
            .unwrap_err();

        assert_eq!(err.into_app_error().field(), Some("message"));
    }

    #[tokio::test]
    async fn listing_is_newest_first() {
        let repo = MemRepo::default();
        let uc = SubmitContactUseCase::new(Arc::new(repo.clone()), Arc::new(NullNotifier));

        uc.execute(contact_input()).await.unwrap();
        uc.execute(contact_input()).await.unwrap();
        uc.execute(contact_input()).await.unwrap();

        let listed = ListContactsUseCase::new(Arc::new(repo)).execute().await.unwrap();
        assert_eq!(listed.len(), 3);
        assert!(listed[0].created_at >= listed[1].created_at);
        assert!(listed[1].created_at >= listed[2].created_at);
    }

    #[tokio::test]
    async fn review_sets_handled_and_notes() {
        let repo = MemRepo::default();

        let contact = SubmitContactUseCase::new(Arc::new(repo.clone()), Arc::new(NullNotifier))
            .execute(contact_input())
            .await
            .unwrap();

        let reviewed = ReviewContactUseCase::new(Arc::new(repo.clone()))
            .execute(
                &contact.message_id,
                true,
                Some("Replied by phone".to_string()),
            )
            .await
            .unwrap();

        assert!(reviewed.handled);
        assert_eq!(reviewed.admin_notes.as_deref(), Some("Replied by phone"));
        assert!(reviewed.updated_at >= contact.updated_at);
    }

    #[tokio::test]
    async fn review_without_notes_keeps_existing_notes() {
        let repo = MemRepo::default();

        let contact = SubmitContactUseCase::new(Arc::new(repo.clone()), Arc::new(NullNotifier))
            .execute(contact_input())
            .await
            .unwrap();

        let uc = ReviewContactUseCase::new(Arc::new(repo));
        uc.execute(&contact.message_id, true, Some("First pass".to_string()))
            .await
            .unwrap();
        let reviewed = uc.execute(&contact.message_id, false, None).await.unwrap();

        assert!(!reviewed.handled);
        assert_eq!(reviewed.admin_notes.as_deref(), Some("First pass"));
    }

    #[tokio::test]
    async fn review_of_unknown_id_is_not_found() {
        let repo = MemRepo::default();

        let err = ReviewContactUseCase::new(Arc::new(repo.clone()))
            .execute(&ContactMessageId::new(), true, None)
            .await
            .unwrap_err();
        assert!(matches!(err, IntakeError::NotFound));
        assert_eq!(err.into_app_error().status_code(), 404);

        let err = ReviewInquiryUseCase::new(Arc::new(repo))
            .execute(&PartnershipInquiryId::new(), true, None)
            .await
            .unwrap_err();
        assert!(matches!(err, IntakeError::NotFound));
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::presentation::dto::{ReviewRequest, SubmitInquiryRequest};

    #[test]
    fn requests_use_wire_names() {
        let json = r#"{
            "name": "Taro",
            "email": "taro@example.com",
            "phone": "03-0000-0000",
            "company": "Example Holdings",
            "message": "Hello"
        }"#;
        let req: SubmitInquiryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.company, "Example Holdings");
        assert!(req.address.is_none());
    }

    #[test]
    fn review_notes_use_camel_case() {
        let json = r#"{"handled":true,"adminNotes":"done"}"#;
        let req: ReviewRequest = serde_json::from_str(json).unwrap();
        assert!(req.handled);
        assert_eq!(req.admin_notes.as_deref(), Some("done"));
    }
}
