//! Project detail, the application form and the applications review page.

mod common;

use api::pages::applications::{self, ApplicationsView};
use api::pages::project_detail::{self, ApplicationForm, ProjectLoad, SubmitOutcome};
use api::{ApiError, CurrentUser};
use common::{application_json, client, project_json, request_count, user_json, TOKEN};
use serde_json::json;
use store::TokenStore;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn viewer(id: i64, role: &str) -> CurrentUser {
    serde_json::from_value(user_json(id, role)).unwrap()
}

async fn mount_project(server: &MockServer, id: i64, status: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/projects/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(project_json(id, 10, status)))
        .mount(server)
        .await;
}

fn loaded(load: api::Result<ProjectLoad>) -> project_detail::ProjectDetail {
    match load.unwrap() {
        ProjectLoad::Loaded(detail) => detail,
        other => panic!("Expected a loaded project, got {other:?}"),
    }
}

// =============================================================================
// Project Detail
// =============================================================================

mod detail {
    use super::*;

    #[tokio::test]
    async fn test_missing_project() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/projects/99"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"detail": "Project not found"})),
            )
            .mount(&server)
            .await;

        let (client, _) = client(&server, Some(TOKEN));
        let freelancer = viewer(20, "freelancer");
        let load = project_detail::load_project_detail(&client, Some(&freelancer), 99)
            .await
            .unwrap();

        assert_eq!(load, ProjectLoad::NotFound);
        assert_eq!(load.title(), "Project not found");
        // No probe for a project that does not exist
        assert_eq!(request_count(&server).await, 1);
    }

    #[tokio::test]
    async fn test_server_failure_shows_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/projects/1"))
            .respond_with(ResponseTemplate::new(500).set_body_string("database down"))
            .mount(&server)
            .await;

        let (client, _) = client(&server, None);
        let load = project_detail::load_project_detail(&client, None, 1).await.unwrap();

        assert_eq!(load, ProjectLoad::Failed("database down".into()));
        assert_eq!(load.title(), "Failed to load project");
    }

    #[tokio::test]
    async fn test_closed_project_has_no_form() {
        let server = MockServer::start().await;
        mount_project(&server, 1, "in_progress").await;

        let (client, _) = client(&server, Some(TOKEN));
        let freelancer = viewer(20, "freelancer");
        let detail = loaded(project_detail::load_project_detail(&client, Some(&freelancer), 1).await);

        assert_eq!(detail.form, ApplicationForm::Closed);
        assert!(!detail.form.is_visible());
        assert_eq!(request_count(&server).await, 1);
    }

    #[tokio::test]
    async fn test_guest_and_employer_get_no_form() {
        let server = MockServer::start().await;
        mount_project(&server, 1, "open").await;
        let (client, _) = client(&server, Some(TOKEN));

        let guest = loaded(project_detail::load_project_detail(&client, None, 1).await);
        assert_eq!(guest.form, ApplicationForm::Hidden);
        assert!(!guest.show_applications_link);

        let owner = viewer(10, "employer");
        let owned = loaded(project_detail::load_project_detail(&client, Some(&owner), 1).await);
        assert_eq!(owned.form, ApplicationForm::Hidden);
        assert!(owned.show_applications_link);

        assert_eq!(request_count(&server).await, 2);
    }

    #[tokio::test]
    async fn test_existing_application_prefills_edit_mode() {
        let server = MockServer::start().await;
        mount_project(&server, 1, "open").await;
        Mock::given(method("GET"))
            .and(path("/api/applications/projects/1/applications/me"))
            .and(header("Authorization", "Bearer T"))
            .respond_with(ResponseTemplate::new(200).set_body_json(application_json(5, 1, 20)))
            .expect(1)
            .mount(&server)
            .await;

        let (client, _) = client(&server, Some(TOKEN));
        let freelancer = viewer(20, "freelancer");
        let detail = loaded(project_detail::load_project_detail(&client, Some(&freelancer), 1).await);

        assert_eq!(
            detail.form,
            ApplicationForm::Edit {
                application_id: 5,
                proposal_text: "I can do it".into(),
                proposed_price: 250.0,
            }
        );
        assert_eq!(detail.form.prefill(), ("I can do it".to_string(), "250".to_string()));
    }

    #[tokio::test]
    async fn test_missing_application_means_create_mode() {
        let server = MockServer::start().await;
        mount_project(&server, 1, "open").await;
        Mock::given(method("GET"))
            .and(path("/api/applications/projects/1/applications/me"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let (client, _) = client(&server, Some(TOKEN));
        let freelancer = viewer(20, "freelancer");
        let detail = loaded(project_detail::load_project_detail(&client, Some(&freelancer), 1).await);

        assert_eq!(detail.form, ApplicationForm::Create);
        assert!(!detail.form.initial_state().inputs_disabled());
    }

    #[tokio::test]
    async fn test_rejected_token_leaves_instead_of_disabling_form() {
        let server = MockServer::start().await;
        mount_project(&server, 1, "open").await;
        Mock::given(method("GET"))
            .and(path("/api/applications/projects/1/applications/me"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;

        let (client, store) = client(&server, Some(TOKEN));
        let freelancer = viewer(20, "freelancer");
        let err = project_detail::load_project_detail(&client, Some(&freelancer), 1)
            .await
            .unwrap_err();

        assert_eq!(err, ApiError::Unauthenticated);
        assert!(store.get().is_none());
    }

    #[tokio::test]
    async fn test_failed_probe_disables_form() {
        let server = MockServer::start().await;
        mount_project(&server, 1, "open").await;
        Mock::given(method("GET"))
            .and(path("/api/applications/projects/1/applications/me"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
            .mount(&server)
            .await;

        let (client, _) = client(&server, Some(TOKEN));
        let freelancer = viewer(20, "freelancer");
        let detail = loaded(project_detail::load_project_detail(&client, Some(&freelancer), 1).await);

        assert_eq!(detail.form, ApplicationForm::Unavailable("boom".into()));
        let state = detail.form.initial_state();
        assert!(state.inputs_disabled());
        assert_eq!(state.notice.unwrap().text, "boom");
    }
}

// =============================================================================
// Application Submission
// =============================================================================

mod submission {
    use super::*;

    #[tokio::test]
    async fn test_create_forces_pending_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/applications/projects/1/applications/"))
            .and(header("Authorization", "Bearer T"))
            .and(body_json(json!({
                "proposal_text": "I can do it",
                "proposed_price": 250.0,
                "status": "pending"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(application_json(5, 1, 20)))
            .expect(1)
            .mount(&server)
            .await;

        let (client, _) = client(&server, Some(TOKEN));
        let outcome = project_detail::submit_application(
            &client,
            1,
            &ApplicationForm::Create,
            "I can do it",
            "250",
        )
        .await
        .unwrap();

        assert!(matches!(outcome, SubmitOutcome::Created(_)));
        assert!(outcome.locks_form());
    }

    #[tokio::test]
    async fn test_edit_uses_put_without_status() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/applications/5"))
            .and(body_json(json!({
                "proposal_text": "Better offer",
                "proposed_price": 200.0
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(application_json(5, 1, 20)))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let (client, _) = client(&server, Some(TOKEN));
        let form = ApplicationForm::Edit {
            application_id: 5,
            proposal_text: "I can do it".into(),
            proposed_price: 250.0,
        };
        let outcome =
            project_detail::submit_application(&client, 1, &form, "Better offer", "200")
                .await
                .unwrap();

        assert!(matches!(outcome, SubmitOutcome::Updated(_)));
        assert!(!outcome.locks_form());
    }

    #[tokio::test]
    async fn test_invalid_price_sends_nothing() {
        let server = MockServer::start().await;
        let (client, _) = client(&server, Some(TOKEN));

        for price in ["", "0", "-1", "cheap"] {
            let err = project_detail::submit_application(
                &client,
                1,
                &ApplicationForm::Create,
                "text",
                price,
            )
            .await
            .unwrap_err();
            assert!(matches!(err, ApiError::Invalid(_)));
        }
        assert_eq!(request_count(&server).await, 0);
    }

    #[tokio::test]
    async fn test_closed_form_refuses_without_request() {
        let server = MockServer::start().await;
        let (client, _) = client(&server, Some(TOKEN));

        let result = project_detail::submit_application(
            &client,
            1,
            &ApplicationForm::Closed,
            "text",
            "10",
        )
        .await;

        assert!(result.is_err());
        assert_eq!(request_count(&server).await, 0);
    }

    #[tokio::test]
    async fn test_rejected_token_during_submit_clears_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/applications/projects/1/applications/"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let (client, store) = client(&server, Some(TOKEN));
        let err = project_detail::submit_application(
            &client,
            1,
            &ApplicationForm::Create,
            "text",
            "10",
        )
        .await
        .unwrap_err();

        assert!(err.requires_sign_in());
        assert!(store.get().is_none());
    }
}

// =============================================================================
// Applications Review
// =============================================================================

mod review_page {
    use super::*;

    const LIST: &str = "/api/applications/projects/1/applications/";

    #[tokio::test]
    async fn test_cards_are_enriched_with_emails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(LIST))
            .and(header("Authorization", "Bearer T"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                application_json(5, 1, 20),
                application_json(6, 1, 21)
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/users/20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json(20, "freelancer")))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/users/21"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let (client, _) = client(&server, Some(TOKEN));
        let view = applications::load_applications(&client, 1).await.unwrap();

        let ApplicationsView::Cards(cards) = view else {
            panic!("Expected cards, got {view:?}");
        };
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].heading(), "Application #5 from user20@x.com");
        // Failed lookups fall back to the id
        assert_eq!(cards[1].heading(), "Application #6 from #21");
        assert_eq!(cards[0].price_display(), "250.00");
        assert_eq!(cards[0].created_display.as_deref(), Some("01.05.2024 10:07"));
    }

    #[tokio::test]
    async fn test_empty_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(LIST))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let (client, _) = client(&server, Some(TOKEN));

        assert_eq!(
            applications::load_applications(&client, 1).await.unwrap(),
            ApplicationsView::Empty
        );
    }

    #[tokio::test]
    async fn test_forbidden_and_missing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(LIST))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(json!({"detail": "Not your project"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/applications/projects/2/applications/"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"detail": "Project not found"})),
            )
            .mount(&server)
            .await;

        let (client, _) = client(&server, Some(TOKEN));

        assert_eq!(
            applications::load_applications(&client, 1).await.unwrap(),
            ApplicationsView::Denied("Not your project".into())
        );
        assert_eq!(
            applications::load_applications(&client, 2).await.unwrap(),
            ApplicationsView::NotFound("Project not found".into())
        );
    }

    #[tokio::test]
    async fn test_rejected_token_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(LIST))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let (client, store) = client(&server, Some(TOKEN));
        let err = applications::load_applications(&client, 1).await.unwrap_err();

        assert_eq!(err, ApiError::Unauthenticated);
        assert!(store.get().is_none());
    }
}
