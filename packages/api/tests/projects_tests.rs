//! Project list, creation and status changes against a mock API.

mod common;

use api::gate::CardActions;
use api::pages::projects::StatusControl;
use api::pages::{create_project, projects};
use api::{ApiError, CurrentUser, ProjectListQuery, ProjectStatus};
use common::{application_json, client, project_json, request_count, user_json, TOKEN};
use serde_json::json;
use store::TokenStore;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn viewer(id: i64, role: &str) -> CurrentUser {
    serde_json::from_value(user_json(id, role)).unwrap()
}

async fn mount_projects(server: &MockServer, projects: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/projects/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(projects))
        .mount(server)
        .await;
}

// =============================================================================
// Listing
// =============================================================================

mod listing {
    use super::*;

    #[tokio::test]
    async fn test_project_reads_never_send_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/projects/"))
            .and(header_exists("Authorization"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;
        mount_projects(&server, json!([project_json(1, 10, "open")])).await;

        let (client, _) = client(&server, Some(TOKEN));
        let view = projects::load_project_list(&client, None, &ProjectListQuery::default())
            .await
            .unwrap();

        assert_eq!(view.cards.len(), 1);
    }

    #[tokio::test]
    async fn test_query_parameters_are_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/projects/"))
            .and(query_param("search", "rust"))
            .and(query_param("status", "in_progress"))
            .and(query_param("skip", "20"))
            .and(query_param("limit", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let (client, _) = client(&server, None);
        let query = ProjectListQuery {
            search: " rust ".into(),
            status: Some(ProjectStatus::InProgress),
            ..ProjectListQuery::default()
        }
        .next_page();
        let view = projects::load_project_list(&client, None, &query).await.unwrap();

        assert!(view.cards.is_empty());
        assert_eq!(view.empty_text(), Some("No projects found."));
    }

    #[tokio::test]
    async fn test_guest_sees_all_with_view_on_open_only() {
        let server = MockServer::start().await;
        mount_projects(
            &server,
            json!([project_json(1, 10, "open"), project_json(2, 11, "closed")]),
        )
        .await;

        let (client, _) = client(&server, None);
        let view = projects::load_project_list(&client, None, &ProjectListQuery::default())
            .await
            .unwrap();

        let actions: Vec<_> = view.cards.iter().map(|c| c.actions).collect();
        assert_eq!(actions, vec![CardActions::View, CardActions::None]);
        assert!(!view.can_create);
        assert!(!view.has_more);
    }

    #[tokio::test]
    async fn test_employer_sees_own_projects_with_controls() {
        let server = MockServer::start().await;
        mount_projects(
            &server,
            json!([
                project_json(1, 10, "open"),
                project_json(2, 11, "open"),
                project_json(3, 10, "closed")
            ]),
        )
        .await;

        let (client, _) = client(&server, Some(TOKEN));
        let employer = viewer(10, "employer");
        let view = projects::load_project_list(&client, Some(&employer), &ProjectListQuery::default())
            .await
            .unwrap();

        let ids: Vec<_> = view.cards.iter().map(|c| c.project.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(view.cards.iter().all(|c| c.actions == CardActions::Manage));
        assert!(view.can_create);
        // No application probes for employers
        assert_eq!(request_count(&server).await, 1);
    }

    #[tokio::test]
    async fn test_freelancer_cards_reflect_existing_applications() {
        let server = MockServer::start().await;
        mount_projects(
            &server,
            json!([
                project_json(1, 10, "open"),
                project_json(2, 10, "open"),
                project_json(3, 10, "closed"),
                project_json(4, 11, "open")
            ]),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/api/applications/projects/1/applications/me"))
            .and(header("Authorization", "Bearer T"))
            .respond_with(ResponseTemplate::new(200).set_body_json(application_json(5, 1, 20)))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/applications/projects/2/applications/me"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"detail": "Application not found"})),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/applications/projects/4/applications/me"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let (client, _) = client(&server, Some(TOKEN));
        let freelancer = viewer(20, "freelancer");
        let view =
            projects::load_project_list(&client, Some(&freelancer), &ProjectListQuery::default())
                .await
                .unwrap();

        let cards: Vec<_> = view.cards.iter().map(|c| (c.project.id, c.actions)).collect();
        assert_eq!(
            cards,
            vec![
                (1, CardActions::EditApplication),
                (2, CardActions::Apply),
                // A failed probe only degrades its own card
                (4, CardActions::Apply),
            ]
        );
    }

    #[tokio::test]
    async fn test_rejected_token_during_card_lookups_fails_the_list() {
        let server = MockServer::start().await;
        mount_projects(
            &server,
            json!([project_json(1, 10, "open"), project_json(2, 10, "open")]),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/api/applications/projects/1/applications/me"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/applications/projects/2/applications/me"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let (client, store) = client(&server, Some(TOKEN));
        let freelancer = viewer(20, "freelancer");
        let err =
            projects::load_project_list(&client, Some(&freelancer), &ProjectListQuery::default())
                .await
                .unwrap_err();

        assert_eq!(err, ApiError::Unauthenticated);
        assert!(store.get().is_none());
    }

    #[tokio::test]
    async fn test_full_page_means_more() {
        let server = MockServer::start().await;
        mount_projects(
            &server,
            json!([project_json(1, 10, "open"), project_json(2, 10, "open")]),
        )
        .await;

        let (client, _) = client(&server, None);
        let query = ProjectListQuery {
            limit: 2,
            ..ProjectListQuery::default()
        };
        let view = projects::load_project_list(&client, None, &query).await.unwrap();

        assert!(view.has_more);
    }
}

// =============================================================================
// Status and statistics
// =============================================================================

mod management {
    use super::*;

    #[tokio::test]
    async fn test_status_change_is_one_put_with_status_only() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/projects/3"))
            .and(header("Authorization", "Bearer T"))
            .and(body_json(json!({"status": "closed"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(project_json(3, 10, "closed")))
            .expect(1)
            .mount(&server)
            .await;

        let (client, _) = client(&server, Some(TOKEN));
        let status = projects::change_status(&client, 3, ProjectStatus::Closed)
            .await
            .unwrap();

        assert_eq!(status, ProjectStatus::Closed);
        assert_eq!(request_count(&server).await, 1);
    }

    #[tokio::test]
    async fn test_status_control_follows_the_server() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/projects/3"))
            .and(body_json(json!({"status": "in_progress"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(project_json(3, 10, "in_progress")),
            )
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/projects/3"))
            .and(body_json(json!({"status": "closed"})))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({"detail": "Invalid status transition"})),
            )
            .mount(&server)
            .await;

        let (client, _) = client(&server, Some(TOKEN));
        let mut control = StatusControl::new(ProjectStatus::Open);

        control.select(ProjectStatus::InProgress);
        let stored = projects::change_status(&client, 3, control.selected)
            .await
            .unwrap();
        control.confirm(stored);
        assert_eq!(control, StatusControl::new(ProjectStatus::InProgress));

        control.select(ProjectStatus::Closed);
        let err = projects::change_status(&client, 3, control.selected)
            .await
            .unwrap_err();
        control.reject();
        assert_eq!(err.to_string(), "Invalid status transition");
        assert_eq!(control.selected, ProjectStatus::InProgress);
        assert_eq!(control.label, ProjectStatus::InProgress);
    }

    #[tokio::test]
    async fn test_status_change_without_token_is_unauthenticated() {
        let server = MockServer::start().await;
        let (client, _) = client(&server, None);

        let err = projects::change_status(&client, 3, ProjectStatus::Open)
            .await
            .unwrap_err();

        assert_eq!(err, ApiError::Unauthenticated);
        assert_eq!(request_count(&server).await, 0);
    }

    #[tokio::test]
    async fn test_stats_tolerate_missing_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/projects/3/stats"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"applications_count": 4, "average_price": 120.5})),
            )
            .mount(&server)
            .await;

        let (client, _) = client(&server, Some(TOKEN));
        let stats = projects::load_stats(&client, 3).await.unwrap();

        assert_eq!(stats.applications_count, Some(4));
        assert!(stats.pending_count.is_none());
        assert_eq!(
            projects::stats_rows(&stats),
            vec![
                ("Applications", "4".to_string()),
                ("Average price", "120.50".to_string())
            ]
        );
    }
}

// =============================================================================
// Creation
// =============================================================================

mod creation {
    use super::*;

    #[tokio::test]
    async fn test_create_posts_open_project() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/projects/"))
            .and(header("Authorization", "Bearer T"))
            .and(body_json(json!({
                "title": "Landing page",
                "description": "One page",
                "budget": 1500.0,
                "status": "open"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(project_json(9, 10, "open")))
            .expect(1)
            .mount(&server)
            .await;

        let (client, _) = client(&server, Some(TOKEN));
        let project = create_project::create_project(&client, "Landing page", "One page", "1500")
            .await
            .unwrap();

        assert_eq!(project.id, 9);
    }

    #[tokio::test]
    async fn test_invalid_budget_sends_nothing() {
        let server = MockServer::start().await;
        let (client, _) = client(&server, Some(TOKEN));

        for budget in ["", "abc", "0", "-5"] {
            let err = create_project::create_project(&client, "Title", "", budget)
                .await
                .unwrap_err();
            assert!(matches!(err, ApiError::Invalid(_)));
        }
        assert_eq!(request_count(&server).await, 0);
    }

    #[tokio::test]
    async fn test_validation_detail_is_serialised() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/projects/"))
            .respond_with(
                ResponseTemplate::new(422)
                    .set_body_json(json!({"detail": [{"msg": "field required"}]})),
            )
            .mount(&server)
            .await;

        let (client, _) = client(&server, Some(TOKEN));
        let err = create_project::create_project(&client, "Title", "", "10")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), r#"[{"msg":"field required"}]"#);
    }

    #[test]
    fn test_only_employers_may_create() {
        use create_project::{create_access, CreateAccess};

        assert_eq!(create_access(&viewer(1, "employer")), CreateAccess::Allowed);
        assert_eq!(create_access(&viewer(2, "freelancer")), CreateAccess::EmployersOnly);
        assert_eq!(create_access(&viewer(3, "admin")), CreateAccess::EmployersOnly);
    }
}
