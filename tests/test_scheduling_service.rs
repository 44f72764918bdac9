//! Orchestrator tests: validation, dispatch and the lookup tools.

mod mocks;

use mocks::{MockCalcomClient, MockCalendlyClient};
use scheduling_mcp_server::error::SchedulingError;
use scheduling_mcp_server::models::{OrganizationInfo, Platform};
use scheduling_mcp_server::services::{SchedulingService, SchedulingServiceImpl, SearchLinksParams};
use scheduling_mcp_server::Credentials;
use serde_json::json;
use std::sync::Arc;

struct Fixture {
    calcom: MockCalcomClient,
    calendly: MockCalendlyClient,
    service: SchedulingServiceImpl,
}

impl Fixture {
    fn with_credentials(credentials: Credentials) -> Self {
        let calcom = MockCalcomClient::new();
        let calendly = MockCalendlyClient::new();
        let service = SchedulingServiceImpl::new(
            Arc::new(calcom.clone()),
            Arc::new(calendly.clone()),
            credentials,
        );
        Self {
            calcom,
            calendly,
            service,
        }
    }

    fn new() -> Self {
        Self::with_credentials(Credentials {
            calcom_api_key: Some("cal-key".to_string()),
            calcom_org_id: Some("999".to_string()),
            calendly_pat: Some("cly-pat".to_string()),
        })
    }

    fn network_calls(&self) -> usize {
        self.calcom.total_calls() + self.calendly.total_calls()
    }
}

fn params(platform: &str, name: &str, company: &str, org_id: Option<&str>) -> SearchLinksParams {
    SearchLinksParams {
        platform: platform.to_string(),
        name: name.to_string(),
        company: company.to_string(),
        org_id: org_id.map(str::to_string),
        api_key: None,
    }
}

fn invalid_message(err: SchedulingError) -> String {
    match err {
        SchedulingError::InvalidParameters(msg) => msg,
        other => panic!("Expected InvalidParameters, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_name_fails_before_network() {
    let fixture = Fixture::new();

    let err = fixture
        .service
        .search_scheduling_links(params("calcom", "", "TechCorp", Some("42")))
        .await
        .unwrap_err();

    assert_eq!(invalid_message(err), "Name is required and cannot be empty");
    assert_eq!(fixture.network_calls(), 0);
}

#[tokio::test]
async fn test_validation_order_first_violation_wins() {
    let fixture = Fixture::new();

    let err = fixture
        .service
        .search_scheduling_links(params("outlook", "", "", None))
        .await
        .unwrap_err();
    assert_eq!(
        invalid_message(err),
        "Platform must be either 'calcom' or 'calendly'"
    );

    let err = fixture
        .service
        .search_scheduling_links(params("calcom", "  ", "", None))
        .await
        .unwrap_err();
    assert_eq!(invalid_message(err), "Name is required and cannot be empty");

    let err = fixture
        .service
        .search_scheduling_links(params("calcom", "Jane", " \t", None))
        .await
        .unwrap_err();
    assert_eq!(invalid_message(err), "Company is required and cannot be empty");

    assert_eq!(fixture.network_calls(), 0);
}

#[tokio::test]
async fn test_platform_literal_is_case_sensitive() {
    let fixture = Fixture::new();

    let err = fixture
        .service
        .search_scheduling_links(params("Calcom", "Jane", "Acme", Some("42")))
        .await
        .unwrap_err();

    assert!(err.is_invalid_parameters());
}

#[tokio::test]
async fn test_calcom_requires_org_id() {
    let fixture = Fixture::new();

    for org_id in [None, Some(""), Some("   ")] {
        let err = fixture
            .service
            .search_scheduling_links(params("calcom", "John Doe", "TechCorp", org_id))
            .await
            .unwrap_err();
        assert!(invalid_message(err).starts_with("org_id is required for Cal.com searches"));
    }

    // The configured default org id is not a fallback
    assert_eq!(fixture.network_calls(), 0);
}

#[tokio::test]
async fn test_missing_credential_fails_before_network() {
    let fixture = Fixture::with_credentials(Credentials::default());

    let err = fixture
        .service
        .search_scheduling_links(params("calendly", "Jane", "Acme", None))
        .await
        .unwrap_err();

    assert!(matches!(err, SchedulingError::MissingCredential(_)));
    assert_eq!(fixture.network_calls(), 0);
}

#[tokio::test]
async fn test_calcom_search_end_to_end() {
    let fixture = Fixture::new();
    fixture
        .calcom
        .add_user(json!({"id": 1, "username": "jdoe", "name": "John Doe", "email": "john@techcorp.com"}));
    fixture
        .calcom
        .add_user(json!({"id": 2, "username": "other", "name": "Other Person", "email": "other@techcorp.com"}));
    fixture.calcom.set_event_types(
        "1",
        vec![
            json!({"slug": "private", "hidden": true}),
            json!({"slug": "intro", "hidden": false}),
        ],
    );

    let response = fixture
        .service
        .search_scheduling_links(params("calcom", "  John Doe ", " TechCorp ", Some("42")))
        .await
        .unwrap();

    assert_eq!(
        response.message,
        "Found 1 scheduling link(s) for 'John Doe' at 'TechCorp' on calcom"
    );
    assert_eq!(response.results.len(), 1);
    assert_eq!(
        response.results[0].booking_links,
        vec!["https://cal.com/jdoe/intro".to_string()]
    );
    assert_eq!(fixture.calendly.total_calls(), 0);
}

#[tokio::test]
async fn test_calendly_without_organization_is_empty_success() {
    let fixture = Fixture::new();
    fixture.calendly.set_current_user(json!({
        "uri": "https://api.calendly.com/users/ME",
        "name": "Solo",
        "current_organization": null
    }));

    let response = fixture
        .service
        .search_scheduling_links(params("calendly", "Jane Smith", "Acme", Some("ignored")))
        .await
        .unwrap();

    assert_eq!(
        response.message,
        "No scheduling links found for 'Jane Smith' at 'Acme' on calendly"
    );
    assert!(response.results.is_empty());
    assert_eq!(
        fixture.calendly.get_call_count("list_organization_memberships"),
        0
    );
}

#[tokio::test]
async fn test_repeated_search_is_identical() {
    let fixture = Fixture::new();
    for (id, name) in [(4, "Ann Lee"), (2, "Bo Lee"), (9, "Cy Lee")] {
        fixture
            .calcom
            .add_user(json!({"id": id, "username": format!("u{}", id), "name": name, "email": format!("{}@acme.com", id)}));
        fixture.calcom.set_event_types(
            &id.to_string(),
            vec![json!({"slug": "a", "hidden": false}), json!({"slug": "b", "hidden": false})],
        );
    }

    let first = fixture
        .service
        .search_scheduling_links(params("calcom", "Lee", "Acme", Some("42")))
        .await
        .unwrap();
    let second = fixture
        .service
        .search_scheduling_links(params("calcom", "Lee", "Acme", Some("42")))
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first.results.len(), 3);
}

#[tokio::test]
async fn test_upstream_error_surfaces() {
    let fixture = Fixture::new();
    fixture.calcom.fail_users_with(500);

    let err = fixture
        .service
        .search_scheduling_links(params("calcom", "Jane", "Acme", Some("42")))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SchedulingError::Upstream {
            platform: Platform::Calcom,
            ..
        }
    ));
    assert!(err.to_string().starts_with("Cal.com API error: 500"));
}

#[test]
fn test_scheduling_config_reports_presence_only() {
    let fixture = Fixture::with_credentials(Credentials {
        calcom_api_key: Some("secret-key".to_string()),
        calcom_org_id: None,
        calendly_pat: Some("secret-pat".to_string()),
    });

    let status = fixture.service.scheduling_config();
    assert!(status.calcom.api_key_configured);
    assert!(!status.calcom.org_id_configured);
    assert!(!status.calcom.ready);
    assert!(status.calendly.ready);

    let json = serde_json::to_string(&status).unwrap();
    assert!(!json.contains("secret-key"));
    assert!(!json.contains("secret-pat"));
}

#[tokio::test]
async fn test_calcom_organization_info() {
    let fixture = Fixture::new();
    fixture
        .calcom
        .add_organization(json!({"id": 42, "name": "TechCorp", "slug": "techcorp"}));

    let info = fixture
        .service
        .organization_info("calcom", Some("override".to_string()))
        .await
        .unwrap();

    match info {
        OrganizationInfo::Calcom {
            platform,
            organizations,
        } => {
            assert_eq!(platform, Platform::Calcom);
            assert_eq!(organizations.len(), 1);
            assert_eq!(organizations[0].id, json!(42));
            assert_eq!(
                organizations[0].description,
                "Use org_id='42' for searches in this organization"
            );
        }
        other => panic!("Expected Cal.com info, got {:?}", other),
    }
    assert_eq!(fixture.calcom.calls(), vec!["list_organizations:override".to_string()]);
}

#[tokio::test]
async fn test_calendly_organization_info() {
    let fixture = Fixture::new();
    fixture.calendly.set_current_user(json!({
        "uri": "https://api.calendly.com/users/ME",
        "name": "Jane",
        "email": "jane@acme.com",
        "current_organization": "https://api.calendly.com/organizations/ORG1"
    }));

    let info = fixture.service.organization_info("calendly", None).await.unwrap();

    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["platform"], "calendly");
    assert_eq!(json["user_name"], "Jane");
    assert_eq!(
        json["organization_uri"],
        "https://api.calendly.com/organizations/ORG1"
    );
}

#[tokio::test]
async fn test_organization_info_errors() {
    let fixture = Fixture::with_credentials(Credentials::default());

    let err = fixture
        .service
        .organization_info("zoom", None)
        .await
        .unwrap_err();
    assert_eq!(
        invalid_message(err),
        "Platform must be 'calcom' or 'calendly'"
    );

    let err = fixture
        .service
        .organization_info("calcom", None)
        .await
        .unwrap_err();
    assert!(matches!(err, SchedulingError::MissingCredential(ref msg) if msg == "Cal.com API key required"));

    let err = fixture
        .service
        .organization_info("calendly", Some(String::new()))
        .await
        .unwrap_err();
    assert!(matches!(err, SchedulingError::MissingCredential(ref msg) if msg == "Calendly PAT required"));

    assert_eq!(fixture.network_calls(), 0);
}
