use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use pulse_hr::{
    AppState, EmployeeId, EmployeePatch, EmployeePayload, EmployeeQuery, EmployeeStore,
    FilterField, HrError, InMemoryEmployeeStore, Insights, Pagination, RemoteEmployeeStore,
    SortField, SortOrder, build_router, store::RemoteConfig,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Serve a seeded directory on an ephemeral port and point a remote store at it.
async fn remote_over_live_server() -> RemoteEmployeeStore {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    let app = build_router(AppState::new(
        Arc::new(InMemoryEmployeeStore::seeded()),
        Insights::seeded(),
    ));
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server should run");
    });

    RemoteEmployeeStore::new(&RemoteConfig::new(format!("http://{addr}/api")))
        .expect("client should build")
}

fn remote_for(server: &MockServer) -> RemoteEmployeeStore {
    RemoteEmployeeStore::new(
        &RemoteConfig::new(format!("{}/api", server.uri())).timeout(Duration::from_secs(2)),
    )
    .expect("client should build")
}

fn new_hire() -> EmployeePayload {
    EmployeePayload {
        first_name: "Rosa".to_string(),
        last_name: "Quint".to_string(),
        email: "rosa.quint@finance.hr".to_string(),
        department: "Finance".to_string(),
        role: "Controller".to_string(),
        hire_date: NaiveDate::from_ymd_opt(2024, 9, 2).expect("valid date"),
        performance_score: 84,
    }
}

#[tokio::test]
async fn query_round_trips_filters_sort_and_paging() {
    let store = remote_over_live_server().await;

    let page = store
        .query(
            &EmployeeQuery::new()
                .filter_any(FilterField::Role, ["people", "recruiter"])
                .sort_by(SortField::HireDate, SortOrder::Descend)
                .paginate(Pagination::new(1, 2).expect("valid pagination")),
        )
        .await
        .expect("query should succeed");

    assert_eq!(page.total, 3);
    assert_eq!(page.page_size, 2);
    let names: Vec<_> = page.records.iter().map(|e| e.first_name.as_str()).collect();
    assert_eq!(names, ["Marcus", "Nia"]);
}

#[tokio::test]
async fn create_round_trips_every_field() {
    let store = remote_over_live_server().await;

    let created = store.create(new_hire()).await.expect("create should succeed");
    assert_eq!(created.id, EmployeeId(6));
    assert_eq!(created.hire_date, NaiveDate::from_ymd_opt(2024, 9, 2).unwrap());

    let fetched = store
        .get(created.id)
        .await
        .expect("get should succeed")
        .expect("record should exist");
    assert_eq!(fetched, created);

    let page = store
        .query(&EmployeeQuery::new().filter(FilterField::Email, "rosa.quint@finance.hr"))
        .await
        .expect("query should succeed");
    assert_eq!(page.records, vec![created]);
}

#[tokio::test]
async fn update_delete_and_bulk_delete_over_http() {
    let store = remote_over_live_server().await;

    let updated = store
        .update(
            EmployeeId(5),
            EmployeePatch {
                department: Some("Design".to_string()),
                ..EmployeePatch::default()
            },
        )
        .await
        .expect("update should succeed");
    assert_eq!(updated.department, "Design");

    store
        .delete(EmployeeId(5))
        .await
        .expect("first delete should succeed");
    let err = store.delete(EmployeeId(5)).await.unwrap_err();
    assert!(matches!(err, HrError::NotFound(EmployeeId(5))));

    let err = store
        .update(
            EmployeeId(5),
            EmployeePatch {
                role: Some("Ghost".to_string()),
                ..EmployeePatch::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, HrError::NotFound(EmployeeId(5))));

    let report = store
        .delete_bulk(&[EmployeeId(1), EmployeeId(5)])
        .await
        .expect("bulk delete should succeed");
    assert_eq!(report.deleted, vec![EmployeeId(1)]);
    assert_eq!(report.missing, vec![EmployeeId(5)]);

    assert!(store.get(EmployeeId(1)).await.expect("get").is_none());
}

#[tokio::test]
async fn invalid_payload_surfaces_as_validation() {
    let store = remote_over_live_server().await;
    let mut payload = new_hire();
    payload.email = "not-an-email".to_string();

    let err = store.create(payload).await.unwrap_err();
    assert!(matches!(err, HrError::Validation(message) if message.contains("email")));
}

#[tokio::test]
async fn server_error_maps_to_transport() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": "database offline" })),
        )
        .mount(&server)
        .await;

    let err = remote_for(&server)
        .query(&EmployeeQuery::new())
        .await
        .unwrap_err();
    assert!(matches!(err, HrError::Transport(message) if message.contains("database offline")));
}

#[tokio::test]
async fn bad_request_maps_to_validation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/employees"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "email is taken" })),
        )
        .mount(&server)
        .await;

    let err = remote_for(&server).create(new_hire()).await.unwrap_err();
    assert!(matches!(err, HrError::Validation(message) if message == "email is taken"));
}

#[tokio::test]
async fn missing_record_maps_to_not_found_or_none() {
    let server = MockServer::start().await;
    Mock::given(path("/api/employees/8"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "gone" })))
        .mount(&server)
        .await;

    let remote = remote_for(&server);
    assert!(remote.get(EmployeeId(8)).await.expect("get").is_none());
    assert!(matches!(
        remote.delete(EmployeeId(8)).await,
        Err(HrError::NotFound(EmployeeId(8)))
    ));
}

#[tokio::test]
async fn bare_not_found_is_a_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(path("/wrong/employees/3"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let remote = RemoteEmployeeStore::new(&RemoteConfig::new(format!("{}/wrong", server.uri())))
        .expect("client should build");
    assert!(matches!(
        remote.get(EmployeeId(3)).await,
        Err(HrError::Transport(_))
    ));
    assert!(matches!(
        remote.delete(EmployeeId(3)).await,
        Err(HrError::Transport(_))
    ));
}

#[tokio::test]
async fn undecodable_body_maps_to_transport() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = remote_for(&server)
        .query(&EmployeeQuery::new())
        .await
        .unwrap_err();
    assert!(matches!(err, HrError::Transport(_)));
}

#[tokio::test]
async fn unreachable_server_maps_to_transport() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let remote = RemoteEmployeeStore::new(
        &RemoteConfig::new(format!("http://{addr}/api")).timeout(Duration::from_secs(2)),
    )
    .expect("client should build");

    let err = remote.query(&EmployeeQuery::new()).await.unwrap_err();
    assert!(matches!(err, HrError::Transport(_)));
}
