mod support;

use std::sync::Arc;

use common_identity::Role;
use dashboard_client::models::NewSchedule;
use dashboard_client::session::SessionStore;
use httpmock::prelude::*;
use support::{app_against, identity, RecordingNavigator};

fn user_json(id: &str, username: &str, first: &str, role: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "username": username,
        "email": format!("{username}@example.com"),
        "firstName": first,
        "lastName": "Person",
        "role": role
    })
}

#[tokio::test]
async fn role_filter_and_search_reuse_one_cached_fetch() {
    let server = MockServer::start();
    let users_mock = server.mock(|when, then| {
        when.method(GET).path("/v1/api/user/allusers");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!([
                user_json("1", "alice", "Alice", "teacher"),
                user_json("2", "bob", "Bob", "student"),
                user_json("3", "carol", "Carol", "Teacher"),
            ]));
    });

    let session = SessionStore::in_memory();
    session.set_auth("token", "refresh", identity(Role::Admin));
    let app = app_against(
        &server.base_url(),
        session,
        Arc::new(RecordingNavigator::default()),
    );

    // mixed-case role strings in the payload normalize through the one
    // parse point, so both teachers match
    let teachers = app.users.teachers().await.expect("teachers");
    assert_eq!(teachers.len(), 2);

    let students = app.users.students().await.expect("students");
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].username, "bob");

    let found = app.users.search_users("CAR").await.expect("search");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].username, "carol");

    // three lookups, one backend fetch
    assert_eq!(users_mock.hits(), 1);
}

#[tokio::test]
async fn attendance_rate_counts_present_records() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/v1/api/attendance/student/s1");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!([
                { "id": "a1", "student_id": "s1", "schedule_id": "x", "here": true, "counter": 1 },
                { "id": "a2", "student_id": "s1", "schedule_id": "y", "here": false, "counter": 1 },
                { "id": "a3", "student_id": "s1", "schedule_id": "z", "here": true, "counter": 2 },
            ]));
    });

    let session = SessionStore::in_memory();
    session.set_auth("token", "refresh", identity(Role::Teacher));
    let app = app_against(
        &server.base_url(),
        session,
        Arc::new(RecordingNavigator::default()),
    );

    let rate = app.attendance.attendance_rate("s1").await.expect("rate");
    assert_eq!(rate, 67);
}

#[tokio::test]
async fn due_soon_and_week_pass_query_parameters() {
    let server = MockServer::start();
    let due_soon = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/api/homework/due-soon")
            .query_param("hours", "48");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!([]));
    });
    let week = server.mock(|when, then| {
        when.method(GET)
            .path("/v1/api/schedule/week")
            .query_param("start_date", "2025-03-10");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let session = SessionStore::in_memory();
    session.set_auth("token", "refresh", identity(Role::Teacher));
    let app = app_against(
        &server.base_url(),
        session,
        Arc::new(RecordingNavigator::default()),
    );

    app.homework.homework_due_soon(48).await.expect("due soon");
    app.schedules
        .week_schedules(Some("2025-03-10"))
        .await
        .expect("week");

    due_soon.assert();
    week.assert();
}

#[tokio::test]
async fn conflict_check_unwraps_conflict_list() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/v1/api/schedule/check-conflicts")
            .json_body(serde_json::json!({
                "teacher_id": "t1",
                "class_id": "c1",
                "date": "2025-03-10",
                "time": "09:00"
            }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "conflicts": [{
                    "id": "s9",
                    "date": "2025-03-10",
                    "time": "09:00",
                    "teacher_id": "t1",
                    "lesson_id": "math",
                    "class_id": "c4"
                }]
            }));
    });

    let session = SessionStore::in_memory();
    session.set_auth("token", "refresh", identity(Role::Teacher));
    let app = app_against(
        &server.base_url(),
        session,
        Arc::new(RecordingNavigator::default()),
    );

    let candidate = NewSchedule {
        date: "2025-03-10".to_string(),
        time: "09:00".to_string(),
        teacher_id: "t1".to_string(),
        lesson_id: "math".to_string(),
        class_id: "c1".to_string(),
    };
    let conflicts = app
        .schedules
        .check_conflicts(&candidate)
        .await
        .expect("conflict check");
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].id, "s9");
}
