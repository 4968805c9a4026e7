//! Status contract for `DELETE /members/{id}`

mod common;

use common::{a_member, spawn_app};
use reqwest::StatusCode;

#[tokio::test]
async fn test_delete_member_without_credentials_is_unauthorized() {
    let app = spawn_app().await;
    let created = app.admin_client().create_member(&a_member()).await.unwrap();

    let response = app
        .http
        .delete(format!("{}/{}", app.resource_url, created.id))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_member_as_user_is_forbidden() {
    let app = spawn_app().await;
    let created = app.admin_client().create_member(&a_member()).await.unwrap();

    let response = app
        .http
        .delete(format!("{}/{}", app.resource_url, created.id))
        .basic_auth("user", Some("password"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_member_as_admin_is_no_content() {
    let app = spawn_app().await;
    let created = app.admin_client().create_member(&a_member()).await.unwrap();

    let response = app
        .http
        .delete(format!("{}/{}", app.resource_url, created.id))
        .basic_auth("admin", Some("admin"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_member_as_super_admin_is_no_content() {
    let app = spawn_app().await;
    let created = app.admin_client().create_member(&a_member()).await.unwrap();

    let response = app
        .http
        .delete(format!("{}/{}", app.resource_url, created.id))
        .basic_auth("super-admin", Some("super-admin"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_unknown_member_is_not_found() {
    let app = spawn_app().await;

    let response = app
        .http
        .delete(format!("{}/{}", app.resource_url, i64::MAX))
        .basic_auth("admin", Some("admin"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// The first delete removes the member; repeating it must not report success.
#[tokio::test]
async fn test_delete_twice_is_not_found() {
    let app = spawn_app().await;
    let created = app.admin_client().create_member(&a_member()).await.unwrap();
    let url = format!("{}/{}", app.resource_url, created.id);

    let first = app
        .http
        .delete(&url)
        .basic_auth("admin", Some("admin"))
        .send()
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::NO_CONTENT);

    let second = app
        .http
        .delete(&url)
        .basic_auth("admin", Some("admin"))
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}
