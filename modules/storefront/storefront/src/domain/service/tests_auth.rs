#![allow(clippy::unwrap_used, clippy::expect_used)]

use storefront_auth::TokenValidator;
use storefront_sdk::NewUser;

use crate::domain::error::DomainError;
use crate::test_support::{test_services, token_service};

fn new_user(email: &str) -> NewUser {
    NewUser {
        name: "  Jane Doe ".to_owned(),
        email: email.to_owned(),
        password: "secret1".to_owned(),
        is_admin: false,
    }
}

#[tokio::test]
async fn register_normalizes_and_issues_token() {
    let (_db, services) = test_services().await;

    let session = services
        .auth
        .register(new_user("Jane@Example.COM"))
        .await
        .unwrap();

    assert_eq!(session.user.email, "jane@example.com");
    assert_eq!(session.user.name, "Jane Doe");
    assert!(!session.user.is_admin);

    let claims = token_service().validate(&session.access_token).unwrap();
    assert_eq!(claims.sub, session.user.id);
    assert_eq!(claims.user_id, session.user.id);
    assert_eq!(claims.email, "jane@example.com");
}

#[tokio::test]
async fn register_rejects_duplicate_email_case_insensitively() {
    let (_db, services) = test_services().await;

    services
        .auth
        .register(new_user("jane@example.com"))
        .await
        .unwrap();
    let err = services
        .auth
        .register(new_user("JANE@example.com"))
        .await
        .unwrap_err();

    assert!(
        matches!(err, DomainError::Conflict(ref m) if m == "User with this email already exists")
    );
}

#[tokio::test]
async fn login_round_trip() {
    let (_db, services) = test_services().await;
    let registered = services
        .auth
        .register(new_user("jane@example.com"))
        .await
        .unwrap();

    let session = services
        .auth
        .login("JANE@example.com", "secret1")
        .await
        .unwrap();
    assert_eq!(session.user.id, registered.user.id);
    assert_eq!(session.user.email, "jane@example.com");
    assert!(!session.access_token.is_empty());
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let (_db, services) = test_services().await;
    services
        .auth
        .register(new_user("jane@example.com"))
        .await
        .unwrap();

    let wrong_password = services
        .auth
        .login("jane@example.com", "wrong-password")
        .await
        .unwrap_err();
    let unknown_email = services
        .auth
        .login("nobody@example.com", "secret1")
        .await
        .unwrap_err();

    assert_eq!(wrong_password.to_string(), "Invalid email or password");
    assert_eq!(unknown_email.to_string(), wrong_password.to_string());
    assert!(matches!(wrong_password, DomainError::Unauthorized(_)));
}

#[tokio::test]
async fn login_with_unusable_hash_is_flattened() {
    let (db, services) = test_services().await;
    crate::test_support::seed_user(&db, "broken@example.com", false).await;

    let err = services
        .auth
        .login("broken@example.com", "secret1")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::BadRequest(ref m) if m == "Login failed"));
}

#[tokio::test]
async fn validate_user_returns_projection_or_none() {
    let (db, services) = test_services().await;
    let user = crate::test_support::seed_user(&db, "admin@example.com", true).await;

    let found = services.auth.validate_user(user.id).await.unwrap().unwrap();
    assert_eq!(found.id, user.id);
    assert!(found.is_admin);

    let missing = services
        .auth
        .validate_user(uuid::Uuid::now_v7())
        .await
        .unwrap();
    assert!(missing.is_none());
}
