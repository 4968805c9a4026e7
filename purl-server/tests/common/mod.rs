//! Shared fixtures for the acceptance suite
//!
//! Boots the full router on an ephemeral loopback port and provides the
//! canonical member payloads plus precondition helpers. Every test binary
//! pulls this in; not all of them use every helper.

#![allow(dead_code)]

use std::collections::BTreeSet;

use chrono::NaiveDate;
use purl_client::{ClientConfig, MemberClient};
use purl_server::{Config, ServerState, build_router};
use shared::{AddressPayload, KnittingStitch, MemberPayload, Role};

/// Handle to a server instance running for one test
pub struct TestApp {
    /// Base URL, e.g. `http://127.0.0.1:41234`
    pub base_url: String,
    /// Member resource URL, e.g. `http://127.0.0.1:41234/members`
    pub resource_url: String,
    /// Plain HTTP client for raw status/shape assertions
    pub http: reqwest::Client,
}

impl TestApp {
    /// Typed client with arbitrary credentials
    pub fn client_for(&self, username: &str, password: &str) -> MemberClient {
        ClientConfig::new(&self.base_url)
            .with_credentials(username, password)
            .build_client()
    }

    /// Typed client without credentials
    pub fn anonymous_client(&self) -> MemberClient {
        ClientConfig::new(&self.base_url).build_client()
    }

    pub fn user_client(&self) -> MemberClient {
        self.client_for("user", "password")
    }

    pub fn admin_client(&self) -> MemberClient {
        self.client_for("admin", "admin")
    }

    pub fn super_admin_client(&self) -> MemberClient {
        self.client_for("super-admin", "super-admin")
    }
}

/// Boot the service on an ephemeral port and hand back a [`TestApp`]
pub async fn spawn_app() -> TestApp {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");
    let port = listener
        .local_addr()
        .expect("failed to read local address")
        .port();

    let config = Config::with_port(port);
    let state = ServerState::initialize(&config).expect("failed to initialize server state");
    let app = build_router(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server stopped");
    });

    let base_url = format!("http://127.0.0.1:{port}");
    TestApp {
        resource_url: format!("{base_url}/members"),
        base_url,
        http: reqwest::Client::new(),
    }
}

/// A complete, valid member payload
pub fn a_member() -> MemberPayload {
    MemberPayload {
        id: None,
        first_name: Some("First name".to_string()),
        last_name: Some("Last name".to_string()),
        email: Some("first.last@email.com".to_string()),
        phone_number: Some("011/12.34.56".to_string()),
        birth_date: NaiveDate::from_ymd_opt(1989, 6, 13),
        role: Some(Role::Member),
        known_stitches: Some(BTreeSet::from([
            KnittingStitch::Cable,
            KnittingStitch::BeginnerLace,
        ])),
        address: Some(AddressPayload {
            street: Some("A Street".to_string()),
            number: Some(123),
            po_box: None,
            zip_code: Some(1234),
            city: Some("City".to_string()),
        }),
    }
}

/// A payload violating every validation rule at once
pub fn an_invalid_member() -> MemberPayload {
    MemberPayload {
        id: None,
        first_name: None,
        last_name: None,
        email: None,
        phone_number: None,
        birth_date: NaiveDate::from_ymd_opt(3000, 3, 3),
        role: None,
        known_stitches: Some(BTreeSet::new()),
        address: Some(AddressPayload {
            street: None,
            number: Some(-123),
            po_box: None,
            zip_code: Some(-1234),
            city: None,
        }),
    }
}

/// Ensure at least one member exists, creating one as admin if needed
pub async fn given_at_least_one_member_exists(app: &TestApp) {
    let members = app
        .user_client()
        .list_members()
        .await
        .expect("unable to list members")
        .members;

    if members.is_empty() {
        app.admin_client()
            .create_member(&a_member())
            .await
            .expect("Unable to create a member");
    }
}

/// Pick a random id from the current member list
pub async fn an_existing_id(app: &TestApp) -> i64 {
    given_at_least_one_member_exists(app).await;

    let members = app
        .user_client()
        .list_members()
        .await
        .expect("unable to list members")
        .members;
    let index = rand::random::<usize>() % members.len();
    members[index].id
}
