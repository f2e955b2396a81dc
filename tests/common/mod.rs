//! Shared helpers for database-backed tests
//!
//! Each test starts its own PostgreSQL container so tests stay isolated.

#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use sqlx::PgPool;
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;

use contestboard::{
    AppState, Config,
    db,
    models::TeamMember,
    storage::{AssetUploader, UploadError, UploadedFile},
};

/// Running database plus a migrated pool. The container stops when dropped.
pub struct TestDb {
    pub pool: PgPool,
    pub url: String,
    _container: ContainerAsync<Postgres>,
}

pub async fn start_db() -> TestDb {
    let container = Postgres::default()
        .with_user("contestboard")
        .with_password("contestboard_test")
        .with_db_name("contestboard_test")
        .start()
        .await
        .expect("Failed to start PostgreSQL container");

    let host = container.get_host().await.unwrap();
    let port = container.get_host_port_ipv4(5432).await.unwrap();
    let url = format!(
        "postgres://contestboard:contestboard_test@{}:{}/contestboard_test",
        host, port
    );

    let pool = PgPool::connect(&url)
        .await
        .expect("Failed to connect to test database");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    TestDb {
        pool,
        url,
        _container: container,
    }
}

/// Uploader that hands back predictable URLs and counts calls. When
/// `fail_on` is set, that call (1-based) fails with a transport error.
#[derive(Default)]
pub struct FakeUploader {
    calls: AtomicUsize,
    fail_on: Option<usize>,
}

impl FakeUploader {
    pub fn failing_on(call: usize) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_on: Some(call),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssetUploader for FakeUploader {
    async fn upload(&self, file: &UploadedFile) -> Result<String, UploadError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_on == Some(call) {
            return Err(UploadError::Transport("connection reset".to_string()));
        }
        Ok(format!("https://assets.test/{}", file.display_name()))
    }
}

pub fn app_state(db: &TestDb, uploader: Arc<FakeUploader>) -> AppState {
    let mut config = Config::with_database_url(db.url.clone());
    config.admin.token = Some("admin-test-token".to_string());
    AppState::new(db.pool.clone(), uploader, config)
}

pub fn member(name: &str) -> TeamMember {
    TeamMember {
        name: name.to_string(),
        role: None,
        email: None,
    }
}

pub async fn register(pool: &PgPool, team_name: &str) {
    contestboard::db::repositories::TeamRepository::create(pool, team_name, &[member("Lead")])
        .await
        .expect("Failed to register team");
}
