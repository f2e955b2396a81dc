//! Round submission and leaderboard behaviour against a real database.
//!
//! Run with `cargo test -- --ignored` on a machine with Docker.

mod common;

use std::sync::Arc;

use bytes::Bytes;
use contestboard::{
    AppError,
    db::repositories::LeaderboardRepository,
    models::{Round, RoundPayload},
    services::{LeaderboardService, RoundService},
    storage::UploadedFile,
};

use common::{FakeUploader, register, start_db};

fn round_3(figma: &str) -> RoundPayload {
    RoundPayload::Three {
        figma_links: figma.to_string(),
        description: "Landing page".to_string(),
    }
}

fn round_4(score: i32) -> RoundPayload {
    RoundPayload::Four {
        structured_submission: "{\"q1\":\"a\"}".to_string(),
        question: None,
        score,
    }
}

fn round_5(score: i32) -> RoundPayload {
    RoundPayload::Five {
        abstract_text: "Summary".to_string(),
        score,
    }
}

fn screenshot(name: &str) -> UploadedFile {
    UploadedFile::new(
        Some(name.to_string()),
        Some("image/png".to_string()),
        Bytes::from_static(b"png"),
    )
}

async fn row_count(pool: &sqlx::PgPool, table: &str, team: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {} WHERE team_name = $1", table))
        .bind(team)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_single_graded_round_sets_total() {
    let db = start_db().await;
    let uploader = FakeUploader::default();
    register(&db.pool, "Alpha").await;

    let receipt = RoundService::submit(
        &db.pool,
        &uploader,
        "Alpha",
        round_3("https://figma.com/a"),
        &[screenshot("one.png"), screenshot("two.png")],
    )
    .await
    .unwrap();
    assert_eq!(receipt.team_score, 0);
    assert_eq!(receipt.urls.len(), 2);
    assert_eq!(uploader.calls(), 2);

    let graded = RoundService::grade(&db.pool, Round::Three, "Alpha", 20, Some("Clean"))
        .await
        .unwrap();
    assert_eq!(graded.team_score, 20);

    let standing = LeaderboardService::standing(&db.pool, "Alpha").await.unwrap();
    assert_eq!(standing.score_3, 20);
    assert_eq!(standing.team_score, 20);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_total_is_sum_of_rounds() {
    let db = start_db().await;
    let uploader = FakeUploader::default();
    register(&db.pool, "Gamma").await;

    RoundService::submit(&db.pool, &uploader, "Gamma", round_4(7), &[])
        .await
        .unwrap();
    RoundService::submit(&db.pool, &uploader, "Gamma", round_5(5), &[])
        .await
        .unwrap();
    RoundService::submit(&db.pool, &uploader, "Gamma", round_3("https://figma.com/g"), &[])
        .await
        .unwrap();
    let receipt = RoundService::grade(&db.pool, Round::Three, "Gamma", 10, None)
        .await
        .unwrap();

    assert_eq!(receipt.team_score, 22);

    let entry = LeaderboardService::recompute(&db.pool, "Gamma").await.unwrap();
    assert_eq!(entry.team_score, 22);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_resubmission_replaces_previous_row() {
    let db = start_db().await;
    let uploader = FakeUploader::default();
    register(&db.pool, "Delta").await;

    RoundService::submit(&db.pool, &uploader, "Delta", round_4(7), &[])
        .await
        .unwrap();
    let receipt = RoundService::submit(&db.pool, &uploader, "Delta", round_4(9), &[])
        .await
        .unwrap();

    assert_eq!(receipt.team_score, 9);
    assert_eq!(row_count(&db.pool, "round_4", "Delta").await, 1);
    assert_eq!(row_count(&db.pool, "leaderboard", "Delta").await, 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_resubmission_clears_round_3_grade() {
    let db = start_db().await;
    let uploader = FakeUploader::default();
    register(&db.pool, "Eta").await;

    RoundService::submit(&db.pool, &uploader, "Eta", round_3("https://figma.com/1"), &[])
        .await
        .unwrap();
    RoundService::grade(&db.pool, Round::Three, "Eta", 30, Some("Good"))
        .await
        .unwrap();

    let receipt =
        RoundService::submit(&db.pool, &uploader, "Eta", round_3("https://figma.com/2"), &[])
            .await
            .unwrap();

    assert_eq!(receipt.team_score, 0);
    assert_eq!(receipt.submission.score(), Some(0));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_concurrent_resubmissions_do_not_duplicate() {
    let db = start_db().await;
    let uploader = Arc::new(FakeUploader::default());
    register(&db.pool, "Epsilon").await;

    let mut handles = Vec::new();
    for score in 1..=8 {
        let pool = db.pool.clone();
        let uploader = uploader.clone();
        handles.push(tokio::spawn(async move {
            let payload = if score % 2 == 0 { round_4(score) } else { round_5(score) };
            RoundService::submit(&pool, uploader.as_ref(), "Epsilon", payload, &[])
                .await
                .map(|r| r.team_score)
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(row_count(&db.pool, "round_4", "Epsilon").await, 1);
    assert_eq!(row_count(&db.pool, "round_5", "Epsilon").await, 1);
    assert_eq!(row_count(&db.pool, "leaderboard", "Epsilon").await, 1);

    // The cached total must match whatever rows won the race
    let standing = LeaderboardService::standing(&db.pool, "Epsilon").await.unwrap();
    let cached = LeaderboardRepository::find(&db.pool, "Epsilon")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(cached.team_score, standing.score_4 + standing.score_5);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_unregistered_team_is_rejected_before_upload() {
    let db = start_db().await;
    let uploader = FakeUploader::default();

    let err = RoundService::submit(
        &db.pool,
        &uploader,
        "Ghost",
        round_3("https://figma.com/x"),
        &[screenshot("shot.png")],
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(uploader.calls(), 0);
    assert_eq!(row_count(&db.pool, "round_3", "Ghost").await, 0);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_failed_upload_writes_nothing() {
    let db = start_db().await;
    let uploader = FakeUploader::failing_on(2);
    register(&db.pool, "Theta").await;

    let err = RoundService::submit(
        &db.pool,
        &uploader,
        "Theta",
        round_5(10),
        &[screenshot("a.png"), screenshot("b.png"), screenshot("c.png")],
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::Upload(_)));
    assert_eq!(err.error_code(), "UPLOAD_ERROR");
    assert_eq!(uploader.calls(), 2);
    assert_eq!(row_count(&db.pool, "round_5", "Theta").await, 0);
    assert_eq!(row_count(&db.pool, "leaderboard", "Theta").await, 0);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_grading_uses_registered_spelling() {
    let db = start_db().await;
    let uploader = FakeUploader::default();
    register(&db.pool, "Iota").await;

    RoundService::submit(&db.pool, &uploader, "Iota", round_3("https://figma.com/i"), &[])
        .await
        .unwrap();
    let receipt = RoundService::grade(&db.pool, Round::Three, "  Iota ", 25, None)
        .await
        .unwrap();
    assert_eq!(receipt.team_score, 25);

    let standing = LeaderboardService::standing(&db.pool, " Iota").await.unwrap();
    assert_eq!(standing.team_name, "Iota");
    assert_eq!(standing.score_3, 25);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_grading_missing_submission_is_not_found() {
    let db = start_db().await;
    register(&db.pool, "Zeta").await;

    let err = RoundService::grade(&db.pool, Round::Two, "Zeta", 10, None)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_ranking_includes_every_team_once() {
    let db = start_db().await;
    let uploader = FakeUploader::default();
    for team in ["Alpha", "Beta", "Gamma", "Omega"] {
        register(&db.pool, team).await;
    }

    RoundService::submit(&db.pool, &uploader, "Gamma", round_4(40), &[])
        .await
        .unwrap();
    RoundService::submit(&db.pool, &uploader, "Alpha", round_5(15), &[])
        .await
        .unwrap();
    RoundService::submit(&db.pool, &uploader, "Omega", round_4(15), &[])
        .await
        .unwrap();

    let ranked = LeaderboardService::list_ranked(&db.pool).await.unwrap();
    let names: Vec<_> = ranked.iter().map(|r| r.team_name.as_str()).collect();
    let ranks: Vec<_> = ranked.iter().map(|r| r.rank).collect();

    assert_eq!(names, vec!["Gamma", "Alpha", "Omega", "Beta"]);
    assert_eq!(ranks, vec![1, 2, 2, 4]);
    assert!(ranked.windows(2).all(|w| w[0].team_score >= w[1].team_score));

    let recomputed = LeaderboardService::recompute_all(&db.pool).await.unwrap();
    assert_eq!(recomputed, 4);
}
