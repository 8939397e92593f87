//! End-to-end tests for the poll cycle.
//!
//! A mock server plays both the job board and the Telegram Bot API, so the
//! whole fetch → filter → dedup → notify → mark pipeline runs for real.

use chrono::{Duration as ChronoDuration, Utc};
use mockito::{Matcher, Mock, ServerGuard};
use nhs_job_alerts::{
    db,
    repository::{sqlite::PostedJobRepository, PostedJobStore},
    service::{
        http::create_client,
        poller::{CycleOutcome, CycleReport, PollCycle},
        sites::{NhsEngland, SiteAdapter},
        TelegramNotifier,
    },
    test_utils::set_up_in_memory_db,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;

const BOT_TOKEN: &str = "42:test";
const CHAT_ID: &str = "-1001";

fn posted_days_ago(days: i64) -> String {
    (Utc::now().date_naive() - ChronoDuration::days(days))
        .format("%d %B %Y")
        .to_string()
}

fn results_page(cards: &[(&str, &str, &str)]) -> String {
    let items: String = cards
        .iter()
        .map(|(href, title, date)| {
            format!(
                r#"<li data-test="search-result">
                     <a data-test="search-result-job-title" href="{href}">{title}</a>
                     <div data-test="search-result-location">St James's University Hospital, Leeds</div>
                     <ul><li data-test="search-result-publicationDate">Date posted: <strong>{date}</strong></li></ul>
                   </li>"#
            )
        })
        .collect();
    format!("<html><body><ul>{items}</ul></body></html>")
}

async fn mock_board(server: &mut ServerGuard, body: String) -> Mock {
    server
        .mock("GET", "/candidate/search/results")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("keyword".into(), "Junior Doctor".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body(body)
        .create_async()
        .await
}

async fn mock_telegram(server: &mut ServerGuard, hits: usize) -> Mock {
    server
        .mock("POST", format!("/bot{}/sendMessage", BOT_TOKEN).as_str())
        .match_body(Matcher::PartialJsonString(format!(
            r#"{{"chat_id":"{}","parse_mode":"Markdown"}}"#,
            CHAT_ID
        )))
        .with_status(200)
        .with_body(r#"{"ok":true}"#)
        .expect(hits)
        .create_async()
        .await
}

fn build_cycle(server: &ServerGuard, pool: SqlitePool) -> PollCycle {
    let client = create_client(Duration::from_secs(5)).unwrap();
    let board = NhsEngland::with_base_url(client.clone(), &server.url())
        .unwrap()
        .with_keywords(&["Junior Doctor"])
        .with_max_pages(1);
    let notifier = TelegramNotifier::new(client, &server.url(), BOT_TOKEN, CHAT_ID).unwrap();

    PollCycle::new(
        vec![Arc::new(board) as Arc<dyn SiteAdapter>],
        Arc::new(PostedJobRepository::new(pool)),
        Arc::new(notifier),
    )
}

fn report(outcome: CycleOutcome) -> CycleReport {
    match outcome {
        CycleOutcome::Completed(report) => report,
        CycleOutcome::Skipped => panic!("cycle unexpectedly skipped"),
    }
}

#[tokio::test]
async fn test_new_posting_alerts_once_across_cycles() {
    let mut server = mockito::Server::new_async().await;
    let today = posted_days_ago(0);
    let _board = mock_board(
        &mut server,
        results_page(&[("/candidate/jobadvert/E1", "Junior Doctor - Acute Medicine", &today)]),
    )
    .await;
    let telegram = mock_telegram(&mut server, 1).await;

    let pool = set_up_in_memory_db().await;
    let cycle = build_cycle(&server, pool.clone());

    let first = report(cycle.run().await.unwrap());
    let second = report(cycle.run().await.unwrap());

    assert_eq!(first.notified, 1);
    assert_eq!(second.notified, 0);
    assert_eq!(second.already_posted, 1);
    telegram.assert_async().await;

    let repo = PostedJobRepository::new(pool);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_consultant_post_is_never_alerted_or_stored() {
    let mut server = mockito::Server::new_async().await;
    let today = posted_days_ago(0);
    let _board = mock_board(
        &mut server,
        results_page(&[("/candidate/jobadvert/C1", "Consultant Neurologist", &today)]),
    )
    .await;
    let telegram = mock_telegram(&mut server, 0).await;

    let pool = set_up_in_memory_db().await;
    let cycle = build_cycle(&server, pool.clone());

    let outcome = report(cycle.run().await.unwrap());

    assert_eq!(outcome.fetched, 0);
    assert_eq!(outcome.notified, 0);
    telegram.assert_async().await;
    assert_eq!(PostedJobRepository::new(pool).count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_stale_posting_is_suppressed() {
    let mut server = mockito::Server::new_async().await;
    let fresh = posted_days_ago(3);
    let stale = posted_days_ago(4);
    let _board = mock_board(
        &mut server,
        results_page(&[
            ("/candidate/jobadvert/F1", "Clinical Fellow in Stroke", &fresh),
            ("/candidate/jobadvert/S1", "Clinical Fellow in Renal", &stale),
        ]),
    )
    .await;
    let telegram = mock_telegram(&mut server, 1).await;

    let cycle = build_cycle(&server, set_up_in_memory_db().await);
    let outcome = report(cycle.run().await.unwrap());

    assert_eq!(outcome.fetched, 2);
    assert_eq!(outcome.filtered_out, 1);
    assert_eq!(outcome.notified, 1);
    telegram.assert_async().await;
}

#[tokio::test]
async fn test_dedup_survives_process_restart() {
    let mut server = mockito::Server::new_async().await;
    let today = posted_days_ago(1);
    let _board = mock_board(
        &mut server,
        results_page(&[("/candidate/jobadvert/R1", "Trust Grade Doctor", &today)]),
    )
    .await;
    let telegram = mock_telegram(&mut server, 1).await;

    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("jobs.db");

    let pool = db::init_db(&db_path).await.unwrap();
    let first = report(build_cycle(&server, pool.clone()).run().await.unwrap());
    pool.close().await;

    let reopened = db::init_db(&db_path).await.unwrap();
    let second = report(build_cycle(&server, reopened.clone()).run().await.unwrap());

    assert_eq!(first.notified, 1);
    assert_eq!(second.notified, 0);
    telegram.assert_async().await;

    let link = format!("{}/candidate/jobadvert/R1", server.url());
    let repo = PostedJobRepository::new(reopened);
    assert!(!repo
        .is_new(
            nhs_job_alerts::domain::Site::NhsEngland,
            &nhs_job_alerts::domain::job_id_for_link(&link)
        )
        .await
        .unwrap());
}

#[tokio::test]
async fn test_telegram_outage_still_marks_posting() {
    let mut server = mockito::Server::new_async().await;
    let today = posted_days_ago(0);
    let _board = mock_board(
        &mut server,
        results_page(&[("/candidate/jobadvert/T1", "SHO General Surgery", &today)]),
    )
    .await;
    let telegram = server
        .mock("POST", format!("/bot{}/sendMessage", BOT_TOKEN).as_str())
        .with_status(502)
        .expect(1)
        .create_async()
        .await;

    let cycle = build_cycle(&server, set_up_in_memory_db().await);

    let first = report(cycle.run().await.unwrap());
    let second = report(cycle.run().await.unwrap());

    assert_eq!(first.delivery_failures, 1);
    assert_eq!(second.already_posted, 1);
    telegram.assert_async().await;
}
