use axum_test::TestServer;
use khidmat_core::core::config::{AdminConfig, PaymentConfig};
use sqlx::SqlitePool;

async fn setup() -> (TestServer, SqlitePool) {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    let app = khidmat_core::app(pool.clone(), payment_config(), AdminConfig::disabled());
    (TestServer::new(app).unwrap(), pool)
}

fn payment_config() -> PaymentConfig {
    PaymentConfig {
        receiver_number: "03115939025".to_string(),
        amount_rupees: 2000,
    }
}

async fn provider_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM providers")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn get_register_shows_empty_form_with_payment_instructions() {
    let (server, _pool) = setup().await;

    let res = server.get("/provider/register").await;

    assert_eq!(res.status_code(), 200);
    let body = res.text();
    assert!(body.contains("03115939025"));
    assert!(body.contains("2000"));
    assert!(body.contains("transaction_id"));
}

#[tokio::test]
async fn missing_transaction_id_creates_nothing_and_preserves_input() {
    let (server, pool) = setup().await;

    let res = server
        .post("/provider/register")
        .form(&[
            ("name", "Ali Plumbing"),
            ("category", "Plumber"),
            ("description", "24/7 emergency repairs"),
            ("contact", "0300-1234567"),
            ("city", "Karachi"),
            ("price_range", "Rs. 500 - 1500"),
            ("transaction_id", ""),
        ])
        .await;

    // Form is redisplayed, not redirected
    assert_eq!(res.status_code(), 200);
    let body = res.text();
    assert!(body.contains("Please pay Rs. 2000 via EasyPaisa to 03115939025"));
    // Entered values survive the round trip
    assert!(body.contains("Ali Plumbing"));
    assert!(body.contains("24/7 emergency repairs"));
    assert!(body.contains("0300-1234567"));
    assert!(body.contains("Rs. 500 - 1500"));

    assert_eq!(provider_count(&pool).await, 0);
}

#[tokio::test]
async fn whitespace_only_transaction_id_is_rejected() {
    let (server, pool) = setup().await;

    let res = server
        .post("/provider/register")
        .form(&[
            ("name", "Ali Plumbing"),
            ("category", "Plumber"),
            ("contact", "0300-1234567"),
            ("city", "Karachi"),
            ("transaction_id", "   "),
        ])
        .await;

    assert_eq!(res.status_code(), 200);
    assert_eq!(provider_count(&pool).await, 0);
}

#[tokio::test]
async fn valid_submission_creates_pending_row_and_redirects() {
    let (server, pool) = setup().await;

    let res = server
        .post("/provider/register")
        .form(&[
            ("name", "  Ali Plumbing  "),
            ("category", "Plumber"),
            ("description", ""),
            ("contact", "0300-1234567"),
            ("city", "Karachi"),
            ("price_range", ""),
            ("transaction_id", " TX-445566 "),
        ])
        .await;

    assert_eq!(res.status_code(), 303);
    assert_eq!(res.header("location"), "/thankyou");

    let (name, approved, transaction_id, created_at): (String, bool, String, String) =
        sqlx::query_as(
            "SELECT name, approved, transaction_id, created_at FROM providers",
        )
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_eq!(name, "Ali Plumbing");
    assert!(!approved);
    assert_eq!(transaction_id, "TX-445566");
    assert!(!created_at.is_empty());
    assert_eq!(provider_count(&pool).await, 1);
}

#[tokio::test]
async fn thankyou_page_is_static() {
    let (server, _pool) = setup().await;

    let res = server.get("/thankyou").await;

    assert_eq!(res.status_code(), 200);
    assert!(res.text().contains("pending admin approval"));
}
