//! Flujos completos contra PostgreSQL.
//!
//! Marcados `#[ignore]`: `TEST_DATABASE_URL=... cargo test --test db_tests -- --ignored`
mod common;

use axum::{routing::{get, post}, Json, Router};
use http::{Method, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use cargo_search::create_app;

use common::{db_state, search_body, send, spawn_server, ADMIN_LOGIN, UNREACHABLE_URL};

fn unique_email() -> String {
    format!("user-{}@example.com", Uuid::new_v4())
}

async fn register_and_login(app: &Router, email: &str) -> String {
    let (status, _) = send(
        app,
        Method::POST,
        "/api/register",
        None,
        Some(json!({"email": email, "password": "secret1", "confirm_password": "secret1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        app,
        Method::POST,
        "/api/login",
        None,
        Some(json!({"email": email, "password": "secret1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["access_token"].as_str().unwrap().to_string()
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_register_twice_conflicts() {
    let state = db_state(UNREACHABLE_URL).await;
    let app = create_app(state);
    let email = unique_email();
    let body = json!({"email": email, "password": "secret1", "confirm_password": "secret1"});

    let (status, first) = send(&app, Method::POST, "/api/register", None, Some(body.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["user"]["email"], email);
    assert!(first["user"].get("password_hash").is_none());

    let (status, second) = send(&app, Method::POST, "/api/register", None, Some(body)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(second["code"], "CONFLICT");
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_login_and_me() {
    let state = db_state(UNREACHABLE_URL).await;
    let app = create_app(state);
    let email = unique_email();
    let token = register_and_login(&app, &email).await;

    let (status, me) = send(&app, Method::GET, "/api/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], email);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/login",
        None,
        Some(json!({"email": email, "password": "wrong-password"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_token_of_deleted_user_is_rejected() {
    let state = db_state(UNREACHABLE_URL).await;
    let pool = state.pool.clone();
    let app = create_app(state);
    let email = unique_email();
    let token = register_and_login(&app, &email).await;

    sqlx::query("DELETE FROM users WHERE email = $1")
        .bind(&email)
        .execute(&pool)
        .await
        .unwrap();

    let (status, _) = send(&app, Method::GET, "/api/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_booking_persists_when_notification_fails() {
    let state = db_state(UNREACHABLE_URL).await;
    let pool = state.pool.clone();
    let app = create_app(state);
    let token = register_and_login(&app, &unique_email()).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/booking",
        Some(&token),
        Some(json!({
            "route_id": "fallback-1",
            "company_name": "ООО Ромашка",
            "contact_person": "Иван Петров",
            "email": "ivan@example.com",
            "phone": "+7 921 555 12 34",
            "cargo_description": "Электроника",
            "delivery_term": "FCA",
            "comment": "Срочно",
            "search_query": search_body("2025-09-01", "2025-09-10")
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["webhook_sent"], false);

    let booking_id = Uuid::parse_str(body["booking_id"].as_str().unwrap()).unwrap();
    let (stored_status, container): (String, String) = sqlx::query_as(
        "SELECT status, search_query->>'container_type' FROM bookings WHERE id = $1",
    )
    .bind(booking_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(stored_status, "pending");
    assert_eq!(container, "40ft");
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_calculation_forwards_automation_response() {
    let router = Router::new().route(
        "/hook",
        post(|Json(event): Json<Value>| async move {
            Json(json!({"price": 4200, "shipment": event["shipmentId"]}))
        }),
    );
    let hook = format!("{}/hook", spawn_server(router).await);
    let state = db_state(&hook).await;
    let pool = state.pool.clone();
    let app = create_app(state);
    let shipment_id = Uuid::new_v4().to_string();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/calculation",
        None,
        Some(json!({"shipmentId": shipment_id, "clientId": "client-7"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["webhook_sent"], true);
    assert_eq!(body["webhook_response"]["price"], 4200);
    assert_eq!(body["webhook_response"]["shipment"], shipment_id);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM calculate_clicks WHERE route_id = $1")
        .bind(&shipment_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_admin_port_crud_and_double_delete() {
    let state = db_state(UNREACHABLE_URL).await;
    let admin = state.jwt.issue(ADMIN_LOGIN).unwrap().token;
    let app = create_app(state);
    let code: String = Uuid::new_v4().simple().to_string()[..5].to_uppercase();

    let port = json!({
        "code": code,
        "name": "Тестовый порт",
        "country": "Россия",
        "city": "Тест",
        "transport_types": ["rail", "sea"]
    });

    let (status, created) = send(&app, Method::POST, "/api/admin/ports", Some(&admin), Some(port.clone())).await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().unwrap().to_string();

    let (status, _) = send(&app, Method::POST, "/api/admin/ports", Some(&admin), Some(port.clone())).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let mut renamed = port.clone();
    renamed["name"] = json!("Новое имя");
    let (status, replaced) = send(
        &app,
        Method::PUT,
        &format!("/api/admin/ports/{}", id),
        Some(&admin),
        Some(renamed),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(replaced["name"], "Новое имя");

    let mut invalid = port.clone();
    invalid["transport_types"] = json!([]);
    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/admin/ports/{}", id),
        Some(&admin),
        Some(invalid),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let uri = format!("/api/admin/ports/{}", id);
    let (status, _) = send(&app, Method::DELETE, &uri, Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::DELETE, &uri, Some(&admin), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_admin_route_crud() {
    let state = db_state(UNREACHABLE_URL).await;
    let admin = state.jwt.issue(ADMIN_LOGIN).unwrap().token;
    let app = create_app(state);

    let (status, route) = send(
        &app,
        Method::POST,
        "/api/admin/routes",
        Some(&admin),
        Some(json!({
            "origin_port": "SHA",
            "destination_port": "SVO",
            "transport_type": "rail",
            "carrier": "Test Rail",
            "transit_time_days": 16,
            "base_price_usd": 4321.5,
            "available_container_types": ["20ft", "40ft"],
            "frequency": "Еженедельно"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(route["base_price_usd"], 4321.5);

    let uri = format!("/api/admin/routes/{}", route["id"].as_str().unwrap());
    let (status, _) = send(&app, Method::DELETE, &uri, Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&admin),
        Some(json!({
            "origin_port": "SHA",
            "destination_port": "SVO",
            "carrier": "Test Rail",
            "transit_time_days": 16,
            "base_price_usd": 1,
            "frequency": "Ежедневно"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_admin_container_type_crud_and_double_delete() {
    let state = db_state(UNREACHABLE_URL).await;
    let admin = state.jwt.issue(ADMIN_LOGIN).unwrap().token;
    let app = create_app(state);

    let container = json!({
        "name": format!("Тестовый {}", Uuid::new_v4()),
        "size": "20ft",
        "capacity_m3": 33.2,
        "max_weight_kg": 28200
    });
    let (status, created) = send(
        &app,
        Method::POST,
        "/api/admin/container-types",
        Some(&admin),
        Some(container.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["price_modifier"], 1.0);

    let uri = format!("/api/admin/container-types/{}", created["id"].as_str().unwrap());
    let (status, _) = send(&app, Method::DELETE, &uri, Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::DELETE, &uri, Some(&admin), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::PUT, &uri, Some(&admin), Some(container)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Todo lo que toca webhook_settings va en un único test para no competir
/// con otros tests por la misma fila
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_webhook_settings_drive_search() {
    let state = db_state(UNREACHABLE_URL).await;
    let admin = state.jwt.issue(ADMIN_LOGIN).unwrap().token;
    let pool = state.pool.clone();
    let app = create_app(state);

    let stub = Router::new()
        .route(
            "/quotes",
            get(|| async {
                Json(json!({"result": [
                    {"id": "w-1", "price": "5100", "TT": 21},
                    {"id": "w-2", "price": 4800}
                ]}))
            }),
        )
        .route("/broken", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let base = spawn_server(stub).await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/admin/webhook",
        Some(&admin),
        Some(json!({"webhook_url": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Escrituras concurrentes: siempre queda una sola fila
    let mut handles = Vec::new();
    for i in 0..20 {
        let app = app.clone();
        let admin = admin.clone();
        handles.push(tokio::spawn(async move {
            let body = json!({"webhook_url": format!("https://hooks.example.com/search/{}", i)});
            send(&app, Method::POST, "/api/admin/webhook", Some(&admin), Some(body)).await.0
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }
    let (rows,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM webhook_settings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);

    // Webhook con datos: la respuesta es 1:1 con su lista
    let quotes_url = format!("{}/quotes", base);
    let (status, saved) = send(
        &app,
        Method::POST,
        "/api/admin/webhook",
        Some(&admin),
        Some(json!({"webhook_url": quotes_url})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["webhook_url"], quotes_url);

    let (status, current) = send(&app, Method::GET, "/api/admin/webhook", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(current["webhook_url"], quotes_url);
    assert_eq!(current["is_default"], false);

    let (status, results) = send(
        &app,
        Method::POST,
        "/api/search",
        None,
        Some(search_body("2025-10-01", "2025-10-05")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["id"], "w-1");
    assert_eq!(results[0]["price_from_usd"], 5100.0);
    assert_eq!(results[0]["transit_time_days"], 21);
    assert_eq!(results[1]["transit_time_days"], 15);
    assert!(results.iter().all(|r| r["provenance"] == "webhook"));

    // Webhook roto: siempre las tres cotizaciones de respaldo
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/admin/webhook",
        Some(&admin),
        Some(json!({"webhook_url": format!("{}/broken", base)})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let mut dangerous = search_body("2025-10-01", "2025-10-05");
    dangerous["is_dangerous_cargo"] = json!(true);
    let (status, results) = send(&app, Method::POST, "/api/search", None, Some(dangerous)).await;
    assert_eq!(status, StatusCode::OK);
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["carrier"], "China Railways Express");
    assert_eq!(results[0]["price_from_usd"], 6175.0);
    assert_eq!(results[2]["available_containers"], 7);
    assert!(results.iter().all(|r| r["provenance"] == "fallback"));
}
