use std::net::SocketAddr;

use configs::PaginationConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use server::{build_app, AppState};
use service::Services;
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
    client: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String { format!("{}{}", self.base_url, path) }

    async fn post(&self, path: &str, body: Value) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.client.post(self.url(path)).json(&body).send().await?;
        let status = res.status();
        Ok((status, res.json().await.unwrap_or(Value::Null)))
    }

    async fn put(&self, path: &str, body: Value) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.client.put(self.url(path)).json(&body).send().await?;
        let status = res.status();
        Ok((status, res.json().await.unwrap_or(Value::Null)))
    }

    async fn get(&self, path: &str) -> anyhow::Result<(HttpStatusCode, Value)> {
        let res = self.client.get(self.url(path)).send().await?;
        let status = res.status();
        Ok((status, res.json().await.unwrap_or(Value::Null)))
    }

    /// POST expecting 201 and return the new id.
    async fn create(&self, path: &str, body: Value) -> anyhow::Result<String> {
        let (status, body) = self.post(path, body).await?;
        assert_eq!(status, HttpStatusCode::CREATED, "POST {path}: {body}");
        Ok(body["id"].as_str().unwrap_or_default().to_string())
    }
}

async fn start_server() -> anyhow::Result<TestApp> {
    let state = AppState::new(Services::in_memory(), PaginationConfig::default());
    let app = build_app(state);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });
    Ok(TestApp { base_url: format!("http://{}:{}", addr.ip(), addr.port()), client: reqwest::Client::new() })
}

async fn restaurant(app: &TestApp, name: &str) -> anyhow::Result<String> {
    app.create("/restaurants", json!({"name": name, "address": "Calle Mayor 1", "capacity": 50})).await
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (status, body) = app.get("/health").await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_dish_follows_menu_restaurant() -> anyhow::Result<()> {
    let app = start_server().await?;
    let r = restaurant(&app, "R").await?;
    let r2 = restaurant(&app, "R2").await?;
    let m1 = app.create("/menus", json!({"restaurantId": r, "name": "M1"})).await?;
    let d1 = app.create("/dishes", json!({"restaurantId": r, "menuId": m1, "name": "D1", "price": 12.5})).await?;

    let (status, body) = app.get(&format!("/dishes/{d1}")).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body["menuId"], m1.as_str());
    assert_eq!(body["imageId"], Value::Null);

    let (status, body) = app.put(&format!("/dishes/{d1}"), json!({"restaurantId": r2})).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "The provided restaurant does not match the current menu.");
    Ok(())
}

#[tokio::test]
async fn e2e_reservation_and_payment_flow() -> anyhow::Result<()> {
    let app = start_server().await?;
    let u = app.create("/users", json!({"email": "u@example.com", "names": "U", "phone": "555"})).await?;
    let u2 = app.create("/users", json!({"email": "u2@example.com", "names": "U2", "phone": "556"})).await?;
    let r = restaurant(&app, "R").await?;
    let s = app.create("/sections", json!({"restaurantId": r, "name": "S"})).await?;
    let t = app
        .create(
            "/tables",
            json!({"sectionId": s, "tableNumber": 1, "capacity": 4, "positionX": 0, "positionY": 0, "width": 1, "height": 1}),
        )
        .await?;

    let (status, table) = app.get(&format!("/tables/{t}")).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(table["restaurantId"], r.as_str());

    let (status, v) = app
        .post(
            "/reservations",
            json!({"userId": u, "restaurantId": r, "tableId": t, "reservationDate": "2024-12-24",
                   "reservationTime": "20:30", "guestCount": 4}),
        )
        .await?;
    assert_eq!(status, HttpStatusCode::CREATED);
    assert_eq!(v["status"], "PENDING");
    let v = v["id"].as_str().unwrap_or_default().to_string();

    let payment = |user: &str| {
        json!({"reservationId": v, "userId": user, "amount": 100, "currency": "USD",
               "method": "CARD", "status": "PAID", "paidAt": "2024-12-24T22:00:00Z"})
    };
    let (status, _) = app.post("/payments", payment(&u)).await?;
    assert_eq!(status, HttpStatusCode::CREATED);
    let (status, body) = app.post("/payments", payment(&u2)).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Payment user must match the reservation user.");
    Ok(())
}

#[tokio::test]
async fn e2e_section_move_carries_its_tables() -> anyhow::Result<()> {
    let app = start_server().await?;
    let u = app.create("/users", json!({"email": "m@example.com", "names": "M", "phone": "558"})).await?;
    let r1 = restaurant(&app, "R1").await?;
    let r2 = restaurant(&app, "R2").await?;
    let s = app.create("/sections", json!({"restaurantId": r1, "name": "S"})).await?;
    let t = app
        .create(
            "/tables",
            json!({"sectionId": s, "tableNumber": 7, "capacity": 2, "positionX": 0, "positionY": 0, "width": 1, "height": 1}),
        )
        .await?;

    let (status, _) = app.put(&format!("/sections/{s}"), json!({"restaurantId": r2})).await?;
    assert_eq!(status, HttpStatusCode::OK);
    let (_, table) = app.get(&format!("/tables/{t}")).await?;
    assert_eq!(table["restaurantId"], r2.as_str());

    let booking = |restaurant: &str| {
        json!({"userId": u, "restaurantId": restaurant, "tableId": t, "reservationDate": "2024-12-24",
               "reservationTime": "21:00", "guestCount": 2})
    };
    let (status, body) = app.post("/reservations", booking(&r1)).await?;
    assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Table does not belong to the specified restaurant.");
    let (status, _) = app.post("/reservations", booking(&r2)).await?;
    assert_eq!(status, HttpStatusCode::CREATED);
    Ok(())
}

#[tokio::test]
async fn e2e_subscription_null_end_persists() -> anyhow::Result<()> {
    let app = start_server().await?;
    let u = app.create("/users", json!({"email": "s@example.com", "names": "S", "phone": "557"})).await?;
    let r = restaurant(&app, "R").await?;
    let p = app
        .create(
            "/subscription-plans",
            json!({"name": "Basic", "tier": "BASIC", "price": 19.99, "billingCycle": "MONTHLY", "status": "ACTIVE"}),
        )
        .await?;
    let (status, sub) = app
        .post("/subscriptions", json!({"userId": u, "restaurantId": r, "planId": p, "startsOn": "2024-01-01", "endsOn": null}))
        .await?;
    assert_eq!(status, HttpStatusCode::CREATED);
    assert_eq!(sub["endsOn"], Value::Null);
    assert_eq!(sub["status"], "ACTIVE");

    let id = sub["id"].as_str().unwrap_or_default();
    let (status, updated) = app.put(&format!("/subscriptions/{id}"), json!({"status": "PAUSED"})).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(updated["endsOn"], Value::Null);
    assert_eq!(updated["status"], "PAUSED");
    Ok(())
}

#[tokio::test]
async fn e2e_delete_then_get_is_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    let r = restaurant(&app, "Gone").await?;
    let res = app.client.delete(app.url(&format!("/restaurants/{r}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    let (status, body) = app.get(&format!("/restaurants/{r}")).await?;
    assert_eq!(status, HttpStatusCode::NOT_FOUND);
    assert_eq!(body["message"], format!("Restaurant with id {r} not found."));
    let res = app.client.delete(app.url(&format!("/restaurants/{r}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_pagination_and_seed() -> anyhow::Result<()> {
    let app = start_server().await?;
    let (status, body) = app.post("/seed", json!({})).await?;
    assert_eq!(status, HttpStatusCode::OK);
    assert_eq!(body["summary"]["restaurants"], 2);
    assert!(body["durationMs"].is_u64());

    let (_, all) = app.get("/tables?offset=0&limit=100").await?;
    let (_, page) = app.get("/tables?offset=2&limit=3").await?;
    let all = all.as_array().cloned().unwrap_or_default();
    let page = page.as_array().cloned().unwrap_or_default();
    assert_eq!(page.len(), 3);
    assert_eq!(page[0]["id"], all[2]["id"]);

    let (_, clamped) = app.get("/dishes?limit=1000").await?;
    assert!(clamped.as_array().map(|a| a.len() <= 100).unwrap_or(false));
    Ok(())
}
