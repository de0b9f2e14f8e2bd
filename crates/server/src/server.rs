use axum::{
    Router,
    routing::{get, post},
};

use std::sync::Arc;

use crate::{reports, sales};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// Build the HTTP routes over `engine`.
pub fn router(engine: Engine) -> Router {
    let state = ServerState {
        engine: Arc::new(engine),
    };

    Router::new()
        .route("/sales", post(sales::create).get(sales::list))
        .route(
            "/sales/{id}",
            get(sales::get).put(sales::update).delete(sales::delete),
        )
        .route("/sales/{id}/invoice", get(sales::invoice))
        .route("/dashboard", get(reports::dashboard))
        .route("/dashboard/monthly", get(reports::monthly))
        .route("/export/sales.csv", get(reports::export_csv))
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(engine)).await
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use migration::MigratorTrait;
    use sea_orm::Database;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    async fn app() -> Router {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        migration::Migrator::up(&db, None).await.unwrap();
        let engine = Engine::builder().database(db).build().await.unwrap();
        router(engine)
    }

    async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    async fn call_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = call(app, method, uri, body).await;
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn sale_body(date: &str, client_charge: Value, supplier_cost: Value) -> Value {
        json!({
            "party": "KONE",
            "supplier": "DHL",
            "waybill": "WB-1",
            "invoice_no": "INV-1",
            "sale_date": date,
            "supplier_cost": supplier_cost,
            "client_charge": client_charge,
        })
    }

    #[tokio::test]
    async fn submit_sale_returns_rounded_derived_values() {
        let app = app().await;

        let (status, body) = call_json(
            &app,
            Method::POST,
            "/sales",
            Some(sale_body("2024-01-15", json!(1000), json!("700"))),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["vat"], 150.0);
        assert_eq!(body["total_invoice"], 1150.0);
        assert_eq!(body["profit"], 300.0);

        let id = body["id"].as_i64().unwrap();
        let (status, sale) = call_json(&app, Method::GET, &format!("/sales/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(sale["party"], "KONE");
    }

    #[tokio::test]
    async fn vat_toggle_comes_from_the_query_string() {
        let app = app().await;

        let (status, body) = call_json(
            &app,
            Method::POST,
            "/sales?vat_enabled=false",
            Some(sale_body("2024-01-15", json!(500), json!(0))),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["vat"], 0.0);
        assert_eq!(body["total_invoice"], 500.0);
    }

    #[tokio::test]
    async fn non_numeric_cost_is_unprocessable() {
        let app = app().await;

        let (status, body) = call_json(
            &app,
            Method::POST,
            "/sales",
            Some(sale_body("2024-01-15", json!(500), json!("lots"))),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("supplier_cost"));

        let (_, list) = call_json(&app, Method::GET, "/sales", None).await;
        assert_eq!(list, json!({ "sales": [], "count": 0 }));
    }

    #[tokio::test]
    async fn update_delete_and_not_found() {
        let app = app().await;

        let (_, created) = call_json(
            &app,
            Method::POST,
            "/sales",
            Some(sale_body("2024-01-15", json!(1000), json!(700))),
        )
        .await;
        let id = created["id"].as_i64().unwrap();

        let (status, updated) = call_json(
            &app,
            Method::PUT,
            &format!("/sales/{id}"),
            Some(sale_body("2024-01-15", json!(2000), json!(700))),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["id"], id);
        assert_eq!(updated["profit"], 1300.0);

        let (status, _) = call_json(
            &app,
            Method::PUT,
            "/sales/999",
            Some(sale_body("2024-01-15", json!(1), json!(1))),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = call(&app, Method::DELETE, &format!("/sales/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = call(&app, Method::DELETE, &format!("/sales/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = call(&app, Method::GET, &format!("/sales/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = call(&app, Method::GET, &format!("/sales/{id}/invoice"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn monthly_dashboard_and_export() {
        let app = app().await;

        for (date, charge) in [("2024-01-15", 100), ("2024-01-28", 50), ("soon", 10)] {
            let (status, _) = call(
                &app,
                Method::POST,
                "/sales?vat_enabled=false",
                Some(sale_body(date, json!(charge), json!(0))),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, monthly) = call_json(&app, Method::GET, "/dashboard/monthly", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(monthly["excluded"], 1);
        assert_eq!(monthly["months"][0]["month"], "2024-01");
        assert_eq!(monthly["months"][0]["total_profit"], 150.0);

        let (_, board) = call_json(&app, Method::GET, "/dashboard", None).await;
        assert_eq!(board["total_sales"], 3);
        assert_eq!(board["by_party"]["KONE"], 160.0);

        let (_, listed) = call_json(&app, Method::GET, "/sales?order=asc", None).await;
        assert_eq!(listed["count"], 3);
        assert_eq!(listed["sales"][0]["sale_date"], "2024-01-15");
        assert!(listed["sales"][0].get("supplier_cost").is_none());

        let (_, newest) = call_json(&app, Method::GET, "/sales", None).await;
        assert_eq!(newest["sales"][0]["sale_date"], "soon");

        let (status, csv) = call(&app, Method::GET, "/export/sales.csv", None).await;
        assert_eq!(status, StatusCode::OK);
        let csv = String::from_utf8(csv).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(engine::LEDGER_COLUMNS.join(",").as_str()));
        assert_eq!(lines.count(), 3);
    }

    #[tokio::test]
    async fn empty_export_still_has_a_header() {
        let app = app().await;

        let (status, csv) = call(&app, Method::GET, "/export/sales.csv", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            String::from_utf8(csv).unwrap().trim_end(),
            engine::LEDGER_COLUMNS.join(",")
        );
    }
}
