//! Shared fixtures: an in-memory SQLite store migrated with the real
//! migrator, and an in-process mock of the channel gateway.
#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use channel_order_sync::{
    config::ChannelConfig,
    db::run_migrations,
    gateway::ChannelClient,
    repository::{
        order_line_repository::{self, OrderLineRecord},
        order_repository,
    },
    state::AppState,
};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

pub const API_KEY: &str = "test-key";

pub async fn setup_db() -> anyhow::Result<DatabaseConnection> {
    // A single long-lived connection: every new SQLite connection would open
    // a fresh, empty in-memory database.
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let orm = Database::connect(options).await?;
    run_migrations(&orm).await?;
    Ok(orm)
}

pub fn client_for(url: &str, timeout: Duration) -> ChannelClient {
    ChannelClient::new(&ChannelConfig {
        api_url: url.to_string(),
        api_key: API_KEY.to_string(),
        timeout,
    })
    .expect("build channel client")
}

pub async fn setup_state(gateway_url: &str) -> anyhow::Result<AppState> {
    Ok(AppState {
        orm: setup_db().await?,
        gateway: client_for(gateway_url, Duration::from_secs(5)),
        stock_adjustment: 25,
    })
}

/// URL of a port nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

/// Store an order with one line per `(gtin, description, quantity)`.
pub async fn seed_order(
    state: &AppState,
    channel_order_no: &str,
    lines: &[(Option<&str>, &str, i32)],
) -> anyhow::Result<i32> {
    let order = order_repository::upsert_order(&state.orm, channel_order_no, "IN_PROGRESS").await?;
    for (index, (gtin, description, quantity)) in lines.iter().enumerate() {
        let merchant_product_no = format!("MPN-{channel_order_no}-{index}");
        order_line_repository::upsert_order_line(
            &state.orm,
            order.id,
            OrderLineRecord {
                gtin: *gtin,
                description: *description,
                quantity: *quantity,
                merchant_product_no: &merchant_product_no,
                channel_product_no: "1001",
                stock_location_id: 1,
            },
        )
        .await?;
    }
    Ok(order.id)
}

pub fn order_json(channel_order_no: &str, status: &str, lines: Vec<Value>) -> Value {
    json!({
        "ChannelOrderNo": channel_order_no,
        "Status": status,
        "Lines": lines,
    })
}

pub fn line_json(
    gtin: Option<&str>,
    description: &str,
    quantity: i32,
    merchant_product_no: &str,
    stock_location_id: i32,
) -> Value {
    json!({
        "Gtin": gtin,
        "Description": description,
        "Quantity": quantity,
        "MerchantProductNo": merchant_product_no,
        "ChannelProductNo": 1001,
        "StockLocation": { "Id": stock_location_id },
    })
}

/// Canned response of the mock gateway.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Option<Value>,
    pub delay: Option<Duration>,
}

impl Reply {
    pub fn ok(body: Value) -> Self {
        Self::json(StatusCode::OK, body)
    }

    pub fn json(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            body: Some(body),
            delay: None,
        }
    }

    pub fn empty(status: StatusCode) -> Self {
        Self {
            status,
            body: None,
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    async fn send(self) -> Response {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match self.body {
            Some(body) => (self.status, Json(body)).into_response(),
            None => self.status.into_response(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: &'static str,
    pub query: HashMap<String, String>,
    pub body: Option<Value>,
}

struct MockState {
    orders: Reply,
    stock: Reply,
    push: Reply,
    requests: Vec<RecordedRequest>,
}

type Shared = Arc<RwLock<MockState>>;

/// In-process channel gateway on a random port. Every request is recorded.
pub struct MockGateway {
    state: Shared,
    addr: SocketAddr,
    _handle: JoinHandle<()>,
}

impl MockGateway {
    pub async fn start() -> Self {
        let state = Arc::new(RwLock::new(MockState {
            orders: Reply::ok(json!({ "Content": [] })),
            stock: Reply::ok(json!({ "Content": [] })),
            push: Reply::ok(json!({ "Success": true })),
            requests: Vec::new(),
        }));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock gateway");
        let addr = listener.local_addr().expect("Failed to get local address");

        let app = Router::new()
            .route("/v2/orders", get(handle_orders))
            .route("/v2/offer/stock", get(handle_stock).put(handle_push))
            .with_state(state.clone());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Mock gateway failed");
        });

        Self {
            state,
            addr,
            _handle: handle,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn set_orders(&self, reply: Reply) {
        self.state.write().await.orders = reply;
    }

    pub async fn set_stock(&self, reply: Reply) {
        self.state.write().await.stock = reply;
    }

    pub async fn set_push(&self, reply: Reply) {
        self.state.write().await.push = reply;
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.read().await.requests.clone()
    }

    /// Bodies of every `PUT /v2/offer/stock` received, in order.
    pub async fn pushes(&self) -> Vec<Value> {
        self.requests()
            .await
            .into_iter()
            .filter(|request| request.method == "PUT")
            .filter_map(|request| request.body)
            .collect()
    }
}

async fn handle_orders(
    State(state): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let reply = {
        let mut state = state.write().await;
        state.requests.push(RecordedRequest {
            method: "GET",
            path: "/v2/orders",
            query,
            body: None,
        });
        state.orders.clone()
    };
    reply.send().await
}

async fn handle_stock(
    State(state): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    let reply = {
        let mut state = state.write().await;
        state.requests.push(RecordedRequest {
            method: "GET",
            path: "/v2/offer/stock",
            query,
            body: None,
        });
        state.stock.clone()
    };
    reply.send().await
}

async fn handle_push(
    State(state): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    let reply = {
        let mut state = state.write().await;
        state.requests.push(RecordedRequest {
            method: "PUT",
            path: "/v2/offer/stock",
            query,
            body: Some(body),
        });
        state.push.clone()
    };
    reply.send().await
}
