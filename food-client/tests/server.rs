// food-client/tests/server.rs
// End-to-end against a local axum server speaking the food API

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use food_client::{ClientConfig, ClientError, CurrencyFormat, FoodApi, FoodDetailsSession};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Db {
    foods: Vec<Value>,
    favorites: Vec<Value>,
    orders: Vec<Value>,
}

type SharedDb = Arc<Mutex<Db>>;

async fn get_food(
    State(db): State<SharedDb>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, StatusCode> {
    let db = db.lock().unwrap();
    db.foods
        .iter()
        .find(|f| f["id"] == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_favorites(State(db): State<SharedDb>) -> Json<Value> {
    Json(Value::Array(db.lock().unwrap().favorites.clone()))
}

async fn add_favorite(
    State(db): State<SharedDb>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    db.lock().unwrap().favorites.push(body.clone());
    (StatusCode::CREATED, Json(body))
}

/// Stores the favorite but answers without a body
async fn add_favorite_bare(State(db): State<SharedDb>, Json(body): Json<Value>) -> StatusCode {
    db.lock().unwrap().favorites.push(body);
    StatusCode::CREATED
}

async fn remove_favorite(
    State(db): State<SharedDb>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, StatusCode> {
    let mut db = db.lock().unwrap();
    let before = db.favorites.len();
    db.favorites.retain(|f| f["id"] != id);
    if db.favorites.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({})))
}

async fn list_orders(State(db): State<SharedDb>) -> Json<Value> {
    Json(Value::Array(db.lock().unwrap().orders.clone()))
}

async fn create_order(
    State(db): State<SharedDb>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    db.lock().unwrap().orders.push(body.clone());
    (StatusCode::CREATED, Json(body))
}

/// Stores the order but echoes only its id
async fn create_order_terse(
    State(db): State<SharedDb>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let id = body["id"].clone();
    db.lock().unwrap().orders.push(body);
    (StatusCode::CREATED, Json(json!({ "id": id })))
}

fn router(db: SharedDb) -> Router {
    Router::new()
        .route("/foods/{id}", get(get_food))
        .route("/favorites", get(list_favorites).post(add_favorite))
        .route("/favorites/{id}", delete(remove_favorite))
        .route("/orders", get(list_orders).post(create_order))
        .with_state(db)
}

/// Same API, but creations answer with bare or partial bodies
fn terse_router(db: SharedDb) -> Router {
    Router::new()
        .route("/foods/{id}", get(get_food))
        .route("/favorites", get(list_favorites).post(add_favorite_bare))
        .route("/favorites/{id}", delete(remove_favorite))
        .route("/orders", get(list_orders).post(create_order_terse))
        .with_state(db)
}

async fn serve(db: SharedDb) -> String {
    serve_router(router(db)).await
}

async fn serve_router(app: Router) -> String {

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "food_client=debug,shared=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

fn seeded_db() -> SharedDb {
    Arc::new(Mutex::new(Db {
        foods: vec![json!({
            "id": 1,
            "name": "Ao molho",
            "description": "Macarrão ao molho branco, fughi e cheiro verde das montanhas.",
            "price": 19.9,
            "image_url": "https://example.com/ao_molho.png",
            "thumbnail_url": "https://example.com/ao_molho-thumb.png",
            "category": 4,
            "extras": [
                { "id": 1, "name": "Bacon", "value": 1.5 },
                { "id": 2, "name": "Frango", "value": 2 }
            ]
        })],
        favorites: vec![],
        orders: vec![json!({ "id": 1, "product_id": 9 })],
    }))
}

async fn connect(db: SharedDb) -> FoodApi<food_client::NetworkHttpClient> {
    let base_url = serve(db).await;
    let config = ClientConfig::new(base_url).with_currency(CurrencyFormat::brl());
    FoodApi::new(config.build_http_client().unwrap())
}

#[tokio::test]
async fn test_full_screen_flow() {
    init_tracing();
    let db = seeded_db();
    let api = connect(db.clone()).await;

    let mut session = FoodDetailsSession::load(api, 1, CurrencyFormat::brl()).await.unwrap();
    assert_eq!(session.unit_price(), "R$\u{a0}19,90");
    assert!(!session.is_favorite());

    assert!(session.toggle_favorite().await.unwrap());
    {
        let db = db.lock().unwrap();
        assert_eq!(db.favorites.len(), 1);
        assert_eq!(db.favorites[0]["name"], "Ao molho");
        assert_eq!(db.favorites[0]["formattedPrice"], "R$\u{a0}19,90");
        assert_eq!(db.favorites[0]["category"], 4);
        assert_eq!(
            db.favorites[0]["thumbnail_url"],
            "https://example.com/ao_molho-thumb.png"
        );
    }
    assert!(session.refresh_favorite().await.unwrap());

    session.increment_extra(1);
    session.increment_extra(2);
    session.increment_quantity();
    assert_eq!(session.cart_total(), "R$\u{a0}46,80");

    let created = session.finish_order().await.unwrap();
    assert_eq!(created.id, 2);
    assert_eq!(created.product_id, 1);
    assert_eq!(created.other["category"], 4);

    let db = db.lock().unwrap();
    assert_eq!(db.orders.len(), 2);
    let order = &db.orders[1];
    assert_eq!(order["id"], 2);
    assert_eq!(order["product_id"], 1);
    assert_eq!(order["quantity"], 2);
    assert_eq!(order["formattedValue"], "R$\u{a0}46,80");
    assert_eq!(order["extras"][0]["quantity"], 1);
    assert_eq!(order["extras"][1]["quantity"], 1);
    assert_eq!(order["category"], 4);
    assert_eq!(order["thumbnail_url"], "https://example.com/ao_molho-thumb.png");
}

#[tokio::test]
async fn test_creations_succeed_regardless_of_response_body() {
    init_tracing();
    let db = seeded_db();
    let base_url = serve_router(terse_router(db.clone())).await;
    let config = ClientConfig::new(base_url).with_currency(CurrencyFormat::usd());

    let mut session = FoodDetailsSession::connect(&config, 1).await.unwrap();
    assert!(session.toggle_favorite().await.unwrap());
    assert!(session.is_favorite());
    assert_eq!(db.lock().unwrap().favorites.len(), 1);

    let created = session.finish_order().await.unwrap();
    assert_eq!(created.id, 2);
    assert_eq!(created.formatted_value, "$19.90");
    assert_eq!(db.lock().unwrap().orders.len(), 2);
}


#[tokio::test]
async fn test_unfavorite_round_trip() {
    init_tracing();
    let db = seeded_db();
    {
        let mut guard = db.lock().unwrap();
        let food = guard.foods[0].clone();
        guard.favorites.push(food);
    }
    let config = ClientConfig::new(serve(db.clone()).await).with_currency(CurrencyFormat::usd());

    let mut session = FoodDetailsSession::connect(&config, 1).await.unwrap();
    assert_eq!(session.cart_total(), "$19.90");
    assert!(session.is_favorite());
    assert!(!session.toggle_favorite().await.unwrap());
    assert!(db.lock().unwrap().favorites.is_empty());
}

#[tokio::test]
async fn test_missing_food_maps_to_not_found() {
    init_tracing();
    let api = connect(seeded_db()).await;

    let err = api.get_food(404).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Nothing listens on the discard port
    let config = ClientConfig::new("http://127.0.0.1:9").with_timeout(2);
    let api = FoodApi::new(config.build_http_client().unwrap());

    let err = api.list_favorites().await.unwrap_err();
    assert!(err.is_network());
}
