//! In-process fake automation server implementing just enough of the wire
//! contract to exercise the flows: sessions, element lookup by strategy,
//! element actions, pointer sequences, and app relaunch. Screen
//! transitions mimic the shop app on a 1080×1920 display.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use appdrive::{Endpoint, Timeouts};
use appdrive_cli::env::FlowEnv;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::Router;
use serde_json::{Value, json};

const WIDTH: i64 = 1080;
const HEIGHT: i64 = 1920;

/// Screens of the fake shop app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
	Login,
	Signup,
	Home,
	ProductDetail,
	Cart,
	/// Exposes no recognizable signal at all.
	Blank,
}

/// Mutable world state plus bookkeeping for assertions.
#[derive(Debug)]
pub struct FakeApp {
	pub screen: Screen,
	pub cart_items: usize,
	/// When false, the product detail screen exposes neither the semantic
	/// add-to-cart id nor any native button, forcing the coordinate
	/// fallback.
	pub add_to_cart_locatable: bool,
	/// Whether a coordinate tap in the lower-center region actually lands
	/// on the add-to-cart control.
	pub coordinate_tap_adds: bool,
	pub close_count: usize,
	pub relaunch_count: usize,
	/// `(element id, text)` pairs in arrival order.
	pub typed: Vec<(String, String)>,
	pub raw_taps: Vec<(i64, i64)>,
}

impl FakeApp {
	pub fn starting_at(screen: Screen) -> Self {
		Self {
			screen,
			cart_items: 0,
			add_to_cart_locatable: true,
			coordinate_tap_adds: true,
			close_count: 0,
			relaunch_count: 0,
			typed: Vec::new(),
			raw_taps: Vec::new(),
		}
	}
}

pub type Shared = Arc<Mutex<FakeApp>>;

pub struct FakeServer {
	pub state: Shared,
	pub addr: SocketAddr,
}

pub async fn start(app: FakeApp) -> FakeServer {
	let state: Shared = Arc::new(Mutex::new(app));
	let router = Router::new()
		.route("/session", post(new_session))
		.route("/session/{id}", delete(close_session))
		.route("/session/{id}/element", post(find_element))
		.route("/session/{id}/elements", post(find_elements))
		.route("/session/{id}/element/{eid}/click", post(click))
		.route("/session/{id}/element/{eid}/clear", post(clear))
		.route("/session/{id}/element/{eid}/value", post(set_value))
		.route("/session/{id}/element/{eid}/displayed", get(displayed))
		.route("/session/{id}/element/{eid}/enabled", get(enabled))
		.route("/session/{id}/window/rect", get(window_rect))
		.route("/session/{id}/actions", post(actions))
		.route(
			"/session/{id}/appium/device/terminate_app",
			post(terminate_app),
		)
		.route(
			"/session/{id}/appium/device/activate_app",
			post(activate_app),
		)
		.with_state(state.clone());

	let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	tokio::spawn(async move {
		axum::serve(listener, router).await.unwrap();
	});

	FakeServer { state, addr }
}

/// Flow environment pointing at the fake server, with waits short enough
/// that exhausted fallback chains do not stall the suite.
pub fn flow_env(addr: SocketAddr) -> FlowEnv {
	FlowEnv {
		endpoint: Endpoint::new(addr.ip().to_string(), addr.port()),
		device_name: "Android Emulator".into(),
		app_path: "./builds/apk/app-release.apk".into(),
		app_id: "com.example.shopapp".into(),
		email: "test@example.com".into(),
		password: "test123456".into(),
		timeouts: Timeouts {
			element_wait: Duration::from_millis(200),
			visibility_wait: Duration::from_millis(200),
			settle: Duration::from_millis(20),
			quiescence: Duration::from_millis(20),
			verify: Duration::from_millis(800),
			poll: Duration::from_millis(10),
		},
	}
}

fn ok(value: Value) -> Json<Value> {
	Json(json!({ "value": value }))
}

fn not_found() -> Response {
	(
		StatusCode::NOT_FOUND,
		Json(json!({
			"value": { "error": "no such element", "message": "not located" }
		})),
	)
		.into_response()
}

/// Semantic ids visible on the current screen.
fn semantic_visible(app: &FakeApp, id: &str) -> bool {
	match app.screen {
		Screen::Login => matches!(id, "email_field" | "password_field" | "login_button" | "signup_link"),
		Screen::Signup => matches!(
			id,
			"signup_email_field" | "signup_password_field" | "signup_confirm_password_field" | "signup_button"
		),
		Screen::Home => matches!(id, "search_field" | "cart_icon" | "product_1"),
		// The price label is always exposed; the add-to-cart id only when
		// the locatable toggle says so.
		Screen::ProductDetail => {
			id == "product_price" || (app.add_to_cart_locatable && id == "add_to_cart_button")
		}
		Screen::Cart => id == "checkout_button",
		Screen::Blank => false,
	}
}

fn class_members(app: &FakeApp, class: &str) -> Vec<String> {
	let ids: Vec<&str> = match (app.screen, class) {
		(Screen::Login, "android.widget.EditText") => vec!["email_field", "password_field"],
		(Screen::Login, "android.widget.Button") => vec!["login_button"],
		(Screen::Signup, "android.widget.EditText") => vec![
			"signup_email_field",
			"signup_password_field",
			"signup_confirm_password_field",
		],
		(Screen::Signup, "android.widget.Button") => vec!["signup_button"],
		(Screen::Home, "android.widget.EditText") => vec!["search_field"],
		(Screen::Home, "android.widget.ImageView") => vec!["product_1"],
		(Screen::ProductDetail, "android.widget.Button") if app.add_to_cart_locatable => {
			vec!["add_to_cart_button"]
		}
		(Screen::Cart, "android.widget.Button") => vec!["checkout_button"],
		_ => vec![],
	};
	ids.into_iter().map(String::from).collect()
}

fn xpath_members(app: &FakeApp, xpath: &str) -> Vec<String> {
	if xpath.contains("cart_item_") && app.screen == Screen::Cart {
		(1..=app.cart_items)
			.map(|n| format!("cart_item_{n}"))
			.collect()
	} else {
		vec![]
	}
}

fn lookup(app: &FakeApp, using: &str, value: &str) -> Vec<String> {
	match using {
		"accessibility id" => {
			if semantic_visible(app, value) {
				vec![value.to_string()]
			} else {
				vec![]
			}
		}
		"class name" => class_members(app, value),
		"xpath" => xpath_members(app, value),
		_ => vec![],
	}
}

fn element_json(id: &str) -> Value {
	json!({ "element-6066-11e4-a52e-4f735466cecf": id })
}

async fn new_session(State(_state): State<Shared>, Json(_body): Json<Value>) -> Json<Value> {
	ok(json!({ "sessionId": "fake-session", "capabilities": {} }))
}

async fn close_session(State(state): State<Shared>, Path(_id): Path<String>) -> Json<Value> {
	state.lock().unwrap().close_count += 1;
	ok(Value::Null)
}

async fn find_element(
	State(state): State<Shared>,
	Path(_id): Path<String>,
	Json(body): Json<Value>,
) -> Response {
	let app = state.lock().unwrap();
	let matches = lookup(
		&app,
		body["using"].as_str().unwrap_or_default(),
		body["value"].as_str().unwrap_or_default(),
	);
	match matches.first() {
		Some(id) => ok(element_json(id)).into_response(),
		None => not_found(),
	}
}

async fn find_elements(
	State(state): State<Shared>,
	Path(_id): Path<String>,
	Json(body): Json<Value>,
) -> Json<Value> {
	let app = state.lock().unwrap();
	let matches: Vec<Value> = lookup(
		&app,
		body["using"].as_str().unwrap_or_default(),
		body["value"].as_str().unwrap_or_default(),
	)
	.iter()
	.map(|id| element_json(id))
	.collect();
	ok(Value::Array(matches))
}

async fn click(State(state): State<Shared>, Path((_id, eid)): Path<(String, String)>) -> Json<Value> {
	let mut app = state.lock().unwrap();
	match eid.as_str() {
		"login_button" => app.screen = Screen::Home,
		"signup_link" => app.screen = Screen::Signup,
		"signup_button" => app.screen = Screen::Login,
		"product_1" => app.screen = Screen::ProductDetail,
		"add_to_cart_button" => app.cart_items += 1,
		"cart_icon" => app.screen = Screen::Cart,
		_ => {}
	}
	ok(Value::Null)
}

async fn clear(State(_state): State<Shared>, Path(_path): Path<(String, String)>) -> Json<Value> {
	ok(Value::Null)
}

async fn set_value(
	State(state): State<Shared>,
	Path((_id, eid)): Path<(String, String)>,
	Json(body): Json<Value>,
) -> Json<Value> {
	let text = body["text"].as_str().unwrap_or_default().to_string();
	state.lock().unwrap().typed.push((eid, text));
	ok(Value::Null)
}

async fn displayed(State(_state): State<Shared>, Path(_path): Path<(String, String)>) -> Json<Value> {
	ok(Value::Bool(true))
}

async fn enabled(State(_state): State<Shared>, Path(_path): Path<(String, String)>) -> Json<Value> {
	ok(Value::Bool(true))
}

async fn window_rect(State(_state): State<Shared>, Path(_id): Path<String>) -> Json<Value> {
	ok(json!({ "x": 0, "y": 0, "width": WIDTH, "height": HEIGHT }))
}

async fn actions(
	State(state): State<Shared>,
	Path(_id): Path<String>,
	Json(body): Json<Value>,
) -> Json<Value> {
	let mut app = state.lock().unwrap();
	let first_move = &body["actions"][0]["actions"][0];
	let x = first_move["x"].as_i64().unwrap_or(0);
	let y = first_move["y"].as_i64().unwrap_or(0);
	app.raw_taps.push((x, y));

	match app.screen {
		// Top-right corner holds the cart icon on the home screen.
		Screen::Home if x > WIDTH * 4 / 5 && y < HEIGHT * 3 / 20 => app.screen = Screen::Cart,
		// Lower-center of the product detail screen holds add-to-cart.
		Screen::ProductDetail
			if (WIDTH * 3 / 10..=WIDTH * 7 / 10).contains(&x) && y > HEIGHT * 3 / 4 =>
		{
			if app.coordinate_tap_adds {
				app.cart_items += 1;
			}
		}
		_ => {}
	}
	ok(Value::Null)
}

async fn terminate_app(
	State(_state): State<Shared>,
	Path(_id): Path<String>,
	Json(_body): Json<Value>,
) -> Json<Value> {
	ok(Value::Bool(true))
}

async fn activate_app(
	State(state): State<Shared>,
	Path(_id): Path<String>,
	Json(_body): Json<Value>,
) -> Json<Value> {
	let mut app = state.lock().unwrap();
	app.relaunch_count += 1;
	// State is preserved across a relaunch; the entry screen for an
	// authenticated user is home.
	app.screen = Screen::Home;
	ok(Value::Null)
}
