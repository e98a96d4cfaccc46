//! In-process stand-in for the guestbook REST API.
//!
//! Serves the same paths and JSON shapes as the real backend from an
//! in-memory store on an ephemeral port, and records every request so tests
//! can assert on method, path, headers and body.

use std::net::TcpListener;
use std::sync::Mutex;

use actix_web::dev::ServerHandle;
use actix_web::http::header;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::{Value, json};
use url::Url;

/// One request as seen by the fake backend.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub trace_id: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
struct StoredUser {
    id: i64,
    username: String,
    email: String,
}

#[derive(Debug, Clone)]
struct StoredEntry {
    id: i64,
    message: String,
    user_id: i64,
}

#[derive(Debug, Default)]
struct Store {
    users: Vec<StoredUser>,
    entries: Vec<StoredEntry>,
    next_user_id: i64,
    next_entry_id: i64,
    forced: Option<(u16, String)>,
    requests: Vec<RecordedRequest>,
}

impl Store {
    fn seeded() -> Self {
        let user = |id, username: &str| StoredUser {
            id,
            username: username.to_owned(),
            email: format!("{username}@example.com"),
        };
        let entry = |id, message: &str, user_id| StoredEntry {
            id,
            message: message.to_owned(),
            user_id,
        };
        Self {
            users: vec![user(1, "ann"), user(2, "bob")],
            entries: vec![
                entry(1, "hello", 1),
                entry(2, "hi ann", 2),
                entry(3, "again", 1),
            ],
            next_user_id: 3,
            next_entry_id: 4,
            ..Self::default()
        }
    }

    fn user(&self, id: i64) -> Option<&StoredUser> {
        self.users.iter().find(|user| user.id == id)
    }

    fn username(&self, id: i64) -> String {
        self.user(id).map(|user| user.username.clone()).unwrap_or_default()
    }

    fn count_for(&self, user_id: i64) -> usize {
        self.entries.iter().filter(|e| e.user_id == user_id).count()
    }

    // `/users` rows carry no email, like the real list endpoint.
    fn summary(&self, user: &StoredUser) -> Value {
        json!({
            "id": user.id,
            "username": user.username,
            "guestbook_count": self.count_for(user.id),
        })
    }

    fn entries_for(&self, user_id: i64) -> Vec<Value> {
        self.entries
            .iter()
            .filter(|e| e.user_id == user_id)
            .map(|e| json!({"id": e.id, "message": e.message, "user_id": e.user_id}))
            .collect()
    }

    fn entry_json(&self, entry: &StoredEntry) -> Value {
        json!({
            "id": entry.id,
            "message": entry.message,
            "username": self.username(entry.user_id),
            "user_id": entry.user_id,
        })
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

fn text(body: &Value, key: &str) -> Option<String> {
    body.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({"error": "not found"}))
}

fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({"error": message}))
}

async fn dispatch(
    req: HttpRequest,
    body: web::Bytes,
    store: web::Data<Mutex<Store>>,
) -> HttpResponse {
    let mut store = store.lock().expect("store lock");
    let header_text = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };
    let json_body: Option<Value> = serde_json::from_slice(&body).ok();
    store.requests.push(RecordedRequest {
        method: req.method().to_string(),
        path: req.path().to_owned(),
        content_type: header_text(header::CONTENT_TYPE.as_str()),
        trace_id: header_text("trace-id"),
        body: json_body.clone(),
    });

    if let Some((status, message)) = store.forced.clone() {
        let status = actix_web::http::StatusCode::from_u16(status).expect("valid status");
        return HttpResponse::build(status).body(message);
    }

    let segments: Vec<&str> = req.path().trim_matches('/').split('/').collect();
    let payload = json_body.unwrap_or(Value::Null);
    match (req.method().as_str(), segments.as_slice()) {
        ("GET", ["users"]) => {
            let rows: Vec<Value> = store.users.iter().map(|u| store.summary(u)).collect();
            HttpResponse::Ok().json(rows)
        }
        ("GET", ["users", "most"]) => {
            let top = store
                .users
                .iter()
                .filter(|u| store.count_for(u.id) > 0)
                .max_by_key(|u| store.count_for(u.id))
                .map(|u| store.summary(u));
            HttpResponse::Ok().json(top.into_iter().collect::<Vec<_>>())
        }
        ("GET", ["users", id]) => match parse_id(id).and_then(|id| store.user(id)) {
            Some(user) => HttpResponse::Ok().json(json!({
                "id": user.id,
                "username": user.username,
                "email": user.email,
                "guestbooks": store.entries_for(user.id),
            })),
            None => not_found(),
        },
        ("GET", ["users", id, "guestbooks"]) => match parse_id(id).and_then(|id| store.user(id)) {
            Some(user) => HttpResponse::Ok().json(store.entries_for(user.id)),
            None => not_found(),
        },
        ("POST", ["users"]) => {
            let username = text(&payload, "username");
            let email = text(&payload, "email");
            let (Some(username), Some(email)) = (username, email) else {
                return bad_request("username and email are required");
            };
            let user = StoredUser {
                id: store.next_user_id,
                username,
                email,
            };
            store.next_user_id += 1;
            store.users.push(user.clone());
            HttpResponse::Created().json(json!({
                "id": user.id,
                "username": user.username,
                "email": user.email,
            }))
        }
        ("PUT", ["users", id]) => {
            let Some(id) = parse_id(id) else {
                return not_found();
            };
            let username = text(&payload, "username");
            let email = text(&payload, "email");
            let (Some(username), Some(email)) = (username, email) else {
                return bad_request("username and email are required");
            };
            match store.users.iter_mut().find(|u| u.id == id) {
                Some(user) => {
                    user.username = username;
                    user.email = email;
                    HttpResponse::Ok().json(json!({
                        "id": user.id,
                        "username": user.username,
                        "email": user.email,
                    }))
                }
                None => not_found(),
            }
        }
        ("DELETE", ["users", id]) => {
            let Some(id) = parse_id(id).filter(|id| store.user(*id).is_some()) else {
                return not_found();
            };
            store.entries.retain(|e| e.user_id != id);
            store.users.retain(|u| u.id != id);
            HttpResponse::Ok().json(json!({"message": "User deleted"}))
        }
        ("GET", ["guestbooks"]) => {
            let rows: Vec<Value> = store.entries.iter().map(|e| store.entry_json(e)).collect();
            HttpResponse::Ok().json(rows)
        }
        ("GET", ["guestbooks", id]) => {
            let entry = parse_id(id).and_then(|id| store.entries.iter().find(|e| e.id == id));
            match entry {
                Some(entry) => HttpResponse::Ok().json(store.entry_json(entry)),
                None => not_found(),
            }
        }
        ("POST", ["guestbooks"]) => {
            let message = text(&payload, "message");
            let user_id = payload.get("user_id").and_then(Value::as_i64);
            let (Some(message), Some(user_id)) = (message, user_id) else {
                return bad_request("message and user_id are required");
            };
            if store.user(user_id).is_none() {
                return bad_request("unknown user");
            }
            let entry = StoredEntry {
                id: store.next_entry_id,
                message,
                user_id,
            };
            store.next_entry_id += 1;
            store.entries.push(entry.clone());
            HttpResponse::Created().json(json!({
                "id": entry.id,
                "message": entry.message,
                "user_id": entry.user_id,
            }))
        }
        ("PUT", ["guestbooks", id]) => {
            let Some(id) = parse_id(id) else {
                return not_found();
            };
            let message = text(&payload, "message");
            let user_id = payload.get("user_id").and_then(Value::as_i64);
            let (Some(message), Some(user_id)) = (message, user_id) else {
                return bad_request("message and user_id are required");
            };
            match store.entries.iter_mut().find(|e| e.id == id) {
                Some(entry) => {
                    entry.message = message;
                    entry.user_id = user_id;
                    HttpResponse::Ok().json(json!({
                        "id": entry.id,
                        "message": entry.message,
                        "user_id": entry.user_id,
                    }))
                }
                None => not_found(),
            }
        }
        ("DELETE", ["guestbooks", id]) => {
            let Some(id) = parse_id(id).filter(|id| store.entries.iter().any(|e| e.id == *id))
            else {
                return not_found();
            };
            store.entries.retain(|e| e.id != id);
            HttpResponse::NoContent().finish()
        }
        _ => not_found(),
    }
}

/// Running fake backend. Stop it with [`FakeBackend::stop`].
pub struct FakeBackend {
    base_url: Url,
    store: web::Data<Mutex<Store>>,
    handle: ServerHandle,
}

impl FakeBackend {
    /// Bind an ephemeral port and serve the seeded store: users `ann` (1) and
    /// `bob` (2); entries 1 and 3 by ann, 2 by bob.
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake backend");
        let addr = listener.local_addr().expect("local addr");
        let store = web::Data::new(Mutex::new(Store::seeded()));
        let app_store = store.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(app_store.clone())
                .default_service(web::to(dispatch))
        })
        .listen(listener)
        .expect("listen fake backend")
        .disable_signals()
        .workers(1)
        .run();
        let handle = server.handle();
        actix_web::rt::spawn(server);
        Self {
            base_url: Url::parse(&format!("http://{addr}/")).expect("base url"),
            store,
            handle,
        }
    }

    pub fn base_url(&self) -> Url {
        self.base_url.clone()
    }

    /// Answer every following request with `status` and a plain-text body.
    pub fn force_response(&self, status: u16, body: &str) {
        self.store.lock().expect("store lock").forced = Some((status, body.to_owned()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.store.lock().expect("store lock").requests.clone()
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}
