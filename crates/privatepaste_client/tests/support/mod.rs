//! Fake PrivatePaste service used by the integration tests.

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Form, Router,
};
use privatepaste_client::PasteClient;
use privatepaste_core::Config;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, OnceLock};
use std::time::Duration;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Host name the fake service is reached under when subdomains are involved.
pub(crate) const FAKE_HOST: &str = "privatepaste.test";

/// How the fake service answers `POST /save`.
#[derive(Debug, Clone)]
pub(crate) struct Reply {
    pub status: StatusCode,
    pub location: Option<&'static str>,
    pub delay: Option<Duration>,
}

impl Reply {
    pub(crate) fn redirect_to(location: &'static str) -> Self {
        Self {
            status: StatusCode::FOUND,
            location: Some(location),
            delay: None,
        }
    }
}

/// One request as seen by the fake service.
#[derive(Debug, Clone)]
pub(crate) struct ReceivedPaste {
    pub host: String,
    pub content_type: String,
    pub fields: HashMap<String, String>,
}

#[derive(Clone)]
struct FakeState {
    reply: Reply,
    received: Arc<Mutex<Vec<ReceivedPaste>>>,
    followed: Arc<Mutex<Vec<String>>>,
}

pub(crate) struct FakeService {
    addr: SocketAddr,
    state: FakeState,
}

fn header_text(headers: &HeaderMap, name: header::HeaderName) -> String {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

async fn save(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    state.received.lock().expect("received lock").push(ReceivedPaste {
        host: header_text(&headers, header::HOST),
        content_type: header_text(&headers, header::CONTENT_TYPE),
        fields,
    });
    if let Some(delay) = state.reply.delay {
        tokio::time::sleep(delay).await;
    }

    let mut response = state.reply.status.into_response();
    if let Some(location) = state.reply.location {
        response
            .headers_mut()
            .insert(header::LOCATION, HeaderValue::from_static(location));
    }
    response
}

async fn followed(State(state): State<FakeState>, uri: axum::http::Uri) -> StatusCode {
    state
        .followed
        .lock()
        .expect("followed lock")
        .push(uri.path().to_string());
    StatusCode::OK
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "privatepaste_client=debug,privatepaste_core=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

impl FakeService {
    pub(crate) async fn start(reply: Reply) -> Self {
        init_tracing();
        let state = FakeState {
            reply,
            received: Arc::new(Mutex::new(Vec::new())),
            followed: Arc::new(Mutex::new(Vec::new())),
        };
        let app = Router::new()
            .route("/save", post(save))
            .fallback(followed)
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake service");
        let addr = listener.local_addr().expect("fake service addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake service");
        });
        Self { addr, state }
    }

    pub(crate) fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL addressing the service by IP.
    pub(crate) fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Base URL addressing the service as [`FAKE_HOST`]; pair with [`Self::resolving_client`].
    pub(crate) fn named_base_url(&self) -> String {
        format!("http://{}:{}", FAKE_HOST, self.addr.port())
    }

    pub(crate) fn client(&self) -> PasteClient {
        PasteClient::new(config_for(self.base_url())).expect("paste client")
    }

    /// Client that resolves [`FAKE_HOST`] and the given subdomains of it to this service.
    pub(crate) fn resolving_client(&self, subdomains: &[&str]) -> PasteClient {
        let mut builder = reqwest::Client::builder().resolve(FAKE_HOST, self.addr);
        for subdomain in subdomains {
            builder = builder.resolve(&format!("{}.{}", subdomain, FAKE_HOST), self.addr);
        }
        PasteClient::from_builder(config_for(self.named_base_url()), builder)
            .expect("paste client")
    }

    pub(crate) fn received(&self) -> Vec<ReceivedPaste> {
        self.state.received.lock().expect("received lock").clone()
    }

    pub(crate) fn followed(&self) -> Vec<String> {
        self.state.followed.lock().expect("followed lock").clone()
    }
}

pub(crate) fn config_for(base_url: String) -> Config {
    Config {
        base_url,
        ..Config::default()
    }
}

/// Lock serializing tests that read or mutate process environment variables.
pub(crate) fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

#[allow(unused_unsafe)]
fn restore_env_var(key: &str, value: Option<&str>) {
    // SAFETY: Callers hold `env_lock()` while the environment is mutated.
    unsafe {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }
}

/// Sets an environment variable and restores its previous value on drop.
pub(crate) struct EnvGuard {
    key: &'static str,
    previous: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        let previous = std::env::var(key).ok();
        restore_env_var(key, Some(value));
        Self { key, previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        restore_env_var(self.key, self.previous.as_deref());
    }
}
