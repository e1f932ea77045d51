//! BDD test world for the gridwatch client

use std::collections::HashMap;
use std::sync::Arc;

use cucumber::World;
use serde_json::Value;
use tokio::sync::RwLock;

use gridwatch::console::{Loaded, SessionState};
use gridwatch::io::{HttpClient, HttpRequest, HttpResponse};
use gridwatch::records::{Alarm, DashboardSummary};
use gridwatch::session::MemoryTokenStore;
use gridwatch::{ApiClient, Console, GridwatchError};

/// What the scripted server does for one path
#[derive(Debug, Clone)]
pub enum Scripted {
    Respond { status: u16, body: String },
    Unreachable,
}

/// An HTTP client that answers from a script keyed by path (query included)
/// and records every request it was asked to send
#[derive(Debug, Default)]
pub struct ScriptedHttpClient {
    pub routes: RwLock<HashMap<String, Scripted>>,
    pub requests: RwLock<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    pub async fn script(&self, path: &str, scripted: Scripted) {
        self.routes.write().await.insert(path.to_string(), scripted);
    }

    pub async fn last_request(&self) -> HttpRequest {
        self.requests
            .read()
            .await
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait::async_trait]
impl HttpClient for ScriptedHttpClient {
    async fn send(&self, request: HttpRequest) -> gridwatch::Result<HttpResponse> {
        let path = request
            .url
            .strip_prefix(BASE_URL)
            .unwrap_or(&request.url)
            .to_string();
        self.requests.write().await.push(request);

        match self.routes.read().await.get(&path).cloned() {
            Some(Scripted::Respond { status, body }) => Ok(HttpResponse { status, body }),
            Some(Scripted::Unreachable) | None => Err(GridwatchError::Transport(format!(
                "{} failed: connection refused",
                path
            ))),
        }
    }
}

pub const BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Default, World)]
pub struct GridwatchWorld {
    pub http: Arc<ScriptedHttpClient>,
    pub tokens: Arc<MemoryTokenStore>,

    // Results of the last action
    pub last_result: Option<gridwatch::Result<Option<Value>>>,
    pub login_result: Option<gridwatch::Result<Value>>,
    pub session_state: Option<SessionState>,
    pub loaded_alarms: Option<Loaded<Vec<Alarm>>>,
    pub loaded_summary: Option<Loaded<DashboardSummary>>,
}

impl GridwatchWorld {
    pub fn client(&self) -> ApiClient {
        ApiClient::new(BASE_URL, self.http.clone(), self.tokens.clone())
    }

    pub fn console(&self) -> Console {
        Console::new(self.client())
    }
}
