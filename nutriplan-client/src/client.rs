use async_trait::async_trait;
use itertools::Itertools;
use nutriplan_model::{ChatReply, DietPlan};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("server unreachable")]
    CommunicationError,
    #[error("internal server error")]
    InternalServerError,
    #[error("invalid request: {0}")]
    RequestError(String),
    #[error("incorrect server response")]
    ResponseError,
}

pub type Result<T> = std::result::Result<T, Error>;

#[mockall::automock]
#[async_trait]
pub trait Client: Send + Sync {
    async fn post_diet_plan(&self, profile: &Value) -> Result<DietPlan>;
    async fn post_chat(&self, message: &str) -> Result<ChatReply>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    details: Vec<String>,
}

impl ErrorBody {
    fn message(&self) -> String {
        if self.details.is_empty() {
            self.error.clone()
        } else {
            format!("{}: {}", self.error, self.details.iter().join("; "))
        }
    }
}

pub struct ClientImpl {
    url: String,
    client: reqwest::Client,
}

impl ClientImpl {
    fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.url.trim_end_matches('/'), path)
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, body: &Value) -> Result<T> {
        let resp = self
            .client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(|_| Error::CommunicationError)?;

        if resp.status().is_client_error() {
            let message = resp
                .json::<ErrorBody>()
                .await
                .map(|body| body.message())
                .unwrap_or_default();
            Err(Error::RequestError(message))
        } else if resp.status().is_server_error() {
            Err(Error::InternalServerError)
        } else {
            resp.json().await.map_err(|_| Error::ResponseError)
        }
    }
}

pub fn create(url: String) -> impl Client {
    ClientImpl::new(url)
}

#[async_trait]
impl Client for ClientImpl {
    async fn post_diet_plan(&self, profile: &Value) -> Result<DietPlan> {
        self.post("diet-plan", profile).await
    }

    async fn post_chat(&self, message: &str) -> Result<ChatReply> {
        self.post("chat", &json!({ "message": message })).await
    }
}
