use crate::core::models::student::{NewStudent, Student};
use crate::infrastructure::storage::{StoreError, StudentStore, students_from_rows};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue};
use serde_json::Value;
use tracing::debug;

const TABLE: &str = "students";

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Network(err.to_string())
    }
}

/// `students` table access over the hosted store's PostgREST interface.
#[derive(Clone)]
pub struct SupabaseStore {
    table_url: String,
    client: reqwest::Client,
}

impl SupabaseStore {
    /// Builds a client for the project at `url`, authenticating every call
    /// with `key`.
    pub fn new(url: &str, key: &str) -> Result<Self, StoreError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| StoreError::InvalidConfig(format!("SUPABASE_URL: {}", e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(StoreError::InvalidConfig(format!(
                "SUPABASE_URL must use http or https, got `{}`",
                parsed.scheme()
            )));
        }

        let client = reqwest::Client::builder()
            .default_headers(auth_headers(key)?)
            .build()?;

        Ok(SupabaseStore {
            table_url: format!("{}/rest/v1/{}", url.trim_end_matches('/'), TABLE),
            client,
        })
    }
}

fn auth_headers(key: &str) -> Result<HeaderMap, StoreError> {
    let invalid = |_: InvalidHeaderValue| StoreError::InvalidConfig("SUPABASE_KEY contains invalid header characters".to_string());

    let mut api_key = HeaderValue::from_str(key).map_err(invalid)?;
    api_key.set_sensitive(true);
    let mut bearer = HeaderValue::from_str(&format!("Bearer {}", key)).map_err(invalid)?;
    bearer.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static("apikey"), api_key);
    headers.insert(AUTHORIZATION, bearer);
    Ok(headers)
}

/// Decodes a PostgREST response into rows, turning non-2xx statuses into
/// `StoreError::Status` carrying the store's own message.
async fn read_rows(response: reqwest::Response) -> Result<Vec<Student>, StoreError> {
    let status = response.status();

    if status.is_success() {
        let body = response.bytes().await?;
        let rows: Vec<Value> = serde_json::from_slice(&body)
            .map_err(|e| StoreError::MalformedRow(format!("response is not a JSON array: {}", e)))?;
        return students_from_rows(rows);
    }

    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Status {
        status: status.as_u16(),
        message: error_message(status, &body),
    })
}

fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                format!("Store responded with status {}", status)
            } else {
                body.to_string()
            }
        })
}

#[async_trait]
impl StudentStore for SupabaseStore {
    async fn insert_student(&self, student: &NewStudent) -> Result<Option<Student>, StoreError> {
        debug!(table = TABLE, "inserting row");
        let response = self
            .client
            .post(&self.table_url)
            .header("Prefer", "return=representation")
            .json(student)
            .send()
            .await?;
        Ok(read_rows(response).await?.into_iter().next())
    }

    async fn list_students(&self) -> Result<Vec<Student>, StoreError> {
        debug!(table = TABLE, "selecting rows");
        let response = self
            .client
            .get(&self.table_url)
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;
        read_rows(response).await
    }
}
