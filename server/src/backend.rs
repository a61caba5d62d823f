use eyre::WrapErr;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use types::{Department, NewDepartment, NewUser, Result, UserDetails, err};
use url::Url;

trait ReqwestExt {
    /// Send the request and fail on any non-2xx status.
    async fn try_send(self) -> Result<reqwest::Response>;

    /// Like `try_send`, decoding the body as JSON.
    async fn try_json<T: DeserializeOwned>(self) -> Result<T>;
}

impl ReqwestExt for RequestBuilder {
    async fn try_send(self) -> Result<reqwest::Response> {
        let response = self.send().await.wrap_err("request to backend failed")?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, url = %response.url(), "backend rejected request");
            return Err(err!("backend responded with {status}"));
        }

        Ok(response)
    }

    async fn try_json<T: DeserializeOwned>(self) -> Result<T> {
        let body = self
            .try_send()
            .await?
            .bytes()
            .await
            .wrap_err("failed to read backend response")?;

        serde_json::from_slice(&body).map_err(|error| {
            tracing::warn!(%error, "failed to parse backend response");
            eyre::Report::new(error)
                .wrap_err("unexpected response from backend")
                .into()
        })
    }
}

/// Client for the department and user services behind a single origin.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: Url,
}

impl BackendClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a request to `base_url` plus the given path segments, each
    /// percent-encoded so a typed identifier can't escape its segment.
    ///
    /// `.` and `..` are refused: the url crate drops them as dot segments,
    /// which would send the request to the parent path.
    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        if let Some(segment) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(err!("{segment:?} is not a valid path segment"));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| err!("backend url cannot be a base: {}", self.base_url))?
            .pop_if_empty()
            .extend(segments);

        tracing::debug!(%method, %url, "backend request");
        Ok(self.client.request(method, url))
    }

    fn get(&self, segments: &[&str]) -> Result<RequestBuilder> {
        self.request(Method::GET, segments)
    }

    fn post(&self, segments: &[&str]) -> Result<RequestBuilder> {
        self.request(Method::POST, segments)
    }

    /// The created record in the response is not used.
    pub async fn create_department(&self, department: &NewDepartment) -> Result<()> {
        self.post(&["api", "departments"])?
            .json(department)
            .try_send()
            .await?;
        Ok(())
    }

    pub async fn get_department(&self, id: &str) -> Result<Department> {
        self.get(&["api", "departments", id])?.try_json().await
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<()> {
        self.post(&["api", "users"])?.json(user).try_send().await?;
        Ok(())
    }

    pub async fn get_user(&self, id: &str) -> Result<UserDetails> {
        self.get(&["api", "users", id])?.try_json().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        extract::Path,
        http::StatusCode,
        routing::{get, post},
    };
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};

    /// Serve `router` on an ephemeral port and return a client pointed at it.
    async fn spawn_backend(router: Router) -> BackendClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });

        BackendClient::new(format!("http://{addr}").parse().unwrap())
    }

    #[tokio::test]
    async fn creates_department() {
        let received = Arc::new(Mutex::new(None::<Value>));
        let sink = received.clone();
        let router = Router::new().route(
            "/api/departments",
            post(move |Json(body): Json<Value>| async move {
                *sink.lock().unwrap() = Some(body);
                (StatusCode::OK, Json(json!({ "id": 9 })))
            }),
        );
        let client = spawn_backend(router).await;

        client
            .create_department(&NewDepartment {
                department_name: "Engineering".into(),
                department_code: "ENG-001".into(),
                department_address: String::new(),
            })
            .await
            .unwrap();

        assert_eq!(
            received.lock().unwrap().take().unwrap(),
            json!({
                "departmentName": "Engineering",
                "departmentCode": "ENG-001",
                "departmentAddress": ""
            })
        );
    }

    #[tokio::test]
    async fn fetches_department() {
        let router = Router::new().route(
            "/api/departments/{id}",
            get(|Path(id): Path<String>| async move {
                assert_eq!(id, "1");
                Json(json!({
                    "id": 1,
                    "departmentName": "IT",
                    "departmentCode": "IT-01",
                    "departmentAddress": "123 Rd"
                }))
            }),
        );
        let client = spawn_backend(router).await;

        let department = client.get_department("1").await.unwrap();

        assert_eq!(department.department_name.as_deref(), Some("IT"));
        assert_eq!(department.department_code.as_deref(), Some("IT-01"));
        assert_eq!(department.department_address.as_deref(), Some("123 Rd"));
    }

    #[tokio::test]
    async fn fetches_user_aggregate() {
        let router = Router::new().route(
            "/api/users/{id}",
            get(|| async {
                Json(json!({
                    "user": { "id": 2, "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com" },
                    "department": { "id": 1, "departmentName": "IT", "departmentCode": "IT-01" }
                }))
            }),
        );
        let client = spawn_backend(router).await;

        let details = client.get_user("2").await.unwrap();

        assert_eq!(details.user.unwrap().email.as_deref(), Some("ada@example.com"));
        assert_eq!(details.department.unwrap().department_address, None);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let router = Router::new()
            .route("/api/users", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .route("/api/users/{id}", get(|| async { StatusCode::NOT_FOUND }));
        let client = spawn_backend(router).await;

        assert!(client.get_user("404").await.is_err());
        assert!(client.create_user(&NewUser::default()).await.is_err());
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() {
        let router = Router::new().route("/api/departments/{id}", get(|| async { "<html>" }));
        let client = spawn_backend(router).await;

        assert!(client.get_department("1").await.is_err());
    }

    #[tokio::test]
    async fn identifier_stays_in_its_segment() {
        let router = Router::new().route(
            "/api/departments/{id}",
            get(|Path(id): Path<String>| async move { Json(json!({ "departmentName": id })) }),
        );
        let client = spawn_backend(router).await;

        let department = client.get_department("1/../../users").await.unwrap();

        assert_eq!(department.department_name.as_deref(), Some("1/../../users"));
    }

    #[tokio::test]
    async fn dot_identifiers_never_reach_the_collection() {
        let router = Router::new()
            .route(
                "/api/departments",
                get(|| async { Json(json!({ "departmentName": "collection" })) }),
            )
            .route(
                "/api/departments/{id}",
                get(|| async { Json(json!({ "departmentName": "item" })) }),
            );
        let client = spawn_backend(router).await;

        for id in [".", ".."] {
            assert!(client.get_department(id).await.is_err(), "{id:?}");
            assert!(client.get_user(id).await.is_err(), "{id:?}");
        }

        let department = client.get_department("...").await.unwrap();
        assert_eq!(department.department_name.as_deref(), Some("item"));
    }

    #[tokio::test]
    async fn unreachable_backend_is_an_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = BackendClient::new(format!("http://{addr}").parse().unwrap());

        assert!(client.get_department("1").await.is_err());
    }
}
