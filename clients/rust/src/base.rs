use reminder_server_api_structs::ErrorResponse;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum APIErrorVariant {
    BadClientData,
    NotFound,
    Conflict,
    InternalError,
    UnexpectedStatusCode,
    MalformedResponse,
    Network,
}

#[derive(Debug)]
pub struct APIError {
    pub variant: APIErrorVariant,
    /// The `error` reason returned by the server, or a description of what went wrong
    pub message: String,
}

pub type APIResponse<T> = Result<T, APIError>;

pub(crate) struct BaseClient {
    client: Client,
    address: String,
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        let address = address.trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            address,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.address, path)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(self.client.get(self.url(&path)), expected_status_code)
            .await
    }

    pub async fn post<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(
            self.client.post(self.url(&path)).json(&body),
            expected_status_code,
        )
        .await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = req.send().await.map_err(|e| APIError {
            variant: APIErrorVariant::Network,
            message: e.to_string(),
        })?;
        if res.status() != expected_status_code {
            return Err(Self::into_api_error(res).await);
        }

        res.json::<T>().await.map_err(|e| APIError {
            variant: APIErrorVariant::MalformedResponse,
            message: e.to_string(),
        })
    }

    async fn into_api_error(res: Response) -> APIError {
        let variant = match res.status() {
            StatusCode::BAD_REQUEST => APIErrorVariant::BadClientData,
            StatusCode::NOT_FOUND => APIErrorVariant::NotFound,
            StatusCode::CONFLICT => APIErrorVariant::Conflict,
            StatusCode::INTERNAL_SERVER_ERROR => APIErrorVariant::InternalError,
            _ => APIErrorVariant::UnexpectedStatusCode,
        };
        let status = res.status();
        let message = match res.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => format!("Unexpected status code: {}", status),
        };
        APIError { variant, message }
    }
}
