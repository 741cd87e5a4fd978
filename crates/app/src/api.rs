use reqwest::StatusCode;
use shared_types::{AppError, Order, UserProfile};

use crate::auth::{SessionFuture, SessionProvider};

/// HTTP client for the delivery API.
///
/// Holds the base URL from `AppConfig::api_base_url`; every path below is
/// appended to it.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

fn network_error(err: reqwest::Error) -> AppError {
    AppError::network(err.to_string())
}

fn decode_error(err: reqwest::Error) -> AppError {
    AppError::decode(err.to_string())
}

/// Order ids come from the route or user input; encode them as one segment.
fn order_path(id: &str) -> String {
    format!("/api/orders/{}", urlencoding::encode(id))
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn current_profile(&self) -> Result<Option<UserProfile>, AppError> {
        let resp = self
            .http
            .get(self.url("/api/auth/profile"))
            .send()
            .await
            .map_err(network_error)?;

        match resp.status() {
            StatusCode::UNAUTHORIZED => Ok(None),
            status if status.is_success() => resp.json().await.map_err(decode_error),
            status => Err(AppError::from_status(
                status.as_u16(),
                "Could not load your profile",
            )),
        }
    }

    pub async fn end_session(&self) -> Result<(), AppError> {
        let resp = self
            .http
            .post(self.url("/api/auth/sign-out"))
            .send()
            .await
            .map_err(network_error)?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(AppError::from_status(
                resp.status().as_u16(),
                "Sign out was rejected",
            ))
        }
    }

    pub async fn fetch_order(&self, id: &str) -> Result<Order, AppError> {
        let resp = self
            .http
            .get(self.url(&order_path(id)))
            .send()
            .await
            .map_err(network_error)?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::not_found(format!("Order {id} not found")));
        }
        if !status.is_success() {
            return Err(AppError::from_status(
                status.as_u16(),
                "Could not load order",
            ));
        }
        resp.json().await.map_err(decode_error)
    }
}

impl SessionProvider for ApiClient {
    fn fetch_profile(&self) -> SessionFuture<Option<UserProfile>> {
        let client = self.clone();
        Box::pin(async move { client.current_profile().await })
    }

    fn sign_out(&self) -> SessionFuture<()> {
        let client = self.clone();
        Box::pin(async move { client.end_session().await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_base_and_path() {
        let api = ApiClient::new("https://api.deliveryos.test");
        assert_eq!(
            api.url("/api/orders/7"),
            "https://api.deliveryos.test/api/orders/7"
        );
    }

    #[test]
    fn order_ids_stay_in_one_path_segment() {
        assert_eq!(order_path("42"), "/api/orders/42");
        assert_eq!(order_path("A#1"), "/api/orders/A%231");
        assert_eq!(
            order_path("42?status=void"),
            "/api/orders/42%3Fstatus%3Dvoid"
        );
        assert_eq!(
            order_path("42/../../auth/profile"),
            "/api/orders/42%2F..%2F..%2Fauth%2Fprofile"
        );
    }
}
