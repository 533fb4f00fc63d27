//! Typed endpoint helpers and the session lifecycle operations.
//!
//! Everything here funnels through [`ApiClient::request`], which owns token
//! attachment, the 401 refresh-retry cycle, and error reporting. The
//! startup probe (`silent_refresh`) is the one exception: a missing session
//! at startup is expected, so it talks to the transport directly and only
//! logs its failures.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::net::http::{ApiClient, ApiError, Method, NETWORK_ERROR, Transport};
use crate::net::types::{
    LoginPayload, LoginResponse, Role, RolePayload, Status, StatusPayload, Task, TaskPayload,
    User, UserPayload,
};

impl<T: Transport> ApiClient<T> {
    // ---- session lifecycle ----

    /// Exchange credentials for an access token and profile.
    ///
    /// On success both are stored; on failure prior session state is left
    /// untouched and the tagged error is returned for inline display.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let body = encode(&LoginPayload { email, password })?;
        let response: LoginResponse =
            self.send_json(Method::Post, "/auth/login", Some(body)).await?;

        self.session().set_token(Some(response.access_token));
        let user = response.user;
        self.auth().update(|auth| auth.user = Some(user.clone()));
        Ok(user)
    }

    /// Startup probe: try to mint a token from the refresh cookie and load
    /// the profile. Runs once per process; always flips `ready` when done.
    /// Failure is an expected state (no session yet) and is logged only.
    pub async fn silent_refresh(&self) {
        if let Some(token) = self.refresh().await {
            self.session().set_token(Some(token.clone()));
            match self.fetch_profile_quiet(token).await {
                Some(user) => self.auth().update(|auth| auth.user = Some(user)),
                None => self.session().clear(),
            }
        } else {
            self.session().clear();
        }
        self.auth().update(|auth| auth.ready = true);
    }

    /// Invalidate the server-side refresh session and drop local state.
    pub async fn logout(&self) {
        let req = self.build(Method::Post, "/auth/logout", &None, self.session().token());
        if let Err(e) = self.transport().send(&req).await {
            log::warn!("logout request failed: {e}");
        }
        self.session().clear();
        self.auth().update(|auth| auth.user = None);
        self.toasts().success("Signed out");
    }

    async fn fetch_profile_quiet(&self, token: String) -> Option<User> {
        let req = self.build(Method::Get, "/auth/profile", &None, Some(token));
        match self.transport().send(&req).await {
            Ok(response) if response.ok() => match serde_json::from_str::<User>(&response.body) {
                Ok(user) => Some(user),
                Err(e) => {
                    log::warn!("profile response malformed: {e}");
                    None
                }
            },
            Ok(response) => {
                log::warn!("startup profile fetch rejected: HTTP {}", response.status);
                None
            }
            Err(e) => {
                log::warn!("startup profile fetch failed: {e}");
                None
            }
        }
    }

    // ---- tasks ----

    pub async fn fetch_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.send_json(Method::Get, "/tasks", None).await
    }

    pub async fn create_task(&self, payload: &TaskPayload) -> Result<Task, ApiError> {
        self.send_json(Method::Post, "/tasks", Some(encode(payload)?)).await
    }

    pub async fn update_task(&self, id: &str, payload: &TaskPayload) -> Result<Task, ApiError> {
        self.send_json(Method::Patch, &format!("/tasks/{id}"), Some(encode(payload)?)).await
    }

    /// Owner's update: status only, nothing else crosses the wire.
    pub async fn update_task_status(&self, id: &str, status: Status) -> Result<Task, ApiError> {
        self.send_json(Method::Patch, &format!("/tasks/{id}"), Some(encode(&StatusPayload { status })?))
            .await
    }

    pub async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        self.request(Method::Delete, &format!("/tasks/{id}"), None).await.map(|_| ())
    }

    // ---- users ----

    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        self.send_json(Method::Get, "/users", None).await
    }

    pub async fn create_user(&self, payload: &UserPayload) -> Result<User, ApiError> {
        self.send_json(Method::Post, "/users", Some(encode(payload)?)).await
    }

    pub async fn update_user(&self, id: &str, payload: &UserPayload) -> Result<User, ApiError> {
        self.send_json(Method::Put, &format!("/users/{id}"), Some(encode(payload)?)).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.request(Method::Delete, &format!("/users/{id}"), None).await.map(|_| ())
    }

    // ---- roles ----

    pub async fn fetch_roles(&self) -> Result<Vec<Role>, ApiError> {
        self.send_json(Method::Get, "/roles", None).await
    }

    pub async fn create_role(&self, payload: &RolePayload) -> Result<Role, ApiError> {
        self.send_json(Method::Post, "/roles", Some(encode(payload)?)).await
    }

    // ---- plumbing ----

    async fn send_json<D: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<D, ApiError> {
        let value = self.request(method, path, body).await?.unwrap_or(Value::Null);
        serde_json::from_value(value).map_err(|e| {
            log::warn!("unexpected response shape for {path}: {e}");
            self.toasts().error(NETWORK_ERROR);
            ApiError::Network(NETWORK_ERROR.to_owned())
        })
    }
}

fn encode<P: Serialize>(payload: &P) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|_| ApiError::Network(NETWORK_ERROR.to_owned()))
}
