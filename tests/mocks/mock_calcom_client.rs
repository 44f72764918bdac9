use async_trait::async_trait;
use scheduling_mcp_server::client::AsyncCalcomClient;
use scheduling_mcp_server::error::{ApiError, ApiResult};
use scheduling_mcp_server::models::{CalcomEventType, CalcomOrganization, CalcomUser, CalcomUserId};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock Cal.com client for testing.
///
/// Holds raw JSON fixtures shaped like the v2 API payloads, can be told to
/// fail individual calls, and tracks method calls and the arguments they
/// received for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockCalcomClient {
    organizations: Arc<Mutex<Vec<Value>>>,
    users: Arc<Mutex<Vec<Value>>>,
    event_types: Arc<Mutex<HashMap<String, Vec<Value>>>>,
    failing_event_types: Arc<Mutex<HashSet<String>>>,
    users_error: Arc<Mutex<Option<u16>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockCalcomClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_organization(&self, org: Value) {
        self.organizations.lock().unwrap().push(org);
    }

    /// Add an org member; listing order is insertion order.
    pub fn add_user(&self, user: Value) {
        self.users.lock().unwrap().push(user);
    }

    /// Set the event types returned for a user id.
    pub fn set_event_types(&self, user_id: &str, event_types: Vec<Value>) {
        self.event_types
            .lock()
            .unwrap()
            .insert(user_id.to_string(), event_types);
    }

    /// Make the event type fetch for one user fail with a 500.
    pub fn fail_event_types_for(&self, user_id: &str) {
        self.failing_event_types
            .lock()
            .unwrap()
            .insert(user_id.to_string());
    }

    /// Make the org users listing fail with the given status.
    pub fn fail_users_with(&self, status: u16) {
        *self.users_error.lock().unwrap() = Some(status);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    pub fn total_calls(&self) -> usize {
        self.call_counts.lock().unwrap().values().sum()
    }

    /// Every call as `method:arg1:arg2`, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn track_call(&self, method: &str, args: &[&str]) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        let mut entry = method.to_string();
        for arg in args {
            entry.push(':');
            entry.push_str(arg);
        }
        self.calls.lock().unwrap().push(entry);
    }
}

#[async_trait]
impl AsyncCalcomClient for MockCalcomClient {
    async fn list_organizations(&self, api_key: &str) -> ApiResult<Vec<CalcomOrganization>> {
        self.track_call("list_organizations", &[api_key]);

        let orgs = self.organizations.lock().unwrap().clone();
        Ok(serde_json::from_value(Value::Array(orgs))?)
    }

    async fn list_organization_users(
        &self,
        api_key: &str,
        org_id: &str,
    ) -> ApiResult<Vec<CalcomUser>> {
        self.track_call("list_organization_users", &[api_key, org_id]);

        if let Some(status) = *self.users_error.lock().unwrap() {
            return Err(ApiError::Status {
                status,
                body: "{\"message\":\"users unavailable\"}".to_string(),
            });
        }

        let users = self.users.lock().unwrap().clone();
        Ok(serde_json::from_value(Value::Array(users))?)
    }

    async fn list_event_types(
        &self,
        api_key: &str,
        user_id: &CalcomUserId,
    ) -> ApiResult<Vec<CalcomEventType>> {
        let user_id = user_id.to_string();
        self.track_call("list_event_types", &[api_key, &user_id]);

        if self.failing_event_types.lock().unwrap().contains(&user_id) {
            return Err(ApiError::Status {
                status: 500,
                body: "internal error".to_string(),
            });
        }

        let event_types = self
            .event_types
            .lock()
            .unwrap()
            .get(&user_id)
            .cloned()
            .unwrap_or_default();
        Ok(serde_json::from_value(Value::Array(event_types))?)
    }
}
