use async_trait::async_trait;
use scheduling_mcp_server::client::AsyncCalendlyClient;
use scheduling_mcp_server::error::{ApiError, ApiResult};
use scheduling_mcp_server::models::{CalendlyEventType, CalendlyUser, OrganizationMembership};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock Calendly client for testing.
///
/// `current_user` answers 401 until a profile is set.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockCalendlyClient {
    me: Arc<Mutex<Option<Value>>>,
    memberships: Arc<Mutex<Vec<Value>>>,
    event_types: Arc<Mutex<HashMap<String, Vec<Value>>>>,
    failing_event_types: Arc<Mutex<HashSet<String>>>,
    memberships_error: Arc<Mutex<Option<u16>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockCalendlyClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token owner's profile.
    pub fn set_current_user(&self, me: Value) {
        *self.me.lock().unwrap() = Some(me);
    }

    /// Add an organization member; listing order is insertion order.
    pub fn add_member(&self, user: Value) {
        self.memberships
            .lock()
            .unwrap()
            .push(serde_json::json!({ "user": user }));
    }

    pub fn set_event_types(&self, user_uri: &str, event_types: Vec<Value>) {
        self.event_types
            .lock()
            .unwrap()
            .insert(user_uri.to_string(), event_types);
    }

    pub fn fail_event_types_for(&self, user_uri: &str) {
        self.failing_event_types
            .lock()
            .unwrap()
            .insert(user_uri.to_string());
    }

    /// Make the memberships listing fail with the given status.
    pub fn fail_memberships_with(&self, status: u16) {
        *self.memberships_error.lock().unwrap() = Some(status);
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
impl AsyncCalendlyClient for MockCalendlyClient {
    async fn current_user(&self, pat: &str) -> ApiResult<CalendlyUser> {
        self.track_call("current_user", &[pat]);

        match self.me.lock().unwrap().clone() {
            Some(me) => Ok(serde_json::from_value(me)?),
            None => Err(ApiError::Status {
                status: 401,
                body: "{\"title\":\"Unauthenticated\"}".to_string(),
            }),
        }
    }

    async fn list_organization_memberships(
        &self,
        pat: &str,
        organization_uri: &str,
    ) -> ApiResult<Vec<OrganizationMembership>> {
        self.track_call("list_organization_memberships", &[pat, organization_uri]);

        if let Some(status) = *self.memberships_error.lock().unwrap() {
            return Err(ApiError::Status {
                status,
                body: "{\"title\":\"Permission Denied\"}".to_string(),
            });
        }

        let memberships = self.memberships.lock().unwrap().clone();
        Ok(serde_json::from_value(Value::Array(memberships))?)
    }

    async fn list_event_types(
        &self,
        pat: &str,
        user_uri: &str,
    ) -> ApiResult<Vec<CalendlyEventType>> {
        self.track_call("list_event_types", &[pat, user_uri]);

        if self.failing_event_types.lock().unwrap().contains(user_uri) {
            return Err(ApiError::Status {
                status: 500,
                body: "internal error".to_string(),
            });
        }

        let event_types = self
            .event_types
            .lock()
            .unwrap()
            .get(user_uri)
            .cloned()
            .unwrap_or_default();
        Ok(serde_json::from_value(Value::Array(event_types))?)
    }
}
