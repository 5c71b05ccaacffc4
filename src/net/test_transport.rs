//! Scripted [`Transport`] for tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde_json::json;
use session::{
    ApiError, AuthResponse, Clock, KeyValueStore, ManualClock, MemoryStore, Role, SessionManager,
};

use super::api::{ApiRequest, Transport};
use crate::config::AppConfig;

/// Records every request and answers from a queue; an empty queue answers
/// with an empty body.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    sent: Rc<RefCell<Vec<ApiRequest>>>,
    replies: Rc<RefCell<VecDeque<Result<String, ApiError>>>>,
}

impl ScriptedTransport {
    pub fn reply(&self, reply: Result<&str, ApiError>) {
        self.replies.borrow_mut().push_back(reply.map(str::to_owned));
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }

    pub fn last(&self) -> ApiRequest {
        self.sent.borrow().last().cloned().expect("a request was sent")
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<String, ApiError> {
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        api_base_url: "http://backend/api".to_owned(),
    }
}

pub fn test_manager() -> (Rc<MemoryStore>, SessionManager) {
    let storage = Rc::new(MemoryStore::new());
    let clock: Rc<dyn Clock> = Rc::new(ManualClock::new(1_700_000_000));
    let manager = SessionManager::new(Rc::clone(&storage) as Rc<dyn KeyValueStore>, clock);
    (storage, manager)
}

/// Store a signed-in admin whose token carries no claims.
pub fn sign_in_admin(manager: &SessionManager) {
    let response = AuthResponse {
        token: Some("admin.token.sig".to_owned()),
        profile: json!({ "admin": { "adminId": 1, "username": "root", "role": "ADMIN" } }),
    };
    manager
        .store(Role::Admin)
        .complete_login(response)
        .expect("admin login");
}
