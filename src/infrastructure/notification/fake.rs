//! Recording toast sender for backend tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::notify_rust::{ToastRequest, ToastSendError, ToastSender};

#[derive(Clone, Default)]
pub struct FakeSender {
    error: Option<String>,
    pub requests: Arc<Mutex<Vec<ToastRequest>>>,
}

impl FakeSender {
    pub fn failing(error: &str) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Default::default()
        }
    }

    pub fn last_request(&self) -> ToastRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no toast was sent")
    }
}

#[async_trait]
impl ToastSender for FakeSender {
    async fn send(&self, request: ToastRequest) -> Result<(), ToastSendError> {
        self.requests.lock().unwrap().push(request);
        match &self.error {
            Some(error) => Err(ToastSendError(error.clone())),
            None => Ok(()),
        }
    }
}
