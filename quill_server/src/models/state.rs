use std::sync::Arc;

use crate::client::CompletionBackend;

#[derive(Clone)]
pub struct QuillState {
    pub backend: Arc<dyn CompletionBackend>,
}

impl QuillState {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }
}
