//! Generation backends.

mod supabase;

pub use supabase::SupabaseFunctions;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::core::lifecycle::GenerationRequest;
use crate::error::GenerationError;

/// A remote endpoint that turns a prompt into a JSON response.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Invokes `function` with `request` and returns the decoded JSON body.
    async fn invoke(&self, function: &str, request: &GenerationRequest)
        -> Result<Value, GenerationError>;
}

/// Shared backend handle passed to the pages as a prop.
#[derive(Clone)]
pub struct BackendHandle(pub Arc<dyn GenerationBackend>);

impl BackendHandle {
    pub fn new(backend: impl GenerationBackend + 'static) -> Self {
        Self(Arc::new(backend))
    }

    pub fn get(&self) -> &dyn GenerationBackend {
        self.0.as_ref()
    }
}

impl PartialEq for BackendHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
