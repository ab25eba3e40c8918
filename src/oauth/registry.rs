use std::collections::HashMap;
use std::sync::Arc;

use crate::error::AuthError;
use crate::providers::Provider;

/// Read-only resolver mapping provider names to handles. Built once at
/// startup and injected into the client; lookups never mutate it.
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn Provider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, provider: impl Provider + 'static) -> Self {
        self.providers
            .insert(provider.name().to_owned(), Arc::new(provider));
        self
    }

    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Provider>, AuthError> {
        self.providers
            .get(name)
            .cloned()
            .ok_or_else(|| AuthError::UnknownProvider(name.to_owned()))
    }
}
