use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use signoff_core::{LogoutPolicy, Service, ServiceRegistry, ServiceRegistryError};

/// Logout policies of registered services, keyed by service id.
#[derive(Default, Clone)]
pub struct HashMapServiceRegistry {
    policies: Arc<RwLock<HashMap<String, LogoutPolicy>>>,
}

impl HashMapServiceRegistry {
    pub fn new() -> Self {
        Self {
            policies: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn register(&self, service_id: impl Into<String>, policy: LogoutPolicy) {
        self.policies.write().await.insert(service_id.into(), policy);
    }

    pub async fn unregister(&self, service_id: &str) -> Option<LogoutPolicy> {
        self.policies.write().await.remove(service_id)
    }
}

#[async_trait::async_trait]
impl ServiceRegistry for HashMapServiceRegistry {
    async fn find_logout_policy(
        &self,
        service: &Service,
    ) -> Result<Option<LogoutPolicy>, ServiceRegistryError> {
        Ok(self.policies.read().await.get(service.id()).copied())
    }
}
