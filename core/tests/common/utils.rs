use std::sync::Arc;
use std::time::Duration;

use futures::future;
use ratemy_core::crypto::{Ed25519KeyPair, KeyGenerator, KeyPair};
use ratemy_core::{
    DatabaseManager, DigestDerivator, MemoryCollection, MemoryManager, SelfSignatureManager,
};

#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub async fn do_task_with_timeout<Output>(
    future: future::BoxFuture<'static, Output>,
    ms: u64,
) -> Result<Output, tokio::time::error::Elapsed> {
    tokio::time::timeout(Duration::from_millis(ms), future).await
}

/// Deterministic identity for tests.
#[allow(dead_code)]
pub fn identity(seed: &str) -> SelfSignatureManager {
    let keys = KeyPair::Ed25519(Ed25519KeyPair::from_seed(seed.as_bytes()).unwrap());
    SelfSignatureManager::with_derivator(keys, DigestDerivator::Blake3_256)
}

/// Memory backend that outlives the node using it, so that a second node can
/// be started over the same data.
#[derive(Clone, Default)]
pub struct SharedMemory {
    inner: Arc<MemoryManager>,
}

impl DatabaseManager<MemoryCollection> for SharedMemory {
    fn create_collection(&self, identifier: &str) -> MemoryCollection {
        self.inner.create_collection(identifier)
    }
}
