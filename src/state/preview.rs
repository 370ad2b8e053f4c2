use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

use crate::models::options::RenderFormat;

/// The rendered code currently occupying the display slot.
#[derive(Serialize, Debug, Clone)]
pub struct Preview {
    pub generation_id: u64,
    pub data: String,
    pub format: RenderFormat,
}

/// Single display slot with last-submitted-wins ordering.
///
/// Each generation takes a token before rendering starts; a finished
/// render only lands in the slot if no later generation has landed first,
/// so a slow early render can never overwrite a newer result.
#[derive(Debug, Clone, Default)]
pub struct PreviewSlot {
    seq: Arc<AtomicU64>,
    latest: Arc<RwLock<Option<Preview>>>,
}

impl PreviewSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next generation token. Tokens increase monotonically.
    pub fn begin_generation(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Publish a finished render. Returns false when a newer generation
    /// already holds the slot and this result was discarded.
    pub async fn publish(&self, preview: Preview) -> bool {
        let mut latest = self.latest.write().await;
        match latest.as_ref() {
            Some(current) if current.generation_id > preview.generation_id => false,
            _ => {
                *latest = Some(preview);
                true
            }
        }
    }

    pub async fn latest(&self) -> Option<Preview> {
        self.latest.read().await.clone()
    }
}
