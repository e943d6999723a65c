use chrono::Utc;
use log::debug;
use tokio::sync::RwLock;

use crate::models::{SensorSnapshot, SensorUpdate};

/// Owner of the current sensor snapshot.
///
/// Updates arrive already validated, so a rejected request never reaches the lock.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: RwLock<SensorSnapshot>,
}

impl SnapshotStore {
    pub fn new(initial: SensorSnapshot) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    pub async fn current(&self) -> SensorSnapshot {
        self.current.read().await.clone()
    }

    /// Merges `update` into the current snapshot and returns the new value.
    pub async fn apply(&self, update: &SensorUpdate) -> SensorSnapshot {
        let mut current = self.current.write().await;
        let next = update.apply_to(&current, Utc::now());
        debug!("Snapshot replaced: {:?}", next);
        *current = next.clone();
        next
    }

    /// Replaces the snapshot wholesale, as the dashboard does after each poll.
    pub async fn replace(&self, snapshot: SensorSnapshot) {
        *self.current.write().await = snapshot;
    }
}
