use log::{debug, warn};
use std::time::Instant;

use crate::client::ApiClient;
use crate::state::SnapshotStore;

/// Fetches the latest reading into `store`.
///
/// Returns whether the server answered; on failure the previous snapshot stays in place.
pub async fn poll(client: &ApiClient, store: &SnapshotStore) -> bool {
    let start = Instant::now();
    let result = match client.fetch_snapshot().await {
        Ok(snapshot) => {
            debug!("Fetched sensor data: {:?}", snapshot);
            store.replace(snapshot).await;
            true
        }
        Err(e) => {
            warn!("Error fetching sensor data: {}", e);
            false
        }
    };
    debug!("poll took: {} ms", start.elapsed().as_millis());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SensorSnapshot;
    use std::time::Duration;

    #[tokio::test]
    async fn test_failed_poll_keeps_snapshot() {
        let client = ApiClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let previous = SensorSnapshot {
            soil_moisture: 12.0,
            ..SensorSnapshot::default()
        };
        let store = SnapshotStore::new(previous.clone());

        assert!(!poll(&client, &store).await);
        assert_eq!(store.current().await, previous);
    }
}
