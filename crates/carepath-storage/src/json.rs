use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;
use crate::store::DocumentStore;

/// Load and deserialize a JSON document.
pub async fn load<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    key: &str,
) -> Result<T, StorageError> {
    let body = store.get(key).await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Serialize and save a JSON document.
pub async fn save<T: Serialize + Sync>(
    store: &dyn DocumentStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    store.put(key, body, Some("application/json")).await
}

/// Load every JSON document under `prefix`, in key order.
pub async fn load_all<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    prefix: &str,
) -> Result<Vec<T>, StorageError> {
    let keys = store.list(prefix).await?;
    let mut values = Vec::with_capacity(keys.len());
    for key in &keys {
        values.push(load(store, key).await?);
    }
    Ok(values)
}
