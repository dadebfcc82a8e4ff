use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::id::RecordId;

/// A record as read from a collection: the store-assigned id plus the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Doc<T> {
    pub id: RecordId,
    pub body: T,
}

/// One named collection of JSON documents.
///
/// Payloads are serialized on write and deserialized on read, so a collection
/// behaves like a remote document store: every operation is fallible and a
/// suspension point. Cloning a collection clones the handle, not the data.
pub struct Collection<T> {
    name: &'static str,
    docs: Arc<RwLock<BTreeMap<RecordId, Value>>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            docs: Arc::clone(&self.docs),
            _marker: PhantomData,
        }
    }
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            docs: Arc::new(RwLock::new(BTreeMap::new())),
            _marker: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn encode(&self, body: &T) -> Result<Value, StoreError> {
        serde_json::to_value(body).map_err(|source| StoreError::Encode {
            collection: self.name,
            source,
        })
    }

    fn decode(&self, id: RecordId, value: &Value) -> Result<Doc<T>, StoreError> {
        let body = serde_json::from_value(value.clone()).map_err(|source| StoreError::Decode {
            collection: self.name,
            id,
            source,
        })?;
        Ok(Doc { id, body })
    }

    /// Persist a new record and return its store-assigned id.
    pub async fn insert(&self, body: &T) -> Result<RecordId, StoreError> {
        let value = self.encode(body)?;
        let id = RecordId::generate();
        self.docs.write().await.insert(id, value);
        tracing::debug!(collection = self.name, id = %id, "record inserted");
        Ok(id)
    }

    pub async fn find_by_id(&self, id: RecordId) -> Result<Option<Doc<T>>, StoreError> {
        let docs = self.docs.read().await;
        docs.get(&id).map(|value| self.decode(id, value)).transpose()
    }

    /// Replace the payload of an existing record, keeping its id.
    pub async fn replace(&self, id: RecordId, body: &T) -> Result<(), StoreError> {
        let value = self.encode(body)?;
        let mut docs = self.docs.write().await;
        match docs.get_mut(&id) {
            Some(slot) => {
                *slot = value;
                tracing::debug!(collection = self.name, id = %id, "record replaced");
                Ok(())
            }
            None => Err(StoreError::NotFound {
                collection: self.name,
                id,
            }),
        }
    }

    /// Remove a record. Returns whether it existed.
    pub async fn remove(&self, id: RecordId) -> Result<bool, StoreError> {
        let removed = self.docs.write().await.remove(&id).is_some();
        if removed {
            tracing::debug!(collection = self.name, id = %id, "record removed");
        }
        Ok(removed)
    }

    /// All records, in id order (insertion order for time-ordered ids).
    pub async fn all(&self) -> Result<Vec<Doc<T>>, StoreError> {
        let docs = self.docs.read().await;
        docs.iter()
            .map(|(&id, value)| self.decode(id, value))
            .collect()
    }

    /// Records whose decoded form satisfies the predicate.
    pub async fn find(
        &self,
        pred: impl Fn(&Doc<T>) -> bool,
    ) -> Result<Vec<Doc<T>>, StoreError> {
        let all = self.all().await?;
        Ok(all.into_iter().filter(|doc| pred(doc)).collect())
    }

    /// First record satisfying the predicate, in id order.
    pub async fn find_one(
        &self,
        pred: impl Fn(&Doc<T>) -> bool,
    ) -> Result<Option<Doc<T>>, StoreError> {
        let all = self.all().await?;
        Ok(all.into_iter().find(|doc| pred(doc)))
    }

    pub async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.docs.read().await.len())
    }

    pub async fn count_where(
        &self,
        pred: impl Fn(&Doc<T>) -> bool,
    ) -> Result<usize, StoreError> {
        Ok(self.find(pred).await?.len())
    }
}
