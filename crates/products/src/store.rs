use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use storefront_core::{DomainResult, Sequence};

use crate::product::{Product, ProductId};

/// Keyed product storage that owns identifier assignment.
///
/// Every method is a single atomic step against the store: a reader observes
/// the state before or after a write, never in between.
pub trait ProductStore: Send + Sync {
    /// Unconditional upsert.
    fn put(&self, id: ProductId, product: Product);
    fn get(&self, id: &ProductId) -> Option<Product>;
    /// Returns `true` if an entry existed and was removed.
    fn remove(&self, id: &ProductId) -> bool;
    /// Snapshot of all entries, in no particular order.
    fn values(&self) -> Vec<Product>;
    fn len(&self) -> usize;
    /// Issue a fresh identifier. No two calls return the same value until `clear`.
    fn next_id(&self) -> ProductId;
    /// Drop every entry and rewind the identifier sequence to 1.
    fn clear(&self);
    /// Replace the entry at `id` with `f(existing)` in one step.
    ///
    /// `Ok(None)` if nothing is stored under `id` (nothing is inserted). An error
    /// from `f` is returned as-is and leaves the entry untouched.
    fn replace_with(
        &self,
        id: &ProductId,
        f: &mut dyn FnMut(&Product) -> DomainResult<Product>,
    ) -> DomainResult<Option<Product>>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn put(&self, id: ProductId, product: Product) {
        (**self).put(id, product)
    }

    fn get(&self, id: &ProductId) -> Option<Product> {
        (**self).get(id)
    }

    fn remove(&self, id: &ProductId) -> bool {
        (**self).remove(id)
    }

    fn values(&self) -> Vec<Product> {
        (**self).values()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn next_id(&self) -> ProductId {
        (**self).next_id()
    }

    fn clear(&self) {
        (**self).clear()
    }

    fn replace_with(
        &self,
        id: &ProductId,
        f: &mut dyn FnMut(&Product) -> DomainResult<Product>,
    ) -> DomainResult<Option<Product>> {
        (**self).replace_with(id, f)
    }
}

#[derive(Debug, Default)]
struct Inner {
    products: HashMap<ProductId, Product>,
    sequence: Sequence,
}

/// In-memory store: map and id sequence guarded by one lock.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<Inner>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave `Inner` half-written (each
    // critical section performs at most one map or counter write, after any
    // caller-supplied closure has run), so poisoning is recovered rather than
    // propagated.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ProductStore for InMemoryProductStore {
    fn put(&self, id: ProductId, product: Product) {
        self.write().products.insert(id, product);
    }

    fn get(&self, id: &ProductId) -> Option<Product> {
        self.read().products.get(id).cloned()
    }

    fn remove(&self, id: &ProductId) -> bool {
        self.write().products.remove(id).is_some()
    }

    fn values(&self) -> Vec<Product> {
        self.read().products.values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.read().products.len()
    }

    fn next_id(&self) -> ProductId {
        ProductId::from(self.write().sequence.advance())
    }

    fn clear(&self) {
        let mut inner = self.write();
        inner.products.clear();
        inner.sequence.reset();
    }

    fn replace_with(
        &self,
        id: &ProductId,
        f: &mut dyn FnMut(&Product) -> DomainResult<Product>,
    ) -> DomainResult<Option<Product>> {
        let mut inner = self.write();
        let Some(existing) = inner.products.get(id) else {
            return Ok(None);
        };
        let replacement = f(existing)?;
        inner.products.insert(id.clone(), replacement.clone());
        Ok(Some(replacement))
    }
}
