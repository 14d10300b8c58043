//! Product service: validation, id assignment and timestamps on top of a store.

use chrono::Utc;

use storefront_core::{DomainResult, Entity};

use crate::product::{Product, ProductId, ProductInput};
use crate::store::{InMemoryProductStore, ProductStore};

/// Orchestrates catalog operations against a [`ProductStore`].
///
/// Each operation is one atomic step against the store; there are no
/// cross-operation transactions. Concurrent updates are last-writer-wins, and an
/// update never resurrects a product deleted concurrently.
#[derive(Debug)]
pub struct ProductService<S = InMemoryProductStore>
where
    S: ProductStore,
{
    store: S,
}

impl ProductService<InMemoryProductStore> {
    /// In-memory catalog seeded with the demonstration products.
    pub fn new() -> Self {
        Self::with_store(InMemoryProductStore::new())
    }
}

impl Default for ProductService<InMemoryProductStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ProductService<S>
where
    S: ProductStore,
{
    /// Wrap `store` and seed it with the demonstration products.
    pub fn with_store(store: S) -> Self {
        let service = Self { store };
        service.seed();
        service
    }

    pub fn list_all(&self) -> Vec<Product> {
        let mut products = self.store.values();
        sort_by_id(&mut products);
        products
    }

    pub fn list_by_category(&self, category: &str) -> Vec<Product> {
        let mut products: Vec<Product> = self
            .store
            .values()
            .into_iter()
            .filter(|p| p.in_category(category))
            .collect();
        sort_by_id(&mut products);
        tracing::debug!(
            category = %category,
            matched = products.len(),
            "filtered products by category"
        );
        products
    }

    pub fn get_by_id(&self, id: &ProductId) -> Option<Product> {
        let found = self.store.get(id);
        tracing::debug!(product_id = %id, found = found.is_some(), "product lookup");
        found
    }

    pub fn exists(&self, id: &ProductId) -> bool {
        self.store.get(id).is_some()
    }

    /// Validate, assign a fresh id, stamp both timestamps and store.
    ///
    /// Invalid input is rejected before an id is drawn, so it neither enters the
    /// store nor consumes a sequence value.
    pub fn create(&self, input: ProductInput) -> DomainResult<Product> {
        if let Err(e) = input.validate() {
            tracing::warn!(reason = %e.detail(), "rejected product create");
            return Err(e);
        }

        let id = self.store.next_id();
        let product = Product::create(id, input, Utc::now())?;
        self.store.put(product.id().clone(), product.clone());

        tracing::info!(product_id = %product.id(), name = %product.name(), "product created");
        Ok(product)
    }

    /// Replace the product at `id`.
    ///
    /// Returns `Ok(None)` when nothing is stored under `id` (nothing is created).
    /// On a validation failure the existing entry is left untouched.
    pub fn update(&self, id: &ProductId, input: ProductInput) -> DomainResult<Option<Product>> {
        let now = Utc::now();
        match self
            .store
            .replace_with(id, &mut |existing| existing.revise(&input, now))
        {
            Ok(Some(updated)) => {
                debug_assert!(updated.has_id(id));
                tracing::info!(product_id = %id, "product updated");
                Ok(Some(updated))
            }
            Ok(None) => {
                tracing::debug!(product_id = %id, "update target not found");
                Ok(None)
            }
            Err(e) => {
                tracing::warn!(product_id = %id, reason = %e.detail(), "rejected product update");
                Err(e)
            }
        }
    }

    pub fn delete(&self, id: &ProductId) -> bool {
        let removed = self.store.remove(id);
        if removed {
            tracing::info!(product_id = %id, "product deleted");
        }
        removed
    }

    pub fn count(&self) -> usize {
        self.store.len()
    }

    /// Remove every product and restart ids at "1". Test/demo convenience.
    pub fn clear(&self) {
        self.store.clear();
        tracing::info!("product catalog cleared");
    }

    fn seed(&self) {
        let samples = [
            ProductInput::new("Laptop", 999.99)
                .with_description("High-performance laptop")
                .with_quantity(10)
                .with_category("Electronics"),
            ProductInput::new("Mouse", 29.99)
                .with_description("Wireless mouse")
                .with_quantity(50)
                .with_category("Electronics"),
            ProductInput::new("Keyboard", 89.99)
                .with_description("Mechanical keyboard")
                .with_quantity(30)
                .with_category("Electronics"),
            ProductInput::new("Desk Chair", 299.99)
                .with_description("Ergonomic office chair")
                .with_quantity(15)
                .with_category("Furniture"),
            ProductInput::new("Monitor", 399.99)
                .with_description("27-inch 4K monitor")
                .with_quantity(20)
                .with_category("Electronics"),
        ];

        for input in samples {
            if let Err(e) = self.create(input) {
                tracing::error!(error = %e, "failed to seed sample product");
            }
        }
        tracing::info!(count = self.count(), "seeded sample products");
    }
}

fn sort_by_id(products: &mut [Product]) {
    products.sort_by(|a, b| a.id().sort_key().cmp(&b.id().sort_key()));
}
