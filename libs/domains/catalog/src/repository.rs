use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::models::Product;

/// Repository trait for Product persistence
///
/// Defines the data access contract for the catalog. Every operation is a
/// single round-trip to the backing document store; implementations add no
/// caching or consistency logic of their own. Lookup misses are `Ok(None)` /
/// `Ok(false)`, never errors; store I/O failures propagate unmodified.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List the full catalog (unfiltered scan)
    async fn get_products(&self) -> CatalogResult<Vec<Product>>;

    /// Look up a product by id (exact match)
    async fn get_product(&self, id: &str) -> CatalogResult<Option<Product>>;

    /// List products whose category matches exactly (case sensitive)
    async fn get_products_by_category(&self, category: &str) -> CatalogResult<Vec<Product>>;

    /// Whether a product with this exact name exists
    async fn product_exists(&self, name: &str) -> CatalogResult<bool>;

    /// Insert a product, returning it with its id populated.
    /// No duplicate check happens here; that is the caller's responsibility.
    async fn create_product(&self, product: Product) -> CatalogResult<Product>;

    /// Replace the document whose name equals the input's name with the
    /// full input record. Returns whether a document was modified.
    async fn update_product(&self, product: Product) -> CatalogResult<bool>;

    /// Remove the document matching id. Returns whether one was removed.
    async fn delete_product(&self, id: &str) -> CatalogResult<bool>;
}
