//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Collection, Database,
};
use tracing::instrument;

use crate::error::CatalogResult;
use crate::models::Product;
use crate::repository::ProductRepository;

/// MongoDB implementation of the ProductRepository
///
/// Holds the single long-lived collection handle created at startup and
/// shared across all requests.
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository over the named collection
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("CatalogDb");
    /// let repo = MongoProductRepository::new(&db, "products");
    /// ```
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Product> {
        &self.collection
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self))]
    async fn get_products(&self) -> CatalogResult<Vec<Product>> {
        use futures_util::TryStreamExt;

        let cursor = self.collection.find(doc! {}).await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn get_product(&self, id: &str) -> CatalogResult<Option<Product>> {
        let product = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn get_products_by_category(&self, category: &str) -> CatalogResult<Vec<Product>> {
        use futures_util::TryStreamExt;

        let cursor = self.collection.find(doc! { "category": category }).await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn product_exists(&self, name: &str) -> CatalogResult<bool> {
        let count = self.collection.count_documents(doc! { "name": name }).await?;
        Ok(count > 0)
    }

    #[instrument(skip(self, product), fields(product_name = %product.name))]
    async fn create_product(&self, mut product: Product) -> CatalogResult<Product> {
        product.id = ObjectId::new().to_hex();

        self.collection.insert_one(&product).await?;

        tracing::info!(product_id = %product.id, "Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self, product), fields(product_name = %product.name))]
    async fn update_product(&self, product: Product) -> CatalogResult<bool> {
        // The replacement serializes without _id (still empty), so the
        // stored document keeps its original id.
        let result = self
            .collection
            .replace_one(doc! { "name": &product.name }, &product)
            .await?;

        Ok(result.modified_count > 0)
    }

    #[instrument(skip(self))]
    async fn delete_product(&self, id: &str) -> CatalogResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        if result.deleted_count > 0 {
            tracing::info!(product_id = %id, "Product deleted successfully");
        }

        Ok(result.deleted_count > 0)
    }
}
