//! Catalog service - business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Product, ProductDto};
use crate::repository::ProductRepository;

/// Catalog service providing the business rules around product CRUD.
///
/// The service owns the existence checks and the status/error policy;
/// request validation happens before it (in the JSON extractor) and raw
/// store access happens below it (in the repository).
pub struct CatalogService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> CatalogService<R> {
    /// Create a new CatalogService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List the full catalog.
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> CatalogResult<Vec<Product>> {
        self.repository.get_products().await
    }

    /// Fetch a single product by id.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> CatalogResult<Product> {
        self.repository
            .get_product(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// List products in a category; an empty result is not an error.
    #[instrument(skip(self))]
    pub async fn get_products_by_category(&self, category: &str) -> CatalogResult<Vec<Product>> {
        self.repository.get_products_by_category(category).await
    }

    /// Create a product from a request body.
    ///
    /// The duplicate-name check and the insert are two separate store
    /// round-trips; concurrent creates with the same name can both pass
    /// the check, since the store enforces no uniqueness itself.
    #[instrument(skip(self, dto), fields(product_name = %dto.name))]
    pub async fn create_product(&self, dto: ProductDto) -> CatalogResult<Product> {
        let product = Product::from(dto);

        if self.repository.product_exists(&product.name).await? {
            return Err(CatalogError::AlreadyExists(product.name));
        }

        self.repository.create_product(product).await
    }

    /// Replace the stored product matching the body's name.
    ///
    /// Matching is by the incoming name, so an update cannot rename a
    /// product; only the other fields change. Returns the updated name.
    #[instrument(skip(self, dto), fields(product_name = %dto.name))]
    pub async fn update_product(&self, dto: ProductDto) -> CatalogResult<String> {
        let product = Product::from(dto);

        if !self.repository.product_exists(&product.name).await? {
            return Err(CatalogError::UnknownName(product.name));
        }

        let name = product.name.clone();
        if !self.repository.update_product(product).await? {
            return Err(CatalogError::UpdateFailed(name));
        }

        Ok(name)
    }

    /// Delete a product by id, returning the removed product.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> CatalogResult<Product> {
        let product = self
            .repository
            .get_product(id)
            .await?
            .ok_or_else(|| CatalogError::DeleteTargetNotFound(id.to_string()))?;

        if !self.repository.delete_product(id).await? {
            return Err(CatalogError::DeleteFailed(product.name));
        }

        Ok(product)
    }
}

impl<R: ProductRepository> Clone for CatalogService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;

    fn dto(name: &str) -> ProductDto {
        ProductDto {
            name: name.to_string(),
            price: 100.0,
            category: "Shoes".to_string(),
            summary: "Running".to_string(),
            description: None,
            image_file: None,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_name_without_inserting() {
        let mut repo = MockProductRepository::new();
        repo.expect_product_exists()
            .with(eq("Nike Shoe"))
            .times(1)
            .returning(|_| Ok(true));
        // No create_product expectation: the mock panics if it is called.

        let service = CatalogService::new(repo);
        let result = service.create_product(dto("Nike Shoe")).await;

        assert!(matches!(result, Err(CatalogError::AlreadyExists(name)) if name == "Nike Shoe"));
    }

    #[tokio::test]
    async fn test_create_inserts_when_name_is_free() {
        let mut repo = MockProductRepository::new();
        repo.expect_product_exists().returning(|_| Ok(false));
        repo.expect_create_product().times(1).returning(|mut p| {
            p.id = "602d2149e773f2a3990b47f5".to_string();
            Ok(p)
        });

        let service = CatalogService::new(repo);
        let created = service.create_product(dto("Nike Shoe")).await.unwrap();

        assert_eq!(created.id, "602d2149e773f2a3990b47f5");
        assert_eq!(created.name, "Nike Shoe");
    }

    // The existence check and the insert are separate round-trips. A writer
    // that races between them still succeeds; the service trusts the check
    // it made. This pins the documented check-then-act limitation.
    #[tokio::test]
    async fn test_duplicate_check_is_check_then_act() {
        let mut repo = MockProductRepository::new();
        // The check ran before a concurrent insert landed...
        repo.expect_product_exists().returning(|_| Ok(false));
        // ...so the insert goes through even though the name now exists.
        repo.expect_create_product().times(1).returning(Ok);

        let service = CatalogService::new(repo);
        assert!(service.create_product(dto("Nike Shoe")).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_unknown_name_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_product_exists().returning(|_| Ok(false));

        let service = CatalogService::new(repo);
        let result = service.update_product(dto("Ghost")).await;

        assert!(matches!(result, Err(CatalogError::UnknownName(name)) if name == "Ghost"));
    }

    #[tokio::test]
    async fn test_update_store_failure_maps_to_update_failed() {
        let mut repo = MockProductRepository::new();
        repo.expect_product_exists().returning(|_| Ok(true));
        repo.expect_update_product().returning(|_| Ok(false));

        let service = CatalogService::new(repo);
        let result = service.update_product(dto("Nike Shoe")).await;

        assert!(matches!(result, Err(CatalogError::UpdateFailed(name)) if name == "Nike Shoe"));
    }

    #[tokio::test]
    async fn test_update_success_returns_name() {
        let mut repo = MockProductRepository::new();
        repo.expect_product_exists().returning(|_| Ok(true));
        repo.expect_update_product().times(1).returning(|_| Ok(true));

        let service = CatalogService::new(repo);
        let name = service.update_product(dto("Nike Shoe")).await.unwrap();

        assert_eq!(name, "Nike Shoe");
    }

    #[tokio::test]
    async fn test_delete_missing_id_reports_requested_id() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_product().returning(|_| Ok(None));
        // No delete_product expectation: nothing is deleted for a miss.

        let service = CatalogService::new(repo);
        let result = service.delete_product("602d2149e773f2a3990b47f5").await;

        assert!(matches!(
            result,
            Err(CatalogError::DeleteTargetNotFound(id)) if id == "602d2149e773f2a3990b47f5"
        ));
    }

    #[tokio::test]
    async fn test_delete_store_failure_maps_to_delete_failed() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_product().returning(|id| {
            let mut product = Product::from(dto("Nike Shoe"));
            product.id = id.to_string();
            Ok(Some(product))
        });
        repo.expect_delete_product().returning(|_| Ok(false));

        let service = CatalogService::new(repo);
        let result = service.delete_product("602d2149e773f2a3990b47f5").await;

        assert!(matches!(result, Err(CatalogError::DeleteFailed(name)) if name == "Nike Shoe"));
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_product().returning(|_| Ok(None));

        let service = CatalogService::new(repo);
        let result = service.get_product("602d2149e773f2a3990b47f5").await;

        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }
}
