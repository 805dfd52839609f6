use std::sync::Arc;

use sea_orm::DatabaseConnection;
use storefront_sdk::{NewProduct, Page, Product, ProductPatch, ProductQuery};
use time::OffsetDateTime;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::repos::ProductsRepository;
use crate::domain::service::ServiceConfig;

/// Catalog service.
pub struct ProductsService<R: ProductsRepository> {
    db: DatabaseConnection,
    repo: Arc<R>,
    config: ServiceConfig,
}

impl<R: ProductsRepository> ProductsService<R> {
    pub fn new(db: DatabaseConnection, repo: Arc<R>, config: ServiceConfig) -> Self {
        Self { db, repo, config }
    }
}

// Business logic methods
impl<R: ProductsRepository> ProductsService<R> {
    #[instrument(skip(self, new_product), fields(name = %new_product.name, category = %new_product.category))]
    pub async fn create_product(&self, new_product: NewProduct) -> Result<Product, DomainError> {
        info!("Creating new product");

        let now = OffsetDateTime::now_utc();
        let product = Product {
            id: Uuid::now_v7(),
            name: new_product.name.trim().to_owned(),
            description: new_product.description.map(|d| d.trim().to_owned()),
            price: new_product.price,
            stock: new_product.stock,
            category: new_product.category.trim().to_owned(),
            created_at: now,
            updated_at: now,
        };

        self.repo
            .create(&self.db, &product)
            .await
            .map_err(|e| e.or_bad_request("Failed to create product"))?;

        info!("Successfully created product with id={}", product.id);
        Ok(product)
    }

    #[instrument(skip(self, query), fields(page = query.page))]
    pub async fn list_products_page(
        &self,
        query: &ProductQuery,
    ) -> Result<Page<Product>, DomainError> {
        debug!("Listing products");

        let page_size = self.config.page_size(query.limit);
        let page = self
            .repo
            .list_page(&self.db, query, page_size)
            .await
            .map_err(|e| e.or_bad_request("Failed to fetch products"))?;

        debug!("Successfully listed {} products in page", page.items.len());
        Ok(page)
    }

    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: Uuid) -> Result<Product, DomainError> {
        debug!("Getting product by id");

        let found = self
            .repo
            .get(&self.db, id)
            .await
            .map_err(|e| e.or_bad_request("Invalid product ID"))?;

        found.ok_or_else(|| DomainError::not_found("Product", id))
    }

    #[instrument(skip(self, patch), fields(product_id = %id))]
    pub async fn update_product(
        &self,
        id: Uuid,
        patch: ProductPatch,
    ) -> Result<Product, DomainError> {
        info!("Updating product");

        let mut current = self.get_product(id).await?;

        if let Some(name) = patch.name {
            current.name = name.trim().to_owned();
        }
        if let Some(description) = patch.description {
            current.description = Some(description.trim().to_owned());
        }
        if let Some(price) = patch.price {
            current.price = price;
        }
        if let Some(stock) = patch.stock {
            current.stock = stock;
        }
        if let Some(category) = patch.category {
            current.category = category.trim().to_owned();
        }
        current.updated_at = OffsetDateTime::now_utc();

        self.repo
            .update(&self.db, &current)
            .await
            .map_err(|e| e.or_bad_request("Failed to update product"))?;

        info!("Successfully updated product");
        Ok(current)
    }

    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete_product(&self, id: Uuid) -> Result<(), DomainError> {
        info!("Deleting product");

        self.get_product(id).await?;

        let references = self
            .repo
            .count_order_references(&self.db, id)
            .await
            .map_err(|e| e.or_bad_request("Failed to delete product"))?;
        if references > 0 {
            debug!(references, "Product is referenced by orders");
            return Err(DomainError::product_in_orders());
        }

        let deleted = self
            .repo
            .delete(&self.db, id)
            .await
            .map_err(|e| e.or_bad_request("Failed to delete product"))?;
        if !deleted {
            return Err(DomainError::not_found("Product", id));
        }

        info!("Successfully deleted product");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<String>, DomainError> {
        debug!("Listing categories");

        self.repo
            .categories(&self.db)
            .await
            .map_err(|e| e.or_bad_request("Failed to fetch categories"))
    }
}
