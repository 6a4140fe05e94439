use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Product entity - a catalog document stored in MongoDB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB), 24 hex characters.
    /// Empty until the persistence layer assigns one on insert; skipped
    /// while empty so a replace never carries a conflicting _id.
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub id: String,
    /// Product name; unique within the catalog (enforced by the API layer)
    pub name: String,
    /// Category used for catalog browsing
    pub category: String,
    /// Short marketing summary
    pub summary: String,
    /// Optional long description
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price
    pub price: f64,
    /// Optional image file path
    #[serde(default)]
    pub image_file: Option<String>,
}

/// Create/update request body for a product.
///
/// Name, price, category and summary are required to be present
/// (non-empty / non-zero); description and image file are optional.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[validate(length(min = 1, message = "'Name' must not be empty."))]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, message = "'Price' must not be empty."))]
    pub price: f64,
    #[validate(length(min = 1, message = "'Category' must not be empty."))]
    pub category: String,
    #[validate(length(min = 1, message = "'Summary' must not be empty."))]
    pub summary: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_file: Option<String>,
}

impl From<ProductDto> for Product {
    /// Structural field-for-field copy from the request body.
    ///
    /// The id is left empty; assigning one is the persistence layer's job.
    fn from(dto: ProductDto) -> Self {
        Self {
            id: String::new(),
            name: dto.name,
            category: dto.category,
            summary: dto.summary,
            description: dto.description,
            price: dto.price,
            image_file: dto.image_file,
        }
    }
}
