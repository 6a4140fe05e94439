use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
        UnprocessableEntityResponse,
    },
    ApiResponse, ObjectIdPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogResult;
use crate::models::{Product, ProductDto};
use crate::repository::ProductRepository;
use crate::service::CatalogService;

/// OpenAPI documentation for the Catalog API
#[derive(OpenApi)]
#[openapi(
    paths(
        get_products,
        get_product,
        get_products_by_category,
        create_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, ProductDto, ApiResponse<Product>, ApiResponse<Vec<Product>>),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            UnprocessableEntityResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Catalog", description = "Product catalog endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the catalog router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: CatalogService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(get_products).post(create_product).put(update_product),
        )
        .route("/{id}", get(get_product).delete(delete_product))
        .route(
            "/GetProductByCategory/{category}",
            get(get_products_by_category),
        )
        .with_state(shared_service)
}

/// Get the list of product catalog
#[utoipa::path(
    get,
    path = "",
    tag = "Catalog",
    responses(
        (status = 200, description = "The full product list", body = ApiResponse<Vec<Product>>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_products<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
) -> CatalogResult<Json<ApiResponse<Vec<Product>>>> {
    let products = service.get_products().await?;
    Ok(Json(ApiResponse::ok(products)))
}

/// Get a product by its id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Catalog",
    params(
        ("id" = String, Path, description = "Product id (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Product data found", body = ApiResponse<Product>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> CatalogResult<Json<ApiResponse<Product>>> {
    let product = service.get_product(&id).await?;
    Ok(Json(ApiResponse::ok_with_message(
        product,
        "Product data found",
    )))
}

/// Get the list of products in a category
#[utoipa::path(
    get,
    path = "/GetProductByCategory/{category}",
    tag = "Catalog",
    params(
        ("category" = String, Path, description = "Category name (exact match)")
    ),
    responses(
        (status = 200, description = "Products in the category (possibly empty)", body = ApiResponse<Vec<Product>>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_products_by_category<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(category): Path<String>,
) -> CatalogResult<Json<ApiResponse<Vec<Product>>>> {
    let products = service.get_products_by_category(&category).await?;
    Ok(Json(ApiResponse::ok(products)))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Catalog",
    request_body = ProductDto,
    responses(
        (status = 201, description = "Product successfully created", body = ApiResponse<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    ValidatedJson(dto): ValidatedJson<ProductDto>,
) -> CatalogResult<impl IntoResponse> {
    let product = service.create_product(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            product,
            "Product successfully created",
        )),
    ))
}

/// Update the product matching the body's name
#[utoipa::path(
    put,
    path = "",
    tag = "Catalog",
    request_body = ProductDto,
    responses(
        (status = 200, description = "Product updated successfully", body = ApiResponse<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    ValidatedJson(dto): ValidatedJson<ProductDto>,
) -> CatalogResult<Json<ApiResponse<Product>>> {
    let name = service.update_product(dto).await?;
    Ok(Json(ApiResponse::message_only(format!(
        "Product {} updated successfully!",
        name
    ))))
}

/// Delete a product by its id
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Catalog",
    params(
        ("id" = String, Path, description = "Product id (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Product deleted successfully", body = ApiResponse<Product>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> CatalogResult<Json<ApiResponse<Product>>> {
    let product = service.delete_product(&id).await?;
    Ok(Json(ApiResponse::message_only(format!(
        "Product {} deleted successfully!",
        product.name
    ))))
}
