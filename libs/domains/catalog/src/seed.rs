//! First-run sample data for the catalog collection.

use mongodb::bson::doc;
use mongodb::Database;
use tracing::info;

use crate::error::CatalogResult;
use crate::models::Product;

/// Insert the sample catalog if the collection is empty.
///
/// Runs once at startup, before the server accepts traffic. A non-empty
/// collection is left untouched.
pub async fn seed_if_empty(db: &Database, collection_name: &str) -> CatalogResult<()> {
    let collection = db.collection::<Product>(collection_name);

    let existing = collection.count_documents(doc! {}).await?;
    if existing > 0 {
        info!(
            products = existing,
            "Catalog collection already populated, skipping seed"
        );
        return Ok(());
    }

    let samples = sample_products();
    let count = samples.len();
    collection.insert_many(samples).await?;

    info!(products = count, "Seeded catalog collection with sample data");
    Ok(())
}

fn sample_products() -> Vec<Product> {
    fn product(id: &str, name: &str, price: f64, image_file: &str, description: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: "Smart Phone".to_string(),
            summary: "This phone is the company's biggest change to its flagship smartphone \
                      in years. It includes a borderless."
                .to_string(),
            description: Some(description.to_string()),
            price,
            image_file: Some(image_file.to_string()),
        }
    }

    vec![
        product(
            "602d2149e773f2a3990b47f5",
            "IPhone X",
            950.0,
            "product-1.png",
            "An edge-to-edge OLED display and a glass body on both sides.",
        ),
        product(
            "602d2149e773f2a3990b47f6",
            "Samsung 10",
            840.0,
            "product-2.png",
            "A punch-hole display and an ultrasonic in-screen fingerprint reader.",
        ),
        product(
            "602d2149e773f2a3990b47f7",
            "Huawei Plus",
            650.0,
            "product-3.png",
            "A triple rear camera setup with a periscope telephoto lens.",
        ),
        product(
            "602d2149e773f2a3990b47f8",
            "Xiaomi Mi 9",
            470.0,
            "product-4.png",
            "Flagship internals at a midrange price point.",
        ),
        product(
            "602d2149e773f2a3990b47f9",
            "HTC U11+ Plus",
            380.0,
            "product-5.png",
            "A squeezable frame and a liquid-surface glass back.",
        ),
        product(
            "602d2149e773f2a3990b47fa",
            "LG G7 ThinQ",
            240.0,
            "product-6.png",
            "A notched super-bright LCD tuned for outdoor visibility.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_products_have_unique_ids_and_names() {
        let samples = sample_products();
        let ids: HashSet<_> = samples.iter().map(|p| p.id.as_str()).collect();
        let names: HashSet<_> = samples.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(ids.len(), samples.len());
        assert_eq!(names.len(), samples.len());
    }

    #[test]
    fn test_sample_products_are_well_formed() {
        for product in sample_products() {
            assert_eq!(product.id.len(), 24);
            assert!(product.id.chars().all(|c| c.is_ascii_hexdigit()));
            assert!(!product.name.is_empty());
            assert!(!product.category.is_empty());
            assert!(!product.summary.is_empty());
            assert!(product.price > 0.0);
        }
    }
}
