use catalog_import::{CatalogImporter, ImportError, ImportOutcome, SkipReason};

#[tokio::test]
async fn test_builder_parse_only() {
    let outcome = CatalogImporter::builder()
        .text("Glass Cleaner 500ml\t39.90\nbroken line")
        .parse_only()
        .build()
        .await
        .unwrap();

    match outcome {
        ImportOutcome::Parsed(report) => {
            assert_eq!(report.products.len(), 1);
            assert_eq!(report.products[0].name, "Glass Cleaner");
            assert_eq!(report.skipped.len(), 1);
            assert_eq!(report.skipped[0].reason, SkipReason::NoDelimiter);
        }
        ImportOutcome::Imported { .. } => panic!("Expected parsed result"),
    }
}

#[tokio::test]
async fn test_builder_requires_text() {
    let result = CatalogImporter::builder().parse_only().build().await;
    assert!(matches!(result, Err(ImportError::Builder(_))));
}

#[tokio::test]
async fn test_builder_requires_category_for_submit() {
    let result = CatalogImporter::builder()
        .text("Glass Cleaner 500ml\t39.90")
        .base_url("http://127.0.0.1:9") // never reached
        .build()
        .await;
    assert!(matches!(result, Err(ImportError::Builder(_))));
}

#[tokio::test]
async fn test_builder_submits_against_backend() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/products")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "p1"}"#)
        .create_async()
        .await;
    server
        .mock("POST", "/variants")
        .with_status(201)
        .with_body("[]")
        .create_async()
        .await;
    server
        .mock("POST", "/product-categories")
        .with_status(201)
        .with_body("{}")
        .create_async()
        .await;

    let outcome = CatalogImporter::builder()
        .text("Glass Cleaner 500ml\t39.90\nbroken line")
        .category("detailing")
        .base_url(server.url())
        .build()
        .await
        .unwrap();

    match outcome {
        ImportOutcome::Imported { summary, skipped } => {
            assert_eq!(summary.products_created, 1);
            assert_eq!(summary.variants_created, 1);
            assert_eq!(skipped.len(), 1);
        }
        ImportOutcome::Parsed(_) => panic!("Expected imported result"),
    }
}
