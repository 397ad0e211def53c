use catalog_import::{
    parse_product_data, submit_products, NewProduct, ProductStore, RestStore, StoreConfig,
};

const PASTE: &str = "Wax Paste 250ml\t50.00\n\
                     Wax Paste 500ml\t90.00\n\
                     Glass Cleaner 500ml\t39.90";

#[tokio::test]
async fn test_full_import_happy_path() {
    let mut server = mockito::Server::new_async().await;

    let products_mock = server
        .mock("POST", "/products")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "p1"}"#)
        .expect(2)
        .create_async()
        .await;
    let variants_mock = server
        .mock("POST", "/variants")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .expect(2)
        .create_async()
        .await;
    let category_mock = server
        .mock("POST", "/product-categories")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .expect(2)
        .create_async()
        .await;

    let store = RestStore::with_base_url(server.url()).unwrap();
    let products = parse_product_data(PASTE);
    assert_eq!(products.len(), 2);

    let summary = submit_products(&store, &products, "detailing", "draft").await;

    assert_eq!(summary.products_created, 2);
    assert_eq!(summary.variants_created, 3);
    assert!(summary.failed_products.is_empty());
    assert!(summary.partial_products.is_empty());

    products_mock.assert_async().await;
    variants_mock.assert_async().await;
    category_mock.assert_async().await;
}

#[tokio::test]
async fn test_product_failure_is_skipped_not_fatal() {
    let mut server = mockito::Server::new_async().await;

    // Every create-product call fails; the loop must still visit each
    // product and report the names.
    let products_mock = server
        .mock("POST", "/products")
        .with_status(500)
        .with_body("boom")
        .expect(2)
        .create_async()
        .await;
    let variants_mock = server
        .mock("POST", "/variants")
        .expect(0)
        .create_async()
        .await;

    let store = RestStore::with_base_url(server.url()).unwrap();
    let products = parse_product_data(PASTE);

    let summary = submit_products(&store, &products, "detailing", "draft").await;

    assert_eq!(summary.products_created, 0);
    assert_eq!(summary.variants_created, 0);
    assert_eq!(
        summary.failed_products,
        vec!["Wax Paste".to_string(), "Glass Cleaner".to_string()]
    );

    products_mock.assert_async().await;
    variants_mock.assert_async().await;
}

#[tokio::test]
async fn test_variant_failure_leaves_partial_product() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/products")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 7}"#)
        .expect(1)
        .create_async()
        .await;
    server
        .mock("POST", "/variants")
        .with_status(422)
        .with_body(r#"{"message": "duplicate sku"}"#)
        .expect(1)
        .create_async()
        .await;
    server
        .mock("POST", "/product-categories")
        .with_status(201)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let store = RestStore::with_base_url(server.url()).unwrap();
    let products = parse_product_data("Glass Cleaner 500ml\t39.90");

    let summary = submit_products(&store, &products, "detailing", "draft").await;

    // Product landed, variants did not: partial write, accepted and reported.
    assert_eq!(summary.products_created, 1);
    assert_eq!(summary.variants_created, 0);
    assert_eq!(summary.partial_products, vec!["Glass Cleaner".to_string()]);
    assert!(summary.failed_products.is_empty());
}

#[tokio::test]
async fn test_create_product_sends_code_and_status() {
    let mut server = mockito::Server::new_async().await;

    let products_mock = server
        .mock("POST", "/products")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "name": "Glass Cleaner",
            "code": "GLASS-CLEANER",
            "status": "draft",
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "p9"}"#)
        .create_async()
        .await;

    let config = StoreConfig::new(server.url(), None);
    let store = RestStore::new(&config).unwrap();

    let product = NewProduct {
        name: "Glass Cleaner".to_string(),
        code: "GLASS-CLEANER".to_string(),
        status: "draft".to_string(),
    };
    let id = store.create_product(&product).await.unwrap();
    assert_eq!(id, "p9");

    products_mock.assert_async().await;
}

#[tokio::test]
async fn test_backend_error_carries_status_and_body() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("POST", "/products")
        .with_status(403)
        .with_body("forbidden")
        .create_async()
        .await;

    let store = RestStore::with_base_url(server.url()).unwrap();
    let product = NewProduct {
        name: "Glass Cleaner".to_string(),
        code: "GLASS-CLEANER".to_string(),
        status: "draft".to_string(),
    };

    let err = store.create_product(&product).await.unwrap_err();
    let message = err.to_string();
    assert!(message.contains("403"), "unexpected error: {message}");
    assert!(message.contains("forbidden"), "unexpected error: {message}");
}
