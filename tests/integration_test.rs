//! Integration tests for the Custom Embedder nodes
//!
//! The embeddings API is replaced by a local mockito server; the nodes run
//! inside a `StandaloneContext` so requests go through reqwest.

use custom_embedder_nodes::{
    config::{EmbedderConfig, HostConfig},
    credentials::{custom_embedder_api, custom_embedder_api_with_base_url},
    embedding::Embeddings,
    error::{NodeError, OperationErrorKind},
    host::{
        test_credential, CredentialData, CredentialStore, ExecutableNode, NodeIdentity, NodeType,
        PairedItem, StandaloneContext, SupplyDataNode, WorkItem,
    },
    nodes::{CustomEmbedderNode, FriendGridNode},
};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use std::sync::Arc;

const PREDICT_PATH: &str = "/models/fashionclip/predict";

/// Helper to build a node pointed at the mock server
fn create_node(server: &ServerGuard) -> CustomEmbedderNode {
    CustomEmbedderNode::new(EmbedderConfig {
        api_url: format!("{}{}", server.url(), PREDICT_PATH),
        ..EmbedderConfig::default()
    })
}

/// Helper to build a context with the given API key and items
fn create_context(node: &dyn NodeType, api_key: &str, items: Vec<WorkItem>, continue_on_fail: bool) -> StandaloneContext {
    let store = CredentialStore::new()
        .with_credential(custom_embedder_api(), CredentialData::new().with_field("apiKey", api_key));
    let config = HostConfig {
        timeout_secs: 5,
        continue_on_fail,
    };

    StandaloneContext::new(NodeIdentity::for_description(node.description()), Arc::new(store), &config)
        .expect("Failed to create standalone context")
        .with_items(items)
}

#[tokio::test]
async fn test_generate_appends_embedding() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PREDICT_PATH)
        .match_header("x-api-key", "abc")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"text": "red dress"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"embedding": [0.1, 0.2, 0.3]}"#)
        .expect(1)
        .create_async()
        .await;

    let node = create_node(&server);
    let item = WorkItem::from_value(json!({"content": "red dress"}))
        .with_paired_item(PairedItem { item: 0, input: None });
    let ctx = create_context(&node, "abc", vec![item], false);

    let output = node.execute(&ctx).await.expect("generate failed");

    mock.assert_async().await;
    assert_eq!(
        serde_json::to_value(&output).unwrap(),
        json!([[{
            "json": {"content": "red dress", "embedding": [0.1, 0.2, 0.3]},
            "pairedItem": {"item": 0}
        }]])
    );
}

#[tokio::test]
async fn test_missing_api_key_makes_no_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PREDICT_PATH)
        .expect(0)
        .create_async()
        .await;

    let node = create_node(&server);
    let ctx = create_context(&node, "", vec![WorkItem::from_value(json!({"text": "red dress"}))], false);

    let err = node.execute(&ctx).await.unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.operation_kind(), Some(OperationErrorKind::MissingCredential));
}

#[tokio::test]
async fn test_http_error_is_transport_failure() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PREDICT_PATH)
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let node = create_node(&server);
    let ctx = create_context(&node, "abc", vec![WorkItem::from_value(json!({"text": "red dress"}))], false);

    let err = node.execute(&ctx).await.unwrap_err();

    mock.assert_async().await;
    match err {
        NodeError::Operation(err) => {
            assert_eq!(err.kind, OperationErrorKind::TransportFailure);
            assert!(err.message.contains("500"));
            assert_eq!(err.node.node_type, "customEmbedder");
        }
        other => panic!("expected operation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_body_is_invalid_shape() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", PREDICT_PATH)
        .with_status(200)
        .with_body("ok")
        .create_async()
        .await;

    let node = create_node(&server);
    let ctx = create_context(&node, "abc", vec![WorkItem::from_value(json!({"text": "red dress"}))], false);

    let err = node.execute(&ctx).await.unwrap_err();

    assert_eq!(err.operation_kind(), Some(OperationErrorKind::InvalidResponseShape));
}

#[tokio::test]
async fn test_continue_on_fail_without_items() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PREDICT_PATH)
        .expect(0)
        .create_async()
        .await;

    let node = create_node(&server);
    let ctx = create_context(&node, "abc", Vec::new(), true);

    let output = node.execute(&ctx).await.expect("continue-on-fail must not abort");

    mock.assert_async().await;
    let value = serde_json::to_value(&output).unwrap();
    assert_eq!(value[0].as_array().unwrap().len(), 1);
    assert_eq!(value[0][0]["json"], json!({}));
    assert_eq!(value[0][0]["error"]["kind"], "missing_input");
}

#[tokio::test]
async fn test_supplied_embeddings_keep_document_order() {
    let mut server = Server::new_async().await;
    let mut mocks = Vec::new();
    for (text, value) in [("red dress", 1.0), ("blue shirt", 2.0), ("green hat", 3.0)] {
        mocks.push(
            server
                .mock("POST", PREDICT_PATH)
                .match_body(Matcher::Json(json!({"text": text})))
                .with_status(200)
                .with_body(json!({"embedding": [value, value]}).to_string())
                .create_async()
                .await,
        );
    }

    let node = create_node(&server);
    let ctx = create_context(&node, "abc", Vec::new(), false);
    let supplied = node.supply_data(Arc::new(ctx), 0).await.unwrap();

    let texts = vec!["red dress".to_string(), "blue shirt".to_string(), "green hat".to_string()];
    let documents = supplied.response.embed_documents(&texts).await.unwrap();
    let query = supplied.response.embed_query("blue shirt").await.unwrap();

    assert_eq!(documents, vec![vec![1.0, 1.0], vec![2.0, 2.0], vec![3.0, 3.0]]);
    assert_eq!(query, documents[1]);
}

#[tokio::test]
async fn test_credential_check() {
    let mut server = Server::new_async().await;
    let ok = server
        .mock("POST", PREDICT_PATH)
        .match_header("x-api-key", "abc")
        .match_body(Matcher::Json(json!({"text": "test"})))
        .with_status(200)
        .with_body(r#"{"embedding": [0.0]}"#)
        .create_async()
        .await;
    let _rejected = server
        .mock("POST", PREDICT_PATH)
        .match_header("x-api-key", "wrong")
        .with_status(401)
        .create_async()
        .await;

    let credential = custom_embedder_api_with_base_url(server.url());
    let node = create_node(&server);

    let valid = create_context(&node, "abc", Vec::new(), false);
    test_credential(&valid, &credential).await.expect("valid key rejected");
    ok.assert_async().await;

    let invalid = create_context(&node, "wrong", Vec::new(), false);
    assert!(test_credential(&invalid, &credential).await.is_err());
}

#[tokio::test]
async fn test_friend_grid_passes_items_through() {
    let node = FriendGridNode::new();
    let items = vec![WorkItem::from_value(json!({"email": "name@email.com"}))];
    let ctx = create_context(&node, "abc", items.clone(), false);

    let output = node.execute(&ctx).await.unwrap();

    assert_eq!(output, vec![items]);
}
