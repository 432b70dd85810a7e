//! Minimal end-to-end demo: register a schema, build an endpoint, call it.
//!
//! Run with: cargo run -p callprims --example greet

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;

use callprims::endpoint::{EndpointBuilder, EndpointConfig};
use callprims::guard::CallContext;
use callprims::schema::SchemaRegistry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // One registry per process, initialized exactly once at startup.
    let registry = Arc::new(SchemaRegistry::new());
    registry.initialize(HashMap::from([(
        "greet".to_string(),
        json!({
            "type": "object",
            "properties": { "name": { "type": "string" } },
            "required": ["name"]
        }),
    )]))?;

    let builder = EndpointBuilder::new(
        EndpointConfig::new(vec!["europe-west1".to_string()], vec![]),
        registry,
    );

    let endpoint = builder.build(
        |input, context| async move {
            let name = input["name"].as_str().unwrap_or("stranger");
            Ok(json!({
                "message": format!("Hello, {name}!"),
                "endpoint": context.endpoint_name,
            }))
        },
        "greet",
    )?;

    println!("regions: {:?}", endpoint.regions());

    let ok = endpoint.call(json!({"name": "Ada"}), CallContext::new()).await;
    println!("valid call:   {ok:?}");

    let rejected = endpoint.call(json!({"name": 123}), CallContext::new()).await;
    println!("invalid call: {rejected:?}");

    Ok(())
}
