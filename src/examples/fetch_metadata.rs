//! Metadata Lookup Example
//!
//! Fetches object and segment metadata from a running FereLight server,
//! both one at a time and in batches.
//!
//! Prerequisites: a FereLight server listening on http://localhost:8080
//! with a database named "default".
//!
//! Run with: cargo run --example fetch_metadata

use ferelight_rs::Client;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = Client::new("http://localhost:8080");
    let database = "default";

    println!("FereLight Metadata Example\n");

    // Look up a single object
    let object = client.get_object_info(database, "v_00001").await?;
    println!("📼 Object {}: {} ({})", object.object_id, object.name, object.path);

    // All segments of that object, in server order
    let segments = client.get_object_segments(database, &object.object_id).await?;
    println!("   {} segments:", segments.len());
    for segment in &segments {
        println!(
            "   #{:<4} {} [{:.2}s - {:.2}s]",
            segment.segment_number, segment.segment_id,
            segment.segment_start_abs, segment.segment_end_abs,
        );
    }

    // Batch lookups
    let ids: Vec<String> = segments.iter().take(3).map(|s| s.segment_id.clone()).collect();
    let batch = client.get_segment_infos(database, ids).await?;
    println!("\n📦 Batch lookup returned {} segments", batch.len());

    Ok(())
}
