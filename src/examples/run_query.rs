//! Similarity Query Example
//!
//! Runs a text similarity query against a FereLight server, then uses the
//! top hit as an anchor for a query-by-example, and finally resolves a
//! timestamp back to a segment.
//!
//! Prerequisites: a FereLight server listening on http://localhost:8080
//! with a database named "default".
//!
//! Run with: cargo run --example run_query

use ferelight_rs::{Client, QueryRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = Client::new("http://localhost:8080");
    let database = "default";

    println!("FereLight Query Example\n");

    // Combined similarity + OCR query
    let request = QueryRequest {
        similarity_text: Some("a red car driving through snow".to_string()),
        ocr_text: Some("STOP".to_string()),
        merge_type: Some("average".to_string()),
        limit: Some(10),
        ..QueryRequest::new(database)
    };
    let hits = client.query(&request).await?;
    println!("🔍 Query returned {} hits:", hits.len());
    for (i, hit) in hits.iter().enumerate() {
        println!("   {}. {} (score: {:.4})", i + 1, hit.segment_id, hit.score);
    }

    // Use the best hit as a query-by-example anchor
    if let Some(best) = hits.first() {
        let similar = client
            .query_by_example(database, &best.segment_id, Some(5))
            .await?;
        println!("\n🎯 Segments similar to {}:", best.segment_id);
        for hit in &similar {
            println!("   {} (score: {:.4})", hit.segment_id, hit.score);

            // Which object does this segment belong to, and what plays at 12.5s?
            let info = client.get_segment_info(database, &hit.segment_id).await?;
            let at_time = client
                .segment_by_time(database, &info.object_id, 12.5)
                .await?;
            println!("      object {} plays segment {} at 12.5s", info.object_id, at_time);
        }
    }

    Ok(())
}
