//! Concurrent render load test.

use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};

mod common;

#[tokio::test]
async fn test_concurrent_renders() {
    // 1. Setup mock upstream
    let (upstream, calls) = common::start_mock_upstream(|| async {
        tokio::time::sleep(Duration::from_millis(5)).await;
        (200, r#"[{"id":1,"title":"one"},{"id":2,"title":"two"}]"#.to_string())
    })
    .await;

    // 2. Start render server
    let (addr, shutdown) = common::spawn_server(common::config_for(upstream)).await;

    // 3. Run load: home pages fetch, park pages do not
    let concurrency = 10;
    let requests_per_task = 10;
    let total_requests = concurrency * requests_per_task;

    let client = common::http_client();
    let start = Instant::now();

    let mut tasks = Vec::new();
    for task_id in 0..concurrency {
        let client = client.clone();
        let path = if task_id % 2 == 0 { "/" } else { "/park" };
        let url = format!("http://{}{}", addr, path);
        tasks.push(tokio::spawn(async move {
            let mut latencies = Vec::new();
            for _ in 0..requests_per_task {
                let req_start = Instant::now();
                if let Ok(res) = client.get(&url).send().await {
                    if res.status().is_success() && res.text().await.is_ok() {
                        latencies.push(req_start.elapsed());
                    }
                }
            }
            latencies
        }));
    }

    let mut all_latencies = Vec::new();
    for task in tasks {
        all_latencies.extend(task.await.unwrap());
    }

    let duration = start.elapsed();
    assert_eq!(all_latencies.len(), total_requests, "every render should succeed");

    // No caching: one upstream fetch per home render, none for park.
    assert_eq!(calls.load(Ordering::SeqCst), total_requests / 2);

    all_latencies.sort();
    let p50 = all_latencies[all_latencies.len() / 2];
    let p95 = all_latencies[(all_latencies.len() as f64 * 0.95) as usize];

    println!("\n--- Render Load Results ---");
    println!("Total Requests: {}", total_requests);
    println!("Concurrency:    {}", concurrency);
    println!("Total Duration: {:?}", duration);
    println!("Requests/sec:   {:.2}", total_requests as f64 / duration.as_secs_f64());
    println!("P50 Latency:    {:?}", p50);
    println!("P95 Latency:    {:?}", p95);
    println!("---------------------------\n");

    shutdown.trigger();
}
