//! Live views driven through the daemon client with a paused clock.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{sleep, sleep_until, Instant};

use x42_client::application::polling::PollPhase;
use x42_client::error::Error;
use x42_client::testkit::domain::{balance_json, node_status_json, staking_info_json, wallet};
use x42_client::testkit::transport::ScriptedTransport;
use x42_client::DaemonClient;

const INTERVAL: Duration = Duration::from_millis(3000);

fn client_with(transport: ScriptedTransport) -> (DaemonClient, Arc<ScriptedTransport>) {
    let transport = Arc::new(transport);
    let client = DaemonClient::new(transport.clone()).with_polling_interval(INTERVAL);
    (client, transport)
}

#[tokio::test(start_paused = true)]
async fn staking_watch_issues_one_request_per_tick() {
    let (client, transport) =
        client_with(ScriptedTransport::new().with_default(staking_info_json(1_000)));
    let start = Instant::now();

    let mut sub = client.watch_staking_info();
    sleep_until(start + Duration::from_millis(6500)).await;
    sub.cancel();
    sleep(Duration::from_secs(30)).await;

    // ticks at 0, 3000 and 6000
    assert_eq!(transport.request_count(), 3);
    assert!(transport
        .requests()
        .iter()
        .all(|r| r.path == "/staking/getstakinginfo"));
}

#[tokio::test(start_paused = true)]
async fn node_watch_delivers_fresh_values() {
    let (client, _) = client_with(
        ScriptedTransport::new()
            .with_reply(node_status_json(100))
            .with_reply(node_status_json(101))
            .with_default(node_status_json(102)),
    );

    let mut sub = client.watch_node_status();
    let heights: Vec<u64> = [
        sub.next().await.unwrap().unwrap(),
        sub.next().await.unwrap().unwrap(),
        sub.next().await.unwrap().unwrap(),
    ]
    .iter()
    .map(|s| s.consensus_height)
    .collect();

    assert_eq!(heights, vec![100, 101, 102]);
}

#[tokio::test(start_paused = true)]
async fn slow_balance_reply_is_discarded() {
    let (client, _) = client_with(
        ScriptedTransport::new()
            .with_delayed_reply(balance_json("account 0", 1, 0), Duration::from_millis(4500))
            .with_default(balance_json("account 0", 2, 0)),
    );
    let start = Instant::now();

    let mut sub = client.watch_wallet_balance(&wallet("main"));
    let first = sub.next().await.unwrap().unwrap();

    assert_eq!(start.elapsed(), Duration::from_millis(3000));
    assert_eq!(
        first.account("account 0").unwrap().amount_confirmed.value(),
        2
    );
    assert_eq!(sub.phase(), PollPhase::Delivered { tick: 1 });
}

#[tokio::test(start_paused = true)]
async fn watch_ends_at_first_failure() {
    let (client, transport) = client_with(
        ScriptedTransport::new()
            .with_reply(serde_json::json!({ "addresses": [] }))
            .with_status(500, "boom"),
    );

    let mut sub = client.watch_address_book();
    assert!(sub.next().await.unwrap().is_ok());
    assert!(matches!(
        sub.next().await,
        Some(Err(Error::Status { status: 500, .. }))
    ));
    assert!(sub.next().await.is_none());

    sleep(Duration::from_secs(30)).await;
    assert_eq!(transport.request_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_view_stops_requests() {
    let (client, transport) =
        client_with(ScriptedTransport::new().with_default(serde_json::json!({ "history": [] })));

    let sub = client.watch_wallet_history(&wallet("main"));
    sleep(Duration::from_millis(100)).await;
    drop(sub);
    sleep(Duration::from_secs(30)).await;

    assert_eq!(transport.request_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn general_info_watch_reuses_request() {
    let (client, transport) = client_with(ScriptedTransport::new().with_default(serde_json::json!({
        "network": "x42Main",
        "connectedNodes": 4
    })));

    let mut sub = client.watch_general_info("main");
    sub.next().await.unwrap().unwrap();
    sub.next().await.unwrap().unwrap();
    sub.cancel();

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], requests[1]);
    assert_eq!(requests[0].query_value("Name"), Some("main"));
}
