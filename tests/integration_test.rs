use delivery_ledger::clients::LedgerService;
use delivery_ledger::config::{LedgerConfig, SeedSource};
use delivery_ledger::dashboard::{DeliveryDashboard, DialogError};
use delivery_ledger::ledger::LedgerError;
use delivery_ledger::ledger_actor::ClientError;
use delivery_ledger::lifecycle::DeliverySystem;
use delivery_ledger::model::{CancellationReason, StatusCategory};

/// Full system from the default config: sample board, dashboard, shutdown.
#[tokio::test]
async fn test_sample_board_dashboard_flow() {
    let system = DeliverySystem::from_config(&LedgerConfig::default()).expect("system starts");
    let mut dashboard = DeliveryDashboard::new(system.ledger_client.clone());

    let view = dashboard.refresh().await.unwrap();
    assert_eq!(view.orders.len(), 5);
    assert_eq!(view.undeliverable.len(), 2);
    assert_eq!(view.chart.total_orders, 7);
    assert_eq!(view.cancellable().count(), 3);

    // Delivered orders have no cancel action.
    let result = dashboard.request_cancel("ORD-002".into()).await;
    assert_eq!(result, Err(DialogError::NotCancellable("ORD-002".into())));

    // Confirming without a reason is refused and changes nothing.
    dashboard.request_cancel("ORD-003".into()).await.unwrap();
    assert_eq!(dashboard.confirm_cancel().await, Err(DialogError::NoReasonSelected));
    assert_eq!(system.ledger_client.status_summary().await.unwrap().cancelled, 0);

    dashboard.select_reason(CancellationReason::OtherIncident);
    let order = dashboard.confirm_cancel().await.unwrap();
    assert_eq!(order.cancellation_reason(), Some(CancellationReason::OtherIncident));
    assert!(!dashboard.dialog().is_open());

    let view = dashboard.refresh().await.unwrap();
    let counts: Vec<_> = view.chart.slices.iter().map(|s| s.value).collect();
    assert_eq!(counts, [2, 2, 1, 2]);
    assert_eq!(view.chart.total_orders, 7);
    assert_eq!(view.chart.slices[0].category, StatusCategory::Delivered);

    drop(dashboard);
    let ledger = system.shutdown().await.expect("clean shutdown");
    assert_eq!(ledger.status_summary().cancelled, 1);
}

/// Many tasks racing to cancel the same order: exactly one wins.
#[tokio::test]
async fn test_concurrent_cancellations_resolve_to_one_success() {
    let system = DeliverySystem::from_config(&LedgerConfig::default()).unwrap();

    let mut handles = vec![];
    for i in 0..10 {
        let client = system.ledger_client.clone();
        let reason = if i % 2 == 0 {
            CancellationReason::CustomerChoice
        } else {
            CancellationReason::OtherIncident
        };
        handles.push(tokio::spawn(async move {
            client.cancel("ORD-001".into(), reason).await
        }));
    }

    let mut successful = 0;
    let mut already_cancelled = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successful += 1,
            Err(ClientError::Ledger(LedgerError::AlreadyCancelled(_))) => already_cancelled += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
    assert_eq!(successful, 1, "Exactly one cancellation should succeed");
    assert_eq!(already_cancelled, 9);

    let summary = system.ledger_client.status_summary().await.unwrap();
    assert_eq!(summary.cancelled, 1);
    assert_eq!(summary.total(), 7);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_seed_and_closed_actor() {
    let config = LedgerConfig {
        seed: SeedSource::Empty {},
        ..LedgerConfig::default()
    };
    let system = DeliverySystem::from_config(&config).unwrap();
    let client = system.ledger_client.clone();

    let summary = client.status_summary().await.unwrap();
    assert_eq!(summary.total(), 0);

    drop(client);
    let ledger = system.shutdown().await.unwrap();
    assert!(ledger.is_empty());
}

#[tokio::test]
async fn test_invalid_config_does_not_start() {
    let config = LedgerConfig {
        channel_capacity: 0,
        ..LedgerConfig::default()
    };
    assert!(DeliverySystem::from_config(&config).is_err());
}
