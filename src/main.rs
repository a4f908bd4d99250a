//! Command-line entry point: boots the ledger from config, logs the board,
//! optionally cancels one order, and shuts down.

use clap::Parser;
use delivery_ledger::clients::LedgerClient;
use delivery_ledger::config::LedgerConfig;
use delivery_ledger::dashboard::{BoardView, DeliveryDashboard, DialogError};
use delivery_ledger::lifecycle::{setup_tracing, DeliverySystem};
use delivery_ledger::model::{CancellationReason, DeliveryOrder, OrderId};
use std::path::PathBuf;
use tracing::{error, info, Instrument};

#[derive(Debug, Parser)]
#[command(name = "delivery-ledger", about = "Delivery order board")]
struct Args {
    /// Path to the TOML configuration file
    #[arg(short, long, env = "DELIVERY_LEDGER_CONFIG")]
    config: Option<PathBuf>,

    /// Order to cancel
    #[arg(long)]
    cancel: Option<String>,

    /// Cancellation reason: customer-choice or other-incident
    #[arg(long, requires = "cancel")]
    reason: Option<CancellationReason>,
}

fn log_board(view: &BoardView) {
    for order in &view.orders {
        info!(
            order_id = %order.order_id,
            customer = %order.customer_name,
            phone = %order.phone_number,
            address = %order.address,
            items = ?order.items,
            delivered = order.is_delivered(),
            cancelled = order.is_cancelled(),
            reason = ?order.cancellation_reason(),
            "Order"
        );
    }
    for order in &view.undeliverable {
        info!(
            order_id = %order.order_id,
            name = %order.name,
            phone = %order.phone,
            "Undeliverable"
        );
    }
    for slice in &view.chart.slices {
        info!(
            status = slice.label,
            count = slice.value,
            share = %format!("{:.0}%", view.chart.share(slice.category) * 100.0),
            "Status"
        );
    }
    info!(total = view.chart.total_orders, "Total orders");
}

/// Runs the dialog flow; a missing reason is refused by the dialog itself.
async fn cancel_order(
    dashboard: &mut DeliveryDashboard<LedgerClient>,
    order_id: OrderId,
    reason: Option<CancellationReason>,
) -> Result<DeliveryOrder, DialogError> {
    dashboard.request_cancel(order_id).await?;
    if let Some(reason) = reason {
        dashboard.select_reason(reason);
    }
    dashboard.confirm_cancel().await
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    let args = Args::parse();

    let config = LedgerConfig::load(args.config.as_deref()).map_err(|e| e.to_string())?;
    let system = DeliverySystem::from_config(&config).map_err(|e| e.to_string())?;

    let mut dashboard = DeliveryDashboard::new(system.ledger_client.clone());
    let view = dashboard.refresh().await.map_err(|e| e.to_string())?;
    log_board(&view);

    let mut refused = None;
    if let Some(order_id) = args.cancel {
        let span = tracing::info_span!("cancellation", order_id = %order_id);
        let result = cancel_order(&mut dashboard, OrderId::from(order_id), args.reason)
            .instrument(span)
            .await;

        match result {
            Ok(order) => {
                info!(order_id = %order.order_id, "Order cancelled");
                let view = dashboard.refresh().await.map_err(|e| e.to_string())?;
                log_board(&view);
            }
            Err(e) => {
                error!(error = %e, "Cancellation refused");
                refused = Some(e);
            }
        }
    }

    drop(dashboard);
    system.shutdown().await?;

    if let Some(e) = refused {
        return Err(format!("cancellation refused: {e}"));
    }

    info!("Application completed successfully");
    Ok(())
}
