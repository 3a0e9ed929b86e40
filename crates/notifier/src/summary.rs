//! Human-readable purchase report.

use model::{Asset, OrderOutcome};
use std::fmt::Write;

/// Render the report for one run's BTC and ETH orders.
pub fn format_summary(btc: &OrderOutcome, eth: &OrderOutcome) -> String {
    let mut message = String::from("以下を購入しました。");
    for (asset, outcome) in [(Asset::Btc, btc), (Asset::Eth, eth)] {
        message.push_str("\n\n");
        write_section(&mut message, asset, outcome);
    }
    message
}

fn write_section(out: &mut String, asset: Asset, outcome: &OrderOutcome) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "[{asset}]");
    let _ = match outcome {
        OrderOutcome::Filled {
            executed_amount,
            average_price,
        } => write!(
            out,
            "購入価格: {average_price}円\n購入数量: {executed_amount}{asset}"
        ),
        OrderOutcome::Accepted {
            acceptance_id: Some(id),
        } => write!(out, "注文受付済み (ID: {id})"),
        OrderOutcome::Accepted {
            acceptance_id: None,
        } => write!(out, "注文受付済み"),
        OrderOutcome::Skipped => write!(out, "予算が最小注文数量に満たないため見送りました"),
    };
}
