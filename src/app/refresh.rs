use std::time::Duration;

use tokio::{
    sync::{mpsc::UnboundedSender, watch},
    task::JoinHandle,
    time::{Instant, MissedTickBehavior},
};

use super::event::AppEvent;

/// Emits `RefreshDue` for the selected symbol every `period`; a symbol change restarts the period.
pub fn spawn_refresh(
    period: Duration,
    mut symbol: watch::Receiver<String>,
    events: UnboundedSender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let current = symbol.borrow_and_update().clone();
                    if current.is_empty() {
                        continue;
                    }
                    tracing::debug!(symbol = current.as_str(), "snapshot refresh due");
                    if events.send(AppEvent::RefreshDue(current)).is_err() {
                        break;
                    }
                }
                changed = symbol.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    ticker.reset();
                }
            }
        }
    })
}
