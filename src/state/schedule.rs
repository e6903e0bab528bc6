/// Delayed continuation for pick cycles
use std::time::Duration;

use super::picker::PendingPick;

/// Default wait between trigger and reveal
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// Sleep for `delay`, then hand the ticket back for resolution.
/// Runs on the tokio timer via iced's executor.
pub async fn delayed(delay: Duration, pending: PendingPick) -> PendingPick {
    tokio::time::sleep(delay).await;
    pending
}
