use chrono::{Local, NaiveDateTime, TimeDelta};
use craftops_registry::{PlayerRegistry, PlayerStore};
use craftops_remote::Executor;
use std::time::Duration;

/// The daily registry refresh, firing at local midnight.
///
/// An explicitly constructed service with an explicit lifecycle: the caller
/// drives [`DailyRefresh::run`] and decides when to stop it (typically under
/// a `select!` against a shutdown signal). A failed refresh is logged and
/// the schedule carries on.
pub struct DailyRefresh<'a, E> {
    registry: PlayerRegistry<'a, E>,
    store: PlayerStore,
}

impl<'a, E: Executor> DailyRefresh<'a, E> {
    pub fn new(executor: &'a E, server_dir: impl Into<String>, store: PlayerStore) -> Self {
        Self {
            registry: PlayerRegistry::new(executor, server_dir),
            store,
        }
    }

    /// Sleep until each upcoming midnight and refresh. Never returns on its
    /// own; drop or cancel the future to shut the schedule down.
    pub async fn run(&self) {
        loop {
            let wait = until_next_midnight(Local::now().naive_local());
            tracing::info!(seconds = wait.as_secs(), "next registry refresh scheduled");
            tokio::time::sleep(wait).await;

            tracing::info!("running daily update");
            match self.registry.refresh(&self.store).await {
                Ok(count) => tracing::info!(players = count, "daily update complete"),
                Err(e) => tracing::error!("daily update failed:\n{}", e.render()),
            }
        }
    }
}

fn until_next_midnight(now: NaiveDateTime) -> Duration {
    let next = now
        .date()
        .checked_add_signed(TimeDelta::days(1))
        .unwrap_or(now.date())
        .and_hms_opt(0, 0, 0)
        .unwrap_or(now);
    (next - now).to_std().unwrap_or(Duration::from_secs(60))
}
