use serde::Serialize;

use lectern_core::{UserStore, UserStoreError};

/// Counters surfaced on the admin dashboard. Course and lecture counts
/// live with the external content store; only users are in scope here.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformStats {
    pub total_users: u64,
}

pub struct PlatformStatsUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> PlatformStatsUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "PlatformStatsUseCase::execute", skip(self))]
    pub async fn execute(&self) -> Result<PlatformStats, UserStoreError> {
        Ok(PlatformStats {
            total_users: self.user_store.count_users().await?,
        })
    }
}
