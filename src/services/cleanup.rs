use std::sync::Arc;
use tracing::{debug, info};

use crate::AppState;

pub struct CleanupService {
    state: Arc<AppState>,
}

impl CleanupService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Один проход чистки: выкидываем сессии выбора, к которым
    /// не обращались дольше TTL. Карта мест нигде не сохраняется,
    /// так что кроме удаления из памяти делать нечего.
    pub async fn run_session_sweep(&self) {
        let removed = self.state.store.sweep_expired().await;
        let active = self.state.store.active_count().await;
        if removed > 0 {
            info!(
                "🧹 Removed {} expired selection sessions, {} active",
                removed, active
            );
        } else {
            debug!("🧹 No expired selection sessions, {} active", active);
        }
    }
}
