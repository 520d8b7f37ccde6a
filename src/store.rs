use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::seatmap::SeatMap;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("selection session not found: {0}")]
    SessionNotFound(Uuid),
}

// Сессия выбора мест. Живёт только в памяти процесса: карта
// пересобирается заново при создании сессии и умирает вместе с ней.
pub struct SelectionSession {
    pub map: SeatMap,
    pub created_at: DateTime<Utc>,
    pub touched_at: DateTime<Utc>,
}

/// Хранилище активных сессий выбора с TTL по последнему обращению.
pub struct SelectionStore {
    sessions: RwLock<HashMap<Uuid, SelectionSession>>,
    ttl: Duration,
}

impl SelectionStore {
    pub fn new(ttl_minutes: i64) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    pub async fn create(&self, map: SeatMap) -> Uuid {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let session = SelectionSession {
            map,
            created_at: now,
            touched_at: now,
        };
        self.sessions.write().await.insert(id, session);
        id
    }

    /// Доступ к карте сессии; каждое обращение продлевает TTL.
    pub async fn with_session<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut SeatMap) -> R,
    ) -> Result<R, StoreError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or(StoreError::SessionNotFound(id))?;
        session.touched_at = Utc::now();
        Ok(f(&mut session.map))
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), StoreError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::SessionNotFound(id))
    }

    /// Удаляет сессии, к которым не обращались дольше TTL.
    pub async fn sweep_expired(&self) -> usize {
        let cutoff = Utc::now() - self.ttl;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.touched_at > cutoff);
        before - sessions.len()
    }

    pub async fn active_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
