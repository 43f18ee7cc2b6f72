pub mod teams;

use thiserror::Error;

pub type MySqlPool = sqlx::MySqlPool;

#[derive(Debug, Error)]
pub enum ConnectDatabaseError {
    #[error("ConnectDatabase: {source}")]
    ConnectDatabase {
        #[from]
        source: sqlx::Error,
    },
}

pub async fn connect(url: &str) -> Result<MySqlPool, ConnectDatabaseError> {
    MySqlPool::connect(url)
        .await
        .map_err(|source| ConnectDatabaseError::ConnectDatabase { source })
}
