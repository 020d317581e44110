//! Check command - connection test against the configured key store

use tracing::{error, info};

use crate::config::StorageSettings;
use crate::infrastructure::storage::create_store;

/// Connect to the store and run a count query
pub async fn run() -> anyhow::Result<()> {
    let config = super::bootstrap()?;

    info!(
        backend = ?config.storage.backend,
        url = %redacted_url(&config.storage),
        "Testing key store connection"
    );

    let store = match create_store(&config.storage).await {
        Ok(store) => store,
        Err(e) => {
            error!("Connection failed: {}", e);
            return Err(e.into());
        }
    };

    match store.count().await {
        Ok(count) => {
            info!("Connection successful! {} API keys stored", count);
            Ok(())
        }
        Err(e) => {
            error!("Connection failed: {}", e);
            Err(e.into())
        }
    }
}

/// Hide credentials in a connection URL for logging
fn redacted_url(settings: &StorageSettings) -> String {
    let Some(url) = settings.url.as_deref() else {
        return "not set".to_string();
    };

    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***{}", &url[..scheme_end], &url[at..])
        }
        _ => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(url: Option<&str>) -> StorageSettings {
        StorageSettings {
            url: url.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_redacts_credentials() {
        assert_eq!(
            redacted_url(&settings(Some("postgres://user:secret@db:5432/keys"))),
            "postgres://***@db:5432/keys"
        );
    }

    #[test]
    fn test_url_without_credentials_unchanged() {
        assert_eq!(
            redacted_url(&settings(Some("postgres://localhost/keys"))),
            "postgres://localhost/keys"
        );
    }

    #[test]
    fn test_missing_url() {
        assert_eq!(redacted_url(&settings(None)), "not set");
    }
}
