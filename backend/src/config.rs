use std::net::SocketAddr;
use std::path::PathBuf;

use shared::constants::SPIN_ENTRIES_COLLECTION;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_ALLOWED_ORIGINS: &str = "http://127.0.0.1:8080,http://127.0.0.1:3000";
const DEFAULT_MAX_DOCUMENT_BYTES: usize = 16 * 1024;
const DEFAULT_FRONTEND_DIST: &str = "../frontend/dist";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub allowed_origins: Vec<String>,
    pub collections: Vec<String>,
    pub max_document_bytes: usize,
    pub frontend_dist: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or("DATABASE_URL must be set")?;

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| format!("Invalid BIND_ADDR: {}", e))?;

        let allowed_origins =
            parse_list(&lookup("ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string()));

        let mut collections = parse_list(&lookup("STORE_COLLECTIONS").unwrap_or_default());
        if collections.is_empty() {
            collections.push(SPIN_ENTRIES_COLLECTION.to_string());
        }

        let max_document_bytes = match lookup("MAX_DOCUMENT_BYTES") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| format!("Invalid MAX_DOCUMENT_BYTES: {}", e))?,
            None => DEFAULT_MAX_DOCUMENT_BYTES,
        };

        let frontend_dist = PathBuf::from(
            lookup("FRONTEND_DIST").unwrap_or_else(|| DEFAULT_FRONTEND_DIST.to_string()),
        );

        Ok(Self {
            database_url,
            bind_addr,
            allowed_origins,
            collections,
            max_document_bytes,
            frontend_dist,
        })
    }

    pub fn accepts_collection(&self, collection: &str) -> bool {
        self.collections.iter().any(|allowed| allowed == collection)
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/gifts")]).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.collections, vec!["spin_entries".to_string()]);
        assert_eq!(config.max_document_bytes, 16 * 1024);
        assert_eq!(config.allowed_origins.len(), 2);
        assert!(config.accepts_collection("spin_entries"));
        assert!(!config.accepts_collection("users"));
    }

    #[test]
    fn test_database_url_required() {
        assert!(config_from(&[]).is_err());
    }

    #[test]
    fn test_lists_are_trimmed() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/gifts"),
            ("STORE_COLLECTIONS", " spin_entries , newsletter ,,"),
            ("ALLOWED_ORIGINS", "https://simplykhushi.in"),
        ])
        .unwrap();
        assert_eq!(config.collections, vec!["spin_entries".to_string(), "newsletter".to_string()]);
        assert_eq!(config.allowed_origins, vec!["https://simplykhushi.in".to_string()]);
    }

    #[test]
    fn test_bad_numbers_rejected() {
        assert!(config_from(&[
            ("DATABASE_URL", "postgres://localhost/gifts"),
            ("MAX_DOCUMENT_BYTES", "lots"),
        ])
        .is_err());
        assert!(config_from(&[
            ("DATABASE_URL", "postgres://localhost/gifts"),
            ("BIND_ADDR", "nowhere"),
        ])
        .is_err());
    }
}
