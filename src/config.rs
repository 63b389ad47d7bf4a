use std::env;
use std::io;

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Storage {
    Postgres { database_url: String, max_connections: u32 },
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_address: String,
    pub storage: Storage,
}

impl Settings {
    pub fn from_env() -> io::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> io::Result<Self> {
        let bind_address = lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let storage = match lookup("STORAGE").as_deref().unwrap_or("postgres") {
            "memory" => Storage::Memory,
            "postgres" => {
                let database_url = lookup("DATABASE_URL")
                    .filter(|url| !url.is_empty())
                    .ok_or_else(|| invalid("DATABASE_URL must be set"))?;
                let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
                    Some(raw) => raw
                        .parse()
                        .map_err(|_| invalid(&format!("DATABASE_MAX_CONNECTIONS is not a number: {}", raw)))?,
                    None => DEFAULT_MAX_CONNECTIONS,
                };
                Storage::Postgres { database_url, max_connections }
            }
            other => return Err(invalid(&format!("unknown STORAGE backend: {}", other))),
        };

        Ok(Self { bind_address, storage })
    }
}

fn invalid(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, msg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> io::Result<Settings> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn postgres_is_the_default_backend() {
        let parsed = settings(&[("DATABASE_URL", "postgres://localhost/workforce")]).unwrap();
        assert_eq!(parsed.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(
            parsed.storage,
            Storage::Postgres {
                database_url: "postgres://localhost/workforce".to_string(),
                max_connections: DEFAULT_MAX_CONNECTIONS,
            }
        );
    }

    #[test]
    fn postgres_without_url_is_rejected() {
        let err = settings(&[]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn memory_backend_needs_no_url() {
        let parsed = settings(&[("STORAGE", "memory"), ("BIND_ADDRESS", "0.0.0.0:9000")]).unwrap();
        assert_eq!(parsed.storage, Storage::Memory);
        assert_eq!(parsed.bind_address, "0.0.0.0:9000");
    }

    #[test]
    fn bad_pool_size_and_unknown_backend_are_rejected() {
        assert!(settings(&[("DATABASE_URL", "postgres://x"), ("DATABASE_MAX_CONNECTIONS", "many")]).is_err());
        assert!(settings(&[("STORAGE", "sqlite")]).is_err());
    }
}
