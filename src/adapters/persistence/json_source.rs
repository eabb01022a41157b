//! Implements EntitySource over JSON export files.
//!
//! One file per entity: data/{companies,jobs,invoices,warranties}.json, each a
//! JSON array as exported from the workshop's data store. A missing file is an
//! empty collection.

use crate::domain::{Company, DomainError, Invoice, Job, Warranty};
use crate::ports::EntitySource;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Maps an entity type to its export file stem and a name for errors/logs.
pub trait JsonEntity: DeserializeOwned + Send + Sync + 'static {
    const ENTITY: &'static str;
}

impl JsonEntity for Company {
    const ENTITY: &'static str = "companies";
}

impl JsonEntity for Job {
    const ENTITY: &'static str = "jobs";
}

impl JsonEntity for Invoice {
    const ENTITY: &'static str = "invoices";
}

impl JsonEntity for Warranty {
    const ENTITY: &'static str = "warranties";
}

/// File-backed source for one entity type.
pub struct JsonFileSource<T> {
    path: PathBuf,
    _entity: PhantomData<fn() -> T>,
}

impl<T: JsonEntity> JsonFileSource<T> {
    /// Source reading `{data_dir}/{entity}.json`.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::at(data_dir.as_ref().join(format!("{}.json", T::ENTITY)))
    }

    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            _entity: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl<T: JsonEntity> EntitySource<T> for JsonFileSource<T> {
    async fn list(&self) -> Result<Vec<T>, DomainError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), entity = T::ENTITY, "no export file, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(DomainError::Source {
                    entity: T::ENTITY,
                    message: format!("{}: {}", self.path.display(), e),
                });
            }
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        let items: Vec<T> = serde_json::from_str(&raw).map_err(|e| DomainError::Decode {
            entity: T::ENTITY,
            message: e.to_string(),
        })?;
        info!(
            path = %self.path.display(),
            entity = T::ENTITY,
            count = items.len(),
            "loaded export file"
        );
        Ok(items)
    }
}
