use atomic_write_file::AtomicWriteFile;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use super::error::{Result, StoreError};
use super::types::{Record, Store};

const NEXT_ID_FIELD: &str = "next_id";

/// Convert a store to its snapshot document:
/// `{ "<collection>": { "<id>": record, ... }, "next_id": N }`
pub fn to_document<T: Record>(store: &Store<T>) -> Result<Value> {
    let mut document = Map::new();
    document.insert(
        T::COLLECTION.to_string(),
        serde_json::to_value(store.records())?,
    );
    document.insert(NEXT_ID_FIELD.to_string(), Value::from(store.next_id()));
    Ok(Value::Object(document))
}

/// Rebuild a store from a snapshot document.
///
/// A missing `next_id` defaults to 1. A missing collection, a record missing
/// required fields, or an unparseable timestamp is an error. Records without
/// an embedded ID take their map key; an embedded ID must equal its key.
pub fn from_document<T: Record>(document: Value) -> Result<Store<T>> {
    let Value::Object(mut document) = document else {
        return Err(StoreError::Format {
            message: "expected a JSON object at the top level".to_string(),
        });
    };

    let entries = match document.remove(T::COLLECTION) {
        Some(Value::Object(entries)) => entries,
        Some(_) => {
            return Err(StoreError::Format {
                message: format!("'{}' must be an object keyed by ID", T::COLLECTION),
            })
        }
        None => {
            return Err(StoreError::Format {
                message: format!("missing '{}' field", T::COLLECTION),
            })
        }
    };

    let next_id = match document.get(NEXT_ID_FIELD) {
        None | Some(Value::Null) => 1,
        Some(value) => value.as_u64().ok_or_else(|| StoreError::Format {
            message: format!("'{}' must be a non-negative integer, got {}", NEXT_ID_FIELD, value),
        })?,
    };

    let mut records = BTreeMap::new();
    for (id, value) in entries {
        let mut record: T = serde_json::from_value(value).map_err(|source| {
            StoreError::MalformedRecord {
                id: id.clone(),
                source,
            }
        })?;
        match record.id().map(str::to_string) {
            None => record.assign_id(id.clone()),
            Some(embedded) if embedded != id => {
                return Err(StoreError::Format {
                    message: format!(
                        "record keyed '{}' carries a different ID '{}'",
                        id, embedded
                    ),
                })
            }
            Some(_) => {}
        }
        records.insert(id, record);
    }

    Ok(Store::from_parts(records, next_id))
}

/// Load a store from a JSON snapshot file
///
/// If the file doesn't exist, returns a new empty store.
pub fn load_store<T: Record>(path: &Path) -> Result<Store<T>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no snapshot found, starting empty");
        return Ok(Store::new());
    }

    let file = File::open(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Value = serde_json::from_reader(BufReader::new(file))?;
    let store = from_document(document)?;

    tracing::debug!(
        path = %path.display(),
        count = store.count(),
        next_id = store.next_id(),
        "loaded {}",
        T::COLLECTION
    );
    Ok(store)
}

/// Save a store to a JSON snapshot file atomically
///
/// The file is never left half-written. Creates parent directories as needed.
pub fn save_store<T: Record>(path: &Path, store: &Store<T>) -> Result<()> {
    let io_err = |source: std::io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let document = to_document(store)?;
    let mut file = AtomicWriteFile::open(path).map_err(io_err)?;
    serde_json::to_writer_pretty(&mut file, &document)?;
    file.commit().map_err(io_err)?;

    tracing::debug!(path = %path.display(), count = store.count(), "saved {}", T::COLLECTION);
    Ok(())
}
