//! Write-through cache cell and its raw read/write helpers.

use crate::repo::kv_repo::{KvError, KvRepository, KvResult};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Reads and parses `key`, or returns `default` when absent or unreadable.
pub fn read_value<T, R>(repo: &R, key: &str, default: T) -> T
where
    T: DeserializeOwned,
    R: KvRepository + ?Sized,
{
    read_value_or_else(repo, key, || default)
}

/// Like `read_value`, but only builds the default when it is needed.
pub fn read_value_or_else<T, R>(repo: &R, key: &str, default: impl FnOnce() -> T) -> T
where
    T: DeserializeOwned,
    R: KvRepository + ?Sized,
{
    match try_read_value(repo, key) {
        Ok(Some(value)) => {
            debug!("event=kv_read module=cache status=ok key={key} source=stored");
            value
        }
        Ok(None) => {
            debug!("event=kv_read module=cache status=ok key={key} source=default");
            default()
        }
        Err(err) => {
            warn!("event=kv_read module=cache status=error key={key} source=default error={err}");
            default()
        }
    }
}

/// Reads and parses `key`, surfacing storage and parse failures.
pub fn try_read_value<T, R>(repo: &R, key: &str) -> KvResult<Option<T>>
where
    T: DeserializeOwned,
    R: KvRepository + ?Sized,
{
    let Some(raw) = repo.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| KvError::Codec {
            key: key.to_string(),
            source,
        })
}

/// Serializes `value` and replaces whatever is stored under `key`.
pub fn write_value<T, R>(repo: &R, key: &str, value: &T) -> KvResult<()>
where
    T: Serialize + ?Sized,
    R: KvRepository + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| KvError::Codec {
        key: key.to_string(),
        source,
    })?;
    repo.set(key, &raw)
}

/// One key's value held in memory and mirrored to the repository.
#[derive(Debug, Clone)]
pub struct PersistedCell<T> {
    key: String,
    value: T,
    degraded: bool,
}

impl<T> PersistedCell<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Loads the stored value for `key`, or `default()` when there is none.
    pub fn load<R>(repo: &R, key: impl Into<String>, default: impl FnOnce() -> T) -> Self
    where
        R: KvRepository + ?Sized,
    {
        let key = key.into();
        let value = read_value_or_else(repo, &key, default);
        Self {
            key,
            value,
            degraded: false,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Returns whether any write through this cell has failed.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Replaces the value and writes it through.
    pub fn set<R>(&mut self, repo: &R, value: T)
    where
        R: KvRepository + ?Sized,
    {
        self.value = value;
        self.persist(repo);
    }

    /// Mutates the value in place, then writes it through.
    pub fn update<R, O>(&mut self, repo: &R, mutate: impl FnOnce(&mut T) -> O) -> O
    where
        R: KvRepository + ?Sized,
    {
        let output = mutate(&mut self.value);
        self.persist(repo);
        output
    }

    fn persist<R>(&mut self, repo: &R)
    where
        R: KvRepository + ?Sized,
    {
        match write_value(repo, &self.key, &self.value) {
            Ok(()) => debug!("event=kv_write module=cache status=ok key={}", self.key),
            Err(err) => {
                if !self.degraded {
                    warn!(
                        "event=kv_write module=cache status=error key={} degraded=true error={err}",
                        self.key
                    );
                }
                self.degraded = true;
            }
        }
    }
}
