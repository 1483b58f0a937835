// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::Dataset;
use anyhow::Error;
use config::DatasetConfig;
use once_cell::sync::{Lazy, OnceCell};
use std::{
    collections::HashMap,
    fmt::{self, Display},
    fs,
    path::PathBuf,
    sync::{Arc, Mutex, PoisonError},
    time::SystemTime,
};

/// Identifies a dataset by the files it is loaded from
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct DatasetKey {
    pub ratings: PathBuf,
    pub items: PathBuf,
}

impl DatasetKey {
    pub fn new(ratings: impl Into<PathBuf>, items: impl Into<PathBuf>) -> Self {
        Self {
            ratings: ratings.into(),
            items: items.into(),
        }
    }

    pub fn fingerprint(&self) -> Fingerprint {
        let modified = |path: &PathBuf| fs::metadata(path).and_then(|m| m.modified()).ok();

        Fingerprint {
            ratings: modified(&self.ratings),
            items: modified(&self.items),
        }
    }
}

impl From<&DatasetConfig> for DatasetKey {
    fn from(config: &DatasetConfig) -> Self {
        Self::new(config.ratings.clone(), config.items.clone())
    }
}

impl Display for DatasetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.ratings.display(), self.items.display())
    }
}

/// Modification times of the dataset files when they were read
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Fingerprint {
    ratings: Option<SystemTime>,
    items: Option<SystemTime>,
}

type Slot = Arc<OnceCell<Arc<Dataset>>>;

static DATASETS: Lazy<Mutex<HashMap<DatasetKey, Slot>>> = Lazy::new(Default::default);

fn slot(key: &DatasetKey) -> Slot {
    let mut datasets = DATASETS.lock().unwrap_or_else(PoisonError::into_inner);
    datasets.entry(key.clone()).or_default().clone()
}

/// Returns the dataset cached under `key`, running `load` if there is none yet.
///
/// Concurrent callers for the same key wait for a single `load`. A failed
/// load caches nothing, the next call runs `load` again.
pub fn get_or_load<F>(key: &DatasetKey, load: F) -> Result<Arc<Dataset>, Error>
where
    F: FnOnce() -> Result<Dataset, Error>,
{
    let slot = slot(key);

    if let Some(dataset) = slot.get() {
        log::debug!("Using cached dataset for {}", key);
        return Ok(Arc::clone(dataset));
    }

    slot.get_or_try_init(|| {
        log::info!("Loading dataset from {}", key);
        load().map(Arc::new)
    })
    .map(Arc::clone)
}

pub fn cached(key: &DatasetKey) -> Option<Arc<Dataset>> {
    let datasets = DATASETS.lock().unwrap_or_else(PoisonError::into_inner);
    datasets.get(key)?.get().cloned()
}

/// Forgets the dataset cached under `key`, holders of it keep their copy
pub fn invalidate(key: &DatasetKey) -> bool {
    let mut datasets = DATASETS.lock().unwrap_or_else(PoisonError::into_inner);
    datasets.remove(key).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_dataset;
    use anyhow::{anyhow, Error};
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        thread,
        time::Duration,
    };

    #[test]
    fn loads_once() -> Result<(), Error> {
        let key = DatasetKey::new("cache-test/loads-once.data", "cache-test/loads-once.item");
        let loads = AtomicUsize::new(0);

        let load = || {
            loads.fetch_add(1, Ordering::SeqCst);
            sample_dataset()
        };

        let first = get_or_load(&key, load)?;
        let second = get_or_load(&key, load)?;

        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));

        Ok(())
    }

    #[test]
    fn failed_load_is_not_cached() -> Result<(), Error> {
        let key = DatasetKey::new("cache-test/fails.data", "cache-test/fails.item");

        assert!(get_or_load(&key, || Err(anyhow!("broken file"))).is_err());
        assert!(cached(&key).is_none());

        let dataset = get_or_load(&key, sample_dataset)?;
        assert!(Arc::ptr_eq(&dataset, &cached(&key).unwrap()));

        Ok(())
    }

    #[test]
    fn invalidate_forces_reload() -> Result<(), Error> {
        let key = DatasetKey::new("cache-test/reload.data", "cache-test/reload.item");

        let first = get_or_load(&key, sample_dataset)?;
        assert!(invalidate(&key));
        assert!(cached(&key).is_none());

        let second = get_or_load(&key, sample_dataset)?;
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first.catalog(), second.catalog());

        Ok(())
    }

    #[test]
    fn concurrent_loads_run_once() -> Result<(), Error> {
        let key = DatasetKey::new("cache-test/concurrent.data", "cache-test/concurrent.item");
        let loads = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let key = key.clone();
                let loads = Arc::clone(&loads);

                thread::spawn(move || {
                    get_or_load(&key, || {
                        loads.fetch_add(1, Ordering::SeqCst);
                        thread::sleep(Duration::from_millis(50));
                        sample_dataset()
                    })
                    .is_ok()
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap_or(false));
        }

        assert_eq!(loads.load(Ordering::SeqCst), 1);

        Ok(())
    }
}
