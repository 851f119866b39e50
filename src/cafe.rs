//! Cafe profile — a singleton descriptor staff keep up to date.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CafeProfile {
    pub name: String,
    pub description: String,
    pub opening_hours: String,
    pub location: String,
}

/// Holds at most one profile; `upsert` creates or replaces it.
#[derive(Clone, Default)]
pub struct CafeStore {
    profile: Arc<RwLock<Option<CafeProfile>>>,
}

impl CafeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Result<Option<CafeProfile>, StoreError> {
        let profile = self
            .profile
            .read()
            .map_err(|_| StoreError::LockPoisoned("cafe get"))?;
        Ok(profile.clone())
    }

    pub fn upsert(&self, new: CafeProfile) -> Result<CafeProfile, StoreError> {
        let mut profile = self
            .profile
            .write()
            .map_err(|_| StoreError::LockPoisoned("cafe upsert"))?;
        *profile = Some(new.clone());
        Ok(new)
    }
}
