//! In-memory preset catalog.
//!
//! [`CatalogStore`] is constructed once at startup and shared behind an
//! `Arc`. Each operation runs inside a single lock acquisition, so concurrent
//! requests never observe or produce a half-applied change. Nothing is
//! persisted: a restart brings back the seed catalog.

use tokio::sync::RwLock;

use crate::error::CoreError;
use crate::preset::{seed_presets, CreatePreset, Preset, UpdatePreset};
use crate::types::PresetId;
use crate::validation::validate_fields;

/// Ordered collection of presets, in insertion order.
pub struct CatalogStore {
    presets: RwLock<Vec<Preset>>,
}

impl CatalogStore {
    /// Create a store holding exactly `presets`.
    pub fn new(presets: Vec<Preset>) -> Self {
        Self {
            presets: RwLock::new(presets),
        }
    }

    /// Create a store holding the seed catalog.
    pub fn seeded() -> Self {
        Self::new(seed_presets())
    }

    /// All presets sorted ascending by `order`.
    ///
    /// Ties keep insertion order. The stored sequence itself is not reordered.
    pub async fn list(&self) -> Vec<Preset> {
        let mut presets = self.presets.read().await.clone();
        presets.sort_by_key(|p| p.order);
        presets
    }

    /// Number of presets currently held.
    pub async fn len(&self) -> usize {
        self.presets.read().await.len()
    }

    /// Validate `input` and append a new preset at the end of the display order.
    pub async fn create(&self, input: CreatePreset) -> Result<Preset, CoreError> {
        validate_fields(&input)?;

        let mut presets = self.presets.write().await;
        let preset = Preset {
            id: next_id(&presets)?,
            name: input.name.unwrap_or_default(),
            desc: input.desc.unwrap_or_default(),
            price: input.price.unwrap_or_default(),
            link: input.link.unwrap_or_default(),
            order: presets.len() as i64,
        };
        presets.push(preset.clone());

        tracing::debug!(id = preset.id, total = presets.len(), "Preset appended");
        Ok(preset)
    }

    /// Merge `changes` into the preset with the given id.
    pub async fn update(&self, id: PresetId, changes: &UpdatePreset) -> Result<Preset, CoreError> {
        let mut presets = self.presets.write().await;
        let preset = presets
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "Preset",
                id: id.to_string(),
            })?;

        preset.apply(changes);
        Ok(preset.clone())
    }

    /// Remove every preset with the given id, returning how many were removed.
    ///
    /// Removing an unknown id is not an error.
    pub async fn delete(&self, id: PresetId) -> usize {
        let mut presets = self.presets.write().await;
        let before = presets.len();
        presets.retain(|p| p.id != id);
        before - presets.len()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Millisecond timestamp of the current instant, or one past the highest
/// existing id when the clock has not moved past it.
fn next_id(presets: &[Preset]) -> Result<PresetId, CoreError> {
    let now = chrono::Utc::now().timestamp_millis();
    match presets.iter().map(|p| p.id).max() {
        Some(max) if max >= now => max
            .checked_add(1)
            .ok_or_else(|| CoreError::Internal("Preset id space exhausted".into())),
        _ => Ok(now),
    }
}
