//! Preset records and the payloads that create or modify them.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{DisplayOrder, PresetId};

/// Purchase link shared by the seed catalog.
pub const SEED_LINK: &str = "https://gumroad.com/throughglasss";

/// Price shared by the seed catalog.
pub const SEED_PRICE: &str = "$29";

/// A purchasable preset as shown in the store carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub id: PresetId,
    pub name: String,
    pub desc: String,
    pub price: String,
    pub link: String,
    pub order: DisplayOrder,
}

/// Body of a create request.
///
/// Fields are optional at the type level so that a missing field surfaces as
/// a validation error listing it, rather than as a decoding failure.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreatePreset {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub desc: Option<String>,
    #[validate(required, length(min = 1))]
    pub price: Option<String>,
    #[validate(required, length(min = 1))]
    pub link: Option<String>,
}

/// Body of an update request. Absent fields are left untouched.
///
/// Has no `id` field, so an `id` key in the payload is dropped during
/// deserialization and never reaches the stored record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePreset {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub price: Option<String>,
    pub link: Option<String>,
    pub order: Option<DisplayOrder>,
}

impl Preset {
    /// Merge the supplied fields of `changes` into this record.
    pub fn apply(&mut self, changes: &UpdatePreset) {
        if let Some(name) = &changes.name {
            self.name.clone_from(name);
        }
        if let Some(desc) = &changes.desc {
            self.desc.clone_from(desc);
        }
        if let Some(price) = &changes.price {
            self.price.clone_from(price);
        }
        if let Some(link) = &changes.link {
            self.link.clone_from(link);
        }
        if let Some(order) = changes.order {
            self.order = order;
        }
    }
}

/// The catalog every process starts with.
pub fn seed_presets() -> Vec<Preset> {
    let seed = |id: PresetId, name: &str, desc: &str| Preset {
        id,
        name: name.to_string(),
        desc: desc.to_string(),
        price: SEED_PRICE.to_string(),
        link: SEED_LINK.to_string(),
        order: id - 1,
    };

    vec![
        seed(
            1,
            "Golden Hour",
            "Warm, cinematic color grading for portrait & outdoor storytelling",
        ),
        seed(
            2,
            "Midnight Blue",
            "Deep, moody tones perfect for dramatic cinematic looks",
        ),
        seed(
            3,
            "Vintage Film",
            "Classic analog film stock emulation for nostalgic aesthetics",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Preset {
        seed_presets().remove(0)
    }

    #[test]
    fn seed_has_three_ordered_records() {
        let seeds = seed_presets();
        let ids: Vec<_> = seeds.iter().map(|p| p.id).collect();
        let orders: Vec<_> = seeds.iter().map(|p| p.order).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn apply_changes_only_supplied_fields() {
        let mut preset = sample();
        let before = preset.clone();

        preset.apply(&UpdatePreset {
            price: Some("$35".into()),
            ..Default::default()
        });

        assert_eq!(preset.price, "$35");
        assert_eq!(preset.name, before.name);
        assert_eq!(preset.desc, before.desc);
        assert_eq!(preset.link, before.link);
        assert_eq!(preset.order, before.order);
        assert_eq!(preset.id, before.id);
    }

    #[test]
    fn update_payload_ignores_id_key() {
        let changes: UpdatePreset =
            serde_json::from_value(serde_json::json!({ "id": 999, "name": "Renamed" }))
                .expect("unknown keys are ignored");
        let mut preset = sample();
        preset.apply(&changes);
        assert_eq!(preset.id, 1);
        assert_eq!(preset.name, "Renamed");
    }

    #[test]
    fn preset_serializes_with_wire_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        for key in ["id", "name", "desc", "price", "link", "order"] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
    }
}
