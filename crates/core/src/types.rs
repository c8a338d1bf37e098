/// Preset identifiers are millisecond timestamps taken at creation time,
/// bumped forward when they would collide with an existing id.
pub type PresetId = i64;

/// Display position of a preset. Not unique.
pub type DisplayOrder = i64;
