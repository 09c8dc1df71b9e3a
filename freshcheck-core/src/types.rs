//! Core types: freshness levels, storage zones, assessment / history / fridge
//! records, and the time-derived freshness status.
//!
//! Wire names are camelCase and timestamps are epoch milliseconds so that the
//! persisted blobs keep the exact shape of the original web app's storage.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One day in milliseconds; every shelf-life computation is done in this unit.
pub const DAY_MS: i64 = 86_400_000;

/// Current wall-clock time as epoch milliseconds. The single clock read;
/// all derivations take `now_ms` as an argument so they stay pure.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// AI-assigned freshness grade. Serialized as the Chinese wire strings the
/// vision service emits; any other string fails deserialization, which is what
/// pushes the adapter onto its fallback record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FreshnessLevel {
    #[serde(rename = "新鲜")]
    Fresh,
    #[serde(rename = "一般")]
    Average,
    #[serde(rename = "临界")]
    Critical,
    #[serde(rename = "不建议食用")]
    Spoiled,
}

impl FreshnessLevel {
    pub fn label(&self) -> &'static str {
        match self {
            FreshnessLevel::Fresh => "新鲜",
            FreshnessLevel::Average => "一般",
            FreshnessLevel::Critical => "临界",
            FreshnessLevel::Spoiled => "不建议食用",
        }
    }
}

/// Where a fridge item is kept. Affects suggested defaults only; the system
/// never converts between zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageZone {
    Fridge,
    Freezer,
}

impl StorageZone {
    pub fn label(&self) -> &'static str {
        match self {
            StorageZone::Fridge => "冷藏",
            StorageZone::Freezer => "冷冻",
        }
    }

    /// Default zone when transferring an assessment into the fridge:
    /// meat and seafood go to the freezer, everything else is chilled.
    pub fn suggested_for_category(category: &str) -> Self {
        if category == "肉类" || category == "水产" {
            StorageZone::Freezer
        } else {
            StorageZone::Fridge
        }
    }
}

impl std::str::FromStr for StorageZone {
    type Err = crate::error::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fridge" | "冷藏" => Ok(StorageZone::Fridge),
            "freezer" | "冷冻" => Ok(StorageZone::Freezer),
            other => Err(crate::error::CoreError::UnknownZone(other.to_string())),
        }
    }
}

/// Default quantity unit when transferring an assessment into the fridge.
pub fn suggested_unit(category: &str) -> &'static str {
    if category == "肉类" || category == "根茎类" {
        "kg"
    } else {
        "份"
    }
}

/// Coarse region derived from latitude; used only for the home greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    North,
    South,
    Unknown,
}

impl Region {
    /// Latitude above 33 degrees counts as the north.
    pub fn from_latitude(latitude: f64) -> Self {
        if latitude > 33.0 {
            Region::North
        } else {
            Region::South
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Region::North => "北方",
            Region::South => "南方",
            Region::Unknown => "未知",
        }
    }
}

/// One-shot geolocation result. Lookup failure leaves the region unknown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub region: Region,
}

impl UserLocation {
    pub fn unknown() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            region: Region::Unknown,
        }
    }

    pub fn from_coords(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            region: Region::from_latitude(latitude),
        }
    }
}

/// Structured output of analyzing one food image.
///
/// `category` stays a free string: the service is untrusted and the fallback
/// record uses `其他`, which is outside the 8-category catalog set. No
/// semantic validation happens beyond what serde enforces on `freshness`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub ingredient_name: String,
    pub category: String,
    pub freshness: FreshnessLevel,
    /// Estimated remaining viable days, as free text from the service.
    pub remaining_days: String,
    pub reasoning: String,
    pub cooking_tips: String,
    pub icon: String,
    /// Epoch milliseconds, stamped when the response was accepted.
    pub timestamp: i64,
}

/// A history ledger entry: an assessment plus its id and captured image ref.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: String,
    #[serde(flatten)]
    pub record: AssessmentRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl HistoryItem {
    pub fn new(record: AssessmentRecord, image_url: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            record,
            image_url,
        }
    }
}

/// Three-tier freshness status derived from elapsed shelf-life time.
/// Distinct from the AI-assigned [`FreshnessLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedStatus {
    VeryFresh,
    Average,
    Spoiled,
}

impl DerivedStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DerivedStatus::VeryFresh => "非常新鲜",
            DerivedStatus::Average => "一般",
            DerivedStatus::Spoiled => "已变质",
        }
    }
}

/// A stocked inventory item. `expiry_date` is fixed at creation; only
/// `quantity` mutates afterwards, until removal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FridgeItem {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Epoch milliseconds at creation.
    pub added_date: i64,
    /// `added_date + remaining_days * DAY_MS`, never recomputed.
    pub expiry_date: i64,
    pub remaining_days: i64,
    pub icon: String,
    pub quantity: i64,
    pub unit: String,
    pub zone: StorageZone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooking_tips: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_advice: Option<String>,
}

impl FridgeItem {
    /// Builds an item from an assessment the user chose to stock. The shelf
    /// life comes from the assessment's remaining-days text; the assessment's
    /// reasoning doubles as storage advice, as in the original result view.
    /// Quantity floors at one, the stepper bound of the original add sheet;
    /// stock never enters at zero or below.
    pub fn from_assessment(
        source: &AssessmentRecord,
        zone: StorageZone,
        quantity: i64,
        unit: impl Into<String>,
        now_ms: i64,
    ) -> Self {
        let days = crate::shelf_life::parse_shelf_life_days(&source.remaining_days);
        Self {
            id: Uuid::new_v4().to_string(),
            name: source.ingredient_name.clone(),
            category: source.category.clone(),
            added_date: now_ms,
            expiry_date: now_ms + days * DAY_MS,
            remaining_days: days,
            icon: source.icon.clone(),
            quantity: quantity.max(1),
            unit: unit.into(),
            zone,
            cooking_tips: Some(source.cooking_tips.clone()),
            storage_advice: Some(source.reasoning.clone()),
        }
    }

    /// Builds an item added by hand from the reference catalog, with a
    /// user-chosen shelf-life estimate. Quantity floors at one, as in
    /// [`Self::from_assessment`].
    #[allow(clippy::too_many_arguments)]
    pub fn manual(
        name: impl Into<String>,
        category: impl Into<String>,
        icon: impl Into<String>,
        zone: StorageZone,
        quantity: i64,
        unit: impl Into<String>,
        days: i64,
        now_ms: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            category: category.into(),
            added_date: now_ms,
            expiry_date: now_ms + days * DAY_MS,
            remaining_days: days,
            icon: icon.into(),
            quantity: quantity.max(1),
            unit: unit.into(),
            zone,
            cooking_tips: Some("来自图鉴添加，请参考图鉴详情页做法。".to_string()),
            storage_advice: Some("手动从图鉴添加，请注意查看建议保存天数。".to_string()),
        }
    }

    /// Derived status, recomputed on every read. Pure in
    /// `(added_date, expiry_date, now_ms)`.
    pub fn status_at(&self, now_ms: i64) -> DerivedStatus {
        if now_ms >= self.expiry_date {
            return DerivedStatus::Spoiled;
        }
        let elapsed = now_ms - self.added_date;
        let total = self.expiry_date - self.added_date;
        if (elapsed as f64) < (total as f64) * 0.4 {
            DerivedStatus::VeryFresh
        } else {
            DerivedStatus::Average
        }
    }

    /// Whole days since the item was added, clamped to zero.
    pub fn elapsed_days(&self, now_ms: i64) -> i64 {
        ((now_ms - self.added_date) / DAY_MS).max(0)
    }

    /// Less than one day of shelf life left. A separate boundary from the
    /// three-tier status; evaluated independently for UI emphasis.
    pub fn is_critical(&self, now_ms: i64) -> bool {
        self.expiry_date - now_ms < DAY_MS
    }

    pub fn remaining_ms(&self, now_ms: i64) -> i64 {
        self.expiry_date - now_ms
    }
}
