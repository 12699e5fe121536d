//! Clothing item catalog types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Physical condition of a listed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    /// Unworn, with or without tags.
    New,
    /// Worn once or twice, indistinguishable from new.
    LikeNew,
    /// Visible but light wear.
    #[default]
    Good,
    /// Heavy wear, still usable.
    Fair,
}

/// How an item's point value was computed.
///
/// Returned by the backend alongside the item when a breakdown exists;
/// all figures are informational.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PointsBreakdown {
    /// Base value for the item's category.
    #[serde(default)]
    pub base_category_value: i64,
    /// Quality score contribution.
    #[serde(default)]
    pub item_quality_score: i64,
    /// Demand weighting contribution.
    #[serde(default)]
    pub demand_weight: i64,
    /// Bonus for condition.
    #[serde(default)]
    pub condition_bonus: i64,
    /// Bonus from uploader trust level.
    #[serde(default)]
    pub trust_boost: i64,
    /// Bonus for a first upload.
    #[serde(default)]
    pub first_upload_bonus: i64,
    /// Active campaign bonus.
    #[serde(default)]
    pub campaign_bonus: i64,
    /// Deductions.
    #[serde(default)]
    pub penalties: i64,
}

/// A clothing item listed on the marketplace.
///
/// The identifier is normalized from `_id`/`id` during deserialization,
/// the same way user identifiers are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    /// Canonical unique identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Listing title.
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Category, e.g. "tops" or "outerwear".
    #[serde(default)]
    pub category: String,
    /// Garment type within the category.
    #[serde(default, rename = "type")]
    pub kind: String,
    /// Size label.
    #[serde(default)]
    pub size: String,
    /// Physical condition.
    #[serde(default)]
    pub condition: Condition,
    /// Points required to redeem this item.
    #[serde(default)]
    pub point_value: i64,
    /// Image URLs; the first is the cover image.
    #[serde(default)]
    pub images: Vec<String>,
    /// Search tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Featured on the landing page.
    #[serde(default)]
    pub is_featured: bool,
    /// Display name of the uploader.
    #[serde(default)]
    pub uploader_name: String,
    /// Avatar URL of the uploader.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploader_avatar: Option<String>,
    /// Breakdown of the awarded points, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_breakdown: Option<PointsBreakdown>,
    /// Total points awarded to the uploader; falls back to
    /// `point_value` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_points_given: Option<i64>,
    /// When the listing was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ClothingItem {
    /// Points awarded to the uploader, preferring the explicit total.
    #[must_use]
    pub fn awarded_points(&self) -> i64 {
        self.total_points_given.unwrap_or(self.point_value)
    }
}
