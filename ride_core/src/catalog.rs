//! # Ride Catalog
//!
//! Catalog records as they come out of the product data file, plus the
//! one-time preparation step that attaches a category and a display profile
//! to each record.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "name": { "en": "Nuclear energy crisis", "zh": "核能危机" },
//!   "category": { "en": "Family Ride", "zh": "家庭游乐设备" },
//!   "footprint": { "en": "D12M*H5.9M (Including Fence)", "zh": "直径12M*高5.9M (含围栏)" },
//!   "height": { "en": "5.9 m", "zh": "5.9米" },
//!   "riders": "36",
//!   "status": "New",
//!   "venue_type": "Indoor"
//! }
//! ```

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::categories::{apply_category_mapping, CategoryAssignment, MainCategory};
use crate::errors::{RideError, RideResult};

// ============================================================================
// Language
// ============================================================================

/// Display language selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Zh,
}

impl Lang {
    /// Short code used in config files and on the command line
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Zh => "zh",
        }
    }
}

impl FromStr for Lang {
    type Err = RideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Lang::En),
            "zh" | "cn" | "chinese" => Ok(Lang::Zh),
            other => Err(RideError::invalid_input("lang", other, "Expected 'en' or 'zh'")),
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Text carried in both catalog languages
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub zh: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, zh: impl Into<String>) -> Self {
        LocalizedText {
            en: en.into(),
            zh: zh.into(),
        }
    }

    /// Text in `lang`, falling back to English when the translation is empty
    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::Zh if !self.zh.is_empty() => &self.zh,
            _ => &self.en,
        }
    }
}

/// List-valued text carried in both catalog languages
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalizedList {
    #[serde(default)]
    pub en: Vec<String>,
    #[serde(default)]
    pub zh: Vec<String>,
}

// ============================================================================
// Classification enums
// ============================================================================

/// Where a ride can be installed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VenueType {
    Indoor,
    Outdoor,
    /// Suitable for indoor and outdoor venues alike
    Both,
}

impl VenueType {
    pub fn label(self, lang: Lang) -> &'static str {
        match (self, lang) {
            (VenueType::Indoor, Lang::En) => "Indoor",
            (VenueType::Outdoor, Lang::En) => "Outdoor",
            (VenueType::Both, Lang::En) => "Indoor & Outdoor",
            (VenueType::Indoor, Lang::Zh) => "室内",
            (VenueType::Outdoor, Lang::Zh) => "户外",
            (VenueType::Both, Lang::Zh) => "室内外通用",
        }
    }
}

impl FromStr for VenueType {
    type Err = RideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "indoor" => Ok(VenueType::Indoor),
            "outdoor" => Ok(VenueType::Outdoor),
            "both" => Ok(VenueType::Both),
            other => Err(RideError::invalid_input(
                "venue_type",
                other,
                "Expected 'indoor', 'outdoor' or 'both'",
            )),
        }
    }
}

/// Intended audience of a ride
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetAudience {
    Family,
    Adults,
    Kids,
    #[serde(rename = "All Ages")]
    AllAges,
}

/// Broad usage bucket shown on product cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductUsage {
    #[serde(rename = "Family Entertainment")]
    FamilyEntertainment,
    #[serde(rename = "Thrill Adventure")]
    ThrillAdventure,
    #[serde(rename = "Water Attraction")]
    WaterAttraction,
    #[serde(rename = "Kiddie Fun")]
    KiddieFun,
}

/// Whether the unit is newly built or refurbished stock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProductStatus {
    #[default]
    New,
    Used,
}

// ============================================================================
// Catalog item
// ============================================================================

/// One ride as listed in the product catalog.
///
/// Dimension fields are kept as the raw spec-sheet strings; see
/// [`crate::dimensions`] for how they are read.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: LocalizedText,

    pub category: LocalizedText,

    /// Bounding extents, e.g. "L16M*W10.5M*H11M"
    #[serde(default)]
    pub footprint: LocalizedText,

    /// Overall height, e.g. "5.9 m" or "5.9米"
    #[serde(default)]
    pub height: LocalizedText,

    /// Riders per cycle as listed (free text, usually an integer)
    #[serde(default)]
    pub riders: String,

    #[serde(default)]
    pub status: ProductStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_type: Option<VenueType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<TargetAudience>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<ProductUsage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positioning: Option<LocalizedText>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ideal_for: Option<LocalizedList>,

    /// Explicit category override; inferred when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_category: Option<MainCategory>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
}

impl CatalogItem {
    /// Create an item from its English/Chinese name and category.
    ///
    /// Dimensions, riders and the optional fields start empty.
    pub fn new(name: LocalizedText, category: LocalizedText) -> Self {
        CatalogItem {
            name,
            category,
            ..Default::default()
        }
    }

    /// Set the height and footprint strings (builder pattern)
    pub fn with_dimensions(mut self, height: LocalizedText, footprint: LocalizedText) -> Self {
        self.height = height;
        self.footprint = footprint;
        self
    }

    /// Set the rider count text (builder pattern)
    pub fn with_riders(mut self, riders: impl Into<String>) -> Self {
        self.riders = riders.into();
        self
    }

    /// Set the declared venue type (builder pattern)
    pub fn with_venue_type(mut self, venue_type: VenueType) -> Self {
        self.venue_type = Some(venue_type);
        self
    }

    /// Set the declared target audience (builder pattern)
    pub fn with_target_audience(mut self, audience: TargetAudience) -> Self {
        self.target_audience = Some(audience);
        self
    }

    /// Riders per cycle, read like a leading integer ("36", "2 adults" -> 2).
    pub fn rider_count(&self) -> Option<i64> {
        leading_integer(&self.riders)
    }

    /// Display name in `lang`
    pub fn display_name(&self, lang: Lang) -> &str {
        self.name.get(lang)
    }

    /// Lowercased name and category text in both languages, used for keyword matching
    pub fn combined_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name.en, self.name.zh, self.category.en, self.category.zh
        )
        .to_lowercase()
    }
}

/// Parse an optionally signed run of leading digits, ignoring leading whitespace.
fn leading_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

// ============================================================================
// Display profile
// ============================================================================

/// Usage, venue and audience shown on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductProfile {
    pub usage: ProductUsage,
    pub venue_type: VenueType,
    pub target_audience: TargetAudience,
}

/// Fill in usage, venue type and audience from the item's marketing copy.
///
/// Declared values always win. Missing ones are guessed from the English
/// "ideal for" list and positioning statement, defaulting to
/// Family Entertainment / Both / All Ages.
pub fn infer_profile(item: &CatalogItem) -> ProductProfile {
    let ideal_for = item
        .ideal_for
        .as_ref()
        .map(|list| list.en.join(" "))
        .unwrap_or_default();
    let positioning = item
        .positioning
        .as_ref()
        .map(|text| text.en.as_str())
        .unwrap_or_default();
    let combined = format!("{} {}", ideal_for, positioning).to_lowercase();
    let has_any = |words: &[&str]| words.iter().any(|w| combined.contains(w));

    let usage = item.usage.unwrap_or_else(|| {
        if has_any(&["thrill", "extreme", "adrenaline", "刺激"]) {
            ProductUsage::ThrillAdventure
        } else if has_any(&["water", "aqua", "splash", "水上"]) {
            ProductUsage::WaterAttraction
        } else if has_any(&["kid", "children", "儿童", "kiddie"]) {
            ProductUsage::KiddieFun
        } else {
            ProductUsage::FamilyEntertainment
        }
    });

    let venue_type = item.venue_type.unwrap_or_else(|| {
        if has_any(&["indoor", "室内"]) {
            VenueType::Indoor
        } else if has_any(&["outdoor", "户外"]) {
            VenueType::Outdoor
        } else {
            VenueType::Both
        }
    });

    let target_audience = item.target_audience.unwrap_or_else(|| {
        if has_any(&["adult", "成人"]) {
            TargetAudience::Adults
        } else if has_any(&["kid", "children", "儿童"]) {
            TargetAudience::Kids
        } else if has_any(&["family", "家庭"]) {
            TargetAudience::Family
        } else {
            TargetAudience::AllAges
        }
    });

    ProductProfile {
        usage,
        venue_type,
        target_audience,
    }
}

// ============================================================================
// Loading and preparation
// ============================================================================

/// A catalog item with its category and display profile resolved.
#[derive(Debug, Clone, Serialize)]
pub struct PreparedItem {
    pub item: CatalogItem,
    pub category: CategoryAssignment,
    pub profile: ProductProfile,
}

impl PreparedItem {
    pub fn main_category(&self) -> MainCategory {
        self.category.main_category
    }
}

/// Classify every item once and attach its display profile.
pub fn prepare_catalog(items: Vec<CatalogItem>) -> Vec<PreparedItem> {
    let prepared: Vec<PreparedItem> = items
        .into_iter()
        .map(|item| {
            let category = apply_category_mapping(&item);
            let profile = infer_profile(&item);
            PreparedItem {
                item,
                category,
                profile,
            }
        })
        .collect();
    tracing::debug!(count = prepared.len(), "prepared catalog");
    prepared
}

/// Load a catalog from a JSON file containing an array of items.
///
/// # Returns
///
/// * `Ok(Vec<CatalogItem>)` - Parsed items in file order
/// * `Err(RideError::FileError)` - The file could not be read
/// * `Err(RideError::SerializationError)` - The file is not a valid catalog
pub fn load_catalog(path: &Path) -> RideResult<Vec<CatalogItem>> {
    let mut file = File::open(path).map_err(|e| {
        RideError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        RideError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let items: Vec<CatalogItem> = serde_json::from_str(&contents)?;

    tracing::info!(path = %path.display(), count = items.len(), "loaded catalog");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::fs;

    fn sample_item() -> CatalogItem {
        CatalogItem::new(
            LocalizedText::new("Nuclear energy crisis", "核能危机"),
            LocalizedText::new("Family Ride", "家庭游乐设备"),
        )
        .with_dimensions(
            LocalizedText::new("5.9 m", "5.9米"),
            LocalizedText::new("D12M*H5.9M (Including Fence)", "直径12M*高5.9M (含围栏)"),
        )
        .with_riders("36")
    }

    #[test]
    fn test_localized_text_fallback() {
        let text = LocalizedText::new("Carousel", "");
        assert_eq!(text.get(Lang::Zh), "Carousel");
        let text = LocalizedText::new("Carousel", "旋转木马");
        assert_eq!(text.get(Lang::Zh), "旋转木马");
        assert_eq!(text.get(Lang::En), "Carousel");
    }

    #[test]
    fn test_rider_count() {
        assert_eq!(sample_item().rider_count(), Some(36));
        assert_eq!(sample_item().with_riders(" 2 adults").rider_count(), Some(2));
        assert_eq!(sample_item().with_riders("N/A").rider_count(), None);
        assert_eq!(sample_item().with_riders("").rider_count(), None);
    }

    #[test]
    fn test_combined_text_is_lowercase() {
        let text = sample_item().combined_text();
        assert!(text.contains("nuclear energy crisis"));
        assert!(text.contains("family ride"));
        assert!(text.contains("家庭游乐设备"));
    }

    #[test]
    fn test_profile_from_copy() {
        let mut item = sample_item();
        item.positioning = Some(LocalizedText::new(
            "A family-friendly ride designed for indoor amusement centers.",
            "",
        ));
        let profile = infer_profile(&item);
        assert_eq!(profile.venue_type, VenueType::Indoor);
        assert_eq!(profile.target_audience, TargetAudience::Family);
        assert_eq!(profile.usage, ProductUsage::FamilyEntertainment);
    }

    #[test]
    fn test_profile_declared_values_win() {
        let mut item = sample_item().with_venue_type(VenueType::Outdoor);
        item.ideal_for = Some(LocalizedList {
            en: vec!["Indoor kids zones".to_string()],
            zh: vec![],
        });
        let profile = infer_profile(&item);
        assert_eq!(profile.venue_type, VenueType::Outdoor);
        assert_eq!(profile.target_audience, TargetAudience::Kids);
        assert_eq!(profile.usage, ProductUsage::KiddieFun);
    }

    #[test]
    fn test_profile_defaults() {
        let profile = infer_profile(&sample_item());
        assert_eq!(profile.usage, ProductUsage::FamilyEntertainment);
        assert_eq!(profile.venue_type, VenueType::Both);
        assert_eq!(profile.target_audience, TargetAudience::AllAges);
    }

    #[test]
    fn test_parse_enums() {
        assert_eq!("Indoor".parse::<VenueType>().unwrap(), VenueType::Indoor);
        assert_eq!("both".parse::<VenueType>().unwrap(), VenueType::Both);
        assert!("roof".parse::<VenueType>().is_err());
        assert_eq!("ZH".parse::<Lang>().unwrap(), Lang::Zh);
        assert!("fr".parse::<Lang>().is_err());
    }

    #[test]
    fn test_load_catalog() {
        let path = temp_dir().join("ride_core_test_catalog.json");
        let json = r#"[
            {
                "name": { "en": "Meow Core Train", "zh": "喵核小火车" },
                "category": { "en": "Family Ride", "zh": "家庭游乐设备" },
                "height": { "en": "3 m", "zh": "3米" },
                "footprint": { "en": "L20M*W8M", "zh": "长20M*宽8M" },
                "riders": "24",
                "venue_type": "Both",
                "target_audience": "All Ages"
            }
        ]"#;
        fs::write(&path, json).unwrap();

        let items = load_catalog(&path).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].venue_type, Some(VenueType::Both));
        assert_eq!(items[0].target_audience, Some(TargetAudience::AllAges));
        assert_eq!(items[0].status, ProductStatus::New);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_catalog_errors() {
        let missing = load_catalog(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert_eq!(missing.error_code(), "FILE_ERROR");

        let path = temp_dir().join("ride_core_test_bad_catalog.json");
        fs::write(&path, "{ not a catalog").unwrap();
        let bad = load_catalog(&path).unwrap_err();
        assert_eq!(bad.error_code(), "SERIALIZATION_ERROR");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_prepare_catalog() {
        let prepared = prepare_catalog(vec![sample_item()]);
        assert_eq!(prepared.len(), 1);
        assert_eq!(prepared[0].main_category(), MainCategory::FamilyRides);
        assert_eq!(prepared[0].category.sub_category, "other-family");
    }
}
