//! # Category Classification
//!
//! Assigns every catalog item to one main category and one sub-category by
//! keyword matching over its bilingual name and category label.
//!
//! Matching runs through [`CATEGORY_RULES`] top to bottom and the first rule
//! whose keywords appear wins. Several rules can match the same text (a
//! "mini train" mentions both a train and a kiddie keyword), so the order of
//! the table is part of the contract: train is checked before the general
//! kiddie rule and resolves the kiddie case itself.
//!
//! ## Example
//!
//! ```rust
//! use ride_core::catalog::{CatalogItem, LocalizedText};
//! use ride_core::categories::{infer_category, MainCategory};
//!
//! let item = CatalogItem::new(
//!     LocalizedText::new("Meow Core Train", ""),
//!     LocalizedText::new("Family Ride", ""),
//! );
//! let assignment = infer_category(&item);
//! assert_eq!(assignment.main_category, MainCategory::FamilyRides);
//! assert_eq!(assignment.sub_category, "train");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogItem, Lang, PreparedItem, TargetAudience};
use crate::errors::RideError;

// ============================================================================
// Main categories
// ============================================================================

/// Top-level navigation category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MainCategory {
    #[serde(rename = "Family Rides")]
    FamilyRides,
    #[serde(rename = "Thrill Rides")]
    ThrillRides,
    #[serde(rename = "Kiddie Rides")]
    KiddieRides,
    #[serde(rename = "Water Rides")]
    WaterRides,
    #[serde(rename = "Bumper Cars")]
    BumperCars,
    #[serde(rename = "VR/Interactive")]
    VrInteractive,
    #[serde(rename = "Custom Solutions")]
    CustomSolutions,
}

impl MainCategory {
    /// All main categories in navigation order
    pub const ALL: [MainCategory; 7] = [
        MainCategory::FamilyRides,
        MainCategory::ThrillRides,
        MainCategory::KiddieRides,
        MainCategory::WaterRides,
        MainCategory::BumperCars,
        MainCategory::VrInteractive,
        MainCategory::CustomSolutions,
    ];

    /// Canonical English label (also the serialized form)
    pub fn label(self) -> &'static str {
        match self {
            MainCategory::FamilyRides => "Family Rides",
            MainCategory::ThrillRides => "Thrill Rides",
            MainCategory::KiddieRides => "Kiddie Rides",
            MainCategory::WaterRides => "Water Rides",
            MainCategory::BumperCars => "Bumper Cars",
            MainCategory::VrInteractive => "VR/Interactive",
            MainCategory::CustomSolutions => "Custom Solutions",
        }
    }

    pub fn localized_label(self, lang: Lang) -> &'static str {
        match lang {
            Lang::En => self.label(),
            Lang::Zh => match self {
                MainCategory::FamilyRides => "家庭游乐设备",
                MainCategory::ThrillRides => "刺激游乐设备",
                MainCategory::KiddieRides => "儿童游乐设备",
                MainCategory::WaterRides => "水上游乐设备",
                MainCategory::BumperCars => "碰碰车",
                MainCategory::VrInteractive => "VR/互动设备",
                MainCategory::CustomSolutions => "定制方案",
            },
        }
    }
}

impl fmt::Display for MainCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the English label in any case, with `-`, `_` or spaces between words
impl FromStr for MainCategory {
    type Err = RideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_label(s);
        MainCategory::ALL
            .into_iter()
            .find(|c| normalize_label(c.label()) == wanted)
            .ok_or_else(|| RideError::invalid_input("category", s, "Unknown main category"))
    }
}

fn normalize_label(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Category and sub-category assigned to a catalog item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryAssignment {
    pub main_category: MainCategory,
    pub sub_category: String,
}

impl CategoryAssignment {
    pub fn new(main_category: MainCategory, sub_category: impl Into<String>) -> Self {
        CategoryAssignment {
            main_category,
            sub_category: sub_category.into(),
        }
    }
}

/// Assignment used when no rule matches
pub const DEFAULT_ASSIGNMENT: (MainCategory, &str) = (MainCategory::FamilyRides, "other-family");

// ============================================================================
// Classification rules
// ============================================================================

/// Text and attributes a rule can look at
#[derive(Debug, Clone)]
pub struct ClassifierInput {
    /// Lowercased name and category in both languages
    pub text: String,
    pub riders: Option<i64>,
    pub target_audience: Option<TargetAudience>,
}

impl ClassifierInput {
    pub fn from_item(item: &CatalogItem) -> Self {
        ClassifierInput {
            text: item.combined_text(),
            riders: item.rider_count(),
            target_audience: item.target_audience,
        }
    }

    /// True if any keyword occurs in the combined text
    pub fn has_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.text.contains(k))
    }
}

/// Secondary keyword test choosing a sub-category inside a rule
#[derive(Debug, Clone, Copy)]
pub struct Refinement {
    pub keywords: &'static [&'static str],
    pub main_category: MainCategory,
    pub sub_category: &'static str,
}

/// One entry of the ordered classification table.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    /// Short name for logging and tests
    pub name: &'static str,
    /// The rule matches when any of these occur in the text
    pub keywords: &'static [&'static str],
    /// Extra non-keyword condition that also triggers the rule
    pub also_when: Option<fn(&ClassifierInput) -> bool>,
    /// Checked in order once the rule matched; first hit decides
    pub refinements: &'static [Refinement],
    /// Assignment when no refinement hits
    pub fallback: (MainCategory, &'static str),
}

impl CategoryRule {
    pub fn matches(&self, input: &ClassifierInput) -> bool {
        input.has_any(self.keywords) || self.also_when.is_some_and(|cond| cond(input))
    }

    pub fn assign(&self, input: &ClassifierInput) -> CategoryAssignment {
        let (main, sub) = self
            .refinements
            .iter()
            .find(|r| input.has_any(r.keywords))
            .map(|r| (r.main_category, r.sub_category))
            .unwrap_or(self.fallback);
        CategoryAssignment::new(main, sub)
    }
}

const fn refine(
    keywords: &'static [&'static str],
    main_category: MainCategory,
    sub_category: &'static str,
) -> Refinement {
    Refinement {
        keywords,
        main_category,
        sub_category,
    }
}

/// Small-capacity rides declared for kids count as kiddie rides even without a keyword
fn small_kids_ride(input: &ClassifierInput) -> bool {
    matches!(input.riders, Some(n) if n <= 2) && input.target_audience == Some(TargetAudience::Kids)
}

use MainCategory::*;

/// Classification rules in priority order.
pub static CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        name: "bumper",
        keywords: &["bumper", "碰碰", "collision", "drift"],
        also_when: None,
        refinements: &[refine(&["racing", "go-kart", "卡丁"], BumperCars, "racing-car")],
        fallback: (BumperCars, "bumper-car"),
    },
    CategoryRule {
        name: "train",
        keywords: &["train", "火车", "railway"],
        also_when: None,
        refinements: &[refine(&["kiddie", "mini", "儿童", "小"], KiddieRides, "kiddie-train")],
        fallback: (FamilyRides, "train"),
    },
    CategoryRule {
        name: "carousel",
        keywords: &["carousel", "旋转木马", "转马", "merry-go-round"],
        also_when: None,
        refinements: &[refine(&["kiddie", "儿童"], KiddieRides, "kiddie-carousel")],
        fallback: (FamilyRides, "carousel"),
    },
    CategoryRule {
        name: "trampoline",
        keywords: &["trampoline", "蹦床", "jumping", "jump"],
        also_when: None,
        refinements: &[],
        fallback: (FamilyRides, "trampoline"),
    },
    CategoryRule {
        name: "ferris-wheel",
        keywords: &["ferris", "wheel", "摩天轮", "观景轮"],
        also_when: None,
        refinements: &[],
        fallback: (FamilyRides, "ferris-wheel"),
    },
    CategoryRule {
        name: "swing",
        keywords: &["swing", "秋千", "pendulum"],
        also_when: None,
        refinements: &[],
        fallback: (FamilyRides, "swing"),
    },
    CategoryRule {
        name: "water",
        keywords: &["water", "水上", "aqua", "漂流", "rafting"],
        also_when: None,
        refinements: &[refine(&["slide", "滑梯"], WaterRides, "water-slide")],
        fallback: (WaterRides, "water-play"),
    },
    CategoryRule {
        name: "thrill",
        keywords: &["thrill", "刺激", "drop", "tower", "coaster", "过山车", "跳楼"],
        also_when: None,
        refinements: &[
            refine(&["drop", "tower", "跳楼"], ThrillRides, "drop-tower"),
            refine(&["coaster", "过山车"], ThrillRides, "roller-coaster"),
        ],
        fallback: (ThrillRides, "spinning"),
    },
    CategoryRule {
        name: "kiddie",
        keywords: &["kiddie", "儿童", "kids", "mini"],
        also_when: Some(small_kids_ride),
        refinements: &[
            refine(&["car", "vehicle", "车"], KiddieRides, "kiddie-vehicle"),
            refine(&["train", "火车"], KiddieRides, "kiddie-train"),
            refine(&["carousel", "旋转木马"], KiddieRides, "kiddie-carousel"),
        ],
        fallback: (KiddieRides, "kiddie-vehicle"),
    },
    CategoryRule {
        name: "vr-interactive",
        keywords: &["vr", "virtual", "interactive", "互动", "游戏"],
        also_when: None,
        refinements: &[refine(&["vr", "virtual"], VrInteractive, "vr-experience")],
        fallback: (VrInteractive, "interactive-games"),
    },
];

/// Classify one input against the rule table.
pub fn classify(input: &ClassifierInput) -> CategoryAssignment {
    match CATEGORY_RULES.iter().find(|rule| rule.matches(input)) {
        Some(rule) => {
            let assignment = rule.assign(input);
            tracing::debug!(rule = rule.name, sub = %assignment.sub_category, "category rule matched");
            assignment
        }
        None => CategoryAssignment::new(DEFAULT_ASSIGNMENT.0, DEFAULT_ASSIGNMENT.1),
    }
}

/// Infer the category of a catalog item from its name and category text.
///
/// Pure and total: the same item always gets the same assignment, and items
/// no rule recognises land in Family Rides / other-family.
pub fn infer_category(item: &CatalogItem) -> CategoryAssignment {
    classify(&ClassifierInput::from_item(item))
}

/// Use the item's explicit category when it has both parts, otherwise infer one.
pub fn apply_category_mapping(item: &CatalogItem) -> CategoryAssignment {
    match (item.main_category, item.sub_category.as_deref()) {
        (Some(main), Some(sub)) if !sub.is_empty() => CategoryAssignment::new(main, sub),
        _ => infer_category(item),
    }
}

/// Count prepared items matching an optional main and sub-category filter.
pub fn count_by_category(
    items: &[PreparedItem],
    main_category: Option<MainCategory>,
    sub_category: Option<&str>,
) -> usize {
    items
        .iter()
        .filter(|p| main_category.map_or(true, |m| p.category.main_category == m))
        .filter(|p| sub_category.map_or(true, |s| p.category.sub_category == s))
        .count()
}

// ============================================================================
// Sub-category directory
// ============================================================================

/// A navigable sub-category with bilingual labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubCategory {
    pub id: &'static str,
    pub name_en: &'static str,
    pub name_zh: &'static str,
    pub description_en: &'static str,
    pub description_zh: &'static str,
}

impl SubCategory {
    pub fn name(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::En => self.name_en,
            Lang::Zh => self.name_zh,
        }
    }

    pub fn description(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::En => self.description_en,
            Lang::Zh => self.description_zh,
        }
    }
}

const fn sub(
    id: &'static str,
    name_en: &'static str,
    name_zh: &'static str,
    description_en: &'static str,
    description_zh: &'static str,
) -> SubCategory {
    SubCategory {
        id,
        name_en,
        name_zh,
        description_en,
        description_zh,
    }
}

const FAMILY_SUBS: &[SubCategory] = &[
    sub("carousel", "Carousel Rides", "旋转木马", "Classic rotating rides perfect for all ages", "适合全年龄的经典旋转设备"),
    sub("swing", "Swing Rides", "秋千设备", "Gentle swinging motion for family entertainment", "温和的摆动运动，适合家庭娱乐"),
    sub("train", "Train Rides", "小火车", "Miniature train rides for themed experiences", "主题体验的迷你火车"),
    sub("ferris-wheel", "Ferris Wheels", "摩天轮", "Iconic observation wheels", "标志性观景轮"),
    sub("trampoline", "Trampoline", "蹦床", "Active play and jumping fun", "活跃游戏和跳跃乐趣"),
    sub("other-family", "Other Family Rides", "其他家庭设备", "Additional family-friendly attractions", "其他家庭友好型设备"),
];

const THRILL_SUBS: &[SubCategory] = &[
    sub("drop-tower", "Drop Towers", "跳楼机", "High-speed vertical drop experiences", "高速垂直下降体验"),
    sub("roller-coaster", "Roller Coasters", "过山车", "High-speed coaster experiences", "高速过山车体验"),
    sub("spinning", "Spinning Rides", "旋转设备", "Dynamic spinning and rotating attractions", "动感旋转设备"),
];

const KIDDIE_SUBS: &[SubCategory] = &[
    sub("kiddie-carousel", "Kiddie Carousel", "儿童旋转木马", "Small-scale carousels for young children", "适合幼儿的小型旋转木马"),
    sub("kiddie-train", "Kiddie Train", "儿童小火车", "Miniature trains designed for kids", "专为儿童设计的迷你火车"),
    sub("kiddie-vehicle", "Kiddie Vehicles", "儿童车辆", "Small vehicles and cars for children", "适合儿童的车辆设备"),
];

const WATER_SUBS: &[SubCategory] = &[
    sub("water-slide", "Water Slides", "水滑梯", "Water-based sliding attractions", "水上滑行设备"),
    sub("water-play", "Water Play Equipment", "水上设备", "Interactive water play features", "互动水上设备"),
];

const BUMPER_SUBS: &[SubCategory] = &[
    sub("bumper-car", "Bumper Cars", "碰碰车", "Classic bumper car attractions", "经典碰碰车设备"),
    sub("racing-car", "Racing Cars", "赛车", "Racing and go-kart experiences", "赛车和卡丁车体验"),
];

const VR_SUBS: &[SubCategory] = &[
    sub("vr-experience", "VR Experiences", "VR体验", "Virtual reality attractions", "虚拟现实设备"),
    sub("interactive-games", "Interactive Games", "互动游戏", "Interactive gaming attractions", "互动游戏设备"),
];

const CUSTOM_SUBS: &[SubCategory] = &[
    sub("custom-design", "Custom Design", "定制设计", "Bespoke ride designs for unique requirements", "满足独特需求的定制设备设计"),
    sub("themed-attractions", "Themed Attractions", "主题设备", "Themed rides matching your brand or concept", "匹配您品牌或概念的主题设备"),
];

/// Sub-categories listed under a main category
pub fn sub_categories(main: MainCategory) -> &'static [SubCategory] {
    match main {
        FamilyRides => FAMILY_SUBS,
        ThrillRides => THRILL_SUBS,
        KiddieRides => KIDDIE_SUBS,
        WaterRides => WATER_SUBS,
        BumperCars => BUMPER_SUBS,
        VrInteractive => VR_SUBS,
        CustomSolutions => CUSTOM_SUBS,
    }
}

/// Sub-category id -> owning main category and entry
static SUB_CATEGORY_INDEX: Lazy<HashMap<&'static str, (MainCategory, &'static SubCategory)>> =
    Lazy::new(|| {
        MainCategory::ALL
            .iter()
            .flat_map(|&main| sub_categories(main).iter().map(move |s| (s.id, (main, s))))
            .collect()
    });

/// Find the main category that lists a sub-category id
pub fn main_category_for(sub_category_id: &str) -> Option<MainCategory> {
    SUB_CATEGORY_INDEX.get(sub_category_id).map(|(main, _)| *main)
}

/// Localized sub-category name, or the main category label for unknown ids
pub fn localized_category_name(main: MainCategory, sub_category_id: &str, lang: Lang) -> &'static str {
    sub_categories(main)
        .iter()
        .find(|s| s.id == sub_category_id)
        .map(|s| s.name(lang))
        .unwrap_or_else(|| main.localized_label(lang))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{prepare_catalog, LocalizedText};

    fn item(name_en: &str, name_zh: &str, category_en: &str) -> CatalogItem {
        CatalogItem::new(
            LocalizedText::new(name_en, name_zh),
            LocalizedText::new(category_en, ""),
        )
    }

    #[test]
    fn test_main_category_from_str() {
        assert_eq!("Thrill Rides".parse::<MainCategory>().unwrap(), MainCategory::ThrillRides);
        assert_eq!("bumper-cars".parse::<MainCategory>().unwrap(), MainCategory::BumperCars);
        assert_eq!("vr/interactive".parse::<MainCategory>().unwrap(), MainCategory::VrInteractive);
        assert!("Roller Coasters".parse::<MainCategory>().is_err());
    }

    fn assigned(name_en: &str, category_en: &str) -> (MainCategory, String) {
        let a = infer_category(&item(name_en, "", category_en));
        (a.main_category, a.sub_category)
    }

    #[test]
    fn test_train_family_ride() {
        assert_eq!(
            assigned("Meow Core Train", "Family Ride"),
            (FamilyRides, "train".to_string())
        );
    }

    #[test]
    fn test_bumper_cars() {
        assert_eq!(assigned("Classic Bumper Car", "Family Ride"), (BumperCars, "bumper-car".to_string()));
        assert_eq!(assigned("Drift Racing Kart", ""), (BumperCars, "racing-car".to_string()));
        assert_eq!(infer_category(&item("", "碰碰车", "")).main_category, BumperCars);
    }

    #[test]
    fn test_train_resolves_kiddie_before_kiddie_rule() {
        assert_eq!(assigned("Mini Train", "Kiddie Ride"), (KiddieRides, "kiddie-train".to_string()));
        // "小" in the Chinese name is a kiddie signal inside the train rule
        let a = infer_category(&item("Forest Express", "森林小火车", ""));
        assert_eq!(a, CategoryAssignment::new(KiddieRides, "kiddie-train"));
    }

    #[test]
    fn test_carousel() {
        assert_eq!(assigned("Grand Carousel", ""), (FamilyRides, "carousel".to_string()));
        assert_eq!(assigned("Kiddie Carousel", ""), (KiddieRides, "kiddie-carousel".to_string()));
    }

    #[test]
    fn test_single_assignment_rules() {
        assert_eq!(assigned("Jumping Star", "").1, "trampoline");
        assert_eq!(assigned("Sky Wheel 30m", "").1, "ferris-wheel");
        assert_eq!(assigned("Pendulum Play - Model 2", "Family Ride").1, "swing");
    }

    #[test]
    fn test_water_rides() {
        assert_eq!(assigned("Aqua Slide", ""), (WaterRides, "water-slide".to_string()));
        assert_eq!(assigned("Rafting Adventure", ""), (WaterRides, "water-play".to_string()));
    }

    #[test]
    fn test_thrill_subcategories() {
        assert_eq!(assigned("Sky Drop", "Thrill Ride"), (ThrillRides, "drop-tower".to_string()));
        assert_eq!(assigned("Family Coaster", ""), (ThrillRides, "roller-coaster".to_string()));
        assert_eq!(assigned("Crazy Spinning", "Thrill Ride"), (ThrillRides, "spinning".to_string()));
        assert_eq!(assigned("Top Spin", "Thrill Ride"), (ThrillRides, "spinning".to_string()));
    }

    #[test]
    fn test_kiddie_rides() {
        assert_eq!(assigned("Kids Racer Car", ""), (KiddieRides, "kiddie-vehicle".to_string()));
        assert_eq!(assigned("Kiddie Bee", ""), (KiddieRides, "kiddie-vehicle".to_string()));
    }

    #[test]
    fn test_small_kids_ride_heuristic() {
        let base = item("Big Eyes Racing", "", "Family Ride").with_riders("2");
        assert_eq!(infer_category(&base).main_category, FamilyRides);

        let kids = base.with_target_audience(TargetAudience::Kids);
        assert_eq!(infer_category(&kids), CategoryAssignment::new(KiddieRides, "kiddie-vehicle"));

        let crowded = kids.with_riders("12");
        assert_eq!(infer_category(&crowded).main_category, FamilyRides);
    }

    #[test]
    fn test_vr_interactive() {
        assert_eq!(assigned("VR Spaceship", ""), (VrInteractive, "vr-experience".to_string()));
        assert_eq!(assigned("Interactive Shooter", ""), (VrInteractive, "interactive-games".to_string()));
    }

    #[test]
    fn test_default_fallback() {
        assert_eq!(assigned("Nuclear energy crisis", "Family Ride"), (FamilyRides, "other-family".to_string()));
        assert_eq!(assigned("", ""), (FamilyRides, "other-family".to_string()));
    }

    #[test]
    fn test_rule_order_is_stable() {
        let names: Vec<&str> = CATEGORY_RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "bumper", "train", "carousel", "trampoline", "ferris-wheel",
                "swing", "water", "thrill", "kiddie", "vr-interactive"
            ]
        );
    }

    #[test]
    fn test_first_match_wins() {
        // bumper outranks water, water outranks thrill
        assert_eq!(assigned("Water Bumper Boat", "").0, BumperCars);
        assert_eq!(assigned("Water Drop Tower", "").0, WaterRides);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let it = item("Thunder Coaster", "雷霆过山车", "Thrill Ride");
        assert_eq!(infer_category(&it), infer_category(&it));
    }

    #[test]
    fn test_explicit_mapping_is_kept() {
        let mut it = item("Meow Core Train", "", "Family Ride");
        it.main_category = Some(CustomSolutions);
        it.sub_category = Some("themed-attractions".to_string());
        assert_eq!(apply_category_mapping(&it), CategoryAssignment::new(CustomSolutions, "themed-attractions"));

        it.sub_category = None;
        assert_eq!(apply_category_mapping(&it).sub_category, "train");
    }

    #[test]
    fn test_every_assignable_sub_category_is_listed() {
        for rule in CATEGORY_RULES {
            let (main, sub) = rule.fallback;
            assert_eq!(main_category_for(sub), Some(main), "fallback {} of {}", sub, rule.name);
            for r in rule.refinements {
                assert_eq!(main_category_for(r.sub_category), Some(r.main_category));
            }
        }
        assert_eq!(main_category_for(DEFAULT_ASSIGNMENT.1), Some(DEFAULT_ASSIGNMENT.0));
        assert_eq!(main_category_for("no-such-id"), None);
    }

    #[test]
    fn test_localized_category_name() {
        assert_eq!(localized_category_name(KiddieRides, "kiddie-train", Lang::En), "Kiddie Train");
        assert_eq!(localized_category_name(KiddieRides, "kiddie-train", Lang::Zh), "儿童小火车");
        assert_eq!(localized_category_name(WaterRides, "unknown", Lang::En), "Water Rides");
        assert_eq!(localized_category_name(WaterRides, "unknown", Lang::Zh), "水上游乐设备");
    }

    #[test]
    fn test_count_by_category() {
        let prepared = prepare_catalog(vec![
            item("Meow Core Train", "", "Family Ride"),
            item("Grand Carousel", "", "Family Ride"),
            item("Sky Drop", "", "Thrill Ride"),
        ]);
        assert_eq!(count_by_category(&prepared, None, None), 3);
        assert_eq!(count_by_category(&prepared, Some(FamilyRides), None), 2);
        assert_eq!(count_by_category(&prepared, Some(FamilyRides), Some("train")), 1);
        assert_eq!(count_by_category(&prepared, Some(CustomSolutions), None), 0);
    }

    #[test]
    fn test_main_category_serialization() {
        let json = serde_json::to_string(&VrInteractive).unwrap();
        assert_eq!(json, "\"VR/Interactive\"");
    }
}
