//! Job conditions and their surcharge policies

use super::Category;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Flat fee charged for manual subtitles, in Rupiah
pub const SUBTITLE_FLAT_FEE: i64 = 25_000;

/// A single condition that changes the fee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Condition {
    /// Tight deadline
    Rush,
    /// Editor has to source stock assets
    NoAssets,
    /// Motion graphics, effects
    Complex,
    /// Manual subtitles
    Subtitles,
    /// Raw/source files handed over to the client
    Buyout,
}

/// How a condition changes the fee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surcharge {
    /// Fraction of the subtotal (0.30 = +30%)
    Percent(Decimal),
    /// Fixed amount in Rupiah
    Flat(i64),
}

impl Condition {
    /// All conditions in display order
    pub const ALL: [Condition; 5] = [
        Condition::Rush,
        Condition::NoAssets,
        Condition::Complex,
        Condition::Subtitles,
        Condition::Buyout,
    ];

    /// Surcharge policy of this condition
    pub fn surcharge(&self) -> Surcharge {
        match self {
            Condition::Rush => Surcharge::Percent(dec!(0.30)),
            Condition::NoAssets => Surcharge::Percent(dec!(0.15)),
            Condition::Complex => Surcharge::Percent(dec!(0.40)),
            Condition::Subtitles => Surcharge::Flat(SUBTITLE_FLAT_FEE),
            Condition::Buyout => Surcharge::Percent(dec!(0.50)),
        }
    }

    /// Whether this condition may be charged for the given category.
    ///
    /// Only rush applies to rough cuts.
    pub fn applies_to(&self, category: Category) -> bool {
        match self {
            Condition::Rush => true,
            Condition::NoAssets | Condition::Complex | Condition::Subtitles | Condition::Buyout => {
                category.is_full_edit()
            }
        }
    }

    /// Tag stored on a saved project
    pub fn tag(&self) -> &'static str {
        match self {
            Condition::Rush => "Rush",
            Condition::NoAssets => "Cari Aset",
            Condition::Complex => "Advance",
            Condition::Subtitles => "Subtitle",
            Condition::Buyout => "Buyout",
        }
    }
}

/// The five independent condition toggles of a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConditionSet {
    pub rush: bool,
    pub no_assets: bool,
    pub complex: bool,
    pub subtitles: bool,
    pub buyout: bool,
}

impl ConditionSet {
    /// Whether the toggle for `condition` is on
    pub fn is_set(&self, condition: Condition) -> bool {
        match condition {
            Condition::Rush => self.rush,
            Condition::NoAssets => self.no_assets,
            Condition::Complex => self.complex,
            Condition::Subtitles => self.subtitles,
            Condition::Buyout => self.buyout,
        }
    }

    /// Return a copy with `condition` switched to `on`
    pub fn with(mut self, condition: Condition, on: bool) -> Self {
        match condition {
            Condition::Rush => self.rush = on,
            Condition::NoAssets => self.no_assets = on,
            Condition::Complex => self.complex = on,
            Condition::Subtitles => self.subtitles = on,
            Condition::Buyout => self.buyout = on,
        }
        self
    }

    /// Conditions that are switched on and chargeable for `category`.
    ///
    /// Toggles that do not apply to the category are dropped here, whatever
    /// the caller sent.
    pub fn applied(&self, category: Category) -> impl Iterator<Item = Condition> + '_ {
        Condition::ALL
            .into_iter()
            .filter(move |c| self.is_set(*c) && c.applies_to(category))
    }

    /// Sum of the percentage surcharges applied for `category`
    pub fn multiplier_rate(&self, category: Category) -> Decimal {
        self.applied(category)
            .filter_map(|c| match c.surcharge() {
                Surcharge::Percent(p) => Some(p),
                Surcharge::Flat(_) => None,
            })
            .sum()
    }

    /// Sum of the flat surcharges applied for `category`
    pub fn flat_addons(&self, category: Category) -> i64 {
        self.applied(category)
            .filter_map(|c| match c.surcharge() {
                Surcharge::Flat(amount) => Some(amount),
                Surcharge::Percent(_) => None,
            })
            .sum()
    }

    /// Project tags for the applied conditions, in display order
    pub fn tags(&self, category: Category) -> Vec<String> {
        self.applied(category).map(|c| c.tag().to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_on() -> ConditionSet {
        Condition::ALL
            .into_iter()
            .fold(ConditionSet::default(), |set, c| set.with(c, true))
    }

    #[test]
    fn test_rough_cut_only_takes_rush() {
        let applied: Vec<_> = all_on().applied(Category::RoughVideo).collect();
        assert_eq!(applied, vec![Condition::Rush]);
        assert_eq!(all_on().multiplier_rate(Category::RoughAudio), dec!(0.30));
        assert_eq!(all_on().flat_addons(Category::RoughAudio), 0);
    }

    #[test]
    fn test_full_edit_takes_everything() {
        let set = all_on();
        assert_eq!(set.multiplier_rate(Category::FullEdit), dec!(1.35));
        assert_eq!(set.flat_addons(Category::FullEdit), SUBTITLE_FLAT_FEE);
    }

    #[test]
    fn test_tags_follow_applied_conditions() {
        let set = ConditionSet::default()
            .with(Condition::Rush, true)
            .with(Condition::NoAssets, true)
            .with(Condition::Subtitles, true);

        assert_eq!(
            set.tags(Category::FullEdit),
            vec!["Rush", "Cari Aset", "Subtitle"]
        );
        assert_eq!(set.tags(Category::RoughVideo), vec!["Rush"]);
    }

    #[test]
    fn test_missing_fields_default_to_off() {
        let set: ConditionSet = serde_json::from_str(r#"{"rush": true}"#).unwrap();
        assert!(set.rush);
        assert!(!set.no_assets);
        assert!(!set.buyout);

        let set: ConditionSet = serde_json::from_str(r#"{"noAssets": true}"#).unwrap();
        assert!(set.no_assets);
    }
}
