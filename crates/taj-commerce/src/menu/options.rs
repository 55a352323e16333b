//! Options offered by the modal steps.

use crate::i18n::Language;
use crate::ids::CatalogId;
use crate::menu::CatalogEntry;
use serde::{Deserialize, Serialize};

/// Spice level choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpiceLevel {
    Mild,
    Medium,
    Hot,
    ExtraHot,
}

impl SpiceLevel {
    pub const ALL: [SpiceLevel; 4] = [
        SpiceLevel::Mild,
        SpiceLevel::Medium,
        SpiceLevel::Hot,
        SpiceLevel::ExtraHot,
    ];

    /// Value of `data-spice`.
    pub fn code(&self) -> &'static str {
        match self {
            SpiceLevel::Mild => "mild",
            SpiceLevel::Medium => "medium",
            SpiceLevel::Hot => "hot",
            SpiceLevel::ExtraHot => "extra_hot",
        }
    }

    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (SpiceLevel::Mild, Language::English) => "Mild",
            (SpiceLevel::Medium, Language::English) => "Medium",
            (SpiceLevel::Hot, Language::English) => "Hot",
            (SpiceLevel::ExtraHot, Language::English) => "Extra Hot",
            (SpiceLevel::Mild, Language::Japanese) => "甘口",
            (SpiceLevel::Medium, Language::Japanese) => "中辛",
            (SpiceLevel::Hot, Language::Japanese) => "辛口",
            (SpiceLevel::ExtraHot, Language::Japanese) => "激辛",
        }
    }
}

/// Drink choice for set menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Drink {
    MangoLassi,
    PlainLassi,
    MasalaChai,
    Coffee,
    OolongTea,
    Cola,
    OrangeJuice,
    AppleJuice,
}

impl Drink {
    pub const ALL: [Drink; 8] = [
        Drink::MangoLassi,
        Drink::PlainLassi,
        Drink::MasalaChai,
        Drink::Coffee,
        Drink::OolongTea,
        Drink::Cola,
        Drink::OrangeJuice,
        Drink::AppleJuice,
    ];

    /// Value of `data-drink`.
    pub fn code(&self) -> &'static str {
        match self {
            Drink::MangoLassi => "mango_lassi",
            Drink::PlainLassi => "plain_lassi",
            Drink::MasalaChai => "masala_chai",
            Drink::Coffee => "coffee",
            Drink::OolongTea => "oolong_tea",
            Drink::Cola => "cola",
            Drink::OrangeJuice => "orange_juice",
            Drink::AppleJuice => "apple_juice",
        }
    }

    pub fn label(&self, language: Language) -> &'static str {
        match language {
            Language::English => match self {
                Drink::MangoLassi => "Mango Lassi",
                Drink::PlainLassi => "Plain Lassi",
                Drink::MasalaChai => "Masala Chai",
                Drink::Coffee => "Coffee",
                Drink::OolongTea => "Oolong Tea",
                Drink::Cola => "Cola",
                Drink::OrangeJuice => "Orange Juice",
                Drink::AppleJuice => "Apple Juice",
            },
            Language::Japanese => match self {
                Drink::MangoLassi => "マンゴーラッシー",
                Drink::PlainLassi => "ラッシー",
                Drink::MasalaChai => "マサラチャイ",
                Drink::Coffee => "コーヒー",
                Drink::OolongTea => "烏龍茶",
                Drink::Cola => "コーラ",
                Drink::OrangeJuice => "オレンジジュース",
                Drink::AppleJuice => "アップルジュース",
            },
        }
    }

    pub fn is_juice(&self) -> bool {
        matches!(self, Drink::OrangeJuice | Drink::AppleJuice)
    }

    /// Drinks offered with a set: juices only for the kids' set, everything
    /// else for the rest.
    pub fn offered(kids_set: bool) -> Vec<Drink> {
        Drink::ALL
            .into_iter()
            .filter(|d| d.is_juice() == kids_set)
            .collect()
    }
}

/// A curry picked from the catalog list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurryChoice {
    pub id: CatalogId,
    pub name: String,
}

impl CurryChoice {
    pub fn new(id: impl Into<CatalogId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl From<CatalogEntry> for CurryChoice {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
        }
    }
}
