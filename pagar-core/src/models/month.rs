use serde::{Deserialize, Serialize};

/// Months of the Indian financial year, April through March.
///
/// Declaration order gives the derived `Ord` the financial-year sequence, so
/// a `BTreeMap<Month, _>` iterates April-first. Serialises as the lowercase
/// three-letter month code used throughout the stored records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
    Jan,
    Feb,
    Mar,
}

impl Month {
    /// All twelve months in financial-year order.
    pub const ALL: [Month; 12] = [
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
        Month::Jan,
        Month::Feb,
        Month::Mar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apr => "apr",
            Self::May => "may",
            Self::Jun => "jun",
            Self::Jul => "jul",
            Self::Aug => "aug",
            Self::Sep => "sep",
            Self::Oct => "oct",
            Self::Nov => "nov",
            Self::Dec => "dec",
            Self::Jan => "jan",
            Self::Feb => "feb",
            Self::Mar => "mar",
        }
    }

    /// Parses a month code or English month name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "apr" | "april" => Some(Self::Apr),
            "may" => Some(Self::May),
            "jun" | "june" => Some(Self::Jun),
            "jul" | "july" => Some(Self::Jul),
            "aug" | "august" => Some(Self::Aug),
            "sep" | "september" => Some(Self::Sep),
            "oct" | "october" => Some(Self::Oct),
            "nov" | "november" => Some(Self::Nov),
            "dec" | "december" => Some(Self::Dec),
            "jan" | "january" => Some(Self::Jan),
            "feb" | "february" => Some(Self::Feb),
            "mar" | "march" => Some(Self::Mar),
            _ => None,
        }
    }
}
