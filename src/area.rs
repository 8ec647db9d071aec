//! Coarse linguistic/territorial classification of ISBN registration groups.

use std::fmt;

/// Language or territory area an ISBN registration group belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum LinguisticArea {
    English,
    French,
    German,
    Japanese,
    Russian,
    Chinese,
    Czechoslovakian,
    Indian,
    Norwegian,
    Polish,
    Spanish,
    Brazilian,
    Serbian,
    Danish,
    Italian,
    Korean,
    Netherlandish,
    Swedish,
    /// Non-governmental organizations and EU publications (group 92).
    NgoEu,
    /// Any of the smaller national groups in 600–621 and 950–99972.
    Others,
    Unknown,
}

impl LinguisticArea {
    /// Classify a GS1 prefix and registration group.
    ///
    /// ```
    /// use isbnkit::LinguisticArea;
    ///
    /// assert_eq!(LinguisticArea::classify(978, 4), LinguisticArea::Japanese);
    /// assert_eq!(LinguisticArea::classify(979, 10), LinguisticArea::French);
    /// assert_eq!(LinguisticArea::classify(977, 4), LinguisticArea::Unknown);
    /// ```
    pub fn classify(prefix: u64, group: u64) -> Self {
        use LinguisticArea::*;

        match (prefix, group) {
            (978, 600..=621 | 950..=99972) => Others,
            (978, 0 | 1) => English,
            (978, 2) => French,
            (978, 3) => German,
            (978, 4) => Japanese,
            (978, 5) => Russian,
            (978, 7) => Chinese,
            (978, 80) => Czechoslovakian,
            (978, 81 | 93) => Indian,
            (978, 82) => Norwegian,
            (978, 83) => Polish,
            (978, 84) => Spanish,
            (978, 85) => Brazilian,
            (978, 86) => Serbian,
            (978, 87) => Danish,
            (978, 88) => Italian,
            (978, 89) => Korean,
            (978, 90 | 94) => Netherlandish,
            (978, 91) => Swedish,
            (978, 92) => NgoEu,
            (979, 10) => French,
            (979, 11) => Korean,
            _ => Unknown,
        }
    }

    /// Upper-case tag, e.g. `JAPANESE` or `NGO_EU`.
    pub fn as_str(&self) -> &'static str {
        match self {
            LinguisticArea::English => "ENGLISH",
            LinguisticArea::French => "FRENCH",
            LinguisticArea::German => "GERMAN",
            LinguisticArea::Japanese => "JAPANESE",
            LinguisticArea::Russian => "RUSSIAN",
            LinguisticArea::Chinese => "CHINESE",
            LinguisticArea::Czechoslovakian => "CZECHOSLOVAKIAN",
            LinguisticArea::Indian => "INDIAN",
            LinguisticArea::Norwegian => "NORWEGIAN",
            LinguisticArea::Polish => "POLISH",
            LinguisticArea::Spanish => "SPANISH",
            LinguisticArea::Brazilian => "BRAZILIAN",
            LinguisticArea::Serbian => "SERBIAN",
            LinguisticArea::Danish => "DANISH",
            LinguisticArea::Italian => "ITALIAN",
            LinguisticArea::Korean => "KOREAN",
            LinguisticArea::Netherlandish => "NETHERLANDISH",
            LinguisticArea::Swedish => "SWEDISH",
            LinguisticArea::NgoEu => "NGO_EU",
            LinguisticArea::Others => "OTHERS",
            LinguisticArea::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for LinguisticArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
