use phf::phf_map;
use serde::Deserialize;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

/// Label table of one language. Months are ordered January first, weekdays
/// Sunday first.
#[derive(Debug, PartialEq, Eq)]
pub struct Translation {
    pub name: &'static str,
    pub title: &'static str,
    pub months: [&'static str; 12],
    pub weekdays: [&'static str; 7],
    pub current_year: &'static str,
    pub language: &'static str,
}

const EN: Translation = Translation {
    name: "English",
    title: "One Page Calendar",
    months: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    weekdays: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    current_year: "Current Year",
    language: "Language",
};

const ZH: Translation = Translation {
    name: "中文",
    title: "单页日历",
    months: [
        "一月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月",
        "十二月",
    ],
    weekdays: ["周日", "周一", "周二", "周三", "周四", "周五", "周六"],
    current_year: "当前年份",
    language: "语言",
};

const MS: Translation = Translation {
    name: "Melayu",
    title: "Kalendar Satu Halaman",
    months: [
        "Jan", "Feb", "Mac", "Apr", "Mei", "Jun", "Jul", "Ogo", "Sep", "Okt", "Nov", "Dis",
    ],
    weekdays: ["Ahd", "Isn", "Sel", "Rab", "Kha", "Jum", "Sab"],
    current_year: "Tahun Semasa",
    language: "Bahasa",
};

const VI: Translation = Translation {
    name: "Tiếng Việt",
    title: "Lịch Một Trang",
    months: [
        "Th1", "Th2", "Th3", "Th4", "Th5", "Th6", "Th7", "Th8", "Th9", "Th10", "Th11", "Th12",
    ],
    weekdays: ["CN", "T2", "T3", "T4", "T5", "T6", "T7"],
    current_year: "Năm Hiện Tại",
    language: "Ngôn Ngữ",
};

// Accepted spellings on the command line and in config files.
static LANGUAGE_NAMES: phf::Map<&'static str, Language> = phf_map! {
    "en" => Language::En,
    "english" => Language::En,
    "zh" => Language::Zh,
    "chinese" => Language::Zh,
    "中文" => Language::Zh,
    "ms" => Language::Ms,
    "malay" => Language::Ms,
    "melayu" => Language::Ms,
    "vi" => Language::Vi,
    "vietnamese" => Language::Vi,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Language {
    En,
    Zh,
    Ms,
    Vi,
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Zh, Language::Ms, Language::Vi];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
            Language::Ms => "ms",
            Language::Vi => "vi",
        }
    }

    pub fn translation(&self) -> &'static Translation {
        match self {
            Language::En => &EN,
            Language::Zh => &ZH,
            Language::Ms => &MS,
            Language::Vi => &VI,
        }
    }

    /// The language following `self` in selector order, wrapping around.
    pub fn next(&self) -> Language {
        let idx = Self::ALL.iter().position(|l| l == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LANGUAGE_NAMES
            .get(s.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| Error::new(ErrorKind::UnknownLanguage, &format!("'{}'", s)))
    }
}

impl TryFrom<String> for Language {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_codes_and_names() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("ZH".parse::<Language>().unwrap(), Language::Zh);
        assert_eq!(" Melayu ".parse::<Language>().unwrap(), Language::Ms);
        assert_eq!("中文".parse::<Language>().unwrap(), Language::Zh);
        assert_eq!("vietnamese".parse::<Language>().unwrap(), Language::Vi);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn cycle_visits_every_language() {
        let mut lang = Language::En;
        let mut seen = vec![];
        for _ in 0..Language::ALL.len() {
            seen.push(lang);
            lang = lang.next();
        }
        assert_eq!(lang, Language::En);
        assert_eq!(seen, Language::ALL.to_vec());
    }

    #[test]
    fn tables_are_complete() {
        for lang in Language::ALL.iter() {
            let t = lang.translation();
            assert!(t.months.iter().all(|m| !m.is_empty()));
            assert!(t.weekdays.iter().all(|w| !w.is_empty()));
            assert!(!t.title.is_empty());
            assert_eq!(lang.code().parse::<Language>().unwrap(), *lang);
        }
    }
}
