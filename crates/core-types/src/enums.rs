use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// How a calendar date is rendered as a sales-by-date label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum DateLabelFormat {
    /// `1/1/2024`, the en-US short date.
    #[default]
    MonthDayYear,
    /// `01/01/2024`, the en-GB / en-GH short date.
    DayMonthYear,
    /// `2024-01-01`
    Iso,
}

impl DateLabelFormat {
    /// Renders `date` as a label in this format.
    pub fn label(&self, date: NaiveDate) -> String {
        match self {
            DateLabelFormat::MonthDayYear => {
                format!("{}/{}/{}", date.month(), date.day(), date.year())
            }
            DateLabelFormat::DayMonthYear => {
                format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
            }
            DateLabelFormat::Iso => date.format("%Y-%m-%d").to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
    Other,
}

impl Gender {
    /// Interprets a free-text gender field; anything unrecognised is `Other`.
    pub fn from_field(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("female") {
            Gender::Female
        } else if raw.eq_ignore_ascii_case("male") {
            Gender::Male
        } else {
            Gender::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_format() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(DateLabelFormat::MonthDayYear.label(date), "1/1/2024");
        assert_eq!(DateLabelFormat::DayMonthYear.label(date), "01/01/2024");
        assert_eq!(DateLabelFormat::Iso.label(date), "2024-01-01");

        let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(DateLabelFormat::MonthDayYear.label(date), "12/31/2023");
        assert_eq!(DateLabelFormat::DayMonthYear.label(date), "31/12/2023");
    }

    #[test]
    fn format_names_are_snake_case() {
        let format: DateLabelFormat = serde_json::from_str(r#""day_month_year""#).unwrap();
        assert_eq!(format, DateLabelFormat::DayMonthYear);
    }

    #[test]
    fn gender_is_case_insensitive() {
        assert_eq!(Gender::from_field("female"), Gender::Female);
        assert_eq!(Gender::from_field(" Male "), Gender::Male);
        assert_eq!(Gender::from_field("prefer not to say"), Gender::Other);
    }
}
