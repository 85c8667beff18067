use chrono::{Datelike, Local, NaiveDate, Weekday};

/// A calendar day used as the ledger's validity key.
///
/// The persisted form is the rendered label, matching the display format
/// the board header uses ("2026年8月30日星期日"). Two stamps compare equal
/// exactly when they denote the same calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayStamp {
    date: NaiveDate,
}

impl DayStamp {
    pub fn today() -> Self {
        Self {
            date: Local::now().date_naive(),
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self { date }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// zh-CN long-date rendering: year, month, day, weekday.
    pub fn label(&self) -> String {
        format!(
            "{}年{}月{}日{}",
            self.date.year(),
            self.date.month(),
            self.date.day(),
            weekday_zh(self.date.weekday())
        )
    }
}

impl std::fmt::Display for DayStamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn weekday_zh(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "星期一",
        Weekday::Tue => "星期二",
        Weekday::Wed => "星期三",
        Weekday::Thu => "星期四",
        Weekday::Fri => "星期五",
        Weekday::Sat => "星期六",
        Weekday::Sun => "星期日",
    }
}
