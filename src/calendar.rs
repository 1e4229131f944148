use crate::error::{PlannerError, PlannerResult};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Maps plan days onto calendar dates, skipping rest weekdays and blocked
/// dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyCalendar {
    blocked_dates: HashSet<NaiveDate>,
    rest_days: HashSet<Weekday>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyCalendarConfig {
    study_days: Vec<Weekday>,
    #[serde(default)]
    blocked_dates: Vec<NaiveDate>,
}

impl Default for StudyCalendar {
    fn default() -> Self {
        Self {
            blocked_dates: HashSet::new(),
            rest_days: HashSet::new(),
        }
    }
}

impl StudyCalendar {
    const ALL_WEEKDAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    pub fn custom<I, J>(study_days: I, blocked_dates: J) -> PlannerResult<Self>
    where
        I: IntoIterator<Item = Weekday>,
        J: IntoIterator<Item = NaiveDate>,
    {
        let config = StudyCalendarConfig::new(study_days, blocked_dates)?;
        Self::from_config(&config)
    }

    pub fn from_config(config: &StudyCalendarConfig) -> PlannerResult<Self> {
        let study_set: HashSet<Weekday> = config.study_days.iter().copied().collect();
        if study_set.is_empty() {
            return Err(PlannerError::Config(
                "study calendar requires at least one study day".into(),
            ));
        }
        let rest_days = Self::ALL_WEEKDAYS
            .into_iter()
            .filter(|day| !study_set.contains(day))
            .collect();

        Ok(Self {
            blocked_dates: config.blocked_dates.iter().copied().collect(),
            rest_days,
        })
    }

    pub fn is_available(&self, date: NaiveDate) -> bool {
        !self.blocked_dates.contains(&date) && !self.rest_days.contains(&date.weekday())
    }

    /// First available date on or after `from`, or `None` past the end of the
    /// representable calendar.
    pub fn first_available(&self, from: NaiveDate) -> Option<NaiveDate> {
        let mut current = from;
        while !self.is_available(current) {
            current = current.checked_add_days(Days::new(1))?;
        }
        Some(current)
    }

    /// First available date strictly after `from`.
    pub fn next_available(&self, from: NaiveDate) -> Option<NaiveDate> {
        self.first_available(from.checked_add_days(Days::new(1))?)
    }

    /// Dates for plan days `1..=count`, starting at the first available date
    /// on or after `start`.
    pub fn dates_for_days(&self, start: NaiveDate, count: usize) -> PlannerResult<Vec<NaiveDate>> {
        let mut dates = Vec::with_capacity(count);
        if count == 0 {
            return Ok(dates);
        }
        let out_of_range = || PlannerError::DateOutOfRange { start, days: count };

        let mut current = self.first_available(start).ok_or_else(out_of_range)?;
        dates.push(current);
        while dates.len() < count {
            current = self.next_available(current).ok_or_else(out_of_range)?;
            dates.push(current);
        }
        Ok(dates)
    }
}

impl StudyCalendarConfig {
    pub fn new<I, J>(study_days: I, blocked_dates: J) -> PlannerResult<Self>
    where
        I: IntoIterator<Item = Weekday>,
        J: IntoIterator<Item = NaiveDate>,
    {
        let mut study: Vec<Weekday> = study_days.into_iter().collect();
        if study.is_empty() {
            return Err(PlannerError::Config(
                "study calendar requires at least one study day".into(),
            ));
        }
        study.sort_by_key(|wd| wd.num_days_from_monday());
        study.dedup();

        let mut blocked: Vec<NaiveDate> = blocked_dates.into_iter().collect();
        blocked.sort();
        blocked.dedup();

        Ok(Self {
            study_days: study,
            blocked_dates: blocked,
        })
    }

    pub fn study_days(&self) -> &[Weekday] {
        &self.study_days
    }

    pub fn blocked_dates(&self) -> &[NaiveDate] {
        &self.blocked_dates
    }
}

impl Default for StudyCalendarConfig {
    fn default() -> Self {
        StudyCalendarConfig::from(&StudyCalendar::default())
    }
}

impl From<&StudyCalendar> for StudyCalendarConfig {
    fn from(calendar: &StudyCalendar) -> Self {
        let study_days = StudyCalendar::ALL_WEEKDAYS
            .into_iter()
            .filter(|day| !calendar.rest_days.contains(day))
            .collect();

        let mut blocked_dates: Vec<NaiveDate> = calendar.blocked_dates.iter().copied().collect();
        blocked_dates.sort();

        Self {
            study_days,
            blocked_dates,
        }
    }
}
