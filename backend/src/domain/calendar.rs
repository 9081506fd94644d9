//! Calendar domain logic for the chore tracker.
//!
//! Lays chores out on a month grid by due date. The grid starts on Sunday,
//! is padded before the first day of the month and after the last day so
//! that it always holds whole weeks. This is a display aid only: nothing
//! here schedules or repeats chores.

use chrono::{Datelike, NaiveDate};
use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use shared::{CalendarDayType, CalendarFocusDate, Chore, ChoreCalendarDay, ChoreCalendarMonth};

use crate::domain::errors::CalendarError;

/// Calendar service that handles month grids and navigation
#[derive(Clone)]
pub struct CalendarService {
    /// Month currently shown; kept in memory only
    focus_date: Arc<Mutex<CalendarFocusDate>>,
}

impl CalendarService {
    /// Create a calendar focused on the current month
    pub fn new() -> Self {
        Self::focused_on(CalendarFocusDate::default())
    }

    pub fn focused_on(focus_date: CalendarFocusDate) -> Self {
        Self {
            focus_date: Arc::new(Mutex::new(focus_date)),
        }
    }

    /// Build the month grid for `month`/`year` from the given chores
    pub fn chore_month(&self, month: u32, year: i32, chores: &[Chore]) -> Result<ChoreCalendarMonth, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }

        let days_in_month = self.days_in_month(month, year);
        let first_day = self.first_day_of_month(month, year)?;
        let mut chores_by_day = self.group_chores_by_day(month, year, chores);

        debug!(
            "Generating chore calendar for {}/{}: {} days, first weekday {}",
            month, year, days_in_month, first_day
        );

        let mut days = Vec::with_capacity(42);
        days.extend((0..first_day).map(|_| padding(CalendarDayType::PaddingBefore)));
        days.extend((1..=days_in_month).map(|day| ChoreCalendarDay {
            day,
            day_type: CalendarDayType::MonthDay,
            chores: chores_by_day.remove(&day).unwrap_or_default(),
        }));
        let trailing = (7 - days.len() % 7) % 7;
        days.extend((0..trailing).map(|_| padding(CalendarDayType::PaddingAfter)));

        Ok(ChoreCalendarMonth {
            month,
            year,
            month_name: self.month_name(month).to_string(),
            first_day_of_week: first_day,
            days,
        })
    }

    /// Grid for the month the calendar is focused on
    pub fn focused_month(&self, chores: &[Chore]) -> Result<ChoreCalendarMonth, CalendarError> {
        let focus = self.focus_date();
        self.chore_month(focus.month, focus.year, chores)
    }

    /// Get the number of days in a given month and year
    pub fn days_in_month(&self, month: u32, year: i32) -> u32 {
        match month {
            2 => {
                if self.is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    pub fn is_leap_year(&self, year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Get the first day of month (0 = Sunday, 1 = Monday, etc.)
    pub fn first_day_of_month(&self, month: u32, year: i32) -> Result<u32, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|date| date.weekday().num_days_from_sunday())
            .ok_or(CalendarError::YearOutOfRange(year))
    }

    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "Invalid Month",
        }
    }

    fn group_chores_by_day(&self, month: u32, year: i32, chores: &[Chore]) -> HashMap<u32, Vec<Chore>> {
        let mut chores_by_day: HashMap<u32, Vec<Chore>> = HashMap::new();

        for chore in chores {
            match chore.due_date() {
                Some(date) if date.month() == month && date.year() == year => {
                    chores_by_day.entry(date.day()).or_default().push(chore.clone());
                }
                Some(_) => {}
                None => debug!("Skipping chore {} with unreadable due date '{}'", chore.id, chore.due_date),
            }
        }

        chores_by_day
    }

    pub fn focus_date(&self) -> CalendarFocusDate {
        *self.focus_date.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_focus_date(&self, month: u32, year: i32) -> Result<CalendarFocusDate, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        let focus = CalendarFocusDate { month, year };
        *self.focus_date.lock().unwrap_or_else(PoisonError::into_inner) = focus;
        Ok(focus)
    }

    /// Move the focus one month forward, rolling over into the next year
    pub fn next_month(&self) -> CalendarFocusDate {
        let mut focus = self.focus_date.lock().unwrap_or_else(PoisonError::into_inner);
        if focus.month == 12 {
            focus.month = 1;
            focus.year += 1;
        } else {
            focus.month += 1;
        }
        *focus
    }

    /// Move the focus one month back, rolling over into the previous year
    pub fn previous_month(&self) -> CalendarFocusDate {
        let mut focus = self.focus_date.lock().unwrap_or_else(PoisonError::into_inner);
        if focus.month == 1 {
            focus.month = 12;
            focus.year -= 1;
        } else {
            focus.month -= 1;
        }
        *focus
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new()
    }
}

fn padding(day_type: CalendarDayType) -> ChoreCalendarDay {
    ChoreCalendarDay {
        day: 0,
        day_type,
        chores: Vec::new(),
    }
}
