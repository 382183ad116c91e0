use std::fmt;

use chrono::{Datelike, Days, Months, NaiveDate};

// ---------------------------------------------------------------------------
// Record – one row of the source table
// ---------------------------------------------------------------------------

/// A single sales transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub category: String,
    pub sub_category: String,
    pub order_date: NaiveDate,
    /// Currency amount.
    pub sales: f64,
    /// Currency amount, negative for loss-making orders.
    pub profit: f64,
}

impl Record {
    pub fn new(
        category: impl Into<String>,
        sub_category: impl Into<String>,
        order_date: NaiveDate,
        sales: f64,
        profit: f64,
    ) -> Self {
        Self {
            category: category.into(),
            sub_category: sub_category.into(),
            order_date,
            sales,
            profit,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// An ordered, immutable sequence of records.
///
/// Filtering never mutates a dataset; it builds a new one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_sales(&self) -> f64 {
        self.records.iter().map(|r| r.sales).sum()
    }

    pub fn total_profit(&self) -> f64 {
        self.records.iter().map(|r| r.profit).sum()
    }

    /// Earliest and latest order date, or `None` for an empty dataset.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.first()?.order_date;
        Some(self.records.iter().fold((first, first), |(lo, hi), r| {
            (lo.min(r.order_date), hi.max(r.order_date))
        }))
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Dataset::from_records(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Month – the time bucket key
// ---------------------------------------------------------------------------

/// A calendar month, represented by its first day.
///
/// A date belongs to the month sharing its year and month number, so days
/// 1 through the last day of the month inclusive map to the same bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NaiveDate);

impl Month {
    /// Bucket key for a date.
    pub fn of(date: NaiveDate) -> Self {
        Month(date - Days::new(u64::from(date.day0())))
    }

    pub fn from_ymd(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Month)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    pub fn last_day(&self) -> NaiveDate {
        self.0
            .checked_add_months(Months::new(1))
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// The following month, `None` past the end of the supported calendar.
    pub fn succ(&self) -> Option<Self> {
        self.0.checked_add_months(Months::new(1)).map(Month)
    }

    /// Months elapsed since year 0; used as the x coordinate in charts.
    pub fn ordinal(&self) -> i32 {
        self.year() * 12 + self.0.month0() as i32
    }

    pub fn from_ordinal(ordinal: i32) -> Option<Self> {
        Month::from_ymd(ordinal.div_euclid(12), ordinal.rem_euclid(12) as u32 + 1)
    }

    /// Every month from `first` to `last` inclusive.
    pub fn range(first: Month, last: Month) -> Vec<Month> {
        std::iter::successors(Some(first), |m| m.succ())
            .take_while(|m| *m <= last)
            .collect()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_buckets_first_and_last_day_together() {
        assert_eq!(Month::of(date(2020, 2, 1)), Month::of(date(2020, 2, 29)));
        assert_ne!(Month::of(date(2020, 2, 29)), Month::of(date(2020, 3, 1)));
        let feb = Month::of(date(2020, 2, 10));
        assert_eq!(feb.first_day(), date(2020, 2, 1));
        assert_eq!(feb.last_day(), date(2020, 2, 29));
        assert_eq!(feb.to_string(), "2020-02");
    }

    #[test]
    fn month_range_crosses_year_boundary() {
        let months = Month::range(
            Month::from_ymd(2019, 11).unwrap(),
            Month::from_ymd(2020, 2).unwrap(),
        );
        let labels: Vec<String> = months.iter().map(|m| m.to_string()).collect();
        assert_eq!(labels, ["2019-11", "2019-12", "2020-01", "2020-02"]);
    }

    #[test]
    fn ordinal_round_trips() {
        let m = Month::from_ymd(2017, 12).unwrap();
        assert_eq!(Month::from_ordinal(m.ordinal()), Some(m));
        assert_eq!(m.succ().unwrap().ordinal(), m.ordinal() + 1);
    }

    #[test]
    fn date_range_spans_unordered_records() {
        let ds = Dataset::from_records(vec![
            Record::new("A", "a", date(2020, 5, 1), 1.0, 0.0),
            Record::new("A", "a", date(2019, 1, 3), 1.0, 0.0),
            Record::new("A", "a", date(2020, 2, 9), 1.0, 0.0),
        ]);
        assert_eq!(ds.date_range(), Some((date(2019, 1, 3), date(2020, 5, 1))));
        assert_eq!(Dataset::default().date_range(), None);
    }
}
