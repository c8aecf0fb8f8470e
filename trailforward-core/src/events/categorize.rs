//! Partitioning of event records into upcoming and past.

use chrono::{DateTime, Utc};

use crate::event::EventRecord;

/// Which side of the reference instant a record falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    Upcoming,
    Past,
}

impl Partition {
    /// `date >= now` is upcoming, anything earlier is past.
    pub fn of(date: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if date >= now {
            Partition::Upcoming
        } else {
            Partition::Past
        }
    }
}

/// Records split around a reference instant, each side ascending by date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedView {
    pub upcoming: Vec<EventRecord>,
    pub past: Vec<EventRecord>,
}

impl CategorizedView {
    pub fn len(&self) -> usize {
        self.upcoming.len() + self.past.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.past.is_empty()
    }

    pub fn partition(&self, partition: Partition) -> &[EventRecord] {
        match partition {
            Partition::Upcoming => &self.upcoming,
            Partition::Past => &self.past,
        }
    }

    /// Returns the partition currently holding `id`.
    pub fn locate(&self, id: i64) -> Option<Partition> {
        if self.upcoming.iter().any(|e| e.id == id) {
            Some(Partition::Upcoming)
        } else if self.past.iter().any(|e| e.id == id) {
            Some(Partition::Past)
        } else {
            None
        }
    }

    /// Remove a record by id, keeping the order of the rest.
    pub fn remove(&mut self, id: i64) -> Option<(Partition, EventRecord)> {
        let partition = self.locate(id)?;
        let list = match partition {
            Partition::Upcoming => &mut self.upcoming,
            Partition::Past => &mut self.past,
        };
        let pos = list.iter().position(|e| e.id == id)?;
        Some((partition, list.remove(pos)))
    }
}

/// Sort `records` by date and split them around `now`.
///
/// An absent record set is treated as empty. The sort is stable, so records
/// sharing a date keep their input order within their partition.
pub fn categorize(records: Option<Vec<EventRecord>>, now: DateTime<Utc>) -> CategorizedView {
    let mut records = records.unwrap_or_default();
    records.sort_by_key(|e| e.date);

    let (upcoming, past) = records
        .into_iter()
        .partition(|e| Partition::of(e.date, now) == Partition::Upcoming);

    CategorizedView { upcoming, past }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn event(id: i64, date: DateTime<Utc>) -> EventRecord {
        EventRecord {
            id,
            name: format!("Event {id}"),
            date,
            location: "Town hall".to_string(),
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn ids(events: &[EventRecord]) -> Vec<i64> {
        events.iter().map(|e| e.id).collect()
    }

    fn mixed_records() -> Vec<EventRecord> {
        vec![
            event(1, ymd(2031, 4, 2)),
            event(2, ymd(2019, 8, 15)),
            event(3, ymd(2024, 1, 1)),
            event(4, ymd(2023, 12, 31)),
            event(5, ymd(2031, 4, 2)),
            event(6, ymd(2026, 7, 4)),
            event(7, ymd(2019, 8, 15)),
        ]
    }

    #[test]
    fn test_categorize_splits_past_and_upcoming() {
        let records = vec![event(1, ymd(2020, 1, 1)), event(2, ymd(2099, 1, 1))];

        let view = categorize(Some(records), ymd(2024, 1, 1));

        assert_eq!(ids(&view.upcoming), vec![2]);
        assert_eq!(ids(&view.past), vec![1]);
    }

    #[test]
    fn test_categorize_absent_and_empty_input() {
        let now = ymd(2024, 1, 1);
        assert!(categorize(None, now).is_empty());
        assert!(categorize(Some(Vec::new()), now).is_empty());
    }

    #[test]
    fn test_categorize_boundary_is_inclusive_for_upcoming() {
        let now = ymd(2024, 1, 1);
        let records = vec![
            event(1, now),
            event(2, now - Duration::seconds(1)),
            event(3, now + Duration::seconds(1)),
        ];

        let view = categorize(Some(records), now);

        assert_eq!(ids(&view.upcoming), vec![1, 3]);
        assert_eq!(ids(&view.past), vec![2]);
    }

    #[test]
    fn test_categorize_keeps_every_record_exactly_once() {
        let records = mixed_records();
        let view = categorize(Some(records.clone()), ymd(2024, 1, 1));

        assert_eq!(view.len(), records.len());
        let mut seen: Vec<i64> = ids(&view.upcoming);
        seen.extend(ids(&view.past));
        seen.sort();
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_categorize_orders_each_side_and_is_stable() {
        let now = ymd(2024, 1, 1);
        let view = categorize(Some(mixed_records()), now);

        for pair in view.upcoming.windows(2).chain(view.past.windows(2)) {
            assert!(pair[0].date <= pair[1].date, "{} after {}", pair[0], pair[1]);
        }
        assert!(view.upcoming.iter().all(|e| e.date >= now));
        assert!(view.past.iter().all(|e| e.date < now));

        // Same-date records keep input order: 1 before 5, 2 before 7
        assert_eq!(ids(&view.upcoming), vec![3, 6, 1, 5]);
        assert_eq!(ids(&view.past), vec![2, 7, 4]);
    }

    #[test]
    fn test_categorize_is_idempotent() {
        let now = ymd(2024, 1, 1);
        let first = categorize(Some(mixed_records()), now);
        let second = categorize(Some(mixed_records()), now);
        assert_eq!(first, second);

        let mut recombined = first.upcoming.clone();
        recombined.extend(first.past.clone());
        assert_eq!(categorize(Some(recombined), now), first);
    }

    #[test]
    fn test_view_remove_by_id() {
        let mut view = categorize(Some(mixed_records()), ymd(2024, 1, 1));

        let (partition, removed) = view.remove(6).unwrap();
        assert_eq!(partition, Partition::Upcoming);
        assert_eq!(removed.id, 6);
        assert_eq!(ids(&view.upcoming), vec![3, 1, 5]);

        assert!(view.remove(6).is_none());
        assert_eq!(view.locate(4), Some(Partition::Past));
    }
}
