use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::NaiveDate;

use crate::core::models::{Event, EventDraft};
use crate::errors::{Error, Result};

/// Ordered event collection.
///
/// After every mutating call the events are ascending by date. Equal dates
/// keep their relative insertion order, and events with unreadable dates
/// trail behind all valid ones.
#[derive(Debug, Default, Clone)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_events(events: Vec<Event>) -> Self {
        let mut store = Self { events };
        store.sort();
        store
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Id of the event shown at 1-based `position` in the list.
    pub fn id_at(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|idx| self.events.get(idx))
            .map(|e| e.id.as_str())
    }

    pub fn query(&self) -> Query<'_> {
        Query::new(self)
    }

    pub fn add(&mut self, draft: EventDraft) -> Result<&Event> {
        let (draft, _) = draft.canonicalize()?;
        let event = Event::from_draft(draft);
        let id = event.id.clone();
        self.events.push(event);
        self.sort();
        self.events
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| Error::Domain(format!("event {id} missing after insert")))
    }

    /// Unknown ids are ignored. The draft is still validated first so a bad
    /// edit never half-applies.
    pub fn edit(&mut self, id: &str, draft: EventDraft) -> Result<()> {
        let (draft, _) = draft.canonicalize()?;
        let Some(event) = self.events.iter_mut().find(|e| e.id == id) else {
            return Ok(());
        };
        event.modify(draft);
        self.sort();
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Option<Event> {
        let idx = self.events.iter().position(|e| e.id == id)?;
        Some(self.events.remove(idx))
    }

    pub fn remove_all(&mut self) {
        self.events.clear();
    }

    /// Bulk insert for generated candidates such as public holidays.
    ///
    /// A candidate is skipped when an event with the same date and the same
    /// name already exists (including ones added earlier in this call), when
    /// its date lies before `today`, or when it fails validation.
    pub fn seed_recurring_set<I>(&mut self, candidates: I, today: NaiveDate) -> usize
    where
        I: IntoIterator<Item = EventDraft>,
    {
        let mut seen: HashSet<(NaiveDate, String)> = self
            .events
            .iter()
            .filter_map(|e| Some((e.calendar_date()?, e.name.clone())))
            .collect();

        let mut inserted = 0;
        for draft in candidates {
            let Ok((draft, date)) = draft.canonicalize() else {
                continue;
            };
            if date < today {
                continue;
            }
            if !seen.insert((date, draft.name.clone())) {
                continue;
            }
            self.events.push(Event::from_draft(draft));
            inserted += 1;
        }

        self.sort();
        inserted
    }

    /// Adopts a complete snapshot (an import), replacing whatever was here.
    pub fn replace_all(&mut self, events: Vec<Event>) {
        self.events = events;
        self.sort();
    }

    fn sort(&mut self) {
        // `sort_by` is stable; ties keep insertion order.
        self.events.sort_by(compare_by_date);
    }
}

fn compare_by_date(a: &Event, b: &Event) -> Ordering {
    match (a.calendar_date(), b.calendar_date()) {
        (Some(da), Some(db)) => da.cmp(&db),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub struct Query<'a> {
    store: &'a EventStore,
    filters: Vec<Box<dyn Fn(&Event) -> bool + 'a>>,
}

impl<'a> Query<'a> {
    fn new(store: &'a EventStore) -> Self {
        Self {
            store,
            filters: Vec::new(),
        }
    }

    pub fn r#where(mut self, pred: impl Fn(&Event) -> bool + 'a) -> Self {
        self.filters.push(Box::new(pred));
        self
    }

    /// Matching events with their 1-based list positions, in store order.
    pub fn collect(self) -> Vec<(usize, &'a Event)> {
        self.store
            .events
            .iter()
            .enumerate()
            .filter(|(_, e)| self.filters.iter().all(|f| f(e)))
            .map(|(idx, e)| (idx + 1, e))
            .collect()
    }

    pub fn exists(self) -> bool {
        self.store
            .events
            .iter()
            .any(|e| self.filters.iter().all(|f| f(e)))
    }
}
