use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    /// 1-based, counted since the log was last cleared.
    pub number: usize,
    pub input: String,
    pub title: String,
    pub recorded_at: DateTime<Utc>,
}

/// Bounded in-memory log of processed inputs. Oldest entries are evicted
/// once `max_entries` is reached.
#[derive(Debug)]
pub struct SessionHistory {
    entries: VecDeque<HistoryEntry>,
    max_entries: usize,
    next_number: usize,
}

impl SessionHistory {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: max_entries.max(1),
            next_number: 1,
        }
    }

    pub fn record(&mut self, input: impl Into<String>, title: impl Into<String>) -> HistoryEntry {
        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            number: self.next_number,
            input: input.into(),
            title: title.into(),
            recorded_at: Utc::now(),
        };
        self.next_number += 1;

        while self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry.clone());

        entry
    }

    /// Newest first.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.iter().rev().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry and restarts numbering. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        self.next_number = 1;
        removed
    }
}
