//! Which schemes are shown.
//!
//! The plot area has a fixed number of slots under the clock. Picking a
//! scheme when all slots are full pushes out the one picked longest ago.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::domain::Scheme;

/// Number of scheme plots drawn under the clock
pub const PLOT_SLOTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeSelection {
    selected: VecDeque<Scheme>,
}

impl SchemeSelection {
    /// No scheme selected
    pub fn empty() -> Self {
        Self {
            selected: VecDeque::with_capacity(PLOT_SLOTS),
        }
    }

    /// Select schemes in order, keeping only the last `PLOT_SLOTS`
    pub fn from_schemes<I: IntoIterator<Item = Scheme>>(schemes: I) -> Self {
        let mut selection = Self::empty();
        for scheme in schemes {
            selection.select(scheme);
        }
        selection
    }

    /// Select a scheme, returning the one evicted to make room.
    ///
    /// Selecting a scheme that is already selected changes nothing except a
    /// multilevel level count, which is updated in place.
    pub fn select(&mut self, scheme: Scheme) -> Option<Scheme> {
        if let Some(existing) = self.selected.iter_mut().find(|s| s.same_kind(&scheme)) {
            *existing = scheme;
            return None;
        }
        let evicted = if self.selected.len() == PLOT_SLOTS {
            self.selected.pop_front()
        } else {
            None
        };
        self.selected.push_back(scheme);
        if let Some(old) = evicted {
            log::debug!("selecting {scheme} deselected {old}");
        }
        evicted
    }

    /// Remove a scheme; returns whether it was selected
    pub fn deselect(&mut self, scheme: Scheme) -> bool {
        let before = self.selected.len();
        self.selected.retain(|s| !s.same_kind(&scheme));
        self.selected.len() != before
    }

    /// Checkbox-style toggle
    pub fn set(&mut self, scheme: Scheme, checked: bool) -> Option<Scheme> {
        if checked {
            self.select(scheme)
        } else {
            self.deselect(scheme);
            None
        }
    }

    pub fn is_selected(&self, scheme: Scheme) -> bool {
        self.selected.iter().any(|s| s.same_kind(&scheme))
    }

    /// Selected schemes, oldest first
    pub fn schemes(&self) -> Vec<Scheme> {
        self.selected.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Every slot is filled
    pub fn is_complete(&self) -> bool {
        self.selected.len() == PLOT_SLOTS
    }
}

impl Default for SchemeSelection {
    fn default() -> Self {
        Self::from_schemes([Scheme::Ttl, Scheme::NrzI, Scheme::NrzL])
    }
}
