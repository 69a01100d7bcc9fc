// ── Integrations ──
//
// The only entity the user can change. Toggles are local: nothing is sent
// back to the backend, so the list diverges from server truth until the
// next fetch replaces it.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationEntry {
    pub name: String,
    pub enabled: bool,
}

/// Integration entries in backend order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntegrationList {
    entries: Vec<IntegrationEntry>,
}

impl IntegrationList {
    pub fn new(entries: Vec<IntegrationEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[IntegrationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&IntegrationEntry> {
        self.entries.get(index)
    }

    /// Flip the entry at `index` and return its new state.
    ///
    /// Every other entry is left untouched.
    pub fn toggle(&mut self, index: usize) -> Result<bool, CoreError> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(CoreError::InvalidIndex { index, len })?;
        entry.enabled = !entry.enabled;
        Ok(entry.enabled)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> IntegrationList {
        IntegrationList::new(vec![
            IntegrationEntry {
                name: "Slack".into(),
                enabled: true,
            },
            IntegrationEntry {
                name: "Zapier".into(),
                enabled: false,
            },
            IntegrationEntry {
                name: "HubSpot".into(),
                enabled: false,
            },
        ])
    }

    #[test]
    fn toggle_flips_only_the_target() {
        let before = sample();
        let mut after = before.clone();

        assert!(after.toggle(1).unwrap());

        assert_eq!(after.get(0), before.get(0));
        assert_eq!(after.get(2), before.get(2));
        assert_eq!(after.get(1).unwrap().name, "Zapier");
        assert!(after.get(1).unwrap().enabled);
    }

    #[test]
    fn toggle_twice_restores() {
        let mut list = sample();
        list.toggle(0).unwrap();
        list.toggle(0).unwrap();
        assert_eq!(list, sample());
    }

    #[test]
    fn toggle_out_of_range_is_an_error() {
        let mut list = sample();
        let err = list.toggle(3).unwrap_err();
        assert!(matches!(err, CoreError::InvalidIndex { index: 3, len: 3 }));
        assert_eq!(list, sample());
    }
}
