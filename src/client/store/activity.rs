/// Identifies a user-initiated action for de-duplication.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActionKey {
    InitialLoad,
    RefreshFlights,
    RefreshAirplanes,
    CheckStatus,
    SaveFlight,
    DeleteFlight(String),
    OpenFlight(String),
    LoadCandidates(String),
    CreateBooking(String),
    DeleteBooking(String),
    Transfer(String),
}

#[derive(Clone, Debug, PartialEq)]
struct Running {
    key: ActionKey,
    label: Option<String>,
}

/// Actions with a request in flight.
///
/// An action key can only run once at a time; labelled actions drive the loading overlay.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityTracker {
    running: Vec<Running>,
}

impl ActivityTracker {
    /// Marks `key` as running. Returns `false` without changes if it already is.
    pub fn begin(&mut self, key: ActionKey, label: Option<&str>) -> bool {
        if self.is_running(&key) {
            return false;
        }

        self.running.push(Running {
            key,
            label: label.map(str::to_string),
        });
        true
    }

    pub fn finish(&mut self, key: &ActionKey) {
        self.running.retain(|r| &r.key != key);
    }

    pub fn is_running(&self, key: &ActionKey) -> bool {
        self.running.iter().any(|r| &r.key == key)
    }

    /// Label of the most recently started labelled action, if any is running.
    pub fn label(&self) -> Option<&str> {
        self.running.iter().rev().find_map(|r| r.label.as_deref())
    }

    pub fn is_idle(&self) -> bool {
        self.running.is_empty()
    }
}
