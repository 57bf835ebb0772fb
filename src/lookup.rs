// src/lookup.rs
//
// The "current lookup" slot shared between the UI thread and the fetch worker.
// At most one lookup is in flight; a second `begin` while searching is refused.

use crate::{
    character::CharacterRecord,
    core::{net::CharacterQuery, sanitize::normalize_ws, validate_input},
    error::Result,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LookupState {
    #[default]
    Idle,
    Searching(CharacterQuery),
    Found(CharacterRecord),
    Failed(String),
}

#[derive(Debug, Default)]
pub struct LookupSession {
    state: LookupState,
}

impl LookupSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.state, LookupState::Searching(_))
    }

    pub fn character(&self) -> Option<&CharacterRecord> {
        match &self.state {
            LookupState::Found(c) => Some(c),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LookupState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Enter `Searching`, dropping any previous character or error.
    /// Returns false (and changes nothing) if a lookup is already running.
    pub fn begin(&mut self, query: CharacterQuery) -> bool {
        if self.is_searching() {
            logd!("Lookup: begin refused, already searching");
            return false;
        }
        logf!("Lookup: Searching {}-{}-{}", query.region, query.realm, query.name);
        self.state = LookupState::Searching(query);
        true
    }

    /// Settle the in-flight lookup. Ignored when nothing is in flight.
    pub fn finish(&mut self, outcome: Result<CharacterRecord>) {
        if !self.is_searching() {
            logd!("Lookup: finish without a pending search, ignoring");
            return;
        }
        self.state = match outcome {
            Ok(character) => {
                logf!("Lookup: Found {} ({})", character.name, character.class);
                LookupState::Found(character)
            }
            Err(e) => {
                loge!("Lookup: Failed: {}", e);
                LookupState::Failed(e.to_string())
            }
        };
    }
}

/// Validate the raw form fields into a query. Nothing touches the network
/// unless this succeeds. Realm whitespace is collapsed ("Argent  Dawn ").
pub fn prepare_query(region: &str, realm: &str, name: &str) -> Result<CharacterQuery> {
    validate_input(region, realm, name)?;
    Ok(CharacterQuery::new(region.trim(), normalize_ws(realm), name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn q() -> CharacterQuery {
        CharacterQuery::new("us", "Stormrage", "Thrall")
    }

    #[test]
    fn single_in_flight() {
        let mut s = LookupSession::new();
        assert!(s.begin(q()));
        assert!(!s.begin(q()));
        assert!(s.is_searching());
    }

    #[test]
    fn failure_then_new_search_clears_error() {
        let mut s = LookupSession::new();
        s.begin(q());
        s.finish(Err(Error::NotFound));
        assert!(s.error().is_some());
        assert!(s.character().is_none());

        assert!(s.begin(q()));
        assert!(s.error().is_none());
        assert_eq!(s.state(), &LookupState::Searching(q()));
    }

    #[test]
    fn stray_finish_is_ignored() {
        let mut s = LookupSession::new();
        s.finish(Ok(CharacterRecord::default()));
        assert_eq!(s.state(), &LookupState::Idle);
    }

    #[test]
    fn prepare_tidies_realm() {
        let q = prepare_query(" eu", "  Argent   Dawn ", "Jaina").unwrap();
        assert_eq!(q, CharacterQuery::new("eu", "Argent Dawn", "Jaina"));
    }

    #[test]
    fn prepare_rejects_before_network() {
        let err = prepare_query("us", "Stormrage", "ab1").unwrap_err();
        assert_eq!(err.to_string(), "Character name can only contain letters");
    }
}
