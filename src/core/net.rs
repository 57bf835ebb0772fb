// src/core/net.rs
//
// Raider.IO profile lookup. One blocking GET per call; no retry, no timeout.

use std::time::Duration;

use reqwest::{StatusCode, blocking::Client};

use crate::{
    character::CharacterRecord,
    config::consts::{API_BASE, PROFILE_FIELDS, USER_AGENT},
    error::{Error, Result},
};

/// The three lookup fields, already validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterQuery {
    pub region: String,
    pub realm: String,
    pub name: String,
}

impl CharacterQuery {
    pub fn new(region: impl Into<String>, realm: impl Into<String>, name: impl Into<String>) -> Self {
        Self { region: region.into(), realm: realm.into(), name: name.into() }
    }

    pub fn params(&self) -> [(&'static str, &str); 4] {
        [
            ("region", self.region.as_str()),
            ("realm", self.realm.as_str()),
            ("name", self.name.as_str()),
            ("fields", PROFILE_FIELDS),
        ]
    }
}

pub struct ProfileClient {
    http: Client,
    base_url: String,
}

impl ProfileClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE)
    }

    /// Point the client at a different profile endpoint (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()?;
        Ok(Self { http, base_url: base_url.into() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn fetch(&self, query: &CharacterQuery) -> Result<CharacterRecord> {
        logf!("Fetch: GET {} region={} realm={} name={}",
            self.base_url, query.region, query.realm, query.name);

        let resp = self.http.get(&self.base_url).query(&query.params()).send()?;

        let status = resp.status();
        if let Some(err) = status_error(status) {
            loge!("Fetch: {} → {}", status, err);
            return Err(err);
        }

        let character: CharacterRecord = resp.json()?;
        logf!("Fetch: OK {} ({}) {}-{}",
            character.name, character.class, character.region, character.realm);
        Ok(character)
    }

    /// Raw bytes of an asset URL (avatar thumbnails). Same single-attempt rules.
    pub fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        if let Some(err) = status_error(status) {
            logd!("Fetch: asset {} → {}", url, status);
            return Err(err);
        }
        Ok(resp.bytes()?.to_vec())
    }
}

/// Map a non-success status to the matching lookup error.
pub fn status_error(status: StatusCode) -> Option<Error> {
    if status.is_success() {
        return None;
    }
    if status == StatusCode::NOT_FOUND {
        return Some(Error::NotFound);
    }
    Some(Error::Api {
        status: status.as_u16(),
        text: s!(status.canonical_reason().unwrap_or("")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_maps_to_none() {
        assert!(status_error(StatusCode::OK).is_none());
        assert!(status_error(StatusCode::NO_CONTENT).is_none());
    }

    #[test]
    fn not_found_has_fixed_message() {
        let err = status_error(StatusCode::NOT_FOUND).unwrap();
        assert!(matches!(err, Error::NotFound));
        assert_eq!(err.to_string(),
            "Character not found. Please check the region, realm, and character name.");
    }

    #[test]
    fn other_statuses_carry_code_and_text() {
        let err = status_error(StatusCode::BAD_REQUEST).unwrap();
        assert_eq!(err.to_string(), "API Error: 400 - Bad Request");

        let err = status_error(StatusCode::SERVICE_UNAVAILABLE).unwrap();
        match err {
            Error::Api { status, text } => {
                assert_eq!(status, 503);
                assert_eq!(text, "Service Unavailable");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn query_params_include_fields() {
        let q = CharacterQuery::new("us", "Stormrage", "Thrall");
        let p = q.params();
        assert_eq!(p[0], ("region", "us"));
        assert_eq!(p[3], ("fields", "mythic_plus_scores_by_season:current,gear,guild"));
    }
}
