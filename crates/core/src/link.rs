//! Generic "link to anything" references.
//!
//! Banners and carousel items may point at a page, an event, a person, or a
//! house team. The reference is stored as a (`kind`, `id`) column pair and
//! resolved here to the target's canonical API path.

use crate::error::CoreError;
use crate::types::DbId;

/// A resolved polymorphic link target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Page(DbId),
    Event(DbId),
    Person(DbId),
    HouseTeam(DbId),
}

pub fn page_path(id: DbId) -> String {
    format!("/api/v1/pages/{id}")
}

/// Events carry their own path template, distinct from the generic
/// `/{resource}/{id}` catalog rule.
pub fn event_path(id: DbId) -> String {
    format!("/api/v1/events/{id}")
}

pub fn person_path(id: DbId) -> String {
    format!("/api/v1/people/{id}")
}

pub fn house_team_path(id: DbId) -> String {
    format!("/api/v1/house-teams/{id}")
}

pub fn ape_class_path(id: DbId) -> String {
    format!("/api/v1/classes/{id}")
}

impl LinkTarget {
    /// Reconstruct a target from its stored discriminator and id.
    ///
    /// An unknown discriminator means the row was written by something that
    /// does not understand the schema; that is an integrity failure, not a
    /// missing link.
    pub fn from_parts(kind: &str, id: DbId) -> Result<Self, CoreError> {
        match kind {
            "page" => Ok(LinkTarget::Page(id)),
            "event" => Ok(LinkTarget::Event(id)),
            "person" => Ok(LinkTarget::Person(id)),
            "house_team" => Ok(LinkTarget::HouseTeam(id)),
            other => Err(CoreError::Integrity(format!(
                "unknown link kind '{other}' for target {id}"
            ))),
        }
    }

    /// The discriminator persisted alongside the target id.
    pub fn kind(&self) -> &'static str {
        match self {
            LinkTarget::Page(_) => "page",
            LinkTarget::Event(_) => "event",
            LinkTarget::Person(_) => "person",
            LinkTarget::HouseTeam(_) => "house_team",
        }
    }

    pub fn id(&self) -> DbId {
        match self {
            LinkTarget::Page(id)
            | LinkTarget::Event(id)
            | LinkTarget::Person(id)
            | LinkTarget::HouseTeam(id) => *id,
        }
    }

    /// Canonical API path for the target, dispatched on the discriminator.
    pub fn api_path(&self) -> String {
        match self {
            LinkTarget::Page(id) => page_path(*id),
            LinkTarget::Event(id) => event_path(*id),
            LinkTarget::Person(id) => person_path(*id),
            LinkTarget::HouseTeam(id) => house_team_path(*id),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::error::CoreError;

    #[test]
    fn round_trips_through_parts() {
        let target = LinkTarget::from_parts("event", 7).unwrap();
        assert_eq!(target, LinkTarget::Event(7));
        assert_eq!(target.kind(), "event");
        assert_eq!(target.id(), 7);
    }

    #[test]
    fn dispatches_to_per_kind_paths() {
        assert_eq!(LinkTarget::Page(3).api_path(), "/api/v1/pages/3");
        assert_eq!(LinkTarget::Event(4).api_path(), "/api/v1/events/4");
        assert_eq!(LinkTarget::Person(5).api_path(), "/api/v1/people/5");
        assert_eq!(LinkTarget::HouseTeam(6).api_path(), "/api/v1/house-teams/6");
    }

    #[test]
    fn unknown_kind_is_an_integrity_error() {
        assert_matches!(
            LinkTarget::from_parts("blog_post", 1),
            Err(CoreError::Integrity(_))
        );
    }
}
