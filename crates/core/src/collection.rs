//! Reorderable collection kinds and the public pages that display them.
//!
//! Board members, episodes, projects, and tutorials share one reorder
//! implementation;
//! the kind is data, not a separate code path.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Page paths
// ---------------------------------------------------------------------------

pub const HOME_PAGE: &str = "/";
pub const ADMIN_PAGE: &str = "/admin";
pub const BOARD_PAGE: &str = "/board";
pub const EPISODES_PAGE: &str = "/episodes";
pub const PROJECTS_PAGE: &str = "/projects";
pub const TUTORIALS_PAGE: &str = "/tutorials";

// ---------------------------------------------------------------------------
// CollectionKind
// ---------------------------------------------------------------------------

/// A record kind whose items carry a persisted sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollectionKind {
    BoardMembers,
    Episodes,
    Projects,
    Tutorials,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 4] = [
        Self::BoardMembers,
        Self::Episodes,
        Self::Projects,
        Self::Tutorials,
    ];

    /// Wire-format identifier used in URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BoardMembers => "board-members",
            Self::Episodes => "episodes",
            Self::Projects => "projects",
            Self::Tutorials => "tutorials",
        }
    }

    /// Backing table. Only ever one of these constants, so it is safe to
    /// interpolate into SQL.
    pub fn table(&self) -> &'static str {
        match self {
            Self::BoardMembers => "board_members",
            Self::Episodes => "episodes",
            Self::Projects => "projects",
            Self::Tutorials => "tutorials",
        }
    }

    /// Singular entity name for `NotFound` errors.
    pub fn entity(&self) -> &'static str {
        match self {
            Self::BoardMembers => "BoardMember",
            Self::Episodes => "Episode",
            Self::Projects => "Project",
            Self::Tutorials => "Tutorial",
        }
    }

    /// Lower-case plural for user-facing messages ("Failed to reorder episodes").
    pub fn label(&self) -> &'static str {
        match self {
            Self::BoardMembers => "board members",
            Self::Episodes => "episodes",
            Self::Projects => "projects",
            Self::Tutorials => "tutorials",
        }
    }

    /// The public page listing this collection.
    pub fn public_page(&self) -> &'static str {
        match self {
            Self::BoardMembers => BOARD_PAGE,
            Self::Episodes => EPISODES_PAGE,
            Self::Projects => PROJECTS_PAGE,
            Self::Tutorials => TUTORIALS_PAGE,
        }
    }

    /// Every page whose content changes when this collection is written.
    pub fn affected_paths(&self) -> [&'static str; 3] {
        [self.public_page(), ADMIN_PAGE, HOME_PAGE]
    }
}

impl FromStr for CollectionKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "board-members" => Ok(Self::BoardMembers),
            "episodes" => Ok(Self::Episodes),
            "projects" => Ok(Self::Projects),
            "tutorials" => Ok(Self::Tutorials),
            _ => Err(CoreError::Validation(format!(
                "Invalid collection: '{s}'. Must be one of: board-members, episodes, projects, tutorials"
            ))),
        }
    }
}

impl std::fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_kinds_parse_from_their_wire_name() {
        for kind in CollectionKind::ALL {
            assert_eq!(kind.as_str().parse::<CollectionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_is_a_validation_error() {
        let err = "meetings".parse::<CollectionKind>().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn affected_paths_start_with_the_public_page() {
        assert_eq!(
            CollectionKind::Episodes.affected_paths(),
            [EPISODES_PAGE, ADMIN_PAGE, HOME_PAGE]
        );
        assert_eq!(CollectionKind::BoardMembers.affected_paths()[0], BOARD_PAGE);
        assert_eq!(CollectionKind::Tutorials.affected_paths()[0], TUTORIALS_PAGE);
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&CollectionKind::BoardMembers).unwrap();
        assert_eq!(json, "\"board-members\"");
    }
}
