//! Visibility and ownership rules for projects and everything under them.
//!
//! Every check is a pure function of the acting user (or none) and a
//! snapshot of the project. Entries and comments inherit the rules of the
//! project they belong to, so callers always evaluate against the parent
//! project.

use crate::error::CoreError;
use crate::types::DbId;

/// The user on whose behalf an operation runs.
///
/// Passed explicitly into every domain operation; an anonymous actor is a
/// visitor without a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Actor {
    user_id: Option<DbId>,
}

impl Actor {
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    pub fn user(user_id: DbId) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    pub fn user_id(&self) -> Option<DbId> {
        self.user_id
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// True when the actor is the given user. Always false for anonymous.
    pub fn is(&self, user_id: DbId) -> bool {
        self.user_id == Some(user_id)
    }
}

/// The parts of a project that access decisions depend on.
pub trait ProjectScope {
    fn project_id(&self) -> DbId;
    fn owner_id(&self) -> DbId;
    fn is_public(&self) -> bool;
}

/// Public projects are readable by anyone; private ones only by the owner.
pub fn can_read(actor: Actor, project: &impl ProjectScope) -> bool {
    project.is_public() || actor.is(project.owner_id())
}

/// Only the owner may write, regardless of visibility.
pub fn can_write(actor: Actor, project: &impl ProjectScope) -> bool {
    actor.is(project.owner_id())
}

/// Any signed-in user who can see the project may comment on it.
pub fn can_comment(actor: Actor, project: &impl ProjectScope) -> bool {
    actor.is_authenticated() && can_read(actor, project)
}

/// Fails with `NotFound` (not `Forbidden`) when the project is hidden from
/// the actor.
pub fn ensure_readable(actor: Actor, project: &impl ProjectScope) -> Result<(), CoreError> {
    if can_read(actor, project) {
        Ok(())
    } else {
        Err(CoreError::NotFound {
            entity: "Project",
            id: project.project_id(),
        })
    }
}

pub fn ensure_writable(actor: Actor, project: &impl ProjectScope) -> Result<(), CoreError> {
    if can_write(actor, project) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(
            "Only the project owner can modify this project".into(),
        ))
    }
}

pub fn ensure_commentable(actor: Actor, project: &impl ProjectScope) -> Result<(), CoreError> {
    if can_comment(actor, project) {
        Ok(())
    } else if !actor.is_authenticated() {
        Err(CoreError::Forbidden("You must be signed in to comment".into()))
    } else {
        Err(CoreError::Forbidden(
            "You cannot comment on this project".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    struct Snapshot {
        owner_id: DbId,
        is_public: bool,
    }

    impl ProjectScope for Snapshot {
        fn project_id(&self) -> DbId {
            99
        }
        fn owner_id(&self) -> DbId {
            self.owner_id
        }
        fn is_public(&self) -> bool {
            self.is_public
        }
    }

    const OWNER: DbId = 1;
    const OTHER: DbId = 2;

    fn public() -> Snapshot {
        Snapshot {
            owner_id: OWNER,
            is_public: true,
        }
    }

    fn private() -> Snapshot {
        Snapshot {
            owner_id: OWNER,
            is_public: false,
        }
    }

    #[test]
    fn test_read_rules() {
        assert!(can_read(Actor::anonymous(), &public()));
        assert!(can_read(Actor::user(OTHER), &public()));
        assert!(can_read(Actor::user(OWNER), &private()));
        assert!(!can_read(Actor::user(OTHER), &private()));
        assert!(!can_read(Actor::anonymous(), &private()));
    }

    #[test]
    fn test_write_is_owner_only_regardless_of_visibility() {
        for project in [public(), private()] {
            assert!(can_write(Actor::user(OWNER), &project));
            assert!(!can_write(Actor::user(OTHER), &project));
            assert!(!can_write(Actor::anonymous(), &project));
        }
    }

    #[test]
    fn test_comment_requires_authentication_and_visibility() {
        assert!(can_comment(Actor::user(OTHER), &public()));
        assert!(can_comment(Actor::user(OWNER), &private()));
        assert!(!can_comment(Actor::user(OTHER), &private()));
        assert!(!can_comment(Actor::anonymous(), &public()));
    }

    #[test]
    fn test_hidden_project_reads_as_not_found() {
        let err = ensure_readable(Actor::anonymous(), &private()).unwrap_err();
        assert_matches!(
            err,
            CoreError::NotFound {
                entity: "Project",
                id: 99
            }
        );
    }

    #[test]
    fn test_non_owner_write_is_forbidden() {
        let err = ensure_writable(Actor::user(OTHER), &public()).unwrap_err();
        assert_matches!(err, CoreError::Forbidden(_));
    }

    #[test]
    fn test_anonymous_comment_is_forbidden() {
        let err = ensure_commentable(Actor::anonymous(), &public()).unwrap_err();
        assert_matches!(err, CoreError::Forbidden(msg) if msg.contains("signed in"));
    }
}
