// src/modules/auth/application/domain/authorization.rs
//
// Every role/ownership check in the system funnels through this module.
// It is a pure decision function over (principal, action, resource owner)
// so it can be unit-tested without HTTP or a database.

use std::fmt;

/// The authenticated identity attached to a request, resolved against the
/// current user row (not just the token claims).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i32,
    pub is_superuser: bool,
}

/// What the caller is trying to do to the target resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Read,
    Update,
    Delete,
    Archive,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Read => write!(f, "read"),
            Action::Update => write!(f, "update"),
            Action::Delete => write!(f, "delete"),
            Action::Archive => write!(f, "archive"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessDenied {
    #[error("forbidden")]
    Forbidden,
    #[error("superuser privileges required")]
    SuperuserRequired,
}

/// Decide whether `principal` may perform `action` on a resource whose
/// ownership chain resolves to `resource_owner_id`. Rules, in order:
///
/// 1. a superuser may do anything;
/// 2. a user may act on their own resources;
/// 3. everything else is denied.
///
/// Items resolve ownership through their parent list, so callers pass the
/// list owner's id for item operations.
pub fn authorize(
    principal: &Principal,
    action: Action,
    resource_owner_id: i32,
) -> Result<(), AccessDenied> {
    if principal.is_superuser {
        return Ok(());
    }

    if principal.user_id == resource_owner_id {
        return Ok(());
    }

    tracing::debug!(
        user_id = principal.user_id,
        owner_id = resource_owner_id,
        action = %action,
        "access denied"
    );
    Err(AccessDenied::Forbidden)
}

/// Enumerating all accounts is superuser-only. This is deliberately
/// stricter than the self-access rule: there is no "own slice" of the
/// global user listing.
pub fn authorize_user_listing(principal: &Principal) -> Result<(), AccessDenied> {
    if principal.is_superuser {
        Ok(())
    } else {
        Err(AccessDenied::SuperuserRequired)
    }
}
