//! Self-or-admin access rule

use profilegate_domain::Identity;

/// Decides whether one identity may view or modify another's record.
///
/// Both arguments are resolved records; callers must handle a failed lookup
/// before asking the guard.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessGuard;

impl AccessGuard {
    /// `true` when `acting` is an admin or is `target` itself.
    pub fn authorize(acting: &Identity, target: &Identity) -> bool {
        acting.is_admin || acting.id == target.id
    }
}
