//! Profile view/update use case

use std::sync::Arc;

use chrono::SubsecRound;
use profilegate_domain::{
    Identity, IdentityRole, ProfileAction, ProfileError, Result, ServiceConfig,
};
use tracing::{debug, info};

use super::access::AccessGuard;
use super::ports::{Clock, IdentityRepository, SystemClock};
use super::validation::apply_patch;

/// Emit a decision event at `info` when verbose, `debug` otherwise.
macro_rules! decision {
    ($verbose:expr, $($arg:tt)+) => {
        if $verbose {
            info!($($arg)+);
        } else {
            debug!($($arg)+);
        }
    };
}

/// Authorized read/update of a single identity record
pub struct ProfileUpdateService {
    repository: Arc<dyn IdentityRepository>,
    clock: Arc<dyn Clock>,
    config: ServiceConfig,
}

impl ProfileUpdateService {
    /// Create a new service backed by the system clock
    pub fn new(repository: Arc<dyn IdentityRepository>, config: ServiceConfig) -> Self {
        Self { repository, clock: Arc::new(SystemClock), config }
    }

    /// Replace the clock used for the viewed timestamp.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Options the service was built with.
    pub fn config(&self) -> ServiceConfig {
        self.config
    }

    /// Process one request from `acting_id` against `target_id`.
    ///
    /// Order of effects:
    /// 1. both identities are resolved (`RecordNotFound` aborts)
    /// 2. the access rule is checked (`AuthorizationDenied` aborts with no
    ///    side effects)
    /// 3. a non-admin target gets its viewed timestamp set to now, truncated
    ///    to the millisecond precision the stores keep
    /// 4. for an update, the patch is applied only if every present field
    ///    is valid
    /// 5. the target is saved, even when the patch was rejected
    ///
    /// Returns the record as the repository stored it, or `ValidationFailed`
    /// carrying every rejected field. A failed save (including a version
    /// conflict with a concurrent writer) is returned as-is and the working
    /// copy is dropped.
    pub async fn process_request(
        &self,
        acting_id: i64,
        target_id: i64,
        action: ProfileAction,
    ) -> Result<Identity> {
        let verbose = self.config.verbose_logging;
        let kind = action.kind();

        let acting = self.resolve(acting_id, IdentityRole::Acting).await?;
        let mut target = self.resolve(target_id, IdentityRole::Target).await?;

        if !AccessGuard::authorize(&acting, &target) {
            decision!(verbose, acting_id, target_id, %kind, "access denied");
            return Err(ProfileError::AuthorizationDenied { acting_id, target_id });
        }
        decision!(verbose, acting_id, target_id, %kind, "access granted");

        if !target.is_admin {
            let now = self.clock.now().trunc_subsecs(3);
            target.mark_viewed(now);
            decision!(verbose, target_id, viewed_at = %now, "viewed timestamp updated");
        }

        let rejected = match &action {
            ProfileAction::Update(patch) => apply_patch(&mut target, patch).err(),
            ProfileAction::View => None,
        };
        if let Some(errors) = &rejected {
            decision!(verbose, target_id, fields = %errors, "profile patch rejected");
        }

        let saved = self.repository.save(target).await?;
        debug!(identity_id = saved.id, version = saved.version, "identity saved");

        match rejected {
            Some(errors) => Err(ProfileError::ValidationFailed(errors)),
            None => Ok(saved),
        }
    }

    async fn resolve(&self, id: i64, role: IdentityRole) -> Result<Identity> {
        self.repository.find(id).await?.ok_or_else(|| {
            debug!(%role, id, "identity lookup returned no record");
            ProfileError::RecordNotFound { role, id }
        })
    }
}
