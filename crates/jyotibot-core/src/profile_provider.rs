//! ProfileProvider trait definition.
//!
//! Read-only access to the persisted profile, injected into the controller
//! so payload construction is testable without a filesystem. The file-backed
//! implementation lives in `jyotibot-infra`.

use jyotibot_types::error::ProfileError;
use jyotibot_types::profile::Profile;

/// Loads the persisted profile, if any.
///
/// `Ok(None)` is the normal "nothing saved yet" case. Implementations
/// degrade an unreadable record to `Ok(None)` where they can; `Err` is
/// reserved for genuine storage failures, which the controller also treats
/// as an absent profile.
pub trait ProfileProvider: Send + Sync {
    fn load(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<Profile>, ProfileError>> + Send;
}
