use std::sync::Arc;

use time::OffsetDateTime;

use self::dto::ChallengeClaims;
use self::error::ChallengeValidationFailure;
use crate::config::core_config::ChallengeConfig;
use crate::model::challenge::Challenge;
use crate::proto::jwt::JwsSigner;
use crate::util::clock::Clock;

pub mod dto;
pub mod error;
pub mod service;


pub const CHALLENGE_TYPE: &str = "challenge+jwt";

/// Redemption check of a challenge at a given instant
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait ChallengeValidator: Send + Sync {
    fn validate(
        &self,
        challenge: &Challenge,
        at: OffsetDateTime,
    ) -> Result<(), ChallengeValidationFailure>;
}

#[derive(Clone)]
pub struct ChallengeService {
    signer: JwsSigner<ChallengeClaims>,
    clock: Arc<dyn Clock>,
    config: ChallengeConfig,
}

impl ChallengeService {
    pub(crate) fn new(
        signer: JwsSigner<ChallengeClaims>,
        clock: Arc<dyn Clock>,
        config: ChallengeConfig,
    ) -> Self {
        Self {
            signer,
            clock,
            config,
        }
    }
}

/// Accepts every challenge, used while platform key attestation validation is disabled
pub struct NoopChallengeValidator;

impl ChallengeValidator for NoopChallengeValidator {
    fn validate(
        &self,
        _challenge: &Challenge,
        _at: OffsetDateTime,
    ) -> Result<(), ChallengeValidationFailure> {
        Ok(())
    }
}
