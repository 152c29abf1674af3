use std::sync::Arc;

use indoc::indoc;
use serde::Deserialize;
use time::OffsetDateTime;
use time::macros::datetime;

use crate::config::core_config::{AppConfig, CoreConfig};
use crate::model::jwk::{JwkMetadata, PublicJwk, PublicJwkEc};
use crate::provider::key_algorithm::{SigningAlgorithm, SigningMaterial};
use crate::util::clock::MockClock;

pub const NOW: OffsetDateTime = datetime!(2025-06-01 12:00 UTC);

#[derive(Debug, Default, Deserialize)]
pub struct CustomConfig {}

pub fn generic_config() -> AppConfig<CustomConfig> {
    let config = indoc! {"
        core:
            clientId: wallet-test
            issuer:
                publicUrl: https://wallet-provider.test/
                name: Test Wallet Provider
            walletInformation:
                generalInformation:
                    provider: Test Provider
                    id: test-wallet
                    version: 1.2.3
                    certification: https://certification.test/wallet
                walletSecureCryptographicDeviceInformation:
                    type: LOCAL_NATIVE
                    certification: https://certification.test/wscd
            walletInstanceAttestation:
                validity: 3600
                walletName: Test Wallet
                walletLink: https://wallet.test/
            walletApplicationAttestation:
                validity: 7200
            walletUnitAttestation:
                validity:
                    minimum: 2678400
                    maximum: 5356800
                keyStorage: [iso_18045_high]
                userAuthentication: [iso_18045_moderate]
                certification: https://certification.test/unit
    "};

    AppConfig::from_yaml([config]).unwrap()
}

pub fn core_config() -> Arc<CoreConfig> {
    Arc::new(generic_config().core)
}

pub fn signing_material() -> Arc<SigningMaterial> {
    Arc::new(SigningMaterial::generate(SigningAlgorithm::Es256))
}

pub fn fixed_clock(now: OffsetDateTime) -> MockClock {
    let mut clock = MockClock::new();
    clock.expect_now_utc().return_const(now);
    clock
}

pub fn dummy_jwk(x: &str) -> PublicJwk {
    PublicJwk::Ec(PublicJwkEc {
        crv: "P-256".to_string(),
        x: x.to_string(),
        y: "y".to_string(),
        metadata: JwkMetadata::default(),
    })
}
