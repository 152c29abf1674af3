use std::path::{Path, PathBuf};

use figment::Figment;
#[cfg(feature = "config_env")]
use figment::providers::Env;
#[cfg(feature = "config_json")]
use figment::providers::Json;
#[cfg(feature = "config_yaml")]
use figment::providers::Yaml;
use figment::providers::{Data, Format};
use secrecy::SecretString;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_with::{DurationSeconds, serde_as};
use time::Duration;
use url::Url;

use super::ConfigParsingError;
use crate::model::attestation::{AttackPotentialResistance, CertificationInformation, WscdType};
use crate::provider::key_algorithm::SigningAlgorithm;

pub const ENV_PREFIX: &str = "WP_";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppCustomConfigSerdeDTO<Custom> {
    #[serde(default)]
    app: Custom,
}

#[derive(Debug, Clone)]
pub struct AppConfig<Custom> {
    pub core: CoreConfig,
    pub app: Custom,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreConfig {
    #[serde(default = "default_client_id")]
    pub client_id: String,
    pub issuer: IssuerConfig,
    #[serde(default)]
    pub signing_key: SigningKeyConfig,
    #[serde(default)]
    pub challenge: ChallengeConfig,
    #[serde(default)]
    pub platform_key_attestation_validation: PlatformKeyAttestationValidationConfig,
    pub wallet_information: WalletInformationConfig,
    #[serde(default)]
    pub wallet_instance_attestation: ClientAttestationConfig,
    #[serde(default)]
    pub wallet_application_attestation: ClientAttestationConfig,
    #[serde(default)]
    pub wallet_unit_attestation: WalletUnitAttestationConfig,
    #[serde(default)]
    pub token_status_list_service: Option<TokenStatusListServiceConfig>,
}

fn default_client_id() -> String {
    "wallet-dev".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuerConfig {
    pub public_url: Url,
    pub name: String,
}

impl IssuerConfig {
    /// Public URL without the trailing slash added by URL normalization
    pub fn identifier(&self) -> String {
        self.public_url.as_str().trim_end_matches('/').to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SigningKeyConfig {
    #[default]
    GenerateRandom,
    #[serde(rename_all = "camelCase")]
    LoadFromFile {
        private_key_file: PathBuf,
        #[serde(default)]
        certificate_chain_file: Option<PathBuf>,
        algorithm: SigningAlgorithm,
    },
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChallengeConfig {
    pub length: usize,
    #[serde_as(as = "DurationSeconds<i64>")]
    pub validity: Duration,
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            length: 128,
            validity: Duration::minutes(5),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlatformKeyAttestationValidationConfig {
    #[default]
    Disabled,
    Enabled {
        #[serde(default)]
        android: AndroidKeyAttestationConfig,
        #[serde(default)]
        ios: IosKeyAttestationConfig,
    },
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AndroidKeyAttestationConfig {
    pub applications: Vec<AndroidApplicationConfig>,
    pub trusted_roots: Vec<String>,
    pub strong_box_required: bool,
    pub unlocked_bootloader_allowed: bool,
    pub rollback_resistance_required: bool,
    pub leaf_certificate_validity_ignored: bool,
    pub hardware_attestation_enabled: bool,
    pub software_attestation_enabled: bool,
    #[serde_as(as = "DurationSeconds<i64>")]
    pub verification_skew: Duration,
}

impl Default for AndroidKeyAttestationConfig {
    fn default() -> Self {
        Self {
            applications: vec![],
            trusted_roots: vec![GOOGLE_HARDWARE_ATTESTATION_ROOT.to_string()],
            strong_box_required: false,
            unlocked_bootloader_allowed: false,
            rollback_resistance_required: false,
            leaf_certificate_validity_ignored: false,
            hardware_attestation_enabled: true,
            software_attestation_enabled: false,
            verification_skew: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidApplicationConfig {
    pub package_name: String,
    /// Base64url encoded SHA-256 digests of the app signing certificates
    pub signing_certificate_digests: Vec<String>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IosKeyAttestationConfig {
    pub applications: Vec<IosApplicationConfig>,
    pub trusted_roots: Vec<String>,
    #[serde_as(as = "DurationSeconds<i64>")]
    pub attestation_statement_validity_skew: Duration,
}

impl Default for IosKeyAttestationConfig {
    fn default() -> Self {
        Self {
            applications: vec![],
            trusted_roots: vec![APPLE_APP_ATTESTATION_ROOT.to_string()],
            attestation_statement_validity_skew: Duration::minutes(5),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IosApplicationConfig {
    pub team: String,
    pub bundle: String,
    pub environment: IosEnvironment,
}

impl IosApplicationConfig {
    pub fn app_id(&self) -> String {
        format!("{}.{}", self.team, self.bundle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum IosEnvironment {
    Production,
    Sandbox,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletInformationConfig {
    pub general_information: GeneralInformationConfig,
    pub wallet_secure_cryptographic_device_information: WscdInformationConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralInformationConfig {
    pub provider: String,
    pub id: String,
    pub version: String,
    pub certification: CertificationInformation,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WscdInformationConfig {
    #[serde(default)]
    pub r#type: Option<WscdType>,
    pub certification: CertificationInformation,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientAttestationConfig {
    #[serde_as(as = "DurationSeconds<i64>")]
    pub validity: Duration,
    pub wallet_name: Option<String>,
    pub wallet_link: Option<Url>,
}

impl Default for ClientAttestationConfig {
    fn default() -> Self {
        Self {
            validity: Duration::hours(24),
            wallet_name: None,
            wallet_link: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalletUnitAttestationConfig {
    pub validity: WalletUnitValidityConfig,
    pub key_storage: Option<Vec<AttackPotentialResistance>>,
    pub user_authentication: Option<Vec<AttackPotentialResistance>>,
    pub certification: Option<Url>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalletUnitValidityConfig {
    #[serde_as(as = "DurationSeconds<i64>")]
    pub minimum: Duration,
    #[serde_as(as = "DurationSeconds<i64>")]
    pub maximum: Duration,
}

impl Default for WalletUnitValidityConfig {
    fn default() -> Self {
        Self {
            minimum: Duration::days(31),
            maximum: Duration::days(62),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenStatusListServiceConfig {
    pub service_url: Url,
    pub api_key: SecretString,
}

pub enum InputFormat {
    #[cfg(feature = "config_yaml")]
    Yaml(Data<Yaml>),
    #[cfg(feature = "config_json")]
    Json(Data<Json>),
}

impl InputFormat {
    #[cfg(feature = "config_yaml")]
    pub fn yaml_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Yaml(Yaml::file(p))
    }

    #[cfg(feature = "config_yaml")]
    pub fn yaml_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Yaml(Yaml::string(s.as_ref()))
    }

    #[cfg(feature = "config_json")]
    pub fn json_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Json(Json::file(p))
    }
}

impl<Custom> AppConfig<Custom>
where
    Custom: DeserializeOwned + Default,
{
    pub fn from_files(files: &[impl AsRef<Path>]) -> Result<Self, ConfigParsingError> {
        let mut inputs: Vec<InputFormat> = Vec::with_capacity(files.len());

        for path in files {
            #[cfg(feature = "config_yaml")]
            if path
                .as_ref()
                .extension()
                .is_some_and(|ext| ext == "yml" || ext == "yaml")
            {
                inputs.push(InputFormat::yaml_file(path));
                continue;
            }

            #[cfg(feature = "config_json")]
            if path.as_ref().extension() == Some("json".as_ref()) {
                inputs.push(InputFormat::json_file(path));
                continue;
            }

            return Err(ConfigParsingError::GeneralParsingError(format!(
                "Unsupported file or missing file extension: {:?}",
                path.as_ref().to_str()
            )));
        }

        AppConfig::parse(inputs)
    }

    #[cfg(feature = "config_yaml")]
    pub fn from_yaml(
        configs: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, ConfigParsingError> {
        let inputs = configs.into_iter().map(InputFormat::yaml_str);
        AppConfig::parse(inputs)
    }

    pub fn parse(
        inputs: impl IntoIterator<Item = InputFormat>,
    ) -> Result<Self, ConfigParsingError> {
        let mut figment = Figment::new();

        for data in inputs {
            figment = match data {
                #[cfg(feature = "config_yaml")]
                InputFormat::Yaml(content) => figment.merge(content),
                #[cfg(feature = "config_json")]
                InputFormat::Json(content) => figment.merge(content),
            };
        }

        #[cfg(feature = "config_env")]
        {
            figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(false));
        }

        let core = figment
            .extract_inner::<CoreConfig>("core")
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;
        core.validate()?;

        let custom = figment
            .extract::<AppCustomConfigSerdeDTO<Custom>>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;

        Ok(Self {
            core,
            app: custom.app,
        })
    }
}

// https://developer.android.com/privacy-and-security/security-key-attestation#root_certificate
pub const GOOGLE_HARDWARE_ATTESTATION_ROOT: &str = "-----BEGIN CERTIFICATE-----
MIIFHDCCAwSgAwIBAgIJAPHBcqaZ6vUdMA0GCSqGSIb3DQEBCwUAMBsxGTAXBgNV
BAUTEGY5MjAwOWU4NTNiNmIwNDUwHhcNMjIwMzIwMTgwNzQ4WhcNNDIwMzE1MTgw
NzQ4WjAbMRkwFwYDVQQFExBmOTIwMDllODUzYjZiMDQ1MIICIjANBgkqhkiG9w0B
AQEFAAOCAg8AMIICCgKCAgEAr7bHgiuxpwHsK7Qui8xUFmOr75gvMsd/dTEDDJdS
Sxtf6An7xyqpRR90PL2abxM1dEqlXnf2tqw1Ne4Xwl5jlRfdnJLmN0pTy/4lj4/7
tv0Sk3iiKkypnEUtR6WfMgH0QZfKHM1+di+y9TFRtv6y//0rb+T+W8a9nsNL/ggj
nar86461qO0rOs2cXjp3kOG1FEJ5MVmFmBGtnrKpa73XpXyTqRxB/M0n1n/W9nGq
C4FSYa04T6N5RIZGBN2z2MT5IKGbFlbC8UrW0DxW7AYImQQcHtGl/m00QLVWutHQ
oVJYnFPlXTcHYvASLu+RhhsbDmxMgJJ0mcDpvsC4PjvB+TxywElgS70vE0XmLD+O
JtvsBslHZvPBKCOdT0MS+tgSOIfga+z1Z1g7+DVagf7quvmag8jfPioyKvxnK/Eg
sTUVi2ghzq8wm27ud/mIM7AY2qEORR8Go3TVB4HzWQgpZrt3i5MIlCaY504LzSRi
igHCzAPlHws+W0rB5N+er5/2pJKnfBSDiCiFAVtCLOZ7gLiMm0jhO2B6tUXHI/+M
RPjy02i59lINMRRev56GKtcd9qO/0kUJWdZTdA2XoS82ixPvZtXQpUpuL12ab+9E
aDK8Z4RHJYYfCT3Q5vNAXaiWQ+8PTWm2QgBR/bkwSWc+NpUFgNPN9PvQi8WEg5Um
AGMCAwEAAaNjMGEwHQYDVR0OBBYEFDZh4QB8iAUJUYtEbEf/GkzJ6k8SMB8GA1Ud
IwQYMBaAFDZh4QB8iAUJUYtEbEf/GkzJ6k8SMA8GA1UdEwEB/wQFMAMBAf8wDgYD
VR0PAQH/BAQDAgIEMA0GCSqGSIb3DQEBCwUAA4ICAQB8cMqTllHc8U+qCrOlg3H7
174lmaCsbo/bJ0C17JEgMLb4kvrqsXZs01U3mB/qABg/1t5Pd5AORHARs1hhqGIC
W/nKMav574f9rZN4PC2ZlufGXb7sIdJpGiO9ctRhiLuYuly10JccUZGEHpHSYM2G
tkgYbZba6lsCPYAAP83cyDV+1aOkTf1RCp/lM0PKvmxYN10RYsK631jrleGdcdkx
oSK//mSQbgcWnmAEZrzHoF1/0gso1HZgIn0YLzVhLSA/iXCX4QT2h3J5z3znluKG
1nv8NQdxei2DIIhASWfu804CA96cQKTTlaae2fweqXjdN1/v2nqOhngNyz1361mF
mr4XmaKH/ItTwOe72NI9ZcwS1lVaCvsIkTDCEXdm9rCNPAY10iTunIHFXRh+7KPz
lHGewCq/8TOohBRn0/NNfh7uRslOSZ/xKbN9tMBtw37Z8d2vvnXq/YWdsm1+JLVw
n6yYD/yacNJBlwpddla8eaVMjsF6nBnIgQOf9zKSe06nSTqvgwUHosgOECZJZ1Eu
zbH4yswbt02tKtKEFhx+v+OTge/06V+jGsqTWLsfrOCNLuA8H++z+pUENmpqnnHo
vaI47gC+TNpkgYGkkBT6B/m/U01BuOBBTzhIlMEZq9qkDWuM2cA5kW5V3FJUcfHn
w1IdYIg2Wxg7yHcQZemFQg==
-----END CERTIFICATE-----";

// https://www.apple.com/certificateauthority/Apple_App_Attestation_Root_CA.pem
pub const APPLE_APP_ATTESTATION_ROOT: &str = "-----BEGIN CERTIFICATE-----
MIICITCCAaegAwIBAgIQC/O+DvHN0uD7jG5yH2IXmDAKBggqhkjOPQQDAzBSMSYw
JAYDVQQDDB1BcHBsZSBBcHAgQXR0ZXN0YXRpb24gUm9vdCBDQTETMBEGA1UECgwK
QXBwbGUgSW5jLjETMBEGA1UECAwKQ2FsaWZvcm5pYTAeFw0yMDAzMTgxODMyNTNa
Fw00NTAzMTUwMDAwMDBaMFIxJjAkBgNVBAMMHUFwcGxlIEFwcCBBdHRlc3RhdGlv
biBSb290IENBMRMwEQYDVQQKDApBcHBsZSBJbmMuMRMwEQYDVQQIDApDYWxpZm9y
bmlhMHYwEAYHKoZIzj0CAQYFK4EEACIDYgAERTHhmLW07ATaFQIEVwTtT4dyctdh
NbJhFs/Ii2FdCgAHGbpphY3+d8qjuDngIN3WVhQUBHAoMeQ/cLiP1sOUtgjqK9au
Yen1mMEvRq9Sk3Jm5X8U62H+xTD3FE9TgS41o0IwQDAPBgNVHRMBAf8EBTADAQH/
MB0GA1UdDgQWBBSskRBTM72+aEH/pwyp5frq5eWKoTAOBgNVHQ8BAf8EBAMCAQYw
CgYIKoZIzj0EAwMDaAAwZQIwQgFGnByvsiVbpTKwSga0kP0e8EeDS4+sQmTvb7vn
53O5+FRXgeLhpJ06ysC5PrOyAjEAp5U4xDgEgllF7En3VcE3iexZZtKeYnpqtijV
oyFraWVIyd/dganmrduC1bmTBGwD
-----END CERTIFICATE-----";
