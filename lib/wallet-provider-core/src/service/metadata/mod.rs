use std::sync::Arc;

use crate::config::core_config::CoreConfig;
use crate::provider::key_algorithm::SharedSigningMaterial;

pub mod dto;
pub mod service;


#[derive(Clone)]
pub struct MetadataService {
    signing_material: SharedSigningMaterial,
    config: Arc<CoreConfig>,
}

impl MetadataService {
    pub(crate) fn new(signing_material: SharedSigningMaterial, config: Arc<CoreConfig>) -> Self {
        Self {
            signing_material,
            config,
        }
    }
}
