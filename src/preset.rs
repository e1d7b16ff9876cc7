//! 차량 프리셋 카탈로그. `{ "ice": [...], "ev": [...] }` 형식의 JSON.
//! 값은 참고용 예시이며 실제 가격/연비는 판매처 자료로 확인해야 한다.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::input::VehicleInput;
use crate::vehicle::VehicleKind;

const BUILT_IN: &str = include_str!("../presets/vehicles.json");

#[derive(Debug, Error)]
pub enum PresetError {
    #[error("preset file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("preset JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// `ice` 목록에 EV가 들어있는 등 목록과 type이 다름
    #[error("preset '{id}' is listed under {list} but declares type {actual}")]
    KindMismatch {
        id: String,
        list: VehicleKind,
        actual: VehicleKind,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetCatalog {
    #[serde(default)]
    pub ice: Vec<VehicleInput>,
    #[serde(default)]
    pub ev: Vec<VehicleInput>,
}

impl PresetCatalog {
    /// 바이너리에 포함된 기본 카탈로그.
    pub fn built_in() -> Result<Self, PresetError> {
        Self::from_json(BUILT_IN)
    }

    pub fn from_json(src: &str) -> Result<Self, PresetError> {
        let catalog: PresetCatalog = serde_json::from_str(src)?;
        catalog.check_lists()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self, PresetError> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        tracing::info!(path = %path.display(), count = catalog.len(), "preset catalog loaded");
        Ok(catalog)
    }

    /// 외부 파일이 지정되어 있으면 읽고, 실패하면 기본 카탈로그로 폴백한다.
    pub fn load_or_built_in(path: Option<&Path>) -> Result<Self, PresetError> {
        if let Some(path) = path {
            match Self::load(path) {
                Ok(catalog) => return Ok(catalog),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "using built-in presets")
                }
            }
        }
        Self::built_in()
    }

    fn check_lists(&self) -> Result<(), PresetError> {
        for (list, items) in [(VehicleKind::Ice, &self.ice), (VehicleKind::Ev, &self.ev)] {
            if let Some(bad) = items.iter().find(|v| v.kind() != list) {
                return Err(PresetError::KindMismatch {
                    id: bad.id().to_string(),
                    list,
                    actual: bad.kind(),
                });
            }
        }
        Ok(())
    }

    pub fn for_kind(&self, kind: VehicleKind) -> &[VehicleInput] {
        match kind {
            VehicleKind::Ice => &self.ice,
            VehicleKind::Ev => &self.ev,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &VehicleInput> {
        self.ice.iter().chain(self.ev.iter())
    }

    pub fn find(&self, id: &str) -> Option<&VehicleInput> {
        self.iter().find(|v| v.id().eq_ignore_ascii_case(id))
    }

    pub fn len(&self) -> usize {
        self.ice.len() + self.ev.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
