//! Configuration structures for batch consolidation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supplier brand a document set belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Brand {
    /// Maruti Suzuki invoice cum packing list annexures.
    #[default]
    MarutiSuzuki,
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Brand::MarutiSuzuki => write!(f, "Maruti Suzuki"),
        }
    }
}

/// Container types offered for consolidated shipments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerType {
    /// 40-foot high cube.
    #[default]
    #[serde(rename = "40HC")]
    HighCube40,

    /// 40-foot standard.
    #[serde(rename = "4'STD")]
    Standard40,

    #[serde(rename = "Tipo 3")]
    Type3,

    #[serde(rename = "Tipo 4")]
    Type4,
}

impl fmt::Display for ContainerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerType::HighCube40 => write!(f, "40HC"),
            ContainerType::Standard40 => write!(f, "4'STD"),
            ContainerType::Type3 => write!(f, "Tipo 3"),
            ContainerType::Type4 => write!(f, "Tipo 4"),
        }
    }
}

/// Settings stamped onto every record of a consolidated workbook.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsolidationOptions {
    /// Brand the source documents belong to.
    pub brand: Brand,

    /// Transport document label written to the `DT` column.
    pub label: String,

    /// Container type written to the `Tipo de Contenedor` column.
    pub container_type: ContainerType,

    /// Container identifier written to the `Contenedor` column.
    pub container_id: String,
}

impl Default for ConsolidationOptions {
    fn default() -> Self {
        Self {
            brand: Brand::default(),
            label: "Numero de DT".to_string(),
            container_type: ContainerType::default(),
            container_id: "Contenedor por defecto".to_string(),
        }
    }
}
