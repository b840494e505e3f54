//! Typed records produced by annexure normalization.
//!
//! Numeric fields are `Option<Decimal>`: a value the source table left blank
//! or unparseable stays missing instead of collapsing to zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fully normalized packing list line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Derived purchase order number (`CHL<order ref>-24`).
    pub order_number: String,

    /// Supplier material code as it appeared on the item row.
    pub requested_material: String,

    /// Supplier material code actually dispatched. Differs from
    /// `requested_material` when the full code wrapped onto a continuation
    /// row.
    pub dispatched_material: String,

    /// Quantity requested.
    pub quantity: Option<Decimal>,

    /// Quantity invoiced. Mirrors `quantity` in this layout.
    pub invoiced_quantity: Option<Decimal>,

    /// Invoiced unit value.
    pub invoiced_unit_value: Option<Decimal>,

    /// Unit of measure. Always `UN` in this layout.
    pub unit_of_measure: String,

    /// Shipped volume, carried through from the annexure.
    pub volume: Option<Decimal>,

    /// Shipped weight, carried through from the annexure.
    pub weight: Option<Decimal>,

    /// Line amount, carried through from the annexure.
    pub amount: Option<Decimal>,
}

impl LineItem {
    /// Column headers of the tabular export, in order.
    pub const COLUMNS: [&'static str; 7] = [
        "Nro. De Orden – Prefijo",
        "Cod. Material de Proveedor solicitado",
        "Cod. Material de Proveedor despachado",
        "Cantidad solicitada",
        "Cantidad facturada",
        "Valor unitario facturado",
        "Unidad de medida",
    ];
}

/// A line in the legacy four-column order projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Derived purchase order number (`CHL<order ref>-24`).
    pub order_number: String,

    /// Supplier material code.
    pub requested_material: String,

    /// Quantity requested.
    pub quantity: Option<Decimal>,

    /// Unit rate.
    pub unit_rate: Option<Decimal>,
}

impl OrderLine {
    /// Column headers of the tabular export, in order.
    pub const COLUMNS: [&'static str; 4] =
        ["NRO_ORDEN_PREFIJO", "MAT_PROV_SOLICITADO", "QTY", "UNIT RATE"];
}
