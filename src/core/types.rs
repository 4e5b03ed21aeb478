use serde::{Deserialize, Serialize};

use super::error::RecordError;

/// Columns shared by every known CSV layout, in file order.
pub const CUSTOMER_COLUMNS: [&str; 8] = [
    "document_type",
    "customer_name",
    "customer_address",
    "customer_postcode",
    "customer_city",
    "customer_country",
    "customer_fiscal_code",
    "customer_vat_code",
];

/// One invoice, mapped from one CSV row.
///
/// All fields are kept as text: customer data passes through unmodified and
/// the amounts are already formatted for the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    /// Document type, e.g. "FE" or "Fattura".
    pub document_type: String,
    pub customer_name: String,
    pub customer_address: String,
    pub customer_postcode: String,
    pub customer_city: String,
    pub customer_country: String,
    /// Codice fiscale.
    pub customer_fiscal_code: String,
    /// Partita IVA.
    pub customer_vat_code: String,
    /// Pre-tax amount (imponibile).
    pub total_without_tax: String,
    /// VAT amount (IVA).
    pub vat_amount: String,
    /// Gross total.
    pub total: String,
}

/// Known positional layouts of an invoice CSV row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordLayout {
    /// 8 customer columns + pre-tax amount; VAT and total are derived.
    BaseAmount,
    /// 8 customer columns + pre-tax amount, VAT amount and total, all supplied.
    FullAmounts,
}

impl RecordLayout {
    /// Column names of this layout, in file order.
    pub fn columns(self) -> &'static [&'static str] {
        const BASE: [&str; 9] = [
            CUSTOMER_COLUMNS[0],
            CUSTOMER_COLUMNS[1],
            CUSTOMER_COLUMNS[2],
            CUSTOMER_COLUMNS[3],
            CUSTOMER_COLUMNS[4],
            CUSTOMER_COLUMNS[5],
            CUSTOMER_COLUMNS[6],
            CUSTOMER_COLUMNS[7],
            "total_without_tax",
        ];
        const FULL: [&str; 11] = [
            CUSTOMER_COLUMNS[0],
            CUSTOMER_COLUMNS[1],
            CUSTOMER_COLUMNS[2],
            CUSTOMER_COLUMNS[3],
            CUSTOMER_COLUMNS[4],
            CUSTOMER_COLUMNS[5],
            CUSTOMER_COLUMNS[6],
            CUSTOMER_COLUMNS[7],
            "total_without_tax",
            "vat_amount",
            "total",
        ];
        match self {
            Self::BaseAmount => &BASE,
            Self::FullAmounts => &FULL,
        }
    }

    /// Number of columns in this layout.
    pub fn width(self) -> usize {
        self.columns().len()
    }

    /// Select the layout matching a row's column count.
    pub fn detect(field_count: usize) -> Result<Self, RecordError> {
        [Self::BaseAmount, Self::FullAmounts]
            .into_iter()
            .find(|layout| layout.width() == field_count)
            .ok_or(RecordError::Malformed {
                found: field_count,
                expected: "9 or 11",
            })
    }
}
