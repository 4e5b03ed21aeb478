use std::str::FromStr;

use csv::StringRecord;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::error::RecordError;
use super::types::{InvoiceLine, RecordLayout};

/// Italian standard VAT rate, as a fraction.
pub const VAT_RATE: Decimal = dec!(0.22);

/// Decimal places of every formatted amount.
pub const AMOUNT_SCALE: u32 = 2;

/// Derive `(vat_amount, total)` from a pre-tax amount at [`VAT_RATE`].
///
/// Both results are rounded to two decimals, half away from zero. The total
/// is rounded from the exact gross value, not from the rounded VAT.
/// Returns `None` if the amount is too large to multiply.
pub fn compute_vat(base: Decimal) -> Option<(Decimal, Decimal)> {
    let tax = base.checked_mul(VAT_RATE)?;
    let total = base.checked_add(tax)?;
    Some((round_amount(tax), round_amount(total)))
}

fn round_amount(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount with exactly two decimal places.
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round_amount(value))
}

fn parse_amount(column: &'static str, value: &str) -> Result<Decimal, RecordError> {
    Decimal::from_str(value.trim()).map_err(|_| RecordError::InvalidAmount {
        column,
        value: value.to_string(),
    })
}

impl InvoiceLine {
    /// Map one CSV row to an invoice line.
    ///
    /// The layout is selected by column count. Customer columns are copied
    /// verbatim. For [`RecordLayout::BaseAmount`] rows the VAT amount and
    /// total are derived; for [`RecordLayout::FullAmounts`] rows the three
    /// amounts are checked to be numeric and passed through unchanged.
    pub fn from_record(record: &StringRecord) -> Result<Self, RecordError> {
        let layout = RecordLayout::detect(record.len())?;
        Self::from_fields(layout, record.iter().collect())
    }

    fn from_fields(layout: RecordLayout, fields: Vec<&str>) -> Result<Self, RecordError> {
        let columns = layout.columns();
        debug_assert_eq!(fields.len(), columns.len());

        let text = |i: usize| fields[i].to_string();
        let total_without_tax = fields[8];
        let base = parse_amount(columns[8], total_without_tax)?;

        let (vat_amount, total) = match layout {
            RecordLayout::BaseAmount => {
                let (tax, total) = compute_vat(base).ok_or_else(|| RecordError::InvalidAmount {
                    column: columns[8],
                    value: total_without_tax.to_string(),
                })?;
                (format_amount(tax), format_amount(total))
            }
            RecordLayout::FullAmounts => {
                parse_amount(columns[9], fields[9])?;
                parse_amount(columns[10], fields[10])?;
                (text(9), text(10))
            }
        };

        Ok(Self {
            document_type: text(0),
            customer_name: text(1),
            customer_address: text(2),
            customer_postcode: text(3),
            customer_city: text(4),
            customer_country: text(5),
            customer_fiscal_code: text(6),
            customer_vat_code: text(7),
            total_without_tax: total_without_tax.to_string(),
            vat_amount,
            total,
        })
    }
}
