#![no_main]

use fattura24::core::{compute_vat, format_amount};
use libfuzzer_sys::fuzz_target;
use rust_decimal::Decimal;

fuzz_target!(|parts: (i64, u8)| {
    let (mantissa, scale) = parts;
    let Ok(base) = Decimal::try_new(mantissa, u32::from(scale % 29)) else {
        return;
    };
    if let Some((tax, total)) = compute_vat(base) {
        let _ = format_amount(tax);
        let _ = format_amount(total);
    }
});
