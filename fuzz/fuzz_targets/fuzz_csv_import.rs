#![no_main]

use fattura24::core::{DocumentLayout, InvoiceLine};
use fattura24::document::to_fattura24_xml;
use fattura24::ingest::CsvSource;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Errors are fine, panics are bugs.
    for row in CsvSource::from_reader("fuzz.csv", data) {
        let Ok(row) = row else { break };
        if let Ok(line) = InvoiceLine::from_record(&row.record) {
            let _ = to_fattura24_xml(&line, DocumentLayout::WithRow);
        }
    }
});
