use super::xml_utils::{XmlResult, XmlWriter};
use crate::core::{DocumentLayout, ImportError, InvoiceLine};

/// VAT code and description of the single document row (22% standard rate).
pub const ROW_VAT_CODE: &str = "22";
pub const ROW_VAT_DESCRIPTION: &str = "22%";

/// Generate a Fattura24 SaveDocument XML from an invoice line.
///
/// Tag names, nesting and order follow the SaveDocument schema exactly:
///
/// ```xml
/// <Fattura24>
///     <Document>
///         <DocumentType>..</DocumentType>
///         ...
///         <SendEmail>false</SendEmail>
///         <Rows>
///             <Row>..</Row>
///         </Rows>
///     </Document>
/// </Fattura24>
/// ```
///
/// The `<Rows>` block is only written for [`DocumentLayout::WithRow`].
pub fn to_fattura24_xml(line: &InvoiceLine, layout: DocumentLayout) -> XmlResult {
    let mut w = XmlWriter::new();

    w.start_element("Fattura24")?;
    w.start_element("Document")?;

    w.text_element("DocumentType", &line.document_type)?;
    w.text_element("CustomerName", &line.customer_name)?;
    w.text_element("CustomerAddress", &line.customer_address)?;
    w.text_element("CustomerPostcode", &line.customer_postcode)?;
    w.text_element("CustomerCity", &line.customer_city)?;
    w.text_element("CustomerCountry", &line.customer_country)?;
    w.text_element("CustomerFiscalCode", &line.customer_fiscal_code)?;
    w.text_element("CustomerVatCode", &line.customer_vat_code)?;
    w.text_element("TotalWithoutTax", &line.total_without_tax)?;
    w.text_element("VatAmount", &line.vat_amount)?;
    w.text_element("Total", &line.total)?;
    w.text_element("SendEmail", "false")?;

    if layout == DocumentLayout::WithRow {
        write_single_row(&mut w, line)?;
    }

    w.end_element("Document")?;
    w.end_element("Fattura24")?;

    w.into_string()
}

/// One row, quantity 1, priced at the pre-tax amount.
fn write_single_row(w: &mut XmlWriter, line: &InvoiceLine) -> Result<(), ImportError> {
    w.start_element("Rows")?;
    w.start_element("Row")?;
    w.text_element("Description", "-")?;
    w.text_element("Qty", "1")?;
    w.text_element("Price", &line.total_without_tax)?;
    w.text_element("VatCode", ROW_VAT_CODE)?;
    w.text_element("VatDescription", ROW_VAT_DESCRIPTION)?;
    w.end_element("Row")?;
    w.end_element("Rows")?;
    Ok(())
}
