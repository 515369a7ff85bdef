//! Single-record CSV export.
//!
//! Flattens one [`DriverApplicationRecord`] into a two-line CSV document
//! (header row + value row) and triggers a browser download for it.
//!
//! Column order is an explicit schema, not the enumeration order of the
//! incoming JSON, so the layout is deterministic across parser versions.
//! Employment history is flattened into indexed `employment_{i}_{field}`
//! columns, which means the column set varies with history length; that is
//! acceptable for single-record export but rules out naive multi-row
//! concatenation.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::record::{DriverApplicationRecord, EmploymentRecord};

/// A rendered CSV document plus its suggested filename.
#[derive(Clone, Debug, PartialEq)]
pub struct CsvExport {
    pub filename: String,
    pub body: String,
}

/// Quote one CSV cell: wrap in double quotes, doubling any embedded quote.
/// Applied to every value uniformly, special characters or not.
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Optional booleans keep their three states in the export: an explicit
/// answer serializes as `true`/`false`, an absent one as the empty string.
fn answer(value: Option<bool>) -> String {
    match value {
        Some(true) => "true".to_string(),
        Some(false) => "false".to_string(),
        None => String::new(),
    }
}

fn number(value: Option<f64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

/// Scalar columns in fixed schema order.
///
/// Excludes `raw_text`, `employment_history`, `accident_history`, and
/// `extraction_metadata`. Reordering these breaks downstream spreadsheets;
/// new fields go at the end of their group.
fn scalar_columns(record: &DriverApplicationRecord) -> Vec<(&'static str, String)> {
    vec![
        // Identity / contact
        ("full_name", text(&record.full_name)),
        ("email", text(&record.email)),
        ("primary_phone", text(&record.primary_phone)),
        ("cell_phone", text(&record.cell_phone)),
        ("date_of_birth", text(&record.date_of_birth)),
        ("current_address", text(&record.current_address)),
        ("city_state_zip", text(&record.city_state_zip)),
        ("emergency_contact_name", text(&record.emergency_contact_name)),
        ("emergency_contact_phone", text(&record.emergency_contact_phone)),
        // License
        ("has_cdl", answer(record.has_cdl)),
        ("license_number", text(&record.license_number)),
        ("license_class", text(&record.license_class)),
        ("licensing_authority", text(&record.licensing_authority)),
        ("license_expiration_date", text(&record.license_expiration_date)),
        (
            "dot_medical_card_expiration",
            text(&record.dot_medical_card_expiration),
        ),
        ("tanker_endorsement", answer(record.tanker_endorsement)),
        ("hazmat_endorsement", answer(record.hazmat_endorsement)),
        ("x_endorsement", answer(record.x_endorsement)),
        (
            "doubles_triples_endorsement",
            answer(record.doubles_triples_endorsement),
        ),
        ("passenger_endorsement", answer(record.passenger_endorsement)),
        ("school_bus_endorsement", answer(record.school_bus_endorsement)),
        // Safety / criminal history
        ("convicted_of_crime", answer(record.convicted_of_crime)),
        ("felony_convictions", answer(record.felony_convictions)),
        ("charges_pending", answer(record.charges_pending)),
        ("accidents_last_5_years", answer(record.accidents_last_5_years)),
        ("failed_drug_test", answer(record.failed_drug_test)),
        (
            "license_suspended_revoked",
            answer(record.license_suspended_revoked),
        ),
        (
            "moving_violations_3_years",
            answer(record.moving_violations_3_years),
        ),
        // FCRA compliance
        (
            "background_check_authorization",
            answer(record.background_check_authorization),
        ),
        (
            "employment_verification_authorization",
            answer(record.employment_verification_authorization),
        ),
        ("clearinghouse_release", answer(record.clearinghouse_release)),
        // Education
        (
            "attended_trucking_school",
            answer(record.attended_trucking_school),
        ),
        ("school_name", text(&record.school_name)),
        ("graduation_status", text(&record.graduation_status)),
        // Whole-record confidence
        ("parsing_confidence", number(record.parsing_confidence)),
    ]
}

/// Per-entry columns, fixed field order, 1-based index.
fn employment_columns(index: usize, job: &EmploymentRecord) -> Vec<(String, String)> {
    let header = |field: &str| format!("employment_{}_{}", index, field);
    vec![
        (header("company_name"), text(&job.company_name)),
        (header("position_held"), text(&job.position_held)),
        (header("start_date"), text(&job.start_date)),
        (header("end_date"), text(&job.end_date)),
        (header("reason_for_leaving"), text(&job.reason_for_leaving)),
        (header("may_contact"), job.may_contact.csv_value().to_string()),
        (header("operated_cmv"), job.operated_cmv.csv_value().to_string()),
    ]
}

/// Serialize the full record, employment history included, into a CSV
/// document. Pure; the download side effect lives in [`save_csv`].
pub fn export_record(record: &DriverApplicationRecord) -> CsvExport {
    let mut headers = Vec::new();
    let mut values = Vec::new();

    for (header, value) in scalar_columns(record) {
        headers.push(header.to_string());
        values.push(value);
    }

    for (i, job) in record.employment_history.iter().enumerate() {
        for (header, value) in employment_columns(i + 1, job) {
            headers.push(header);
            values.push(value);
        }
    }

    let header_row = headers.join(",");
    let value_row = values
        .iter()
        .map(|v| quote(v))
        .collect::<Vec<_>>()
        .join(",");

    let name = record.full_name.as_deref().unwrap_or("driver_application");

    CsvExport {
        filename: format!("{}_parsed_data.csv", name),
        body: format!("{}\n{}", header_row, value_row),
    }
}

/// Trigger a browser download of the CSV document.
///
/// Creates a transient object URL for a Blob, clicks a detached anchor, and
/// revokes the URL on every exit path.
pub fn save_csv(export: &CsvExport) -> Result<(), JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(&export.body));

    let options = BlobPropertyBag::new();
    options.set_type("text/csv");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let outcome = click_download_link(&url, &export.filename);
    Url::revoke_object_url(&url)?;
    outcome
}

fn click_download_link(url: &str, filename: &str) -> Result<(), JsValue> {
    let document = gloo_utils::document();
    let anchor: HtmlAnchorElement = document.create_element("a")?.unchecked_into();
    anchor.set_href(url);
    anchor.set_download(filename);

    let body = gloo_utils::body();
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}
