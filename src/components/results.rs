//! Results panels for a parsed driver application.
//!
//! Pure projection of the current record: a summary card (confidence, risk
//! badge, extraction stats, CSV download) over five fixed category tabs.
//! Adds no data beyond the record and its risk classification. Employment
//! display is truncated to the first entries; the CSV export always carries
//! the full history.

use leptos::*;

use crate::config::EMPLOYMENT_DISPLAY_LIMIT;
use crate::export::{export_record, save_csv};
use crate::record::{DriverApplicationRecord, EmploymentRecord};
use crate::risk::classify;
use crate::types::{StatusEntry, StatusLevel};

/// Display fallback for absent scalars.
fn na(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "N/A".to_string())
}

/// Three-way display of an optional answer. Absence is "Unknown", never "No".
fn known(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "Yes",
        Some(false) => "No",
        None => "Unknown",
    }
}

fn answer_badge(label: &'static str, value: Option<bool>) -> impl IntoView {
    let class = match value {
        Some(true) => "badge badge-destructive",
        Some(false) => "badge badge-default",
        None => "badge badge-muted",
    };
    view! {
        <div class="field-row">
            <span class="field-label">{label}</span>
            <span class=class>{known(value)}</span>
        </div>
    }
}

fn field_row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="field-row">
            <span class="field-label">{label}</span>
            <span class="field-value">{value}</span>
        </div>
    }
}

// =============================================================================
// Tabs
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ResultTab {
    Personal,
    License,
    Safety,
    Employment,
    Compliance,
}

impl ResultTab {
    const ALL: [ResultTab; 5] = [
        ResultTab::Personal,
        ResultTab::License,
        ResultTab::Safety,
        ResultTab::Employment,
        ResultTab::Compliance,
    ];

    fn label(&self) -> &'static str {
        match self {
            ResultTab::Personal => "Personal",
            ResultTab::License => "License",
            ResultTab::Safety => "Safety",
            ResultTab::Employment => "Employment",
            ResultTab::Compliance => "Compliance",
        }
    }
}

// =============================================================================
// Components
// =============================================================================

/// Placeholder shown before the first successful parse.
#[component]
pub fn EmptyResults() -> impl IntoView {
    view! {
        <div class="results-empty">
            <div class="empty-icon">"📄"</div>
            <h3>"No PDF Parsed Yet"</h3>
            <p>"Upload a Tenstreet driver application PDF to see comprehensive extracted data here"</p>
        </div>
    }
}

/// Reactive wrapper: re-renders the card whenever a new record replaces the
/// current one.
#[component]
pub fn ResultsSection(
    record: ReadSignal<Option<DriverApplicationRecord>>,
    set_status: WriteSignal<Option<StatusEntry>>,
) -> impl IntoView {
    view! {
        {move || record.get().map(|record| view! {
            <ResultsCard record=record set_status=set_status/>
        })}
    }
}

#[component]
fn ResultsCard(
    record: DriverApplicationRecord,
    set_status: WriteSignal<Option<StatusEntry>>,
) -> impl IntoView {
    let (active_tab, set_active_tab) = create_signal(ResultTab::Personal);

    let risk = classify(&record);
    let title = record
        .full_name
        .clone()
        .unwrap_or_else(|| "Driver Application".to_string());
    let confidence = record.parsing_confidence.unwrap_or(0.0);
    let fields_extracted = record.fields_extracted();
    let employment_count = record.employment_history.len();

    let download_record = record.clone();
    let on_download = move |_| {
        let export = export_record(&download_record);
        match save_csv(&export) {
            Ok(()) => log::info!("CSV exported as {}", export.filename),
            Err(e) => {
                log::error!("CSV download failed: {:?}", e);
                set_status.set(Some(StatusEntry::now(
                    StatusLevel::Error,
                    "❌ Error: CSV download failed",
                )));
            }
        }
    };

    let tab_record = record.clone();

    view! {
        <div class="results-section">
            <div class="summary-card">
                <div class="summary-header">
                    <div>
                        <h2 class="summary-title">{title}</h2>
                        <p class="summary-subtitle">
                            {format!("Parsed with {}% confidence", confidence)}
                        </p>
                    </div>
                    <div class="summary-actions">
                        <span class=format!("badge {}", risk.css_class())>{risk.label()}</span>
                        <button class="btn btn-outline" on:click=on_download>
                            "⬇ Download CSV"
                        </button>
                    </div>
                </div>
                <div class="summary-stats">
                    <div class="stat-tile">
                        <div class="stat-value">{format!("{}%", confidence)}</div>
                        <div class="stat-label">"Confidence"</div>
                    </div>
                    <div class="stat-tile">
                        <div class="stat-value">{fields_extracted}</div>
                        <div class="stat-label">"Fields Extracted"</div>
                    </div>
                    <div class="stat-tile">
                        <div class="stat-value">{employment_count}</div>
                        <div class="stat-label">"Employment Records"</div>
                    </div>
                </div>
            </div>

            <div class="detail-card">
                <div class="tab-bar">
                    <For
                        each=|| ResultTab::ALL
                        key=|tab| tab.label()
                        children=move |tab| {
                            view! {
                                <button
                                    class="tab-button"
                                    class:active=move || active_tab.get() == tab
                                    on:click=move |_| set_active_tab.set(tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        }
                    />
                </div>

                <div class="tab-content">
                    {move || {
                        let record = tab_record.clone();
                        match active_tab.get() {
                            ResultTab::Personal => view! { <PersonalTab record=record/> }.into_view(),
                            ResultTab::License => view! { <LicenseTab record=record/> }.into_view(),
                            ResultTab::Safety => view! { <SafetyTab record=record/> }.into_view(),
                            ResultTab::Employment => view! { <EmploymentTab record=record/> }.into_view(),
                            ResultTab::Compliance => view! { <ComplianceTab record=record/> }.into_view(),
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn PersonalTab(record: DriverApplicationRecord) -> impl IntoView {
    // Primary phone falls back to the cell number, as on the form.
    let phone = record
        .primary_phone
        .clone()
        .or_else(|| record.cell_phone.clone());

    view! {
        <div class="tab-grid">
            <div class="tab-column">
                {field_row("Name:", na(&record.full_name))}
                {field_row("Email:", na(&record.email))}
                {field_row("Phone:", na(&phone))}
                {field_row("DOB:", na(&record.date_of_birth))}
            </div>
            <div class="tab-column">
                {field_row("Address:", na(&record.current_address))}
                {field_row("City/State:", na(&record.city_state_zip))}
                {field_row("Emergency Contact:", na(&record.emergency_contact_name))}
                {field_row("Emergency Phone:", na(&record.emergency_contact_phone))}
            </div>
        </div>
    }
}

#[component]
fn LicenseTab(record: DriverApplicationRecord) -> impl IntoView {
    let endorsements: Vec<&'static str> = [
        (record.tanker_endorsement, "Tanker"),
        (record.hazmat_endorsement, "Hazmat"),
        (record.x_endorsement, "X"),
        (record.doubles_triples_endorsement, "Doubles/Triples"),
        (record.passenger_endorsement, "Passenger"),
        (record.school_bus_endorsement, "School Bus"),
    ]
    .into_iter()
    .filter_map(|(held, label)| held.unwrap_or(false).then_some(label))
    .collect();

    view! {
        <div class="tab-grid">
            <div class="tab-column">
                {field_row("Has CDL:", known(record.has_cdl).to_string())}
                {field_row("License Number:", na(&record.license_number))}
                {field_row("License Class:", na(&record.license_class))}
                {field_row("State:", na(&record.licensing_authority))}
            </div>
            <div class="tab-column">
                {field_row("Expiration:", na(&record.license_expiration_date))}
                {field_row("Medical Card Exp:", na(&record.dot_medical_card_expiration))}
                <div class="field-row">
                    <span class="field-label">"Endorsements:"</span>
                    <span class="endorsement-badges">
                        {if record.no_endorsements() {
                            view! { <span class="field-muted">"None"</span> }.into_view()
                        } else {
                            endorsements
                                .into_iter()
                                .map(|e| view! { <span class="badge badge-outline">{e}</span> })
                                .collect_view()
                        }}
                    </span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SafetyTab(record: DriverApplicationRecord) -> impl IntoView {
    view! {
        <div class="tab-grid">
            <div class="tab-column">
                <h4>"Criminal Record"</h4>
                {answer_badge("Convicted of Crime:", record.convicted_of_crime)}
                {answer_badge("Felony Convictions:", record.felony_convictions)}
                {answer_badge("Pending Charges:", record.charges_pending)}
            </div>
            <div class="tab-column">
                <h4>"Safety Record"</h4>
                {answer_badge("Accidents (5 years):", record.accidents_last_5_years)}
                {answer_badge("Failed Drug Test:", record.failed_drug_test)}
                {answer_badge("License Suspended:", record.license_suspended_revoked)}
                {answer_badge("Moving Violations:", record.moving_violations_3_years)}
            </div>
        </div>
    }
}

#[component]
fn EmploymentTab(record: DriverApplicationRecord) -> impl IntoView {
    let total = record.employment_history.len();
    let shown: Vec<EmploymentRecord> = record
        .employment_history
        .iter()
        .take(EMPLOYMENT_DISPLAY_LIMIT)
        .cloned()
        .collect();
    let remaining = total.saturating_sub(EMPLOYMENT_DISPLAY_LIMIT);

    view! {
        <div class="employment-tab">
            <div class="employment-header">
                <h4>"Employment History"</h4>
                <span class="badge badge-outline">{format!("{} Records", total)}</span>
            </div>
            {if shown.is_empty() {
                view! { <p class="field-muted">"No employment history found"</p> }.into_view()
            } else {
                view! {
                    <div class="employment-list">
                        {shown.into_iter().map(|job| view! {
                            <div class="employment-item">
                                <div class="employment-main">
                                    <h5>{na(&job.company_name)}</h5>
                                    <p class="employment-position">{na(&job.position_held)}</p>
                                    <p class="employment-dates">
                                        {format!("{} - {}", na(&job.start_date), na(&job.end_date))}
                                    </p>
                                </div>
                                <div class="employment-verification">
                                    {job.reason_for_leaving.clone().map(|reason| view! {
                                        <p>
                                            <span class="field-label">"Reason for leaving: "</span>
                                            {reason}
                                        </p>
                                    })}
                                    {job.may_contact.is_known().then(|| view! {
                                        <p>
                                            <span class="field-label">"May contact: "</span>
                                            {job.may_contact.label()}
                                        </p>
                                    })}
                                    {job.operated_cmv.is_known().then(|| view! {
                                        <p>
                                            <span class="field-label">"Operated CMV: "</span>
                                            {job.operated_cmv.label()}
                                        </p>
                                    })}
                                </div>
                            </div>
                        }).collect_view()}
                        <Show
                            when={move || remaining > 0}
                            fallback=|| view! { }
                        >
                            <p class="field-muted employment-more">
                                {format!("And {} more records...", remaining)}
                            </p>
                        </Show>
                    </div>
                }.into_view()
            }}
        </div>
    }
}

#[component]
fn ComplianceTab(record: DriverApplicationRecord) -> impl IntoView {
    view! {
        <div class="tab-grid">
            <div class="tab-column">
                <h4>"FCRA Authorizations"</h4>
                {field_row("Background Check Auth:", known(record.background_check_authorization).to_string())}
                {field_row("Employment Verification:", known(record.employment_verification_authorization).to_string())}
                {field_row("Clearinghouse Release:", known(record.clearinghouse_release).to_string())}
            </div>
            <div class="tab-column">
                <h4>"Education"</h4>
                {field_row("Attended Trucking School:", known(record.attended_trucking_school).to_string())}
                {record.school_name.clone().map(|school| field_row("School:", school))}
                {record.graduation_status.clone().map(|status| field_row("Status:", status))}
            </div>
        </div>
    }
}
