//! Downloadable renderings of a completed record
//!
//! Both outputs are deterministic pure transforms of the record: a flat
//! delimited file with a header row, and a plain-text document of
//! labeled lines. Filenames carry the respondent's name and the date of
//! the submission.

use chrono::NaiveDate;

use crate::models::record::{RECORD_COLUMNS, Record, format_number};
use crate::store::codec::render_line;

/// Title line of the document rendering
pub const DOCUMENT_TITLE: &str = "Health Record";

/// Render the record as delimited text with a header row
#[must_use]
pub fn record_csv(record: &Record) -> String {
    let mut out = render_line(&RECORD_COLUMNS, ',');
    out.push('\n');
    out.push_str(&render_line(&record.to_row(), ','));
    out.push('\n');
    out
}

/// Render the record as a human-readable document
///
/// Field labels and ordering mirror the printed health-record layout:
/// identity and history first, then the 30-day consumption section,
/// then the risk line.
#[must_use]
pub fn record_document(record: &Record) -> String {
    let r = &record.response;
    let lines = [
        format!("Name:{}", r.name),
        format!("Sex:{}", r.sex.as_str()),
        format!("Age Category:{}", r.age_category.as_str()),
        format!("Height(cm):{}", format_number(r.height_cm)),
        format!("Weight(kg):{}", format_number(r.weight_kg)),
        format!("BMI:{}", format_number(r.bmi)),
        format!("General Health:{}", r.general_health.as_str()),
        format!("Checkup:{}", r.checkup.as_str()),
        format!("Smoking history:{}", r.smoking_history.as_str()),
        format!("Skin Cancer:{}", r.skin_cancer.as_str()),
        format!("Other Cancer:{}", r.other_cancer.as_str()),
        format!("Depression:{}", r.depression.as_str()),
        format!("Diabetes:{}", r.diabetes.as_str()),
        format!("Arthritis:{}", r.arthritis.as_str()),
        "Data in the past one month(30 days):".to_string(),
        format!("Exercise:{}", r.exercise.as_str()),
        format!("Alcohol Consumption:{}", r.alcohol_consumption),
        format!("Fruit Consumption:{}", r.fruit_consumption),
        format!("Green Vegetables Consumption:{}", r.green_vegetables_consumption),
        format!("Fried Potato Consumption:{}", r.fried_potato_consumption),
        String::new(),
        format!(
            "The risk of developing Cardiovascular Disease (CVD) is:{}",
            record.verdict.risk()
        ),
    ];
    let mut out = String::from(DOCUMENT_TITLE);
    out.push('\n');
    out.push('\n');
    out.push_str(&lines.join("\n"));
    out.push('\n');
    out
}

/// Shared base name for both downloads
#[must_use]
pub fn export_basename(name: &str, date: NaiveDate) -> String {
    format!("{name} details:{}", date.format("%d-%b-%y"))
}

/// Filename for the delimited download
#[must_use]
pub fn csv_filename(name: &str, date: NaiveDate) -> String {
    format!("{}.csv", export_basename(name, date))
}

/// Filename for the document download
#[must_use]
pub fn document_filename(name: &str, date: NaiveDate) -> String {
    format!("{}.txt", export_basename(name, date))
}
