//! Comparison statistics against population means
//!
//! For each consumption metric, the respondent's normalized count is
//! compared with the precomputed population mean for that column and
//! rendered as one sentence. Pure given the response and mean table.

use std::cmp::Ordering;

use itertools::Itertools;

use crate::error::{Result, ScreenError};
use crate::models::survey::SurveyResponse;
use crate::reference::{CONSUMPTION_COLUMNS, PopulationMeans};

/// How an input relates to its population mean
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeanRelation {
    /// Input is above the mean
    Greater,
    /// Input is below the mean
    Less,
    /// Input equals the mean exactly
    Equal,
}

/// One metric compared against its population mean
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonLine {
    /// Display name of the metric (underscores replaced with spaces)
    pub metric: String,
    /// The respondent's normalized 30-day count
    pub input: u32,
    /// Population mean for the column
    pub mean: f64,
    /// Relation of input to mean
    pub relation: MeanRelation,
    /// `abs((input - mean) / mean * 100)`
    pub percentage: f64,
}

impl ComparisonLine {
    /// Render the sentence shown to the respondent
    #[must_use]
    pub fn to_sentence(&self) -> String {
        match self.relation {
            MeanRelation::Greater => format!(
                "Your {} ({}) is greater than the mean ({:.2}) by {:.2}%",
                self.metric, self.input, self.mean, self.percentage
            ),
            MeanRelation::Less => format!(
                "Your {} ({}) is less than the mean ({:.2}) by {:.2}%",
                self.metric, self.input, self.mean, self.percentage
            ),
            MeanRelation::Equal => format!(
                "Your {} ({}) is equal to the mean ({:.2})",
                self.metric, self.input, self.mean
            ),
        }
    }
}

/// Comparison lines for the four consumption metrics, in column order
#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    /// One line per consumption column
    pub comparisons: Vec<ComparisonLine>,
}

impl Explanation {
    /// All sentences, ready for display
    #[must_use]
    pub fn sentences(&self) -> Vec<String> {
        self.comparisons.iter().map(ComparisonLine::to_sentence).collect_vec()
    }
}

/// Build the explanation for one response
pub fn build_explanation(
    response: &SurveyResponse,
    means: &PopulationMeans,
) -> Result<Explanation> {
    let comparisons = CONSUMPTION_COLUMNS
        .iter()
        .map(|column| {
            let mean = means
                .get(column)
                .ok_or_else(|| ScreenError::Table(format!("no population mean for {column}")))?;
            Ok(compare(column, consumption_value(response, column), mean))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Explanation { comparisons })
}

fn consumption_value(response: &SurveyResponse, column: &str) -> u32 {
    match column {
        "Alcohol_Consumption" => response.alcohol_consumption,
        "Fruit_Consumption" => response.fruit_consumption,
        "Green_Vegetables_Consumption" => response.green_vegetables_consumption,
        _ => response.fried_potato_consumption,
    }
}

fn compare(column: &str, input: u32, mean: f64) -> ComparisonLine {
    let input_value = f64::from(input);
    let relation = match input_value.partial_cmp(&mean) {
        Some(Ordering::Greater) => MeanRelation::Greater,
        Some(Ordering::Less) => MeanRelation::Less,
        _ => MeanRelation::Equal,
    };
    ComparisonLine {
        metric: column.replace('_', " "),
        input,
        mean,
        relation,
        percentage: ((input_value - mean) / mean * 100.0).abs(),
    }
}
