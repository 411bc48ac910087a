//! Plain-text premium statement
//!
//! A statement is the customer-facing view of a breakdown. Amounts are
//! rounded to paise here and nowhere earlier; zero lines are dropped except
//! the ones a breakdown pins. A rendered statement can be parsed back into
//! its labelled amounts.

use std::fmt;
use std::str::FromStr;

use core_kernel::Money;

use crate::breakdown::{labels, PremiumBreakdown, Section};
use crate::error::RatingError;
use crate::request::PolicyDetails;

pub const STATEMENT_TITLE: &str = "GCCV Premium Statement";
const DETAILS_HEADING: &str = "Policy Details";
const INDENT: &str = "  ";

/// One rendered `label: amount` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementLine {
    pub label: String,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementSection {
    pub section: Section,
    pub lines: Vec<StatementLine>,
}

/// Rendered statement: optional policy details, then one block per section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteStatement {
    pub details: Vec<(String, String)>,
    pub sections: Vec<StatementSection>,
}

impl QuoteStatement {
    /// Builds the statement for a breakdown
    pub fn render(breakdown: &PremiumBreakdown, details: Option<&PolicyDetails>) -> Self {
        let lines = breakdown.lines();
        let sections = Section::ALL
            .into_iter()
            .map(|section| StatementSection {
                section,
                lines: lines
                    .iter()
                    .filter(|line| line.section == section && line.is_visible())
                    .map(|line| StatementLine {
                        label: line.label.to_string(),
                        amount: line.amount.round_to_paise(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            details: details.map(detail_pairs).unwrap_or_default(),
            sections,
        }
    }

    /// Reads a rendered statement back
    ///
    /// # Errors
    ///
    /// Returns `RatingError::MalformedStatement` with the 1-based line number
    /// of the first line that does not fit the layout.
    pub fn parse(text: &str) -> Result<Self, RatingError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line))
            .filter(|(_, line)| !line.trim().is_empty());

        match lines.next() {
            Some((_, line)) if line.trim() == STATEMENT_TITLE => {}
            Some((number, _)) => return Err(RatingError::malformed(number, "missing statement title")),
            None => return Err(RatingError::malformed(0, "empty statement")),
        }

        let mut statement = Self {
            details: Vec::new(),
            sections: Vec::new(),
        };
        let mut in_details = false;

        for (number, line) in lines {
            if let Some(heading) = line.trim().strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
                if heading == DETAILS_HEADING {
                    if !statement.sections.is_empty() || !statement.details.is_empty() {
                        return Err(RatingError::malformed(number, "policy details must come first"));
                    }
                    in_details = true;
                    continue;
                }
                let section = Section::from_title(heading)
                    .ok_or_else(|| RatingError::malformed(number, format!("unknown section '{}'", heading)))?;
                in_details = false;
                statement.sections.push(StatementSection {
                    section,
                    lines: Vec::new(),
                });
                continue;
            }

            let Some(body) = line.strip_prefix(INDENT) else {
                return Err(RatingError::malformed(number, "expected an indented entry"));
            };

            if in_details {
                let (key, value) = body
                    .split_once(':')
                    .ok_or_else(|| RatingError::malformed(number, "expected 'key: value'"))?;
                statement.details.push((key.trim().to_string(), value.trim().to_string()));
                continue;
            }

            let current = statement
                .sections
                .last_mut()
                .ok_or_else(|| RatingError::malformed(number, "entry outside a section"))?;
            let (label, amount) = body
                .rsplit_once(": ")
                .ok_or_else(|| RatingError::malformed(number, "expected 'label: amount'"))?;
            let amount = Money::from_str(amount)
                .map_err(|err| RatingError::malformed(number, err.to_string()))?;
            current.lines.push(StatementLine {
                label: label.trim().to_string(),
                amount,
            });
        }

        Ok(statement)
    }

    pub fn section(&self, section: Section) -> Option<&StatementSection> {
        self.sections.iter().find(|s| s.section == section)
    }

    /// Amount printed on a line, if the line was printed
    pub fn amount(&self, section: Section, label: &str) -> Option<Money> {
        self.section(section)?
            .lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.amount)
    }

    /// Whole-rupee totals banner, e.g. `Grand Total: Rs 40,779`
    pub fn summary_banner(&self) -> String {
        let grand_total = self
            .amount(Section::Summary, labels::GRAND_TOTAL)
            .unwrap_or(Money::ZERO);
        format!("{}: {}", labels::GRAND_TOTAL, grand_total.to_rupee_string())
    }
}

impl fmt::Display for QuoteStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", STATEMENT_TITLE)?;

        if !self.details.is_empty() {
            writeln!(f)?;
            writeln!(f, "[{}]", DETAILS_HEADING)?;
            for (key, value) in &self.details {
                writeln!(f, "{}{}: {}", INDENT, key, value)?;
            }
        }

        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "[{}]", section.section.title())?;
            for line in &section.lines {
                writeln!(f, "{}{}: {}", INDENT, line.label, line.amount)?;
            }
        }
        Ok(())
    }
}

impl FromStr for QuoteStatement {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Non-empty policy detail fields, in form order
///
/// Control characters become spaces so each value stays on its own line.
fn detail_pairs(details: &PolicyDetails) -> Vec<(String, String)> {
    [
        ("Insured Name", &details.insured_name),
        ("Previous Policy No.", &details.previous_policy_number),
        ("Registration No.", &details.registration_number),
        ("Engine No.", &details.engine_number),
        ("Chassis No.", &details.chassis_number),
    ]
    .into_iter()
    .map(|(key, value)| (key, single_line(value)))
    .filter(|(_, value)| !value.is_empty())
    .map(|(key, value)| (key.to_string(), value))
    .collect()
}

fn single_line(value: &str) -> String {
    let flattened: String = value
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    flattened.trim().to_string()
}
