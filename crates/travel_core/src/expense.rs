//! Expense sheet totals for the expense tracking screen.
//!
//! # Responsibility
//! - Parse per-category amounts typed by the user.
//! - Sum and format the running total.
//!
//! # Invariants
//! - An unparseable amount counts as zero and is flagged as an input error.
//! - Expenses are screen state only; nothing here touches the store.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    Accommodation,
    Food,
    Transport,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 4] = [
        Self::Accommodation,
        Self::Food,
        Self::Transport,
        Self::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Accommodation => "Accommodation",
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Other => "Other",
        }
    }
}

/// Result of parsing one amount field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedAmount {
    pub value: f64,
    pub is_error: bool,
}

/// Parses a typed amount. Empty input is zero without an error.
pub fn parse_amount(text: &str) -> ParsedAmount {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return ParsedAmount {
            value: 0.0,
            is_error: false,
        };
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => ParsedAmount {
            value,
            is_error: false,
        },
        _ => ParsedAmount {
            value: 0.0,
            is_error: true,
        },
    }
}

/// Amounts for every category.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExpenseSheet {
    pub accommodation: f64,
    pub food: f64,
    pub transport: f64,
    pub other: f64,
}

impl ExpenseSheet {
    pub fn get(&self, category: ExpenseCategory) -> f64 {
        match category {
            ExpenseCategory::Accommodation => self.accommodation,
            ExpenseCategory::Food => self.food,
            ExpenseCategory::Transport => self.transport,
            ExpenseCategory::Other => self.other,
        }
    }

    /// Parses `text` into `category` and reports whether it was rejected.
    pub fn set_from_input(&mut self, category: ExpenseCategory, text: &str) -> ParsedAmount {
        let parsed = parse_amount(text);
        let slot = match category {
            ExpenseCategory::Accommodation => &mut self.accommodation,
            ExpenseCategory::Food => &mut self.food,
            ExpenseCategory::Transport => &mut self.transport,
            ExpenseCategory::Other => &mut self.other,
        };
        *slot = parsed.value;
        parsed
    }

    pub fn total(&self) -> f64 {
        ExpenseCategory::ALL
            .iter()
            .map(|category| self.get(*category))
            .sum()
    }

    /// Total rendered as `$` plus two decimals.
    pub fn format_total(&self) -> String {
        format!("${:.2}", self.total())
    }
}
