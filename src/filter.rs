//! Structured Filter Model
//!
//! Owns the ordered token list behind the structured filter editor and
//! validates entries against the declared column kinds.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::models::{ColumnDescriptor, ColumnKind, FilterToken, FilterValue, Operator};
use crate::query::serialize_filter;

/// Maximum autocomplete suggestions shown at once
pub const MAX_SUGGESTIONS: usize = 5;

/// Whether `option` is offered for `query`: blank options never are,
/// otherwise the query's non-space characters must appear in order,
/// case-insensitively
pub fn option_matches(query: &str, option: &str) -> bool {
    if option.trim().is_empty() {
        return false;
    }
    let mut remaining = option.chars().flat_map(char::to_lowercase);
    query
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .all(|wanted| remaining.any(|c| c == wanted))
}

/// Token list plus the columns it may refer to
#[derive(Debug, Clone)]
pub struct FilterEditor {
    columns: Vec<ColumnDescriptor>,
    tokens: Vec<FilterToken>,
}

impl FilterEditor {
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            columns,
            tokens: Vec::new(),
        }
    }

    pub fn column(&self, category: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.category == category)
    }

    pub fn tokens(&self) -> &[FilterToken] {
        &self.tokens
    }

    pub fn serialized(&self) -> String {
        serialize_filter(&self.tokens)
    }

    /// Build a token from user input, typed by the column's kind.
    ///
    /// `textoptions` values outside the option list are accepted as free text.
    pub fn build_token(
        &self,
        category: &str,
        operator: Option<Operator>,
        raw_value: &str,
    ) -> Result<FilterToken, ValidationError> {
        let column = self
            .column(category)
            .ok_or_else(|| ValidationError::UnknownCategory(category.to_string()))?;
        let raw_value = raw_value.trim();
        if raw_value.is_empty() {
            return Err(ValidationError::EmptyValue);
        }

        let value = match column.kind {
            ColumnKind::Int => raw_value
                .parse::<i64>()
                .map(FilterValue::Int)
                .map_err(|_| ValidationError::NotAnInteger(raw_value.to_string()))?,
            ColumnKind::Date => NaiveDate::parse_from_str(raw_value, "%Y-%m-%d")
                .map(|date| FilterValue::Text(date.format("%Y-%m-%d").to_string()))
                .map_err(|_| ValidationError::NotADate(raw_value.to_string()))?,
            ColumnKind::Text | ColumnKind::TextOptions(_) => {
                FilterValue::Text(raw_value.to_string())
            }
        };

        let token = FilterToken::new(column.category, operator, value);
        self.check(&token)?;
        Ok(token)
    }

    /// Append a token; returns the updated list for the owner's callback
    pub fn add_token(&mut self, token: FilterToken) -> Result<&[FilterToken], ValidationError> {
        self.check(&token)?;
        self.tokens.push(token);
        Ok(&self.tokens)
    }

    /// Remove the token at `index`; `None` if out of range
    pub fn remove_token(&mut self, index: usize) -> Option<FilterToken> {
        if index < self.tokens.len() {
            Some(self.tokens.remove(index))
        } else {
            None
        }
    }

    /// Build and append a token from user input, then report the new
    /// serialized filter. Rejected input reports nothing.
    pub fn submit(
        &mut self,
        category: &str,
        operator: Option<Operator>,
        raw_value: &str,
        on_change: impl FnOnce(String),
    ) -> Result<(), ValidationError> {
        let token = self.build_token(category, operator, raw_value)?;
        self.add_token(token)?;
        on_change(self.serialized());
        Ok(())
    }

    /// Remove the token at `index` and report the new serialized filter;
    /// `false` and no report when there is no such token
    pub fn discard(&mut self, index: usize, on_change: impl FnOnce(String)) -> bool {
        if self.remove_token(index).is_none() {
            return false;
        }
        on_change(self.serialized());
        true
    }

    /// Autocomplete values for a `textoptions` column
    pub fn suggestions(&self, category: &str, query: &str) -> Vec<&'static str> {
        let Some(column) = self.column(category) else {
            return Vec::new();
        };
        let query = query.trim();
        column
            .kind
            .options()
            .iter()
            .copied()
            .filter(|option| option_matches(query, option))
            .take(MAX_SUGGESTIONS)
            .collect()
    }

    fn check(&self, token: &FilterToken) -> Result<(), ValidationError> {
        let column = self
            .column(&token.category)
            .ok_or_else(|| ValidationError::UnknownCategory(token.category.clone()))?;
        if let Some(op) = token.operator {
            if !column.kind.operators().contains(&op) {
                return Err(ValidationError::OperatorNotAllowed {
                    category: token.category.clone(),
                    operator: op.to_string(),
                });
            }
        }
        Ok(())
    }
}
