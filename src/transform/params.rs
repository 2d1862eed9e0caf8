//! Template parameters
//!
//! Parameters are kept as an ordered list exactly as the user entered them. Only
//! [`ParameterList::resolve`] applies the binding rules: blank entries are dropped and
//! a later entry overrides an earlier one with the same name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing a `name=value` parameter string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    #[error("parameter '{0}' is not of the form name=value")]
    MissingSeparator(String),
}

/// A single name/value pair, in its wire shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Entries with an empty name or value are never bound
    pub fn is_bindable(&self) -> bool {
        !self.name.is_empty() && !self.value.is_empty()
    }
}

impl FromStr for Parameter {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| ParameterError::MissingSeparator(s.to_string()))?;
        Ok(Parameter::new(name.trim(), value))
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Ordered, unfiltered list of parameters as edited by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterList(Vec<Parameter>);

impl ParameterList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, keeping any earlier entry with the same name
    pub fn push(&mut self, parameter: Parameter) {
        self.0.push(parameter);
    }

    /// Replace the value of the first entry named `name`, or append a new entry
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.value = value,
            None => self.0.push(Parameter { name, value }),
        }
    }

    /// Remove every entry named `name`, returning how many were removed
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.0.len();
        self.0.retain(|p| p.name != name);
        before - self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Apply the binding rules, producing the set handed to the engine
    ///
    /// Entries are applied in list order and the last write wins. Names keep the
    /// position of their first bindable occurrence.
    pub fn resolve(&self) -> ResolvedParameters {
        let mut resolved: Vec<(String, String)> = Vec::new();
        for parameter in self.0.iter().filter(|p| p.is_bindable()) {
            match resolved.iter_mut().find(|(name, _)| *name == parameter.name) {
                Some((_, value)) => *value = parameter.value.clone(),
                None => resolved.push((parameter.name.clone(), parameter.value.clone())),
            }
        }
        ResolvedParameters(resolved)
    }
}

impl From<Vec<Parameter>> for ParameterList {
    fn from(parameters: Vec<Parameter>) -> Self {
        Self(parameters)
    }
}

impl FromIterator<Parameter> for ParameterList {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Filtered parameters with unique names, ready to bind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedParameters(Vec<(String, String)>);

impl ResolvedParameters {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
