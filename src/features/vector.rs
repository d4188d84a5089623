//! Ordered, named feature columns.
use crate::{PipelineError, Result};
use serde::{Deserialize, Serialize};

/// Named scalar features kept in lock-step: the n-th name describes the n-th
/// value. Names need not be unique (`mean_b` exists for both RGB and LAB).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFeatureVector", into = "RawFeatureVector")]
pub struct FeatureVector {
    names: Vec<String>,
    values: Vec<f64>,
}

#[derive(Serialize, Deserialize)]
struct RawFeatureVector {
    names: Vec<String>,
    values: Vec<f64>,
}

impl TryFrom<RawFeatureVector> for FeatureVector {
    type Error = PipelineError;

    fn try_from(raw: RawFeatureVector) -> Result<Self> {
        FeatureVector::from_parts("deserialize", raw.names, raw.values)
    }
}

impl From<FeatureVector> for RawFeatureVector {
    fn from(v: FeatureVector) -> Self {
        Self {
            names: v.names,
            values: v.values,
        }
    }
}

impl FeatureVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair names with values, failing when the lengths differ.
    pub fn from_parts(
        context: &str,
        names: Vec<String>,
        values: Vec<f64>,
    ) -> Result<Self> {
        if names.len() != values.len() {
            return Err(PipelineError::feature_count_mismatch(
                context,
                names.len(),
                values.len(),
            ));
        }
        Ok(Self { names, values })
    }

    pub fn push(&mut self, name: impl Into<String>, value: f64) {
        self.names.push(name.into());
        self.values.push(value);
    }

    /// Append another vector's columns after this one's.
    pub fn extend(&mut self, context: &str, other: FeatureVector) -> Result<()> {
        let FeatureVector { names, values } = other;
        if names.len() != values.len() {
            return Err(PipelineError::feature_count_mismatch(
                context,
                names.len(),
                values.len(),
            ));
        }
        self.names.extend(names);
        self.values.extend(values);
        if self.names.len() != self.values.len() {
            return Err(PipelineError::feature_count_mismatch(
                context,
                self.names.len(),
                self.values.len(),
            ));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// First value registered under `name`.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.values[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Copy without the columns whose value equals `sentinel` exactly.
    pub fn without_value(&self, sentinel: f64) -> Self {
        let (names, values) = self
            .iter()
            .filter(|&(_, v)| v != sentinel)
            .map(|(n, v)| (n.to_string(), v))
            .unzip();
        Self { names, values }
    }
}
