//! Time-indexed output of a model run.
//!
//! A [`Dataset`] holds one time series per registered variable along a single named time
//! dimension.
//! Index 0 holds the values at the start of the run and each evaluated timestep appends
//! exactly one slice per variable.
//! Access is strictly by index, there is no resampling or interpolation.

use indexmap::IndexMap;
use ndarray::{stack, ArrayViewD, Axis};
use serde::{Deserialize, Serialize};

use crate::errors::{NsmError, NsmResult};
use crate::kernel::Field;
use crate::variable::VariableKind;

/// The time series of a single variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataVariable {
    pub name: String,
    pub units: String,
    pub kind: VariableKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_name: Option<String>,
    pub values: Vec<Field>,
}

impl DataVariable {
    /// Value at a time index.
    pub fn at(&self, time_index: usize) -> Option<&Field> {
        self.values.get(time_index)
    }

    /// Values of a zero-dimensional variable as a plain vector.
    ///
    /// Returns `None` if the variable is not a scalar.
    pub fn scalar_values(&self) -> Option<Vec<f64>> {
        self.values
            .iter()
            .map(|v| match v.ndim() {
                0 => v.first().copied(),
                _ => None,
            })
            .collect()
    }
}

/// Collection of variable time series sharing a common time dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    time_dim: String,
    variables: IndexMap<String, DataVariable>,
    length: usize,
}

impl Dataset {
    pub fn new(time_dim: impl Into<String>) -> Self {
        Self {
            time_dim: time_dim.into(),
            variables: IndexMap::new(),
            length: 1,
        }
    }

    /// Name of the time dimension.
    pub fn time_dim(&self) -> &str {
        &self.time_dim
    }

    /// Add a variable along with its value at time index 0.
    ///
    /// Variables can only be added before the first timestep has been appended.
    pub fn add_variable(
        &mut self,
        name: impl Into<String>,
        units: impl Into<String>,
        kind: VariableKind,
        long_name: Option<String>,
        initial: Field,
    ) -> NsmResult<()> {
        let name = name.into();
        if self.variables.contains_key(&name) {
            return Err(NsmError::DuplicateVariable(name));
        }
        if self.length != 1 {
            return Err(NsmError::Error(format!(
                "Cannot add variable '{}' after the dataset has been extended",
                name
            )));
        }
        self.variables.insert(
            name.clone(),
            DataVariable {
                name,
                units: units.into(),
                kind,
                long_name,
                values: vec![initial],
            },
        );
        Ok(())
    }

    /// Append one slice along the time dimension.
    ///
    /// `slice` must contain a value for every variable in the dataset.
    pub fn increment_timestep(&mut self, slice: &IndexMap<String, Field>) -> NsmResult<()> {
        if let Some(missing) = self.variables.keys().find(|k| !slice.contains_key(*k)) {
            return Err(NsmError::Error(format!(
                "No value for '{}' at {} index {}",
                missing, self.time_dim, self.length
            )));
        }
        for (name, variable) in self.variables.iter_mut() {
            if let Some(value) = slice.get(name) {
                variable.values.push(value.clone());
            }
        }
        self.length += 1;
        Ok(())
    }

    /// Number of entries along the time dimension.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&DataVariable> {
        self.variables.get(name)
    }

    /// Value of a variable at a time index.
    pub fn at(&self, name: &str, time_index: usize) -> Option<&Field> {
        self.get(name).and_then(|v| v.at(time_index))
    }

    /// Full time series of a variable.
    pub fn series(&self, name: &str) -> Option<&[Field]> {
        self.get(name).map(|v| v.values.as_slice())
    }

    /// The time series of a variable as a single array with the time dimension first.
    pub fn stacked(&self, name: &str) -> NsmResult<Field> {
        let variable = self.get(name).ok_or_else(|| {
            NsmError::Error(format!("Variable '{}' is not in the dataset", name))
        })?;
        let views: Vec<ArrayViewD<f64>> = variable.values.iter().map(|v| v.view()).collect();
        stack(Axis(0), &views).map_err(|_| NsmError::Shape {
            variable: name.to_string(),
            shapes: variable.values.iter().map(|v| v.shape().to_vec()).collect(),
        })
    }

    /// Variable names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(|k| k.as_str())
    }

    pub fn variables(&self) -> impl Iterator<Item = &DataVariable> {
        self.variables.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::scalar;
    use ndarray::array;

    fn dataset() -> Dataset {
        let mut ds = Dataset::new("time");
        ds.add_variable("x", "mg/L", VariableKind::State, None, scalar(1.0))
            .unwrap();
        ds.add_variable(
            "k",
            "1/d",
            VariableKind::Static,
            Some("Rate".to_string()),
            scalar(0.5),
        )
        .unwrap();
        ds
    }

    fn slice(x: f64, k: f64) -> IndexMap<String, Field> {
        IndexMap::from([
            ("x".to_string(), scalar(x)),
            ("k".to_string(), scalar(k)),
        ])
    }

    #[test]
    fn append_and_access() {
        let mut ds = dataset();
        assert_eq!(ds.len(), 1);
        ds.increment_timestep(&slice(2.0, 0.5)).unwrap();
        ds.increment_timestep(&slice(3.0, 0.5)).unwrap();

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.time_dim(), "time");
        assert_eq!(ds.at("x", 1), Some(&scalar(2.0)));
        assert!(ds.at("x", 3).is_none());
        assert_eq!(
            ds.get("x").unwrap().scalar_values(),
            Some(vec![1.0, 2.0, 3.0])
        );
        assert_eq!(ds.series("k").unwrap().len(), 3);
        assert_eq!(ds.names().collect::<Vec<_>>(), vec!["x", "k"]);
    }

    #[test]
    fn missing_value_in_slice() {
        let mut ds = dataset();
        let partial = IndexMap::from([("x".to_string(), scalar(2.0))]);
        assert!(ds.increment_timestep(&partial).is_err());
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.series("x").unwrap().len(), 1);
    }

    #[test]
    fn cannot_add_after_extension() {
        let mut ds = dataset();
        ds.increment_timestep(&slice(2.0, 0.5)).unwrap();
        assert!(ds
            .add_variable("y", "1", VariableKind::Dynamic, None, scalar(f64::NAN))
            .is_err());
        assert!(ds
            .add_variable("x", "1", VariableKind::Dynamic, None, scalar(0.0))
            .is_err());
    }

    #[test]
    fn stacked_puts_time_first() {
        let mut ds = Dataset::new("t");
        ds.add_variable(
            "v",
            "1",
            VariableKind::State,
            None,
            array![1.0, 2.0].into_dyn(),
        )
        .unwrap();
        ds.increment_timestep(&IndexMap::from([(
            "v".to_string(),
            array![3.0, 4.0].into_dyn(),
        )]))
        .unwrap();

        let stacked = ds.stacked("v").unwrap();
        assert_eq!(stacked, array![[1.0, 2.0], [3.0, 4.0]].into_dyn());
        assert!(ds.stacked("missing").is_err());
    }

    #[test]
    fn serialises() {
        let mut ds = dataset();
        ds.increment_timestep(&slice(2.0, 0.5)).unwrap();
        let serialised = serde_json::to_string(&ds).unwrap();
        let deserialised: Dataset = serde_json::from_str(&serialised).unwrap();
        assert_eq!(ds, deserialised);
    }
}
