//! Decision tree calorie model stored as json.
//!
//! The tree is a classifier over whole kcal values, which is how the training
//! binary fits it: targets are floored into `usize` classes.

use std::{fs::File, io::BufReader, path::Path};

use linfa::{
    Dataset,
    traits::{Fit, Predict},
};
use ndarray::{Array1, Array2};

use crate::{CalorieModel, FEATURE_COUNT, FEATURE_NAMES, FeatureRecord};

pub type Tree = linfa_trees::DecisionTree<f64, usize>;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Failed to access model file. Reason: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to (de)serialize model. Reason: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to init dataset vector. Reason: {0}")]
    Shape(#[from] ndarray::ShapeError),
    #[error("Failed to fit dataset to model. Reason: {0}")]
    Fit(String),
    #[error("No training records")]
    EmptyDataset,
    #[error("Model returned no prediction")]
    EmptyPrediction,
}

#[derive(Debug, Clone)]
pub struct TreeModel {
    tree: Tree,
}

impl TreeModel {
    pub fn new(tree: Tree) -> Self {
        Self { tree }
    }

    /// Fits a tree on `(features, burnt kcal)` pairs.
    pub fn fit<'a>(
        records: impl IntoIterator<Item = (&'a FeatureRecord, f64)>,
    ) -> Result<Self, ModelError> {
        let mut data = Vec::new();
        let mut targets = Vec::new();

        for (features, kcal) in records {
            data.extend(features.to_row());
            targets.push(kcal);
        }

        if targets.is_empty() {
            return Err(ModelError::EmptyDataset);
        }

        let data = Array2::from_shape_vec((targets.len(), FEATURE_COUNT), data)?;

        let train = Dataset::new(data, Array1::from(targets))
            .with_feature_names(FEATURE_NAMES.to_vec())
            .map_targets(|this| this.floor() as usize);

        let tree = linfa_trees::DecisionTree::params()
            .fit(&train)
            .map_err(|e| ModelError::Fit(e.to_string()))?;

        Ok(Self { tree })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let reader = BufReader::new(File::open(path)?);

        Ok(Self {
            tree: serde_json::from_reader(reader)?,
        })
    }

    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(&self.tree)?)
    }

    /// Note: truncates an existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ModelError> {
        std::fs::write(path, self.to_json()?)?;

        Ok(())
    }
}

impl CalorieModel for TreeModel {
    type Error = ModelError;

    fn predict(&self, features: &FeatureRecord) -> Result<f64, Self::Error> {
        let data = Array2::from_shape_vec((1, FEATURE_COUNT), features.to_row().to_vec())?;

        self.tree
            .predict(&data)
            .first()
            .map(|this| *this as f64)
            .ok_or(ModelError::EmptyPrediction)
    }
}
