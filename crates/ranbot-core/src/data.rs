//! JSON file data source for the static mock records.

use crate::{
    config::DataConfig,
    error::RanbotError,
    records::{DailySalesRecord, IngredientStock},
    traits::DataSource,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads the sales and stock files from disk on every call.
pub struct JsonFileSource {
    daily_sales_path: PathBuf,
    ingredients_path: PathBuf,
}

impl JsonFileSource {
    pub fn new(daily_sales_path: impl Into<PathBuf>, ingredients_path: impl Into<PathBuf>) -> Self {
        Self {
            daily_sales_path: daily_sales_path.into(),
            ingredients_path: ingredients_path.into(),
        }
    }

    pub fn from_config(config: &DataConfig) -> Self {
        Self::new(config.daily_sales_path(), config.ingredients_path())
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, RanbotError> {
    debug!("data: reading {}", path.display());
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        RanbotError::DataUnavailable(format!("failed to read {}: {e}", path.display()))
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        RanbotError::DataUnavailable(format!("malformed {}: {e}", path.display()))
    })
}

#[async_trait]
impl DataSource for JsonFileSource {
    async fn load_daily_sales(&self) -> Result<DailySalesRecord, RanbotError> {
        read_json(&self.daily_sales_path).await
    }

    async fn load_ingredient_stock(&self) -> Result<IngredientStock, RanbotError> {
        read_json(&self.ingredients_path).await
    }
}
