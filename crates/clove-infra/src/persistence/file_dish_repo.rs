//! File-based implementation of DishRepository

use std::path::PathBuf;

use clove_domain::model::DishRecord;
use clove_domain::repository::DishRepository;
use clove_types::Error;

use crate::dish_csv::load_dishes;

/// Dish table backed by a CSV file
pub struct FileDishRepository {
    csv_path: PathBuf,
}

impl FileDishRepository {
    /// Fails when the file does not exist
    pub fn new(csv_path: PathBuf) -> Result<Self, Error> {
        if !csv_path.exists() {
            return Err(Error::FileNotFound(format!(
                "Dish file not found: {}",
                csv_path.display()
            )));
        }
        Ok(Self { csv_path })
    }

    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}

impl DishRepository for FileDishRepository {
    fn find_all(&self) -> Result<Vec<DishRecord>, Error> {
        load_dishes(&self.csv_path).map_err(Into::into)
    }
}
