use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, info};

use crate::catalog::FoodCatalog;
use crate::error::Result;
use crate::models::FoodItem;

/// Load the food catalog from a CSV file.
///
/// Row order is preserved; the row position is the food's index.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let catalog = FoodCatalog::from_reader(file)?;
    info!("Loaded {} foods from {}", catalog.len(), path.display());
    Ok(catalog)
}

impl FoodCatalog {
    /// Read a catalog from any CSV source with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut foods = Vec::new();
        for (row, record) in rdr.deserialize::<FoodItem>().enumerate() {
            let food = record?;
            debug!("Catalog row {}: {}", row, food.debug_string());
            foods.push(food);
        }

        Self::new(foods)
    }
}
