// ==========================================
// Shipping Relay Planner - configuration
// ==========================================
// Responsibility: data directory resolution, catalog file locations,
// batch file naming, home facility id.
// ==========================================

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::domain::types::DayTag;

/// Facility id of the plant this planner runs at. Products from any
/// other origin facility show up in the inbound analysis.
pub const DEFAULT_HOME_PLANT: u32 = 191;

// ==========================================
// AppConfig - runtime configuration
// ==========================================
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub home_plant: u32,
}

impl AppConfig {
    /// Configuration rooted at an explicit data directory.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            home_plant: DEFAULT_HOME_PLANT,
        }
    }

    /// Default configuration: catalog and batch files live in the
    /// platform data directory, falling back to the working directory
    /// when none is available.
    pub fn from_default_dirs() -> Self {
        let data_dir = dirs::data_dir()
            .map(|d| d.join("relay-planner"))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::with_data_dir(data_dir)
    }

    pub fn products_file(&self) -> PathBuf {
        self.data_dir.join("products.json")
    }

    pub fn routes_file(&self) -> PathBuf {
        self.data_dir.join("routes.json")
    }

    /// Batch file name for one confirmed date/day, e.g.
    /// `orders_2026-08-28_Day4.json`.
    pub fn batch_file(&self, date: NaiveDate, day: DayTag) -> PathBuf {
        self.data_dir
            .join(format!("orders_{}_Day{}.json", date, day.as_number()))
    }

    /// Make sure the data directory exists.
    pub fn ensure_data_dir(&self) -> std::io::Result<&Path> {
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(&self.data_dir)
    }
}
