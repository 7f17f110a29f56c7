//! Boundary traits shared across the workspace

use crate::error::Result;
use crate::series::Series;

/// A producer of flight series
///
/// The detection pipeline treats its data source as a black box; synthetic
/// generators and test fixtures both plug in here.
pub trait SeriesSource {
    /// Produce the series to analyse
    fn generate(&self) -> Result<Series>;

    /// Short name used in logs
    fn source_name(&self) -> &'static str;
}

impl SeriesSource for Series {
    fn generate(&self) -> Result<Series> {
        Ok(self.clone())
    }

    fn source_name(&self) -> &'static str {
        "in-memory"
    }
}
