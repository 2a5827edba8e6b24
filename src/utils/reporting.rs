use std::path::Path;
use csv::WriterBuilder;
use log::info;
use crate::sorting::sorter::SortSummary;
use crate::Result;

pub struct Reporter;

impl Reporter {
    pub fn new() -> Self {
        Self
    }

    /// One row per discovered file followed by the totals.
    pub fn generate_move_report(&self, summary: &SortSummary, output_path: impl AsRef<Path>) -> Result<()> {
        let output_path_ref = output_path.as_ref();
        let mut writer = WriterBuilder::new().has_headers(false).from_path(output_path_ref)?;

        // header written by hand so an empty run still gets one
        writer.write_record(["Source", "Destination", "Outcome", "Detail"])?;

        for record in &summary.records {
            writer.serialize(record)?;
        }

        writer.write_record(["", "", "", ""])?;
        writer.write_record(["Total Files", summary.discovered.to_string().as_str(), "", ""])?;
        writer.write_record(["Moved", summary.moved.to_string().as_str(), "", ""])?;
        writer.write_record(["Skipped", summary.skipped.to_string().as_str(), "", ""])?;
        writer.write_record(["Failed", summary.failed.to_string().as_str(), "", ""])?;

        writer.flush()?;
        info!("Report generated: {}", output_path_ref.display());
        Ok(())
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}
