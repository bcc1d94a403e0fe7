use crate::metrics::{AggregatedMedia, MEDIA_ID_COLUMN, METRIC_SCHEMA};
use std::io::Write;

/// Write one header row and one row per entry. Absent values become empty fields.
pub fn generate<W: Write>(aggregated: &AggregatedMedia, writer: W) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(core::iter::once(MEDIA_ID_COLUMN).chain(METRIC_SCHEMA.iter().map(|def| def.name)))?;

    for (media_id, entry) in aggregated.iter() {
        let values = entry.iter().map(|(_, value)| value.map(ToString::to_string).unwrap_or_default());
        writer.write_record(core::iter::once(media_id.to_string()).chain(values))?;
    }

    writer.flush()?;
    Ok(())
}
