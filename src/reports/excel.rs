use super::Thumbnail;
use crate::error::{Chain, ImageError};
use crate::graph::redact;
use crate::metrics::{AggregatedMedia, MEDIA_ID_COLUMN, METRIC_SCHEMA, MetricValue};
use core::fmt::{Debug, Formatter};
use rust_xlsxwriter::{DocProperties, Format, Image, Workbook, Worksheet, XlsxError};

const LOG_TARGET: &str = "   reports";

/// Name of the single worksheet
pub const SHEET_NAME: &str = "Instagram Insights";

/// Header of the optional leading thumbnail column
pub const IMAGE_COLUMN: &str = "Thumbnail Image";

const IMAGE_COLUMN_WIDTH: f64 = 20.0;
const IMAGE_ROW_HEIGHT: f64 = 80.0;
const TEXT_ROW_HEIGHT: f64 = 20.0;

/// A rendered workbook, ready to be saved
pub struct Sheet {
    pub workbook: Workbook,
    pub images_embedded: usize,
}

impl Debug for Sheet {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sheet")
            .field("images_embedded", &self.images_embedded)
            .finish_non_exhaustive()
    }
}

/// Lay out `aggregated` as a single worksheet.
///
/// When `thumbnails` is given, a leading image column is added and `thumbnails[i]` is
/// embedded in the row of the i-th entry. A thumbnail that cannot be embedded is logged
/// and its row simply stays without an image.
#[expect(unused_results, reason = "rust_xlsxwriter methods return &mut Worksheet for chaining")]
pub fn generate(aggregated: &AggregatedMedia, thumbnails: Option<&[Option<Thumbnail>]>) -> Result<Sheet, XlsxError> {
    let mut workbook = Workbook::new();

    let properties = DocProperties::new().set_author("reel-insights");
    workbook.set_properties(&properties);

    let worksheet = workbook.add_worksheet().set_name(SHEET_NAME)?;
    let bold_format = Format::new().set_bold();

    let first_data_col = u16::from(thumbnails.is_some());
    if thumbnails.is_some() {
        worksheet.write_string_with_format(0, 0, IMAGE_COLUMN, &bold_format)?;
        worksheet.set_column_width(0, IMAGE_COLUMN_WIDTH)?;
    }

    worksheet.write_string_with_format(0, first_data_col, MEDIA_ID_COLUMN, &bold_format)?;
    for (idx, def) in METRIC_SCHEMA.iter().enumerate() {
        let col = schema_col(first_data_col, idx);
        worksheet.write_string_with_format(0, col, def.name, &bold_format)?;
        if let Some(width) = def.column_width {
            worksheet.set_column_width(col, width)?;
        }
    }

    worksheet.set_freeze_panes(1, 0)?;

    let mut images_embedded = 0;
    for (idx, (media_id, entry)) in aggregated.iter().enumerate() {
        #[expect(clippy::cast_possible_truncation, reason = "Row count limited by Excel's row limit")]
        let row = (idx + 1) as u32;

        worksheet.write_string(row, first_data_col, media_id)?;
        for (value_idx, (_, value)) in entry.iter().enumerate() {
            if let Some(value) = value {
                write_value(worksheet, row, schema_col(first_data_col, value_idx), value)?;
            }
        }

        let thumbnail = thumbnails.and_then(|thumbs| thumbs.get(idx)).and_then(Option::as_ref);
        let embedded = thumbnail.is_some_and(|thumb| match embed(worksheet, row, thumb) {
            Ok(()) => true,
            Err(e) => {
                log::warn!(target: LOG_TARGET, "{}", Chain(&e));
                false
            }
        });

        if embedded {
            images_embedded += 1;
            worksheet.set_row_height(row, IMAGE_ROW_HEIGHT)?;
        } else {
            worksheet.set_row_height(row, TEXT_ROW_HEIGHT)?;
        }
    }

    Ok(Sheet { workbook, images_embedded })
}

/// Physical column of the schema column at `idx`; the media id precedes the schema.
#[expect(clippy::cast_possible_truncation, reason = "Schema is far below Excel's u16 column limit")]
const fn schema_col(first_data_col: u16, idx: usize) -> u16 {
    first_data_col + 1 + idx as u16
}

#[expect(unused_results, reason = "rust_xlsxwriter methods return &mut Worksheet for chaining")]
#[expect(clippy::cast_precision_loss, reason = "Intentional conversion to f64 for Excel output")]
fn write_value(worksheet: &mut Worksheet, row: u32, col: u16, value: &MetricValue) -> Result<(), XlsxError> {
    match value {
        MetricValue::UInt(u) => {
            worksheet.write_number(row, col, *u as f64)?;
        }
        MetricValue::Float(f) => {
            worksheet.write_number(row, col, *f)?;
        }
        MetricValue::String(s) => {
            worksheet.write_string(row, col, s.as_str())?;
        }
    }
    Ok(())
}

fn embed(worksheet: &mut Worksheet, row: u32, thumbnail: &Thumbnail) -> Result<(), ImageError> {
    let embed_error = |source| ImageError::Embed {
        url: redact(&thumbnail.url),
        source,
    };

    let image = Image::new_from_buffer(&thumbnail.png).map_err(embed_error)?;
    let _ = worksheet.insert_image(row, 0, &image).map_err(embed_error)?;
    Ok(())
}
