use crate::graph::CityBreakdown;
use std::io::Write;

const HEADER: [&str; 3] = ["city", "region", "value"];

/// Write a `city,region,value` table. The header is present even without rows.
pub fn generate<W: Write>(rows: &[CityBreakdown], writer: W) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);

    writer.write_record(HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(rows: &[CityBreakdown]) -> String {
        let mut output = Vec::new();
        generate(rows, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_header_without_rows() {
        assert_eq!(render(&[]), "city,region,value\n");
    }

    #[test]
    fn test_rows() {
        let rows = [
            CityBreakdown {
                city: "Austin".into(),
                region: "Texas".into(),
                value: 310,
            },
            CityBreakdown {
                city: "Singapore".into(),
                region: String::new(),
                value: 12,
            },
        ];

        assert_eq!(render(&rows), "city,region,value\nAustin,Texas,310\nSingapore,,12\n");
    }
}
