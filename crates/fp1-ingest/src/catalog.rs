//! Recipe catalog reader.
//!
//! The catalog is a CSV file with a header row followed by one recipe per
//! row, in the column order of [`CATALOG_COLUMNS`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{Position, ReaderBuilder};
use tracing::{debug, info};

use fp1_model::Recipe;

use crate::error::{IngestError, Result};

/// Catalog column names, in file order.
pub const CATALOG_COLUMNS: [&str; 14] = [
    "label",
    "film simulation",
    "grain",
    "chrome effect",
    "white balance",
    "wb shift r",
    "wb shift b",
    "dynamic range",
    "highlight tone",
    "shadow tone",
    "color",
    "sharpness",
    "noise reduction",
    "exposure bias",
];

/// Reads the catalog at `path`.
pub fn read_catalog(path: &Path) -> Result<Vec<Recipe>> {
    info!(path = %path.display(), "loading recipe catalog");
    let file = File::open(path).map_err(|source| IngestError::io(path, source))?;
    let recipes = parse_catalog(file, path)?;
    info!(recipe_count = recipes.len(), "recipe catalog loaded");
    Ok(recipes)
}

/// Parses catalog CSV from `reader`; `source` is only used in error messages.
///
/// The first row is a header and is skipped. Any malformed row aborts the
/// whole parse.
pub fn parse_catalog<R: Read>(reader: R, source: &Path) -> Result<Vec<Recipe>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let mut recipes = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source_err| IngestError::Csv {
            path: source.to_path_buf(),
            source: source_err,
        })?;
        let line = record.position().map_or(0, Position::line);
        let fields: Vec<&str> = record.iter().collect();
        let recipe = parse_record(&fields, source, line)?;
        debug!(line, label = %recipe.label, "parsed recipe");
        recipes.push(recipe);
    }
    Ok(recipes)
}

/// Builds a [`Recipe`] from one catalog row.
///
/// Extra trailing fields are ignored.
pub fn parse_record(fields: &[&str], source: &Path, line: u64) -> Result<Recipe> {
    if fields.len() < CATALOG_COLUMNS.len() {
        return Err(IngestError::ColumnCount {
            path: source.to_path_buf(),
            line,
            expected: CATALOG_COLUMNS.len(),
            found: fields.len(),
        });
    }
    let int = |index: usize| parse_i8(fields[index], index, source, line);
    let (chrome_effect, chrome_effect_blue) = split_chrome_effect(fields[3]);
    Ok(Recipe {
        label: fields[0].to_string(),
        film_simulation: fields[1].to_string(),
        grain: fields[2].to_string(),
        chrome_effect,
        chrome_effect_blue,
        white_balance: fields[4].to_string(),
        wb_shift_r: int(5)?,
        wb_shift_b: int(6)?,
        dynamic_range: fields[7].to_string(),
        highlight_tone: int(8)?,
        shadow_tone: int(9)?,
        color: int(10)?,
        sharpness: int(11)?,
        noise_reduction: int(12)?,
        exposure_bias: fields[13].to_string(),
    })
}

/// Splits a `primary[/blue]` chrome effect cell.
///
/// A single token sets both values.
pub fn split_chrome_effect(field: &str) -> (String, String) {
    let mut tokens = field.split('/');
    let primary = tokens.next().unwrap_or_default();
    let blue = tokens.next().unwrap_or(primary);
    (primary.to_string(), blue.to_string())
}

fn parse_i8(value: &str, index: usize, source: &Path, line: u64) -> Result<i8> {
    value
        .trim()
        .parse::<i8>()
        .map_err(|err| IngestError::InvalidInteger {
            path: source.to_path_buf(),
            line,
            column: CATALOG_COLUMNS[index],
            value: value.to_string(),
            source: err,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> &'static Path {
        Path::new("recipes.csv")
    }

    #[test]
    fn split_chrome_effect_with_blue_token() {
        assert_eq!(
            split_chrome_effect("B&W/BLUE"),
            ("B&W".to_string(), "BLUE".to_string())
        );
    }

    #[test]
    fn split_chrome_effect_single_token_sets_both() {
        assert_eq!(
            split_chrome_effect("OFF"),
            ("OFF".to_string(), "OFF".to_string())
        );
    }

    #[test]
    fn split_chrome_effect_ignores_third_token() {
        assert_eq!(
            split_chrome_effect("STRONG/WEAK/EXTRA"),
            ("STRONG".to_string(), "WEAK".to_string())
        );
    }

    #[test]
    fn parse_record_maps_columns_in_order() {
        let fields = [
            "Kodachrome 64",
            "CLASSIC CHROME",
            "WEAK",
            "STRONG/WEAK",
            "Daylight",
            "2",
            "-5",
            "DR200",
            "0",
            "+1",
            "2",
            "1",
            "-4",
            "-2/3",
        ];
        let recipe = parse_record(&fields, source(), 2).expect("parse record");
        assert_eq!(recipe.label, "Kodachrome 64");
        assert_eq!(recipe.film_simulation, "CLASSIC CHROME");
        assert_eq!(recipe.grain, "WEAK");
        assert_eq!(recipe.chrome_effect, "STRONG");
        assert_eq!(recipe.chrome_effect_blue, "WEAK");
        assert_eq!(recipe.white_balance, "Daylight");
        assert_eq!(recipe.wb_shift_r, 2);
        assert_eq!(recipe.wb_shift_b, -5);
        assert_eq!(recipe.dynamic_range, "DR200");
        assert_eq!(recipe.highlight_tone, 0);
        assert_eq!(recipe.shadow_tone, 1);
        assert_eq!(recipe.color, 2);
        assert_eq!(recipe.sharpness, 1);
        assert_eq!(recipe.noise_reduction, -4);
        assert_eq!(recipe.exposure_bias, "-2/3");
    }

    #[test]
    fn parse_record_rejects_short_rows() {
        let fields = ["Label", "ASTIA", "OFF"];
        let err = parse_record(&fields, source(), 7).unwrap_err();
        match err {
            IngestError::ColumnCount {
                line,
                expected,
                found,
                ..
            } => {
                assert_eq!(line, 7);
                assert_eq!(expected, 14);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_record_reports_malformed_integer_column() {
        let fields = [
            "Label", "ASTIA", "OFF", "OFF", "Auto", "1", "-1", "DR100", "abc", "0", "0", "0",
            "0", "0",
        ];
        let err = parse_record(&fields, source(), 3).unwrap_err();
        match err {
            IngestError::InvalidInteger {
                line,
                column,
                value,
                ..
            } => {
                assert_eq!(line, 3);
                assert_eq!(column, "highlight tone");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_integer_message_leaves_cause_to_source_chain() {
        use std::error::Error;

        let fields = [
            "Label", "ASTIA", "OFF", "OFF", "Auto", "1", "q", "DR100", "0", "0", "0", "0", "0",
            "0",
        ];
        let err = parse_record(&fields, source(), 4).unwrap_err();
        assert_eq!(
            err.to_string(),
            "recipes.csv:4: invalid integer 'q' in column wb shift b"
        );
        assert!(err.source().is_some());
        match err {
            IngestError::InvalidInteger { .. } => {}
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_record_rejects_out_of_range_integer() {
        let fields = [
            "Label", "ASTIA", "OFF", "OFF", "Auto", "300", "0", "DR100", "0", "0", "0", "0", "0",
            "0",
        ];
        let err = parse_record(&fields, source(), 2).unwrap_err();
        assert!(matches!(
            err,
            IngestError::InvalidInteger {
                column: "wb shift r",
                ..
            }
        ));
    }

    #[test]
    fn parse_catalog_skips_header_and_keeps_order() {
        let csv = "\
Name,Film,Grain,CCFx,WB,R,B,DR,H,S,Color,Sharp,NR,EV
First,ASTIA,STRONG,B&W/BLUE,Auto,1,-1,DR200,1,0,0,2,1,0
Second,PROVIA,OFF,OFF,Daylight,0,0,DR100,-1,-1,1,0,-2,+1/3
";
        let recipes = parse_catalog(csv.as_bytes(), source()).expect("parse catalog");
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].label, "First");
        assert_eq!(recipes[0].chrome_effect, "B&W");
        assert_eq!(recipes[0].chrome_effect_blue, "BLUE");
        assert_eq!(recipes[1].label, "Second");
        assert_eq!(recipes[1].chrome_effect, "OFF");
        assert_eq!(recipes[1].chrome_effect_blue, "OFF");
        assert_eq!(recipes[1].exposure_bias, "+1/3");
    }

    #[test]
    fn parse_catalog_header_only_is_empty() {
        let csv = "Name,Film,Grain,CCFx,WB,R,B,DR,H,S,Color,Sharp,NR,EV\n";
        let recipes = parse_catalog(csv.as_bytes(), source()).expect("parse catalog");
        assert!(recipes.is_empty());
    }

    #[test]
    fn parse_catalog_empty_input_is_empty() {
        let recipes = parse_catalog("".as_bytes(), source()).expect("parse catalog");
        assert!(recipes.is_empty());
    }

    #[test]
    fn parse_catalog_rejects_uneven_rows() {
        let csv = "\
Name,Film,Grain,CCFx,WB,R,B,DR,H,S,Color,Sharp,NR,EV
First,ASTIA,STRONG,OFF,Auto,1,-1,DR200,1,0,0,2,1,0,extra
";
        let err = parse_catalog(csv.as_bytes(), source()).unwrap_err();
        assert!(matches!(err, IngestError::Csv { .. }));
    }

    #[test]
    fn parse_catalog_stops_at_first_bad_row() {
        let csv = "\
Name,Film,Grain,CCFx,WB,R,B,DR,H,S,Color,Sharp,NR,EV
Good,ASTIA,STRONG,OFF,Auto,1,-1,DR200,1,0,0,2,1,0
Bad,ASTIA,STRONG,OFF,Auto,x,-1,DR200,1,0,0,2,1,0
Later,ASTIA,STRONG,OFF,Auto,1,-1,DR200,1,0,0,2,1,0
";
        let err = parse_catalog(csv.as_bytes(), source()).unwrap_err();
        match err {
            IngestError::InvalidInteger { line, value, .. } => {
                assert_eq!(line, 3);
                assert_eq!(value, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
