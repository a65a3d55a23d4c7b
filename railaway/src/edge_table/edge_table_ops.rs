use std::{
    fs::File,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use flate2::{write::GzEncoder, Compression};
use itertools::Itertools;

use super::{EdgeTableRow, EDGE_TABLE_COLUMNS};
use crate::{
    util::fs::{create_dirs, file_error, is_gzip, open_reader},
    RailawayError,
};

/// writes the edge table as CSV, sorted by origin stop id then destination
/// stop id. the header is always written, so an empty table is header-only.
///
/// # Returns
///
/// the destination, flushed
pub fn write_edge_table<W: Write>(
    rows: &[EdgeTableRow],
    destination: W,
) -> Result<W, RailawayError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(destination);
    writer.write_record(EDGE_TABLE_COLUMNS)?;
    let sorted = rows.iter().sorted_by(|a, b| {
        a.from_stop_id
            .cmp(&b.from_stop_id)
            .then_with(|| a.to_stop_id.cmp(&b.to_stop_id))
    });
    for row in sorted {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| RailawayError::FileError(String::from("<edge table>"), e.into_error()))
}

/// writes the edge table to a file. a `.gz` extension selects gzip
/// compression. the table is written to a temporary file next to `path` which
/// is renamed into place once complete, so a failure never leaves a partial
/// table at `path`.
///
/// # Arguments
///
/// * `rows` - table contents
/// * `path` - output file
/// * `overwrite` - if false, an existing file at `path` is an error
pub fn write_edge_table_file(
    rows: &[EdgeTableRow],
    path: &Path,
    overwrite: bool,
) -> Result<(), RailawayError> {
    if path.exists() && !overwrite {
        return Err(RailawayError::OutputExists(
            path.to_string_lossy().to_string(),
        ));
    }
    if let Some(parent) = path.parent() {
        create_dirs(parent)?;
    }
    let tmp_path = temporary_path(path);
    if let Err(e) = write_to_path(rows, &tmp_path, is_gzip(path)) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e);
    }
    std::fs::rename(&tmp_path, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp_path);
        file_error(path, e)
    })?;
    log::info!("wrote {} edges to {}", rows.len(), path.to_string_lossy());
    Ok(())
}

/// reads an edge table, decoding the nested `type` and `stop_features`
/// columns.
pub fn read_edge_table<R: Read>(source: R) -> Result<Vec<EdgeTableRow>, RailawayError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(source);
    let rows = reader
        .deserialize::<EdgeTableRow>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// reads an edge table file, which may be gzipped.
pub fn read_edge_table_file(path: &Path) -> Result<Vec<EdgeTableRow>, RailawayError> {
    let rows = read_edge_table(open_reader(path)?)?;
    log::debug!("read {} edges from {}", rows.len(), path.to_string_lossy());
    Ok(rows)
}

fn write_to_path(rows: &[EdgeTableRow], path: &Path, gzip: bool) -> Result<(), RailawayError> {
    let file = File::create(path).map_err(|e| file_error(path, e))?;
    if gzip {
        let encoder = write_edge_table(rows, GzEncoder::new(file, Compression::default()))?;
        let file = encoder.finish().map_err(|e| file_error(path, e))?;
        file.sync_all().map_err(|e| file_error(path, e))
    } else {
        let file = write_edge_table(rows, file)?;
        file.sync_all().map_err(|e| file_error(path, e))
    }
}

fn temporary_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    path.with_file_name(format!(".{file_name}.tmp"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(from: &str, to: &str, travel_time: u32) -> EdgeTableRow {
        EdgeTableRow {
            from_stop_id: String::from(from),
            from_stop_name: format!("Stop {from}"),
            from_stop_lon: 7.4391,
            from_stop_lat: 46.949,
            to_stop_id: String::from(to),
            to_stop_name: format!("Stop {to}"),
            to_stop_lon: 8.5403,
            to_stop_lat: 47.3781,
            travel_time,
            categories: vec![String::from("park"), String::from("arts")],
            stop_features: vec![
                json!({
                    "type": "Feature",
                    "geometry": {"type": "Point", "coordinates": [8.54, 47.378]},
                    "properties": {"leisure": "park", "name": "Platzspitz, \"Zürich\""}
                }),
                json!({"type": "Feature", "geometry": null, "properties": {"museum": "art"}}),
            ],
        }
    }

    fn test_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("railaway-{name}-{}", std::process::id()))
    }

    #[test]
    fn test_empty_table_is_header_only() {
        let bytes = write_edge_table(&[], vec![]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "from_stop_id,from_stop_name,from_stop_lon,from_stop_lat,to_stop_id,to_stop_name,to_stop_lon,to_stop_lat,travel_time,type,stop_features\n"
        );
        assert!(read_edge_table(text.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_nested_columns_survive_a_write() {
        let rows = vec![row("8507000", "8503000", 56), row("8503000", "8507000", 7)];
        let bytes = write_edge_table(&rows, vec![]).unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.contains(r#""[""park"",""arts""]""#));

        let read = read_edge_table(bytes.as_slice()).unwrap();
        assert_eq!(read.len(), 2);
        assert_eq!(read[0], rows[1]);
        assert_eq!(read[1], rows[0]);
    }

    #[test]
    fn test_feature_coordinates_keep_full_precision() {
        let mut positions = vec![
            (8.5403 / 3.0, 29.579772991137098),
            (0.1 + 0.2, 47.3781 * 3.0),
            (-1.0 / 3.0, 1e-300),
        ];
        positions.extend((1..200).map(|i| (i as f64 / 7.0, 46.0 + i as f64 / 3.0)));
        let mut edge = row("8507000", "8503000", 56);
        edge.stop_features = positions
            .iter()
            .map(|(lon, lat)| {
                json!({
                    "type": "Feature",
                    "geometry": {"type": "Point", "coordinates": [lon, lat]},
                    "properties": {}
                })
            })
            .collect();
        let rows = vec![edge];
        let bytes = write_edge_table(&rows, vec![]).unwrap();
        let read = read_edge_table(bytes.as_slice()).unwrap();
        assert_eq!(read, rows);
        let lat = &read[0].stop_features[0]["geometry"]["coordinates"][1];
        assert_eq!(lat.as_f64(), Some(29.579772991137098));
    }

    #[test]
    fn test_rows_sorted_by_origin_then_destination() {
        let mut a = row("8500002", "8500001", 1);
        a.categories = vec![];
        a.stop_features = vec![];
        let rows = vec![
            a,
            row("8500001", "8500003", 2),
            row("8500001", "8500002", 3),
        ];
        let bytes = write_edge_table(&rows, vec![]).unwrap();
        let read = read_edge_table(bytes.as_slice()).unwrap();
        let order = read
            .iter()
            .map(|r| (r.from_stop_id.as_str(), r.to_stop_id.as_str()))
            .collect_vec();
        assert_eq!(
            order,
            vec![
                ("8500001", "8500002"),
                ("8500001", "8500003"),
                ("8500002", "8500001"),
            ]
        );
        assert!(read[2].categories.is_empty());
    }

    #[test]
    fn test_gzip_file_and_overwrite() {
        let dir = test_dir("edge-table-gz");
        let path = dir.join("out").join("edges.csv.gz");
        let rows = vec![row("8507000", "8503000", 56)];
        write_edge_table_file(&rows, &path, false).unwrap();
        assert!(!temporary_path(&path).exists());
        assert_eq!(read_edge_table_file(&path).unwrap(), rows);

        match write_edge_table_file(&rows, &path, false) {
            Err(RailawayError::OutputExists(_)) => {}
            other => panic!("expected existing output error, found {other:?}"),
        }
        write_edge_table_file(&[], &path, true).unwrap();
        assert!(read_edge_table_file(&path).unwrap().is_empty());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_plain_file() {
        let dir = test_dir("edge-table-csv");
        let path = dir.join("edges.csv");
        let rows = vec![row("8507000", "8503000", 56)];
        write_edge_table_file(&rows, &path, true).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("from_stop_id,"));
        assert_eq!(read_edge_table_file(&path).unwrap(), rows);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
