// Copyright 2025 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.
//
// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

use std::path::Path;
use tracing::info;

use super::record::ObjectRecord;

/// Serialize the full record sequence to a comma-separated UTF-8 file.
///
/// One header row naming the 26 columns, then one row per record in input
/// order. An empty record sequence still produces the header row, so the
/// external table schema stays satisfiable.
pub fn write_csv(path: &Path, records: &[ObjectRecord]) -> csv::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    if records.is_empty() {
        // serialize() would never run, so emit the header explicitly
        writer.write_record(ObjectRecord::COLUMNS)?;
    }
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!(
        "Wrote CSV, path={}, rows={}",
        path.display(),
        records.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ObjectAttrs;
    use tempfile::tempdir;

    fn record(name: &str) -> ObjectRecord {
        ObjectRecord::from_attrs(&ObjectAttrs {
            bucket: "bucket".to_string(),
            name: name.to_string(),
            id: format!("bucket/{}/42", name),
            storage_class: "STANDARD".to_string(),
            size: 1024,
            generation: 42,
            metageneration: 1,
            etag: "etag".to_string(),
            media_link: format!("https://storage.googleapis.com/download/bucket/{}", name),
            ..ObjectAttrs::default()
        })
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.csv");
        let records = vec![record("a.txt"), record("dir/b.txt"), record("c.bin")];

        write_csv(&path, &records).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(|h| h.to_string())
            .collect();
        assert_eq!(headers, ObjectRecord::COLUMNS);

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][1], "a.txt");
        assert_eq!(&rows[1][1], "dir/b.txt");
        assert_eq!(&rows[1][2], "b.txt");
    }

    #[test]
    fn test_empty_sequence_still_writes_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        write_csv(&path, &[]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("bucket_name,blob_name,"));
        assert!(header.ends_with("retention_expiration_time"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_values_survive_commas() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quoted.csv");
        let mut rec = record("a.txt");
        rec.content_disposition = "attachment; filename=\"a, b.txt\"".to_string();

        write_csv(&path, std::slice::from_ref(&rec)).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[17], "attachment; filename=\"a, b.txt\"");
    }

    #[test]
    fn test_header_matches_serialized_field_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("order.csv");
        write_csv(&path, &[record("x")]).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(|h| h.to_string())
            .collect();
        // serde-derived header must agree with the declared column order
        assert_eq!(headers, ObjectRecord::COLUMNS);
    }
}
