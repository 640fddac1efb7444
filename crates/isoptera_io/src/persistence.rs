//! Engine snapshots saved as gzip-compressed JSON.

use crate::error::{IoError, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use isoptera_core::EngineSnapshot;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

pub fn save_snapshot<P: AsRef<Path>>(snapshot: &EngineSnapshot, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| IoError::FileSystem(e).with_context(format!("creating {:?}", path)))?;
    let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
    serde_json::to_writer(&mut encoder, snapshot)?;
    let mut inner = encoder
        .finish()
        .map_err(|e| IoError::compression(format!("finishing gzip stream: {e}")))?;
    inner.flush()?;
    tracing::debug!(path = ?path, steps = snapshot.steps, "Saved snapshot");
    Ok(())
}

/// Loads a snapshot and rejects grids whose dimensions disagree with their
/// cell count or cursor.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<EngineSnapshot> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| IoError::FileSystem(e).with_context(format!("opening {:?}", path)))?;
    let mut decoder = GzDecoder::new(BufReader::new(file));
    let mut json = Vec::new();
    decoder
        .read_to_end(&mut json)
        .map_err(|e| IoError::compression(format!("{:?} is not a gzip snapshot: {e}", path)))?;
    let snapshot: EngineSnapshot = serde_json::from_slice(&json)?;

    if !snapshot.grid.is_well_formed() {
        return Err(IoError::validation(format!(
            "grid in {:?} does not match its dimensions",
            path
        )));
    }
    if snapshot.cursor.x >= snapshot.width() || snapshot.cursor.y >= snapshot.height() {
        return Err(IoError::validation(format!(
            "cursor {} in {:?} is outside the grid",
            snapshot.cursor, path
        )));
    }
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use isoptera_core::{Engine, Pattern};

    #[test]
    fn test_snapshot_survives_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.json.gz");

        let mut engine = Engine::new(40, 30, Pattern::Spiral.table().unwrap(), 0).unwrap();
        let _ = engine.run(500);
        let snapshot = engine.snapshot();

        save_snapshot(&snapshot, &path).unwrap();
        assert_eq!(load_snapshot(&path).unwrap(), snapshot);
    }

    #[test]
    fn test_plain_json_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.json");
        std::fs::write(&path, "{}").unwrap();
        assert!(matches!(load_snapshot(&path), Err(IoError::Compression(_))));
    }

    #[test]
    fn test_inconsistent_grid_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json.gz");
        let json = r#"{"steps":0,"grid":{"width":2,"height":2,"cells":[0]},
            "cursor":{"x":0,"y":0},"heading":"North","state":0,"halted":false}"#;
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(json.as_bytes()).unwrap();
        encoder.finish().unwrap();

        assert!(matches!(load_snapshot(&path), Err(IoError::Validation(_))));
    }
}
