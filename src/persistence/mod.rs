//! Save/load of the artwork to a string key-value store
//!
//! Layout (shared with LocalStorage in the browser):
//! - `pixelArt`: JSON array of color strings, row-major
//! - `gridSize`: decimal grid dimension
//!
//! Both keys are written on save and both must be present on load. The pair
//! is validated in full before anything is handed back to the editor.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::editor::{Color, Grid};
use crate::error::EditorError;

pub const ART_KEY: &str = "pixelArt";
pub const SIZE_KEY: &str = "gridSize";

/// String-keyed, string-valued store (LocalStorage or in-memory)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, EditorError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), EditorError>;
    fn remove(&mut self, key: &str) -> Result<(), EditorError>;
}

/// Store backed by a HashMap; used natively and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, EditorError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), EditorError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), EditorError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Serialized snapshot of a grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedArtwork {
    pub grid_size: usize,
    pub cell_colors: Vec<Color>,
}

impl PersistedArtwork {
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            grid_size: grid.size(),
            cell_colors: grid.cells().to_vec(),
        }
    }

    /// Decode the two stored values; `None` for either means nothing was saved
    pub fn decode(art: Option<&str>, size: Option<&str>) -> Result<Self, EditorError> {
        let (Some(art), Some(size)) = (art, size) else {
            return Err(EditorError::NoSavedGrid);
        };

        let grid_size: usize = size
            .trim()
            .parse()
            .map_err(|_| EditorError::CorruptData(format!("grid size {size:?} is not an integer")))?;
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&grid_size) {
            return Err(EditorError::CorruptData(format!(
                "grid size {grid_size} outside {MIN_GRID_SIZE}..={MAX_GRID_SIZE}"
            )));
        }

        let cell_colors: Vec<Color> = serde_json::from_str(art)
            .map_err(|e| EditorError::CorruptData(format!("cell colors: {e}")))?;
        if cell_colors.len() != grid_size * grid_size {
            return Err(EditorError::CorruptData(format!(
                "{} colors for a {grid_size}x{grid_size} grid",
                cell_colors.len()
            )));
        }

        Ok(Self {
            grid_size,
            cell_colors,
        })
    }

    /// Encode as `(pixelArt, gridSize)` values
    pub fn encode(&self) -> Result<(String, String), EditorError> {
        let art = serde_json::to_string(&self.cell_colors)
            .map_err(|e| EditorError::Storage(e.to_string()))?;
        Ok((art, self.grid_size.to_string()))
    }
}

/// Overwrite the saved artwork
pub fn save(store: &mut impl KeyValueStore, artwork: &PersistedArtwork) -> Result<(), EditorError> {
    let (art, size) = artwork.encode()?;
    store.set(ART_KEY, &art)?;
    store.set(SIZE_KEY, &size)?;
    log::info!("Artwork saved ({0}x{0})", artwork.grid_size);
    Ok(())
}

pub fn load(store: &impl KeyValueStore) -> Result<PersistedArtwork, EditorError> {
    let art = store.get(ART_KEY)?;
    let size = store.get(SIZE_KEY)?;
    PersistedArtwork::decode(art.as_deref(), size.as_deref())
}

/// Delete the saved artwork, if any
pub fn clear(store: &mut impl KeyValueStore) -> Result<(), EditorError> {
    store.remove(ART_KEY)?;
    store.remove(SIZE_KEY)?;
    log::info!("Saved artwork cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(art: &str, size: &str) -> MemoryStore {
        let mut store = MemoryStore::new();
        store.set(ART_KEY, art).unwrap();
        store.set(SIZE_KEY, size).unwrap();
        store
    }

    #[test]
    fn test_save_writes_both_keys() {
        let mut grid = Grid::new(2);
        grid.set(3, Color::from("#112233"));
        let mut store = MemoryStore::new();
        save(&mut store, &PersistedArtwork::from_grid(&grid)).unwrap();

        assert_eq!(store.get(SIZE_KEY).unwrap().as_deref(), Some("2"));
        assert_eq!(
            store.get(ART_KEY).unwrap().as_deref(),
            Some(r##"["white","white","white","#112233"]"##)
        );
    }

    #[test]
    fn test_load_missing() {
        assert_eq!(load(&MemoryStore::new()), Err(EditorError::NoSavedGrid));

        let mut store = MemoryStore::new();
        store.set(SIZE_KEY, "4").unwrap();
        assert_eq!(load(&store), Err(EditorError::NoSavedGrid));
    }

    #[test]
    fn test_load_non_integer_size() {
        let store = stored(r#"["white","white","white","white"]"#, "two");
        assert!(matches!(load(&store), Err(EditorError::CorruptData(_))));

        let store = stored(r#"["white","white","white","white"]"#, "2.5");
        assert!(matches!(load(&store), Err(EditorError::CorruptData(_))));
    }

    #[test]
    fn test_load_size_out_of_range() {
        let store = stored(r#"["white"]"#, "1");
        assert!(matches!(load(&store), Err(EditorError::CorruptData(_))));
    }

    #[test]
    fn test_load_malformed_colors() {
        let store = stored(r#"{"a":1}"#, "2");
        assert!(matches!(load(&store), Err(EditorError::CorruptData(_))));

        let store = stored(r#"["white",null,"white","white"]"#, "2");
        assert!(matches!(load(&store), Err(EditorError::CorruptData(_))));

        let store = stored("not json", "2");
        assert!(matches!(load(&store), Err(EditorError::CorruptData(_))));
    }

    #[test]
    fn test_load_length_mismatch_is_corrupt() {
        let store = stored(r#"["white","white","white"]"#, "2");
        assert!(matches!(load(&store), Err(EditorError::CorruptData(_))));

        let store = stored(r#"["white","white","white","white","red"]"#, "2");
        assert!(matches!(load(&store), Err(EditorError::CorruptData(_))));
    }

    #[test]
    fn test_load_valid() {
        let store = stored(r##"["white","#FF0000","white","white"]"##, "2");
        let artwork = load(&store).unwrap();
        assert_eq!(artwork.grid_size, 2);
        assert_eq!(artwork.cell_colors[1], Color::from("#FF0000"));
    }

    #[test]
    fn test_clear() {
        let mut store = stored(r#"["white","white","white","white"]"#, "2");
        clear(&mut store).unwrap();
        assert_eq!(load(&store), Err(EditorError::NoSavedGrid));
    }
}
