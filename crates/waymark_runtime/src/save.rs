//! Save files in `MessagePack` format.
//!
//! Each save is one `save-<n>.sav` file in the save directory holding the
//! game and the player.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use waymark_engine::persistence::{browse_saves, next_save_name, restore};
use waymark_engine::{ActionResult, Persistence};
use waymark_foundation::{Error, Result};
use waymark_storage::{Game, Player};

/// File extension for save files.
pub const SAVE_EXTENSION: &str = "sav";

/// Contents of one save file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaveFile {
    /// World state.
    pub game: Game,
    /// Player state.
    pub player: Player,
}

/// Serializes a save using `MessagePack` with named fields.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(save: &SaveFile) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(save).map_err(|e| Error::serialization(e.to_string()))
}

/// Deserializes a save from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<SaveFile> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::serialization(e.to_string()))
}

/// Writes a save to a file, replacing it if it exists.
///
/// # Errors
///
/// Returns an error if the file cannot be written or serialization fails.
pub fn save_to_file<P: AsRef<Path>>(save: &SaveFile, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| Error::io(format!("failed to create file '{}': {e}", path.display())))?;

    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(save)?;
    writer
        .write_all(&bytes)
        .map_err(|e| Error::io(format!("failed to write to file '{}': {e}", path.display())))?;
    writer
        .flush()
        .map_err(|e| Error::io(format!("failed to flush file '{}': {e}", path.display())))?;
    Ok(())
}

/// Reads a save from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<SaveFile> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::io(format!("failed to open file '{}': {e}", path.display())))?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(format!("failed to read file '{}': {e}", path.display())))?;
    from_bytes(&bytes)
}

/// Keeps saves as files in one directory.
#[derive(Clone, Debug)]
pub struct FilePersistence {
    dir: PathBuf,
}

impl FilePersistence {
    /// Creates a store over `dir`. The directory is created on first save.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The save directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{SAVE_EXTENSION}"))
    }

    /// Names of the saves on disk, in slot order.
    ///
    /// A missing directory has no saves.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be read.
    pub fn names(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::io(format!(
                    "failed to read save directory '{}': {e}",
                    self.dir.display()
                )));
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == SAVE_EXTENSION))
            .filter_map(|path| path.file_stem().and_then(|stem| stem.to_str()).map(str::to_string))
            .collect();
        names.sort_by_key(|name| (slot_number(name), name.clone()));
        Ok(names)
    }

    fn write(&self, game: &Game, player: &Player) -> Result<String> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            Error::io(format!(
                "failed to create save directory '{}': {e}",
                self.dir.display()
            ))
        })?;
        let name = next_save_name(&self.names()?);
        let save = SaveFile {
            game: game.clone(),
            player: player.clone(),
        };
        save_to_file(&save, self.path_for(&name))?;
        Ok(name)
    }
}

/// Numeric suffix of `save-<n>`, so `save-10` sorts after `save-9`.
fn slot_number(name: &str) -> u64 {
    name.rsplit('-')
        .next()
        .and_then(|n| n.parse().ok())
        .unwrap_or(u64::MAX)
}

impl Persistence for FilePersistence {
    fn save(&mut self, mut game: Game, player: Player) -> Result<ActionResult> {
        match self.write(&game, &player) {
            Ok(name) => {
                tracing::info!(%name, dir = %self.dir.display(), "game saved");
                game.add_message(&format!("Game saved as {name}"), true, true);
                Ok(ActionResult::success(game, player))
            }
            Err(error) => {
                tracing::warn!(%error, "save failed");
                game.add_message("Unable to save the game", true, true);
                Ok(ActionResult::failure(game, player))
            }
        }
    }

    fn load(&mut self, mut game: Game, player: Player) -> Result<ActionResult> {
        if let Some(name) = game.saves_mut().take_selected() {
            return match load_from_file(self.path_for(&name)) {
                Ok(save) => restore(save.game, save.player),
                Err(error) => {
                    tracing::warn!(%error, %name, "load failed");
                    game.add_message(&format!("Unable to load {name}"), true, true);
                    Ok(ActionResult::failure(game, player))
                }
            };
        }

        match self.names() {
            Ok(names) => browse_saves(game, player, &names),
            Err(error) => {
                tracing::warn!(%error, "listing saves failed");
                game.add_message("Unable to read saved games", true, true);
                Ok(ActionResult::failure(game, player))
            }
        }
    }
}
