//! In-memory INI document with lookup, mutation and file persistence.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::logging::{debug, error, info, warn};

use super::error::IniError;
use super::parse;
use super::types::Group;
use super::write;

/// An ordered INI document: the anonymous root group followed by named
/// groups in file order, plus an optional backing file path.
///
/// Group addressing throughout the API uses `Option<&str>`: `None` is the
/// root group, which always exists and cannot be deleted. Stores are
/// plain owned data; they are not thread-safe and carry no shared state,
/// so any number of independent stores may coexist.
///
/// # Example
///
/// ```
/// use mini_ini::IniStore;
///
/// let mut store = IniStore::new();
/// store.set(None, "greeting", "hello")?;
/// store.set(Some("net"), "port", "8080")?;
///
/// assert_eq!(store.get(Some("net"), "port"), Some("8080"));
/// assert_eq!(store.get_i64(Some("net"), "port", 0), 8080);
/// # Ok::<(), mini_ini::IniError>(())
/// ```
#[derive(Debug, Clone)]
pub struct IniStore {
    path: Option<PathBuf>,
    root: Group,
    groups: Vec<Group>,
}

impl Default for IniStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IniStore {
    /// Create an empty store with no backing path.
    pub fn new() -> Self {
        Self {
            path: None,
            root: Group::root(),
            groups: Vec::new(),
        }
    }

    /// Create an empty store bound to a path for future saves.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            root: Group::root(),
            groups: Vec::new(),
        }
    }

    /// Parse a store from a line stream. The store has no backing path.
    ///
    /// Malformed lines are dropped (lenient by design); only I/O errors
    /// fail the parse. Lines longer than [`MAX_LINE_LEN`](super::MAX_LINE_LEN)
    /// bytes are truncated.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, IniError> {
        parse::parse(reader)
    }

    /// Load a store from a file, binding the path for future saves.
    ///
    /// Fails with [`IniError::FileNotFound`] if the file does not exist
    /// and [`IniError::AccessDenied`] if it cannot be opened for reading.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IniError> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading store");
        let file = File::open(path).map_err(|e| file_error(path, e))?;
        let mut store = Self::from_reader(BufReader::new(file))?;
        store.path = Some(path.to_path_buf());
        Ok(store)
    }

    /// Load a store from a file, or start empty if loading fails.
    ///
    /// Never fails: on any load error the returned store is empty but
    /// still bound to the path, so a later [`save`](Self::save) works.
    pub fn load_or_new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(store) => store,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "load failed, starting empty");
                Self::with_path(path)
            }
        }
    }

    /// Save the store to its backing path.
    ///
    /// Fails with [`IniError::InvalidPath`] if no backing path is set.
    /// The file is created if missing and truncated otherwise.
    pub fn save(&self) -> Result<(), IniError> {
        let path = self.path.as_ref().ok_or(IniError::InvalidPath)?;
        info!(path = %path.display(), "saving store");
        save_to_path(self, path)
    }

    /// Save the store to an explicit path, leaving the backing path as is.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), IniError> {
        save_to_path(self, path.as_ref())
    }

    /// Serialize the store to a writer in the on-disk line format.
    pub fn to_writer<W: Write>(&self, writer: &mut W) -> Result<(), IniError> {
        write::write_to(self, writer)?;
        Ok(())
    }

    /// Render the store as a string in the on-disk line format.
    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail, and only valid UTF-8 goes in
        let _ = write::write_to(self, &mut buf);
        String::from_utf8(buf).unwrap_or_default()
    }

    /// The backing file path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Bind or replace the backing file path.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    /// The anonymous root group.
    pub fn root(&self) -> &Group {
        &self.root
    }

    /// Iterate all groups in document order, the root group first.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        std::iter::once(&self.root).chain(self.groups.iter())
    }

    /// Look up a group; `None` addresses the root.
    pub fn group(&self, name: Option<&str>) -> Option<&Group> {
        match name {
            None => Some(&self.root),
            Some(n) => self.groups.iter().find(|g| g.name() == Some(n)),
        }
    }

    /// Whether a named group exists.
    pub fn has_group(&self, name: &str) -> bool {
        self.groups.iter().any(|g| g.name() == Some(name))
    }

    /// Look up the stored text for a key.
    pub fn get(&self, group: Option<&str>, key: &str) -> Option<&str> {
        self.group(group)?.get(key)
    }

    /// Look up the stored text for a key, falling back to `fallback` when
    /// the group or the key is missing.
    pub fn get_or<'a>(&'a self, group: Option<&str>, key: &str, fallback: &'a str) -> &'a str {
        self.get(group, key).unwrap_or(fallback)
    }

    /// Look up the stored text for a key, reporting the specific miss.
    ///
    /// Returns [`IniError::GroupNotFound`] when the group does not exist
    /// and [`IniError::ValueNotFound`] when the group exists but the key
    /// does not.
    pub fn try_get(&self, group: Option<&str>, key: &str) -> Result<&str, IniError> {
        let found = self
            .group(group)
            .ok_or_else(|| IniError::GroupNotFound(group.unwrap_or_default().to_string()))?;
        found
            .get(key)
            .ok_or_else(|| IniError::ValueNotFound(key.to_string()))
    }

    /// Whether a key exists in a group.
    pub fn exists(&self, group: Option<&str>, key: &str) -> bool {
        self.get(group, key).is_some()
    }

    /// Set a value, overwriting in place if the key already exists.
    ///
    /// A missing group is created and appended at the end of the document.
    /// Fails only for an empty key ([`IniError::InvalidKey`]) or an empty
    /// group name ([`IniError::InvalidArgument`]).
    pub fn set(&mut self, group: Option<&str>, key: &str, text: &str) -> Result<(), IniError> {
        check_key(key)?;
        debug!(group = group.unwrap_or("<root>"), key = key, "setting value");
        match self.locate(group)? {
            Slot::Root => self.root.set(key, text),
            Slot::Named(idx) => {
                if let Some(found) = self.groups.get_mut(idx) {
                    found.set(key, text);
                }
            }
            Slot::Missing(name) => {
                let mut created = Group::named(name);
                created.set(key, text);
                self.groups.push(created);
            }
        }
        Ok(())
    }

    /// Append a new value, rejecting an existing key with
    /// [`IniError::DuplicateKey`] instead of overwriting.
    ///
    /// This is the raw insertion the parser uses so that the first
    /// occurrence of a key wins.
    pub fn insert(&mut self, group: Option<&str>, key: &str, text: &str) -> Result<(), IniError> {
        check_key(key)?;
        match self.locate(group)? {
            Slot::Root => self.root.insert(key, text),
            Slot::Named(idx) => match self.groups.get_mut(idx) {
                Some(found) => found.insert(key, text),
                None => Ok(()),
            },
            Slot::Missing(name) => {
                let mut created = Group::named(name);
                created.insert(key, text)?;
                self.groups.push(created);
                Ok(())
            }
        }
    }

    /// Remove a value. The owning group stays even if it becomes empty.
    ///
    /// Reports [`IniError::GroupNotFound`] / [`IniError::ValueNotFound`]
    /// on a miss, leaving the store unchanged.
    pub fn delete_value(&mut self, group: Option<&str>, key: &str) -> Result<(), IniError> {
        debug!(group = group.unwrap_or("<root>"), key = key, "deleting value");
        let found = match self.locate(group)? {
            Slot::Root => Some(&mut self.root),
            Slot::Named(idx) => self.groups.get_mut(idx),
            Slot::Missing(name) => return Err(IniError::GroupNotFound(name)),
        };
        found
            .and_then(|g| g.remove(key))
            .map(|_| ())
            .ok_or_else(|| IniError::ValueNotFound(key.to_string()))
    }

    /// Remove a named group and all its values.
    ///
    /// The root group is not addressable here and cannot be deleted.
    pub fn delete_group(&mut self, name: &str) -> Result<(), IniError> {
        debug!(group = name, "deleting group");
        let before = self.groups.len();
        self.groups.retain(|g| g.name() != Some(name));
        if self.groups.len() == before {
            return Err(IniError::GroupNotFound(name.to_string()));
        }
        Ok(())
    }

    /// Look up or create a named group, used when replaying header lines.
    pub(super) fn ensure_group(&mut self, name: &str) {
        if !self.has_group(name) {
            self.groups.push(Group::named(name));
        }
    }

    /// Resolve a group address without borrowing it, so callers can
    /// create the group when it is missing.
    fn locate(&self, group: Option<&str>) -> Result<Slot, IniError> {
        match group {
            None => Ok(Slot::Root),
            Some("") => Err(IniError::InvalidArgument(
                "group name must not be empty".to_string(),
            )),
            Some(name) => Ok(
                match self.groups.iter().position(|g| g.name() == Some(name)) {
                    Some(idx) => Slot::Named(idx),
                    None => Slot::Missing(name.to_string()),
                },
            ),
        }
    }
}

/// Resolved group address: the root, an existing named group by index,
/// or a named group that does not exist yet.
enum Slot {
    Root,
    Named(usize),
    Missing(String),
}

// Typed convenience accessors: thin layers over the string API. Scalars
// are stored as text and parsed on demand; booleans go through the
// integer path as `0`/`1`.
impl IniStore {
    /// Store an integer as its decimal text.
    pub fn set_i64(&mut self, group: Option<&str>, key: &str, value: i64) -> Result<(), IniError> {
        self.set(group, key, &value.to_string())
    }

    /// Store a float as its shortest round-trippable text.
    pub fn set_f64(&mut self, group: Option<&str>, key: &str, value: f64) -> Result<(), IniError> {
        self.set(group, key, &value.to_string())
    }

    /// Store a boolean as `1` or `0`.
    pub fn set_bool(&mut self, group: Option<&str>, key: &str, value: bool) -> Result<(), IniError> {
        self.set_i64(group, key, i64::from(value))
    }

    /// Read an integer, reporting the specific miss or
    /// [`IniError::Conversion`] when the stored text does not parse.
    pub fn try_get_i64(&self, group: Option<&str>, key: &str) -> Result<i64, IniError> {
        let text = self.try_get(group, key)?;
        text.parse().map_err(|_| IniError::Conversion {
            key: key.to_string(),
            text: text.to_string(),
        })
    }

    /// Read an integer, falling back on any miss or parse failure.
    pub fn get_i64(&self, group: Option<&str>, key: &str, fallback: i64) -> i64 {
        self.try_get_i64(group, key).unwrap_or(fallback)
    }

    /// Read a float, reporting the specific miss or conversion failure.
    pub fn try_get_f64(&self, group: Option<&str>, key: &str) -> Result<f64, IniError> {
        let text = self.try_get(group, key)?;
        text.parse().map_err(|_| IniError::Conversion {
            key: key.to_string(),
            text: text.to_string(),
        })
    }

    /// Read a float, falling back on any miss or parse failure.
    pub fn get_f64(&self, group: Option<&str>, key: &str, fallback: f64) -> f64 {
        self.try_get_f64(group, key).unwrap_or(fallback)
    }

    /// Read a boolean through the integer path: any nonzero integer is
    /// `true`, zero is `false`.
    pub fn try_get_bool(&self, group: Option<&str>, key: &str) -> Result<bool, IniError> {
        Ok(self.try_get_i64(group, key)? != 0)
    }

    /// Read a boolean, falling back on any miss or parse failure.
    pub fn get_bool(&self, group: Option<&str>, key: &str, fallback: bool) -> bool {
        self.try_get_bool(group, key).unwrap_or(fallback)
    }
}

fn check_key(key: &str) -> Result<(), IniError> {
    if key.is_empty() {
        return Err(IniError::InvalidKey);
    }
    Ok(())
}

fn file_error(path: &Path, err: std::io::Error) -> IniError {
    match err.kind() {
        std::io::ErrorKind::NotFound => IniError::FileNotFound(path.display().to_string()),
        std::io::ErrorKind::PermissionDenied => IniError::AccessDenied(path.display().to_string()),
        _ => IniError::Io(err),
    }
}

fn save_to_path(store: &IniStore, path: &Path) -> Result<(), IniError> {
    let file = File::create(path).map_err(|e| {
        error!(path = %path.display(), "cannot open file for writing");
        file_error(path, e)
    })?;
    let mut writer = BufWriter::new(file);
    store.to_writer(&mut writer)?;
    writer.flush().map_err(IniError::Io)
}
