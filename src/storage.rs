//! Task persistence - maps the store to/from its on-disk files
//!
//! Two artifacts live in the data directory: a plain-text counter file
//! holding the next task id, and a binary collection file holding one
//! fixed-width record per task in insertion order. The record layout is
//! this program's private format; both files are overwritten wholesale
//! on every save.

use anyhow::Context;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::PathBuf;

use crate::core::{Task, TaskStore, FIRST_TASK_ID};
use crate::Result;

/// Collection artifact filename
pub const LIST_DATA_FILENAME: &str = "task-data.dat";
/// Counter artifact filename
pub const LAST_USED_ID_FILENAME: &str = "last-used-id.txt";

/// Name field width in bytes, including the NUL terminator
const NAME_FIELD: usize = 40;
/// Description field width in bytes, including the NUL terminator
const DESC_FIELD: usize = 100;
/// Packed record: id (4, little-endian) + name + description + done (1)
const RECORD_LEN: usize = 4 + NAME_FIELD + DESC_FIELD + 1;

const NAME_OFFSET: usize = 4;
const DESC_OFFSET: usize = NAME_OFFSET + NAME_FIELD;
const DONE_OFFSET: usize = DESC_OFFSET + DESC_FIELD;

/// Persistence gateway bound to one data directory
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    /// Create a gateway rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the binary collection artifact
    pub fn data_path(&self) -> PathBuf {
        self.dir.join(LIST_DATA_FILENAME)
    }

    /// Path of the text counter artifact
    pub fn counter_path(&self) -> PathBuf {
        self.dir.join(LAST_USED_ID_FILENAME)
    }

    /// Write the store's counter and task records to disk
    ///
    /// Any write failure is fatal to the caller: a partial save leaves the
    /// two artifacts inconsistent, so the error is propagated rather than
    /// swallowed.
    pub fn save(&self, store: &TaskStore) -> Result<()> {
        let counter_path = self.counter_path();
        fs::write(&counter_path, format!("{}\n", store.next_id()))
            .with_context(|| format!("failed to write {}", counter_path.display()))?;

        let data_path = self.data_path();
        let file = File::create(&data_path)
            .with_context(|| format!("failed to create {}", data_path.display()))?;
        let mut writer = BufWriter::new(file);

        for task in store.list() {
            writer
                .write_all(&encode_record(task))
                .with_context(|| format!("failed to write {}", data_path.display()))?;
        }
        writer
            .flush()
            .with_context(|| format!("failed to write {}", data_path.display()))?;

        log::info!(
            "Saved {} tasks (next id {}) to {}",
            store.count(),
            store.next_id(),
            self.dir.display()
        );
        Ok(())
    }

    /// Reconstruct a store from disk
    ///
    /// Missing artifacts are a first run, not an error: a missing counter
    /// falls back to the fresh-store default, a missing collection file
    /// yields an empty task list. Other I/O failures propagate.
    pub fn load(&self) -> Result<TaskStore> {
        let next_id = self.load_counter()?;
        let tasks = self.load_tasks()?;

        log::info!(
            "Loaded {} tasks (next id {}) from {}",
            tasks.len(),
            next_id,
            self.dir.display()
        );
        Ok(TaskStore::from_parts(tasks, next_id))
    }

    fn load_counter(&self) -> Result<i32> {
        let path = self.counter_path();
        match fs::read_to_string(&path) {
            Ok(content) => Ok(content.trim().parse().unwrap_or_else(|_| {
                log::warn!(
                    "Unparsable counter in {}, starting from {}",
                    path.display(),
                    FIRST_TASK_ID
                );
                FIRST_TASK_ID
            })),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(FIRST_TASK_ID),
            Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
        }
    }

    fn load_tasks(&self) -> Result<Vec<Task>> {
        let path = self.data_path();
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to open {}", path.display()))
            }
        };
        let mut reader = BufReader::new(file);

        let mut tasks = Vec::new();
        let mut buf = [0u8; RECORD_LEN];
        loop {
            let filled = read_record(&mut reader, &mut buf)
                .with_context(|| format!("failed to read {}", path.display()))?;
            if filled == 0 {
                break;
            }
            if filled < RECORD_LEN {
                // Trailing partial record, e.g. from an interrupted save;
                // everything before it is kept.
                log::warn!(
                    "Ignoring truncated trailing record ({} of {} bytes) in {}",
                    filled,
                    RECORD_LEN,
                    path.display()
                );
                break;
            }
            tasks.push(decode_record(&buf));
        }
        Ok(tasks)
    }
}

/// Fill `buf` from `reader`, returning how many bytes were read (short
/// only at end of file).
fn read_record(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}

fn encode_record(task: &Task) -> [u8; RECORD_LEN] {
    let mut buf = [0u8; RECORD_LEN];
    buf[..4].copy_from_slice(&task.id.to_le_bytes());

    let name = clamp_to_field(&task.name, NAME_FIELD - 1);
    buf[NAME_OFFSET..NAME_OFFSET + name.len()].copy_from_slice(name.as_bytes());

    let desc = clamp_to_field(&task.description, DESC_FIELD - 1);
    buf[DESC_OFFSET..DESC_OFFSET + desc.len()].copy_from_slice(desc.as_bytes());

    buf[DONE_OFFSET] = task.done as u8;
    buf
}

fn decode_record(buf: &[u8; RECORD_LEN]) -> Task {
    let id = i32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    Task {
        id,
        name: read_field(&buf[NAME_OFFSET..NAME_OFFSET + NAME_FIELD]),
        description: read_field(&buf[DESC_OFFSET..DESC_OFFSET + DESC_FIELD]),
        done: buf[DONE_OFFSET] != 0,
    }
}

/// Decode a NUL-terminated field; garbage bytes decode lossily rather
/// than failing the whole load.
fn read_field(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}

/// Truncate to at most `max` bytes, backing off to a char boundary so
/// the stored bytes stay valid UTF-8.
fn clamp_to_field(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
