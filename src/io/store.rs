use std::{
    fs::{self, File},
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    common::error::AppError,
    domain::ledger::Ledger,
    io::{reader, writer},
};

/// The accounts file on disk.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every record from the file.
    ///
    /// # Errors
    ///
    /// [`AppError::MissingFile`] when the file does not exist, which callers
    /// may treat as an empty ledger. Any other failure is
    /// [`AppError::ReadFailure`] and the file must not be overwritten.
    pub fn load(&self) -> Result<Ledger, AppError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(AppError::MissingFile(self.path.clone()));
            }
            Err(e) => return Err(self.read_failure(e)),
        };

        let ledger = reader::read_records(BufReader::new(file))
            .collect::<Result<Ledger, io::Error>>()
            .map_err(|e| self.read_failure(e))?;

        debug!(path = %self.path.display(), records = ledger.len(), "loaded accounts");
        Ok(ledger)
    }

    /// Replaces the file with the ledger contents.
    ///
    /// Rows go to a sibling `.tmp` file first, which is synced and then
    /// renamed over the target, so a crash leaves either the old or the new
    /// file in place.
    pub fn save(&self, ledger: &Ledger) -> Result<(), AppError> {
        let tmp = self.temp_path();
        if let Err(source) = write_synced(&tmp, ledger).and_then(|()| fs::rename(&tmp, &self.path))
        {
            // Best effort; the temp file may not exist.
            let _ = fs::remove_file(&tmp);
            return Err(AppError::WriteFailure {
                path: self.path.clone(),
                source,
            });
        }

        info!(path = %self.path.display(), records = ledger.len(), "saved accounts");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn read_failure(&self, source: io::Error) -> AppError {
        AppError::ReadFailure {
            path: self.path.clone(),
            source,
        }
    }
}

fn write_synced(path: &Path, ledger: &Ledger) -> io::Result<()> {
    let file = File::create(path)?;
    writer::write_ledger(&file, ledger)?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{account::Account, record::Record};

    // Helper: a fresh scratch directory per test name, removed on drop.
    struct ScratchDir(PathBuf);

    impl ScratchDir {
        fn join(&self, name: &str) -> PathBuf {
            self.0.join(name)
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    fn scratch_dir(name: &str) -> ScratchDir {
        let dir = std::env::temp_dir().join(format!(
            "bank_ledger_store_{name}_{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        ScratchDir(dir)
    }

    fn sample() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.push(Account::open("Alice", "1111111111".parse().unwrap()));
        ledger.push(Record::Malformed("lonely".into()));
        let mut bob = Account::open("Smith, Bob", "2222222222".parse().unwrap());
        bob.balance = "75.5".parse().unwrap();
        ledger.push(bob);
        ledger
    }

    #[test]
    fn missing_file_is_reported_as_missing() {
        let dir = scratch_dir("missing");
        let store = Store::new(dir.join("accounts.txt"));
        assert!(matches!(store.load(), Err(AppError::MissingFile(p)) if p == store.path()));
    }

    #[test]
    fn unreadable_file_is_a_read_failure() {
        // A directory opens on unix but fails on read.
        let dir = scratch_dir("unreadable");
        let store = Store::new(&dir.0);
        assert!(matches!(store.load(), Err(AppError::ReadFailure { .. })));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = scratch_dir("round_trip");
        let store = Store::new(dir.join("accounts.txt"));
        let ledger = sample();

        store.save(&ledger).unwrap();
        assert_eq!(store.load().unwrap(), ledger);
        assert!(!dir.join("accounts.txt.tmp").exists());
    }

    #[test]
    fn save_replaces_previous_contents() {
        let dir = scratch_dir("replace");
        let path = dir.join("accounts.txt");
        fs::write(&path, "Old,9999999999,1.0\nOlder,8888888888,2.0\n").unwrap();

        let store = Store::new(&path);
        let mut ledger = Ledger::new();
        ledger.push(Account::open("New", "1234567890".parse().unwrap()));
        store.save(&ledger).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "New,1234567890,0.0\n");
    }

    #[test]
    fn save_into_missing_directory_is_a_write_failure() {
        let dir = scratch_dir("no_dir");
        let store = Store::new(dir.join("absent").join("accounts.txt"));
        let err = store.save(&sample()).unwrap_err();
        assert!(matches!(err, AppError::WriteFailure { .. }));
    }

    #[test]
    fn loads_file_written_by_hand() {
        let dir = scratch_dir("by_hand");
        let path = dir.join("accounts.txt");
        fs::write(&path, "Bob,1234567890,75.5\n").unwrap();

        let ledger = Store::new(&path).load().unwrap();
        let bob = ledger.find("1234567890").unwrap();
        assert_eq!(bob.name, "Bob");
        assert_eq!(bob.balance.to_string(), "75.5");
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn legacy_lines_survive_load_and_save() {
        let dir = scratch_dir("legacy");
        let path = dir.join("accounts.txt");
        let legacy = "\"Q Smith,1111111111,1.0\nBob,1234567890,1e+16\nAmy,2222222222,5.0\n";
        fs::write(&path, legacy).unwrap();

        let store = Store::new(&path);
        let ledger = store.load().unwrap();
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.accounts().count(), 2);
        assert_eq!(
            ledger.find("1234567890").unwrap().balance.to_string(),
            "10000000000000000.0"
        );

        store.save(&ledger).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "\"Q Smith,1111111111,1.0\nBob,1234567890,10000000000000000.0\nAmy,2222222222,5.0\n"
        );
        assert_eq!(store.load().unwrap(), ledger);
    }

    #[test]
    fn scratch_dir_is_removed_on_drop() {
        let dir = scratch_dir("cleanup");
        let path = dir.0.clone();
        fs::write(dir.join("accounts.txt"), "Bob,1234567890,1.0\n").unwrap();
        drop(dir);
        assert!(!path.exists());
    }
}
