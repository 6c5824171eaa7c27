use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::error::Error;
use crate::translation::lexicon::TermTable;

pub const VOCABULARY_FILE: &str = "dictionary.json";
pub const STUDENT_FILE: &str = "students_mapping.json";
pub const EVENT_FILE: &str = "Event.json";
pub const CLUB_FILE: &str = "Club.json";
pub const SCHOOL_FILE: &str = "School.json";

/// The five mapping tables, fully loaded before the first translation run.
/// The four term tables feed the lexicon merge; the student table stays
/// separate because name matching works differently.
#[derive(Debug, Default, Clone)]
pub struct MappingSet {
    pub vocabulary: TermTable,
    pub students: TermTable,
    pub events: TermTable,
    pub clubs: TermTable,
    pub schools: TermTable,
}

pub fn load_mapping_set(config: &Config) -> Result<MappingSet, Error> {
    let dir = Path::new(&config.mapping_dir);
    Ok(MappingSet {
        vocabulary: load_table(&dir.join(VOCABULARY_FILE))?,
        students: load_table(&dir.join(STUDENT_FILE))?,
        events: load_table(&dir.join(EVENT_FILE))?,
        clubs: load_table(&dir.join(CLUB_FILE))?,
        schools: load_table(&dir.join(SCHOOL_FILE))?,
    })
}

fn load_table(path: &Path) -> Result<TermTable, Error> {
    let contents = fs::read_to_string(path).map_err(|source| Error::TableRead {
        path: path.to_path_buf(),
        source,
    })?;
    let table: TermTable = serde_json::from_str(&contents).map_err(|source| Error::TableParse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(entries = table.len(), table = %path.display(), "mapping table loaded");
    Ok(table)
}
