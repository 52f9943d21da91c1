use crate::StrError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Writes a JSON file with the given data
///
/// The parent directories are created if they do not exist.
///
/// # Input
///
/// * `full_path` -- may be a String, &str, or Path
pub fn write_json<T, P>(data: &T, full_path: &P) -> Result<(), StrError>
where
    T: Serialize,
    P: AsRef<OsStr> + ?Sized,
{
    let path = Path::new(full_path).to_path_buf();
    if let Some(p) = path.parent() {
        fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
    }
    let mut file = File::create(&path).map_err(|_| "cannot create file")?;
    serde_json::to_writer_pretty(&mut file, data).map_err(|_| "cannot write file")?;
    Ok(())
}

/// Reads a JSON file
///
/// # Input
///
/// * `full_path` -- may be a String, &str, or Path
pub fn read_json<T, P>(full_path: &P) -> Result<T, StrError>
where
    T: DeserializeOwned,
    P: AsRef<OsStr> + ?Sized,
{
    let path = Path::new(full_path).to_path_buf();
    let file = File::open(&path).map_err(|_| "file not found")?;
    let reader = BufReader::new(file);
    let data = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
    Ok(data)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{read_json, write_json};
    use crate::base::{Grid1d, DEFAULT_TEST_DIR};

    #[test]
    fn read_json_captures_errors() {
        let res: Result<Grid1d, _> = read_json("/tmp/wicksim/__not_found__.json");
        assert_eq!(res.err(), Some("file not found"));
    }

    #[test]
    fn write_and_read_json_work() {
        let grid = Grid1d::new(2.0, 21).unwrap();
        let full_path = format!("{}/grid_1d.json", DEFAULT_TEST_DIR);
        write_json(&grid, &full_path).unwrap();
        let read: Grid1d = read_json(&full_path).unwrap();
        assert_eq!(read.npoint, 21);
        assert_eq!(read.h, grid.h);
    }
}
