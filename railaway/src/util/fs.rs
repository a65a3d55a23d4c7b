use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use flate2::read::GzDecoder;

use crate::RailawayError;

/// true if the file name ends with a `.gz` extension
pub fn is_gzip<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

/// opens a file for reading, decompressing it on the fly if it is gzipped.
pub fn open_reader<P: AsRef<Path>>(path: P) -> Result<Box<dyn Read>, RailawayError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| file_error(path, e))?;
    if is_gzip(path) {
        Ok(Box::new(GzDecoder::new(BufReader::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// helper function to "mkdir -p path" - make all directories along a path
pub fn create_dirs<P>(path: P) -> Result<(), RailawayError>
where
    P: AsRef<Path>,
{
    let dirspath = path.as_ref();
    if dirspath.as_os_str().is_empty() || dirspath.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(dirspath).map_err(|e| file_error(dirspath, e))
}

pub fn file_error(path: &Path, error: std::io::Error) -> RailawayError {
    RailawayError::FileError(path.to_string_lossy().to_string(), error)
}
