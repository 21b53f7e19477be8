//! Content fingerprints for resource files.
//!
//! A fingerprint is an MD5 digest of the complete file content rendered as
//! 32 lowercase hex characters. It only decides "same" versus "different"
//! between a reference file and a local file, so a fast digest is enough.

use crate::error::{Error, Result};
use md5::{Digest, Md5};
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Hex-rendered digest of a file's bytes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Width of the hex rendering
    pub const HEX_LEN: usize = 32;

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fingerprint everything `reader` yields.
///
/// The stream is consumed to the end before the digest is finalized.
pub fn fingerprint_reader<R: Read>(reader: &mut R) -> io::Result<Fingerprint> {
    let mut hasher = Md5::new();
    io::copy(reader, &mut hasher)?;
    Ok(Fingerprint(hex::encode(hasher.finalize())))
}

/// Fingerprint the file at `path`.
pub fn fingerprint(path: &Path) -> Result<Fingerprint> {
    let to_error = |source| Error::Fingerprint {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(to_error)?;
    fingerprint_reader(&mut BufReader::new(file)).map_err(to_error)
}
