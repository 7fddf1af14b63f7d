//! Reading payloads from files and writing payloads to files
//!
//! Each operation accepts either a path, which it opens or creates itself, or
//! an already-open [`File`]. Either way the handle is owned by the call and
//! closed before it returns.

use crate::codec::{Codec, JsonCodec, XmlCodec};
use crate::stream::{close_on_exit, encode_flushed};
use serde::{Serialize, de::DeserializeOwned};
use serdeio_core::{SerdeError, SerdeResult};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Where to read a payload from
#[derive(Debug)]
pub enum FileSource {
    /// Open the file at this path for reading
    Path(PathBuf),
    /// Read from a file the caller already opened
    Open(File),
}

/// Where to write a payload to
#[derive(Debug)]
pub enum FileTarget {
    /// Create or truncate the file at this path
    Path(PathBuf),
    /// Write into a file the caller already opened
    Open(File),
}

impl FileSource {
    fn open(self) -> SerdeResult<File> {
        match self {
            FileSource::Path(path) => File::open(&path).map_err(|e| {
                tracing::trace!(path = %path.display(), "open failed");
                SerdeError::io("failed to open file", e)
            }),
            FileSource::Open(file) => Ok(file),
        }
    }
}

impl FileTarget {
    fn create(self) -> SerdeResult<File> {
        match self {
            FileTarget::Path(path) => File::create(&path).map_err(|e| {
                tracing::trace!(path = %path.display(), "create failed");
                SerdeError::io("failed to create file", e)
            }),
            FileTarget::Open(file) => Ok(file),
        }
    }
}

macro_rules! impl_from_path {
    ($target:ty) => {
        impl From<&str> for $target {
            fn from(path: &str) -> Self {
                Self::Path(PathBuf::from(path))
            }
        }

        impl From<String> for $target {
            fn from(path: String) -> Self {
                Self::Path(PathBuf::from(path))
            }
        }

        impl From<&Path> for $target {
            fn from(path: &Path) -> Self {
                Self::Path(path.to_path_buf())
            }
        }

        impl From<PathBuf> for $target {
            fn from(path: PathBuf) -> Self {
                Self::Path(path)
            }
        }

        impl From<&PathBuf> for $target {
            fn from(path: &PathBuf) -> Self {
                Self::Path(path.clone())
            }
        }

        impl From<File> for $target {
            fn from(file: File) -> Self {
                Self::Open(file)
            }
        }
    };
}

impl_from_path!(FileSource);
impl_from_path!(FileTarget);

/// Decode one value from a file
///
/// A file that cannot be opened is an IO failure; a file whose contents do not
/// parse is a deserialization failure.
pub fn read_file<C, T>(codec: &C, source: impl Into<FileSource>) -> SerdeResult<T>
where
    C: Codec,
    T: DeserializeOwned,
{
    let file = source.into().open()?;
    tracing::trace!(format = %codec.format(), "decoding file");
    let mut file = close_on_exit(file);
    codec.decode_from(BufReader::new(&mut *file))
}

/// Decode one JSON value from a file
pub fn read_json_file<T: DeserializeOwned>(source: impl Into<FileSource>) -> SerdeResult<T> {
    read_file(&JsonCodec::new(), source)
}

/// Decode one XML value from a file
pub fn read_xml_file<T: DeserializeOwned>(source: impl Into<FileSource>) -> SerdeResult<T> {
    read_file(&XmlCodec::new(), source)
}

/// Encode a value into a file, creating or truncating it
///
/// A file that cannot be created is an IO failure; a failure while writing the
/// body, including the final flush, is a serialization failure.
pub fn write_file<C, T>(codec: &C, target: impl Into<FileTarget>, value: &T) -> SerdeResult<()>
where
    C: Codec,
    T: Serialize + ?Sized,
{
    let file = target.into().create()?;
    tracing::trace!(format = %codec.format(), "encoding file");
    let mut file = close_on_exit(file);
    encode_flushed(codec, &mut *file, value)
}

/// Encode a value as JSON into a file, creating or truncating it
pub fn write_json_file<T: Serialize + ?Sized>(
    target: impl Into<FileTarget>,
    value: &T,
) -> SerdeResult<()> {
    write_file(&JsonCodec::new(), target, value)
}

/// Encode a value as XML into a file, creating or truncating it
pub fn write_xml_file<T: Serialize + ?Sized>(
    target: impl Into<FileTarget>,
    value: &T,
) -> SerdeResult<()> {
    write_file(&XmlCodec::new(), target, value)
}
