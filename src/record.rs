//! Reported records: file findings and their subjects.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// The file a finding is about.
///
/// Scanners that read through a virtual filesystem implement this for their
/// own handles; [`ScannedFile`] covers plain paths.
pub trait Subject {
    fn name(&self) -> Cow<'_, str>;

    /// Size in bytes, when it can be determined.
    fn size(&self) -> Option<u64>;
}

/// A subject identified by a path.
///
/// Without an explicit size, `size()` stats the path on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    path: PathBuf,
    size: Option<u64>,
}

impl ScannedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size: None,
        }
    }

    /// Use a known size instead of asking the filesystem.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Subject for ScannedFile {
    fn name(&self) -> Cow<'_, str> {
        self.path.to_string_lossy()
    }

    fn size(&self) -> Option<u64> {
        self.size
            .or_else(|| std::fs::metadata(&self.path).ok().map(|m| m.len()))
    }
}

impl<S: Subject + ?Sized> Subject for &S {
    fn name(&self) -> Cow<'_, str> {
        (**self).name()
    }

    fn size(&self) -> Option<u64> {
        (**self).size()
    }
}

/// Extra key/value metadata attached to a record, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extra {
    pairs: Vec<(String, String)>,
}

impl Extra {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a flat `k1, v1, k2, v2, ...` sequence.
    ///
    /// A dangling key gets an empty value.
    pub fn from_flat<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut pairs: Vec<(String, String)> = Vec::new();
        let mut items = items.into_iter();
        while let Some(key) = items.next() {
            let value: String = items.next().map(Into::into).unwrap_or_default();
            pairs.push((key.into(), value));
        }
        Self { pairs }
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Extra {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A finding about one file.
#[derive(Clone)]
pub struct FileEntry<'a> {
    pub subject: &'a dyn Subject,
    /// Category of the finding, e.g. the detector that fired
    pub description: String,
    pub message: String,
    pub extra: Extra,
}

impl<'a> FileEntry<'a> {
    pub fn new(
        subject: &'a dyn Subject,
        description: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            subject,
            description: description.into(),
            message: message.into(),
            extra: Extra::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push(key, value);
        self
    }

    pub fn with_extras(mut self, extra: Extra) -> Self {
        self.extra = extra;
        self
    }
}

impl std::fmt::Debug for FileEntry<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileEntry")
            .field("subject", &self.subject.name())
            .field("description", &self.description)
            .field("message", &self.message)
            .field("extra", &self.extra)
            .finish()
    }
}
