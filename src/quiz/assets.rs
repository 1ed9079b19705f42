use std::path::{Path, PathBuf};

use log::warn;
use url::Url;

use crate::quiz::catalog::TypeRecord;

const PLACEHOLDER_SIZE: &str = "800x500";
const PLACEHOLDER_TEXT_COLOR: &str = "FFFFFF";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultImage {
    File(PathBuf),
    /// Generated image in the type's accent color with its title on it.
    Placeholder(Url),
}

/// Finds the picture for a result: `<dir>/<code>.png`, or a placeholder
/// when the file is missing. A missing file is not an error.
#[derive(Debug, Clone)]
pub struct AssetLocator {
    dir: PathBuf,
    placeholder_base: Url,
}

impl AssetLocator {
    pub fn new(dir: impl Into<PathBuf>, placeholder_base: Url) -> Self {
        Self {
            dir: dir.into(),
            placeholder_base,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn locate(&self, record: &TypeRecord) -> ResultImage {
        let path = self.dir.join(format!("{}.png", record.code));
        if path.is_file() {
            return ResultImage::File(path);
        }
        warn!("image not found: {}", path.display());
        ResultImage::Placeholder(self.placeholder(record))
    }

    pub fn placeholder(&self, record: &TypeRecord) -> Url {
        let mut url = self.placeholder_base.clone();
        url.set_path(&format!(
            "{}/{}/{}",
            PLACEHOLDER_SIZE,
            record.accent.digits(),
            PLACEHOLDER_TEXT_COLOR
        ));
        url.query_pairs_mut().clear().append_pair("text", record.title);
        url
    }
}
