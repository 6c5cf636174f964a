//! テスト用モックファイルシステム

use super::*;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

/// テスト用モックファイルシステム
pub struct MockFs {
    entries: RwLock<BTreeMap<PathBuf, MockEntry>>,
    /// このパス配下への書き込みを失敗させる
    failing: RwLock<Vec<PathBuf>>,
}

enum MockEntry {
    File(Vec<u8>),
    Dir,
}

impl MockFs {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
            failing: RwLock::new(Vec::new()),
        }
    }

    /// ファイルを追加（親ディレクトリも作成）
    pub fn add_file(&self, path: &str, content: &str) {
        let path = PathBuf::from(path);
        let mut entries = self.entries.write().unwrap();
        if let Some(parent) = path.parent() {
            insert_dirs(&mut entries, parent);
        }
        entries.insert(path, MockEntry::File(content.as_bytes().to_vec()));
    }

    /// ディレクトリを追加
    pub fn add_dir(&self, path: &str) {
        insert_dirs(&mut self.entries.write().unwrap(), Path::new(path));
    }

    /// 指定パス配下への書き込み・ディレクトリ作成を失敗させる
    pub fn fail_writes_under(&self, path: &str) {
        self.failing.write().unwrap().push(PathBuf::from(path));
    }

    /// 書き込み失敗の指定を解除
    pub fn clear_failures(&self) {
        self.failing.write().unwrap().clear();
    }

    /// 登録されているファイル数
    pub fn file_count(&self) -> usize {
        self.entries
            .read()
            .unwrap()
            .values()
            .filter(|e| matches!(e, MockEntry::File(_)))
            .count()
    }

    fn check_writable(&self, path: &Path) -> Result<()> {
        let failing = self.failing.read().unwrap();
        if failing.iter().any(|p| path.starts_with(p)) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "permission denied",
            )
            .into());
        }
        Ok(())
    }
}

fn insert_dirs(entries: &mut BTreeMap<PathBuf, MockEntry>, path: &Path) {
    for ancestor in path.ancestors() {
        if ancestor.as_os_str().is_empty() {
            continue;
        }
        entries
            .entry(ancestor.to_path_buf())
            .or_insert(MockEntry::Dir);
    }
}

impl Default for MockFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFs {
    fn exists(&self, path: &Path) -> bool {
        self.entries.read().unwrap().contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(
            self.entries.read().unwrap().get(path),
            Some(MockEntry::Dir)
        )
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.check_writable(path)?;
        insert_dirs(&mut self.entries.write().unwrap(), path);
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        match self.entries.read().unwrap().get(path) {
            Some(MockEntry::File(content)) => Ok(String::from_utf8_lossy(content).to_string()),
            Some(MockEntry::Dir) => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "is a directory",
            )
            .into()),
            None => Err(std::io::Error::new(std::io::ErrorKind::NotFound, "not found").into()),
        }
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        self.check_writable(path)?;
        let mut entries = self.entries.write().unwrap();
        if let Some(parent) = path.parent() {
            insert_dirs(&mut entries, parent);
        }
        entries.insert(path.to_path_buf(), MockEntry::File(content.to_vec()));
        Ok(())
    }

    fn create_new(&self, path: &Path, content: &[u8]) -> Result<bool> {
        self.check_writable(path)?;
        let mut entries = self.entries.write().unwrap();
        if entries.contains_key(path) {
            return Ok(false);
        }
        let parent_exists = path
            .parent()
            .map(|p| p.as_os_str().is_empty() || matches!(entries.get(p), Some(MockEntry::Dir)))
            .unwrap_or(true);
        if !parent_exists {
            return Err(std::io::Error::new(std::io::ErrorKind::NotFound, "parent not found").into());
        }
        entries.insert(path.to_path_buf(), MockEntry::File(content.to_vec()));
        Ok(true)
    }
}
