use thiserror::Error;
use std::path::Path;

/// 自定义错误类型
#[derive(Error, Debug)]
pub enum FixError {
    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(String),

    #[error("Pattern error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// 检查文件扩展名是否受支持
pub fn is_supported_extension(path: &Path) -> bool {
    let extension = path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());

    crate::SUPPORTED_EXTENSIONS.iter().any(|&ext| Some(ext) == extension.as_deref())
}

/// 创建文件备份
pub fn create_backup(file_path: &Path) -> Result<std::path::PathBuf, FixError> {
    if !file_path.exists() {
        return Err(FixError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "原文件不存在"
        )));
    }

    let timestamp = chrono::Local::now().format("%Y-%m-%d-%H-%M-%S");
    let backup_path = file_path.with_extension(format!("{}.bak", timestamp));

    std::fs::copy(file_path, &backup_path)
        .map_err(FixError::IoError)?;

    Ok(backup_path)
}
