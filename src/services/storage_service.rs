// src/services/storage_service.rs

use std::path::PathBuf;

use uuid::Uuid;

use crate::common::error::AppError;

// Pastas aceitas no upload (avatar, anexos de solicitações, recibos, etc.)
pub const ALLOWED_FOLDERS: [&str; 6] = ["avatars", "requests", "payroll", "news", "assets", "general"];
pub const DEFAULT_FOLDER: &str = "general";

/// Armazenamento de arquivos em disco, servidos em `/uploads`.
#[derive(Clone)]
pub struct FileStorage {
    root: PathBuf,
    public_base_url: String,
    max_bytes: usize,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>, public_base_url: &str, max_bytes: usize) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            max_bytes,
        }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Grava o arquivo e devolve a URL pública.
    pub async fn save(&self, folder: Option<&str>, original_name: &str, bytes: &[u8]) -> Result<String, AppError> {
        let folder = folder.unwrap_or(DEFAULT_FOLDER);
        if !ALLOWED_FOLDERS.contains(&folder) {
            return Err(AppError::InvalidUpload(format!("pasta '{}' não permitida", folder)));
        }
        if bytes.is_empty() {
            return Err(AppError::InvalidUpload("arquivo vazio".into()));
        }
        if bytes.len() > self.max_bytes {
            return Err(AppError::InvalidUpload(format!("arquivo maior que {} bytes", self.max_bytes)));
        }

        let stored_name = format!("{}-{}", Uuid::new_v4(), sanitize_file_name(original_name));
        let dir = self.root.join(folder);

        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| anyhow::anyhow!("Falha ao criar {:?}: {}", dir, e))?;
        tokio::fs::write(dir.join(&stored_name), bytes)
            .await
            .map_err(|e| anyhow::anyhow!("Falha ao gravar {}: {}", stored_name, e))?;

        tracing::info!("📎 Upload salvo em {}/{} ({} bytes)", folder, stored_name, bytes.len());
        Ok(format!("{}/uploads/{}/{}", self.public_base_url, folder, stored_name))
    }
}

// Mantém só [A-Za-z0-9._-]; nada de separadores de caminho
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() {
        "arquivo".to_string()
    } else {
        cleaned.chars().take(120).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_storage(max_bytes: usize) -> FileStorage {
        let root = std::env::temp_dir().join(format!("predios-uploads-{}", Uuid::new_v4()));
        FileStorage::new(root, "http://localhost:3000/", max_bytes)
    }

    #[test]
    fn file_names_are_sanitized() {
        assert_eq!(sanitize_file_name("recibo marzo.pdf"), "recibo_marzo.pdf");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\fotos\\cancha 1.jpg"), "cancha_1.jpg");
        assert_eq!(sanitize_file_name(".."), "arquivo");
        assert_eq!(sanitize_file_name(""), "arquivo");
    }

    #[tokio::test]
    async fn saves_file_and_returns_public_url() {
        let storage = temp_storage(1024);
        let url = storage.save(Some("requests"), "certificado.pdf", b"%PDF-1.4").await.unwrap();

        assert!(url.starts_with("http://localhost:3000/uploads/requests/"));
        assert!(url.ends_with("-certificado.pdf"));

        let stored = url.rsplit('/').next().unwrap();
        let on_disk = tokio::fs::read(storage.root().join("requests").join(stored)).await.unwrap();
        assert_eq!(on_disk, b"%PDF-1.4");

        tokio::fs::remove_dir_all(storage.root()).await.unwrap();
    }

    #[tokio::test]
    async fn rejects_unknown_folder_empty_and_oversized_files() {
        let storage = temp_storage(4);

        assert!(matches!(
            storage.save(Some("../secret"), "a.txt", b"x").await,
            Err(AppError::InvalidUpload(_))
        ));
        assert!(matches!(storage.save(None, "a.txt", b"").await, Err(AppError::InvalidUpload(_))));
        assert!(matches!(storage.save(None, "a.txt", b"12345").await, Err(AppError::InvalidUpload(_))));
    }
}
