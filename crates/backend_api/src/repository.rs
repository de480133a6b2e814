use async_trait::async_trait;
use models::AnalysisOutput;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ApiError, Result};

/// Repository trait for accessing a generated analysis artifact.
/// This abstraction allows swapping between file-based and
/// database-backed implementations.
#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    async fn fetch_analysis(&self) -> Result<AnalysisOutput>;
    async fn get_generated_at(&self) -> Result<String>;
    async fn invalidate_cache(&self);
}

/// File-based implementation that reads from analysis.json, produced by
/// the `analyze-appraisal` CLI. Reads go through an in-memory cache so a
/// dashboard polling the endpoint does not hit the disk per request;
/// regenerating the file requires an explicit invalidation.
pub struct FileAnalysisRepository {
    analysis_path: PathBuf,
    cache: Arc<RwLock<Option<AnalysisOutput>>>,
}

impl FileAnalysisRepository {
    pub fn new<P: AsRef<Path>>(analysis_path: P) -> Self {
        Self {
            analysis_path: analysis_path.as_ref().to_path_buf(),
            cache: Arc::new(RwLock::new(None)),
        }
    }

    async fn load_analysis(&self) -> Result<AnalysisOutput> {
        // Check cache first
        {
            let cache = self.cache.read().await;
            if let Some(ref analysis) = *cache {
                return Ok(analysis.clone());
            }
        }

        // Load from file; a missing artifact is a 404, not a server fault
        let content = match tokio::fs::read_to_string(&self.analysis_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ApiError::AnalysisNotFound)
            }
            Err(e) => return Err(e.into()),
        };
        let analysis: AnalysisOutput = serde_json::from_str(&content)?;

        // Update cache
        {
            let mut cache = self.cache.write().await;
            *cache = Some(analysis.clone());
        }

        Ok(analysis)
    }
}

#[async_trait]
impl AnalysisRepository for FileAnalysisRepository {
    async fn fetch_analysis(&self) -> Result<AnalysisOutput> {
        self.load_analysis().await
    }

    async fn get_generated_at(&self) -> Result<String> {
        let analysis = self.load_analysis().await?;
        Ok(analysis.metadata.generated_at)
    }

    async fn invalidate_cache(&self) {
        let mut cache = self.cache.write().await;
        *cache = None;
    }
}
