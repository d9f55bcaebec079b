use std::path::{Path, PathBuf};
use async_trait::async_trait;
use tokio::sync::Mutex;
use crate::error::BotError;
use crate::review::VocabularyItem;
use crate::storage::{completion_key, DailyCompletion, Enrollment, LearnerRecord, Storage};

/// Durable storage: one JSON document per learner under `<data_dir>/learners/`.
/// Writes go through a temp file and a rename so a crash never leaves half a record.
pub struct JsonFileStorage {
    dir: PathBuf,
    /// Serialises read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl JsonFileStorage {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        JsonFileStorage {
            dir: data_dir.as_ref().join("learners"),
            write_lock: Mutex::new(()),
        }
    }

    fn record_path(&self, learner_id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_stem(learner_id)))
    }

    async fn load_record(&self, learner_id: &str) -> Result<Option<LearnerRecord>, BotError> {
        let path = self.record_path(learner_id);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| BotError::new(
                    format!("Failed to parse learner record: {}", e),
                    "json_parse"
                ).with_learner(learner_id).with_context(format!("path: {:?}", path)))
                .map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BotError::new(
                format!("Failed to read learner record: {}", e),
                "io"
            ).with_learner(learner_id).with_context(format!("path: {:?}", path))),
        }
    }

    async fn save_record(&self, learner_id: &str, record: &LearnerRecord) -> Result<(), BotError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| BotError::new(
                format!("Failed to create data directory: {}", e),
                "io"
            ).with_context(format!("path: {:?}", self.dir)))?;

        let path = self.record_path(learner_id);
        let tmp = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(record)
            .map_err(|e| BotError::new(
                format!("Failed to serialize learner record: {}", e),
                "json_serialize"
            ).with_learner(learner_id))?;

        tokio::fs::write(&tmp, json).await.map_err(|e| BotError::new(
            format!("Failed to write learner record: {}", e),
            "io"
        ).with_learner(learner_id).with_context(format!("path: {:?}", tmp)))?;
        tokio::fs::rename(&tmp, &path).await.map_err(|e| BotError::new(
            format!("Failed to replace learner record: {}", e),
            "io"
        ).with_learner(learner_id).with_context(format!("path: {:?}", path)))?;
        Ok(())
    }

    /// Load (or create), mutate, save, all under the write lock.
    async fn modify<F>(&self, learner_id: &str, f: F) -> Result<(), BotError>
    where
        F: FnOnce(&mut LearnerRecord) + Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut record = self.load_record(learner_id).await?.unwrap_or_default();
        f(&mut record);
        self.save_record(learner_id, &record).await
    }
}

#[async_trait]
impl Storage for JsonFileStorage {
    async fn get_enrollment(&self, learner_id: &str) -> Result<Option<Enrollment>, BotError> {
        Ok(self.load_record(learner_id).await?.and_then(|r| r.enrollment))
    }

    async fn save_enrollment(&self, enrollment: &Enrollment) -> Result<(), BotError> {
        let enrollment = enrollment.clone();
        let learner_id = enrollment.learner_id.clone();
        self.modify(&learner_id, move |r| r.enrollment = Some(enrollment)).await
    }

    async fn list_active_enrollments(&self) -> Result<Vec<Enrollment>, BotError> {
        let mut active = Vec::new();
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Nobody has enrolled yet
                return Ok(active);
            }
            Err(e) => {
                return Err(BotError::new(
                    format!("Failed to read data directory: {}", e),
                    "io"
                ).with_context(format!("path: {:?}", self.dir)));
            }
        };

        while let Ok(Some(entry)) = entries.next_entry().await {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            match tokio::fs::read_to_string(&path).await {
                Ok(text) => match serde_json::from_str::<LearnerRecord>(&text) {
                    Ok(record) => {
                        if let Some(enrollment) = record.enrollment.filter(|e| e.active) {
                            active.push(enrollment);
                        }
                    }
                    Err(e) => {
                        tracing::warn!(path = ?path, error = %e, "Failed to parse learner record");
                    }
                },
                Err(e) => {
                    tracing::warn!(path = ?path, error = %e, "Failed to read learner record");
                }
            }
        }

        active.sort_by(|a, b| a.learner_id.cmp(&b.learner_id));
        Ok(active)
    }

    async fn get_vocabulary(&self, learner_id: &str, week: u32) -> Result<Vec<VocabularyItem>, BotError> {
        Ok(self
            .load_record(learner_id)
            .await?
            .and_then(|mut r| r.vocabulary.remove(&week))
            .unwrap_or_default())
    }

    async fn upsert_vocabulary(
        &self,
        learner_id: &str,
        week: u32,
        items: &[VocabularyItem],
    ) -> Result<(), BotError> {
        let items = items.to_vec();
        self.modify(learner_id, move |r| r.upsert_vocabulary(week, &items)).await
    }

    async fn list_all_vocabulary(&self, learner_id: &str) -> Result<Vec<VocabularyItem>, BotError> {
        Ok(self
            .load_record(learner_id)
            .await?
            .map(|r| r.vocabulary.into_values().flatten().collect())
            .unwrap_or_default())
    }

    async fn get_daily_completion(
        &self,
        learner_id: &str,
        week: u32,
        day: u32,
    ) -> Result<Option<DailyCompletion>, BotError> {
        Ok(self
            .load_record(learner_id)
            .await?
            .and_then(|mut r| r.completions.remove(&completion_key(week, day))))
    }

    async fn record_daily_completion(
        &self,
        learner_id: &str,
        week: u32,
        day: u32,
        flags: &DailyCompletion,
    ) -> Result<(), BotError> {
        let flags = flags.clone();
        self.modify(learner_id, move |r| r.record_completion(week, day, &flags)).await
    }
}

/// Portable, collision-free file stem for a learner id.
/// ASCII letters, digits and `-` stay as they are; every other byte,
/// `_` included, becomes `_xx` in hex, so distinct ids never share a file.
pub(crate) fn file_stem(learner_id: &str) -> String {
    let mut stem = String::with_capacity(learner_id.len());
    for byte in learner_id.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            stem.push(byte as char);
        } else {
            stem.push_str(&format!("_{:02x}", byte));
        }
    }
    stem
}
