use crate::error::{IconStampError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct GenerationProgress {
    pub files_written: usize,
    pub total_files: usize,
    pub bytes_written: u64,
    pub current_file: Option<String>,
    pub start_time: Instant,
}

impl GenerationProgress {
    pub fn new(total_files: usize) -> Self {
        Self {
            files_written: 0,
            total_files,
            bytes_written: 0,
            current_file: None,
            start_time: Instant::now(),
        }
    }

    pub fn update_file(&mut self, filename: String, bytes: u64) {
        self.files_written += 1;
        self.bytes_written += bytes;
        self.current_file = Some(filename);
    }

    pub fn percentage(&self) -> f64 {
        if self.total_files == 0 {
            0.0
        } else {
            (self.files_written as f64 / self.total_files as f64) * 100.0
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconFileInfo {
    pub filename: String,
    pub size_label: u32,
    pub bytes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub total_files_written: usize,
    pub total_bytes_written: u64,
    pub generation_duration: Duration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    pub sizes: Vec<u32>,
    pub filename_template: String,
    pub directory: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub output_directory: PathBuf,
    pub files: Vec<IconFileInfo>,
    pub generated_at: DateTime<Utc>,
    pub summary: GenerationSummary,
    pub config_used: ConfigSnapshot,
}

/// Writes the placeholder payload into an output directory, one file per
/// configured size label.
pub struct IconWriter {
    output_directory: PathBuf,
}

impl IconWriter {
    pub fn new(output_directory: PathBuf) -> Self {
        Self { output_directory }
    }

    /// Create the output directory if absent. An existing directory is reused
    /// as is; rerunning the tool must not fail.
    pub fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.output_directory).map_err(|e| {
            permission_or_io(e, &self.output_directory)
        })?;

        // Probe write permissions up front so a read-only directory surfaces
        // before any icon slot is touched.
        let test_file = self.output_directory.join(".iconstamp_write_test");
        match fs::File::create(&test_file) {
            Ok(_) => {
                let _ = fs::remove_file(&test_file);
            }
            Err(e) => {
                return Err(IconStampError::Permission {
                    path: format!(
                        "No write permission for directory {}: {}",
                        self.output_directory.display(),
                        e
                    ),
                });
            }
        }

        Ok(())
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Resolve the output path for one size label, validating the rendered
    /// filename first.
    pub fn icon_path(&self, template: &str, size: u32) -> Result<PathBuf> {
        let filename = render_filename(template, size);
        validate_filename(&filename)?;
        Ok(self.output_directory.join(filename))
    }

    /// Write `payload` once per size label. Existing files are overwritten,
    /// so repeated runs converge on identical output. The first IO failure
    /// aborts the whole run.
    pub fn write_icons(
        &self,
        payload: &[u8],
        sizes: &[u32],
        template: &str,
        progress_callback: Option<&dyn Fn(&GenerationProgress)>,
    ) -> Result<(GenerationProgress, Vec<IconFileInfo>)> {
        let mut progress = GenerationProgress::new(sizes.len());
        let mut files = Vec::with_capacity(sizes.len());

        for &size in sizes {
            let dest_path = self.icon_path(template, size)?;
            let filename = dest_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| render_filename(template, size));

            fs::write(&dest_path, payload).map_err(|e| permission_or_io(e, &dest_path))?;

            progress.update_file(filename.clone(), payload.len() as u64);
            files.push(IconFileInfo {
                filename,
                size_label: size,
                bytes: payload.len() as u64,
            });

            if let Some(callback) = progress_callback {
                callback(&progress);
            }
        }

        Ok((progress, files))
    }

    /// Assemble the final report. The report is only ever printed; nothing is
    /// persisted beyond the icon files themselves.
    pub fn create_generation_report(
        &self,
        files: Vec<IconFileInfo>,
        progress: &GenerationProgress,
        config: &ConfigSnapshot,
    ) -> GenerationReport {
        GenerationReport {
            output_directory: self.output_directory.clone(),
            files,
            generated_at: Utc::now(),
            summary: GenerationSummary {
                total_files_written: progress.files_written,
                total_bytes_written: progress.bytes_written,
                generation_duration: progress.elapsed(),
            },
            config_used: config.clone(),
        }
    }
}

/// Expand `{size}` in the filename template to the given size label.
pub fn render_filename(template: &str, size: u32) -> String {
    template.replace("{size}", &size.to_string())
}

fn permission_or_io(error: std::io::Error, path: &Path) -> IconStampError {
    if error.kind() == std::io::ErrorKind::PermissionDenied {
        IconStampError::Permission {
            path: path.display().to_string(),
        }
    } else {
        IconStampError::Io(error)
    }
}

fn validate_filename(filename: &str) -> Result<()> {
    if filename.is_empty() {
        return Err(IconStampError::InvalidPath {
            path: "rendered filename is empty".to_string(),
        });
    }

    // Rendered filenames stay inside the output directory.
    if filename.contains('/') || filename.contains('\\') || filename == "." || filename == ".." {
        return Err(IconStampError::InvalidPath {
            path: format!("Filename must not contain path separators: {}", filename),
        });
    }

    let invalid_chars = ['<', '>', ':', '"', '|', '?', '*'];
    if filename
        .chars()
        .any(|c| invalid_chars.contains(&c) || c.is_control() || c == '\0')
    {
        return Err(IconStampError::InvalidPath {
            path: format!("Filename contains invalid characters: {}", filename),
        });
    }

    // Problematic on Windows
    if filename.ends_with(' ') || filename.ends_with('.') {
        return Err(IconStampError::InvalidPath {
            path: format!("Filename cannot end with space or dot: {}", filename),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::payload::PLACEHOLDER_PNG;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let writer = IconWriter::new(temp_dir.path().join("icons"));

        writer.initialize().unwrap();
        assert!(writer.output_directory().is_dir());
    }

    #[test]
    fn test_initialize_accepts_existing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let writer = IconWriter::new(temp_dir.path().to_path_buf());

        fs::write(temp_dir.path().join("unrelated.txt"), "keep me").unwrap();

        writer.initialize().unwrap();
        writer.initialize().unwrap();

        // Unrelated files survive initialization.
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("unrelated.txt")).unwrap(),
            "keep me"
        );
    }

    #[test]
    fn test_write_icons_writes_exact_payload() {
        let temp_dir = TempDir::new().unwrap();
        let writer = IconWriter::new(temp_dir.path().join("icons"));
        writer.initialize().unwrap();

        let (progress, files) = writer
            .write_icons(PLACEHOLDER_PNG, &[16, 48, 128], "icon{size}.png", None)
            .unwrap();

        assert_eq!(progress.files_written, 3);
        assert_eq!(progress.bytes_written, 3 * PLACEHOLDER_PNG.len() as u64);
        assert_eq!(files.len(), 3);

        for size in [16u32, 48, 128] {
            let path = writer.output_directory().join(format!("icon{}.png", size));
            assert_eq!(fs::read(&path).unwrap(), PLACEHOLDER_PNG);
        }
    }

    #[test]
    fn test_write_icons_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let writer = IconWriter::new(temp_dir.path().join("icons"));
        writer.initialize().unwrap();

        writer
            .write_icons(PLACEHOLDER_PNG, &[16, 48], "icon{size}.png", None)
            .unwrap();
        let first: Vec<Vec<u8>> = [16u32, 48]
            .iter()
            .map(|s| fs::read(writer.output_directory().join(format!("icon{}.png", s))).unwrap())
            .collect();

        writer
            .write_icons(PLACEHOLDER_PNG, &[16, 48], "icon{size}.png", None)
            .unwrap();
        let second: Vec<Vec<u8>> = [16u32, 48]
            .iter()
            .map(|s| fs::read(writer.output_directory().join(format!("icon{}.png", s))).unwrap())
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_write_icons_overwrites_stale_content() {
        let temp_dir = TempDir::new().unwrap();
        let writer = IconWriter::new(temp_dir.path().to_path_buf());
        writer.initialize().unwrap();

        let stale = temp_dir.path().join("icon16.png");
        fs::write(&stale, b"stale bytes that are not the payload").unwrap();

        writer
            .write_icons(PLACEHOLDER_PNG, &[16], "icon{size}.png", None)
            .unwrap();

        assert_eq!(fs::read(&stale).unwrap(), PLACEHOLDER_PNG);
    }

    #[test]
    fn test_progress_callback_sees_each_file() {
        let temp_dir = TempDir::new().unwrap();
        let writer = IconWriter::new(temp_dir.path().to_path_buf());
        writer.initialize().unwrap();

        let seen = std::cell::RefCell::new(Vec::new());
        let callback = |progress: &GenerationProgress| {
            seen.borrow_mut()
                .push(progress.current_file.clone().unwrap_or_default());
        };

        writer
            .write_icons(PLACEHOLDER_PNG, &[16, 48, 128], "icon{size}.png", Some(&callback))
            .unwrap();

        assert_eq!(
            *seen.borrow(),
            vec!["icon16.png", "icon48.png", "icon128.png"]
        );
    }

    #[test]
    fn test_render_filename() {
        assert_eq!(render_filename("icon{size}.png", 48), "icon48.png");
        assert_eq!(render_filename("logo-{size}@2x.png", 16), "logo-16@2x.png");
        assert_eq!(render_filename("static.png", 128), "static.png");
    }

    #[test]
    fn test_icon_path_rejects_traversal() {
        let temp_dir = TempDir::new().unwrap();
        let writer = IconWriter::new(temp_dir.path().to_path_buf());

        assert!(writer.icon_path("../escape{size}.png", 16).is_err());
        assert!(writer.icon_path("sub/dir{size}.png", 16).is_err());
        assert!(writer.icon_path("icon{size}?.png", 16).is_err());
        assert!(writer.icon_path("icon{size}.png.", 16).is_err());
        assert!(writer.icon_path("icon{size}.png", 16).is_ok());
    }

    #[test]
    fn test_progress_percentage() {
        let mut progress = GenerationProgress::new(4);
        assert_eq!(progress.percentage(), 0.0);

        progress.update_file("icon16.png".to_string(), 70);
        progress.update_file("icon48.png".to_string(), 70);
        assert_eq!(progress.percentage(), 50.0);

        let empty = GenerationProgress::new(0);
        assert_eq!(empty.percentage(), 0.0);
    }

    #[test]
    fn test_generation_report_fields() {
        let temp_dir = TempDir::new().unwrap();
        let writer = IconWriter::new(temp_dir.path().to_path_buf());
        writer.initialize().unwrap();

        let (progress, files) = writer
            .write_icons(PLACEHOLDER_PNG, &[16, 48, 128], "icon{size}.png", None)
            .unwrap();

        let snapshot = ConfigSnapshot {
            sizes: vec![16, 48, 128],
            filename_template: "icon{size}.png".to_string(),
            directory: temp_dir.path().to_path_buf(),
        };

        let report = writer.create_generation_report(files, &progress, &snapshot);

        assert_eq!(report.files.len(), 3);
        assert_eq!(report.summary.total_files_written, 3);
        assert_eq!(
            report.summary.total_bytes_written,
            3 * PLACEHOLDER_PNG.len() as u64
        );
        assert_eq!(report.output_directory, temp_dir.path());
        assert_eq!(report.config_used.sizes, vec![16, 48, 128]);

        // The report serializes for JSON output mode.
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("icon128.png"));
    }
}
