//! PNG export of the committed image.

use crate::config::ExportConfig;
use crate::draw::PixelBuffer;
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Write as _;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while exporting an image.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("Buffer of {width}x{height} does not match its pixel data")]
    InvalidBuffer { width: u32, height: u32 },
}

/// Where and under which name exported images are written.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Target directory (created on demand).
    pub directory: PathBuf,
    /// File name template (chrono specifiers plus `{width}`/`{height}`).
    pub filename_template: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::from(&ExportConfig::default())
    }
}

impl From<&ExportConfig> for ExportOptions {
    fn from(config: &ExportConfig) -> Self {
        Self {
            directory: expand_tilde(&config.directory),
            filename_template: config.filename_template.clone(),
        }
    }
}

/// Generate a `.png` filename from the template and the current local time.
pub fn generate_filename(template: &str, width: u32, height: u32) -> String {
    generate_filename_at(template, width, height, &Local::now())
}

/// Generate a `.png` filename for a fixed timestamp.
///
/// `{width}` and `{height}` are substituted before the chrono specifiers are
/// expanded. A template chrono cannot format is used literally. Path
/// separators are replaced so the result always names a single file.
pub fn generate_filename_at<Tz>(
    template: &str,
    width: u32,
    height: u32,
    time: &DateTime<Tz>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let sized = template
        .replace("{width}", &width.to_string())
        .replace("{height}", &height.to_string());

    let mut stem = String::new();
    if write!(stem, "{}", time.format(&sized)).is_err() {
        log::warn!("Invalid export filename template '{template}', using it verbatim");
        stem = sized;
    }

    let stem = stem.replace(['/', '\\'], "-");
    format!("{stem}.png")
}

/// Ensure the export directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

fn to_image(buffer: &PixelBuffer) -> Result<image::RgbaImage, ExportError> {
    let (width, height) = (buffer.width(), buffer.height());
    image::RgbaImage::from_raw(width, height, buffer.to_rgba_bytes())
        .ok_or(ExportError::InvalidBuffer { width, height })
}

/// Encodes the buffer as PNG bytes, alpha preserved.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, ExportError> {
    let image = to_image(buffer)?;
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, image::ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Writes the buffer as a PNG file at exactly `path`.
pub fn write_png(buffer: &PixelBuffer, path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_directory_exists(parent)?;
    }

    let image = to_image(buffer)?;
    image.save_with_format(path, image::ImageFormat::Png)?;

    log::info!(
        "Exported {}x{} image to {}",
        buffer.width(),
        buffer.height(),
        path.display()
    );
    Ok(())
}

/// Saves the buffer into the configured export directory under a generated name.
///
/// # Returns
/// Path to the saved file
pub fn save_png(buffer: &PixelBuffer, options: &ExportOptions) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&options.directory)?;
    let filename = generate_filename(&options.filename_template, buffer.width(), buffer.height());
    let file_path = directory.join(filename);

    write_png(buffer, &file_path)?;

    let written_size = fs::metadata(&file_path)?.len();
    log::debug!("File written: {} bytes", written_size);

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
