use crate::adapters::outbound::formatters::{CycloneDxFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::SbomFormatter;

/// Selects the formatter adapter for an [`OutputFormat`]
pub struct FormatterFactory;

impl FormatterFactory {
    /// # Examples
    /// ```
    /// use poetry_sbom::application::dto::OutputFormat;
    /// use poetry_sbom::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Markdown);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn SbomFormatter> {
        match format {
            OutputFormat::Json => Box::new(CycloneDxFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Message reported before rendering in `format`
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Rendering CycloneDX 1.6 JSON...",
            OutputFormat::Markdown => "📝 Rendering Markdown summary...",
        }
    }
}
