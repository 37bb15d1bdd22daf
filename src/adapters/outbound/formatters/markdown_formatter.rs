use crate::application::dto::SbomResponse;
use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::{Component, SbomMetadata, PACKAGE_GROUP_PROPERTY};
use crate::sbom_generation::services::SkippedDescriptor;
use crate::shared::Result;

/// Markdown table header for package information
const TABLE_HEADER: &str = "| Package | Version | Group | Distribution Files |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|---------|---------|-------|--------------------|\n";

/// Markdown table header for skipped distribution files
const SKIPPED_TABLE_HEADER: &str = "| Package | File | Reason |\n";

/// Markdown table separator line for skipped distribution files
const SKIPPED_TABLE_SEPARATOR: &str = "|---------|------|--------|\n";

/// MarkdownFormatter adapter for a human-readable SBOM summary
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Links the package name to its release page on PyPI
    fn package_link(component: &Component) -> String {
        let name = Self::escape_markdown_table_cell(component.name());
        match component.external_references().first() {
            Some(reference) => format!("[{}]({})", name, reference.url()),
            None => name,
        }
    }

    fn groups(component: &Component) -> String {
        let groups: Vec<&str> = component
            .properties()
            .iter()
            .filter(|p| p.name() == PACKAGE_GROUP_PROPERTY)
            .map(|p| p.value())
            .collect();

        if groups.is_empty() {
            "N/A".to_string()
        } else {
            Self::escape_markdown_table_cell(&groups.join(", "))
        }
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, metadata: &SbomMetadata) {
        output.push_str("# Software Bill of Materials (SBOM)\n\n");

        if let Some(root) = metadata.component() {
            output.push_str(&format!(
                "**Project:** {} {}\n\n",
                root.name(),
                root.version()
            ));
        }

        output.push_str(&format!("- Generated: {}\n", metadata.timestamp()));
        output.push_str(&format!(
            "- Tool: {} {}\n",
            metadata.tool_name(),
            metadata.tool_version()
        ));
        output.push_str(&format!("- Serial number: {}\n\n", metadata.serial_number()));
    }

    fn render_components(&self, output: &mut String, components: &[Component]) {
        output.push_str("## Component Inventory\n\n");

        if components.is_empty() {
            output.push_str("No packages are recorded in poetry.lock.\n\n");
            return;
        }

        output.push_str(&format!(
            "{} package(s) resolved from poetry.lock.\n\n",
            components.len()
        ));
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for component in components {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::package_link(component),
                Self::escape_markdown_table_cell(component.version()),
                Self::groups(component),
                component.external_references().len()
            ));
        }
        output.push('\n');
    }

    fn render_skipped(&self, output: &mut String, skipped: &[SkippedDescriptor]) {
        if skipped.is_empty() {
            return;
        }

        output.push_str("## Skipped Distribution Files\n\n");
        output.push_str(
            "These files are listed in poetry.lock but carry no usable hash, so they are not referenced above.\n\n",
        );
        output.push_str(SKIPPED_TABLE_HEADER);
        output.push_str(SKIPPED_TABLE_SEPARATOR);

        for skip in skipped {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&skip.package),
                Self::escape_markdown_table_cell(&skip.file),
                Self::escape_markdown_table_cell(&skip.reason)
            ));
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for MarkdownFormatter {
    fn format(&self, response: &SbomResponse) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, &response.metadata);
        self.render_components(&mut output, &response.components);
        self.render_skipped(&mut output, &response.skipped_descriptors);

        Ok(output)
    }
}
