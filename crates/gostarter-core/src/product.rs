//! Product configuration trait for CLI binaries
//!
//! The wizard is product-agnostic; the binary supplies its identity and the
//! instructions printed once a project exists.

use crate::project::ProjectConfig;
use crate::MaterializeReport;

/// Configuration trait for the CLI product
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name, shown in the intro banner
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// URL for documentation, printed with the next steps
    fn docs_url(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, config: &ProjectConfig, report: &MaterializeReport) -> Vec<String>;
}
