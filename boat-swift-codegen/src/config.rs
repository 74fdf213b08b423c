//! Generator configuration.

use crate::error::CodegenError;
use serde::Serialize;
use std::collections::BTreeMap;

/// Name the generator registers under.
pub const GENERATOR_NAME: &str = "boat-swift5";

/// One-line description shown in generator listings.
pub const GENERATOR_HELP: &str = "Generates a BOAT Swift 5.x client library.";

/// The DBSDataProvider HTTP client library.
pub const LIBRARY_DBS: &str = "dbsDataProvider";

/// Libraries inherited from the stock Swift 5 generator.
const UPSTREAM_LIBRARIES: [(&str, &str); 3] = [
    ("alamofire", "[DEPRECATED] HTTP client: Alamofire"),
    ("urlsession", "[DEFAULT] HTTP client: URLSession"),
    ("vapor", "HTTP client: Vapor"),
];

/// Generator maturity as advertised to the host framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stability {
    /// Work in progress.
    Experimental,
    /// Usable, may still change.
    Beta,
    /// Production ready.
    Stable,
    /// Scheduled for removal.
    Deprecated,
}

/// Resolved configuration for one generation run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    library: String,
    project_name: String,
    source_folder: String,
    supported_libraries: BTreeMap<String, String>,
}

impl GeneratorConfig {
    /// Creates a builder with default settings.
    #[must_use]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Returns the generator name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        GENERATOR_NAME
    }

    /// Returns the generator description.
    #[must_use]
    pub fn help(&self) -> &'static str {
        GENERATOR_HELP
    }

    /// Returns the generator maturity.
    #[must_use]
    pub fn stability(&self) -> Stability {
        Stability::Stable
    }

    /// Returns the embedded template directory, which is named after the
    /// generator.
    #[must_use]
    pub fn template_dir(&self) -> &'static str {
        GENERATOR_NAME
    }

    /// Returns true: oneOf schemas are generated as protocols.
    #[must_use]
    pub fn use_one_of_interfaces(&self) -> bool {
        true
    }

    /// Returns the selected library.
    #[must_use]
    pub fn library(&self) -> &str {
        &self.library
    }

    /// Returns true if the DBSDataProvider library is selected.
    #[must_use]
    pub fn uses_dbs_data_provider(&self) -> bool {
        self.library == LIBRARY_DBS
    }

    /// Returns the project name.
    #[must_use]
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Returns the folder generated sources are written to.
    #[must_use]
    pub fn source_folder(&self) -> &str {
        &self.source_folder
    }

    /// Returns the supported libraries with their descriptions.
    #[must_use]
    pub fn supported_libraries(&self) -> &BTreeMap<String, String> {
        &self.supported_libraries
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            library: LIBRARY_DBS.to_string(),
            project_name: "OpenAPIClient".to_string(),
            source_folder: "OpenAPIClient/Classes/OpenAPIs".to_string(),
            supported_libraries: supported_libraries(),
        }
    }
}

fn supported_libraries() -> BTreeMap<String, String> {
    let mut libraries: BTreeMap<String, String> = UPSTREAM_LIBRARIES
        .iter()
        .map(|(name, help)| ((*name).to_string(), (*help).to_string()))
        .collect();
    libraries.insert(
        LIBRARY_DBS.to_string(),
        "HTTP client: DBSDataProvider".to_string(),
    );
    libraries
}

/// Builder for configuring a generation run.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    library: Option<String>,
    project_name: Option<String>,
    source_folder: Option<String>,
}

impl GeneratorConfigBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the HTTP client library.
    #[must_use]
    pub fn library(mut self, library: impl Into<String>) -> Self {
        self.library = Some(library.into());
        self
    }

    /// Sets the project name.
    #[must_use]
    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    /// Sets the source folder. Defaults to `<project>/Classes/OpenAPIs`.
    #[must_use]
    pub fn source_folder(mut self, folder: impl Into<String>) -> Self {
        self.source_folder = Some(folder.into());
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownLibrary` if the selected library is not
    /// supported.
    pub fn build(self) -> Result<GeneratorConfig, CodegenError> {
        let mut config = GeneratorConfig::default();

        if let Some(library) = self.library {
            if !config.supported_libraries.contains_key(&library) {
                return Err(CodegenError::UnknownLibrary {
                    library,
                    supported: config.supported_libraries.keys().cloned().collect(),
                });
            }
            config.library = library;
        }

        if let Some(project_name) = self.project_name {
            config.source_folder = format!("{}/Classes/OpenAPIs", project_name);
            config.project_name = project_name;
        }

        if let Some(source_folder) = self.source_folder {
            config.source_folder = source_folder;
        }

        Ok(config)
    }
}
