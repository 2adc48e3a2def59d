//! Raw tool descriptors as reported by external registries.

use crate::error::CoreResult;
use crate::schema::ParameterSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An atomic capability descriptor from a registry listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTool {
    /// Tool name, unique within one listing
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// JSON Schema fragment for the tool input, possibly empty
    #[serde(default, alias = "input_schema")]
    pub input_schema: Value,
}

impl RawTool {
    /// Create a tool with an empty input schema
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema: Value::Null,
        }
    }

    /// Set input schema
    #[must_use]
    pub fn with_input_schema(mut self, schema: Value) -> Self {
        self.input_schema = schema;
        self
    }

    /// Input schema lifted into the parameter algebra
    #[must_use]
    pub fn parameter_schema(&self) -> ParameterSchema {
        ParameterSchema::from_json(&self.input_schema)
    }
}

/// One server entry of a registry listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSpec {
    /// Server identifier
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Registry category, e.g. "filesystem" or "search"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Tools exposed by the server
    #[serde(default)]
    pub tools: Vec<RawTool>,
}

impl ServerSpec {
    /// Create a server with no tools
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            description: String::new(),
            category: None,
            tools: Vec::new(),
        }
    }

    /// Set category
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Add a tool
    #[must_use]
    pub fn with_tool(mut self, tool: RawTool) -> Self {
        self.tools.push(tool);
        self
    }
}

/// A registry listing, as returned by a registry provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryListing {
    /// Servers in listing order
    #[serde(default)]
    pub servers: Vec<ServerSpec>,
}

/// Accepted document shapes for a listing
#[derive(Deserialize)]
#[serde(untagged)]
enum ListingDocument {
    Listing(RegistryListing),
    Tools(Vec<RawTool>),
}

impl RegistryListing {
    /// Id of the server synthesized around a bare tool array
    pub const LOCAL_SERVER_ID: &'static str = "local";

    /// Create an empty listing
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a server
    #[must_use]
    pub fn with_server(mut self, server: ServerSpec) -> Self {
        self.servers.push(server);
        self
    }

    /// Parse a listing from JSON
    ///
    /// Accepts either `{"servers": [...]}` or a bare array of tools, which
    /// is wrapped in a single server named [`Self::LOCAL_SERVER_ID`].
    ///
    /// # Errors
    ///
    /// Returns error if the text is not one of the accepted shapes
    pub fn from_json(text: &str) -> CoreResult<Self> {
        match serde_json::from_str::<ListingDocument>(text)? {
            ListingDocument::Listing(listing) => Ok(listing),
            ListingDocument::Tools(tools) => {
                let mut server = ServerSpec::new(Self::LOCAL_SERVER_ID);
                server.tools = tools;
                Ok(Self::new().with_server(server))
            }
        }
    }

    /// All tools of all servers, flattened in listing order
    #[must_use]
    pub fn tools(&self) -> Vec<RawTool> {
        self.servers
            .iter()
            .flat_map(|server| server.tools.iter().cloned())
            .collect()
    }

    /// Servers whose category matches, ignoring ASCII case
    #[must_use]
    pub fn servers_by_category(&self, category: &str) -> Vec<&ServerSpec> {
        self.servers
            .iter()
            .filter(|server| {
                server
                    .category
                    .as_deref()
                    .is_some_and(|c| c.eq_ignore_ascii_case(category))
            })
            .collect()
    }

    /// Listing restricted to servers of one category
    #[must_use]
    pub fn filter_category(&self, category: &str) -> Self {
        Self {
            servers: self
                .servers_by_category(category)
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    /// Total tool count across servers
    #[must_use]
    pub fn tool_count(&self) -> usize {
        self.servers.iter().map(|server| server.tools.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaKind;
    use serde_json::json;

    #[test]
    fn test_raw_tool_deserialize_camel_case() {
        let tool: RawTool = serde_json::from_value(json!({
            "name": "custom_search",
            "description": "Search the custom database",
            "inputSchema": { "type": "object", "properties": {} }
        }))
        .unwrap();
        assert_eq!(tool.name, "custom_search");
        assert!(matches!(
            tool.parameter_schema().kind,
            SchemaKind::Object { .. }
        ));
    }

    #[test]
    fn test_raw_tool_deserialize_snake_alias_and_defaults() {
        let tool: RawTool = serde_json::from_value(json!({
            "name": "ping",
            "input_schema": { "type": "string" }
        }))
        .unwrap();
        assert_eq!(tool.description, "");
        assert_eq!(tool.input_schema, json!({ "type": "string" }));

        let bare: RawTool = serde_json::from_value(json!({ "name": "noop" })).unwrap();
        assert!(bare.parameter_schema().is_unspecified());
    }

    #[test]
    fn test_raw_tool_missing_name_is_rejected() {
        let result = serde_json::from_value::<RawTool>(json!({ "description": "x" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_listing_from_json_servers() {
        let listing = RegistryListing::from_json(
            r#"{"servers": [
                {"id": "fs", "category": "filesystem", "tools": [{"name": "read_file"}]},
                {"id": "web", "category": "search", "tools": [{"name": "web_search"}, {"name": "fetch_url"}]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(listing.servers.len(), 2);
        assert_eq!(listing.tool_count(), 3);
        let names: Vec<String> = listing.tools().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["read_file", "web_search", "fetch_url"]);
    }

    #[test]
    fn test_listing_from_json_bare_array() {
        let listing =
            RegistryListing::from_json(r#"[{"name": "custom_search"}, {"name": "read_file"}]"#)
                .unwrap();
        assert_eq!(listing.servers.len(), 1);
        assert_eq!(listing.servers[0].id, RegistryListing::LOCAL_SERVER_ID);
        assert_eq!(listing.tool_count(), 2);
    }

    #[test]
    fn test_listing_from_json_rejects_garbage() {
        assert!(RegistryListing::from_json("42").is_err());
        assert!(RegistryListing::from_json("{not json").is_err());
    }

    #[test]
    fn test_servers_by_category() {
        let listing = RegistryListing::new()
            .with_server(ServerSpec::new("fs").with_category("FileSystem"))
            .with_server(ServerSpec::new("web").with_category("search"))
            .with_server(ServerSpec::new("misc"));

        let found = listing.servers_by_category("filesystem");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "fs");

        let filtered = listing.filter_category("search");
        assert_eq!(filtered.servers.len(), 1);
        assert_eq!(filtered.servers[0].id, "web");
        assert!(listing.servers_by_category("nothing").is_empty());
    }

    #[test]
    fn test_empty_listing() {
        let listing = RegistryListing::new();
        assert!(listing.tools().is_empty());
        assert_eq!(listing.tool_count(), 0);
    }
}
