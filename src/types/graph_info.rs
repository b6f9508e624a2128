use super::error::SchemaValidationError;
use crate::codec::SchemaModel;
use serde::{Deserialize, Serialize};

/// Graph descriptor
///
/// Lists its vertex and edge types by name only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphInfo {
    pub name: String,
    pub prefix: String,
    pub vertices: Vec<String>,
    pub edges: Vec<String>,
    pub version: String,
}

impl GraphInfo {
    pub fn new(
        name: impl Into<String>,
        prefix: impl Into<String>,
        vertices: Vec<String>,
        edges: Vec<String>,
        version: impl Into<String>,
    ) -> Result<Self, SchemaValidationError> {
        let info = Self {
            name: name.into(),
            prefix: prefix.into(),
            vertices,
            edges,
            version: version.into(),
        };
        info.validate()?;
        Ok(info)
    }

    pub fn has_vertex(&self, name: &str) -> bool {
        self.vertices.iter().any(|v| v == name)
    }

    pub fn has_edge(&self, name: &str) -> bool {
        self.edges.iter().any(|e| e == name)
    }
}

impl SchemaModel for GraphInfo {
    const KIND: &'static str = "GraphInfo";

    fn validate(&self) -> Result<(), SchemaValidationError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_info_lookup() {
        let info = GraphInfo::new(
            "social",
            "graph/",
            vec!["person".to_string()],
            vec!["knows".to_string()],
            "v1",
        )
        .unwrap();

        assert!(info.has_vertex("person"));
        assert!(!info.has_vertex("knows"));
        assert!(info.has_edge("knows"));
    }
}
