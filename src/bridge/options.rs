use std::env;
use std::fmt;
use std::str::FromStr;

/// How line order survives a trip through the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineOrdering {
    /// Write a line-index column and sort on it when reading
    #[default]
    Indexed,
    /// Write the text column only and trust the store's row order
    StoreOrder,
}

impl FromStr for LineOrdering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "indexed" => Ok(LineOrdering::Indexed),
            "store" | "store_order" => Ok(LineOrdering::StoreOrder),
            other => Err(format!("unknown line ordering: {}", other)),
        }
    }
}

impl fmt::Display for LineOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineOrdering::Indexed => f.write_str("indexed"),
            LineOrdering::StoreOrder => f.write_str("store_order"),
        }
    }
}

/// Bridge options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BridgeOptions {
    pub line_ordering: LineOrdering,
}

impl BridgeOptions {
    pub const LINE_ORDERING_VAR: &'static str = "GRAPHAR_LINE_ORDERING";

    pub fn with_line_ordering(mut self, line_ordering: LineOrdering) -> Self {
        self.line_ordering = line_ordering;
        self
    }

    /// Load options from environment variables
    ///
    /// `GRAPHAR_LINE_ORDERING` accepts `indexed` or `store`; unset keeps
    /// the default.
    pub fn from_env() -> anyhow::Result<Self> {
        let line_ordering = match env::var(Self::LINE_ORDERING_VAR) {
            Ok(value) => value.parse().map_err(anyhow::Error::msg)?,
            Err(env::VarError::NotPresent) => LineOrdering::default(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self { line_ordering })
    }
}
