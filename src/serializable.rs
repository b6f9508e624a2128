/// Load and store schema documents at record store locations
///
/// `YamlSerializable` is implemented for every `SchemaModel`:
///
/// ```ignore
/// let info = GraphInfo::from_location("social.graph.yml", &store).await?;
/// info.to_location("copy.graph.yml", &store).await?;
/// ```

use crate::bridge::{BridgeOptions, TextBridge};
use crate::codec::{decode, encode, SchemaModel};
use crate::error::InfoResult;
use crate::storage::RecordStore;
use async_trait::async_trait;

/// Read a document of type `T` from a store location
pub async fn read_yaml_from_store<T: SchemaModel>(
    location: &str,
    store: &dyn RecordStore,
    options: &BridgeOptions,
) -> InfoResult<T> {
    let text = TextBridge::with_options(store, options.clone())
        .get(location)
        .await?;
    let model = decode::<T>(&text)?;
    tracing::debug!(location, kind = T::KIND, "loaded document");
    Ok(model)
}

/// Write a document to a store location, replacing what was there
pub async fn write_yaml_to_store<T: SchemaModel>(
    location: &str,
    model: &T,
    store: &dyn RecordStore,
    options: &BridgeOptions,
) -> InfoResult<()> {
    let text = encode(model)?;
    TextBridge::with_options(store, options.clone())
        .put(location, &text)
        .await?;
    tracing::info!(location, kind = T::KIND, "stored document");
    Ok(())
}

/// Schema documents that persist as YAML in a record store
#[async_trait]
pub trait YamlSerializable: SchemaModel {
    /// Load from a location with default bridge options
    async fn from_location(location: &str, store: &dyn RecordStore) -> InfoResult<Self> {
        Self::from_location_with(location, store, &BridgeOptions::default()).await
    }

    async fn from_location_with(
        location: &str,
        store: &dyn RecordStore,
        options: &BridgeOptions,
    ) -> InfoResult<Self> {
        read_yaml_from_store(location, store, options).await
    }

    /// Store at a location with default bridge options
    async fn to_location(&self, location: &str, store: &dyn RecordStore) -> InfoResult<()> {
        self.to_location_with(location, store, &BridgeOptions::default())
            .await
    }

    async fn to_location_with(
        &self,
        location: &str,
        store: &dyn RecordStore,
        options: &BridgeOptions,
    ) -> InfoResult<()> {
        write_yaml_to_store(location, self, store, options).await
    }

    /// Encode as YAML text
    fn to_yaml(&self) -> InfoResult<String> {
        Ok(encode(self)?)
    }

    /// Decode from YAML text
    fn from_yaml(text: &str) -> InfoResult<Self> {
        Ok(decode(text)?)
    }
}

impl<T: SchemaModel> YamlSerializable for T {}
