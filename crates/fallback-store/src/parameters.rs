use crate::{error::StoreError, store::BlobStore};
use lazy_static::lazy_static;
use model::core::parameter::{Parameter, ParameterKind};
use std::sync::Arc;
use tracing::warn;

/// Key the dashboard client keeps its offline parameter list under.
/// Preserved verbatim so stores written by earlier clients stay readable.
pub const FALLBACK_PARAMETERS_KEY: &str = "fallbackParameters";

const SEED_KINDS: [ParameterKind; 5] = [
    ParameterKind::Int,
    ParameterKind::Text,
    ParameterKind::Float,
    ParameterKind::Bool,
    ParameterKind::Datetime,
];

lazy_static! {
    static ref DEFAULT_PARAMETERS: Vec<Parameter> = (1..=10u64)
        .map(|i| {
            Parameter::new(
                i,
                format!("Parameter {i}"),
                SEED_KINDS[(i as usize - 1) % SEED_KINDS.len()],
            )
        })
        .collect();
}

/// The ten stand-in parameters written to an unseeded store.
pub fn default_parameters() -> &'static [Parameter] {
    &DEFAULT_PARAMETERS
}

/// Offline mirror of the parameters table, used while the backend is
/// unreachable. All reads and writes go through the injected [`BlobStore`].
pub struct ParameterCache {
    store: Arc<dyn BlobStore>,
}

impl ParameterCache {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }

    /// The cached parameter list; empty when nothing usable is stored.
    pub async fn load(&self) -> Result<Vec<Parameter>, StoreError> {
        Ok(self.read().await?.unwrap_or_default())
    }

    /// The cached parameter list, seeding the defaults first when the store
    /// holds nothing usable. A stored empty list counts as usable and is
    /// returned as-is.
    pub async fn load_or_seed(&self) -> Result<Vec<Parameter>, StoreError> {
        if let Some(params) = self.read().await? {
            return Ok(params);
        }

        let defaults = DEFAULT_PARAMETERS.clone();
        self.save(&defaults).await?;
        Ok(defaults)
    }

    /// Overwrites the cached list.
    pub async fn save(&self, params: &[Parameter]) -> Result<(), StoreError> {
        let blob = serde_json::to_value(params).map_err(|source| StoreError::Codec {
            key: FALLBACK_PARAMETERS_KEY.to_string(),
            source,
        })?;
        self.store.set(FALLBACK_PARAMETERS_KEY, &blob).await
    }

    /// Appends a locally-created parameter under the next free id and
    /// persists the list. Returns the created row.
    pub async fn insert(
        &self,
        name: impl Into<String>,
        kind: ParameterKind,
    ) -> Result<Parameter, StoreError> {
        let mut params = self.load().await?;
        let param = Parameter::new(listing::next_id(&params), name, kind);
        params.push(param.clone());
        self.save(&params).await?;
        Ok(param)
    }

    /// Deletes the row with `id`, persisting only when something matched.
    /// Returns whether a row was removed.
    pub async fn remove(&self, id: u64) -> Result<bool, StoreError> {
        let mut params = self.load().await?;
        let before = params.len();
        params.retain(|p| p.id != id);

        let removed = params.len() != before;
        if removed {
            self.save(&params).await?;
        }
        Ok(removed)
    }

    /// Raw read: `None` for a missing key or a blob that no longer decodes
    /// as a parameter list. Undecodable blobs are logged and treated as
    /// absent; the next save overwrites them.
    async fn read(&self) -> Result<Option<Vec<Parameter>>, StoreError> {
        let Some(blob) = self.store.get(FALLBACK_PARAMETERS_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_value(blob) {
            Ok(params) => Ok(Some(params)),
            Err(err) => {
                warn!("Ignoring undecodable fallback parameter blob: {err}");
                Ok(None)
            }
        }
    }
}
