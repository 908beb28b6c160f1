use crate::config::AppConfig;
use crate::dishes::Catalog;
use crate::meals::{services::seed_demo_meals, Ledger};
use crate::recommendations::{RecommendationSelector, StaticScores};
use anyhow::Context;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub ledger: Arc<RwLock<Ledger>>,
    pub config: Arc<AppConfig>,
    pub recommender: Arc<RecommendationSelector>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;

        let catalog = match &config.catalog_path {
            Some(path) => {
                let raw = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("read catalog {}", path.display()))?;
                Catalog::from_json(&raw)
                    .with_context(|| format!("load catalog {}", path.display()))?
            }
            None => Catalog::builtin().context("load built-in catalog")?,
        };

        Self::from_parts(catalog, config)
    }

    pub fn from_parts(catalog: Catalog, config: AppConfig) -> anyhow::Result<Self> {
        let catalog = Arc::new(catalog);

        let mut ledger = Ledger::new(catalog.clone());
        if config.seed_demo_meals {
            seed_demo_meals(&mut ledger).context("seed demo meals")?;
        }

        let recommender = RecommendationSelector::new(StaticScores::builtin())
            .with_limit(config.recommendations.limit)
            .with_min_confidence(config.recommendations.min_confidence);

        Ok(Self {
            catalog,
            ledger: Arc::new(RwLock::new(ledger)),
            config: Arc::new(config),
            recommender: Arc::new(recommender),
        })
    }
}
