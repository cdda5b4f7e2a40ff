//! Application state wiring the pipeline together.
//!
//! The form service is generic over its store and submitter traits;
//! AppState pins them to the concrete infra implementations.

use vitaform_core::service::FormService;
use vitaform_core::validate::TriggerRule;
use vitaform_infra::sqlite::{DatabasePool, SqliteDraftStore};
use vitaform_infra::telegram::TelegramSubmitter;
use vitaform_types::message::MessageCatalog;
use vitaform_types::schema::QuestionnaireSchema;

/// Concrete service type pinned to the infra implementations.
pub type ConcreteFormService = FormService<SqliteDraftStore, TelegramSubmitter>;

/// Shared application state for CLI commands.
pub struct AppState {
    pub service: ConcreteFormService,
}

impl AppState {
    /// Initialize the application state: connect to the database and
    /// wire the service around the given schema and rules.
    pub async fn init(
        schema: QuestionnaireSchema,
        rules: Vec<TriggerRule>,
    ) -> anyhow::Result<Self> {
        let data_dir = std::env::var("VITAFORM_DATA_DIR").unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            format!("{home}/.vitaform")
        });
        tokio::fs::create_dir_all(&data_dir).await?;

        let db_url = format!("sqlite://{data_dir}/vitaform.db?mode=rwc");
        let pool = DatabasePool::new(&db_url).await?;

        let service = FormService::new(
            schema,
            rules,
            MessageCatalog::default(),
            SqliteDraftStore::new(pool),
            TelegramSubmitter::from_env(),
        );

        Ok(Self { service })
    }
}
