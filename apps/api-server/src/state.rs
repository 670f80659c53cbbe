//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::domain::CategoryDeletePolicy;
use blog_core::ports::{CategoryRepository, PostRepository};
use blog_core::{CategoryService, PostService};
use blog_infra::InMemoryBlogStore;

use crate::config::AppConfig;

#[cfg(feature = "postgres")]
use blog_infra::DatabaseConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub categories: CategoryService,
    pub posts: PostService,
    /// Name of the store backing the services, reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let policy = config.category_delete_policy;

        #[cfg(feature = "postgres")]
        {
            if let Some(db_config) = config.database.as_ref() {
                match connect_postgres(db_config, config.auto_migrate).await {
                    Ok(conn) => {
                        let (categories, posts) =
                            blog_infra::database::postgres_repositories(conn);
                        tracing::info!(?policy, "Application state initialized (postgres)");
                        return Self::from_repositories(
                            Arc::new(categories),
                            Arc::new(posts),
                            policy,
                            "postgres",
                        );
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            }
        }

        #[cfg(not(feature = "postgres"))]
        {
            if config.database.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory store");
        }

        tracing::info!(?policy, "Application state initialized (memory)");
        Self::in_memory(policy)
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory(policy: CategoryDeletePolicy) -> Self {
        let store = Arc::new(InMemoryBlogStore::new());
        Self::from_repositories(store.clone(), store, policy, "memory")
    }

    pub fn from_repositories(
        category_repo: Arc<dyn CategoryRepository>,
        post_repo: Arc<dyn PostRepository>,
        policy: CategoryDeletePolicy,
        storage: &'static str,
    ) -> Self {
        let categories = CategoryService::new(category_repo, policy);
        let posts = PostService::new(post_repo, categories.clone());

        Self {
            categories,
            posts,
            storage,
        }
    }
}

#[cfg(feature = "postgres")]
async fn connect_postgres(
    config: &DatabaseConfig,
    auto_migrate: bool,
) -> Result<sea_orm::DbConn, sea_orm::DbErr> {
    use migration::MigratorTrait;

    let conn = blog_infra::database::connect(config).await?;

    if auto_migrate {
        migration::Migrator::up(&conn, None).await?;
        tracing::info!("Database migrations applied");
    }

    Ok(conn)
}
