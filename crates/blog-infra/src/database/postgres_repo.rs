//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::{BinOper, Expr, Func, IntoColumnRef, SimpleExpr};
use sea_orm::{
    ColumnTrait, Condition, DbConn, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use uuid::Uuid;

use blog_core::domain::{Category, Post};
use blog_core::error::RepoError;
use blog_core::ports::{CategoryRepository, PostRepository};

use super::entity::category::{self, Entity as CategoryEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, query_err};

/// PostgreSQL category repository.
pub type PostgresCategoryRepository = PostgresBaseRepository<CategoryEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// Build both repositories over one pool.
pub fn postgres_repositories(db: DbConn) -> (PostgresCategoryRepository, PostgresPostRepository) {
    (
        PostgresCategoryRepository::new(db.clone()),
        PostgresPostRepository::new(db),
    )
}

/// `LIKE` pattern matching `fragment` anywhere, wildcards escaped.
fn contains_pattern(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len() + 2);
    escaped.push('%');
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// `UPPER(column) LIKE UPPER(pattern)`, so the database folds case on both sides.
fn upper_contains(column: impl IntoColumnRef, fragment: &str) -> SimpleExpr {
    Expr::expr(Func::upper(Expr::col(column)))
        .binary(BinOper::Like, Func::upper(Expr::val(contains_pattern(fragment))))
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, RepoError> {
        let result = CategoryEntity::find()
            .order_by_asc(category::Column::Name)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_name_containing(&self, fragment: &str) -> Result<Vec<Category>, RepoError> {
        tracing::debug!(fragment, "Filtering categories by name");

        let result = CategoryEntity::find()
            .filter(upper_contains(category::Column::Name, fragment))
            .order_by_asc(category::Column::Name)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Category>, RepoError> {
        let result = CategoryEntity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(category::Column::Name)))
                    .eq(Func::lower(Expr::val(name))),
            )
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn count_posts(&self, id: Uuid) -> Result<u64, RepoError> {
        PostEntity::find()
            .filter(post::Column::CategoryId.eq(id))
            .count(&self.db)
            .await
            .map_err(query_err)
    }

    async fn delete_with_posts(&self, id: Uuid) -> Result<u64, RepoError> {
        let txn = self.db.begin().await.map_err(query_err)?;

        let posts = PostEntity::delete_many()
            .filter(post::Column::CategoryId.eq(id))
            .exec(&txn)
            .await
            .map_err(query_err)?;

        let deleted = CategoryEntity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(query_err)?;

        if deleted.rows_affected == 0 {
            txn.rollback().await.map_err(query_err)?;
            return Err(RepoError::NotFound);
        }

        txn.commit().await.map_err(query_err)?;
        tracing::debug!(
            category_id = %id,
            posts = posts.rows_affected,
            "Deleted category with posts"
        );

        Ok(posts.rows_affected)
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(%start, %end, "Finding posts by creation window");

        let result = PostEntity::find()
            .filter(post::Column::CreatedAt.between(start, end))
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn search_title_or_content(&self, fragment: &str) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(fragment, "Searching posts");

        let result = PostEntity::find()
            .filter(
                Condition::any()
                    .add(upper_contains(post::Column::Title, fragment))
                    .add(upper_contains(post::Column::Content, fragment)),
            )
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_category_id(&self, category_id: Uuid) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::CategoryId.eq(category_id))
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::sea_query::{PostgresQueryBuilder, Query};

    use super::*;

    #[test]
    fn pattern_is_escaped() {
        assert_eq!(contains_pattern("Straße"), "%Straße%");
        assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
    }

    #[test]
    fn case_folding_happens_in_the_database() {
        let sql = Query::select()
            .column(post::Column::Id)
            .from(PostEntity)
            .and_where(upper_contains(post::Column::Title, "Straße"))
            .to_string(PostgresQueryBuilder);

        assert!(sql.contains(r#"UPPER("title")"#), "{sql}");
        assert!(sql.contains("LIKE"), "{sql}");
        assert!(sql.contains("UPPER('%Straße%')"), "{sql}");
    }
}
