use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Alias, Cond, Expr, Func, Order, Query, SelectStatement};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, QueryOrder,
    QuerySelect,
};

use crate::post::adapter::outgoing::sea_orm_entity::admission_posts::{Column, Entity};
use crate::shared::query::contains_pattern;
use crate::stats::application::domain::entities::{CountType, StatsRow, StatusGroup};
use crate::stats::application::ports::outgoing::{StatsFilter, StatsQuery, StatsQueryError};

const GROUP_COLUMNS: [Column; 5] = [
    Column::University,
    Column::Major,
    Column::DegreeType,
    Column::Year,
    Column::Term,
];

#[derive(Debug, FromQueryResult)]
struct GroupRow {
    university: String,
    major: String,
    degree_type: String,
    year: i32,
    term: String,
    admissions_count: i64,
    rejections_count: i64,
    in_progress_count: i64,
    questions_count: i64,
    total_count: i64,
}

impl From<GroupRow> for StatsRow {
    fn from(row: GroupRow) -> Self {
        Self {
            university: row.university,
            major: row.major,
            degree_type: row.degree_type,
            year: row.year,
            term: row.term,
            admissions_count: row.admissions_count,
            rejections_count: row.rejections_count,
            in_progress_count: row.in_progress_count,
            questions_count: row.questions_count,
            total_count: row.total_count,
        }
    }
}

fn status_labels(group: StatusGroup) -> Vec<&'static str> {
    group.statuses().iter().map(|s| s.as_str()).collect()
}

/// Grouped counters over the filtered posts.
///
/// Each group counter is a `SUM(CASE ...)` over the status, independent of the
/// `count_type` restriction, which only narrows the rows that get grouped.
pub(crate) fn build_stats_query(filter: &StatsFilter, count_type: CountType) -> SelectStatement {
    let mut query = Query::select();
    query.columns(GROUP_COLUMNS).from(Entity);

    for group in StatusGroup::COUNTED {
        let counted =
            Expr::case(Expr::col(Column::Status).is_in(status_labels(group)), 1).finally(0);
        query.expr_as(Func::sum(counted), Alias::new(group.count_column()));
    }
    query.expr_as(Expr::cust("COUNT(*)"), Alias::new("total_count"));

    let mut cond = Cond::all();
    if let Some(university) = &filter.university {
        cond = cond.add(Expr::col(Column::University).ilike(contains_pattern(university)));
    }
    if let Some(major) = &filter.major {
        cond = cond.add(Expr::col(Column::Major).ilike(contains_pattern(major)));
    }
    if let Some(degree_type) = filter.degree_type {
        cond = cond.add(Expr::col(Column::DegreeType).eq(degree_type.as_str()));
    }
    if let Some(year) = filter.year {
        cond = cond.add(Expr::col(Column::Year).eq(year));
    }
    if let Some(term) = filter.term {
        cond = cond.add(Expr::col(Column::Term).eq(term.as_str()));
    }
    if let Some(group) = count_type.group() {
        cond = cond.add(Expr::col(Column::Status).is_in(status_labels(group)));
    }
    if !cond.is_empty() {
        query.cond_where(cond);
    }

    query.group_by_columns(GROUP_COLUMNS);
    for column in GROUP_COLUMNS {
        query.order_by(column, Order::Asc);
    }

    query
}

#[derive(Clone)]
pub struct StatsQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl StatsQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn distinct_strings(&self, column: Column) -> Result<Vec<String>, StatsQueryError> {
        Entity::find()
            .select_only()
            .column(column)
            .distinct()
            .order_by_asc(column)
            .into_tuple::<String>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

#[async_trait]
impl StatsQuery for StatsQueryPostgres {
    async fn grouped_counts(
        &self,
        filter: &StatsFilter,
        count_type: CountType,
    ) -> Result<Vec<StatsRow>, StatsQueryError> {
        let statement = self
            .db
            .get_database_backend()
            .build(&build_stats_query(filter, count_type));

        let rows = GroupRow::find_by_statement(statement)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(StatsRow::from).collect())
    }

    async fn distinct_universities(&self) -> Result<Vec<String>, StatsQueryError> {
        self.distinct_strings(Column::University).await
    }

    async fn distinct_majors(&self) -> Result<Vec<String>, StatsQueryError> {
        self.distinct_strings(Column::Major).await
    }

    async fn distinct_years(&self) -> Result<Vec<i32>, StatsQueryError> {
        Entity::find()
            .select_only()
            .column(Column::Year)
            .distinct()
            .order_by_desc(Column::Year)
            .into_tuple::<i32>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

fn map_db_err(e: DbErr) -> StatsQueryError {
    StatsQueryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::application::domain::entities::{DegreeType, Term};
    use maplit::btreemap;
    use sea_orm::sea_query::PostgresQueryBuilder;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};

    fn sql(filter: &StatsFilter, count_type: CountType) -> String {
        build_stats_query(filter, count_type).to_string(PostgresQueryBuilder)
    }

    #[test]
    fn counts_every_group_and_total() {
        let sql = sql(&StatsFilter::default(), CountType::All);

        assert!(sql.contains(r#""status" IN ('ACCEPTED', 'ACCEPTED FROM WAITLIST', 'ENROLLED')"#));
        assert!(sql.contains("THEN 1 ELSE 0 END"));
        assert!(sql.contains(r#"AS "admissions_count""#));
        assert!(sql.contains(r#"AS "rejections_count""#));
        assert!(sql.contains(r#"AS "in_progress_count""#));
        assert!(sql.contains(r#"AS "questions_count""#));
        assert!(sql.contains(r#"COUNT(*) AS "total_count""#));
        assert!(!sql.contains("WHERE"), "unfiltered query has no WHERE clause: {sql}");
    }

    #[test]
    fn single_filter_yields_where_without_placeholder_true() {
        let filter = StatsFilter {
            year: Some(2025),
            ..StatsFilter::default()
        };

        let sql = sql(&filter, CountType::All);

        assert!(sql.contains(r#"WHERE "year" = 2025"#));
        assert!(!sql.contains("TRUE"));
    }

    #[test]
    fn groups_and_orders_by_all_dimensions() {
        let sql = sql(&StatsFilter::default(), CountType::All);

        assert!(sql.contains(r#"GROUP BY "university", "major", "degree_type", "year", "term""#));
        assert!(sql.contains(
            r#"ORDER BY "university" ASC, "major" ASC, "degree_type" ASC, "year" ASC, "term" ASC"#
        ));
    }

    #[test]
    fn applies_filters_with_escaped_patterns() {
        let filter = StatsFilter {
            university: Some("100%".to_string()),
            major: Some("cs".to_string()),
            degree_type: Some(DegreeType::Ms),
            year: Some(2025),
            term: Some(Term::Fall),
        };

        let sql = sql(&filter, CountType::All);

        assert!(sql.contains(r#""university" ILIKE"#));
        assert!(sql.contains(r#"%100\\%%'"#));
        assert!(sql.contains(r#""major" ILIKE '%cs%'"#));
        assert!(sql.contains(r#""degree_type" = 'MS'"#));
        assert!(sql.contains(r#""year" = 2025"#));
        assert!(sql.contains(r#""term" = 'FALL'"#));
    }

    #[test]
    fn count_type_restricts_rows_to_its_group() {
        let sql = sql(&StatsFilter::default(), CountType::Rejections);

        let (_, where_clause) = sql.split_once("WHERE").unwrap();
        assert!(where_clause.contains(r#""status" IN ('REJECTED', 'REJECTED FROM WAITLIST')"#));
        assert!(!where_clause.contains("'ACCEPTED'"));
    }

    #[tokio::test]
    async fn grouped_counts_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![
            btreemap! {
                "university".to_string() => Value::from("X"),
                "major".to_string() => Value::from("Physics"),
                "degree_type".to_string() => Value::from("PHD"),
                "year".to_string() => Value::from(2025),
                "term".to_string() => Value::from("FALL"),
                "admissions_count".to_string() => Value::from(1i64),
                "rejections_count".to_string() => Value::from(0i64),
                "in_progress_count".to_string() => Value::from(0i64),
                "questions_count".to_string() => Value::from(0i64),
                "total_count".to_string() => Value::from(2i64),
            },
        ]]);
        let query = StatsQueryPostgres::new(Arc::new(db.into_connection()));

        let rows = query
            .grouped_counts(&StatsFilter::default(), CountType::All)
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].university, "X");
        assert_eq!(rows[0].admissions_count, 1);
        assert_eq!(rows[0].total_count, 2);
    }

    #[tokio::test]
    async fn distinct_years_come_back_in_query_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![
            btreemap! { "year".to_string() => Value::from(2025) },
            btreemap! { "year".to_string() => Value::from(2023) },
        ]]);
        let query = StatsQueryPostgres::new(Arc::new(db.into_connection()));

        assert_eq!(query.distinct_years().await.unwrap(), vec![2025, 2023]);
    }

    #[tokio::test]
    async fn database_errors_are_reported() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("gone".to_string())]);
        let query = StatsQueryPostgres::new(Arc::new(db.into_connection()));

        assert!(matches!(
            query.distinct_universities().await,
            Err(StatsQueryError::DatabaseError(_))
        ));
    }
}
