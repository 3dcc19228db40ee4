use actix_web::{get, web, HttpResponse, Responder};
use deadpool_redis::Pool;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
    redis: &'static str,
}

fn probe_status(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "unhealthy"
    }
}

async fn database_ready(db: &DatabaseConnection) -> bool {
    db.execute(Statement::from_string(db.get_database_backend(), "SELECT 1"))
        .await
        .is_ok()
}

async fn redis_ready(pool: &Pool) -> bool {
    let Ok(mut conn) = pool.get().await else {
        return false;
    };
    deadpool_redis::redis::cmd("PING")
        .query_async::<String>(&mut *conn)
        .await
        .is_ok()
}

/// Liveness probe. No I/O.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// Readiness probe: database and Redis must both answer.
#[get("/ready")]
pub async fn readiness(
    db: web::Data<Arc<DatabaseConnection>>,
    redis: web::Data<Arc<Pool>>,
) -> impl Responder {
    let db_ok = database_ready(&db).await;
    let redis_ok = redis_ready(&redis).await;

    let body = ReadinessResponse {
        status: probe_status(db_ok && redis_ok),
        database: probe_status(db_ok),
        redis: probe_status(redis_ok),
    };

    if db_ok && redis_ok {
        HttpResponse::Ok().json(body)
    } else {
        tracing::warn!(database = body.database, redis = body.redis, "Readiness check failed");
        HttpResponse::ServiceUnavailable().json(body)
    }
}
