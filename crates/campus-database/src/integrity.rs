//! Declarative delete policies and their transactional executor.
//!
//! The schema declares every foreign key as `NO ACTION`. Deleting a parent
//! row therefore applies the dependents listed in its [`DeletePolicy`] as
//! explicit statements inside one transaction that first locks the parent.

use sqlx::PgPool;
use sqlx::error::ErrorKind as DbErrorKind;
use tracing::{debug, info};
use uuid::Uuid;

use campus_core::error::AppError;
use campus_core::result::AppResult;

use crate::error::map_sqlx_error;

/// What happens to a dependent row when its parent is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnDelete {
    /// Delete the dependent rows.
    Cascade,
    /// Clear the referencing column.
    SetNull,
    /// Refuse the delete while dependents exist.
    Restrict,
}

/// A table whose column references the parent's primary key.
#[derive(Debug, Clone, Copy)]
pub struct Dependent {
    /// Referencing table.
    pub table: &'static str,
    /// Referencing column.
    pub column: &'static str,
    /// Action applied on parent delete.
    pub action: OnDelete,
    /// Plural noun used in conflict messages.
    pub label: &'static str,
}

/// Delete policy for one parent table.
#[derive(Debug, Clone, Copy)]
pub struct DeletePolicy {
    /// Parent table.
    pub table: &'static str,
    /// Singular entity name used in messages.
    pub entity: &'static str,
    /// Dependents, applied in order.
    pub dependents: &'static [Dependent],
}

/// Restrict checks run before any mutation; order within the slice does
/// not matter for them.
pub const DEPARTMENT_POLICY: DeletePolicy = DeletePolicy {
    table: "departments",
    entity: "Department",
    dependents: &[
        Dependent {
            table: "courses",
            column: "department_id",
            action: OnDelete::Restrict,
            label: "courses",
        },
        Dependent {
            table: "instructors",
            column: "department_id",
            action: OnDelete::SetNull,
            label: "instructors",
        },
        Dependent {
            table: "users",
            column: "department_id",
            action: OnDelete::SetNull,
            label: "students",
        },
    ],
};

pub const INSTRUCTOR_POLICY: DeletePolicy = DeletePolicy {
    table: "instructors",
    entity: "Instructor",
    dependents: &[
        Dependent {
            table: "office_assignments",
            column: "instructor_id",
            action: OnDelete::Cascade,
            label: "office assignments",
        },
        Dependent {
            table: "course_instructors",
            column: "instructor_id",
            action: OnDelete::Cascade,
            label: "course assignments",
        },
        Dependent {
            table: "departments",
            column: "administrator_id",
            action: OnDelete::SetNull,
            label: "administered departments",
        },
    ],
};

pub const COURSE_POLICY: DeletePolicy = DeletePolicy {
    table: "courses",
    entity: "Course",
    dependents: &[
        Dependent {
            table: "enrollments",
            column: "course_id",
            action: OnDelete::Cascade,
            label: "enrollments",
        },
        Dependent {
            table: "course_instructors",
            column: "course_id",
            action: OnDelete::Cascade,
            label: "course assignments",
        },
    ],
};

pub const STUDENT_POLICY: DeletePolicy = DeletePolicy {
    table: "users",
    entity: "Student",
    dependents: &[Dependent {
        table: "enrollments",
        column: "student_id",
        action: OnDelete::Cascade,
        label: "enrollments",
    }],
};

/// Rows touched by a successful policy delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteReport {
    /// Dependent rows deleted.
    pub cascaded: u64,
    /// Dependent rows whose reference was cleared.
    pub nulled: u64,
}

fn lock_sql(policy: &DeletePolicy) -> String {
    format!("SELECT id FROM {} WHERE id = $1 FOR UPDATE", policy.table)
}

fn count_sql(dep: &Dependent) -> String {
    format!("SELECT COUNT(*) FROM {} WHERE {} = $1", dep.table, dep.column)
}

fn apply_sql(dep: &Dependent) -> Option<String> {
    match dep.action {
        OnDelete::Cascade => Some(format!("DELETE FROM {} WHERE {} = $1", dep.table, dep.column)),
        OnDelete::SetNull => Some(format!(
            "UPDATE {table} SET {column} = NULL WHERE {column} = $1",
            table = dep.table,
            column = dep.column
        )),
        OnDelete::Restrict => None,
    }
}

fn delete_sql(policy: &DeletePolicy) -> String {
    format!("DELETE FROM {} WHERE id = $1", policy.table)
}

/// Delete `id` from the policy's table, applying every dependent action
/// atomically.
///
/// Returns NotFound when the row does not exist and Conflict when a
/// restrict check fails or a dependent row appears concurrently. Any
/// failure rolls back the whole transaction.
pub async fn delete_with_policy(
    pool: &PgPool,
    policy: &DeletePolicy,
    id: Uuid,
) -> AppResult<DeleteReport> {
    let context = format!("Failed to delete {}", policy.entity.to_lowercase());
    let mut tx = pool.begin().await.map_err(|e| map_sqlx_error(e, &context))?;

    let locked: Option<Uuid> = sqlx::query_scalar(&lock_sql(policy))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| map_sqlx_error(e, &context))?;
    if locked.is_none() {
        return Err(AppError::not_found(format!("{} not found", policy.entity)));
    }

    for dep in policy
        .dependents
        .iter()
        .filter(|d| d.action == OnDelete::Restrict)
    {
        let count: i64 = sqlx::query_scalar(&count_sql(dep))
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error(e, &context))?;
        if count > 0 {
            return Err(AppError::conflict(format!(
                "{} is still referenced by {count} {}",
                policy.entity, dep.label
            )));
        }
    }

    let mut report = DeleteReport::default();
    for dep in policy.dependents {
        let Some(sql) = apply_sql(dep) else {
            continue;
        };
        let affected = sqlx::query(&sql)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error(e, &context))?
            .rows_affected();
        debug!(table = dep.table, column = dep.column, action = ?dep.action, affected, "Applied delete policy");
        match dep.action {
            OnDelete::Cascade => report.cascaded += affected,
            OnDelete::SetNull => report.nulled += affected,
            OnDelete::Restrict => {}
        }
    }

    sqlx::query(&delete_sql(policy))
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.kind() == DbErrorKind::ForeignKeyViolation => {
                AppError::conflict(format!("{} is still referenced", policy.entity))
            }
            _ => map_sqlx_error(e, &context),
        })?;

    tx.commit().await.map_err(|e| map_sqlx_error(e, &context))?;

    info!(
        entity = policy.entity,
        id = %id,
        cascaded = report.cascaded,
        nulled = report.nulled,
        "Deleted with policy"
    );
    Ok(report)
}
