//! # Employee Repository
//!
//! SQLite implementation of [`EmployeeRepository`].
//!
//! ## Name Lookup Styles
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 find_by_name_using(first, last, style)                  │
//! │                                                                         │
//! │                    positional params      named params                  │
//! │                   ─────────────────     ─────────────────               │
//! │  mapped columns   MappedPositional      MappedNamed                     │
//! │  (id, first_name,  ?1, ?2                :first_name, :last_name        │
//! │   last_name,...)                                                        │
//! │                                                                         │
//! │  native select    NativePositional      NativeNamed                     │
//! │  (SELECT * FROM    ?, ?                  :firstName, :lastName          │
//! │   employees e)                                                          │
//! │                                                                         │
//! │  Same rows for the same inputs. find_by_name = MappedPositional.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! SQLite's driver binds by position only, so named placeholders are
//! rewritten to numbered ones (`:first_name` → `?1`) before the query is
//! prepared.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::EmployeeRepository;
use roster_core::Employee;

/// Column projection shared by the mapped queries.
const EMPLOYEE_COLUMNS: &str = "id, first_name, last_name, email";

/// Query style for a name lookup.
///
/// All variants return the same employee for the same inputs; they differ
/// only in how the SQL is written and how parameters are bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameQuery {
    /// Explicit column list, numbered parameters.
    MappedPositional,
    /// Explicit column list, named parameters.
    MappedNamed,
    /// `SELECT *` over an aliased table, anonymous parameters.
    NativePositional,
    /// `SELECT *` over an aliased table, named parameters.
    NativeNamed,
}

impl NameQuery {
    /// Every style, for callers that want to compare them.
    pub const ALL: [NameQuery; 4] = [
        NameQuery::MappedPositional,
        NameQuery::MappedNamed,
        NameQuery::NativePositional,
        NameQuery::NativeNamed,
    ];

    /// SQL text as written, before named placeholders are rewritten.
    pub fn sql(self) -> &'static str {
        match self {
            NameQuery::MappedPositional => {
                "SELECT id, first_name, last_name, email FROM employees \
                 WHERE first_name = ?1 AND last_name = ?2 ORDER BY id LIMIT 1"
            }
            NameQuery::MappedNamed => {
                "SELECT id, first_name, last_name, email FROM employees \
                 WHERE first_name = :first_name AND last_name = :last_name ORDER BY id LIMIT 1"
            }
            NameQuery::NativePositional => {
                "SELECT * FROM employees e \
                 WHERE e.first_name = ? AND e.last_name = ? ORDER BY e.id LIMIT 1"
            }
            NameQuery::NativeNamed => {
                "SELECT * FROM employees e \
                 WHERE e.first_name = :firstName AND e.last_name = :lastName ORDER BY e.id LIMIT 1"
            }
        }
    }

    /// Parameter names in binding order, for the named styles.
    fn parameter_names(self) -> Option<[&'static str; 2]> {
        match self {
            NameQuery::MappedNamed => Some(["first_name", "last_name"]),
            NameQuery::NativeNamed => Some(["firstName", "lastName"]),
            NameQuery::MappedPositional | NameQuery::NativePositional => None,
        }
    }

    /// SQL ready to prepare: named placeholders replaced by `?N`.
    fn prepared_sql(self) -> DbResult<String> {
        match self.parameter_names() {
            Some(names) => bind_names_to_positions(self.sql(), &names),
            None => Ok(self.sql().to_string()),
        }
    }
}

/// Rewrites `:name` placeholders to `?N`, where `N` is the 1-based position
/// of `name` in `names`. Text inside single-quoted literals is left alone.
///
/// ## Errors
/// `DbError::QueryFailed` if the SQL uses a name not listed in `names`.
fn bind_names_to_positions(sql: &str, names: &[&str]) -> DbResult<String> {
    let mut out = String::with_capacity(sql.len());
    let mut chars = sql.char_indices().peekable();
    let mut in_literal = false;

    while let Some((i, c)) = chars.next() {
        if c == '\'' {
            in_literal = !in_literal;
            out.push(c);
            continue;
        }

        let starts_name = matches!(
            chars.peek(),
            Some((_, next)) if next.is_ascii_alphabetic() || *next == '_'
        );
        if in_literal || c != ':' || !starts_name {
            out.push(c);
            continue;
        }

        let start = i + 1;
        let mut end = start;
        while let Some(&(j, next)) = chars.peek() {
            if next.is_ascii_alphanumeric() || next == '_' {
                end = j + next.len_utf8();
                chars.next();
            } else {
                break;
            }
        }

        let name = &sql[start..end];
        let position = names
            .iter()
            .position(|candidate| *candidate == name)
            .ok_or_else(|| DbError::QueryFailed(format!("unbound parameter :{}", name)))?;
        out.push('?');
        out.push_str(&(position + 1).to_string());
    }

    Ok(out)
}

/// Attaches the offending email to a unique violation.
fn with_email(err: sqlx::Error, email: &str) -> DbError {
    match DbError::from(err) {
        DbError::UniqueViolation { field, .. } => DbError::duplicate(field, email),
        other => other,
    }
}

/// Repository for employee database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = SqliteEmployeeRepository::new(pool);
///
/// let saved = repo.save(Employee::new("Bruno", "Oliveira", "bruno@bruno")).await?;
/// let same = repo.find_by_name_using("Bruno", "Oliveira", NameQuery::NativeNamed).await?;
/// ```
#[derive(Debug, Clone)]
pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl SqliteEmployeeRepository {
    /// Creates a new SqliteEmployeeRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SqliteEmployeeRepository { pool }
    }

    /// Finds an employee by exact first and last name using the given query style.
    pub async fn find_by_name_using(
        &self,
        first_name: &str,
        last_name: &str,
        style: NameQuery,
    ) -> DbResult<Option<Employee>> {
        debug!(first_name = %first_name, last_name = %last_name, ?style, "Finding employee by name");

        let sql = style.prepared_sql()?;
        let employee = sqlx::query_as::<_, Employee>(&sql)
            .bind(first_name)
            .bind(last_name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(employee)
    }

    async fn insert(&self, employee: Employee) -> DbResult<Employee> {
        debug!(email = %employee.email, "Inserting employee");

        let result = sqlx::query(
            "INSERT INTO employees (first_name, last_name, email) VALUES (?1, ?2, ?3)",
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .execute(&self.pool)
        .await
        .map_err(|e| with_email(e, &employee.email))?;

        let id = result.last_insert_rowid();
        debug!(id, "Employee inserted");

        Ok(employee.with_id(id))
    }

    async fn update(&self, id: i64, employee: Employee) -> DbResult<Employee> {
        debug!(id, email = %employee.email, "Updating employee");

        let result = sqlx::query(
            "UPDATE employees SET first_name = ?2, last_name = ?3, email = ?4 WHERE id = ?1",
        )
        .bind(id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .execute(&self.pool)
        .await
        .map_err(|e| with_email(e, &employee.email))?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Employee", id));
        }

        Ok(employee)
    }
}

#[async_trait]
impl EmployeeRepository for SqliteEmployeeRepository {
    async fn save(&self, employee: Employee) -> DbResult<Employee> {
        match employee.id {
            None => self.insert(employee).await,
            Some(id) => self.update(id, employee).await,
        }
    }

    async fn find_all(&self) -> DbResult<Vec<Employee>> {
        let sql = format!("SELECT {} FROM employees ORDER BY id", EMPLOYEE_COLUMNS);
        let employees = sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = employees.len(), "Listed employees");
        Ok(employees)
    }

    async fn find_by_id(&self, id: i64) -> DbResult<Option<Employee>> {
        let sql = format!("SELECT {} FROM employees WHERE id = ?1", EMPLOYEE_COLUMNS);
        let employee = sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(employee)
    }

    async fn delete_by_id(&self, id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(id, deleted = result.rows_affected(), "Deleted employee");
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> DbResult<Option<Employee>> {
        let sql = format!("SELECT {} FROM employees WHERE email = ?1", EMPLOYEE_COLUMNS);
        let employee = sqlx::query_as::<_, Employee>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(employee)
    }

    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> DbResult<Option<Employee>> {
        self.find_by_name_using(first_name, last_name, NameQuery::MappedPositional)
            .await
    }

    async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
