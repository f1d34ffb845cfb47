//! SQL statements for the region tables.
//!
//! Every statement selects one level joined up to the province, so each row
//! carries the full ancestor chain. Filters are appended as `AND` clauses and
//! every user value goes through `push_bind`.

use sqlx::{Postgres, QueryBuilder};

use crate::features::regions::models::RegionLevel;

/// Exact-code constraint on one ancestor level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestorFilter {
    pub level: RegionLevel,
    pub code: String,
}

/// Row selection for one level: optional name substring plus ancestor codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionFilter {
    level: RegionLevel,
    name: Option<String>,
    ancestors: Vec<AncestorFilter>,
}

impl RegionFilter {
    pub fn new(level: RegionLevel) -> Self {
        Self {
            level,
            name: None,
            ancestors: Vec::new(),
        }
    }

    /// Case-insensitive substring match on the level's name. Empty names are ignored.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string()).filter(|n| !n.is_empty());
        self
    }

    /// Restrict to rows under `code` at `level`.
    ///
    /// Levels that are not ancestors of the filtered level are ignored.
    pub fn with_ancestor(mut self, level: RegionLevel, code: &str) -> Self {
        if self.level.ancestors().contains(&level) {
            self.ancestors.retain(|a| a.level != level);
            self.ancestors.push(AncestorFilter {
                level,
                code: code.to_string(),
            });
            self.ancestors.sort_by_key(|a| a.level.ancestors().len());
        }
        self
    }

    pub fn with_optional_ancestor(self, level: RegionLevel, code: Option<&str>) -> Self {
        match code {
            Some(code) => self.with_ancestor(level, code),
            None => self,
        }
    }

    pub fn level(&self) -> RegionLevel {
        self.level
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn ancestors(&self) -> &[AncestorFilter] {
        &self.ancestors
    }

    /// True when every ancestor of the level is pinned to a code
    pub fn is_full_chain(&self) -> bool {
        self.ancestors.len() == self.level.ancestors().len()
    }

    /// `ILIKE` pattern matching the name as a literal substring
    pub fn like_pattern(&self) -> Option<String> {
        self.name.as_deref().map(|n| format!("%{}%", escape_like(n)))
    }

    /// `SELECT ... FROM <level> JOIN <ancestors> WHERE ... ORDER BY name`
    pub fn select_statement(&self) -> QueryBuilder<'static, Postgres> {
        let level = self.level;
        let mut builder = QueryBuilder::new("SELECT ");

        let chain = level.ancestors().iter().chain(std::iter::once(&level));
        let columns: Vec<String> = chain
            .map(|l| {
                format!(
                    "{alias}.{code} AS {prefix}_code, {alias}.{name} AS {prefix}_name",
                    alias = l.alias(),
                    code = l.code_column(),
                    name = l.name_column(),
                    prefix = record_prefix(*l),
                )
            })
            .collect();
        builder.push(columns.join(", "));

        builder.push(format!(" FROM {} {}", level.table(), level.alias()));

        let mut child = level;
        while let Some(parent) = child.parent() {
            builder.push(format!(
                " JOIN {table} {alias} ON {child_alias}.{code} = {alias}.{code}",
                table = parent.table(),
                alias = parent.alias(),
                child_alias = child.alias(),
                code = parent.code_column(),
            ));
            child = parent;
        }

        let mut keyword = " WHERE ";
        if let Some(pattern) = self.like_pattern() {
            builder.push(format!(
                "{}{}.{} ILIKE ",
                keyword,
                level.alias(),
                level.name_column()
            ));
            builder.push_bind(pattern);
            keyword = " AND ";
        }

        for ancestor in &self.ancestors {
            builder.push(format!(
                "{}{}.{} = ",
                keyword,
                ancestor.level.alias(),
                ancestor.level.code_column()
            ));
            builder.push_bind(ancestor.code.clone());
            keyword = " AND ";
        }

        builder.push(format!(
            " ORDER BY {alias}.{name}, {alias}.{code}",
            alias = level.alias(),
            name = level.name_column(),
            code = level.code_column(),
        ));

        builder
    }
}

/// Exact-code lookup returning the boundary as GeoJSON text.
///
/// Limited to two rows so a duplicated code is detectable without reading the table.
pub fn boundary_statement(level: RegionLevel, code: &str) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT {code} AS code, {name} AS name, ST_AsGeoJSON(geom) AS geometry FROM {table} WHERE {code} = ",
        code = level.code_column(),
        name = level.name_column(),
        table = level.table(),
    ));
    builder.push_bind(code.to_string());
    builder.push(" LIMIT 2");
    builder
}

/// Column prefix used by the record structs
fn record_prefix(level: RegionLevel) -> &'static str {
    match level {
        RegionLevel::Propinsi => "province",
        RegionLevel::Kabupaten => "regency",
        RegionLevel::Kecamatan => "district",
        RegionLevel::Kelurahan => "village",
    }
}

/// Escape LIKE metacharacters; backslash is the default escape in PostgreSQL.
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
