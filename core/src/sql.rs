use compact_str::{CompactString, ToCompactString};
use smallvec::{SmallVec, smallvec};

use crate::column::Column;

/// A value bound to a positional placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SQLValue {
    Real(f64),
    Text(CompactString),
}

impl From<f64> for SQLValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<&str> for SQLValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_compact_string())
    }
}

impl From<CompactString> for SQLValue {
    fn from(value: CompactString) -> Self {
        Self::Text(value)
    }
}

/// A SQL chunk represents a part of an SQL statement.
#[derive(Debug, Clone, PartialEq)]
pub enum SQLChunk {
    Text(CompactString),
    Param(SQLValue),
    /// A column reference that renders with its table qualification
    Column(Column),
    /// An alias wrapping any SQL chunk: "chunk AS alias"
    Alias {
        chunk: Box<SQLChunk>,
        alias: CompactString,
    },
    SQL(Box<SQL>),
}

impl SQLChunk {
    /// Write chunk to buffer
    pub(crate) fn write_to_buffer(&self, buf: &mut CompactString) {
        match self {
            SQLChunk::Text(text) => buf.push_str(text),
            SQLChunk::Param(_) => buf.push('?'),
            SQLChunk::Column(column) => {
                if !column.table().is_empty() {
                    buf.push('"');
                    buf.push_str(column.table());
                    buf.push_str(r#"".""#);
                } else {
                    buf.push('"');
                }
                buf.push_str(column.name());
                buf.push('"');
            }
            SQLChunk::Alias { chunk, alias } => {
                chunk.write_to_buffer(buf);
                buf.push_str(" AS ");
                buf.push_str(alias);
            }
            SQLChunk::SQL(sql) => sql.write_sql(buf),
        }
    }

    fn ends_word(&self) -> bool {
        match self {
            SQLChunk::Text(t) => {
                let last = t.chars().last().unwrap_or(' ');
                !last.is_whitespace() && !['(', '.'].contains(&last)
            }
            SQLChunk::SQL(sql) => sql.chunks.last().is_some_and(SQLChunk::ends_word),
            SQLChunk::Param(_) | SQLChunk::Column(_) | SQLChunk::Alias { .. } => true,
        }
    }

    fn starts_word(&self) -> bool {
        match self {
            SQLChunk::Text(t) => {
                let first = t.chars().next().unwrap_or(' ');
                !first.is_whitespace() && ![',', ')', ';', '.'].contains(&first)
            }
            SQLChunk::SQL(sql) => sql.chunks.first().is_some_and(SQLChunk::starts_word),
            SQLChunk::Param(_) | SQLChunk::Column(_) | SQLChunk::Alias { .. } => true,
        }
    }

    fn is_blank(&self) -> bool {
        match self {
            SQLChunk::Text(t) => t.is_empty(),
            SQLChunk::SQL(sql) => sql.is_empty(),
            _ => false,
        }
    }
}

/// A SQL fragment with parameters.
///
/// Fragments are handed back to the caller's query layer; this type only
/// keeps the text and the parameters in binding order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SQL {
    /// The chunks that make up this SQL fragment.
    pub chunks: SmallVec<[SQLChunk; 3]>,
}

impl SQL {
    /// Creates a new empty SQL fragment.
    pub const fn empty() -> Self {
        SQL {
            chunks: SmallVec::new_const(),
        }
    }

    /// Creates a new SQL fragment from a raw string.
    ///
    /// The string is treated as literal SQL text, not a parameter.
    pub fn raw<T: AsRef<str>>(sql: T) -> Self {
        Self {
            chunks: smallvec![SQLChunk::Text(sql.as_ref().to_compact_string())],
        }
    }

    /// Creates a TRUE SQL fragment
    pub fn r#true() -> Self {
        Self::raw("TRUE")
    }

    /// Creates a FALSE SQL fragment
    pub fn r#false() -> Self {
        Self::raw("FALSE")
    }

    /// Creates a positional parameter ('?') carrying `value`.
    pub fn parameter(value: impl Into<SQLValue>) -> Self {
        Self {
            chunks: smallvec![SQLChunk::Param(value.into())],
        }
    }

    pub fn column(column: Column) -> Self {
        Self {
            chunks: smallvec![SQLChunk::Column(column)],
        }
    }

    /// Appends a raw string to this SQL fragment.
    pub fn append_raw(mut self, sql: impl AsRef<str>) -> Self {
        self.chunks
            .push(SQLChunk::Text(sql.as_ref().to_compact_string()));
        self
    }

    /// Appends another SQL fragment to this one.
    pub fn append(mut self, other: impl ToSQL) -> Self {
        self.chunks.extend(other.to_sql().chunks);
        self
    }

    /// Joins fragments with `separator`, skipping nothing.
    pub fn join<T>(sqls: T, separator: &'static str) -> SQL
    where
        T: IntoIterator,
        T::Item: ToSQL,
    {
        let mut chunks = SmallVec::new();
        for (i, sql) in sqls.into_iter().enumerate() {
            if i > 0 {
                chunks.push(SQLChunk::Text(CompactString::const_new(separator)));
            }
            chunks.extend(sql.to_sql().chunks);
        }
        SQL { chunks }
    }

    /// Wraps this fragment in parentheses
    pub fn parens(self) -> SQL {
        SQL::raw("(").append(self).append_raw(")")
    }

    /// Function call: `NAME(args)`
    pub fn func(name: &str, args: impl ToSQL) -> SQL {
        SQL::raw(format!("{name}(")).append(args).append_raw(")")
    }

    /// Creates an aliased version of this SQL: "sql AS alias"
    pub fn alias(self, alias: impl Into<CompactString>) -> SQL {
        SQL {
            chunks: smallvec![SQLChunk::Alias {
                chunk: Box::new(SQLChunk::SQL(Box::new(self))),
                alias: alias.into(),
            }],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.iter().all(SQLChunk::is_blank)
    }

    /// Renders the SQL text, parameters as `?`.
    pub fn sql(&self) -> String {
        let mut buf = CompactString::with_capacity(self.chunks.len() * 8);
        self.write_sql(&mut buf);
        buf.into()
    }

    fn write_sql(&self, buf: &mut CompactString) {
        let visible: SmallVec<[&SQLChunk; 8]> =
            self.chunks.iter().filter(|c| !c.is_blank()).collect();
        for (i, chunk) in visible.iter().enumerate() {
            chunk.write_to_buffer(buf);
            if let Some(next) = visible.get(i + 1)
                && chunk.ends_word()
                && next.starts_word()
            {
                buf.push(' ');
            }
        }
    }

    /// Returns references to parameter values in binding order.
    pub fn params(&self) -> Vec<&SQLValue> {
        let mut params = Vec::new();
        for chunk in &self.chunks {
            Self::collect_chunk_params(chunk, &mut params);
        }
        params
    }

    fn collect_chunk_params<'s>(chunk: &'s SQLChunk, params: &mut Vec<&'s SQLValue>) {
        match chunk {
            SQLChunk::Param(value) => params.push(value),
            SQLChunk::SQL(sql) => {
                for inner in &sql.chunks {
                    Self::collect_chunk_params(inner, params);
                }
            }
            SQLChunk::Alias { chunk, .. } => Self::collect_chunk_params(chunk, params),
            SQLChunk::Text(_) | SQLChunk::Column(_) => {}
        }
    }
}

impl std::fmt::Display for SQL {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.sql())
    }
}

/// Anything that can be rendered into a [`SQL`] fragment.
pub trait ToSQL {
    fn to_sql(&self) -> SQL;
}

impl ToSQL for SQL {
    fn to_sql(&self) -> SQL {
        self.clone()
    }
}

impl ToSQL for SQLValue {
    fn to_sql(&self) -> SQL {
        SQL::parameter(self.clone())
    }
}

impl<T: ToSQL + ?Sized> ToSQL for &T {
    fn to_sql(&self) -> SQL {
        (**self).to_sql()
    }
}
