use thiserror::Error;

pub type CompileResult<T> = Result<T, CompileError>;

/// Errors that abort request compilation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error(
        "Nested tables are not supported (table inside cell {row_index},{column_index} of the table at {table_start_index})"
    )]
    NestedTable {
        table_start_index: usize,
        row_index: usize,
        column_index: usize,
    },

    #[error("Inline object '{object_id}' not found")]
    MissingResource { object_id: String },

    #[error("Inline object '{object_id}' has no content URI")]
    MissingContentUri { object_id: String },

    #[error(
        "Table at {table_start_index} declares cell {row_index},{column_index} but does not contain it"
    )]
    MissingCell {
        table_start_index: usize,
        row_index: usize,
        column_index: usize,
    },
}

impl CompileError {
    pub fn missing_resource(object_id: impl Into<String>) -> Self {
        Self::MissingResource {
            object_id: object_id.into(),
        }
    }

    pub fn missing_content_uri(object_id: impl Into<String>) -> Self {
        Self::MissingContentUri {
            object_id: object_id.into(),
        }
    }
}
