use errors::DatasetError;

/// The closed set of column layouts a split file can have. Only the
/// two-column user/item layout is wired up at the moment; rating ("UIR"),
/// time ("UIT") and rating+time ("UIRT") carrying layouts are reserved
/// extension points and rejected by `parse` until they grow semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSchema {
    UserItem,
}

impl ColumnSchema {

    pub fn parse(selector: &str) -> Result<ColumnSchema, DatasetError> {
        match selector {
            "UI" => Ok(ColumnSchema::UserItem),
            _ => Err(DatasetError::UnknownSchema(selector.to_string())),
        }
    }

    /// Names of the active columns, in file order.
    pub fn columns(&self) -> &'static [&'static str] {
        match *self {
            ColumnSchema::UserItem => &["user", "item"],
        }
    }
}
