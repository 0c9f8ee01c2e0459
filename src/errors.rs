use std::fmt;

#[derive(Debug, Clone)]
pub enum LinksyError {
    Validation(String),
    NotFound(String),
    Exhausted(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    FileOperation(String),
    Serialization(String),
}

impl LinksyError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LinksyError::Validation(_) => "E001",
            LinksyError::NotFound(_) => "E002",
            LinksyError::Exhausted(_) => "E003",
            LinksyError::DatabaseConfig(_) => "E004",
            LinksyError::DatabaseConnection(_) => "E005",
            LinksyError::DatabaseOperation(_) => "E006",
            LinksyError::FileOperation(_) => "E007",
            LinksyError::Serialization(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LinksyError::Validation(_) => "Validation Error",
            LinksyError::NotFound(_) => "Resource Not Found",
            LinksyError::Exhausted(_) => "Probe Budget Exhausted",
            LinksyError::DatabaseConfig(_) => "Database Configuration Error",
            LinksyError::DatabaseConnection(_) => "Database Connection Error",
            LinksyError::DatabaseOperation(_) => "Database Operation Error",
            LinksyError::FileOperation(_) => "File Operation Error",
            LinksyError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LinksyError::Validation(msg)
            | LinksyError::NotFound(msg)
            | LinksyError::Exhausted(msg)
            | LinksyError::DatabaseConfig(msg)
            | LinksyError::DatabaseConnection(msg)
            | LinksyError::DatabaseOperation(msg)
            | LinksyError::FileOperation(msg)
            | LinksyError::Serialization(msg) => msg,
        }
    }

    /// Transport or storage-layer failure, surfaced to callers unmodified.
    pub fn is_store_error(&self) -> bool {
        matches!(
            self,
            LinksyError::DatabaseConfig(_)
                | LinksyError::DatabaseConnection(_)
                | LinksyError::DatabaseOperation(_)
        )
    }

    /// 格式化为彩色输出（用于 Server 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LinksyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinksyError {}

// 便捷的构造函数
impl LinksyError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LinksyError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        LinksyError::NotFound(msg.into())
    }

    pub fn exhausted<T: Into<String>>(msg: T) -> Self {
        LinksyError::Exhausted(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        LinksyError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        LinksyError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        LinksyError::DatabaseOperation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        LinksyError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LinksyError::Serialization(msg.into())
    }
}

impl From<sea_orm::DbErr> for LinksyError {
    fn from(err: sea_orm::DbErr) -> Self {
        LinksyError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for LinksyError {
    fn from(err: std::io::Error) -> Self {
        LinksyError::FileOperation(err.to_string())
    }
}

impl From<toml::ser::Error> for LinksyError {
    fn from(err: toml::ser::Error) -> Self {
        LinksyError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinksyError>;
