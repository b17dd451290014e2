use std::fmt;

/// The value a command hands back to its caller.
///
/// Replies mirror the shapes a Redis client sees, but are rendered as plain
/// text for the interactive shell instead of being framed for the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    SimpleString(String),
    BulkString(String),
    Integer(i64),
    Boolean(bool),
    Array(Vec<Reply>),
    Null,
}

impl Reply {
    pub fn ok() -> Self {
        Reply::SimpleString("OK".to_string())
    }

    pub fn from_option(value: Option<String>) -> Self {
        match value {
            Some(s) => Reply::BulkString(s),
            None => Reply::Null,
        }
    }

    pub fn from_strings(values: Vec<String>) -> Self {
        Reply::Array(values.into_iter().map(Reply::BulkString).collect())
    }

    /// Renders the reply the way redis-cli prints it.
    ///
    /// Array elements are numbered from 1; an empty array prints
    /// `(empty array)`.
    pub fn render(&self) -> String {
        match self {
            Reply::SimpleString(s) => s.clone(),
            Reply::BulkString(s) => format!("\"{}\"", s),
            Reply::Integer(i) => format!("(integer) {}", i),
            Reply::Boolean(b) => b.to_string(),
            Reply::Null => "(nil)".to_string(),
            Reply::Array(elements) => {
                if elements.is_empty() {
                    return "(empty array)".to_string();
                }

                elements
                    .iter()
                    .enumerate()
                    .map(|(index, element)| format!("{}) {}", index + 1, element.render()))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
