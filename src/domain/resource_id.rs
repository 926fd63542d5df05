use std::fmt;

/// An identifier token as it is sent to the API, either in a path
/// segment or as a query value.
///
/// `Raw` carries tokens that are not numbers at all, such as `"a"` or `"!"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceId {
    Numeric(i64),
    Raw(&'static str),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Numeric(id) => write!(f, "{}", id),
            ResourceId::Raw(token) => f.write_str(token),
        }
    }
}

impl From<i64> for ResourceId {
    fn from(id: i64) -> Self {
        ResourceId::Numeric(id)
    }
}

impl From<&'static str> for ResourceId {
    fn from(token: &'static str) -> Self {
        ResourceId::Raw(token)
    }
}
