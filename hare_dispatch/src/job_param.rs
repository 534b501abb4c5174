use std::fmt::Display;

/// Visibility of a property on the job class, which decides how its name is mangled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParamKind {
    #[default]
    Public,
    Protected,
    Private,
}

impl Display for ParamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            ParamKind::Public => "public",
            ParamKind::Protected => "protected",
            ParamKind::Private => "private",
        };
        write!(f, "{}", str)
    }
}

/// Unknown labels are treated as public properties.
impl From<&str> for ParamKind {
    fn from(label: &str) -> Self {
        match label {
            "protected" => ParamKind::Protected,
            "private" => ParamKind::Private,
            _ => ParamKind::Public,
        }
    }
}

/// A string property set on the serialized job command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobParam {
    pub kind: ParamKind,
    pub name: String,
    pub value: String,
}

impl JobParam {
    pub fn new(kind: impl Into<ParamKind>, name: impl ToString, value: impl ToString) -> Self {
        Self {
            kind: kind.into(),
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn public(name: impl ToString, value: impl ToString) -> Self {
        Self::new(ParamKind::Public, name, value)
    }

    pub fn protected(name: impl ToString, value: impl ToString) -> Self {
        Self::new(ParamKind::Protected, name, value)
    }

    pub fn private(name: impl ToString, value: impl ToString) -> Self {
        Self::new(ParamKind::Private, name, value)
    }
}
