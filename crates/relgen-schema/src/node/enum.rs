use serde::Serialize;

///
/// EnumDef
///

#[derive(Clone, Debug, Serialize)]
pub struct EnumDef {
    pub name: String,
    pub values: Vec<String>,
}

impl EnumDef {
    #[must_use]
    pub fn new(name: &str, values: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            values: values.iter().map(ToString::to_string).collect(),
        }
    }
}
