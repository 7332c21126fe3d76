use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub features: Vec<String>,
    pub class: String,
}

impl Record {
    /// Splits the last field off as the class label.
    pub fn from_fields(mut fields: Vec<String>) -> Result<Self> {
        let width = fields.len();
        match fields.pop() {
            Some(class) if !fields.is_empty() => Ok(Record {
                features: fields,
                class,
            }),
            _ => Err(Error::NarrowHeader(width)),
        }
    }

    pub fn without_feature(&self, index: usize) -> Self {
        let mut features = self.features.clone();
        features.remove(index);
        Record {
            features,
            class: self.class.clone(),
        }
    }
}
