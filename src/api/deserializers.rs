use serde::{Deserialize, Deserializer};

// web forms post numbers as strings, so accept "3" as well as 3
#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

impl IntOrString {
    fn into_int<E: serde::de::Error>(self) -> Result<i64, E> {
        match self {
            IntOrString::Int(n) => Ok(n),
            IntOrString::Str(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| E::custom(format!("expected an integer, got {:?}", s))),
        }
    }
}

pub fn deserialize_optional_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<IntOrString>::deserialize(deserializer)?
        .map(IntOrString::into_int)
        .transpose()
}

// the quiz page posts the whole category object, e.g. {"type": "Science", "id": "1"}
#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryRef {
    Id(IntOrString),
    Object { id: IntOrString },
}

pub fn deserialize_optional_category_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<CategoryRef>::deserialize(deserializer)? {
        None => Ok(None),
        Some(CategoryRef::Id(id)) | Some(CategoryRef::Object { id }) => id.into_int().map(Some),
    }
}
