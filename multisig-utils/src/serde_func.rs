use serde::Deserialize;

pub fn serde_from_str<T: serde::de::DeserializeOwned>(value: &str) -> Result<T, crate::Error> {
    serde_json::from_str::<T>(value).map_err(|e| {
        crate::Error::Serde(crate::error::serde::SerdeError::Deserialize(format!(
            "error = {} value = {}",
            e, value
        )))
    })
}

pub fn serde_yaml_from_str<T: serde::de::DeserializeOwned>(value: &str) -> Result<T, crate::Error> {
    serde_yaml::from_str(value).map_err(|e| crate::Error::Serde(e.into()))
}

/// Indexers report some numeric fields either as numbers or as strings.
pub fn string_or_number_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

pub fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}
