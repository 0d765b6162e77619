//! Parsing helpers shared across command handlers.

use std::io::Read;

use anyhow::Context;
use serde::de::DeserializeOwned;

use delta_core::enums::{CoreElective, Semester};

/// Read a JSON payload from `file`, or stdin when omitted.
pub fn read_json_payload<T: DeserializeOwned>(file: Option<&str>) -> anyhow::Result<T> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read payload file '{path}'"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read payload from stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("payload is not valid JSON for this command")
}

/// Map an optional CLI value onto a clearable update field: an empty string
/// clears the stored value, absence leaves it untouched.
pub fn clearable(value: Option<String>) -> Option<Option<String>> {
    value.map(|v| if v.is_empty() { None } else { Some(v) })
}

pub fn parse_semester(value: &str) -> anyhow::Result<Semester> {
    match value {
        "autumn" => Ok(Semester::Autumn),
        "spring" => Ok(Semester::Spring),
        "year_long" => Ok(Semester::YearLong),
        other => anyhow::bail!("unknown semester '{other}' (expected autumn, spring, or year_long)"),
    }
}

pub fn parse_core(value: &str) -> anyhow::Result<CoreElective> {
    match value {
        "core" => Ok(CoreElective::Core),
        "elective" => Ok(CoreElective::Elective),
        other => anyhow::bail!("unknown core/elective value '{other}' (expected core or elective)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clearable_maps_empty_to_clear() {
        assert_eq!(clearable(None), None);
        assert_eq!(clearable(Some(String::new())), Some(None));
        assert_eq!(
            clearable(Some("School of CS".to_string())),
            Some(Some("School of CS".to_string()))
        );
    }

    #[test]
    fn semester_parsing_covers_all_values() {
        assert_eq!(parse_semester("autumn").unwrap(), Semester::Autumn);
        assert_eq!(parse_semester("spring").unwrap(), Semester::Spring);
        assert_eq!(parse_semester("year_long").unwrap(), Semester::YearLong);
        assert!(parse_semester("summer").is_err());
    }

    #[test]
    fn payload_reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.json");
        std::fs::write(&path, r#"{"answers":{"0_0":4}}"#).unwrap();
        let value: serde_json::Value =
            read_json_payload(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(value["answers"]["0_0"], 4);
    }
}
