use crate::criteria::parse_criteria_str;
use crate::criteria::schema::CriteriaFile;
use crate::error::ShortlistError;

const AIRPORT_ASSISTANT_JSON: &str = include_str!("../../../../criteria/airport-assistant.json");
const FRONT_DESK_JSON: &str = include_str!("../../../../criteria/front-desk.json");

/// Available predefined criteria.
pub const PRESETS: &[&str] = &["airport-assistant", "front-desk"];

/// Preset used when neither a preset nor a criteria file is given.
pub const DEFAULT_PRESET: &str = "airport-assistant";

/// Load a predefined criteria configuration by name.
pub fn load_preset(name: &str) -> Result<CriteriaFile, ShortlistError> {
    match name {
        "airport-assistant" => parse_criteria_str(AIRPORT_ASSISTANT_JSON),
        "front-desk" => parse_criteria_str(FRONT_DESK_JSON),
        _ => Err(ShortlistError::Configuration(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::EligibilityCriteria;
    use crate::model::Grade;

    #[test]
    fn test_every_preset_loads() {
        for name in PRESETS {
            assert!(load_preset(name).is_ok(), "preset {name} failed to load");
        }
    }

    #[test]
    fn test_default_preset_matches_default_criteria() {
        let file = load_preset(DEFAULT_PRESET).unwrap();
        assert_eq!(file.criteria, EligibilityCriteria::default());
    }

    #[test]
    fn test_front_desk_requires_experience() {
        let file = load_preset("front-desk").unwrap();
        assert!(file.criteria.require_customer_service_experience());
        assert_eq!(file.criteria.min_ol_english_grade(), Grade::B);
    }

    #[test]
    fn test_unknown_preset() {
        assert!(load_preset("pilot").is_err());
    }
}
