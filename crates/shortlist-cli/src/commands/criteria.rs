use shortlist_core::criteria::builtin;
use shortlist_core::criteria::EligibilityCriteria;
use shortlist_core::error::ShortlistError;
use std::path::Path;

pub fn list() -> Result<(), ShortlistError> {
    println!("Available predefined criteria:\n");
    for name in builtin::PRESETS {
        let file = builtin::load_preset(name)?;
        let version = match file.version.as_deref() {
            Some(v) => format!(" (v{v})"),
            None => String::new(),
        };
        let default_marker = if *name == builtin::DEFAULT_PRESET {
            " [default]"
        } else {
            ""
        };
        println!("  {:<18} {}{}{}", name, file.name, version, default_marker);
        if let Some(ref desc) = file.description {
            println!("                     {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str) -> Result<(), ShortlistError> {
    let file = builtin::load_preset(preset)?;

    match file.version.as_deref() {
        Some(v) => println!("{} (version {})\n", file.name, v),
        None => println!("{}\n", file.name),
    }
    if let Some(ref desc) = file.description {
        println!("{}\n", desc);
    }

    println!("A candidate is shortlisted only when every check passes.");
    println!("A field that could not be found in the résumé fails its check.\n");
    print_criteria(&file.criteria);
    Ok(())
}

pub fn print_criteria(c: &EligibilityCriteria) {
    println!(
        "  O/L English             {} or better",
        c.min_ol_english_grade()
    );
    println!(
        "  A/L General English     {} or better",
        c.min_al_english_grade()
    );
    println!(
        "  Customer service exp.   {}",
        if c.require_customer_service_experience() {
            "required"
        } else {
            "not required"
        }
    );
    println!("  Age                     {} to {}", c.min_age(), c.max_age());
    println!();
}

pub fn schema() -> Result<(), ShortlistError> {
    print!(
        r#"JSON Criteria Schema
====================

A criteria file names the thresholds a résumé has to meet to be
shortlisted. Pass it with `shortlist screen --criteria FILE`.

Top-level fields:
  name          (string, required)  Human-readable name of the role
  description   (string, optional)  What this configuration is for
  version       (string, optional)  Version identifier (e.g., "2024.1")
  criteria      (object, required)  Thresholds (see below)

Fields of "criteria":
  min_ol_english_grade
                (string, required)  Worst accepted O/L English grade.
                                    One of "A", "B", "C", "D" (A is best).
  min_al_english_grade
                (string, required)  Worst accepted A/L General English
                                    grade. One of "A", "B", "C", "D".
  require_customer_service_experience
                (bool, optional)    Require a customer-facing job in the
                                    résumé. Default: false.
  min_age       (integer, required) Youngest accepted age, {floor}-{ceiling}.
  max_age       (integer, required) Oldest accepted age, {floor}-{ceiling}.
                                    Must not be less than min_age.

Example:
{{
  "name": "Lounge staff",
  "description": "Premium lounge hosts, terminal 2",
  "version": "1.0",
  "criteria": {{
    "min_ol_english_grade": "B",
    "min_al_english_grade": "C",
    "require_customer_service_experience": true,
    "min_age": 21,
    "max_age": 35
  }}
}}
"#,
        floor = EligibilityCriteria::AGE_FLOOR,
        ceiling = EligibilityCriteria::AGE_CEILING,
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), ShortlistError> {
    let loaded = shortlist_core::criteria::load_criteria(file)?;

    println!("Criteria '{}' is valid.\n", loaded.name);
    print_criteria(&loaded.criteria);

    // Legal but worth pointing out.
    let c = &loaded.criteria;
    let mut warnings = Vec::new();
    if c.min_age() == c.max_age() {
        warnings.push(format!("only candidates aged exactly {} can pass", c.min_age()));
    }
    if loaded.description.is_none() {
        warnings.push("no description given".to_string());
    }
    if !warnings.is_empty() {
        println!("Warnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
