use shortlist_core::error::ShortlistError;
use shortlist_core::parsing::keywords::{
    CaseSensitivity, KeywordRule, CUSTOMER_SERVICE_EXPERIENCE, ENGLISH_COMPETENCY,
    FEMALE_HONORIFICS, MALE_HONORIFICS, QUALIFICATION_VOCABULARY,
};
use shortlist_core::parsing::rules::{labeled_rules, CaptureShape, LabeledRule};

pub fn run() -> Result<(), ShortlistError> {
    println!("Labeled fields (first match in the document wins):\n");

    let rules = labeled_rules();
    let field_width = rules
        .iter()
        .map(|r| r.field().to_string().len())
        .max()
        .unwrap_or(10);
    let label_width = rules.iter().map(|r| r.def().label.len()).max().unwrap_or(10);

    println!(
        "  {:<fw$}  {:<lw$}  Captures",
        "Field",
        "Label",
        fw = field_width,
        lw = label_width
    );
    println!("  {}", "-".repeat(field_width + label_width + 40));
    for rule in rules {
        println!(
            "  {:<fw$}  {:<lw$}  {}",
            rule.field().to_string(),
            rule.def().label,
            describe_capture(rule.def().capture),
            fw = field_width,
            lw = label_width
        );
    }
    println!("\n  {}\n", line_break_note(rules));

    println!("Keyword markers (present anywhere in the text):\n");
    print_keywords("Female (checked first)", &FEMALE_HONORIFICS);
    print_keywords("Male", &MALE_HONORIFICS);
    print_keywords("English competency", &ENGLISH_COMPETENCY);
    print_keywords("Customer service", &CUSTOMER_SERVICE_EXPERIENCE);

    println!(
        "\nQualification vocabulary (case-insensitive, first-seen order): {}",
        QUALIFICATION_VOCABULARY.join(", ")
    );
    Ok(())
}

fn describe_capture(shape: CaptureShape) -> &'static str {
    match shape {
        CaptureShape::Grade => "standalone grade letter A-E",
        CaptureShape::IsoDate => "YYYY-MM-DD date",
        CaptureShape::LabelToEndOfLine => "label and rest of line",
        CaptureShape::AfterSeparator => "text after first ':' ',' or line break",
    }
}

/// Captures stay on the label's line, except after-separator fields whose
/// value may start on the next line.
fn line_break_note(rules: &[LabeledRule]) -> String {
    let spanning: Vec<String> = rules
        .iter()
        .filter(|r| r.def().capture == CaptureShape::AfterSeparator)
        .map(|r| r.field().to_string())
        .collect();
    if spanning.is_empty() {
        return "Labels match case-insensitively; captures stay on the label's line.".to_string();
    }
    format!(
        "Labels match case-insensitively; captures stay on the label's line, \
         except {} which may continue on the next line when the label ends its line.",
        spanning.join(", ")
    )
}

fn print_keywords(title: &str, rule: &KeywordRule) {
    let case = match rule.case {
        CaseSensitivity::Sensitive => "case-sensitive",
        CaseSensitivity::Insensitive => "case-insensitive",
    };
    println!("  {:<24} {:<18} {}", title, case, rule.markers.join(", "));
}

#[cfg(test)]
mod tests {
    use super::*;
    use shortlist_core::parsing::rules::LABELED_RULES;

    #[test]
    fn test_line_break_note_names_spanning_fields() {
        let rules = labeled_rules();
        let note = line_break_note(rules);
        let town = rules
            .iter()
            .find(|r| r.def().capture == CaptureShape::AfterSeparator)
            .unwrap();
        assert!(note.contains(&town.field().to_string()));
        assert!(note.contains("next line"));

        // The note agrees with the rule itself.
        let value = town.apply(&format!("{}\nNegombo", town.def().label));
        assert!(value.is_some());
    }

    #[test]
    fn test_line_break_note_without_spanning_fields() {
        let rules: Vec<LabeledRule> = LABELED_RULES
            .iter()
            .filter(|def| def.capture != CaptureShape::AfterSeparator)
            .map(|def| LabeledRule::compile(*def).unwrap())
            .collect();
        assert!(!line_break_note(&rules).contains("next line"));
    }
}
