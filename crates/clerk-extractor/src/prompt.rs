//! LLM prompt engineering for brief extraction

use clerk_domain::{Section, WritingMode};

/// Builds the extraction prompt for one opinion
pub struct PromptBuilder<'a> {
    text: &'a str,
    case_name: &'a str,
    citation: &'a str,
    mode: WritingMode,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(text: &'a str, case_name: &'a str, citation: &'a str, mode: WritingMode) -> Self {
        Self {
            text,
            case_name,
            citation,
            mode,
        }
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Role and subject
        prompt.push_str(ROLE);
        prompt.push_str("\n\n");
        prompt.push_str(&format!(
            "The following is the full text of the U.S. Supreme Court opinion in **{}, {}**, \
             a real and specific legal case.\n\n",
            self.case_name, self.citation
        ));

        // 2. Required sections
        prompt.push_str(
            "Analyze *only* this opinion and extract the following six sections. \
             Refer to the actual events, rulings, and reasoning in this case only:\n\n",
        );
        for section in Section::ALL {
            prompt.push_str(&format!("- {}\n", section.title()));
        }
        prompt.push('\n');

        // 3. Register and length
        prompt.push_str(self.mode_instructions());
        prompt.push_str("\n\n");

        // 4. Output shape
        prompt.push_str("Respond in JSON format like:\n\n");
        prompt.push_str(&json_template());
        prompt.push_str("\n\n");

        // 5. Grounding and citations
        prompt.push_str(VERIFICATION_RULES);
        prompt.push_str("\n\n");
        prompt.push_str(PAGE_CITATION_RULE);
        prompt.push_str("\n\n");
        prompt.push_str(&format!(
            "All content must remain strictly specific to **{}**, {}.\n\n",
            self.case_name, self.citation
        ));

        // 6. The opinion itself
        prompt.push_str("Court Opinion:\n");
        prompt.push_str(self.text);
        prompt.push('\n');

        prompt
    }

    fn mode_instructions(&self) -> &'static str {
        match self.mode {
            WritingMode::Student => STUDENT_INSTRUCTIONS,
            WritingMode::Professional => PROFESSIONAL_INSTRUCTIONS,
        }
    }
}

fn json_template() -> String {
    let body: Vec<String> = Section::ALL
        .iter()
        .map(|s| format!("    \"{}\": \"...\"", s.title()))
        .collect();
    format!("{{\n{}\n}}", body.join(",\n"))
}

const ROLE: &str = "You are LexEmetica Clerk, a legal writing assistant.";

const STUDENT_INSTRUCTIONS: &str = "Use clear, accessible legal language and explain each \
section in 4-6 sentences. Include examples or analogies where helpful to aid comprehension.";

const PROFESSIONAL_INSTRUCTIONS: &str = "Use formal, detailed legal writing. Provide 3-5 \
sentences per section using precise legal terminology, with references to relevant facts, \
doctrines, or precedent when appropriate.";

const VERIFICATION_RULES: &str = r#"Before returning your final answer, verify every section strictly against the court opinion provided below. Do not rely on general legal knowledge or assumptions.

Quality checks:
- Cross-check all extracted facts and holdings directly against the opinion text.
- Only cite constitutional provisions, doctrines, and precedents the text itself mentions.
- Do not fabricate names, case titles, or outcomes; use only entities named in the opinion.
- Attribute dissenting justices correctly and never to the majority.
- Do not generalize beyond this specific case.
- Do not include interpretations or reasoning absent from the opinion.
- Prefer the court's own wording wherever possible.
- If you are uncertain whether a statement is accurate, omit it entirely.
- If a section fails verification, rewrite only that section."#;

const PAGE_CITATION_RULE: &str = "After each section, include a parenthetical indicating the \
page number from the opinion text, such as (Page 440), to help the reader locate the source. \
Page markers appear in the text as [Page N].";
