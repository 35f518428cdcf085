//! Delimited plain-text encoding

use crate::provenance::{Provenance, DISCLOSURE_KEY, GENERATION_INFO_KEY};
use clerk_domain::AssembledBrief;
use std::fmt::Write;

/// `"<name>:\n<value>\n\n"` per field, then the provenance blocks
pub fn render(brief: &AssembledBrief, provenance: &Provenance) -> String {
    let mut out = String::new();
    for (field, value) in brief.iter() {
        let _ = write!(out, "{}:\n{}\n\n", field.title(), value);
    }
    let _ = write!(
        out,
        "{}:\n{}\n\n{}:\n{}\n",
        GENERATION_INFO_KEY,
        provenance.generation_note(),
        DISCLOSURE_KEY,
        provenance.disclosure()
    );
    out
}
