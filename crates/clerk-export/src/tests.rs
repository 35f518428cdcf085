//! Integration tests for the exporters

#[cfg(test)]
mod tests {
    use crate::{
        export, export_with_provenance, uniquify, ExportError, ExportFormat, ExportOptions,
        Provenance, DISCLOSURE, DISCLOSURE_KEY, GENERATION_INFO_KEY,
    };
    use clerk_domain::{
        AssembledBrief, BriefField, GENERIC_ERROR_SENTINEL, HALLUCINATION_SENTINEL,
    };
    use std::fs;
    use tempfile::TempDir;

    const STAMP: &str = "May 17, 1954 at 12:52 PM (-05:00)";

    fn brief_with(overrides: &[(usize, &str)]) -> AssembledBrief {
        let mut values: [String; 15] = [
            "Brown v. Board of Education",
            "347 U.S. 483",
            "1954-05-17",
            "1",
            "Supreme Court of the United States",
            "https://www.courtlistener.com/opinion/105221/brown-v-board-of-education/",
            "Warren",
            "Consolidated appeals from district courts.",
            "Robert L. Carter, Thurgood Marshall",
            "Black children were denied admission\nto public schools attended by white children.",
            "Does segregation of public schools deprive minority children of equal protection?",
            "Separate educational facilities are inherently unequal.",
            "Yes. Segregation generates a feeling of inferiority.",
            "Reversed.",
            "None.",
        ]
        .map(String::from);
        for (index, value) in overrides {
            values[*index] = value.to_string();
        }
        AssembledBrief::from_values(values)
    }

    fn write(brief: &AssembledBrief, format: ExportFormat, dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join(format!("brief.{}", format));
        export_with_provenance(
            brief,
            format,
            &path,
            &ExportOptions::default(),
            &Provenance::at(STAMP),
        )
        .unwrap();
        path
    }

    #[test]
    fn test_json_round_trip_adds_exactly_two_fields() {
        let dir = TempDir::new().unwrap();
        let brief = brief_with(&[]);
        let path = write(&brief, ExportFormat::Json, &dir);

        let parsed: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.len(), brief.len() + 2);

        for (field, value) in brief.iter() {
            assert_eq!(parsed[field.title()], value);
        }
        assert_eq!(
            parsed[GENERATION_INFO_KEY],
            format!("Generated using LexEmetica Clerk on {}", STAMP)
        );
        assert_eq!(parsed[DISCLOSURE_KEY], DISCLOSURE);

        // insertion order survives, provenance last
        let keys: Vec<_> = parsed.keys().map(String::as_str).collect();
        assert_eq!(keys[0], "Case Name");
        assert_eq!(keys[14], "Dissent");
        assert_eq!(&keys[15..], &[GENERATION_INFO_KEY, DISCLOSURE_KEY]);
    }

    #[test]
    fn test_txt_layout() {
        let dir = TempDir::new().unwrap();
        let brief = brief_with(&[]);
        let text = fs::read_to_string(write(&brief, ExportFormat::Txt, &dir)).unwrap();

        assert!(text.starts_with("Case Name:\nBrown v. Board of Education\n\nCitation:\n347 U.S. 483\n\n"));
        assert!(text.contains(
            "Facts:\nBlack children were denied admission\nto public schools attended by white children.\n\n"
        ));
        assert!(text.contains(&format!(
            "Dissent:\nNone.\n\nGeneration Info:\nGenerated using LexEmetica Clerk on {}\n\nDisclosure:\n",
            STAMP
        )));
        assert!(text.ends_with(&format!("{}\n", DISCLOSURE)));
    }

    #[test]
    fn test_pdf_written() {
        let dir = TempDir::new().unwrap();
        let path = write(&brief_with(&[]), ExportFormat::Pdf, &dir);
        let bytes = fs::read(path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_sentinel_blocks_every_format() {
        let dir = TempDir::new().unwrap();
        let cases = [
            brief_with(&[(9, HALLUCINATION_SENTINEL)]),
            brief_with(&[(6, GENERIC_ERROR_SENTINEL)]),
        ];

        for brief in &cases {
            for format in [ExportFormat::Json, ExportFormat::Txt, ExportFormat::Pdf] {
                let path = dir.path().join(format!("gated.{}", format));
                let err = export(brief, format, &path, &ExportOptions::default()).unwrap_err();
                assert!(matches!(err, ExportError::Rejected { .. }));
                assert!(!path.exists(), "{} was written", path.display());
            }
        }
    }

    #[test]
    fn test_rejection_names_fields() {
        let dir = TempDir::new().unwrap();
        let brief = brief_with(&[(13, GENERIC_ERROR_SENTINEL), (14, GENERIC_ERROR_SENTINEL)]);
        let err = export(
            &brief,
            ExportFormat::Json,
            &dir.path().join("x.json"),
            &ExportOptions::default(),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Refusing to export a brief with errors in: Disposition, Dissent"
        );
        assert_eq!(
            brief.sentinel_fields()[0],
            BriefField::Section(clerk_domain::Section::Disposition)
        );
    }

    #[test]
    fn test_missing_logo_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("brief.pdf");
        let options = ExportOptions {
            logo_path: Some(dir.path().join("no-such-logo.png")),
        };
        let err = export(&brief_with(&[]), ExportFormat::Pdf, &path, &options).unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_uniquified_export_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        let existing = dir.path().join("brief.json");
        fs::write(&existing, "keep me").unwrap();

        let target = uniquify(&existing);
        export(&brief_with(&[]), ExportFormat::Json, &target, &ExportOptions::default()).unwrap();

        assert_eq!(target, dir.path().join("brief (1).json"));
        assert_eq!(fs::read_to_string(&existing).unwrap(), "keep me");
        assert!(target.exists());
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(ExportFormat::parse("PDF"), Some(ExportFormat::Pdf));
        assert_eq!("txt".parse::<ExportFormat>().unwrap(), ExportFormat::Txt);
        assert!(matches!(
            "docx".parse::<ExportFormat>(),
            Err(ExportError::UnsupportedFormat(_))
        ));
    }
}
