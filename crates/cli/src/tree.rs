use crate::Format;
use deptree_api::{ParseDocument, SentenceParse};
use deptree_core::PipelineConfig;
use deptree_core::serialize::{json::SentenceSnapshot, to_dot};
use std::io::Read;
use std::path::Path;
use tracing::info;

pub fn run(input: &Path, format: Format, config: &PipelineConfig) -> anyhow::Result<()> {
    let document = read_document(input)?;
    let pipeline = deptree_runtime::build_default_pipeline(config)?;

    info!(
        "Processing {} sentence(s) from {}",
        document.sentences.len(),
        input.display()
    );

    let mut failed = 0;
    let mut snapshots = Vec::new();
    for (i, result) in pipeline.process_document(&document).into_iter().enumerate() {
        match result {
            Ok(tree) => match format {
                Format::Dot => println!("{}", to_dot(&tree)),
                Format::Json => snapshots.extend(SentenceSnapshot::capture(&tree)),
            },
            Err(e) => {
                failed += 1;
                eprintln!("sentence {}: {}", i, e);
            }
        }
    }

    if format == Format::Json {
        println!("{}", serde_json::to_string_pretty(&snapshots)?);
    }
    if failed > 0 {
        anyhow::bail!("{} of {} sentence(s) failed", failed, document.sentences.len());
    }
    Ok(())
}

/// Accept either a whole document or a bare sentence object; `-` reads stdin.
pub fn read_document(input: &Path) -> anyhow::Result<ParseDocument> {
    let raw = if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input)?
    };
    parse_document(&raw)
}

fn parse_document(raw: &str) -> anyhow::Result<ParseDocument> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if value.get("sentences").is_some() {
        Ok(serde_json::from_value(value)?)
    } else {
        let sentence: SentenceParse = serde_json::from_value(value)?;
        Ok(ParseDocument {
            sentences: vec![sentence],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_and_bare_sentence() {
        let doc = parse_document(r#"{"sentences": [{"text": "a"}, {"text": "b"}]}"#).unwrap();
        assert_eq!(doc.sentences.len(), 2);

        let single = parse_document(
            r#"{"text": "dogs bark", "indexeddependencies": [["root", "ROOT-0", "bark-2"]]}"#,
        )
        .unwrap();
        assert_eq!(single.sentences.len(), 1);
        assert_eq!(single.sentences[0].text, "dogs bark");
    }

    #[test]
    fn test_read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parse.json");
        std::fs::write(&path, r#"{"sentences": []}"#).unwrap();
        assert!(read_document(&path).unwrap().sentences.is_empty());
        assert!(read_document(&dir.path().join("missing.json")).is_err());
    }
}
