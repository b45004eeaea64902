use idfold_io::batch::{compact_lines, BatchReport, FoldSpec};
use idfold_io::json;
use idfold_io::prelude::*;

const INPUT: &str = "91837cf5-ac35-4b6c-a67a-0845eabb3091\n\n  91837cf5-ac35-4b6c-a67a-0845eabb30911  \n";

#[test]
fn batch_report_minified_golden() -> anyhow::Result<()> {
    let spec = FoldSpec::Uuid(UuidWidth::Hex16);
    let report = BatchReport::new(spec, compact_lines(INPUT, spec));

    let s = json::to_minified_json(&report)?;
    assert_eq!(
        s,
        r#"{"v":1,"alg":1,"mode":"uuid16","failed":1,"records":[{"input":"91837cf5-ac35-4b6c-a67a-0845eabb3091","output":"37f974b0468e7bfd"},{"input":"91837cf5-ac35-4b6c-a67a-0845eabb30911","error":{"code":"invalid_uuid","message":"invalid uuid: expected 32 hex characters after removing '-', got 33"}}]}"#
    );
    Ok(())
}

#[test]
fn batch_report_round_trips_through_json() -> anyhow::Result<()> {
    let spec = FoldSpec::Hex(6);
    let report = BatchReport::new(spec, compact_lines("5f28eb526ffc3d5051ad2fd5\n5f28", spec));

    let back: BatchReport = serde_json::from_str(&json::to_pretty_json(&report)?)?;
    assert_eq!(back, report);
    assert_eq!(back.mode, "fold6");
    assert_eq!(back.records[0].output.as_deref(), Some("9d3893"));
    assert_eq!(
        back.records[1].error.as_ref().map(|e| e.code),
        Some(FoldErrorCode::NotADivisor)
    );
    Ok(())
}
