use conversion_rater::input::read_rate_records;
use conversion_rater::records::ScoredRecord;
use conversion_rater::scoring::rates::ScoreRates;
use conversion_rater::scoring::score::ConversionScore;
use conversion_rater::scoring::summary::summarize;

#[test]
fn test_full_pipeline() {
    let rows = read_rate_records("tests/fixtures/sample_partners.csv")
        .expect("Failed to read fixture");
    assert_eq!(rows.len(), 6);

    let rates = ScoreRates::default();
    let scored: Vec<ScoredRecord> = rows
        .iter()
        .map(|r| ScoredRecord::from_rate(r.conversion_rate, &rates).with_partner(&r.partner_id))
        .collect();

    // One fixture row per tier, best to worst; 0.50 sits exactly on the
    // excellent cutoff and lands in high.
    let expected = [
        ConversionScore::Excellent,
        ConversionScore::High,
        ConversionScore::Good,
        ConversionScore::Average,
        ConversionScore::Low,
        ConversionScore::Unknown,
    ];
    for (record, want) in scored.iter().zip(expected) {
        assert_eq!(record.score, want, "{:?}", record.partner_id);
    }

    let summary = summarize(&scored);
    let json = serde_json::to_value(&summary).expect("Failed to serialize summary");
    assert_eq!(json["total"], 6);
    for tier in ["excellent", "high", "good", "average", "low", "unknown"] {
        assert_eq!(json["tiers"][tier]["count"], 1);
    }
}
