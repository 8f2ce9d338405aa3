//! # Cross-Crate Flows
//!
//! End-to-end paths that cross crate boundaries: catalog → engine, engine
//! and aggregator over synthetic portfolios, the CLI handlers over files on
//! disk, and the API's stored-report routes agreeing with direct calls.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use csim_aggregate::{aggregate_portfolio, aggregate_report, RiskDistribution};
use csim_api::state::AppState;
use csim_cli::aggregate::{run_aggregate, AggregateArgs};
use csim_cli::output::OutputFormat;
use csim_cli::simulate::{run_simulate, SimulateArgs};
use csim_core::{ComplianceReport, Industry, SyntheticReportGenerator};
use csim_engine::{simulate, PredictiveAnalysis, SimulationError, Simulator};
use csim_scenario::list_scenarios;

// =========================================================================
// Catalog → engine
// =========================================================================

#[test]
fn every_listed_scenario_resolves_for_its_industry() {
    let mut generator = SyntheticReportGenerator::new(11);
    for industry in Industry::all() {
        let report = generator.next_report(*industry);
        for scenario in list_scenarios(*industry) {
            let analysis = simulate(&report, &scenario.id).unwrap();
            assert_eq!(analysis.scenario_id, scenario.id);
            assert_eq!(analysis.scenario_name, scenario.name);
        }
    }
}

#[test]
fn industry_specific_scenario_is_not_offered_elsewhere() {
    let report = SyntheticReportGenerator::new(5).next_report(Industry::Technology);
    let err = simulate(&report, "hipaa-audit-surge").unwrap_err();
    assert_eq!(
        err,
        SimulationError::ScenarioNotFound {
            scenario_id: "hipaa-audit-surge".into(),
            industry: Industry::Technology,
        }
    );
}

#[test]
fn synthetic_portfolio_is_reproducible_end_to_end() {
    let run = |seed: u64| -> (Vec<PredictiveAnalysis>, RiskDistribution) {
        let reports = SyntheticReportGenerator::new(seed).portfolio(12, Industry::Finance);
        let analyses = reports
            .iter()
            .map(|r| simulate(r, "pci-dss-v4-enforcement").unwrap())
            .collect();
        (analyses, aggregate_portfolio(&reports))
    };
    assert_eq!(run(99), run(99));
}

#[test]
fn simulation_does_not_change_aggregation() {
    let reports = SyntheticReportGenerator::new(21).portfolio(6, Industry::Healthcare);
    let before = aggregate_portfolio(&reports);
    let simulator = Simulator::new();
    for report in &reports {
        simulator.simulate(report, "multi-framework-overhaul").unwrap();
    }
    assert_eq!(aggregate_portfolio(&reports), before);
}

// =========================================================================
// CLI handlers over files
// =========================================================================

fn write_portfolio(dir: &std::path::Path, name: &str, reports: &[ComplianceReport]) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string(reports).unwrap()).unwrap();
    path
}

#[test]
fn cli_simulate_matches_engine() {
    let dir = tempfile::tempdir().unwrap();
    let reports = SyntheticReportGenerator::new(3).portfolio(3, Industry::Retail);
    let path = write_portfolio(dir.path(), "retail.json", &reports);

    let mut out = Vec::new();
    let args = SimulateArgs {
        report: path,
        scenario: Some("card-data-crackdown".into()),
        scenario_file: None,
    };
    assert_eq!(run_simulate(&args, OutputFormat::Json, &mut out).unwrap(), 0);

    let from_cli: Vec<PredictiveAnalysis> = serde_json::from_slice(&out).unwrap();
    let direct: Vec<PredictiveAnalysis> = reports
        .iter()
        .map(|r| simulate(r, "card-data-crackdown").unwrap())
        .collect();
    assert_eq!(from_cli, direct);
}

#[test]
fn cli_aggregate_matches_aggregator() {
    let dir = tempfile::tempdir().unwrap();
    let reports = SyntheticReportGenerator::new(8).portfolio(4, Industry::Technology);
    let path = write_portfolio(dir.path(), "tech.json", &reports);

    let mut out = Vec::new();
    let args = AggregateArgs { reports: vec![path] };
    run_aggregate(&args, OutputFormat::Json, &mut out).unwrap();

    let from_cli: RiskDistribution = serde_json::from_slice(&out).unwrap();
    assert_eq!(from_cli, aggregate_portfolio(&reports));
}

#[test]
fn cli_simulate_reports_invalid_report_as_domain_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.yaml");
    std::fs::write(&path, "id: bad\noverallScore: 50\ngdprScore: 50\nhipaaScore: 50\nindustry: Retail\n").unwrap();

    let mut out = Vec::new();
    let args = SimulateArgs {
        report: path,
        scenario: Some("gdpr-tightening".into()),
        scenario_file: None,
    };
    assert_eq!(run_simulate(&args, OutputFormat::Json, &mut out).unwrap(), 1);
}

// =========================================================================
// API agrees with direct calls
// =========================================================================

async fn call(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn stored_reports_match_direct_results() {
    let reports = SyntheticReportGenerator::new(17).portfolio(3, Industry::Healthcare);
    let state = AppState::new();
    for report in &reports {
        let id = report.id.clone().unwrap();
        state.reports.insert(id, report.clone());
    }
    let app = csim_api::app(state);
    let first_id = reports[0].id.clone().unwrap();

    let request = Request::builder()
        .method("POST")
        .uri(format!("/v1/reports/{first_id}/simulations"))
        .header("content-type", "application/json")
        .body(Body::from(r#"{"scenarioId":"hipaa-audit-surge"}"#))
        .unwrap();
    let (status, body) = call(app.clone(), request).await;
    assert_eq!(status, StatusCode::OK);
    let analysis: PredictiveAnalysis = serde_json::from_value(body).unwrap();
    assert_eq!(analysis, simulate(&reports[0], "hipaa-audit-surge").unwrap());

    let request = Request::builder()
        .uri(format!("/v1/reports/{first_id}/risk-distribution"))
        .body(Body::empty())
        .unwrap();
    let (status, body) = call(app.clone(), request).await;
    assert_eq!(status, StatusCode::OK);
    let distribution: RiskDistribution = serde_json::from_value(body).unwrap();
    assert_eq!(distribution, aggregate_report(&reports[0]));

    let request = Request::builder()
        .uri("/v1/portfolio/risk-distribution")
        .body(Body::empty())
        .unwrap();
    let (status, body) = call(app, request).await;
    assert_eq!(status, StatusCode::OK);
    let distribution: RiskDistribution = serde_json::from_value(body).unwrap();
    assert_eq!(distribution, aggregate_portfolio(&reports));
}
