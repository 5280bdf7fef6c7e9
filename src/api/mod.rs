mod export;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::{Json, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::{Parser, ValueEnum, error::ErrorKind};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::core::{
    BenchmarkRecord, BenchmarkSeries, GrowthRates, MAX_PROJECTION_YEARS, PriceSeries,
    ProjectionConfig, Report, Session, SimulationConfig, YearRecord, data, sanitize_amount,
};

pub use export::{ledger_to_csv, projection_to_csv};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Json,
    LedgerCsv,
    ProjectionCsv,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    fn value(&self) -> f64 {
        match self {
            RawAmount::Number(v) => *v,
            RawAmount::Text(raw) => sanitize_amount(raw),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
enum ScheduleOp {
    Set {
        year: i32,
        amount: RawAmount,
    },
    #[serde(rename_all = "camelCase")]
    ApplyForward {
        from_year: i32,
        amount: RawAmount,
    },
    Clear,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SimulatePayload {
    match_rate: Option<f64>,
    vesting_period: Option<i64>,
    projection_years: Option<u32>,
    conservative_rate: Option<f64>,
    base_rate: Option<f64>,
    aggressive_rate: Option<f64>,
    contributions: Option<String>,
    operations: Option<Vec<ScheduleOp>>,
}

#[derive(Parser, Debug)]
#[command(
    name = "matchvest",
    about = "Employee stock purchase simulator with deferred employer match and benchmark comparison"
)]
struct Cli {
    #[arg(
        long = "contribution",
        value_name = "YEAR=AMOUNT",
        help = "Contribution for one year; repeatable"
    )]
    contributions: Vec<String>,
    #[arg(
        long = "apply-forward",
        value_name = "YEAR=AMOUNT",
        help = "Set AMOUNT for YEAR and every later year; applied after --contribution"
    )]
    apply_forward: Vec<String>,
    #[arg(
        long,
        default_value_t = 25.0,
        help = "Employer match in percent of each contribution"
    )]
    match_rate: f64,
    #[arg(
        long,
        default_value_t = 5,
        help = "Years between a contribution and the vesting of its match"
    )]
    vesting_period: u32,
    #[arg(long, default_value_t = 10, help = "Years to project past the last simulated year")]
    projection_years: u32,
    #[arg(long, default_value_t = 4.0, help = "Conservative annual growth in percent")]
    conservative_rate: f64,
    #[arg(long, default_value_t = 7.0, help = "Base annual growth in percent")]
    base_rate: f64,
    #[arg(long, default_value_t = 10.0, help = "Aggressive annual growth in percent")]
    aggressive_rate: f64,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[derive(Debug, Clone)]
struct Inputs {
    simulation: SimulationConfig,
    projection: ProjectionConfig,
    operations: Vec<ScheduleOp>,
    format: OutputFormat,
}

#[derive(Clone)]
struct AppState {
    prices: Arc<PriceSeries>,
    benchmark: Arc<BenchmarkSeries>,
}

impl AppState {
    fn from_built_in_data() -> Result<Self, String> {
        let prices = data::default_price_series().map_err(|e| e.to_string())?;
        let benchmark = data::default_benchmark_series().map_err(|e| e.to_string())?;
        Ok(Self {
            prices: Arc::new(prices),
            benchmark: Arc::new(benchmark),
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContributionView {
    year: i32,
    amount: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SimulateResponse {
    match_rate: f64,
    vesting_period: u32,
    projection_years: u32,
    rates: GrowthRates,
    contributions: Vec<ContributionView>,
    #[serde(flatten)]
    report: Report,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SeriesResponse<'a> {
    prices: &'a [YearRecord],
    benchmark: &'a [BenchmarkRecord],
    default_match_rate: f64,
    default_vesting_period: u32,
    default_projection_years: u32,
    default_rates: GrowthRates,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn parse_year_amount(raw: &str, separator: char) -> Result<(i32, String), String> {
    let (year, amount) = raw
        .split_once(separator)
        .ok_or_else(|| format!("expected YEAR{separator}AMOUNT, got '{raw}'"))?;
    let year = year
        .trim()
        .parse::<i32>()
        .map_err(|_| format!("invalid year in '{raw}'"))?;
    Ok((year, amount.trim().to_string()))
}

fn parse_contribution_list(raw: &str) -> Result<Vec<ScheduleOp>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            let (year, amount) = parse_year_amount(item, ':')?;
            Ok(ScheduleOp::Set {
                year,
                amount: RawAmount::Text(amount),
            })
        })
        .collect()
}

fn build_inputs(cli: Cli) -> Result<Inputs, String> {
    if !cli.match_rate.is_finite() || !(0.0..=100.0).contains(&cli.match_rate) {
        return Err("--match-rate must be between 0 and 100".to_string());
    }

    if cli.vesting_period == 0 {
        return Err("--vesting-period must be >= 1".to_string());
    }

    if cli.projection_years > MAX_PROJECTION_YEARS {
        return Err(format!("--projection-years must be <= {MAX_PROJECTION_YEARS}"));
    }

    for (name, rate) in [
        ("--conservative-rate", cli.conservative_rate),
        ("--base-rate", cli.base_rate),
        ("--aggressive-rate", cli.aggressive_rate),
    ] {
        if !rate.is_finite() || rate <= -100.0 {
            return Err(format!("{name} must be > -100"));
        }
    }

    let simulation = SimulationConfig::new(cli.match_rate / 100.0, cli.vesting_period)
        .map_err(|e| e.to_string())?;
    let rates = GrowthRates::new(
        cli.conservative_rate / 100.0,
        cli.base_rate / 100.0,
        cli.aggressive_rate / 100.0,
    )
    .map_err(|e| e.to_string())?;

    let mut operations = Vec::with_capacity(cli.contributions.len() + cli.apply_forward.len());
    for raw in &cli.contributions {
        let (year, amount) =
            parse_year_amount(raw, '=').map_err(|e| format!("--contribution: {e}"))?;
        operations.push(ScheduleOp::Set {
            year,
            amount: RawAmount::Text(amount),
        });
    }
    for raw in &cli.apply_forward {
        let (from_year, amount) =
            parse_year_amount(raw, '=').map_err(|e| format!("--apply-forward: {e}"))?;
        operations.push(ScheduleOp::ApplyForward {
            from_year,
            amount: RawAmount::Text(amount),
        });
    }

    Ok(Inputs {
        simulation,
        projection: ProjectionConfig {
            horizon_years: cli.projection_years,
            rates,
        },
        operations,
        format: cli.format,
    })
}

fn build_session(state: &AppState, inputs: &Inputs) -> Result<Session, String> {
    let mut session = Session::new(Arc::clone(&state.prices), Arc::clone(&state.benchmark));
    session.simulation = inputs.simulation;
    session.projection = inputs.projection;

    let schedule = session.schedule_mut();
    for op in &inputs.operations {
        match op {
            ScheduleOp::Set { year, amount } => {
                if !schedule.contains(*year) {
                    return Err(format!("year {year} has no stock price"));
                }
                schedule.set(*year, amount.value());
            }
            ScheduleOp::ApplyForward { from_year, amount } => {
                schedule.apply_forward(*from_year, amount.value());
            }
            ScheduleOp::Clear => schedule.clear(),
        }
    }

    Ok(session)
}

fn build_simulate_response(session: &Session, report: Report) -> SimulateResponse {
    SimulateResponse {
        match_rate: session.simulation.match_rate,
        vesting_period: session.simulation.vesting_period,
        projection_years: session.projection.horizon_years,
        rates: session.projection.rates,
        contributions: session
            .schedule()
            .iter()
            .map(|(year, amount)| ContributionView { year, amount })
            .collect(),
        report,
    }
}

pub fn run_cli<I, T>(args: I) -> Result<String, String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return Ok(e.to_string());
        }
        Err(e) => return Err(e.to_string()),
    };
    let inputs = build_inputs(cli)?;
    let state = AppState::from_built_in_data()?;
    let session = build_session(&state, &inputs)?;
    let report = session.recompute();

    match inputs.format {
        OutputFormat::Json => {
            let response = build_simulate_response(&session, report);
            serde_json::to_string_pretty(&response).map_err(|e| e.to_string())
        }
        OutputFormat::LedgerCsv => ledger_to_csv(&report.ledger),
        OutputFormat::ProjectionCsv => projection_to_csv(&report.projection),
    }
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let state = AppState::from_built_in_data()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/api/series", get(series_handler))
        .route(
            "/api/simulate",
            get(simulate_get_handler).post(simulate_post_handler),
        )
        .route(
            "/api/export/ledger.csv",
            get(ledger_csv_get_handler).post(ledger_csv_post_handler),
        )
        .route(
            "/api/export/projection.csv",
            get(projection_csv_get_handler).post(projection_csv_post_handler),
        )
        .fallback(not_found_handler)
        .with_state(state);

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "matchvest HTTP API listening");
    info!("local access: http://127.0.0.1:{port}/api/simulate");

    axum::serve(listener, app).await
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn series_handler(State(state): State<AppState>) -> Response {
    let defaults = ProjectionConfig::default();
    json_response(
        StatusCode::OK,
        SeriesResponse {
            prices: state.prices.records(),
            benchmark: state.benchmark.records(),
            default_match_rate: SimulationConfig::default().match_rate,
            default_vesting_period: SimulationConfig::default().vesting_period,
            default_projection_years: defaults.horizon_years,
            default_rates: defaults.rates,
        },
    )
}

async fn simulate_get_handler(
    State(state): State<AppState>,
    Query(payload): Query<SimulatePayload>,
) -> Response {
    simulate_handler_impl(&state, payload)
}

async fn simulate_post_handler(
    State(state): State<AppState>,
    Json(payload): Json<SimulatePayload>,
) -> Response {
    simulate_handler_impl(&state, payload)
}

async fn ledger_csv_get_handler(
    State(state): State<AppState>,
    Query(payload): Query<SimulatePayload>,
) -> Response {
    csv_handler_impl(&state, payload, CsvKind::Ledger)
}

async fn ledger_csv_post_handler(
    State(state): State<AppState>,
    Json(payload): Json<SimulatePayload>,
) -> Response {
    csv_handler_impl(&state, payload, CsvKind::Ledger)
}

async fn projection_csv_get_handler(
    State(state): State<AppState>,
    Query(payload): Query<SimulatePayload>,
) -> Response {
    csv_handler_impl(&state, payload, CsvKind::Projection)
}

async fn projection_csv_post_handler(
    State(state): State<AppState>,
    Json(payload): Json<SimulatePayload>,
) -> Response {
    csv_handler_impl(&state, payload, CsvKind::Projection)
}

fn simulate_handler_impl(state: &AppState, payload: SimulatePayload) -> Response {
    let session = match session_from_payload(state, payload) {
        Ok(session) => session,
        Err(msg) => return bad_request(&msg),
    };
    let report = session.recompute();
    json_response(StatusCode::OK, build_simulate_response(&session, report))
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum CsvKind {
    Ledger,
    Projection,
}

fn csv_handler_impl(state: &AppState, payload: SimulatePayload, kind: CsvKind) -> Response {
    let session = match session_from_payload(state, payload) {
        Ok(session) => session,
        Err(msg) => return bad_request(&msg),
    };
    let report = session.recompute();
    let (filename, body) = match kind {
        CsvKind::Ledger => ("ledger.csv", ledger_to_csv(&report.ledger)),
        CsvKind::Projection => ("projection.csv", projection_to_csv(&report.projection)),
    };
    let body = match body {
        Ok(body) => body,
        Err(msg) => {
            error!(error = %msg, "csv export failed");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, &msg);
        }
    };
    with_cache_control((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    ))
}

fn session_from_payload(state: &AppState, payload: SimulatePayload) -> Result<Session, String> {
    let inputs = inputs_from_payload(payload)?;
    build_session(state, &inputs)
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    with_cache_control((status, Json(body)))
}

fn bad_request(msg: &str) -> Response {
    warn!(error = msg, "rejected simulation request");
    error_response(StatusCode::BAD_REQUEST, msg)
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn inputs_from_json(json: &str) -> Result<Inputs, String> {
    let payload = serde_json::from_str::<SimulatePayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    inputs_from_payload(payload)
}

fn inputs_from_payload(payload: SimulatePayload) -> Result<Inputs, String> {
    let mut cli = default_cli_for_api();

    if let Some(v) = payload.projection_years {
        cli.projection_years = v;
    }
    if let Some(v) = payload.conservative_rate {
        cli.conservative_rate = v;
    }
    if let Some(v) = payload.base_rate {
        cli.base_rate = v;
    }
    if let Some(v) = payload.aggressive_rate {
        cli.aggressive_rate = v;
    }

    let mut inputs = build_inputs(cli)?;
    inputs
        .simulation
        .apply_update(payload.match_rate, payload.vesting_period)
        .map_err(|e| e.to_string())?;
    if let Some(raw) = payload.contributions.as_deref() {
        inputs
            .operations
            .extend(parse_contribution_list(raw).map_err(|e| format!("contributions: {e}"))?);
    }
    if let Some(ops) = payload.operations {
        inputs.operations.extend(ops);
    }

    Ok(inputs)
}

fn default_cli_for_api() -> Cli {
    Cli {
        contributions: Vec::new(),
        apply_forward: Vec::new(),
        match_rate: 25.0,
        vesting_period: 5,
        projection_years: 10,
        conservative_rate: 4.0,
        base_rate: 7.0,
        aggressive_rate: 10.0,
        format: OutputFormat::Json,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn sample_cli() -> Cli {
        default_cli_for_api()
    }

    fn state() -> AppState {
        AppState::from_built_in_data().expect("built-in data is valid")
    }

    #[test]
    fn default_cli_matches_clap_defaults() {
        let parsed = Cli::parse_from(["matchvest"]);
        let defaults = sample_cli();
        assert_eq!(parsed.match_rate, defaults.match_rate);
        assert_eq!(parsed.vesting_period, defaults.vesting_period);
        assert_eq!(parsed.projection_years, defaults.projection_years);
        assert_eq!(parsed.base_rate, defaults.base_rate);
        assert_eq!(parsed.format, defaults.format);
    }

    #[test]
    fn build_inputs_converts_percentages() {
        let mut cli = sample_cli();
        cli.match_rate = 50.0;
        cli.conservative_rate = 3.0;

        let inputs = build_inputs(cli).expect("valid inputs");
        assert_approx(inputs.simulation.match_rate, 0.5);
        assert_approx(inputs.projection.rates.conservative, 0.03);
        assert_approx(inputs.projection.rates.aggressive, 0.10);
    }

    #[test]
    fn build_inputs_rejects_match_rate_above_hundred() {
        let mut cli = sample_cli();
        cli.match_rate = 120.0;
        let err = build_inputs(cli).expect_err("must reject match rate > 100");
        assert!(err.contains("--match-rate"));
    }

    #[test]
    fn build_inputs_rejects_zero_vesting_period() {
        let mut cli = sample_cli();
        cli.vesting_period = 0;
        let err = build_inputs(cli).expect_err("must reject zero vesting");
        assert!(err.contains("--vesting-period"));
    }

    #[test]
    fn build_inputs_rejects_total_loss_growth_rate() {
        let mut cli = sample_cli();
        cli.aggressive_rate = -100.0;
        let err = build_inputs(cli).expect_err("must reject -100% growth");
        assert!(err.contains("--aggressive-rate"));
    }

    #[test]
    fn build_inputs_parses_contribution_flags() {
        let cli = Cli::parse_from([
            "matchvest",
            "--contribution",
            "2012=$10,000",
            "--apply-forward",
            "2020=500",
        ]);
        let inputs = build_inputs(cli).expect("valid inputs");
        let session = build_session(&state(), &inputs).expect("valid session");

        assert_eq!(session.schedule().get(2012), 10_000.0);
        assert_eq!(session.schedule().get(2019), 0.0);
        assert_eq!(session.schedule().get(2023), 500.0);
    }

    #[test]
    fn build_inputs_rejects_malformed_contribution_flag() {
        let mut cli = sample_cli();
        cli.contributions = vec!["2012:100".to_string()];
        let err = build_inputs(cli).expect_err("must reject missing '='");
        assert!(err.contains("--contribution"));
    }

    #[test]
    fn inputs_from_json_parses_web_keys_and_operations() {
        let json = r#"{
          "matchRate": 50,
          "vestingPeriod": 3,
          "projectionYears": 4,
          "baseRate": 5,
          "operations": [
            { "op": "applyForward", "fromYear": 2012, "amount": 1000 },
            { "op": "clear" },
            { "op": "set", "year": 2013, "amount": "$2,500" },
            { "op": "set", "year": 2014, "amount": "oops" }
          ]
        }"#;
        let inputs = inputs_from_json(json).expect("json should parse");

        assert_approx(inputs.simulation.match_rate, 0.5);
        assert_eq!(inputs.simulation.vesting_period, 3);
        assert_eq!(inputs.projection.horizon_years, 4);
        assert_approx(inputs.projection.rates.base, 0.05);
        assert_eq!(inputs.operations.len(), 4);
        assert_eq!(inputs.operations[1], ScheduleOp::Clear);

        let session = build_session(&state(), &inputs).expect("valid session");
        assert_eq!(session.schedule().get(2012), 0.0);
        assert_eq!(session.schedule().get(2013), 2_500.0);
        assert_eq!(session.schedule().get(2014), 0.0);
        assert_eq!(session.schedule().total(), 2_500.0);
    }

    #[test]
    fn contributions_query_string_becomes_set_operations() {
        let json = r#"{ "contributions": "2012:10000, 2015:750" }"#;
        let inputs = inputs_from_json(json).expect("json should parse");
        let session = build_session(&state(), &inputs).expect("valid session");

        assert_eq!(session.schedule().get(2012), 10_000.0);
        assert_eq!(session.schedule().get(2015), 750.0);
        assert_eq!(session.schedule().total(), 10_750.0);
    }

    #[test]
    fn set_for_year_without_price_is_rejected() {
        let json = r#"{ "contributions": "1999:100" }"#;
        let inputs = inputs_from_json(json).expect("json should parse");
        let err = build_session(&state(), &inputs).expect_err("must reject unknown year");
        assert!(err.contains("1999"));
    }

    #[test]
    fn simulate_response_serialization_contains_expected_fields() {
        let json = r#"{ "contributions": "2012:10000" }"#;
        let inputs = inputs_from_json(json).expect("json should parse");
        let session = build_session(&state(), &inputs).expect("valid session");
        let response = build_simulate_response(&session, session.recompute());

        let json = serde_json::to_string(&response).expect("response should serialize");
        assert!(json.contains("\"matchRate\""));
        assert!(json.contains("\"vestingPeriod\""));
        assert!(json.contains("\"ledger\""));
        assert!(json.contains("\"cumulativeMatchShares\""));
        assert!(json.contains("\"benchmarkValue\""));
        assert!(json.contains("\"summary\""));
        assert!(json.contains("\"roiPercent\""));
        assert!(json.contains("\"projection\""));
        assert!(json.contains("\"conservativeValue\""));
        assert!(json.contains("\"finalPosition\""));
        assert!(json.contains("\"cumulativeInvested\""));
    }

    #[test]
    fn run_cli_emits_ledger_csv() {
        let out = run_cli([
            "matchvest",
            "--contribution",
            "2012=10000",
            "--format",
            "ledger-csv",
        ])
        .expect("cli run");

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 13);
        assert!(lines[0].starts_with("year,unitPrice,contributionThisYear,"));

        let first: Vec<f64> = lines[1]
            .split(',')
            .map(|v| v.parse().expect("numeric field"))
            .collect();
        assert_eq!(first.len(), 13);
        assert_eq!(first[0], 2012.0);
        assert_approx(first[1], 4.46);
        assert_approx(first[2], 10_000.0);
        assert_approx(first[3], 10_000.0);
        assert!(lines[12].starts_with("2023,"));
    }

    #[test]
    fn run_cli_projection_csv_starts_at_last_simulated_year() {
        let out = run_cli([
            "matchvest",
            "--projection-years",
            "2",
            "--format",
            "projection-csv",
        ])
        .expect("cli run");

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        for (line, year) in [(lines[1], 2023.0), (lines[3], 2025.0)] {
            let values: Vec<f64> = line
                .split(',')
                .map(|v| v.parse().expect("numeric field"))
                .collect();
            assert_eq!(values, [year, 0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn run_cli_returns_error_for_unknown_flag() {
        let err = run_cli(["matchvest", "--no-such-flag"]).expect_err("must reject unknown flag");
        assert!(err.contains("--no-such-flag"));
    }

    #[test]
    fn run_cli_prints_help_instead_of_failing() {
        let out = run_cli(["matchvest", "--help"]).expect("help is not an error");
        assert!(out.contains("--vesting-period"));
    }

    #[test]
    fn run_cli_returns_error_for_non_numeric_match_rate() {
        let err = run_cli(["matchvest", "--match-rate", "lots"]).expect_err("must reject text");
        assert!(err.contains("--match-rate"));
    }

    #[test]
    fn build_inputs_rejects_projection_years_above_cap() {
        let mut cli = sample_cli();
        cli.projection_years = MAX_PROJECTION_YEARS + 1;
        let err = build_inputs(cli).expect_err("must reject oversized horizon");
        assert!(err.contains("--projection-years"));

        let mut cli = sample_cli();
        cli.projection_years = MAX_PROJECTION_YEARS;
        assert!(build_inputs(cli).is_ok());
    }

    #[test]
    fn oversized_projection_years_payload_is_rejected() {
        let json = r#"{ "projectionYears": 4294967295 }"#;
        let err = inputs_from_json(json).expect_err("must reject u32::MAX horizon");
        assert!(err.contains("--projection-years"));
    }

    #[test]
    fn negative_vesting_period_payload_is_rejected() {
        let json = r#"{ "matchRate": 50, "vestingPeriod": -2 }"#;
        let err = inputs_from_json(json).expect_err("must reject negative vesting");
        assert!(err.contains("vesting period"));
    }

    #[test]
    fn match_rate_above_hundred_percent_payload_is_rejected() {
        let json = r#"{ "matchRate": 150 }"#;
        let err = inputs_from_json(json).expect_err("must reject match rate > 100%");
        assert!(err.contains("match rate"));
    }
}
